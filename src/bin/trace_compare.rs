//! 多个 trace 的指标对比
//!
//! 每个 trace 输出一行关键指标（TSV 到 stdout，可选 JSON）。无法读取或为空的 trace
//! 记为指标缺省的一行，不中断其余文件。

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ns_trace_rs::cli::{AnalysisArgs, CliError, init_tracing};
use ns_trace_rs::metrics::MetricsEngine;
use ns_trace_rs::report::TraceSummaryRow;
use ns_trace_rs::trace::load_trace;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "trace-compare", about = "Compare key metrics across several NS2 traces")]
struct Args {
    /// Trace files to compare
    #[arg(required = true)]
    traces: Vec<PathBuf>,

    /// Also write the rows as a JSON array
    #[arg(long)]
    json: Option<PathBuf>,

    /// Run metric reducers on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    #[command(flatten)]
    analysis: AnalysisArgs,
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn summarize(
    engine: &MetricsEngine,
    path: &Path,
    parallel: bool,
) -> Result<TraceSummaryRow, CliError> {
    let parsed = load_trace(path)?.require_events()?;
    let report = if parallel {
        engine.run_parallel(&parsed.events)?
    } else {
        engine.run(&parsed.events)?
    };
    Ok(TraceSummaryRow::from_report(file_label(path), &report))
}

fn run(args: Args) -> Result<(), CliError> {
    let engine = MetricsEngine::new(args.analysis.resolve()?)?;

    let mut rows = Vec::with_capacity(args.traces.len());
    for path in &args.traces {
        info!(trace = %path.display(), "处理 trace");
        let row = match summarize(&engine, path, args.parallel) {
            Ok(row) => row,
            Err(err) => {
                warn!(trace = %path.display(), error = %err, "跳过该 trace 的指标");
                TraceSummaryRow::unavailable(file_label(path))
            }
        };
        rows.push(row);
    }

    println!("{}", TraceSummaryRow::tsv_header());
    for row in &rows {
        println!("{}", row.to_tsv());
    }

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&rows)?;
        fs::write(path, json).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), rows = rows.len(), "写出对比 JSON");
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "对比失败");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
