//! 单个 trace 的性能分析
//!
//! 解析 trace，计算全部指标，输出文本摘要（以及可选的 JSON 报告）。

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ns_trace_rs::cli::{AnalysisArgs, CliError, init_tracing};
use ns_trace_rs::metrics::MetricsEngine;
use ns_trace_rs::report::SummaryText;
use ns_trace_rs::trace::load_trace;
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "trace-analyzer",
    about = "Compute throughput, loss, delay and queueing metrics from an NS2 trace"
)]
struct Args {
    /// Path to the trace file
    #[arg(long)]
    trace: PathBuf,

    /// Write the text summary here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the full report as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Run metric reducers on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Produce an (all-default) report for a trace without events instead of failing
    #[arg(long)]
    allow_empty: bool,

    #[command(flatten)]
    analysis: AnalysisArgs,
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let config = args.analysis.resolve()?;
    let engine = MetricsEngine::new(config)?;

    let parsed = load_trace(&args.trace)?;
    let parsed = if args.allow_empty {
        if parsed.is_empty() {
            warn!(trace = %args.trace.display(), "trace 中没有事件，输出默认值报告");
        }
        parsed
    } else {
        parsed.require_events()?
    };

    let report = if args.parallel {
        engine.run_parallel(&parsed.events)?
    } else {
        engine.run(&parsed.events)?
    };

    let summary = SummaryText(&report).to_string();
    match &args.output {
        Some(path) => {
            write_file(path, &summary)?;
            info!(path = %path.display(), "写出统计摘要");
        }
        None => print!("{summary}"),
    }

    if let Some(path) = &args.report_json {
        let json = serde_json::to_string_pretty(&report)?;
        write_file(path, &json)?;
        info!(path = %path.display(), "写出 JSON 报告");
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "分析失败");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
