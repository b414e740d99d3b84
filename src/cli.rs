//! 命令行公用部分
//!
//! 两个二进制共享的分析参数、错误类型与 tracing 初始化。

use std::fs;
use std::path::PathBuf;

use clap::Args;
use thiserror::Error;

use crate::metrics::{AnalysisConfig, ConfigError};
use crate::report::AnalysisError;
use crate::trace::{NodeId, TraceError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Trace(#[from] TraceError),
    #[error("invalid analysis config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialize json: {0}")]
    Json(#[from] serde_json::Error),
}

/// 分析参数：先读 `--config`，再用单独的命令行参数覆盖
#[derive(Debug, Clone, Default, Args)]
pub struct AnalysisArgs {
    /// Analysis config JSON (all fields optional)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Throughput bucket width in seconds
    #[arg(long)]
    pub interval: Option<f64>,

    /// Node whose enqueues count as packet sends for end-to-end delay
    #[arg(long)]
    pub source_node: Option<u32>,

    /// Node whose receives count as deliveries for end-to-end delay
    #[arg(long)]
    pub destination_node: Option<u32>,

    /// Packet type counted as data traffic (repeatable); everything else is control overhead
    #[arg(long = "data-type")]
    pub data_types: Vec<String>,

    /// Number of bins in the delay histogram
    #[arg(long)]
    pub histogram_bins: Option<usize>,
}

impl AnalysisArgs {
    pub fn resolve(&self) -> Result<AnalysisConfig, CliError> {
        let mut cfg = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                    path: path.clone(),
                    source,
                })?;
                AnalysisConfig::from_json_str(&raw)?
            }
            None => AnalysisConfig::default(),
        };
        if let Some(interval) = self.interval {
            cfg.interval_secs = interval;
        }
        if let Some(node) = self.source_node {
            cfg.source_node = NodeId(node);
        }
        if let Some(node) = self.destination_node {
            cfg.destination_node = NodeId(node);
        }
        if !self.data_types.is_empty() {
            cfg.data_packet_types = self.data_types.clone();
        }
        if let Some(bins) = self.histogram_bins {
            cfg.histogram_bins = bins;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// 初始化 tracing，默认 `info`，可用 `RUST_LOG` 覆盖；日志写到 stderr
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}
