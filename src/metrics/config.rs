//! 分析配置
//!
//! 可从 JSON 读入，所有字段都有默认值；命令行参数可逐项覆盖。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trace::NodeId;

pub const DEFAULT_INTERVAL_SECS: f64 = 0.1;
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("throughput interval must be a positive finite number of seconds, got {0}")]
    InvalidInterval(f64),
    #[error("histogram_bins must be at least 1")]
    ZeroHistogramBins,
    #[error("parse config json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 吞吐量分桶宽度（秒）
    pub interval_secs: f64,
    /// 端到端时延的发送端节点
    pub source_node: NodeId,
    /// 端到端时延的接收端节点
    pub destination_node: NodeId,
    /// 视为数据包的 packet_type，其余 enqueue 计为控制开销
    pub data_packet_types: Vec<String>,
    /// 时延直方图分箱数
    pub histogram_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            source_node: NodeId(0),
            destination_node: NodeId(1),
            data_packet_types: vec!["tcp".to_string()],
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: AnalysisConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.interval_secs.is_finite() || self.interval_secs <= 0.0 {
            return Err(ConfigError::InvalidInterval(self.interval_secs));
        }
        if self.histogram_bins == 0 {
            return Err(ConfigError::ZeroHistogramBins);
        }
        Ok(())
    }
}
