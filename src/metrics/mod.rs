//! 指标计算模块
//!
//! 每个 reducer 都是事件序列（以及只读关联索引）上的纯函数，彼此没有顺序依赖。

// 子模块声明
mod activity;
mod basic;
mod classify;
mod config;
mod delay;
mod engine;
mod loss;
mod overhead;
mod queueing;
mod throughput;
mod value;

// 重新导出公共接口
pub use activity::{NodeActivity, node_activity};
pub use basic::{BasicStats, basic_stats};
pub use classify::{PacketClassifier, TypeListClassifier};
pub use config::{AnalysisConfig, ConfigError, DEFAULT_HISTOGRAM_BINS, DEFAULT_INTERVAL_SECS};
pub use delay::{DelayStats, HistogramBin, end_to_end_delay};
pub use engine::{MetricKind, MetricResult, MetricsEngine};
pub use loss::packet_loss;
pub use overhead::protocol_overhead;
pub use queueing::{NodeQueueDelay, queueing_delay};
pub use throughput::{MAX_BUCKET, ThroughputPoint, ThroughputSeries, throughput};
pub use value::{DefaultReason, Metric};
