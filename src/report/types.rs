use serde::Serialize;

use crate::metrics::{
    BasicStats, DelayStats, HistogramBin, Metric, NodeActivity, NodeQueueDelay, ThroughputSeries,
};

/// 一次分析的完整结果，字段名即指标名
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceReport {
    pub basic_stats: BasicStats,
    pub throughput: ThroughputSeries,
    /// 纯比例（未乘 100）
    pub packet_loss_ratio: Metric<f64>,
    /// 没有时延样本时为 `None`
    pub delay_stats: Option<DelayStats>,
    pub delay_histogram: Vec<HistogramBin>,
    /// 已是百分比
    pub protocol_overhead: Metric<f64>,
    pub node_activity: Vec<NodeActivity>,
    /// 单位为秒，换算成毫秒留给展示层
    pub queueing_delay: Vec<NodeQueueDelay>,
}
