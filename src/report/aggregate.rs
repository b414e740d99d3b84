//! 结果汇总（fan-in）

use thiserror::Error;
use tracing::trace;

use super::types::TraceReport;
use crate::metrics::{
    BasicStats, DelayStats, HistogramBin, Metric, MetricKind, MetricResult, NodeActivity,
    NodeQueueDelay, ThroughputSeries,
};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("metric {} was never computed", .0.name())]
    MissingMetric(MetricKind),
}

/// 收集各指标结果；同一指标推送多次时以最后一次为准
#[derive(Debug, Default)]
pub struct ReportAggregator {
    basic_stats: Option<BasicStats>,
    throughput: Option<ThroughputSeries>,
    packet_loss_ratio: Option<Metric<f64>>,
    delay: Option<(Option<DelayStats>, Vec<HistogramBin>)>,
    protocol_overhead: Option<Metric<f64>>,
    node_activity: Option<Vec<NodeActivity>>,
    queueing_delay: Option<Vec<NodeQueueDelay>>,
}

impl ReportAggregator {
    pub fn from_results(results: impl IntoIterator<Item = MetricResult>) -> Self {
        let mut agg = Self::default();
        for r in results {
            agg.push(r);
        }
        agg
    }

    pub fn push(&mut self, result: MetricResult) {
        trace!(metric = result.kind().name(), "收到指标结果");
        match result {
            MetricResult::BasicStats(v) => self.basic_stats = Some(v),
            MetricResult::Throughput(v) => self.throughput = Some(v),
            MetricResult::PacketLoss(v) => self.packet_loss_ratio = Some(v),
            MetricResult::Delay { stats, histogram } => self.delay = Some((stats, histogram)),
            MetricResult::NodeActivity(v) => self.node_activity = Some(v),
            MetricResult::QueueingDelay(v) => self.queueing_delay = Some(v),
            MetricResult::ProtocolOverhead(v) => self.protocol_overhead = Some(v),
        }
    }

    pub fn finish(self) -> Result<TraceReport, AnalysisError> {
        let missing = AnalysisError::MissingMetric;
        let (delay_stats, delay_histogram) = self.delay.ok_or(missing(MetricKind::Delay))?;
        Ok(TraceReport {
            basic_stats: self.basic_stats.ok_or(missing(MetricKind::BasicStats))?,
            throughput: self.throughput.ok_or(missing(MetricKind::Throughput))?,
            packet_loss_ratio: self
                .packet_loss_ratio
                .ok_or(missing(MetricKind::PacketLoss))?,
            delay_stats,
            delay_histogram,
            protocol_overhead: self
                .protocol_overhead
                .ok_or(missing(MetricKind::ProtocolOverhead))?,
            node_activity: self.node_activity.ok_or(missing(MetricKind::NodeActivity))?,
            queueing_delay: self
                .queueing_delay
                .ok_or(missing(MetricKind::QueueingDelay))?,
        })
    }
}
