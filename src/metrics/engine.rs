//! 指标引擎
//!
//! 关联索引只建一次，随后各 reducer 互不依赖地读取事件序列与索引，
//! 每个 reducer 产出一条 [`MetricResult`]，最后交给 [`ReportAggregator`] 汇总。
//! `run_parallel` 用 rayon 把 reducer 扇出到线程池，结果与 `run` 完全一致。

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::activity::{NodeActivity, node_activity};
use super::basic::{BasicStats, basic_stats};
use super::classify::{PacketClassifier, TypeListClassifier};
use super::config::{AnalysisConfig, ConfigError};
use super::delay::{DelayStats, HistogramBin, end_to_end_delay};
use super::loss::packet_loss;
use super::overhead::protocol_overhead;
use super::queueing::{NodeQueueDelay, queueing_delay};
use super::throughput::{ThroughputSeries, throughput};
use super::value::Metric;
use crate::index::CorrelationIndex;
use crate::report::{AnalysisError, ReportAggregator, TraceReport};
use crate::trace::TraceEvent;

/// 指标种类，即报告中的指标名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    BasicStats,
    Throughput,
    PacketLoss,
    Delay,
    NodeActivity,
    QueueingDelay,
    ProtocolOverhead,
}

impl MetricKind {
    pub const ALL: [MetricKind; 7] = [
        MetricKind::BasicStats,
        MetricKind::Throughput,
        MetricKind::PacketLoss,
        MetricKind::Delay,
        MetricKind::NodeActivity,
        MetricKind::QueueingDelay,
        MetricKind::ProtocolOverhead,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MetricKind::BasicStats => "basic_stats",
            MetricKind::Throughput => "throughput",
            MetricKind::PacketLoss => "packet_loss_ratio",
            MetricKind::Delay => "delay_stats",
            MetricKind::NodeActivity => "node_activity",
            MetricKind::QueueingDelay => "queueing_delay",
            MetricKind::ProtocolOverhead => "protocol_overhead",
        }
    }
}

/// 单个 reducer 的输出
#[derive(Debug, Clone, PartialEq)]
pub enum MetricResult {
    BasicStats(BasicStats),
    Throughput(ThroughputSeries),
    PacketLoss(Metric<f64>),
    Delay {
        stats: Option<DelayStats>,
        histogram: Vec<HistogramBin>,
    },
    NodeActivity(Vec<NodeActivity>),
    QueueingDelay(Vec<NodeQueueDelay>),
    ProtocolOverhead(Metric<f64>),
}

impl MetricResult {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricResult::BasicStats(_) => MetricKind::BasicStats,
            MetricResult::Throughput(_) => MetricKind::Throughput,
            MetricResult::PacketLoss(_) => MetricKind::PacketLoss,
            MetricResult::Delay { .. } => MetricKind::Delay,
            MetricResult::NodeActivity(_) => MetricKind::NodeActivity,
            MetricResult::QueueingDelay(_) => MetricKind::QueueingDelay,
            MetricResult::ProtocolOverhead(_) => MetricKind::ProtocolOverhead,
        }
    }
}

pub struct MetricsEngine {
    config: AnalysisConfig,
    classifier: Box<dyn PacketClassifier>,
}

impl std::fmt::Debug for MetricsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl MetricsEngine {
    /// 校验配置，并按 `data_packet_types` 构造默认分类器
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let classifier = TypeListClassifier::new(config.data_packet_types.iter().cloned());
        Ok(Self {
            config,
            classifier: Box::new(classifier),
        })
    }

    /// 替换数据/控制分类规则
    pub fn with_classifier(mut self, classifier: impl PacketClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// 计算单个指标。只读访问事件与索引，可并发调用。
    pub fn compute(
        &self,
        kind: MetricKind,
        events: &[TraceEvent],
        index: &CorrelationIndex,
    ) -> MetricResult {
        debug!(metric = kind.name(), "计算指标");
        match kind {
            MetricKind::BasicStats => MetricResult::BasicStats(basic_stats(events)),
            MetricKind::Throughput => {
                MetricResult::Throughput(throughput(events, self.config.interval_secs))
            }
            MetricKind::PacketLoss => MetricResult::PacketLoss(packet_loss(events)),
            MetricKind::Delay => {
                let samples = end_to_end_delay(events, index, self.config.destination_node);
                let stats = DelayStats::from_samples(&samples);
                let histogram = stats
                    .as_ref()
                    .map(|s| s.histogram(self.config.histogram_bins))
                    .unwrap_or_default();
                MetricResult::Delay { stats, histogram }
            }
            MetricKind::NodeActivity => MetricResult::NodeActivity(node_activity(events)),
            MetricKind::QueueingDelay => MetricResult::QueueingDelay(queueing_delay(events, index)),
            MetricKind::ProtocolOverhead => {
                MetricResult::ProtocolOverhead(protocol_overhead(events, self.classifier.as_ref()))
            }
        }
    }

    /// 单线程依次运行全部 reducer
    #[tracing::instrument(skip(self, events), fields(events = events.len()))]
    pub fn run(&self, events: &[TraceEvent]) -> Result<TraceReport, AnalysisError> {
        let index = CorrelationIndex::build(events, self.config.source_node);
        let results = MetricKind::ALL
            .iter()
            .map(|&kind| self.compute(kind, events, &index));
        let report = ReportAggregator::from_results(results).finish()?;
        info!("📊 指标计算完成");
        Ok(report)
    }

    /// 用 rayon 并行运行全部 reducer；索引建好后只读共享，无需加锁
    #[tracing::instrument(skip(self, events), fields(events = events.len()))]
    pub fn run_parallel(&self, events: &[TraceEvent]) -> Result<TraceReport, AnalysisError> {
        let index = CorrelationIndex::build(events, self.config.source_node);
        let results: Vec<MetricResult> = MetricKind::ALL
            .par_iter()
            .map(|&kind| self.compute(kind, events, &index))
            .collect();
        let report = ReportAggregator::from_results(results).finish()?;
        info!("📊 指标计算完成（并行）");
        Ok(report)
    }
}
