//! 端到端时延
//!
//! 目的节点上的每个 receive 事件，在关联索引中查找该包在源节点的发送时间，
//! 差值即一个时延样本。找不到发送记录的包（例如 trace 被截断）直接排除，
//! 既不算无穷大时延也不算丢包。

use serde::Serialize;

use crate::index::CorrelationIndex;
use crate::trace::{EventKind, NodeId, TraceEvent};

/// 按事件顺序收集时延样本（秒）
pub fn end_to_end_delay(
    events: &[TraceEvent],
    index: &CorrelationIndex,
    destination: NodeId,
) -> Vec<f64> {
    events
        .iter()
        .filter(|ev| ev.is(EventKind::Receive) && ev.to_node == destination)
        .filter_map(|ev| index.send_time(ev.packet_id).map(|sent| ev.time - sent))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// 时延样本的汇总统计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DelayStats {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// 总体标准差；样本少于 2 个时为 0
    pub jitter: f64,
    #[serde(skip)]
    sorted: Vec<f64>,
}

impl DelayStats {
    /// 没有样本时返回 `None`。统计在排序后的样本上计算，与样本原始顺序无关。
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let average = sorted.iter().sum::<f64>() / n;
        let jitter = if sorted.len() < 2 {
            0.0
        } else {
            (sorted.iter().map(|d| (d - average).powi(2)).sum::<f64>() / n).sqrt()
        };

        Some(DelayStats {
            count: sorted.len(),
            average,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            median: sorted[sorted.len() / 2],
            jitter,
            sorted,
        })
    }

    /// 升序样本
    pub fn samples(&self) -> &[f64] {
        &self.sorted
    }

    /// `[min, max]` 等宽分箱计数，最后一个箱包含 max。所有样本相同时全部落入第一个箱。
    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        if bins == 0 {
            return Vec::new();
        }
        let width = (self.max - self.min) / bins as f64;
        let mut out: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: self.min + width * i as f64,
                upper: if i + 1 == bins {
                    self.max
                } else {
                    self.min + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();
        for &d in &self.sorted {
            let i = if width > 0.0 {
                (((d - self.min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            out[i].count += 1;
        }
        out
    }
}
