//! 吞吐量时间序列
//!
//! 把时间按固定宽度分桶，receive 事件的 `packet_size * 8` 计入其时间所在的桶，
//! 每桶比特数除以桶宽得到 bits/s。没有 receive 的桶不出现在序列中。
//! 桶号超过 2^53（f64 能精确表示的整数上限）的事件无法给出准确的桶起点，跳过并计数。

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::trace::{EventKind, TraceEvent};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputPoint {
    /// 桶起始时间（秒）
    pub start_secs: f64,
    pub bps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThroughputSeries {
    pub interval_secs: f64,
    /// 按时间升序
    pub points: Vec<ThroughputPoint>,
    /// 非空桶速率的平均值
    pub average_bps: Option<f64>,
    pub peak_bps: Option<f64>,
    /// 桶号超出范围而未计入的 receive 事件数
    pub skipped_events: usize,
    #[serde(skip)]
    bits_by_bucket: BTreeMap<u64, u64>,
}

impl ThroughputSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 从 0 号桶到最后一个非空桶的稠密序列，空桶填 0。
    ///
    /// 序列长度超过 `max_points` 时返回 `None`，不做分配。
    pub fn dense(&self, max_points: usize) -> Option<Vec<ThroughputPoint>> {
        let Some(&last) = self.bits_by_bucket.keys().next_back() else {
            return Some(Vec::new());
        };
        let len = usize::try_from(last).ok()?.checked_add(1)?;
        if len > max_points {
            return None;
        }
        Some(
            (0..=last)
                .map(|bucket| {
                    let bits = self.bits_by_bucket.get(&bucket).copied().unwrap_or(0);
                    point(bucket, bits, self.interval_secs)
                })
                .collect(),
        )
    }
}

/// 最大可用桶号（不含），保证 `bucket as f64 * interval` 精确
pub const MAX_BUCKET: u64 = 1 << 53;

fn bucket_of(time: f64, interval_secs: f64) -> Option<u64> {
    let pos = (time / interval_secs).floor();
    (pos.is_finite() && pos >= 0.0 && pos < MAX_BUCKET as f64).then(|| pos as u64)
}

fn point(bucket: u64, bits: u64, interval_secs: f64) -> ThroughputPoint {
    ThroughputPoint {
        start_secs: bucket as f64 * interval_secs,
        bps: bits as f64 / interval_secs,
    }
}

/// `interval_secs` 必须为正，由 [`AnalysisConfig::validate`](super::AnalysisConfig::validate) 保证。
pub fn throughput(events: &[TraceEvent], interval_secs: f64) -> ThroughputSeries {
    let mut bits_by_bucket: BTreeMap<u64, u64> = BTreeMap::new();
    let mut skipped_events = 0;
    for ev in events.iter().filter(|ev| ev.is(EventKind::Receive)) {
        let Some(bucket) = bucket_of(ev.time, interval_secs) else {
            skipped_events += 1;
            debug!(time = ev.time, interval_secs, pkt_id = ev.packet_id.0, "桶号超出范围，跳过");
            continue;
        };
        let bits = bits_by_bucket.entry(bucket).or_insert(0);
        *bits = bits.saturating_add(ev.size_bits());
    }

    let points: Vec<ThroughputPoint> = bits_by_bucket
        .iter()
        .map(|(&bucket, &bits)| point(bucket, bits, interval_secs))
        .collect();
    let average_bps = if points.is_empty() {
        None
    } else {
        Some(points.iter().map(|p| p.bps).sum::<f64>() / points.len() as f64)
    };
    let peak_bps = points.iter().map(|p| p.bps).reduce(f64::max);

    ThroughputSeries {
        interval_secs,
        points,
        average_bps,
        peak_bps,
        skipped_events,
        bits_by_bucket,
    }
}
