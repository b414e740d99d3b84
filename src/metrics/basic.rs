//! 基础统计

use std::collections::BTreeSet;

use serde::Serialize;

use super::activity::counted_node;
use crate::trace::TraceEvent;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BasicStats {
    pub events: usize,
    /// 仿真时长：最大事件时间（秒）
    pub duration_secs: f64,
    /// 出现在节点活动统计里的节点数
    pub active_nodes: usize,
}

pub fn basic_stats(events: &[TraceEvent]) -> BasicStats {
    let duration_secs = events.iter().map(|ev| ev.time).fold(0.0, f64::max);
    let active_nodes = events
        .iter()
        .filter_map(counted_node)
        .collect::<BTreeSet<_>>()
        .len();
    BasicStats {
        events: events.len(),
        duration_secs,
        active_nodes,
    }
}
