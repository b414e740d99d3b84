//! 节点排队时延
//!
//! 以 `(from_node, packet_id)` 把 dequeue 与索引中的 enqueue 配对，差值为一个排队时延样本，
//! 每个节点取算术平均。

use std::collections::BTreeMap;

use serde::Serialize;

use super::value::{DefaultReason, Metric};
use crate::index::CorrelationIndex;
use crate::trace::{EventKind, NodeId, TraceEvent};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeQueueDelay {
    pub node: NodeId,
    pub samples: usize,
    /// 平均排队时延（秒）；没有配对样本时为 `Defaulted(0.0)`
    pub average_secs: Metric<f64>,
}

/// 每个至少有一次 enqueue 的节点都会出现在结果中，按节点 id 升序。
pub fn queueing_delay(events: &[TraceEvent], index: &CorrelationIndex) -> Vec<NodeQueueDelay> {
    let mut by_node: BTreeMap<NodeId, Vec<f64>> = BTreeMap::new();

    for ev in events {
        match ev.kind {
            EventKind::Enqueue => {
                by_node.entry(ev.from_node).or_default();
            }
            EventKind::Dequeue => {
                if let Some(entered) = index.queue_enter(ev.from_node, ev.packet_id) {
                    by_node.entry(ev.from_node).or_default().push(ev.time - entered);
                }
            }
            _ => {}
        }
    }

    by_node
        .into_iter()
        .map(|(node, mut delays)| {
            let average_secs = if delays.is_empty() {
                Metric::defaulted(0.0, DefaultReason::NoMatchedPairs)
            } else {
                delays.sort_by(f64::total_cmp);
                Metric::computed(delays.iter().sum::<f64>() / delays.len() as f64)
            };
            NodeQueueDelay {
                node,
                samples: delays.len(),
                average_secs,
            }
        })
        .collect()
}
