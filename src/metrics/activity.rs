//! 节点活动统计
//!
//! enqueue 计入 from_node 的 sent，receive 计入 to_node 的 received，drop 计入 from_node 的 dropped。

use std::collections::BTreeMap;

use serde::Serialize;

use crate::trace::{EventKind, NodeId, TraceEvent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NodeActivity {
    pub node: NodeId,
    pub sent: u64,
    pub received: u64,
    pub dropped: u64,
    /// dropped / sent；sent 为 0 时无定义
    pub drop_ratio: Option<f64>,
}

/// 事件计入哪个节点的活动（dequeue 不计入）
pub(crate) fn counted_node(ev: &TraceEvent) -> Option<NodeId> {
    match ev.kind {
        EventKind::Enqueue | EventKind::Drop => Some(ev.from_node),
        EventKind::Receive => Some(ev.to_node),
        EventKind::Dequeue => None,
    }
}

/// 按节点 id 升序返回
pub fn node_activity(events: &[TraceEvent]) -> Vec<NodeActivity> {
    let mut by_node: BTreeMap<NodeId, NodeActivity> = BTreeMap::new();
    for ev in events {
        let Some(node) = counted_node(ev) else {
            continue;
        };
        let entry = by_node.entry(node).or_insert_with(|| NodeActivity {
            node,
            ..Default::default()
        });
        match ev.kind {
            EventKind::Enqueue => entry.sent += 1,
            EventKind::Receive => entry.received += 1,
            EventKind::Drop => entry.dropped += 1,
            EventKind::Dequeue => {}
        }
    }
    by_node
        .into_values()
        .map(|mut act| {
            if act.sent > 0 {
                act.drop_ratio = Some(act.dropped as f64 / act.sent as f64);
            }
            act
        })
        .collect()
}
