//! 关联索引
//!
//! - `send_time[packet_id]`：源节点上该包的 enqueue 时间
//! - `queue_enter[(node, packet_id)]`：该包在某节点的 enqueue 时间

use std::collections::HashMap;

use tracing::{debug, info};

use crate::trace::{EventKind, NodeId, PacketId, TraceEvent};

/// 只读关联索引，生命周期限于一次分析
#[derive(Debug, Clone, Default)]
pub struct CorrelationIndex {
    source_node: NodeId,
    send_time: HashMap<PacketId, f64>,
    queue_enter: HashMap<(NodeId, PacketId), f64>,
}

impl CorrelationIndex {
    /// 单次遍历建立索引。
    ///
    /// 同一包在源节点多次 enqueue 时保留最早的时间，结果与输入顺序无关；
    /// 同一 `(node, packet)` 多次 enqueue 时以输入中最后一次为准，这是唯一依赖输入顺序的地方：
    /// 打乱这类重复行会改变对应节点的排队时延。
    #[tracing::instrument(skip(events), fields(events = events.len(), source = source_node.0))]
    pub fn build(events: &[TraceEvent], source_node: NodeId) -> Self {
        let mut idx = CorrelationIndex {
            source_node,
            ..Default::default()
        };

        for ev in events.iter().filter(|ev| ev.is(EventKind::Enqueue)) {
            if ev.from_node == source_node {
                idx.send_time
                    .entry(ev.packet_id)
                    .and_modify(|t| *t = t.min(ev.time))
                    .or_insert(ev.time);
            }
            if let Some(prev) = idx.queue_enter.insert((ev.from_node, ev.packet_id), ev.time) {
                debug!(node = ev.from_node.0, pkt_id = ev.packet_id.0, prev, "重复 enqueue，覆盖旧值");
            }
        }

        info!(
            sent_packets = idx.send_time.len(),
            queued_pairs = idx.queue_enter.len(),
            "🔗 关联索引已建立"
        );
        idx
    }

    pub fn source_node(&self) -> NodeId {
        self.source_node
    }

    /// 包在源节点的发送时间
    pub fn send_time(&self, pkt: PacketId) -> Option<f64> {
        self.send_time.get(&pkt).copied()
    }

    /// 包进入某节点队列的时间
    pub fn queue_enter(&self, node: NodeId, pkt: PacketId) -> Option<f64> {
        self.queue_enter.get(&(node, pkt)).copied()
    }

    pub fn sent_packets(&self) -> usize {
        self.send_time.len()
    }

    pub fn queued_pairs(&self) -> usize {
        self.queue_enter.len()
    }
}
