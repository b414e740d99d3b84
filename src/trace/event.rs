//! Trace 事件类型
//!
//! 定义一行 trace 记录解析后的事件。

use serde::{Deserialize, Serialize};

use super::id::{NodeId, PacketId};

/// 事件类型（trace 第一列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// `+`：进入链路队列
    Enqueue,
    /// `-`：离开链路队列
    Dequeue,
    /// `r`：在 to_node 收到
    Receive,
    /// `d`：被丢弃
    Drop,
}

impl EventKind {
    /// 从 trace 符号解析事件类型；未知符号返回 `None`
    pub fn from_symbol(sym: &str) -> Option<Self> {
        match sym {
            "+" => Some(EventKind::Enqueue),
            "-" => Some(EventKind::Dequeue),
            "r" => Some(EventKind::Receive),
            "d" => Some(EventKind::Drop),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            EventKind::Enqueue => "+",
            EventKind::Dequeue => "-",
            EventKind::Receive => "r",
            EventKind::Drop => "d",
        }
    }
}

/// 一条解析后的 trace 记录，创建后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub kind: EventKind,
    /// 事件时间（秒）
    pub time: f64,
    pub from_node: NodeId,
    pub to_node: NodeId,
    /// 包类型标签，例如 `tcp`、`ack`、`cbr`
    pub packet_type: String,
    pub packet_size: u64,
    /// 原样保留的 flags 列
    pub flags: String,
    pub flow_id: i64,
    pub src_addr: String,
    pub dst_addr: String,
    pub seq_num: i64,
    pub packet_id: PacketId,
}

impl TraceEvent {
    pub fn is(&self, kind: EventKind) -> bool {
        self.kind == kind
    }

    /// 包大小对应的比特数
    pub fn size_bits(&self) -> u64 {
        self.packet_size.saturating_mul(8)
    }
}
