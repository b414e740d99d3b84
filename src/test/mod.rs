mod delay;
mod node_activity;
mod throughput;

use crate::trace::{EventKind, NodeId, PacketId, TraceEvent};

/// 构造一条 trace 行：`sym time from to type size flags flow src dst seq pkt`
pub(crate) fn line(sym: &str, time: f64, from: u32, to: u32, ptype: &str, size: u64, pkt: i64) -> String {
    format!("{sym} {time} {from} {to} {ptype} {size} ------- 1 {from}.0 {to}.0 {pkt} {pkt}")
}

pub(crate) fn ev(kind: EventKind, time: f64, from: u32, to: u32, ptype: &str, size: u64, pkt: i64) -> TraceEvent {
    TraceEvent {
        kind,
        time,
        from_node: NodeId(from),
        to_node: NodeId(to),
        packet_type: ptype.to_string(),
        packet_size: size,
        flags: "-------".to_string(),
        flow_id: 1,
        src_addr: format!("{from}.0"),
        dst_addr: format!("{to}.0"),
        seq_num: pkt,
        packet_id: PacketId(pkt),
    }
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// 0 -> 2 -> 1 的小型 trace：tcp 数据、ack 控制包、一次丢包
pub(crate) const SAMPLE_TRACE: &str = "\
# sample dumbbell trace
+ 0.00 0 2 tcp 1000 ------- 1 0.0 1.0 0 0
- 0.00 0 2 tcp 1000 ------- 1 0.0 1.0 0 0
+ 0.01 0 2 tcp 1000 ------- 1 0.0 1.0 1 1
- 0.02 0 2 tcp 1000 ------- 1 0.0 1.0 1 1
r 0.03 0 2 tcp 1000 ------- 1 0.0 1.0 0 0
+ 0.03 2 1 tcp 1000 ------- 1 0.0 1.0 0 0
- 0.04 2 1 tcp 1000 ------- 1 0.0 1.0 0 0
r 0.04 0 2 tcp 1000 ------- 1 0.0 1.0 1 1
+ 0.04 2 1 tcp 1000 ------- 1 0.0 1.0 1 1
d 0.04 2 1 tcp 1000 ------- 1 0.0 1.0 1 1
r 0.08 2 1 tcp 1000 ------- 1 0.0 1.0 0 0
+ 0.09 1 2 ack 40 ------- 1 1.0 0.0 0 2
- 0.09 1 2 ack 40 ------- 1 1.0 0.0 0 2
r 0.12 1 2 ack 40 ------- 1 1.0 0.0 0 2
this line is malformed
";
