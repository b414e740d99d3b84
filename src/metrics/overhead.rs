//! 协议开销

use super::classify::PacketClassifier;
use super::value::{DefaultReason, Metric};
use crate::trace::{EventKind, TraceEvent};

/// 控制包占所有 enqueue 包的百分比（已乘 100）。没有 enqueue 时为 `Defaulted(0.0)`。
pub fn protocol_overhead(events: &[TraceEvent], classifier: &dyn PacketClassifier) -> Metric<f64> {
    let (mut data, mut control) = (0u64, 0u64);
    for ev in events.iter().filter(|ev| ev.is(EventKind::Enqueue)) {
        if classifier.is_data(&ev.packet_type) {
            data += 1;
        } else {
            control += 1;
        }
    }
    let total = data + control;
    if total == 0 {
        return Metric::defaulted(0.0, DefaultReason::NoSentPackets);
    }
    Metric::computed(control as f64 / total as f64 * 100.0)
}
