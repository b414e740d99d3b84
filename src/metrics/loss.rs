//! 丢包率

use super::value::{DefaultReason, Metric};
use crate::trace::{EventKind, TraceEvent};

/// drop 事件数 / enqueue 事件数。
///
/// 不保证 ≤ 1：trace 不一致时可能超过 1，按原值返回。没有 enqueue 时为 `Defaulted(0.0)`。
pub fn packet_loss(events: &[TraceEvent]) -> Metric<f64> {
    let sent = events.iter().filter(|ev| ev.is(EventKind::Enqueue)).count();
    let dropped = events.iter().filter(|ev| ev.is(EventKind::Drop)).count();
    if sent == 0 {
        return Metric::defaulted(0.0, DefaultReason::NoEnqueues);
    }
    Metric::computed(dropped as f64 / sent as f64)
}
