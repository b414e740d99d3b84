//! 带来源标记的指标值
//!
//! 分母为零等情况下指标取约定的默认值；用 [`Metric::Defaulted`] 显式标出，
//! 调用方据此区分“算出来的 0”和“没有数据时填的 0”。

use serde::Serialize;

/// 取默认值的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultReason {
    /// 没有任何 enqueue 事件，丢包率分母为 0
    NoEnqueues,
    /// 没有发送的包，协议开销分母为 0
    NoSentPackets,
    /// 节点没有配对成功的 enqueue/dequeue
    NoMatchedPairs,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Metric<T> {
    Computed { value: T },
    Defaulted { value: T, reason: DefaultReason },
}

impl<T: Copy> Metric<T> {
    pub fn computed(value: T) -> Self {
        Metric::Computed { value }
    }

    pub fn defaulted(value: T, reason: DefaultReason) -> Self {
        Metric::Defaulted { value, reason }
    }

    pub fn value(&self) -> T {
        match self {
            Metric::Computed { value } | Metric::Defaulted { value, .. } => *value,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Metric::Computed { .. })
    }

    pub fn default_reason(&self) -> Option<DefaultReason> {
        match self {
            Metric::Computed { .. } => None,
            Metric::Defaulted { reason, .. } => Some(*reason),
        }
    }
}
