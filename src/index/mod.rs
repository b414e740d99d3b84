//! 关联索引模块
//!
//! 一次遍历事件序列，建立 send/receive 与 enqueue/dequeue 配对所需的查找表，
//! 建好后只读，由多个指标 reducer 共享。

mod correlation;

pub use correlation::CorrelationIndex;
