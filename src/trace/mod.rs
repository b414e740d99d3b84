//! Trace 解析模块
//!
//! 把 NS2 风格的逐行事件日志解析为类型化的 [`TraceEvent`] 序列。
//! 畸形行在本地跳过，不会作为错误上抛；整个文件解析不出事件时由调用方决定是否视为致命。

// 子模块声明
mod error;
mod event;
mod id;
mod parser;

// 重新导出公共接口
pub use error::{LineError, TraceError};
pub use event::{EventKind, TraceEvent};
pub use id::{NodeId, PacketId};
pub use parser::{
    MIN_FIELDS, ParseStats, ParsedTrace, load_trace, parse_line, parse_trace,
    parse_trace_bytes,
};
