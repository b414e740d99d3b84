//! 解析错误类型

use std::path::PathBuf;

use thiserror::Error;

/// 加载 trace 时可上抛给调用方的错误
#[derive(Debug, Error)]
pub enum TraceError {
    /// 无法读取输入文件
    #[error("could not load trace {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 文件里没有任何可解析的事件
    #[error("trace contains no events ({lines} lines read, {malformed} malformed)")]
    Empty { lines: usize, malformed: usize },
}

/// 单行解析失败的原因。只在本地用于跳过该行并计数。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("unknown event symbol {0:?}")]
    UnknownEvent(String),
    #[error("invalid {field} value {value:?}")]
    InvalidField { field: &'static str, value: String },
}
