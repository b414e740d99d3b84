//! Trace 文本解析
//!
//! 字段按空白分隔、位置固定：
//! `event time from to type size flags flow_id src dst seq pkt_id`，以 `#` 开头的行是注释。

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info, trace};

use super::error::{LineError, TraceError};
use super::event::{EventKind, TraceEvent};
use super::id::{NodeId, PacketId};

/// 一行有效记录至少需要的字段数
pub const MIN_FIELDS: usize = 12;

/// 解析过程计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub lines: usize,
    pub comments: usize,
    pub blank: usize,
    pub malformed: usize,
}

/// 解析结果：按文件顺序排列的事件，以及解析计数
#[derive(Debug, Clone, Default)]
pub struct ParsedTrace {
    pub events: Vec<TraceEvent>,
    pub stats: ParseStats,
}

impl ParsedTrace {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// 没有解析出任何事件（空文件、全是注释或全部畸形）
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 调用方认为空 trace 不可接受时使用
    pub fn require_events(self) -> Result<Self, TraceError> {
        if self.is_empty() {
            return Err(TraceError::Empty {
                lines: self.stats.lines,
                malformed: self.stats.malformed,
            });
        }
        Ok(self)
    }
}

fn field<T: FromStr>(name: &'static str, raw: &str) -> Result<T, LineError> {
    raw.parse().map_err(|_| LineError::InvalidField {
        field: name,
        value: raw.to_string(),
    })
}

fn time_field(raw: &str) -> Result<f64, LineError> {
    let t: f64 = field("time", raw)?;
    if !t.is_finite() || t < 0.0 {
        return Err(LineError::InvalidField {
            field: "time",
            value: raw.to_string(),
        });
    }
    Ok(t)
}

/// 解析单行。
///
/// 空行和注释行返回 `Ok(None)`；字段不足、事件符号未知或数值字段无法解析时返回 `Err`，
/// 由调用方跳过该行。超出 12 列的多余字段被忽略。
pub fn parse_line(line: &str) -> Result<Option<TraceEvent>, LineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_FIELDS {
        return Err(LineError::TooFewFields {
            expected: MIN_FIELDS,
            found: parts.len(),
        });
    }

    let kind =
        EventKind::from_symbol(parts[0]).ok_or_else(|| LineError::UnknownEvent(parts[0].to_string()))?;

    Ok(Some(TraceEvent {
        kind,
        time: time_field(parts[1])?,
        from_node: NodeId(field("from_node", parts[2])?),
        to_node: NodeId(field("to_node", parts[3])?),
        packet_type: parts[4].to_string(),
        packet_size: field("packet_size", parts[5])?,
        flags: parts[6].to_string(),
        flow_id: field("flow_id", parts[7])?,
        src_addr: parts[8].to_string(),
        dst_addr: parts[9].to_string(),
        seq_num: field("seq_num", parts[10])?,
        packet_id: PacketId(field("packet_id", parts[11])?),
    }))
}

/// 解析整段 trace 文本，畸形行被跳过并计数。
pub fn parse_trace(text: &str) -> ParsedTrace {
    parse_trace_bytes(text.as_bytes())
}

/// 按 `\n` 切分原始字节逐行解析；不是合法 UTF-8 的行与其他畸形行一样跳过并计数，
/// 不影响其余行。
#[tracing::instrument(skip(bytes), fields(bytes = bytes.len()))]
pub fn parse_trace_bytes(bytes: &[u8]) -> ParsedTrace {
    let mut out = ParsedTrace::default();
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let lines = (!bytes.is_empty()).then(|| body.split(|&b| b == b'\n'));

    for (idx, raw) in lines.into_iter().flatten().enumerate() {
        out.stats.lines += 1;
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(err) => {
                out.stats.malformed += 1;
                debug!(line_no = idx + 1, error = %err, "跳过非 UTF-8 行");
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.stats.blank += 1;
            continue;
        }
        if trimmed.starts_with('#') {
            out.stats.comments += 1;
            continue;
        }
        match parse_line(trimmed) {
            Ok(Some(ev)) => {
                trace!(line_no = idx + 1, kind = ?ev.kind, pkt_id = ev.packet_id.0, "解析事件");
                out.events.push(ev);
            }
            Ok(None) => {}
            Err(err) => {
                out.stats.malformed += 1;
                debug!(line_no = idx + 1, error = %err, "跳过畸形行");
            }
        }
    }

    info!(
        events = out.events.len(),
        lines = out.stats.lines,
        comments = out.stats.comments,
        malformed = out.stats.malformed,
        "📄 trace 解析完成"
    );
    out
}

/// 读取并解析 trace 文件。只有 I/O 失败会返回错误；编码损坏的行按畸形行跳过，
/// 空 trace 由 [`ParsedTrace::is_empty`] 表达。
pub fn load_trace(path: impl AsRef<Path>) -> Result<ParsedTrace, TraceError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "读取 trace 文件");
    Ok(parse_trace_bytes(&bytes))
}
