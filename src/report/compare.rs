//! 多 trace 对比行
//!
//! 每个 trace 汇成一行关键指标，便于并排比较不同仿真。

use serde::Serialize;

use super::types::TraceReport;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceSummaryRow {
    pub file: String,
    pub throughput_avg: Option<f64>,
    pub throughput_peak: Option<f64>,
    /// 百分比
    pub packet_loss: Option<f64>,
    pub delay_avg: Option<f64>,
    pub delay_jitter: Option<f64>,
    /// 百分比
    pub protocol_overhead: Option<f64>,
}

pub const TSV_HEADER: &str =
    "file\tthroughput_avg\tthroughput_peak\tpacket_loss\tdelay_avg\tdelay_jitter\tprotocol_overhead";

fn cell(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.6}")).unwrap_or_else(|| "-".to_string())
}

impl TraceSummaryRow {
    pub fn from_report(file: impl Into<String>, report: &TraceReport) -> Self {
        Self {
            file: file.into(),
            throughput_avg: report.throughput.average_bps,
            throughput_peak: report.throughput.peak_bps,
            packet_loss: Some(report.packet_loss_ratio.value() * 100.0),
            delay_avg: report.delay_stats.as_ref().map(|d| d.average),
            delay_jitter: report.delay_stats.as_ref().map(|d| d.jitter),
            protocol_overhead: Some(report.protocol_overhead.value()),
        }
    }

    /// trace 无法读取或为空时的占位行，所有指标缺省
    pub fn unavailable(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            throughput_avg: None,
            throughput_peak: None,
            packet_loss: None,
            delay_avg: None,
            delay_jitter: None,
            protocol_overhead: None,
        }
    }

    pub fn tsv_header() -> &'static str {
        TSV_HEADER
    }

    pub fn to_tsv(&self) -> String {
        [
            self.file.clone(),
            cell(self.throughput_avg),
            cell(self.throughput_peak),
            cell(self.packet_loss),
            cell(self.delay_avg),
            cell(self.delay_jitter),
            cell(self.protocol_overhead),
        ]
        .join("\t")
    }
}
