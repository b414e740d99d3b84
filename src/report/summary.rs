//! 纯文本统计摘要
//!
//! 与报告结构一一对应的人类可读摘要，百分比和毫秒换算只在这里发生。

use std::fmt;

use super::types::TraceReport;
use crate::metrics::{DefaultReason, Metric};

const RULE: &str = "=================================================";

/// `format!("{}", SummaryText(&report))` 得到摘要文本
pub struct SummaryText<'a>(pub &'a TraceReport);

fn reason_text(reason: DefaultReason) -> &'static str {
    match reason {
        DefaultReason::NoEnqueues => "no enqueue events",
        DefaultReason::NoSentPackets => "no sent packets",
        DefaultReason::NoMatchedPairs => "no matched enqueue/dequeue pairs",
    }
}

fn write_pct(f: &mut fmt::Formatter<'_>, label: &str, m: &Metric<f64>, scale: f64) -> fmt::Result {
    write!(f, "   {label}: {:.2}%", m.value() * scale)?;
    if let Some(reason) = m.default_reason() {
        write!(f, " (default: {})", reason_text(reason))?;
    }
    writeln!(f)
}

impl fmt::Display for SummaryText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Network Performance Analysis")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;

        writeln!(f, "1. Basic Statistics:")?;
        writeln!(f, "   Total events processed: {}", r.basic_stats.events)?;
        writeln!(
            f,
            "   Simulation duration: {:.2} seconds",
            r.basic_stats.duration_secs
        )?;
        writeln!(f, "   Number of active nodes: {}", r.basic_stats.active_nodes)?;
        writeln!(f)?;

        writeln!(f, "2. Performance Metrics:")?;
        if let (Some(avg), Some(peak)) = (r.throughput.average_bps, r.throughput.peak_bps) {
            writeln!(f, "   Average throughput: {avg:.2} bits/s")?;
            writeln!(f, "   Peak throughput: {peak:.2} bits/s")?;
        }
        write_pct(f, "Packet loss ratio", &r.packet_loss_ratio, 100.0)?;
        if let Some(d) = &r.delay_stats {
            writeln!(f, "   Average end-to-end delay: {:.4} seconds", d.average)?;
            writeln!(f, "   Minimum delay: {:.4} seconds", d.min)?;
            writeln!(f, "   Maximum delay: {:.4} seconds", d.max)?;
            writeln!(f, "   Median delay: {:.4} seconds", d.median)?;
            writeln!(f, "   Delay jitter: {:.4} seconds", d.jitter)?;
        }
        write_pct(f, "Protocol overhead", &r.protocol_overhead, 1.0)?;
        writeln!(f)?;

        writeln!(f, "3. Node Activity:")?;
        for act in &r.node_activity {
            writeln!(f, "   Node {}:", act.node.0)?;
            writeln!(f, "     Packets sent: {}", act.sent)?;
            writeln!(f, "     Packets received: {}", act.received)?;
            writeln!(f, "     Packets dropped: {}", act.dropped)?;
            if let Some(ratio) = act.drop_ratio {
                writeln!(f, "     Drop ratio: {:.2}%", ratio * 100.0)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "4. Queueing Analysis:")?;
        for q in &r.queueing_delay {
            match q.average_secs {
                Metric::Computed { value } => writeln!(
                    f,
                    "   Node {} average queueing delay: {:.2} ms",
                    q.node.0,
                    value * 1000.0
                )?,
                Metric::Defaulted { reason, .. } => writeln!(
                    f,
                    "   Node {} average queueing delay: n/a ({})",
                    q.node.0,
                    reason_text(reason)
                )?,
            }
        }
        writeln!(f)?;
        writeln!(f, "{RULE}")
    }
}
