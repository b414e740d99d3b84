//! 报告汇总模块
//!
//! 把各 reducer 独立产出的结果收集成一份按指标名组织的报告，交给下游渲染。
//! 不做跨指标的一致性检查。

mod aggregate;
mod compare;
mod summary;
mod types;

pub use aggregate::{AnalysisError, ReportAggregator};
pub use compare::TraceSummaryRow;
pub use summary::SummaryText;
pub use types::TraceReport;
