mod diff_engine;
mod report_naming;

pub use diff_engine::{compare_deps, DiffEngine};
pub use report_naming::ReportNaming;
