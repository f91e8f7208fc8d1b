mod record;
mod scan;
mod summary;

pub use record::{FileRecord, ScanWarning, Violation, ViolationKind};
pub use scan::MetricsEngine;
pub use summary::{FileRanking, FunctionRanking, ScanSummary, Thresholds};
