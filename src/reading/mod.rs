// Named readings: kind registry, detection and normalization of config files

pub mod detector;
pub mod kind;
pub mod processor;
pub mod report;
pub mod types;

pub use detector::looks_like_quantity;
pub use kind::{QuantityKind, Reading};
pub use processor::{process_readings, ReadingProcessor};
pub use report::{Problem, ReadingIssue, ReadingReport, Severity};
pub use types::{NormalizedReading, ReadingSet};
