use serde::Serialize;

use crate::reading::kind::{QuantityKind, Reading};
use crate::reading::report::ReadingReport;

/// A named reading after normalization to its base unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedReading {
    pub name: String,
    pub kind: QuantityKind,
    /// Count of the kind's base unit (e.g. nanometres for a distance)
    pub raw: i64,
    /// Canonical string, e.g. "1.609km"
    pub formatted: String,
    /// Text as written in the source, or the raw count when given as a number
    pub original: String,
}

impl NormalizedReading {
    pub fn new(name: impl Into<String>, reading: Reading, original: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: reading.kind(),
            raw: reading.raw(),
            formatted: reading.to_string(),
            original: original.into(),
        }
    }
}

/// Everything processing a readings file produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReadingSet {
    pub readings: Vec<NormalizedReading>,
    pub report: ReadingReport,
}

impl ReadingSet {
    pub fn get(&self, name: &str) -> Option<&NormalizedReading> {
        self.readings.iter().find(|r| r.name == name)
    }
}
