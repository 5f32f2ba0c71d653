use log::{debug, warn};

use crate::config::{Config, EntryValue, ReadingEntry};
use crate::reading::detector::looks_like_quantity;
use crate::reading::kind::Reading;
use crate::reading::report::{Problem, ReadingReport};
use crate::reading::types::{NormalizedReading, ReadingSet};

/// Normalize the readings of a config into typed base-unit counts
///
/// A bad entry is reported and skipped; it never aborts the rest of the file.
pub struct ReadingProcessor {
    report: ReadingReport,
}

impl ReadingProcessor {
    pub fn new() -> Self {
        Self {
            report: ReadingReport::new(),
        }
    }

    pub fn process(mut self, config: &Config) -> ReadingSet {
        let mut readings = Vec::with_capacity(config.readings.len());
        for (name, entry) in &config.readings {
            if let Some(reading) = self.process_entry(name, entry) {
                debug!("{} = {} ({}, raw {})", reading.name, reading.formatted, reading.kind, reading.raw);
                readings.push(reading);
            }
        }
        ReadingSet {
            readings,
            report: self.report,
        }
    }

    fn process_entry(&mut self, name: &str, entry: &ReadingEntry) -> Option<NormalizedReading> {
        match entry {
            ReadingEntry::Text(text) => {
                let reading = self.detect(name, text)?;
                Some(NormalizedReading::new(name, reading, text.as_str()))
            }
            ReadingEntry::Typed { kind, value } => {
                let (result, original) = match value {
                    EntryValue::Text(text) => (Reading::parse(*kind, text), text.clone()),
                    EntryValue::Raw(raw) => (Reading::from_raw(*kind, *raw), raw.to_string()),
                };
                match result {
                    Ok(reading) => Some(NormalizedReading::new(name, reading, original)),
                    Err(e) => {
                        warn!("rejected {} reading '{}': {}", kind, original, e);
                        self.report.record(
                            name,
                            Problem::Rejected {
                                kind: *kind,
                                value: original,
                                error: e.to_string(),
                            },
                        );
                        None
                    }
                }
            }
        }
    }

    /// Resolve a reading written without a kind. When several kinds accept the
    /// text, the first in declaration order wins and a warning names the others.
    fn detect(&mut self, name: &str, text: &str) -> Option<Reading> {
        if !looks_like_quantity(text) {
            self.report.record(name, Problem::NotAQuantity { text: text.to_string() });
            return None;
        }

        let candidates = Reading::detect(text);
        let first = match candidates.first() {
            Some(first) => *first,
            None => {
                self.report
                    .record(name, Problem::NoMatchingKind { text: text.to_string() });
                return None;
            }
        };
        if candidates.len() > 1 {
            let kinds: Vec<_> = candidates.iter().map(|r| r.kind()).collect();
            warn!("'{}' is ambiguous between {} kinds", text, kinds.len());
            self.report.record(
                name,
                Problem::Ambiguous {
                    text: text.to_string(),
                    chosen: first.kind(),
                    candidates: kinds,
                },
            );
        }
        Some(first)
    }
}

impl Default for ReadingProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize every reading in `config`.
pub fn process_readings(config: &Config) -> ReadingSet {
    ReadingProcessor::new().process(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::kind::QuantityKind;

    fn process(toml: &str) -> ReadingSet {
        process_readings(&Config::load_from_str(toml).unwrap())
    }

    #[test]
    fn test_process_detected_and_typed() {
        let set = process(
            r#"
[readings]
supply = "3.3V"
ambient = { kind = "temperature", value = "21.5C" }
offset = { kind = "distance", value = 1500 }
"#,
        );
        assert!(set.report.is_valid());
        assert!(!set.report.has_issues());
        assert_eq!(set.readings.len(), 3);

        let supply = set.get("supply").unwrap();
        assert_eq!(supply.kind, QuantityKind::ElectricPotential);
        assert_eq!(supply.raw, 3_300_000_000);
        assert_eq!(supply.formatted, "3.300V");
        assert_eq!(supply.original, "3.3V");

        let ambient = set.get("ambient").unwrap();
        assert_eq!(ambient.raw, 294_650_000_000);
        assert_eq!(ambient.formatted, "21.500°C");

        let offset = set.get("offset").unwrap();
        assert_eq!(offset.formatted, "1.500µm");
        assert_eq!(offset.original, "1500");

        let names: Vec<_> = set.readings.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["ambient", "offset", "supply"]);
    }

    #[test]
    fn test_bad_entries_are_reported_not_fatal() {
        let set = process(
            r#"
[readings]
label = "hello"
volume = "3 l"
wrong = { kind = "pressure", value = "1bar" }
cold = { kind = "temperature", value = -1 }
fine = "10mA"
"#,
        );
        assert_eq!(set.readings.len(), 1);
        assert_eq!(set.readings[0].name, "fine");

        assert_eq!(set.report.error_count(), 4);
        let at = |name: &str| {
            let issues: Vec<_> = set.report.for_reading(name).collect();
            assert_eq!(issues.len(), 1, "issues for {}", name);
            issues[0].clone()
        };
        assert_eq!(
            at("label").problem,
            Problem::NotAQuantity {
                text: "hello".to_string()
            }
        );
        assert_eq!(at("volume").message, "'3 l' is not a valid value for any quantity");
        assert_eq!(
            at("wrong").message,
            "invalid pressure '1bar': \"bar\" is not a valid unit for physic.Pressure, need Pa"
        );
        assert_eq!(
            at("cold").problem,
            Problem::Rejected {
                kind: QuantityKind::Temperature,
                value: "-1".to_string(),
                error: "minimum value is -273.150°C".to_string(),
            }
        );
        assert_eq!(set.report.for_reading("fine").count(), 0);
    }

    #[test]
    fn test_ambiguous_detection_warns() {
        let set = process("[readings]\nc = \"1F\"\n");
        assert!(set.report.is_valid());
        let warnings: Vec<_> = set.report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].reading, "c");
        assert_eq!(
            warnings[0].problem,
            Problem::Ambiguous {
                text: "1F".to_string(),
                chosen: QuantityKind::Temperature,
                candidates: vec![QuantityKind::Temperature, QuantityKind::ElectricalCapacitance],
            }
        );
        assert_eq!(set.readings[0].kind, QuantityKind::Temperature);
    }
}
