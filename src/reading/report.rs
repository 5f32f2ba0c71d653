// Per-reading problems found while normalizing a readings file

use serde::Serialize;
use std::fmt;

use crate::reading::kind::QuantityKind;

/// Why a reading was skipped or needs attention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "problem", rename_all = "snake_case")]
pub enum Problem {
    /// Untyped text that is not a number followed by a unit
    NotAQuantity { text: String },
    /// Untyped text that looks like a quantity but no kind accepts
    NoMatchingKind { text: String },
    /// A typed entry its declared kind refused
    Rejected {
        kind: QuantityKind,
        value: String,
        error: String,
    },
    /// Untyped text several kinds accept; the first one is used
    Ambiguous {
        text: String,
        chosen: QuantityKind,
        candidates: Vec<QuantityKind>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Problem {
    /// Only ambiguity keeps the reading; everything else drops it.
    pub fn severity(&self) -> Severity {
        match self {
            Problem::Ambiguous { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::NotAQuantity { text } => {
                write!(f, "'{}' does not look like a physical quantity", text)
            }
            Problem::NoMatchingKind { text } => {
                write!(f, "'{}' is not a valid value for any quantity", text)
            }
            Problem::Rejected { kind, value, error } => {
                write!(f, "invalid {} '{}': {}", kind, value, error)
            }
            Problem::Ambiguous {
                text,
                chosen,
                candidates,
            } => {
                let kinds: Vec<&str> = candidates.iter().map(|k| k.as_str()).collect();
                write!(
                    f,
                    "'{}' is ambiguous between {}; using {} (set kind explicitly)",
                    text,
                    kinds.join(", "),
                    chosen
                )
            }
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// One problem attached to the reading it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingIssue {
    /// Key of the reading under `[readings]`
    pub reading: String,
    pub severity: Severity,
    #[serde(flatten)]
    pub problem: Problem,
    pub message: String,
}

/// Issues in the order their readings were processed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadingReport {
    pub issues: Vec<ReadingIssue>,
}

impl ReadingReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reading: &str, problem: Problem) {
        self.issues.push(ReadingIssue {
            reading: reading.to_string(),
            severity: problem.severity(),
            message: problem.to_string(),
            problem,
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ReadingIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ReadingIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Issues recorded against the reading called `name`.
    pub fn for_reading<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ReadingIssue> {
        self.issues.iter().filter(move |i| i.reading == name)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// True when every reading made it into the set.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

impl fmt::Display for ReadingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "{}: readings.{}: {}", issue.severity, issue.reading, issue.message)?;
        }
        if self.has_issues() {
            let errors = self.error_count();
            write!(
                f,
                "{} error(s), {} warning(s)",
                errors,
                self.issues.len() - errors
            )?;
        }
        Ok(())
    }
}
