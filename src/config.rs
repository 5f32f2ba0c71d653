use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::reading::QuantityKind;

/// A readings file
///
/// ```toml
/// [readings]
/// supply = "3.3V"
/// ambient = { kind = "temperature", value = "21.5C" }
/// offset = { kind = "distance", value = 1500 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Named readings, kept sorted by name
    #[serde(default)]
    pub readings: BTreeMap<String, ReadingEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ReadingEntry {
    // Simple: just the text, the kind is detected
    Text(String),
    // Typed: an explicit kind with text or a raw base-unit count
    Typed { kind: QuantityKind, value: EntryValue },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EntryValue {
    Raw(i64),
    Text(String),
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::load_from_str(&content)?;
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn empty() -> Self {
        Self {
            readings: BTreeMap::new(),
        }
    }
}
