use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::physic::{self, Quantity, Result};

/// Generate the kind registry and the `Reading` union from one list, so the
/// two can never disagree on the set of quantities.
macro_rules! reading_kinds {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Every physical quantity a reading can hold
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
        #[serde(rename_all = "snake_case")]
        #[value(rename_all = "snake_case")]
        pub enum QuantityKind {
            $($variant),*
        }

        impl QuantityKind {
            /// All kinds, in declaration order
            pub const ALL: &'static [QuantityKind] = &[$(QuantityKind::$variant),*];

            /// Snake case name, as written in config files and on the command line
            pub fn as_str(self) -> &'static str {
                match self {
                    $(QuantityKind::$variant => $name),*
                }
            }

            /// Accepted unit spellings
            pub fn units(self) -> &'static str {
                match self {
                    $(QuantityKind::$variant => <physic::$variant as Quantity>::UNITS),*
                }
            }
        }

        /// A typed value of any quantity
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Reading {
            $($variant(physic::$variant)),*
        }

        impl Reading {
            /// Parse `s` as a quantity of the given kind.
            pub fn parse(kind: QuantityKind, s: &str) -> Result<Reading> {
                match kind {
                    $(QuantityKind::$variant => s.parse().map(Reading::$variant)),*
                }
            }

            /// Build a reading from a count of the kind's base unit.
            pub fn from_raw(kind: QuantityKind, raw: i64) -> Result<Reading> {
                match kind {
                    $(QuantityKind::$variant => physic::$variant::from_raw(raw).map(Reading::$variant)),*
                }
            }

            pub fn kind(self) -> QuantityKind {
                match self {
                    $(Reading::$variant(_) => QuantityKind::$variant),*
                }
            }

            /// Count of the kind's base unit
            pub fn raw(self) -> i64 {
                match self {
                    $(Reading::$variant(v) => v.raw()),*
                }
            }
        }

        impl fmt::Display for Reading {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Reading::$variant(v) => fmt::Display::fmt(v, f)),*
                }
            }
        }
    };
}

reading_kinds! {
    Angle => "angle",
    Distance => "distance",
    ElectricCurrent => "electric_current",
    ElectricPotential => "electric_potential",
    ElectricResistance => "electric_resistance",
    Force => "force",
    Frequency => "frequency",
    Mass => "mass",
    Pressure => "pressure",
    RelativeHumidity => "relative_humidity",
    Speed => "speed",
    Temperature => "temperature",
    Power => "power",
    Energy => "energy",
    ElectricalCapacitance => "electrical_capacitance",
    LuminousIntensity => "luminous_intensity",
    LuminousFlux => "luminous_flux",
    MagneticFluxDensity => "magnetic_flux_density",
}

impl QuantityKind {
    /// Look a kind up by its snake case name.
    pub fn from_name(name: &str) -> Option<QuantityKind> {
        QuantityKind::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Reading {
    /// Every reading `s` parses as, in kind declaration order.
    pub fn detect(s: &str) -> Vec<Reading> {
        QuantityKind::ALL
            .iter()
            .filter_map(|&kind| Reading::parse(kind, s).ok())
            .collect()
    }
}
