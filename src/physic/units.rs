// Shared machinery behind every quantity type: the unit tables, the parse
// skeleton and the `quantity!` generator.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::physic::decimal::{atod, decimal_mul, dtoi, Decimal};
use crate::physic::error::{PhysicError, Result};
use crate::physic::prefix::{parse_prefix, Prefix, VALID_PREFIXES};

/// Digits at or above the base unit resolution a conversion may drop before
/// the result is rejected.
pub const MAX_PRECISION_LOSS: u32 = 9;

/// A physical quantity stored as a fixed-point count of its base unit
pub trait Quantity: Copy + fmt::Display + FromStr<Err = PhysicError> {
    /// Type name used in error messages, e.g. `Distance`
    const NAME: &'static str;

    /// Accepted unit spellings, as listed in error messages
    const UNITS: &'static str;

    /// Count of base units, widened to i64.
    fn raw(self) -> i64;

    /// Build a value from a count of base units, within the same bounds
    /// parsing enforces.
    fn from_raw(raw: i64) -> Result<Self>;
}

/// Something that can be assigned from a string and rendered back to one,
/// e.g. a command-line flag value.
pub trait Value: fmt::Display {
    fn set(&mut self, s: &str) -> Result<()>;
}

impl<T: Quantity> Value for T {
    fn set(&mut self, s: &str) -> Result<()> {
        *self = s.parse()?;
        Ok(())
    }
}

/// How a parsed number in a given unit becomes a count of base units
pub(crate) enum Conversion {
    /// The unit is the SI unit itself.
    Identity,
    /// One of this unit equals this exact decimal amount of the SI unit.
    Factor(Decimal),
    /// Applied to the count obtained by reading the number as the SI unit.
    Map(fn(i64) -> Result<i64>),
}

pub(crate) struct Unit {
    /// Accepted spellings; the first one is canonical.
    pub names: &'static [&'static str],
    pub prefixable: bool,
    pub conversion: Conversion,
}

impl Unit {
    pub const fn si(names: &'static [&'static str]) -> Unit {
        Unit {
            names,
            prefixable: true,
            conversion: Conversion::Identity,
        }
    }

    pub const fn factor(names: &'static [&'static str], factor: Decimal) -> Unit {
        Unit {
            names,
            prefixable: false,
            conversion: Conversion::Factor(factor),
        }
    }

    pub const fn map(names: &'static [&'static str], map: fn(i64) -> Result<i64>) -> Unit {
        Unit {
            names,
            prefixable: false,
            conversion: Conversion::Map(map),
        }
    }

    pub const fn prefixable(mut self) -> Unit {
        self.prefixable = true;
        self
    }

    fn matches(&self, s: &str) -> bool {
        self.names.iter().any(|name| same_unit(name, s))
    }
}

/// Everything the parse skeleton needs to know about one quantity type
pub(crate) struct UnitTable {
    pub quantity: &'static str,
    /// Power of ten of one count relative to the SI unit, e.g. -9 for nano.
    pub base: i32,
    pub valid: &'static str,
    pub units: &'static [Unit],
    pub max: i64,
    pub min: i64,
    pub format: fn(i64) -> String,
}

impl UnitTable {
    /// Parse `s` into a count of base units.
    pub fn parse(&self, s: &str) -> Result<i64> {
        let s = s.trim();
        let (d, n) = match atod(s) {
            Ok(parsed) => parsed,
            Err(PhysicError::NotANumber) => {
                let rest = s.trim_start_matches(['+', '-']).trim_start();
                return Err(if self.names_unit(rest) {
                    PhysicError::NotANumber
                } else {
                    PhysicError::NotANumberOrUnit { valid: self.valid }
                });
            }
            Err(e) => return Err(e),
        };

        let suffix = s[n..].trim_start();
        if suffix.is_empty() {
            return Err(PhysicError::NoUnitsProvided { valid: self.valid });
        }
        let (unit, prefix) = self
            .resolve(suffix)
            .ok_or_else(|| self.unit_error(suffix))?;

        let scale = prefix.exponent() - self.base;
        let v = match unit.conversion {
            Conversion::Identity => dtoi(d, scale),
            Conversion::Factor(factor) => {
                let (product, dropped) = decimal_mul(d, factor);
                // Dropped digits below one base unit are rounded away by dtoi anyway.
                let lost = product
                    .exponent
                    .saturating_add(scale)
                    .clamp(0, dropped as i32) as u32;
                if lost > MAX_PRECISION_LOSS {
                    return Err(PhysicError::PrecisionLoss { digits: lost });
                }
                dtoi(product, scale)
            }
            Conversion::Map(map) => dtoi(d, scale).and_then(map),
        }
        .map_err(|e| self.bounded(e))?;

        self.check(v)
    }

    /// Find the unit named by `suffix`, with an optional SI prefix.
    ///
    /// A full match wins over a prefix, so `m` is metres and `Mile` is miles
    /// rather than milli-nothing and mega-ile.
    fn resolve(&self, suffix: &str) -> Option<(&Unit, Prefix)> {
        if let Some(unit) = self.units.iter().find(|u| u.matches(suffix)) {
            return Some((unit, Prefix::Unit));
        }
        let (prefix, size) = parse_prefix(suffix);
        if size == 0 {
            return None;
        }
        let rest = &suffix[size..];
        self.units
            .iter()
            .find(|u| u.prefixable && u.matches(rest))
            .map(|u| (u, prefix))
    }

    /// Whether `s` is, or ends with, one of the unit names.
    fn names_unit(&self, s: &str) -> bool {
        self.resolve(s).is_some()
            || self
                .units
                .iter()
                .flat_map(|u| u.names.iter())
                .any(|name| ends_with_unit(s, name))
    }

    fn unit_error(&self, suffix: &str) -> PhysicError {
        let found = self
            .units
            .iter()
            .flat_map(|u| u.names.iter().map(move |name| (u, *name)))
            .filter(|(_, name)| ends_with_unit(suffix, name))
            .min_by_key(|(_, name)| Reverse(name.len()));
        match found {
            Some((unit, name)) => PhysicError::UnknownUnitPrefix {
                prefix: suffix[..suffix.len() - name.len()].to_string(),
                unit: name,
                valid: if unit.prefixable { VALID_PREFIXES } else { "none" },
            },
            None => PhysicError::IncorrectUnit {
                unit: suffix.to_string(),
                quantity: self.quantity,
                valid: self.valid,
            },
        }
    }

    fn bounded(&self, e: PhysicError) -> PhysicError {
        e.with_bounds(|| (self.format)(self.max), || (self.format)(self.min))
    }

    /// Check a raw count against the table bounds.
    pub fn check(&self, v: i64) -> Result<i64> {
        if v > self.max {
            return Err(PhysicError::Overflows((self.format)(self.max)));
        }
        if v < self.min {
            return Err(PhysicError::Underflows((self.format)(self.min)));
        }
        Ok(v)
    }
}

/// ASCII spellings compare case-insensitively, symbols such as `Ω` and `°C` literally.
fn same_unit(name: &str, s: &str) -> bool {
    if name.is_ascii() {
        name.eq_ignore_ascii_case(s)
    } else {
        name == s
    }
}

/// True when `s` is `name` preceded by at least one more character.
fn ends_with_unit(s: &str, name: &str) -> bool {
    if s.len() <= name.len() {
        return false;
    }
    let cut = s.len() - name.len();
    s.is_char_boundary(cut) && same_unit(name, &s[cut..])
}

/// Round `n / d` half away from zero.
pub(crate) fn div_round(n: i128, d: i128) -> i128 {
    let q = n / d;
    let r = n % d;
    if 2 * r.abs() >= d.abs() {
        if (n < 0) != (d < 0) {
            q - 1
        } else {
            q + 1
        }
    } else {
        q
    }
}

/// Narrow an i128 intermediate back into the i64 range.
pub(crate) fn narrow(v: i128) -> Result<i64> {
    i64::try_from(v).map_err(|_| {
        if v < 0 {
            PhysicError::Underflows(String::new())
        } else {
            PhysicError::Overflows(String::new())
        }
    })
}

struct CountVisitor<'a>(&'a UnitTable);

impl<'de, 'a> serde::de::Visitor<'de> for CountVisitor<'a> {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a physic.{} string or integer count", self.0.quantity)
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<i64, E> {
        self.0.check(v).map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<i64, E> {
        let v = i64::try_from(v).map_err(|_| E::custom(PhysicError::Overflows((self.0.format)(self.0.max))))?;
        self.visit_i64(v)
    }

    fn visit_str<E: serde::de::Error>(self, s: &str) -> std::result::Result<i64, E> {
        self.0.parse(s).map_err(E::custom)
    }
}

pub(crate) fn deserialize_count<'de, D>(deserializer: D, table: &UnitTable) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(CountVisitor(table))
}

/// Generate a quantity newtype: arithmetic, `Display`, `FromStr`, serde.
///
/// Serialization writes the exact count; deserialization takes either a count
/// or a string in any accepted unit.
macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident($repr:ty), $table:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $repr);

        impl $name {
            pub const MAX: $name = $name(<$repr>::MAX);
            pub const MIN: $name = $name(-<$repr>::MAX);
        }

        impl $crate::physic::units::Quantity for $name {
            const NAME: &'static str = stringify!($name);
            const UNITS: &'static str = $table.valid;

            fn raw(self) -> i64 {
                i64::from(self.0)
            }

            fn from_raw(raw: i64) -> $crate::physic::error::Result<Self> {
                $table.check(raw).map(|v| $name(v as $repr))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&($table.format)(i64::from(self.0)))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::physic::error::PhysicError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                // The table bounds keep the count inside the representation.
                $table.parse(s).map(|v| $name(v as $repr))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_i64(i64::from(self.0))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                $crate::physic::units::deserialize_count(deserializer, &$table).map(|v| $name(v as $repr))
            }
        }

        impl ::std::ops::Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = $name;
            fn neg(self) -> $name {
                $name(-self.0)
            }
        }

        impl ::std::ops::AddAssign for $name {
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl ::std::ops::SubAssign for $name {
            fn sub_assign(&mut self, rhs: $name) {
                self.0 -= rhs.0;
            }
        }

        impl ::std::ops::Mul<$repr> for $name {
            type Output = $name;
            fn mul(self, rhs: $repr) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl ::std::ops::Mul<$name> for $repr {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self * rhs.0)
            }
        }

        impl ::std::ops::Div<$repr> for $name {
            type Output = $name;
            fn div(self, rhs: $repr) -> $name {
                $name(self.0 / rhs)
            }
        }

        /// Ratio of two values of the same quantity.
        impl ::std::ops::Div for $name {
            type Output = $repr;
            fn div(self, rhs: $name) -> $repr {
                self.0 / rhs.0
            }
        }

        impl ::std::iter::Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                iter.fold($name(0), |acc, v| acc + v)
            }
        }
    };
}

pub(crate) use quantity;
