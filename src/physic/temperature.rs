use crate::physic::error::Result;
use crate::physic::format::nano_as_string;
use crate::physic::units::{div_round, narrow, quantity, Unit, UnitTable};

quantity!(
    /// Absolute temperature in nanokelvins.
    ///
    /// Parsing never yields a value below absolute zero. Formatting prints
    /// degrees Celsius.
    Temperature(i64),
    TEMPERATURE
);

impl Temperature {
    pub const NANO_KELVIN: Temperature = Temperature(1);
    pub const MICRO_KELVIN: Temperature = Temperature(1_000);
    pub const MILLI_KELVIN: Temperature = Temperature(1_000_000);
    pub const KELVIN: Temperature = Temperature(1_000_000_000);
    pub const KILO_KELVIN: Temperature = Temperature(1_000_000_000_000);
    pub const MEGA_KELVIN: Temperature = Temperature(1_000_000_000_000_000);
    pub const GIGA_KELVIN: Temperature = Temperature(1_000_000_000_000_000_000);

    pub const ABSOLUTE_ZERO: Temperature = Temperature(0);
    pub const ZERO_CELSIUS: Temperature = Temperature(273_150_000_000);
    pub const ZERO_FAHRENHEIT: Temperature = Temperature(255_372_222_222);

    pub fn kelvin(self) -> f64 {
        self.0 as f64 / 1e9
    }

    pub fn celsius(self) -> f64 {
        (i128::from(self.0) - i128::from(Temperature::ZERO_CELSIUS.0)) as f64 / 1e9
    }

    pub fn fahrenheit(self) -> f64 {
        self.celsius() * 9.0 / 5.0 + 32.0
    }
}

fn format_temperature(v: i64) -> String {
    nano_as_string(v.saturating_sub(Temperature::ZERO_CELSIUS.0)) + "°C"
}

fn from_celsius(v: i64) -> Result<i64> {
    narrow(i128::from(v) + i128::from(Temperature::ZERO_CELSIUS.0))
}

fn from_fahrenheit(v: i64) -> Result<i64> {
    let celsius = div_round((i128::from(v) - 32_000_000_000) * 5, 9);
    narrow(celsius + i128::from(Temperature::ZERO_CELSIUS.0))
}

pub(crate) const TEMPERATURE: UnitTable = UnitTable {
    quantity: "Temperature",
    base: -9,
    valid: "K, C, °C, F or °F",
    units: &[
        Unit::si(&["K"]),
        Unit::map(&["C", "°C"], from_celsius),
        Unit::map(&["F", "°F"], from_fahrenheit),
    ],
    max: i64::MAX,
    min: 0,
    format: format_temperature,
};
