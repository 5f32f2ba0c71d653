use std::time::Duration;

use crate::physic::error::Result;
use crate::physic::format::micro_as_string;
use crate::physic::units::{div_round, narrow, quantity, Unit, UnitTable};

quantity!(
    /// Frequency in microhertz. The largest value is about 9.2 THz.
    Frequency(i64),
    FREQUENCY
);

/// Nanoseconds times microhertz in one period-frequency product.
const NANO_MICRO: i128 = 1_000_000_000_000_000;

impl Frequency {
    pub const MICRO_HERTZ: Frequency = Frequency(1);
    pub const MILLI_HERTZ: Frequency = Frequency(1_000);
    pub const HERTZ: Frequency = Frequency(1_000_000);
    pub const KILO_HERTZ: Frequency = Frequency(1_000_000_000);
    pub const MEGA_HERTZ: Frequency = Frequency(1_000_000_000_000);
    pub const GIGA_HERTZ: Frequency = Frequency(1_000_000_000_000_000);
    pub const TERA_HERTZ: Frequency = Frequency(1_000_000_000_000_000_000);

    /// One revolution per minute.
    pub const RPM: Frequency = Frequency(16_667);

    /// Duration of one cycle, rounded to the nanosecond.
    ///
    /// None for a zero or negative frequency.
    pub fn period(self) -> Option<Duration> {
        if self.0 <= 0 {
            return None;
        }
        let ns = div_round(NANO_MICRO, i128::from(self.0));
        Some(Duration::from_nanos(ns as u64))
    }

    /// Frequency whose cycle lasts `period`. None for a zero duration or one
    /// too long to register a single microhertz.
    pub fn from_period(period: Duration) -> Option<Frequency> {
        let ns = i128::try_from(period.as_nanos()).ok()?;
        if ns == 0 {
            return None;
        }
        match div_round(NANO_MICRO, ns) {
            0 => None,
            f => narrow(f).ok().map(Frequency),
        }
    }
}

fn format_frequency(v: i64) -> String {
    micro_as_string(v) + "Hz"
}

// The number was read as hertz; a revolution per minute is a sixtieth of that.
fn revolutions_per_minute(v: i64) -> Result<i64> {
    narrow(div_round(i128::from(v), 60))
}

pub(crate) const FREQUENCY: UnitTable = UnitTable {
    quantity: "Frequency",
    base: -6,
    valid: "Hz or rpm",
    units: &[
        Unit::si(&["Hz"]),
        Unit::map(&["rpm"], revolutions_per_minute),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_frequency,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic::error::PhysicError;

    #[test]
    fn test_frequency_string() {
        assert_eq!(Frequency::MICRO_HERTZ.to_string(), "1µHz");
        assert_eq!(Frequency::HERTZ.to_string(), "1Hz");
        assert_eq!((Frequency::MEGA_HERTZ * 10).to_string(), "10MHz");
        assert_eq!(Frequency(2_400_000_000_000_000).to_string(), "2.400GHz");
        assert_eq!(Frequency::MAX.to_string(), "9.223THz");
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!("10MHz".parse::<Frequency>(), Ok(Frequency::MEGA_HERTZ * 10));
        assert_eq!("1hz".parse::<Frequency>(), Ok(Frequency::HERTZ));
        assert_eq!("2.4GHz".parse::<Frequency>(), Ok(Frequency(2_400_000_000_000_000)));
        assert_eq!("1uHz".parse::<Frequency>(), Ok(Frequency::MICRO_HERTZ));
        assert_eq!("1THz".parse::<Frequency>(), Ok(Frequency::TERA_HERTZ));
        assert_eq!("1nHz".parse::<Frequency>(), Ok(Frequency(0)));
        assert_eq!("60rpm".parse::<Frequency>(), Ok(Frequency::HERTZ));
        assert_eq!("1rpm".parse::<Frequency>(), Ok(Frequency::RPM));
        assert_eq!(
            "1krpm".parse::<Frequency>(),
            Err(PhysicError::UnknownUnitPrefix {
                prefix: "k".to_string(),
                unit: "rpm",
                valid: "none",
            })
        );
        assert_eq!(
            "9.3THz".parse::<Frequency>(),
            Err(PhysicError::Overflows("9.223THz".to_string()))
        );
    }

    #[test]
    fn test_period() {
        assert_eq!(Frequency::HERTZ.period(), Some(Duration::from_secs(1)));
        assert_eq!(Frequency::KILO_HERTZ.period(), Some(Duration::from_millis(1)));
        assert_eq!((Frequency::HERTZ * 3).period(), Some(Duration::from_nanos(333_333_333)));
        assert_eq!(Frequency(0).period(), None);
        assert_eq!((-Frequency::HERTZ).period(), None);
    }

    #[test]
    fn test_from_period() {
        assert_eq!(Frequency::from_period(Duration::from_secs(1)), Some(Frequency::HERTZ));
        assert_eq!(Frequency::from_period(Duration::from_micros(1)), Some(Frequency::MEGA_HERTZ));
        assert_eq!(Frequency::from_period(Duration::from_secs(60)), Some(Frequency::RPM));
        assert_eq!(Frequency::from_period(Duration::ZERO), None);
        assert_eq!(Frequency::from_period(Duration::from_secs(10_000_000_000)), None);
    }
}
