use crate::physic::decimal::Decimal;
use crate::physic::error::Result;
use crate::physic::format::nano_as_string;
use crate::physic::units::{div_round, narrow, quantity, Unit, UnitTable};

quantity!(
    /// Distance in nanometres. The largest value is about 9.2 Gm.
    Distance(i64),
    DISTANCE
);

impl Distance {
    pub const NANO_METRE: Distance = Distance(1);
    pub const MICRO_METRE: Distance = Distance(1_000);
    pub const MILLI_METRE: Distance = Distance(1_000_000);
    pub const METRE: Distance = Distance(1_000_000_000);
    pub const KILO_METRE: Distance = Distance(1_000_000_000_000);
    pub const MEGA_METRE: Distance = Distance(1_000_000_000_000_000);
    pub const GIGA_METRE: Distance = Distance(1_000_000_000_000_000_000);

    pub const INCH: Distance = Distance(25_400_000);
    pub const FOOT: Distance = Distance(304_800_000);
    pub const YARD: Distance = Distance(914_400_000);
    pub const MILE: Distance = Distance(1_609_344_000_000);
}

fn format_distance(v: i64) -> String {
    nano_as_string(v) + "m"
}

pub(crate) const DISTANCE: UnitTable = UnitTable {
    quantity: "Distance",
    base: -9,
    valid: "m, Mile, in, ft or yd",
    units: &[
        Unit::si(&["m"]),
        Unit::factor(&["Mile", "mile"], Decimal::new(1_609_344, -3, false)),
        Unit::factor(&["in"], Decimal::new(254, -4, false)),
        Unit::factor(&["ft"], Decimal::new(3_048, -4, false)),
        Unit::factor(&["yd"], Decimal::new(9_144, -4, false)),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_distance,
};

quantity!(
    /// Force in nanonewtons. The largest value is about 9.2 GN.
    Force(i64),
    FORCE
);

impl Force {
    pub const NANO_NEWTON: Force = Force(1);
    pub const MICRO_NEWTON: Force = Force(1_000);
    pub const MILLI_NEWTON: Force = Force(1_000_000);
    pub const NEWTON: Force = Force(1_000_000_000);
    pub const KILO_NEWTON: Force = Force(1_000_000_000_000);
    pub const MEGA_NEWTON: Force = Force(1_000_000_000_000_000);
    pub const GIGA_NEWTON: Force = Force(1_000_000_000_000_000_000);

    /// Standard gravity acting on one kilogram.
    pub const EARTH_GRAVITY: Force = Force(9_806_650_000);
    pub const POUND_FORCE: Force = Force(4_448_221_615);
}

fn format_force(v: i64) -> String {
    nano_as_string(v) + "N"
}

pub(crate) const FORCE: UnitTable = UnitTable {
    quantity: "Force",
    base: -9,
    valid: "N or lbf",
    units: &[
        Unit::si(&["N"]),
        Unit::factor(&["lbf"], Decimal::new(44_482_216_152_605, -13, false)),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_force,
};

quantity!(
    /// Mass in nanograms. The largest value is about 9.2 Gg (9.2 kt).
    Mass(i64),
    MASS
);

impl Mass {
    pub const NANO_GRAM: Mass = Mass(1);
    pub const MICRO_GRAM: Mass = Mass(1_000);
    pub const MILLI_GRAM: Mass = Mass(1_000_000);
    pub const GRAM: Mass = Mass(1_000_000_000);
    pub const KILO_GRAM: Mass = Mass(1_000_000_000_000);
    pub const MEGA_GRAM: Mass = Mass(1_000_000_000_000_000);
    pub const GIGA_GRAM: Mass = Mass(1_000_000_000_000_000_000);
    pub const TONNE: Mass = Mass::MEGA_GRAM;

    pub const OUNCE: Mass = Mass(28_349_523_125);
    pub const POUND: Mass = Mass(453_592_370_000);
}

fn format_mass(v: i64) -> String {
    nano_as_string(v) + "g"
}

pub(crate) const MASS: UnitTable = UnitTable {
    quantity: "Mass",
    base: -9,
    valid: "g, lb or oz",
    units: &[
        Unit::si(&["g"]),
        Unit::factor(&["lb"], Decimal::new(45_359_237, -5, false)),
        Unit::factor(&["oz"], Decimal::new(28_349_523_125, -9, false)),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_mass,
};

quantity!(
    /// Pressure in nanopascals. The largest value is about 9.2 GPa.
    Pressure(i64),
    PRESSURE
);

impl Pressure {
    pub const NANO_PASCAL: Pressure = Pressure(1);
    pub const MICRO_PASCAL: Pressure = Pressure(1_000);
    pub const MILLI_PASCAL: Pressure = Pressure(1_000_000);
    pub const PASCAL: Pressure = Pressure(1_000_000_000);
    pub const KILO_PASCAL: Pressure = Pressure(1_000_000_000_000);
    pub const MEGA_PASCAL: Pressure = Pressure(1_000_000_000_000_000);
    pub const GIGA_PASCAL: Pressure = Pressure(1_000_000_000_000_000_000);
}

fn format_pressure(v: i64) -> String {
    nano_as_string(v) + "Pa"
}

pub(crate) const PRESSURE: UnitTable = UnitTable {
    quantity: "Pressure",
    base: -9,
    valid: "Pa",
    units: &[Unit::si(&["Pa"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_pressure,
};

quantity!(
    /// Speed in nanometres per second. The largest value is about 9.2 Gm/s,
    /// comfortably above the speed of light.
    Speed(i64),
    SPEED
);

impl Speed {
    pub const NANO_METRE_PER_SECOND: Speed = Speed(1);
    pub const MICRO_METRE_PER_SECOND: Speed = Speed(1_000);
    pub const MILLI_METRE_PER_SECOND: Speed = Speed(1_000_000);
    pub const METRE_PER_SECOND: Speed = Speed(1_000_000_000);
    pub const KILO_METRE_PER_SECOND: Speed = Speed(1_000_000_000_000);
    pub const MEGA_METRE_PER_SECOND: Speed = Speed(1_000_000_000_000_000);
    pub const GIGA_METRE_PER_SECOND: Speed = Speed(1_000_000_000_000_000_000);

    pub const LIGHT_SPEED: Speed = Speed(299_792_458_000_000_000);

    pub const KILO_METRE_PER_HOUR: Speed = Speed(277_777_778);
    pub const MILE_PER_HOUR: Speed = Speed(447_040_000);
    pub const FOOT_PER_SECOND: Speed = Speed(304_800_000);
}

fn format_speed(v: i64) -> String {
    nano_as_string(v) + "m/s"
}

// The number was read as metres per second, so only the 3600 s/h remains.
fn kilometres_per_hour(v: i64) -> Result<i64> {
    narrow(div_round(i128::from(v) * 1_000, 3_600))
}

pub(crate) const SPEED: UnitTable = UnitTable {
    quantity: "Speed",
    base: -9,
    valid: "m/s, mph, kph, km/h or fps",
    units: &[
        Unit::si(&["m/s"]),
        Unit::factor(&["mph"], Decimal::new(44_704, -5, false)),
        Unit::map(&["kph", "km/h"], kilometres_per_hour),
        Unit::factor(&["fps"], Decimal::new(3_048, -4, false)),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_speed,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic::error::PhysicError;

    #[test]
    fn test_distance_string() {
        assert_eq!(Distance(0).to_string(), "0m");
        assert_eq!(Distance::NANO_METRE.to_string(), "1nm");
        assert_eq!(Distance::METRE.to_string(), "1m");
        assert_eq!((Distance::KILO_METRE * 3).to_string(), "3km");
        assert_eq!(Distance::MILE.to_string(), "1.609km");
        assert_eq!(Distance::INCH.to_string(), "25.400mm");
        assert_eq!(Distance::MAX.to_string(), "9.223Gm");
        assert_eq!(Distance::MIN.to_string(), "-9.223Gm");
    }

    #[test]
    fn test_distance_parse() {
        let cases = [
            ("1m", Distance::METRE),
            ("1mm", Distance::MILLI_METRE),
            ("1Mm", Distance::MEGA_METRE),
            ("1km", Distance::KILO_METRE),
            ("1µm", Distance::MICRO_METRE),
            ("1um", Distance::MICRO_METRE),
            ("-2.5km", Distance::KILO_METRE * -5 / 2),
            ("1Mile", Distance::MILE),
            ("1mile", Distance::MILE),
            ("1in", Distance::INCH),
            ("1ft", Distance::FOOT),
            ("3ft", Distance::YARD),
            ("1yd", Distance::YARD),
            ("12 in", Distance::FOOT),
            ("9.223Gm", Distance(9_223_000_000_000_000_000)),
        ];
        for (input, want) in cases {
            assert_eq!(input.parse::<Distance>(), Ok(want), "parse({:?})", input);
        }
        assert_eq!(Distance::MILE.0, 1_609_344_000_000);
    }

    #[test]
    fn test_distance_parse_errors() {
        assert_eq!("m".parse::<Distance>(), Err(PhysicError::NotANumber));
        assert_eq!(
            "abc".parse::<Distance>(),
            Err(PhysicError::NotANumberOrUnit {
                valid: "m, Mile, in, ft or yd"
            })
        );
        assert_eq!(
            "10".parse::<Distance>(),
            Err(PhysicError::NoUnitsProvided {
                valid: "m, Mile, in, ft or yd"
            })
        );
        assert_eq!(
            "10xm".parse::<Distance>(),
            Err(PhysicError::UnknownUnitPrefix {
                prefix: "x".to_string(),
                unit: "m",
                valid: "p,n,u,µ,m,k,M,G or T",
            })
        );
        assert_eq!(
            "10kMile".parse::<Distance>(),
            Err(PhysicError::UnknownUnitPrefix {
                prefix: "k".to_string(),
                unit: "Mile",
                valid: "none",
            })
        );
        assert_eq!(
            "1-2".parse::<Distance>(),
            Err(PhysicError::IncorrectUnit {
                unit: "-2".to_string(),
                quantity: "Distance",
                valid: "m, Mile, in, ft or yd",
            })
        );
        assert_eq!(
            "9.3Gm".parse::<Distance>(),
            Err(PhysicError::Overflows("9.223Gm".to_string()))
        );
        assert_eq!(
            "-9.3Gm".parse::<Distance>(),
            Err(PhysicError::Underflows("-9.223Gm".to_string()))
        );
        assert_eq!("10Gm".parse::<Distance>(), Err(PhysicError::ExponentOverflow));
        assert_eq!("1Tm".parse::<Distance>(), Err(PhysicError::ExponentOverflow));
    }

    #[test]
    fn test_force() {
        assert_eq!("1N".parse::<Force>(), Ok(Force::NEWTON));
        assert_eq!("1lbf".parse::<Force>(), Ok(Force::POUND_FORCE));
        assert_eq!("2.5kN".parse::<Force>(), Ok(Force(2_500_000_000_000)));
        assert_eq!(Force::EARTH_GRAVITY.to_string(), "9.807N");
        assert_eq!(Force::POUND_FORCE.to_string(), "4.448N");
    }

    #[test]
    fn test_mass() {
        assert_eq!("1kg".parse::<Mass>(), Ok(Mass::KILO_GRAM));
        assert_eq!("1lb".parse::<Mass>(), Ok(Mass::POUND));
        assert_eq!("1oz".parse::<Mass>(), Ok(Mass::OUNCE));
        assert_eq!("16oz".parse::<Mass>(), Ok(Mass::POUND));
        assert_eq!(Mass::POUND.to_string(), "453.592g");
        assert_eq!(Mass::TONNE.to_string(), "1Mg");
    }

    #[test]
    fn test_pressure() {
        assert_eq!("101.325kPa".parse::<Pressure>(), Ok(Pressure(101_325_000_000_000)));
        assert_eq!("1pa".parse::<Pressure>(), Ok(Pressure::PASCAL));
        assert_eq!(Pressure(101_325_000_000_000).to_string(), "101.325kPa");
        assert_eq!(
            "1bar".parse::<Pressure>(),
            Err(PhysicError::IncorrectUnit {
                unit: "bar".to_string(),
                quantity: "Pressure",
                valid: "Pa",
            })
        );
    }

    #[test]
    fn test_speed() {
        assert_eq!("1m/s".parse::<Speed>(), Ok(Speed::METRE_PER_SECOND));
        assert_eq!("1kph".parse::<Speed>(), Ok(Speed::KILO_METRE_PER_HOUR));
        assert_eq!("1km/h".parse::<Speed>(), Ok(Speed::KILO_METRE_PER_HOUR));
        assert_eq!("100kph".parse::<Speed>(), Ok(Speed(27_777_777_778)));
        assert_eq!("1mph".parse::<Speed>(), Ok(Speed::MILE_PER_HOUR));
        assert_eq!("1fps".parse::<Speed>(), Ok(Speed::FOOT_PER_SECOND));
        assert_eq!("1mm/s".parse::<Speed>(), Ok(Speed::MILLI_METRE_PER_SECOND));
        assert_eq!(Speed(27_777_777_778).to_string(), "27.778m/s");
        assert_eq!(Speed::LIGHT_SPEED.to_string(), "299.792Mm/s");
    }
}
