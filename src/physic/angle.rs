use crate::physic::decimal::Decimal;
use crate::physic::units::{quantity, Unit, UnitTable};

quantity!(
    /// Angle in nanoradians. The largest value is about 528 billion degrees.
    Angle(i64),
    ANGLE
);

impl Angle {
    pub const NANO_RADIAN: Angle = Angle(1);
    pub const MICRO_RADIAN: Angle = Angle(1_000);
    pub const MILLI_RADIAN: Angle = Angle(1_000_000);
    pub const RADIAN: Angle = Angle(1_000_000_000);

    /// π/180 rad, rounded to the nearest nanoradian.
    pub const DEGREE: Angle = Angle(17_453_293);
    pub const PI: Angle = Angle(3_141_592_654);
    pub const THETA: Angle = Angle(6_283_185_307);
}

/// Degrees with three decimals below 10°, two below 100°, one below 1000°
/// and none above. The bucket is picked after rounding.
fn format_angle(v: i64) -> String {
    let sign = if v < 0 { "-" } else { "" };
    let a = u128::from(v.unsigned_abs());
    let degree = Angle::DEGREE.0 as u128;

    for (decimals, scale) in [(3usize, 1_000u128), (2, 100), (1, 10)] {
        let n = (a * scale + degree / 2) / degree;
        if n == 0 {
            return "0°".to_string();
        }
        if n < 10_000 {
            return format!(
                "{}{}.{:0width$}°",
                sign,
                n / scale,
                n % scale,
                width = decimals
            );
        }
    }
    format!("{}{}°", sign, (a + degree / 2) / degree)
}

pub(crate) const ANGLE: UnitTable = UnitTable {
    quantity: "Angle",
    base: -9,
    valid: "rad, ° or deg",
    units: &[
        Unit::si(&["rad"]),
        Unit::factor(&["°", "deg"], Decimal::new(17_453_292_519_943_295, -18, false)),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_angle,
};
