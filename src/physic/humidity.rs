use crate::physic::units::{quantity, Conversion, Unit, UnitTable};

quantity!(
    /// Relative humidity in tenths of a micro unit (0.00001 %rH).
    ///
    /// The natural range is 0 to 100 %rH but nothing enforces it; readings from
    /// a miscalibrated sensor still parse and print.
    RelativeHumidity(i32),
    RELATIVE_HUMIDITY
);

impl RelativeHumidity {
    pub const TENTH_MICRO_RH: RelativeHumidity = RelativeHumidity(1);
    pub const MICRO_RH: RelativeHumidity = RelativeHumidity(10);
    pub const MILLI_RH: RelativeHumidity = RelativeHumidity(10_000);
    pub const PERCENT_RH: RelativeHumidity = RelativeHumidity(100_000);
}

/// Percent with at most one decimal, rounded half away from zero.
fn format_humidity(v: i64) -> String {
    let milli = RelativeHumidity::MILLI_RH.0 as u64;
    let n = (v.unsigned_abs() + milli / 2) / milli;
    if n == 0 {
        return "0%rH".to_string();
    }
    let sign = if v < 0 { "-" } else { "" };
    match n % 10 {
        0 => format!("{}{}%rH", sign, n / 10),
        frac => format!("{}{}.{}%rH", sign, n / 10, frac),
    }
}

pub(crate) const RELATIVE_HUMIDITY: UnitTable = UnitTable {
    quantity: "RelativeHumidity",
    base: -5,
    valid: "%rH or %",
    units: &[Unit {
        names: &["%rH", "%"],
        prefixable: false,
        conversion: Conversion::Identity,
    }],
    max: i32::MAX as i64,
    min: -(i32::MAX as i64),
    format: format_humidity,
};
