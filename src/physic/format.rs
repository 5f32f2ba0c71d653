use crate::physic::prefix::Prefix;

/// 1000^n for every bucket an i64 can reach.
const POW1000: [u64; 7] = [
    1,
    1_000,
    1_000_000,
    1_000_000_000,
    1_000_000_000_000,
    1_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

/// Format a count of `10^base` units with one SI prefix and at most three
/// fractional digits. The unit symbol is left to the caller.
///
/// Bucket thresholds sit half a printed step below each power of 1000, so a value
/// that would round to `1000.000` of one prefix prints as `1` of the next.
/// Inside a bucket the remainder rounds up only when it exceeds half a step.
pub fn si_string(v: i64, base: Prefix) -> String {
    if v == 0 {
        return "0".to_string();
    }
    let sign = if v < 0 { "-" } else { "" };
    // |i64::MIN| does not fit; accept the one-unit bias.
    let v = if v == i64::MIN { i64::MAX as u64 } else { v.unsigned_abs() };

    let bucket = (1..POW1000.len())
        .rev()
        .find(|&b| v >= threshold(b))
        .unwrap_or(0);
    let prefix = Prefix::from_exponent(base.exponent() + 3 * bucket as i32);
    let symbol = prefix.map(Prefix::symbol).unwrap_or("");

    if bucket == 0 {
        return format!("{}{}{}", sign, v, symbol);
    }

    let step = POW1000[bucket - 1];
    let mut milli = v / step;
    if v % step > step / 2 {
        milli += 1;
    }
    let whole = milli / 1000;
    let frac = milli % 1000;
    if frac == 0 {
        format!("{}{}{}", sign, whole, symbol)
    } else {
        format!("{}{}.{:03}{}", sign, whole, frac, symbol)
    }
}

/// Smallest magnitude printed in `bucket` (a power of 1000 above the base unit).
fn threshold(bucket: usize) -> u64 {
    let half = if bucket >= 2 { POW1000[bucket - 2] / 2 } else { 0 };
    if half == 0 {
        POW1000[bucket]
    } else {
        POW1000[bucket] - half + 1
    }
}

/// Format a count of nano units.
pub fn nano_as_string(v: i64) -> String {
    si_string(v, Prefix::Nano)
}

/// Format a count of micro units.
pub fn micro_as_string(v: i64) -> String {
    si_string(v, Prefix::Micro)
}

/// Format a count of pico units.
pub fn pico_as_string(v: i64) -> String {
    si_string(v, Prefix::Pico)
}
