// Exact decimal arithmetic backing every quantity parser.
//
// A literal is scanned into (digits, exponent, negative) and only then scaled into
// a fixed-point integer, so no value ever passes through a float.

use crate::physic::error::{PhysicError, Result};

/// Most significant digits kept by `atod`; 10^18 still fits an i64.
pub const MAX_DIGITS: u32 = 18;

/// Largest shift `dtoi` accepts before giving up.
pub const MAX_EXPONENT: i32 = 18;

/// Powers of ten that fit in a u64.
const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Exact decimal value `digits * 10^exponent`, negated when `negative` is set
///
/// Zero is always `{ digits: 0, exponent: 0, negative: false }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decimal {
    pub digits: u64,
    pub exponent: i32,
    pub negative: bool,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal::new(0, 0, false);

    pub const fn new(digits: u64, exponent: i32, negative: bool) -> Self {
        if digits == 0 {
            return Decimal {
                digits: 0,
                exponent: 0,
                negative: false,
            };
        }
        Decimal {
            digits,
            exponent,
            negative,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.digits == 0
    }
}

/// Scan the numeric prefix of `s`.
///
/// Returns the decimal and the number of bytes consumed; whatever follows is the
/// unit suffix. A sign is only accepted before the first digit or decimal point,
/// a later one ends the number.
pub fn atod(s: &str) -> Result<(Decimal, usize)> {
    let bytes = s.as_bytes();
    let mut end = bytes.len();

    let mut digits: u64 = 0;
    let mut kept: u32 = 0;
    // Significant digits truncated once `kept` reached MAX_DIGITS.
    let mut dropped: i32 = 0;
    // Zeros after the last non-zero digit, folded into the exponent unless
    // another non-zero digit follows.
    let mut pending_zeros: u32 = 0;
    let mut fraction_digits: i32 = 0;

    let mut seen_digit = false;
    let mut seen_point = false;
    let mut seen_sign = false;
    let mut negative = false;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'+' | b'-' => {
                if seen_digit || seen_point {
                    end = i;
                    break;
                }
                if seen_sign {
                    return Err(PhysicError::MultipleSignSymbols);
                }
                seen_sign = true;
                negative = b == b'-';
            }
            b'.' => {
                if seen_point {
                    return Err(PhysicError::MultipleDecimalPoints);
                }
                seen_point = true;
            }
            b'0'..=b'9' => {
                seen_digit = true;
                if seen_point {
                    fraction_digits = fraction_digits.saturating_add(1);
                }
                let d = u64::from(b - b'0');
                if d == 0 {
                    // Leading zeros carry no information.
                    if digits != 0 {
                        pending_zeros += 1;
                    }
                    continue;
                }
                for _ in 0..pending_zeros {
                    push_digit(&mut digits, &mut kept, &mut dropped, 0);
                }
                pending_zeros = 0;
                push_digit(&mut digits, &mut kept, &mut dropped, d);
            }
            _ => {
                end = i;
                break;
            }
        }
    }

    if !seen_digit {
        return Err(PhysicError::NotANumber);
    }
    if digits == 0 {
        return Ok((Decimal::ZERO, end));
    }

    let exponent = (pending_zeros as i32)
        .saturating_add(dropped)
        .saturating_sub(fraction_digits);
    Ok((Decimal::new(digits, exponent, negative), end))
}

fn push_digit(digits: &mut u64, kept: &mut u32, dropped: &mut i32, d: u64) {
    if *kept < MAX_DIGITS {
        *digits = *digits * 10 + d;
        *kept += 1;
    } else {
        *dropped = dropped.saturating_add(1);
    }
}

/// Convert a decimal into a fixed-point integer after shifting it by `scale`
/// powers of ten.
///
/// Division rounds half away from zero. Multiplication that leaves the i64 range
/// saturates: the error carries `i64::MAX` or `-i64::MAX` as its detail.
pub fn dtoi(d: Decimal, scale: i32) -> Result<i64> {
    if d.is_zero() {
        return Ok(0);
    }
    let mag = d.exponent.saturating_add(scale);
    if mag > MAX_EXPONENT {
        return Err(PhysicError::ExponentOverflow);
    }

    let magnitude: u64 = if mag >= 0 {
        match d.digits.checked_mul(POW10[mag as usize]) {
            Some(v) if v <= i64::MAX as u64 => v,
            _ => return Err(saturated(d.negative)),
        }
    } else if mag < -(POW10.len() as i32) {
        // Even u64::MAX shifted this far is below one half.
        0
    } else {
        let div = POW10[(-mag) as usize - 1] as u128 * 10;
        let v = (u128::from(d.digits) + div / 2) / div;
        if v > i64::MAX as u128 {
            return Err(saturated(d.negative));
        }
        v as u64
    };

    let v = magnitude as i64;
    Ok(if d.negative { -v } else { v })
}

fn saturated(negative: bool) -> PhysicError {
    if negative {
        PhysicError::Underflows((-i64::MAX).to_string())
    } else {
        PhysicError::Overflows(i64::MAX.to_string())
    }
}

/// Multiply two decimals exactly, dropping least significant digits only while
/// the product does not fit in 64 bits.
///
/// Returns the normalized product and how many nonzero-carrying digits were
/// dropped. Trailing zeros move into the exponent and are never counted.
pub fn decimal_mul(a: Decimal, b: Decimal) -> (Decimal, u32) {
    if a.is_zero() || b.is_zero() {
        return (Decimal::ZERO, 0);
    }
    let mut product = u128::from(a.digits) * u128::from(b.digits);
    let mut exponent = a.exponent.saturating_add(b.exponent);
    while product % 10 == 0 {
        product /= 10;
        exponent = exponent.saturating_add(1);
    }
    let mut dropped = 0;
    while product > u128::from(u64::MAX) {
        product /= 10;
        exponent = exponent.saturating_add(1);
        dropped += 1;
    }
    (
        Decimal::new(product as u64, exponent, a.negative != b.negative),
        dropped,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(digits: u64, exponent: i32, negative: bool) -> Decimal {
        Decimal::new(digits, exponent, negative)
    }

    #[test]
    fn test_atod_simple() {
        assert_eq!(atod("123").unwrap(), (dec(123, 0, false), 3));
        assert_eq!(atod("-123").unwrap(), (dec(123, 0, true), 4));
        assert_eq!(atod("+123").unwrap(), (dec(123, 0, false), 4));
        assert_eq!(atod("12.5mA").unwrap(), (dec(125, -1, false), 4));
        assert_eq!(atod("1n").unwrap(), (dec(1, 0, false), 1));
    }

    #[test]
    fn test_atod_zeros() {
        assert_eq!(atod("007").unwrap(), (dec(7, 0, false), 3));
        assert_eq!(atod("1.200").unwrap(), (dec(12, -1, false), 5));
        assert_eq!(atod("200").unwrap(), (dec(2, 2, false), 3));
        assert_eq!(atod("200.0").unwrap(), (dec(2, 2, false), 5));
        assert_eq!(atod("100.5").unwrap(), (dec(1005, -1, false), 5));
        assert_eq!(atod(".01").unwrap(), (dec(1, -2, false), 3));
        assert_eq!(atod("0.00001%rH").unwrap(), (dec(1, -5, false), 7));
        assert_eq!(atod("0").unwrap(), (Decimal::ZERO, 1));
        assert_eq!(atod("-0.000V").unwrap(), (Decimal::ZERO, 6));
        assert_eq!(atod("1.").unwrap(), (dec(1, 0, false), 2));
    }

    #[test]
    fn test_atod_sign_after_digits_ends_number() {
        assert_eq!(atod("1-2").unwrap(), (dec(1, 0, false), 1));
        assert_eq!(atod("1.5+").unwrap(), (dec(15, -1, false), 3));
    }

    #[test]
    fn test_atod_errors() {
        assert_eq!(atod(""), Err(PhysicError::NotANumber));
        assert_eq!(atod("mA"), Err(PhysicError::NotANumber));
        assert_eq!(atod("-"), Err(PhysicError::NotANumber));
        assert_eq!(atod("."), Err(PhysicError::NotANumber));
        assert_eq!(atod("1.1.1"), Err(PhysicError::MultipleDecimalPoints));
        assert_eq!(atod("--100"), Err(PhysicError::MultipleSignSymbols));
        assert_eq!(atod("+-100"), Err(PhysicError::MultipleSignSymbols));
        assert_eq!(atod("-+100"), Err(PhysicError::MultipleSignSymbols));
    }

    #[test]
    fn test_atod_truncates_long_literals() {
        let (d, n) = atod("12345678901234567890123").unwrap();
        assert_eq!(d, dec(123456789012345678, 5, false));
        assert_eq!(n, 23);

        let (d, _) = atod("1.2345678901234567890").unwrap();
        assert_eq!(d, dec(123456789012345678, -17, false));
    }

    #[test]
    fn test_dtoi() {
        assert_eq!(dtoi(dec(123, 0, false), 0), Ok(123));
        assert_eq!(dtoi(dec(123, 0, true), 0), Ok(-123));
        assert_eq!(dtoi(dec(125, -1, false), 6), Ok(12_500_000));
        assert_eq!(dtoi(dec(1, 0, false), 18), Ok(1_000_000_000_000_000_000));
        assert_eq!(dtoi(Decimal::ZERO, 24), Ok(0));
    }

    #[test]
    fn test_dtoi_rounding() {
        assert_eq!(dtoi(dec(5, -1, false), 0), Ok(1));
        assert_eq!(dtoi(dec(5, -1, true), 0), Ok(-1));
        assert_eq!(dtoi(dec(4, -1, false), 0), Ok(0));
        assert_eq!(dtoi(dec(15, -1, false), 0), Ok(2));
        assert_eq!(dtoi(dec(1449, -3, false), 0), Ok(1));
        assert_eq!(dtoi(dec(1, -25, false), 0), Ok(0));
        assert_eq!(dtoi(dec(u64::MAX, -19, false), 0), Ok(2));
        assert_eq!(dtoi(dec(u64::MAX, -20, false), 0), Ok(0));
    }

    #[test]
    fn test_dtoi_overflow_saturates() {
        assert_eq!(
            dtoi(dec(10, 0, false), 18),
            Err(PhysicError::Overflows("9223372036854775807".to_string()))
        );
        assert_eq!(
            dtoi(dec(10, 0, true), 18),
            Err(PhysicError::Underflows("-9223372036854775807".to_string()))
        );
        assert_eq!(
            dtoi(dec(9223372036854775808, 0, false), 0),
            Err(PhysicError::Overflows("9223372036854775807".to_string()))
        );
        assert_eq!(dtoi(dec(9223372036854775807, 0, true), 0), Ok(-i64::MAX));
    }

    #[test]
    fn test_dtoi_exponent_overflow() {
        assert_eq!(dtoi(dec(1, 0, false), 19), Err(PhysicError::ExponentOverflow));
        assert_eq!(dtoi(dec(1, 10, false), 9), Err(PhysicError::ExponentOverflow));
        assert_eq!(dtoi(dec(1, 10, true), 9), Err(PhysicError::ExponentOverflow));
    }

    #[test]
    fn test_decimal_mul_exact() {
        let mile = dec(1609344, -3, false);
        assert_eq!(decimal_mul(dec(1, 0, false), mile), (mile, 0));
        assert_eq!(
            decimal_mul(dec(25, -1, true), mile),
            (dec(4023360, -3, true), 0)
        );
        assert_eq!(decimal_mul(Decimal::ZERO, mile), (Decimal::ZERO, 0));
        assert_eq!(
            decimal_mul(dec(2, 0, true), dec(3, 0, true)),
            (dec(6, 0, false), 0)
        );
    }

    #[test]
    fn test_decimal_mul_drops_digits() {
        let a = dec(123456789012345678, 0, false);
        let b = dec(1609344, -3, false);
        let (product, dropped) = decimal_mul(a, b);
        // 198684442656284442815232 has 24 digits; 19 of them fit in a u64.
        assert_eq!(dropped, 5);
        assert_eq!(product, dec(1986844426562844428, 2, false));
    }

    #[test]
    fn test_decimal_mul_normalizes_trailing_zeros() {
        let wh = dec(36, 2, false);
        assert_eq!(decimal_mul(dec(5, -1, false), wh), (dec(18, 2, false), 0));
        assert_eq!(decimal_mul(dec(4, 0, false), dec(25, 0, false)), (dec(1, 2, false), 0));

        // 10^18 * 10^18 only fits in 64 bits once its zeros are folded away.
        let (product, dropped) = decimal_mul(dec(1_000_000_000_000_000_000, 0, false), dec(1_000_000_000_000_000_000, 0, false));
        assert_eq!(product, dec(1, 36, false));
        assert_eq!(dropped, 0);
    }
}
