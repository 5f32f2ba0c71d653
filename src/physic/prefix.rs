/// SI prefix, stored as its power-of-ten exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Prefix {
    Pico = -12,
    Nano = -9,
    Micro = -6,
    Milli = -3,
    Unit = 0,
    Kilo = 3,
    Mega = 6,
    Giga = 9,
    Tera = 12,
}

/// Prefixes accepted in front of a prefixable unit, as listed in error messages
pub const VALID_PREFIXES: &str = "p,n,u,µ,m,k,M,G or T";

impl Prefix {
    /// Power of ten this prefix stands for.
    pub const fn exponent(self) -> i32 {
        self as i32
    }

    /// Symbol printed by the formatters. Micro prints as `µ`.
    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Pico => "p",
            Prefix::Nano => "n",
            Prefix::Micro => "µ",
            Prefix::Milli => "m",
            Prefix::Unit => "",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
        }
    }

    /// Prefix for an exponent that is a multiple of three in [-12, 12].
    pub const fn from_exponent(exponent: i32) -> Option<Prefix> {
        match exponent {
            -12 => Some(Prefix::Pico),
            -9 => Some(Prefix::Nano),
            -6 => Some(Prefix::Micro),
            -3 => Some(Prefix::Milli),
            0 => Some(Prefix::Unit),
            3 => Some(Prefix::Kilo),
            6 => Some(Prefix::Mega),
            9 => Some(Prefix::Giga),
            12 => Some(Prefix::Tera),
            _ => None,
        }
    }
}

/// Decode the prefix rune at the start of `s`.
///
/// Returns the prefix and the number of bytes it occupies. Anything that is not a
/// prefix yields `(Prefix::Unit, 0)`; whether that is acceptable is up to the caller.
pub fn parse_prefix(s: &str) -> (Prefix, usize) {
    let Some(r) = s.chars().next() else {
        return (Prefix::Unit, 0);
    };
    let prefix = match r {
        'p' => Prefix::Pico,
        'n' => Prefix::Nano,
        'u' | 'µ' => Prefix::Micro,
        'm' => Prefix::Milli,
        'k' => Prefix::Kilo,
        'M' => Prefix::Mega,
        'G' => Prefix::Giga,
        'T' => Prefix::Tera,
        _ => return (Prefix::Unit, 0),
    };
    (prefix, r.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("pF"), (Prefix::Pico, 1));
        assert_eq!(parse_prefix("nm"), (Prefix::Nano, 1));
        assert_eq!(parse_prefix("uA"), (Prefix::Micro, 1));
        assert_eq!(parse_prefix("µA"), (Prefix::Micro, 2));
        assert_eq!(parse_prefix("mV"), (Prefix::Milli, 1));
        assert_eq!(parse_prefix("kPa"), (Prefix::Kilo, 1));
        assert_eq!(parse_prefix("MHz"), (Prefix::Mega, 1));
        assert_eq!(parse_prefix("GW"), (Prefix::Giga, 1));
        assert_eq!(parse_prefix("TJ"), (Prefix::Tera, 1));
    }

    #[test]
    fn test_parse_prefix_unknown() {
        assert_eq!(parse_prefix(""), (Prefix::Unit, 0));
        assert_eq!(parse_prefix("A"), (Prefix::Unit, 0));
        assert_eq!(parse_prefix("°C"), (Prefix::Unit, 0));
        assert_eq!(parse_prefix("K"), (Prefix::Unit, 0));
    }

    #[test]
    fn test_exponent_round_trip() {
        for prefix in [
            Prefix::Pico,
            Prefix::Nano,
            Prefix::Micro,
            Prefix::Milli,
            Prefix::Unit,
            Prefix::Kilo,
            Prefix::Mega,
            Prefix::Giga,
            Prefix::Tera,
        ] {
            assert_eq!(Prefix::from_exponent(prefix.exponent()), Some(prefix));
            assert_eq!(prefix.exponent() % 3, 0);
        }
        assert_eq!(Prefix::from_exponent(1), None);
        assert_eq!(Prefix::from_exponent(15), None);
    }
}
