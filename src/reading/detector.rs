use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Signed decimal, optional whitespace, then unit text
    /// Examples: "10mA", "-20 °C", "50.6%rH", "100 km/h", "4.7kΩ"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^[+-]?(\d+(\.\d*)?|\.\d+)\s*[\p{L}%°][\p{L}%°/]*$"
    ).unwrap();
}

/// Check if a string is shaped like a physical quantity.
///
/// Cheap pre-filter only: a match still has to be accepted by some quantity parser.
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}
