use thiserror::Error;

/// Result type alias for parsing physical quantities
pub type Result<T> = std::result::Result<T, PhysicError>;

/// Errors produced while turning text into a physical quantity
///
/// Every variant is a deterministic function of the input string, so callers can
/// match on the kind instead of inspecting the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicError {
    /// The numeric scan found no digit at all
    #[error("does not contain number")]
    NotANumber,

    /// No digit was found and the text is not one of the accepted units either
    #[error("does not contain number or unit {valid}")]
    NotANumberOrUnit {
        /// Accepted unit spellings
        valid: &'static str,
    },

    #[error("contains multiple decimal points")]
    MultipleDecimalPoints,

    #[error("contains multiple plus or minus symbols")]
    MultipleSignSymbols,

    /// The power-of-ten shift is too large for a 64-bit integer
    #[error("exponent exceeds int64")]
    ExponentOverflow,

    /// Value above the representable maximum; carries the maximum, already formatted
    #[error("maximum value is {0}")]
    Overflows(String),

    /// Value below the representable minimum; carries the minimum, already formatted
    #[error("minimum value is {0}")]
    Underflows(String),

    #[error("no units provided, need {valid}")]
    NoUnitsProvided {
        /// Accepted unit spellings
        valid: &'static str,
    },

    /// A known unit was found, preceded by something that is not a valid prefix for it
    #[error("contains unknown unit prefix \"{prefix}\" for \"{unit}\", valid prefixes are {valid}")]
    UnknownUnitPrefix {
        prefix: String,
        unit: &'static str,
        valid: &'static str,
    },

    #[error("\"{unit}\" is not a valid unit for physic.{quantity}, need {valid}")]
    IncorrectUnit {
        unit: String,
        quantity: &'static str,
        valid: &'static str,
    },

    /// A unit conversion had to drop too many significant digits
    #[error("product loses {digits} significant digits")]
    PrecisionLoss {
        /// Number of least significant digits dropped
        digits: u32,
    },
}

impl PhysicError {
    /// Replace the saturated integer carried by an overflow with the quantity's
    /// own formatted bounds.
    pub(crate) fn with_bounds(self, max: impl FnOnce() -> String, min: impl FnOnce() -> String) -> Self {
        match self {
            PhysicError::Overflows(_) => PhysicError::Overflows(max()),
            PhysicError::Underflows(_) => PhysicError::Underflows(min()),
            other => other,
        }
    }

    /// True for the two saturation kinds.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, PhysicError::Overflows(_) | PhysicError::Underflows(_))
    }
}
