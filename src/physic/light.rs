use crate::physic::format::nano_as_string;
use crate::physic::units::{quantity, Unit, UnitTable};

quantity!(
    /// Luminous intensity in nanocandelas. The largest value is about 9.2 Gcd.
    LuminousIntensity(i64),
    LUMINOUS_INTENSITY
);

impl LuminousIntensity {
    pub const NANO_CANDELA: LuminousIntensity = LuminousIntensity(1);
    pub const MICRO_CANDELA: LuminousIntensity = LuminousIntensity(1_000);
    pub const MILLI_CANDELA: LuminousIntensity = LuminousIntensity(1_000_000);
    pub const CANDELA: LuminousIntensity = LuminousIntensity(1_000_000_000);
    pub const KILO_CANDELA: LuminousIntensity = LuminousIntensity(1_000_000_000_000);
    pub const MEGA_CANDELA: LuminousIntensity = LuminousIntensity(1_000_000_000_000_000);
    pub const GIGA_CANDELA: LuminousIntensity = LuminousIntensity(1_000_000_000_000_000_000);
}

fn format_intensity(v: i64) -> String {
    nano_as_string(v) + "cd"
}

pub(crate) const LUMINOUS_INTENSITY: UnitTable = UnitTable {
    quantity: "LuminousIntensity",
    base: -9,
    valid: "cd",
    units: &[Unit::si(&["cd"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_intensity,
};

quantity!(
    /// Luminous flux in nanolumens. The largest value is about 9.2 Glm.
    LuminousFlux(i64),
    LUMINOUS_FLUX
);

impl LuminousFlux {
    pub const NANO_LUMEN: LuminousFlux = LuminousFlux(1);
    pub const MICRO_LUMEN: LuminousFlux = LuminousFlux(1_000);
    pub const MILLI_LUMEN: LuminousFlux = LuminousFlux(1_000_000);
    pub const LUMEN: LuminousFlux = LuminousFlux(1_000_000_000);
    pub const KILO_LUMEN: LuminousFlux = LuminousFlux(1_000_000_000_000);
    pub const MEGA_LUMEN: LuminousFlux = LuminousFlux(1_000_000_000_000_000);
    pub const GIGA_LUMEN: LuminousFlux = LuminousFlux(1_000_000_000_000_000_000);
}

fn format_flux(v: i64) -> String {
    nano_as_string(v) + "lm"
}

pub(crate) const LUMINOUS_FLUX: UnitTable = UnitTable {
    quantity: "LuminousFlux",
    base: -9,
    valid: "lm",
    units: &[Unit::si(&["lm"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_flux,
};
