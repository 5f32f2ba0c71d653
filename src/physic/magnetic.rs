use crate::physic::decimal::Decimal;
use crate::physic::format::nano_as_string;
use crate::physic::units::{quantity, Unit, UnitTable};

quantity!(
    /// Magnetic flux density in nanoteslas. The largest value is about 9.2 GT.
    MagneticFluxDensity(i64),
    MAGNETIC_FLUX_DENSITY
);

impl MagneticFluxDensity {
    pub const NANO_TESLA: MagneticFluxDensity = MagneticFluxDensity(1);
    pub const MICRO_TESLA: MagneticFluxDensity = MagneticFluxDensity(1_000);
    pub const MILLI_TESLA: MagneticFluxDensity = MagneticFluxDensity(1_000_000);
    pub const TESLA: MagneticFluxDensity = MagneticFluxDensity(1_000_000_000);
    pub const KILO_TESLA: MagneticFluxDensity = MagneticFluxDensity(1_000_000_000_000);
    pub const MEGA_TESLA: MagneticFluxDensity = MagneticFluxDensity(1_000_000_000_000_000);
    pub const GIGA_TESLA: MagneticFluxDensity = MagneticFluxDensity(1_000_000_000_000_000_000);

    pub const GAUSS: MagneticFluxDensity = MagneticFluxDensity(100_000);
}

fn format_flux_density(v: i64) -> String {
    nano_as_string(v) + "T"
}

pub(crate) const MAGNETIC_FLUX_DENSITY: UnitTable = UnitTable {
    quantity: "MagneticFluxDensity",
    base: -9,
    valid: "T or G",
    units: &[
        Unit::si(&["T"]),
        Unit::factor(&["G"], Decimal::new(1, -4, false)).prefixable(),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_flux_density,
};
