// Fixed-point physical quantities with exact string parsing and SI formatting

pub mod decimal;
pub mod error;
pub mod format;
pub mod prefix;
pub mod units;

pub mod angle;
pub mod electric;
pub mod env;
pub mod frequency;
pub mod humidity;
pub mod light;
pub mod magnetic;
pub mod mechanic;
pub mod temperature;


pub use angle::Angle;
pub use decimal::{atod, decimal_mul, dtoi, Decimal};
pub use electric::{ElectricCurrent, ElectricPotential, ElectricResistance, ElectricalCapacitance, Energy, Power};
pub use env::Env;
pub use error::{PhysicError, Result};
pub use format::{micro_as_string, nano_as_string, pico_as_string};
pub use frequency::Frequency;
pub use humidity::RelativeHumidity;
pub use light::{LuminousFlux, LuminousIntensity};
pub use magnetic::MagneticFluxDensity;
pub use mechanic::{Distance, Force, Mass, Pressure, Speed};
pub use prefix::{Prefix, VALID_PREFIXES};
pub use temperature::Temperature;
pub use units::{Quantity, Value};
