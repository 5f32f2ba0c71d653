use std::fmt;

use serde::{Deserialize, Serialize};

use crate::physic::humidity::RelativeHumidity;
use crate::physic::mechanic::Pressure;
use crate::physic::temperature::Temperature;

/// One ambient reading, as returned by a combined environmental sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub humidity: RelativeHumidity,
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.temperature, self.pressure, self.humidity)
    }
}
