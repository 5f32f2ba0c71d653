use crate::physic::decimal::Decimal;
use crate::physic::format::{nano_as_string, pico_as_string};
use crate::physic::units::{quantity, Unit, UnitTable};

quantity!(
    /// Electric current in nanoamperes. The largest value is about 9.2 GA.
    ElectricCurrent(i64),
    ELECTRIC_CURRENT
);

impl ElectricCurrent {
    pub const NANO_AMPERE: ElectricCurrent = ElectricCurrent(1);
    pub const MICRO_AMPERE: ElectricCurrent = ElectricCurrent(1_000);
    pub const MILLI_AMPERE: ElectricCurrent = ElectricCurrent(1_000_000);
    pub const AMPERE: ElectricCurrent = ElectricCurrent(1_000_000_000);
    pub const KILO_AMPERE: ElectricCurrent = ElectricCurrent(1_000_000_000_000);
    pub const MEGA_AMPERE: ElectricCurrent = ElectricCurrent(1_000_000_000_000_000);
    pub const GIGA_AMPERE: ElectricCurrent = ElectricCurrent(1_000_000_000_000_000_000);
}

fn format_current(v: i64) -> String {
    nano_as_string(v) + "A"
}

pub(crate) const ELECTRIC_CURRENT: UnitTable = UnitTable {
    quantity: "ElectricCurrent",
    base: -9,
    valid: "A",
    units: &[Unit::si(&["A"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_current,
};

quantity!(
    /// Electric potential in nanovolts. The largest value is about 9.2 GV.
    ElectricPotential(i64),
    ELECTRIC_POTENTIAL
);

impl ElectricPotential {
    pub const NANO_VOLT: ElectricPotential = ElectricPotential(1);
    pub const MICRO_VOLT: ElectricPotential = ElectricPotential(1_000);
    pub const MILLI_VOLT: ElectricPotential = ElectricPotential(1_000_000);
    pub const VOLT: ElectricPotential = ElectricPotential(1_000_000_000);
    pub const KILO_VOLT: ElectricPotential = ElectricPotential(1_000_000_000_000);
    pub const MEGA_VOLT: ElectricPotential = ElectricPotential(1_000_000_000_000_000);
    pub const GIGA_VOLT: ElectricPotential = ElectricPotential(1_000_000_000_000_000_000);
}

fn format_potential(v: i64) -> String {
    nano_as_string(v) + "V"
}

pub(crate) const ELECTRIC_POTENTIAL: UnitTable = UnitTable {
    quantity: "ElectricPotential",
    base: -9,
    valid: "V",
    units: &[Unit::si(&["V"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_potential,
};

quantity!(
    /// Electric resistance in nanoohms. The largest value is about 9.2 GΩ.
    ElectricResistance(i64),
    ELECTRIC_RESISTANCE
);

impl ElectricResistance {
    pub const NANO_OHM: ElectricResistance = ElectricResistance(1);
    pub const MICRO_OHM: ElectricResistance = ElectricResistance(1_000);
    pub const MILLI_OHM: ElectricResistance = ElectricResistance(1_000_000);
    pub const OHM: ElectricResistance = ElectricResistance(1_000_000_000);
    pub const KILO_OHM: ElectricResistance = ElectricResistance(1_000_000_000_000);
    pub const MEGA_OHM: ElectricResistance = ElectricResistance(1_000_000_000_000_000);
    pub const GIGA_OHM: ElectricResistance = ElectricResistance(1_000_000_000_000_000_000);
}

fn format_resistance(v: i64) -> String {
    nano_as_string(v) + "Ω"
}

pub(crate) const ELECTRIC_RESISTANCE: UnitTable = UnitTable {
    quantity: "ElectricResistance",
    base: -9,
    valid: "Ohm or Ω",
    units: &[Unit::si(&["Ohm", "Ω"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_resistance,
};

quantity!(
    /// Electrical capacitance in picofarads. The largest value is about 9.2 MF.
    ElectricalCapacitance(i64),
    ELECTRICAL_CAPACITANCE
);

impl ElectricalCapacitance {
    pub const PICO_FARAD: ElectricalCapacitance = ElectricalCapacitance(1);
    pub const NANO_FARAD: ElectricalCapacitance = ElectricalCapacitance(1_000);
    pub const MICRO_FARAD: ElectricalCapacitance = ElectricalCapacitance(1_000_000);
    pub const MILLI_FARAD: ElectricalCapacitance = ElectricalCapacitance(1_000_000_000);
    pub const FARAD: ElectricalCapacitance = ElectricalCapacitance(1_000_000_000_000);
    pub const KILO_FARAD: ElectricalCapacitance = ElectricalCapacitance(1_000_000_000_000_000);
    pub const MEGA_FARAD: ElectricalCapacitance = ElectricalCapacitance(1_000_000_000_000_000_000);
}

fn format_capacitance(v: i64) -> String {
    pico_as_string(v) + "F"
}

pub(crate) const ELECTRICAL_CAPACITANCE: UnitTable = UnitTable {
    quantity: "ElectricalCapacitance",
    base: -12,
    valid: "F",
    units: &[Unit::si(&["F"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_capacitance,
};

quantity!(
    /// Power in nanowatts. The largest value is about 9.2 GW.
    Power(i64),
    POWER
);

impl Power {
    pub const NANO_WATT: Power = Power(1);
    pub const MICRO_WATT: Power = Power(1_000);
    pub const MILLI_WATT: Power = Power(1_000_000);
    pub const WATT: Power = Power(1_000_000_000);
    pub const KILO_WATT: Power = Power(1_000_000_000_000);
    pub const MEGA_WATT: Power = Power(1_000_000_000_000_000);
    pub const GIGA_WATT: Power = Power(1_000_000_000_000_000_000);
}

fn format_power(v: i64) -> String {
    nano_as_string(v) + "W"
}

pub(crate) const POWER: UnitTable = UnitTable {
    quantity: "Power",
    base: -9,
    valid: "W",
    units: &[Unit::si(&["W"])],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_power,
};

quantity!(
    /// Energy in nanojoules. The largest value is about 9.2 GJ.
    Energy(i64),
    ENERGY
);

impl Energy {
    pub const NANO_JOULE: Energy = Energy(1);
    pub const MICRO_JOULE: Energy = Energy(1_000);
    pub const MILLI_JOULE: Energy = Energy(1_000_000);
    pub const JOULE: Energy = Energy(1_000_000_000);
    pub const KILO_JOULE: Energy = Energy(1_000_000_000_000);
    pub const MEGA_JOULE: Energy = Energy(1_000_000_000_000_000);
    pub const GIGA_JOULE: Energy = Energy(1_000_000_000_000_000_000);

    pub const WATT_SECOND: Energy = Energy::JOULE;
    pub const WATT_HOUR: Energy = Energy(3_600_000_000_000);
    pub const KILO_WATT_HOUR: Energy = Energy(3_600_000_000_000_000);
    /// International table British thermal unit.
    pub const BTU: Energy = Energy(1_055_055_852_620);
}

fn format_energy(v: i64) -> String {
    nano_as_string(v) + "J"
}

pub(crate) const ENERGY: UnitTable = UnitTable {
    quantity: "Energy",
    base: -9,
    valid: "J, Wh or BTU",
    units: &[
        Unit::si(&["J"]),
        Unit::factor(&["Wh"], Decimal::new(36, 2, false)).prefixable(),
        Unit::factor(&["BTU"], Decimal::new(105_505_585_262, -8, false)),
    ],
    max: i64::MAX,
    min: -i64::MAX,
    format: format_energy,
};
