use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{
        MassDensity, MassRate, Pressure, Ratio, ThermodynamicTemperature, VolumeRate,
    },
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::units::SpecificEnthalpy;

use super::VariableKind;

/// A fully resolved moist air state.
///
/// Every field is populated by a single resolution; a state is never built
/// up piecemeal. Intensive properties are per unit mass of dry air.
///
/// The dew point of perfectly dry air is negative infinity, so consumers
/// should be prepared to present non-finite values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermodynamicState {
    /// Dry-bulb temperature.
    pub dry_bulb: ThermodynamicTemperature,

    /// Humidity ratio (mass of water vapor per mass of dry air).
    pub humidity_ratio: Ratio,

    /// Relative humidity, in `[0, 1]`.
    pub relative_humidity: Ratio,

    /// Specific enthalpy.
    pub enthalpy: SpecificEnthalpy,

    /// Adiabatic saturation (wet-bulb) temperature.
    pub wet_bulb: ThermodynamicTemperature,

    /// Dew-point temperature.
    pub dew_point: ThermodynamicTemperature,

    /// Partial pressure of water vapor.
    pub vapor_pressure: Pressure,

    /// Density of the moist air.
    pub density: MassDensity,

    /// Dry-air mass flow.
    pub mass_flow: MassRate,

    /// Volumetric flow.
    pub volumetric_flow: VolumeRate,

    /// Total pressure the state was resolved at.
    pub total_pressure: Pressure,
}

impl ThermodynamicState {
    /// Returns the value of `kind` in the unit given by [`VariableKind::unit`].
    #[must_use]
    pub fn value(&self, kind: VariableKind) -> f64 {
        match kind {
            VariableKind::DryBulb => self.dry_bulb.get::<degree_celsius>(),
            VariableKind::HumidityRatio => self.humidity_ratio.get::<ratio>(),
            VariableKind::RelativeHumidity => self.relative_humidity.get::<percent>(),
            VariableKind::Enthalpy => self.enthalpy.get::<kilojoule_per_kilogram>(),
            VariableKind::WetBulb => self.wet_bulb.get::<degree_celsius>(),
            VariableKind::DewPoint => self.dew_point.get::<degree_celsius>(),
            VariableKind::VaporPressure => self.vapor_pressure.get::<pascal>(),
            VariableKind::MassFlow => self.mass_flow.get::<kilogram_per_second>(),
            VariableKind::VolumetricFlow => self.volumetric_flow.get::<cubic_meter_per_hour>(),
        }
    }

    /// Returns the total pressure in Pa.
    #[must_use]
    pub fn total_pressure_pa(&self) -> f64 {
        self.total_pressure.get::<pascal>()
    }
}
