use std::fmt;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassRate, Pressure, Ratio, ThermodynamicTemperature, VolumeRate},
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::units::SpecificEnthalpy;

/// Identifies one of the nine independent moist air state variables.
///
/// The declaration order is the canonical order used to normalize a pair of
/// inputs, so `(RelativeHumidity, DryBulb)` and `(DryBulb, RelativeHumidity)`
/// select the same resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableKind {
    /// Dry-bulb temperature, °C.
    DryBulb,
    /// Humidity ratio, kg water / kg dry air.
    HumidityRatio,
    /// Relative humidity, %.
    RelativeHumidity,
    /// Specific enthalpy, kJ / kg dry air.
    Enthalpy,
    /// Wet-bulb temperature, °C.
    WetBulb,
    /// Dew-point temperature, °C.
    DewPoint,
    /// Partial pressure of water vapor, Pa.
    VaporPressure,
    /// Dry-air mass flow, kg/s.
    MassFlow,
    /// Volumetric flow, m³/h.
    VolumetricFlow,
}

impl VariableKind {
    /// All variable kinds in canonical order.
    pub const ALL: [Self; 9] = [
        Self::DryBulb,
        Self::HumidityRatio,
        Self::RelativeHumidity,
        Self::Enthalpy,
        Self::WetBulb,
        Self::DewPoint,
        Self::VaporPressure,
        Self::MassFlow,
        Self::VolumetricFlow,
    ];

    /// Short symbol used in messages and tables.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::DryBulb => "Tdb",
            Self::HumidityRatio => "W",
            Self::RelativeHumidity => "RH",
            Self::Enthalpy => "h",
            Self::WetBulb => "Twb",
            Self::DewPoint => "Tdp",
            Self::VaporPressure => "Pv",
            Self::MassFlow => "m_dot",
            Self::VolumetricFlow => "V_dot",
        }
    }

    /// Unit of the raw values accepted by [`Input::from_raw`].
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::DryBulb | Self::WetBulb | Self::DewPoint => "°C",
            Self::HumidityRatio => "kg/kg",
            Self::RelativeHumidity => "%",
            Self::Enthalpy => "kJ/kg",
            Self::VaporPressure => "Pa",
            Self::MassFlow => "kg/s",
            Self::VolumetricFlow => "m³/h",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A known value of one state variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    DryBulb(ThermodynamicTemperature),
    HumidityRatio(Ratio),
    RelativeHumidity(Ratio),
    Enthalpy(SpecificEnthalpy),
    WetBulb(ThermodynamicTemperature),
    DewPoint(ThermodynamicTemperature),
    VaporPressure(Pressure),
    MassFlow(MassRate),
    VolumetricFlow(VolumeRate),
}

impl Input {
    /// Creates an input from a raw value in the unit given by [`VariableKind::unit`].
    ///
    /// ```
    /// use twine_psychro::models::psychrometrics::{Input, VariableKind};
    ///
    /// let rh = Input::from_raw(VariableKind::RelativeHumidity, 50.0);
    /// assert_eq!(rh.kind(), VariableKind::RelativeHumidity);
    /// assert!((rh.raw() - 50.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_raw(kind: VariableKind, value: f64) -> Self {
        match kind {
            VariableKind::DryBulb => {
                Self::DryBulb(ThermodynamicTemperature::new::<degree_celsius>(value))
            }
            VariableKind::HumidityRatio => Self::HumidityRatio(Ratio::new::<ratio>(value)),
            VariableKind::RelativeHumidity => Self::RelativeHumidity(Ratio::new::<percent>(value)),
            VariableKind::Enthalpy => {
                Self::Enthalpy(SpecificEnthalpy::new::<kilojoule_per_kilogram>(value))
            }
            VariableKind::WetBulb => {
                Self::WetBulb(ThermodynamicTemperature::new::<degree_celsius>(value))
            }
            VariableKind::DewPoint => {
                Self::DewPoint(ThermodynamicTemperature::new::<degree_celsius>(value))
            }
            VariableKind::VaporPressure => Self::VaporPressure(Pressure::new::<pascal>(value)),
            VariableKind::MassFlow => Self::MassFlow(MassRate::new::<kilogram_per_second>(value)),
            VariableKind::VolumetricFlow => {
                Self::VolumetricFlow(VolumeRate::new::<cubic_meter_per_hour>(value))
            }
        }
    }

    /// Returns the kind of variable this input provides.
    #[must_use]
    pub fn kind(&self) -> VariableKind {
        match self {
            Self::DryBulb(_) => VariableKind::DryBulb,
            Self::HumidityRatio(_) => VariableKind::HumidityRatio,
            Self::RelativeHumidity(_) => VariableKind::RelativeHumidity,
            Self::Enthalpy(_) => VariableKind::Enthalpy,
            Self::WetBulb(_) => VariableKind::WetBulb,
            Self::DewPoint(_) => VariableKind::DewPoint,
            Self::VaporPressure(_) => VariableKind::VaporPressure,
            Self::MassFlow(_) => VariableKind::MassFlow,
            Self::VolumetricFlow(_) => VariableKind::VolumetricFlow,
        }
    }

    /// Returns the value in the unit given by [`VariableKind::unit`].
    #[must_use]
    pub fn raw(&self) -> f64 {
        match self {
            Self::DryBulb(t) | Self::WetBulb(t) | Self::DewPoint(t) => t.get::<degree_celsius>(),
            Self::HumidityRatio(w) => w.get::<ratio>(),
            Self::RelativeHumidity(rh) => rh.get::<percent>(),
            Self::Enthalpy(h) => h.get::<kilojoule_per_kilogram>(),
            Self::VaporPressure(p) => p.get::<pascal>(),
            Self::MassFlow(m) => m.get::<kilogram_per_second>(),
            Self::VolumetricFlow(v) => v.get::<cubic_meter_per_hour>(),
        }
    }
}

/// The two inputs that define a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputPair {
    pub first: Input,
    pub second: Input,
}

impl InputPair {
    #[must_use]
    pub fn new(first: Input, second: Input) -> Self {
        Self { first, second }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn raw_values_round_trip_through_units() {
        let values = [25.0, 0.0125, 60.0, 55.5, 18.0, 12.0, 1700.0, 1.5, 3600.0];
        for (kind, value) in VariableKind::ALL.into_iter().zip(values) {
            let input = Input::from_raw(kind, value);
            assert_eq!(input.kind(), kind);
            assert_relative_eq!(input.raw(), value, max_relative = 1e-12);
        }
    }

    #[test]
    fn kinds_sort_canonically() {
        let mut kinds = [
            VariableKind::RelativeHumidity,
            VariableKind::VolumetricFlow,
            VariableKind::DryBulb,
            VariableKind::HumidityRatio,
        ];
        kinds.sort();
        assert_eq!(
            kinds,
            [
                VariableKind::DryBulb,
                VariableKind::HumidityRatio,
                VariableKind::RelativeHumidity,
                VariableKind::VolumetricFlow,
            ]
        );
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(VariableKind::DewPoint.to_string(), "Tdp");
        assert_eq!(VariableKind::Enthalpy.unit(), "kJ/kg");
    }
}
