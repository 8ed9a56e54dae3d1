use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::support::units::SpecificEnthalpy;

use super::{Input, InputError, ResolveError};

/// A supported pair of inputs, normalized to canonical order.
///
/// Each variant has exactly one resolution strategy.
/// Any combination of inputs without a variant here is unsupported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Pair {
    DryBulbHumidityRatio {
        dry_bulb: ThermodynamicTemperature,
        humidity_ratio: Ratio,
    },
    DryBulbRelativeHumidity {
        dry_bulb: ThermodynamicTemperature,
        relative_humidity: Ratio,
    },
    DryBulbEnthalpy {
        dry_bulb: ThermodynamicTemperature,
        enthalpy: SpecificEnthalpy,
    },
    DryBulbWetBulb {
        dry_bulb: ThermodynamicTemperature,
        wet_bulb: ThermodynamicTemperature,
    },
    DryBulbDewPoint {
        dry_bulb: ThermodynamicTemperature,
        dew_point: ThermodynamicTemperature,
    },
    DryBulbVaporPressure {
        dry_bulb: ThermodynamicTemperature,
        vapor_pressure: Pressure,
    },
    HumidityRatioRelativeHumidity {
        humidity_ratio: Ratio,
        relative_humidity: Ratio,
    },
    HumidityRatioEnthalpy {
        humidity_ratio: Ratio,
        enthalpy: SpecificEnthalpy,
    },
}

impl Pair {
    /// Orders two inputs canonically and selects the matching pair.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::IdenticalKinds`] if both inputs are the same kind,
    /// or [`ResolveError::UnsupportedPair`] if no strategy handles the combination.
    pub(super) fn normalize(first: Input, second: Input) -> Result<Self, ResolveError> {
        if first.kind() == second.kind() {
            return Err(InputError::IdenticalKinds { kind: first.kind() }.into());
        }

        let (a, b) = if first.kind() < second.kind() {
            (first, second)
        } else {
            (second, first)
        };

        match (a, b) {
            (Input::DryBulb(dry_bulb), Input::HumidityRatio(humidity_ratio)) => {
                Ok(Self::DryBulbHumidityRatio {
                    dry_bulb,
                    humidity_ratio,
                })
            }
            (Input::DryBulb(dry_bulb), Input::RelativeHumidity(relative_humidity)) => {
                Ok(Self::DryBulbRelativeHumidity {
                    dry_bulb,
                    relative_humidity,
                })
            }
            (Input::DryBulb(dry_bulb), Input::Enthalpy(enthalpy)) => {
                Ok(Self::DryBulbEnthalpy { dry_bulb, enthalpy })
            }
            (Input::DryBulb(dry_bulb), Input::WetBulb(wet_bulb)) => {
                Ok(Self::DryBulbWetBulb { dry_bulb, wet_bulb })
            }
            (Input::DryBulb(dry_bulb), Input::DewPoint(dew_point)) => {
                Ok(Self::DryBulbDewPoint {
                    dry_bulb,
                    dew_point,
                })
            }
            (Input::DryBulb(dry_bulb), Input::VaporPressure(vapor_pressure)) => {
                Ok(Self::DryBulbVaporPressure {
                    dry_bulb,
                    vapor_pressure,
                })
            }
            (Input::HumidityRatio(humidity_ratio), Input::RelativeHumidity(relative_humidity)) => {
                Ok(Self::HumidityRatioRelativeHumidity {
                    humidity_ratio,
                    relative_humidity,
                })
            }
            (Input::HumidityRatio(humidity_ratio), Input::Enthalpy(enthalpy)) => {
                Ok(Self::HumidityRatioEnthalpy {
                    humidity_ratio,
                    enthalpy,
                })
            }
            _ => Err(ResolveError::UnsupportedPair {
                first: a.kind(),
                second: b.kind(),
            }),
        }
    }

    /// Returns the two inputs in canonical order.
    pub(super) fn inputs(&self) -> [Input; 2] {
        match *self {
            Self::DryBulbHumidityRatio {
                dry_bulb,
                humidity_ratio,
            } => [Input::DryBulb(dry_bulb), Input::HumidityRatio(humidity_ratio)],
            Self::DryBulbRelativeHumidity {
                dry_bulb,
                relative_humidity,
            } => [
                Input::DryBulb(dry_bulb),
                Input::RelativeHumidity(relative_humidity),
            ],
            Self::DryBulbEnthalpy { dry_bulb, enthalpy } => {
                [Input::DryBulb(dry_bulb), Input::Enthalpy(enthalpy)]
            }
            Self::DryBulbWetBulb { dry_bulb, wet_bulb } => {
                [Input::DryBulb(dry_bulb), Input::WetBulb(wet_bulb)]
            }
            Self::DryBulbDewPoint {
                dry_bulb,
                dew_point,
            } => [Input::DryBulb(dry_bulb), Input::DewPoint(dew_point)],
            Self::DryBulbVaporPressure {
                dry_bulb,
                vapor_pressure,
            } => [Input::DryBulb(dry_bulb), Input::VaporPressure(vapor_pressure)],
            Self::HumidityRatioRelativeHumidity {
                humidity_ratio,
                relative_humidity,
            } => [
                Input::HumidityRatio(humidity_ratio),
                Input::RelativeHumidity(relative_humidity),
            ],
            Self::HumidityRatioEnthalpy {
                humidity_ratio,
                enthalpy,
            } => [Input::HumidityRatio(humidity_ratio), Input::Enthalpy(enthalpy)],
        }
    }
}
