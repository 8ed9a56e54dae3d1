use thiserror::Error;
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
};

use super::VariableKind;

/// Errors that can occur while resolving a moist air state.
///
/// Input, unsupported-pair, and ordering errors are detected before any
/// property is computed and mean the request itself needs fixing
/// (see [`ResolveError::is_input_error`]).
/// Non-physical state errors mean the request was well formed but describes
/// air that cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ResolveError {
    /// An input value or selection is invalid.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// No resolution strategy exists for the selected pair of variables.
    #[error("unsupported pair of variables: {first} and {second}")]
    UnsupportedPair {
        /// First kind in canonical order.
        first: VariableKind,

        /// Second kind in canonical order.
        second: VariableKind,
    },

    /// Two supplied temperatures are in an impossible order.
    #[error("inconsistent temperatures: {0}")]
    Ordering(#[from] OrderingError),

    /// The inputs describe a state that cannot exist.
    #[error("non-physical state: {0}")]
    NonPhysical(#[from] NonPhysicalStateError),
}

impl ResolveError {
    /// Returns true if the error was raised by input checks before any
    /// property was computed.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::NonPhysical(_))
    }
}

/// Errors in the supplied inputs themselves.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    /// Both inputs provide the same variable.
    #[error("both inputs are {kind}; select two different variables")]
    IdenticalKinds { kind: VariableKind },

    /// A relative humidity input lies outside 0 % to 100 %.
    #[error("relative humidity must be between 0 and 100 %, got {} %", .relative_humidity.get::<percent>())]
    RelativeHumidityOutOfRange { relative_humidity: Ratio },

    /// An input value is NaN or infinite.
    #[error("{kind} must be a finite number")]
    NotFinite { kind: VariableKind },
}

/// Supplied temperatures that violate the required ordering.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OrderingError {
    /// The wet-bulb temperature exceeds the dry-bulb temperature.
    #[error(
        "wet-bulb temperature {} °C exceeds dry-bulb temperature {} °C",
        .wet_bulb.get::<degree_celsius>(),
        .dry_bulb.get::<degree_celsius>()
    )]
    WetBulbAboveDryBulb {
        wet_bulb: ThermodynamicTemperature,
        dry_bulb: ThermodynamicTemperature,
    },

    /// The dew-point temperature exceeds the dry-bulb temperature by more
    /// than the allowed slack.
    #[error(
        "dew-point temperature {} °C exceeds dry-bulb temperature {} °C",
        .dew_point.get::<degree_celsius>(),
        .dry_bulb.get::<degree_celsius>()
    )]
    DewPointAboveDryBulb {
        dew_point: ThermodynamicTemperature,
        dry_bulb: ThermodynamicTemperature,
    },
}

/// Computed states that cannot physically exist.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NonPhysicalStateError {
    /// The humidity ratio resolved to a negative value.
    #[error("humidity ratio is negative ({} kg/kg)", .humidity_ratio.get::<ratio>())]
    NegativeHumidityRatio { humidity_ratio: Ratio },

    /// The vapor pressure reaches the total pressure, so the humidity ratio
    /// is unbounded.
    #[error(
        "vapor pressure {} Pa is not below total pressure {} Pa",
        .vapor_pressure.get::<pascal>(),
        .total_pressure.get::<pascal>()
    )]
    UnboundedHumidityRatio {
        vapor_pressure: Pressure,
        total_pressure: Pressure,
    },

    /// The relative humidity exceeds saturation by more than the allowed slack.
    #[error("air is supersaturated (relative humidity {} %)", .relative_humidity.get::<percent>())]
    Supersaturated { relative_humidity: Ratio },

    /// No temperature has the saturation pressure the inputs require.
    #[error(
        "no temperature has the required saturation pressure {} Pa",
        .saturation_pressure.get::<pascal>()
    )]
    UnresolvableTemperature { saturation_pressure: Pressure },
}
