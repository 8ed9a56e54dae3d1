use thiserror::Error;
use uom::si::{
    f64::{MassRate, Pressure, VolumeRate},
    mass_rate::kilogram_per_second,
    pressure::pascal,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Total pressure of standard atmosphere, Pa.
const STANDARD_PRESSURE: f64 = 101_325.0;

/// The flow used to populate the mass and volumetric flow of a resolved state.
///
/// Whichever flow is given is reported as-is; the other is derived from the
/// resolved density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceFlow {
    /// Dry-air mass flow.
    Mass(Constrained<MassRate, StrictlyPositive>),

    /// Volumetric flow.
    Volumetric(Constrained<VolumeRate, StrictlyPositive>),
}

impl ReferenceFlow {
    /// Creates a mass flow reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not strictly positive.
    pub fn mass(mass_flow: MassRate) -> Result<Self, ConstraintError> {
        Ok(Self::Mass(StrictlyPositive::new(mass_flow)?))
    }

    /// Creates a volumetric flow reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow is not strictly positive.
    pub fn volumetric(volumetric_flow: VolumeRate) -> Result<Self, ConstraintError> {
        Ok(Self::Volumetric(StrictlyPositive::new(volumetric_flow)?))
    }
}

impl Default for ReferenceFlow {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::mass(MassRate::new::<kilogram_per_second>(1.0)).unwrap()
    }
}

/// Errors that can occur when building a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid total pressure")]
    TotalPressure(#[source] ConstraintError),
}

/// Conditions shared by every resolution: total pressure and reference flow.
///
/// The default is standard atmospheric pressure with 1 kg/s of dry air.
///
/// # Example
///
/// ```
/// use twine_psychro::models::psychrometrics::{Config, ReferenceFlow};
/// use uom::si::{f64::{Pressure, VolumeRate}, pressure::kilopascal, volume_rate::cubic_meter_per_hour};
///
/// let config = Config::default()
///     .with_total_pressure(Pressure::new::<kilopascal>(84.0))
///     .unwrap()
///     .with_reference_flow(
///         ReferenceFlow::volumetric(VolumeRate::new::<cubic_meter_per_hour>(5.0)).unwrap(),
///     );
///
/// assert!(matches!(config.reference_flow(), ReferenceFlow::Volumetric(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    total_pressure: Constrained<Pressure, StrictlyPositive>,
    reference_flow: ReferenceFlow,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Known-good value, unwrap is safe
            total_pressure: StrictlyPositive::new(Pressure::new::<pascal>(STANDARD_PRESSURE))
                .unwrap(),
            reference_flow: ReferenceFlow::default(),
        }
    }
}

impl Config {
    /// Creates a config with a validated total pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TotalPressure`] if the pressure is not strictly positive.
    pub fn new(total_pressure: Pressure, reference_flow: ReferenceFlow) -> Result<Self, ConfigError> {
        let total_pressure =
            StrictlyPositive::new(total_pressure).map_err(ConfigError::TotalPressure)?;
        Ok(Self {
            total_pressure,
            reference_flow,
        })
    }

    /// Returns this config with a different total pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TotalPressure`] if the pressure is not strictly positive.
    pub fn with_total_pressure(self, total_pressure: Pressure) -> Result<Self, ConfigError> {
        Self::new(total_pressure, self.reference_flow)
    }

    /// Returns this config with a different reference flow.
    #[must_use]
    pub fn with_reference_flow(self, reference_flow: ReferenceFlow) -> Self {
        Self {
            reference_flow,
            ..self
        }
    }

    /// Returns the total pressure.
    #[must_use]
    pub fn total_pressure(&self) -> Pressure {
        self.total_pressure.get()
    }

    /// Returns the reference flow.
    #[must_use]
    pub fn reference_flow(&self) -> ReferenceFlow {
        self.reference_flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume_rate::cubic_meter_per_hour;

    #[test]
    fn default_is_standard_atmosphere_and_unit_mass_flow() {
        let config = Config::default();
        assert_relative_eq!(config.total_pressure().get::<pascal>(), 101_325.0);

        let ReferenceFlow::Mass(mass_flow) = config.reference_flow() else {
            panic!("default reference flow should be a mass flow");
        };
        assert_relative_eq!(mass_flow.get().get::<kilogram_per_second>(), 1.0);
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let flow = ReferenceFlow::default();
        assert_eq!(
            Config::new(Pressure::new::<pascal>(0.0), flow),
            Err(ConfigError::TotalPressure(ConstraintError::Zero))
        );
        assert_eq!(
            Config::default().with_total_pressure(Pressure::new::<pascal>(-10.0)),
            Err(ConfigError::TotalPressure(ConstraintError::Negative))
        );
    }

    #[test]
    fn rejects_non_positive_flows() {
        assert!(ReferenceFlow::mass(MassRate::new::<kilogram_per_second>(0.0)).is_err());
        assert!(ReferenceFlow::volumetric(VolumeRate::new::<cubic_meter_per_hour>(-1.0)).is_err());
        assert!(ReferenceFlow::volumetric(VolumeRate::new::<cubic_meter_per_hour>(2.5)).is_ok());
    }
}
