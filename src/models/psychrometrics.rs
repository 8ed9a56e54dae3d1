//! Psychrometric (moist air) models.
//!
//! This module provides a [`twine_core::Model`] implementation that resolves
//! a moist air state from any supported pair of properties.
//! The computational core is in the internal [`core`] module; its public
//! types and the [`resolve`] entry point are re-exported here.

pub(crate) mod core;

use twine_core::Model;

pub use self::core::{
    Config, ConfigError, Input, InputError, InputPair, NonPhysicalStateError, OrderingError,
    ReferenceFlow, ResolveError, ThermodynamicState, VariableKind, resolve,
};

/// Moist air state model at a fixed total pressure and reference flow.
///
/// ```
/// use twine_core::Model;
/// use twine_psychro::models::psychrometrics::{Input, InputPair, Psychrometrics, VariableKind};
///
/// let model = Psychrometrics::default();
/// let state = model
///     .call(&InputPair::new(
///         Input::from_raw(VariableKind::DryBulb, 30.0),
///         Input::from_raw(VariableKind::DewPoint, 15.0),
///     ))
///     .unwrap();
///
/// assert!(state.value(VariableKind::WetBulb) < 30.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Psychrometrics {
    config: Config,
}

impl Psychrometrics {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the config every call resolves with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Model for Psychrometrics {
    type Input = InputPair;
    type Output = ThermodynamicState;
    type Error = ResolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        resolve(input.first, input.second, &self.config)
    }
}
