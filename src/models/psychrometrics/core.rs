//! Moist air state resolution.
//!
//! A state is fixed by any two independent psychrometric properties at a
//! known total pressure. [`resolve`] orders the pair canonically, checks the
//! inputs, reduces them to a dry-bulb temperature and humidity ratio with the
//! strategy registered for that pair, and derives every other property.

mod config;
mod derive;
mod error;
mod input;
mod pair;
mod state;
mod strategy;
mod validate;

pub use config::{Config, ConfigError, ReferenceFlow};
pub use error::{InputError, NonPhysicalStateError, OrderingError, ResolveError};
pub use input::{Input, InputPair, VariableKind};
pub use state::ThermodynamicState;

use pair::Pair;
use uom::si::{pressure::pascal, ratio::ratio, thermodynamic_temperature::degree_celsius};

/// Resolves the full moist air state defined by two inputs.
///
/// The order of `first` and `second` does not matter.
///
/// ```
/// use twine_psychro::models::psychrometrics::{resolve, Config, Input, VariableKind};
///
/// let state = resolve(
///     Input::from_raw(VariableKind::DryBulb, 25.0),
///     Input::from_raw(VariableKind::RelativeHumidity, 50.0),
///     &Config::default(),
/// )
/// .unwrap();
///
/// let w = state.value(VariableKind::HumidityRatio);
/// assert!((w - 0.00988).abs() < 1e-4);
/// ```
///
/// # Errors
///
/// Returns a [`ResolveError`] if the pair is unsupported, an input is
/// invalid or inconsistent, or the inputs describe a state that cannot exist.
/// No partial state is ever returned.
pub fn resolve(
    first: Input,
    second: Input,
    config: &Config,
) -> Result<ThermodynamicState, ResolveError> {
    let result = resolve_pair(first, second, config);

    match &result {
        Ok(state) => tracing::debug!(
            first = %first.kind(),
            second = %second.kind(),
            dry_bulb = state.dry_bulb.get::<degree_celsius>(),
            humidity_ratio = state.humidity_ratio.get::<ratio>(),
            "resolved moist air state"
        ),
        Err(error) => tracing::debug!(
            first = %first.kind(),
            second = %second.kind(),
            %error,
            "rejected moist air inputs"
        ),
    }

    result
}

fn resolve_pair(
    first: Input,
    second: Input,
    config: &Config,
) -> Result<ThermodynamicState, ResolveError> {
    let pair = Pair::normalize(first, second)?;
    validate::check_inputs(&pair)?;

    let p_total = config.total_pressure().get::<pascal>();
    let resolved = strategy::resolve(pair, p_total)?;

    Ok(derive::complete(resolved, config)?)
}
