//! Physical validity checks applied during resolution.
//!
//! Input checks run on the normalized pair before any property is computed.
//! State checks run on computed values and classify non-physical results.

use uom::si::{
    f64::{Pressure, Ratio, TemperatureInterval},
    pressure::pascal,
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{
    constraint::{Constraint, NonNegative, UnitInterval},
    moist_air,
    units::TemperatureDifference,
};

use super::{InputError, NonPhysicalStateError, OrderingError, Pair, ResolveError};

/// How far a supplied dew point may sit above the dry bulb, K.
const DEW_POINT_SLACK: f64 = 0.1;

/// Computed relative humidity above which air is rejected as supersaturated, %.
///
/// Values between 100 % and this limit are floating-point or bisection
/// residue and are clamped to exactly 100 %.
pub(super) const SUPERSATURATION_LIMIT: f64 = 100.5;

/// Checks the supplied values of a normalized pair.
///
/// # Errors
///
/// Returns an input error for non-finite values or a relative humidity
/// outside `[0, 100] %`, and an ordering error when a supplied wet bulb is
/// above the dry bulb or a supplied dew point is above it by more than the slack.
pub(super) fn check_inputs(pair: &Pair) -> Result<(), ResolveError> {
    for input in pair.inputs() {
        if !input.raw().is_finite() {
            return Err(InputError::NotFinite { kind: input.kind() }.into());
        }
    }

    match *pair {
        Pair::DryBulbRelativeHumidity {
            relative_humidity, ..
        }
        | Pair::HumidityRatioRelativeHumidity {
            relative_humidity, ..
        } => {
            if UnitInterval::check(&relative_humidity).is_err() {
                return Err(InputError::RelativeHumidityOutOfRange { relative_humidity }.into());
            }
        }
        Pair::DryBulbWetBulb { dry_bulb, wet_bulb } => {
            if wet_bulb.minus(dry_bulb) > TemperatureInterval::new::<delta_kelvin>(0.0) {
                return Err(OrderingError::WetBulbAboveDryBulb { wet_bulb, dry_bulb }.into());
            }
        }
        Pair::DryBulbDewPoint {
            dry_bulb,
            dew_point,
        } => {
            if dew_point.minus(dry_bulb) > TemperatureInterval::new::<delta_kelvin>(DEW_POINT_SLACK)
            {
                return Err(OrderingError::DewPointAboveDryBulb {
                    dew_point,
                    dry_bulb,
                }
                .into());
            }
        }
        _ => {}
    }

    Ok(())
}

/// Humidity ratio for vapor pressure `pv` (Pa) at `p_total` (Pa).
///
/// # Errors
///
/// Returns [`NonPhysicalStateError::UnboundedHumidityRatio`] if `pv >= p_total`.
pub(super) fn bounded_humidity_ratio(pv: f64, p_total: f64) -> Result<f64, NonPhysicalStateError> {
    let w = moist_air::humidity_ratio_from_vapor_pressure(pv, p_total);
    if w.is_infinite() {
        return Err(NonPhysicalStateError::UnboundedHumidityRatio {
            vapor_pressure: Pressure::new::<pascal>(pv),
            total_pressure: Pressure::new::<pascal>(p_total),
        });
    }
    Ok(w)
}

/// Checks that a computed humidity ratio (kg/kg) is not negative.
///
/// # Errors
///
/// Returns [`NonPhysicalStateError::NegativeHumidityRatio`] if `w < 0` or is NaN.
pub(super) fn non_negative_humidity_ratio(w: f64) -> Result<f64, NonPhysicalStateError> {
    if NonNegative::check(&w).is_err() {
        return Err(NonPhysicalStateError::NegativeHumidityRatio {
            humidity_ratio: Ratio::new::<ratio>(w),
        });
    }
    Ok(w)
}

/// Clamps a computed relative humidity (%) to at most 100 %.
///
/// # Errors
///
/// Returns [`NonPhysicalStateError::Supersaturated`] above [`SUPERSATURATION_LIMIT`].
pub(super) fn clamp_relative_humidity(rh: f64) -> Result<f64, NonPhysicalStateError> {
    if rh > SUPERSATURATION_LIMIT {
        return Err(NonPhysicalStateError::Supersaturated {
            relative_humidity: Ratio::new::<percent>(rh),
        });
    }
    Ok(rh.min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn relative_humidity_clamps_within_slack() {
        assert_relative_eq!(clamp_relative_humidity(42.0).unwrap(), 42.0);
        assert_relative_eq!(clamp_relative_humidity(100.3).unwrap(), 100.0);
        assert_relative_eq!(clamp_relative_humidity(100.49).unwrap(), 100.0);
        assert!(matches!(
            clamp_relative_humidity(100.6),
            Err(NonPhysicalStateError::Supersaturated { .. })
        ));
    }

    #[test]
    fn low_relative_humidity_is_not_clamped() {
        assert_relative_eq!(clamp_relative_humidity(-0.2).unwrap(), -0.2);
    }

    #[test]
    fn humidity_ratio_sign_and_bounds() {
        assert!(non_negative_humidity_ratio(0.0).is_ok());
        assert!(matches!(
            non_negative_humidity_ratio(-1e-9),
            Err(NonPhysicalStateError::NegativeHumidityRatio { .. })
        ));
        assert!(matches!(
            bounded_humidity_ratio(101_325.0, 101_325.0),
            Err(NonPhysicalStateError::UnboundedHumidityRatio { .. })
        ));
        assert!(bounded_humidity_ratio(2_000.0, 101_325.0).is_ok());
    }

    #[test]
    fn dew_point_slack() {
        let within = Pair::DryBulbDewPoint {
            dry_bulb: celsius(20.0),
            dew_point: celsius(20.08),
        };
        let beyond = Pair::DryBulbDewPoint {
            dry_bulb: celsius(20.0),
            dew_point: celsius(20.15),
        };

        assert!(check_inputs(&within).is_ok());
        assert!(matches!(
            check_inputs(&beyond),
            Err(ResolveError::Ordering(OrderingError::DewPointAboveDryBulb { .. }))
        ));
    }

    #[test]
    fn wet_bulb_may_equal_but_not_exceed_dry_bulb() {
        let equal = Pair::DryBulbWetBulb {
            dry_bulb: celsius(25.0),
            wet_bulb: celsius(25.0),
        };
        let above = Pair::DryBulbWetBulb {
            dry_bulb: celsius(25.0),
            wet_bulb: celsius(25.01),
        };

        assert!(check_inputs(&equal).is_ok());
        assert!(matches!(
            check_inputs(&above),
            Err(ResolveError::Ordering(OrderingError::WetBulbAboveDryBulb { .. }))
        ));
    }

    #[test]
    fn relative_humidity_input_range() {
        let pair = |rh: f64| Pair::DryBulbRelativeHumidity {
            dry_bulb: celsius(20.0),
            relative_humidity: Ratio::new::<percent>(rh),
        };

        assert!(check_inputs(&pair(0.0)).is_ok());
        assert!(check_inputs(&pair(100.0)).is_ok());
        assert!(matches!(
            check_inputs(&pair(100.2)),
            Err(ResolveError::Input(InputError::RelativeHumidityOutOfRange { .. }))
        ));
        assert!(matches!(
            check_inputs(&pair(-3.0)),
            Err(ResolveError::Input(InputError::RelativeHumidityOutOfRange { .. }))
        ));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let pair = Pair::DryBulbRelativeHumidity {
            dry_bulb: celsius(f64::NAN),
            relative_humidity: Ratio::new::<percent>(50.0),
        };
        assert!(matches!(
            check_inputs(&pair),
            Err(ResolveError::Input(InputError::NotFinite { .. }))
        ));
    }
}
