//! Resolution strategies, one per supported pair.
//!
//! Every strategy reduces its pair to a dry-bulb temperature and a humidity
//! ratio. The remaining properties are derived from those two in [`super::derive`].

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::Pressure,
    pressure::pascal,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    bisection,
    moist_air::{self, MAX_SEARCH_TEMPERATURE, MIN_TEMPERATURE},
};

use super::{NonPhysicalStateError, Pair, validate};

/// Dry-bulb temperature (°C) and humidity ratio (kg/kg) determined by a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Resolved {
    pub(super) dry_bulb: f64,
    pub(super) humidity_ratio: f64,
}

/// Applies the strategy registered for `pair` at total pressure `p_total` (Pa).
///
/// # Errors
///
/// Returns a [`NonPhysicalStateError`] when the pair cannot describe real air.
pub(super) fn resolve(pair: Pair, p_total: f64) -> Result<Resolved, NonPhysicalStateError> {
    match pair {
        Pair::DryBulbRelativeHumidity {
            dry_bulb,
            relative_humidity,
        } => {
            let t_db = dry_bulb.get::<degree_celsius>();
            let pv = relative_humidity.get::<percent>() / 100.0 * moist_air::saturation_pressure(t_db);
            Ok(Resolved {
                dry_bulb: t_db,
                humidity_ratio: validate::bounded_humidity_ratio(pv, p_total)?,
            })
        }

        Pair::DryBulbHumidityRatio {
            dry_bulb,
            humidity_ratio,
        } => Ok(Resolved {
            dry_bulb: dry_bulb.get::<degree_celsius>(),
            humidity_ratio: humidity_ratio.get::<ratio>(),
        }),

        Pair::DryBulbEnthalpy { dry_bulb, enthalpy } => {
            let t_db = dry_bulb.get::<degree_celsius>();
            let h = enthalpy.get::<kilojoule_per_kilogram>();
            Ok(Resolved {
                dry_bulb: t_db,
                humidity_ratio: humidity_ratio_for_enthalpy(t_db, h, p_total),
            })
        }

        Pair::DryBulbWetBulb { dry_bulb, wet_bulb } => {
            let t_db = dry_bulb.get::<degree_celsius>();
            let t_wb = wet_bulb.get::<degree_celsius>();

            // Adiabatic saturation: the air carries the enthalpy of saturated
            // air at the wet-bulb temperature.
            let h = moist_air::enthalpy(t_wb, moist_air::saturation_humidity_ratio(t_wb, p_total));
            Ok(Resolved {
                dry_bulb: t_db,
                humidity_ratio: humidity_ratio_for_enthalpy(t_db, h, p_total),
            })
        }

        Pair::DryBulbDewPoint {
            dry_bulb,
            dew_point,
        } => {
            let pv = moist_air::saturation_pressure(dew_point.get::<degree_celsius>());
            Ok(Resolved {
                dry_bulb: dry_bulb.get::<degree_celsius>(),
                humidity_ratio: validate::bounded_humidity_ratio(pv, p_total)?,
            })
        }

        Pair::DryBulbVaporPressure {
            dry_bulb,
            vapor_pressure,
        } => Ok(Resolved {
            dry_bulb: dry_bulb.get::<degree_celsius>(),
            humidity_ratio: validate::bounded_humidity_ratio(
                vapor_pressure.get::<pascal>(),
                p_total,
            )?,
        }),

        Pair::HumidityRatioEnthalpy {
            humidity_ratio,
            enthalpy,
        } => {
            let w = humidity_ratio.get::<ratio>();
            let h = enthalpy.get::<kilojoule_per_kilogram>();
            let solution = bisection::solve(
                |t| moist_air::enthalpy(t, w),
                h,
                [MIN_TEMPERATURE, MAX_SEARCH_TEMPERATURE],
                &bisection::Config::temperature(),
            );
            Ok(Resolved {
                dry_bulb: solution.x,
                humidity_ratio: w,
            })
        }

        Pair::HumidityRatioRelativeHumidity {
            humidity_ratio,
            relative_humidity,
        } => {
            let w = validate::non_negative_humidity_ratio(humidity_ratio.get::<ratio>())?;
            let pv = moist_air::vapor_pressure_from_humidity_ratio(w, p_total);
            let p_sat = 100.0 * pv / relative_humidity.get::<percent>();
            let t_db = moist_air::temperature_from_saturation_pressure(p_sat);

            if !(p_sat.is_finite() && p_sat > 0.0 && t_db.is_finite()) {
                return Err(NonPhysicalStateError::UnresolvableTemperature {
                    saturation_pressure: Pressure::new::<pascal>(p_sat),
                });
            }

            Ok(Resolved {
                dry_bulb: t_db,
                humidity_ratio: w,
            })
        }
    }
}

/// Humidity ratio at which air at `t_db` (°C) has enthalpy `h` (kJ/kg).
///
/// Searches `[0, W_sat(t_db)]` by bisection.
/// A target outside that range has no physical solution; the humidity ratio
/// it implies is returned instead so the state checks can classify it as
/// negative or supersaturated.
fn humidity_ratio_for_enthalpy(t_db: f64, h: f64, p_total: f64) -> f64 {
    let w_max = moist_air::saturation_humidity_ratio(t_db, p_total);

    let in_bracket = w_max.is_finite()
        && h >= moist_air::enthalpy(t_db, 0.0)
        && h <= moist_air::enthalpy(t_db, w_max);

    if !in_bracket {
        return (h - moist_air::enthalpy(t_db, 0.0))
            / (moist_air::LATENT_HEAT_AT_ZERO + moist_air::SPECIFIC_HEAT_VAPOR * t_db);
    }

    bisection::solve(
        |w| moist_air::enthalpy(t_db, w),
        h,
        [0.0, w_max],
        &bisection::Config::humidity_ratio(),
    )
    .x
}
