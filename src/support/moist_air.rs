//! Property relations for moist air at a fixed total pressure.
//!
//! Every function here is pure and works on plain `f64` values in the units
//! given in its documentation:
//!
//! | Quantity             | Unit                   |
//! |----------------------|------------------------|
//! | Temperature          | °C                     |
//! | Pressure             | Pa                     |
//! | Humidity ratio       | kg water / kg dry air  |
//! | Relative humidity    | %                      |
//! | Enthalpy             | kJ / kg dry air        |
//! | Density              | kg / m³                |
//! | Mass flow            | kg / s                 |
//! | Volumetric flow      | m³ / h                 |
//!
//! Saturation vapor pressure over liquid water follows a Magnus-type
//! correlation, documented as valid from −50 °C to +200 °C.
//! No domain checks are performed; extrapolating outside that range is the
//! caller's responsibility.

mod curve;

pub use curve::{SaturationCurve, SaturationPoint};

use crate::support::bisection;

/// Saturation pressure at 0 °C used by the correlation, Pa.
pub const SATURATION_PRESSURE_AT_ZERO: f64 = 610.78;

/// Dimensionless Magnus coefficient.
pub const MAGNUS_A: f64 = 17.27;

/// Magnus temperature offset, °C.
pub const MAGNUS_B: f64 = 237.3;

/// Ratio of the molar masses of water and dry air.
pub const MOLAR_MASS_RATIO: f64 = 0.622;

/// Specific heat of dry air, kJ/kg·K.
pub const SPECIFIC_HEAT_DRY_AIR: f64 = 1.006;

/// Latent heat of vaporization at 0 °C, kJ/kg.
pub const LATENT_HEAT_AT_ZERO: f64 = 2501.0;

/// Specific heat of water vapor, kJ/kg·K.
pub const SPECIFIC_HEAT_VAPOR: f64 = 1.86;

/// Specific gas constant of dry air, J/kg·K.
pub const GAS_CONSTANT_DRY_AIR: f64 = 287.055;

/// Ratio of the gas constants of water vapor and dry air, `1 / 0.622`.
const GAS_CONSTANT_RATIO: f64 = 1.6078;

/// Offset between the Celsius and Kelvin scales.
const KELVIN_OFFSET: f64 = 273.15;

/// Converts `mass_flow / density` into m³/h.
pub const VOLUMETRIC_FLOW_FACTOR: f64 = 3.6;

/// Lower bound used for temperature searches, °C.
pub const MIN_TEMPERATURE: f64 = -50.0;

/// Upper bound of the dry-bulb search from humidity ratio and enthalpy, °C.
pub const MAX_SEARCH_TEMPERATURE: f64 = 100.0;

/// Saturation vapor pressure over liquid water at `t_c`, Pa.
#[must_use]
pub fn saturation_pressure(t_c: f64) -> f64 {
    SATURATION_PRESSURE_AT_ZERO * (MAGNUS_A * t_c / (MAGNUS_B + t_c)).exp()
}

/// Temperature at which the saturation pressure equals `p`, °C.
///
/// This is the exact algebraic inverse of [`saturation_pressure`].
/// Returns negative infinity for `p == 0` (perfectly dry air), and NaN when
/// `p` is negative or at or beyond the correlation's asymptote
/// (`ln(p / 610.78) >= MAGNUS_A`), where no temperature maps to `p`.
#[must_use]
pub fn temperature_from_saturation_pressure(p: f64) -> f64 {
    let alpha = (p / SATURATION_PRESSURE_AT_ZERO).ln();
    if alpha == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }
    if alpha >= MAGNUS_A {
        return f64::NAN;
    }
    MAGNUS_B * alpha / (MAGNUS_A - alpha)
}

/// Humidity ratio of air with vapor pressure `pv` at total pressure `p_total`.
///
/// Returns `f64::INFINITY` when `pv >= p_total`, which is not a physical
/// state; callers must treat it as such.
#[must_use]
pub fn humidity_ratio_from_vapor_pressure(pv: f64, p_total: f64) -> f64 {
    if pv >= p_total {
        return f64::INFINITY;
    }
    MOLAR_MASS_RATIO * pv / (p_total - pv)
}

/// Vapor pressure of air with humidity ratio `w` at total pressure `p_total`, Pa.
#[must_use]
pub fn vapor_pressure_from_humidity_ratio(w: f64, p_total: f64) -> f64 {
    w * p_total / (MOLAR_MASS_RATIO + w)
}

/// Relative humidity of vapor pressure `pv` at `t_c`, %.
///
/// The result is not clamped.
#[must_use]
pub fn relative_humidity(pv: f64, t_c: f64) -> f64 {
    100.0 * pv / saturation_pressure(t_c)
}

/// Maximum humidity ratio air can hold at `t_c` and `p_total`.
#[must_use]
pub fn saturation_humidity_ratio(t_c: f64, p_total: f64) -> f64 {
    humidity_ratio_from_vapor_pressure(saturation_pressure(t_c), p_total)
}

/// Specific enthalpy of moist air per unit mass of dry air, kJ/kg.
///
/// Strictly increasing in both `t_c` and `w` over the physical range.
#[must_use]
pub fn enthalpy(t_c: f64, w: f64) -> f64 {
    SPECIFIC_HEAT_DRY_AIR * t_c + w * (LATENT_HEAT_AT_ZERO + SPECIFIC_HEAT_VAPOR * t_c)
}

/// Density of moist air, kg/m³.
///
/// Ideal gas with a humidity-weighted mixture gas constant.
#[must_use]
pub fn density(t_c: f64, w: f64, p_total: f64) -> f64 {
    let t_k = t_c + KELVIN_OFFSET;
    p_total / (GAS_CONSTANT_DRY_AIR * (1.0 + GAS_CONSTANT_RATIO * w) * t_k) * (1.0 + w)
}

/// Volumetric flow for `mass_flow` at `density`, m³/h.
#[must_use]
pub fn volumetric_flow(mass_flow: f64, density: f64) -> f64 {
    mass_flow / density * VOLUMETRIC_FLOW_FACTOR
}

/// Mass flow for `volumetric_flow` at `density`, kg/s.
///
/// Inverse of [`volumetric_flow`].
#[must_use]
pub fn mass_flow_from_volumetric(volumetric_flow: f64, density: f64) -> f64 {
    volumetric_flow * density / VOLUMETRIC_FLOW_FACTOR
}

/// Adiabatic saturation (wet-bulb) temperature of air at `t_c` with humidity
/// ratio `w`, °C.
///
/// Finds the temperature in `[MIN_TEMPERATURE, t_c]` at which saturated air
/// has the same enthalpy as the given state.
#[must_use]
pub fn wet_bulb_temperature(t_c: f64, w: f64, p_total: f64) -> f64 {
    let target = enthalpy(t_c, w);
    bisection::solve(
        |t_wb| enthalpy(t_wb, saturation_humidity_ratio(t_wb, p_total)),
        target,
        [MIN_TEMPERATURE, t_c],
        &bisection::Config::temperature(),
    )
    .x
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const P_ATM: f64 = 101_325.0;

    #[test]
    fn saturation_pressure_at_reference_points() {
        assert_relative_eq!(saturation_pressure(0.0), 610.78);
        // Tabulated values are 2339 Pa and 7384 Pa.
        assert_relative_eq!(saturation_pressure(20.0), 2339.0, max_relative = 0.005);
        assert_relative_eq!(saturation_pressure(40.0), 7384.0, max_relative = 0.01);
    }

    #[test]
    fn saturation_pressure_inverse_is_exact() {
        for t in [-40.0, -10.0, 0.0, 12.5, 35.0, 80.0, 150.0] {
            let p = saturation_pressure(t);
            assert_relative_eq!(temperature_from_saturation_pressure(p), t, epsilon = 1e-9);
        }
    }

    #[test]
    fn inverse_saturation_pressure_of_zero_is_negative_infinity() {
        assert_eq!(temperature_from_saturation_pressure(0.0), f64::NEG_INFINITY);
        assert!(temperature_from_saturation_pressure(-1.0).is_nan());
    }

    #[test]
    fn inverse_saturation_pressure_beyond_asymptote_is_nan() {
        let asymptote = SATURATION_PRESSURE_AT_ZERO * MAGNUS_A.exp();
        assert!(temperature_from_saturation_pressure(1.001 * asymptote).is_nan());
        assert!(temperature_from_saturation_pressure(1e10).is_nan());
        assert!(temperature_from_saturation_pressure(0.99 * asymptote).is_finite());
    }

    #[test]
    fn humidity_ratio_and_vapor_pressure_are_inverses() {
        let pv = 1500.0;
        let w = humidity_ratio_from_vapor_pressure(pv, P_ATM);
        assert_relative_eq!(w, 0.622 * 1500.0 / (P_ATM - 1500.0));
        assert_relative_eq!(
            vapor_pressure_from_humidity_ratio(w, P_ATM),
            pv,
            epsilon = 1e-9
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn humidity_ratio_is_unbounded_at_total_pressure() {
        assert_eq!(humidity_ratio_from_vapor_pressure(P_ATM, P_ATM), f64::INFINITY);
        assert_eq!(
            humidity_ratio_from_vapor_pressure(P_ATM + 1.0, P_ATM),
            f64::INFINITY
        );
    }

    #[test]
    fn relative_humidity_is_not_clamped() {
        let psat = saturation_pressure(25.0);
        assert_relative_eq!(relative_humidity(0.5 * psat, 25.0), 50.0, epsilon = 1e-12);
        assert_relative_eq!(relative_humidity(1.1 * psat, 25.0), 110.0, epsilon = 1e-12);
    }

    #[test]
    fn enthalpy_of_dry_air_is_sensible_only() {
        assert_relative_eq!(enthalpy(20.0, 0.0), 20.12, epsilon = 1e-12);
        assert_relative_eq!(enthalpy(0.0, 0.01), 25.01, epsilon = 1e-12);
    }

    #[test]
    fn enthalpy_increases_with_temperature_and_humidity() {
        let mut previous = enthalpy(MIN_TEMPERATURE, 0.01);
        let mut t = MIN_TEMPERATURE;
        while t < MAX_SEARCH_TEMPERATURE {
            t += 0.5;
            let h = enthalpy(t, 0.01);
            assert!(h > previous, "enthalpy not increasing at {t}");
            previous = h;
        }
        assert!(enthalpy(20.0, 0.02) > enthalpy(20.0, 0.01));
    }

    #[test]
    fn density_of_standard_air() {
        assert_relative_eq!(density(15.0, 0.0, P_ATM), 1.225, max_relative = 0.001);
        // Humid air is lighter than dry air at the same temperature.
        assert!(density(15.0, 0.01, P_ATM) < density(15.0, 0.0, P_ATM));
    }

    #[test]
    fn flow_conversions_are_inverse() {
        let rho = 1.2;
        let v = volumetric_flow(2.0, rho);
        assert_relative_eq!(v, 2.0 / 1.2 * 3.6);
        assert_relative_eq!(mass_flow_from_volumetric(v, rho), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn wet_bulb_equals_dry_bulb_at_saturation() {
        let w_sat = saturation_humidity_ratio(25.0, P_ATM);
        assert_relative_eq!(wet_bulb_temperature(25.0, w_sat, P_ATM), 25.0, epsilon = 1e-4);
    }

    #[test]
    fn wet_bulb_is_below_dry_bulb_for_unsaturated_air() {
        let w = 0.5 * saturation_humidity_ratio(30.0, P_ATM);
        let t_wb = wet_bulb_temperature(30.0, w, P_ATM);
        let t_dp =
            temperature_from_saturation_pressure(vapor_pressure_from_humidity_ratio(w, P_ATM));

        assert!(t_wb < 30.0);
        assert!(t_wb > t_dp);
    }
}
