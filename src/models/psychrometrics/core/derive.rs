//! Completes a resolved state by deriving every remaining property.

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, MassRate, Pressure, Ratio, ThermodynamicTemperature, VolumeRate},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::{percent, ratio},
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::{moist_air, units::SpecificEnthalpy};

use super::{
    Config, NonPhysicalStateError, ReferenceFlow, ThermodynamicState, strategy::Resolved,
    validate,
};

/// Builds the full state from a resolved dry-bulb temperature and humidity ratio.
///
/// # Errors
///
/// Returns a [`NonPhysicalStateError`] if the humidity ratio is negative or
/// the air is supersaturated beyond tolerance.
pub(super) fn complete(
    resolved: Resolved,
    config: &Config,
) -> Result<ThermodynamicState, NonPhysicalStateError> {
    let p_total = config.total_pressure().get::<pascal>();
    let t_db = resolved.dry_bulb;
    let w = validate::non_negative_humidity_ratio(resolved.humidity_ratio)?;

    let pv = moist_air::vapor_pressure_from_humidity_ratio(w, p_total);
    let rh = validate::clamp_relative_humidity(moist_air::relative_humidity(pv, t_db))?;
    let h = moist_air::enthalpy(t_db, w);
    let t_wb = moist_air::wet_bulb_temperature(t_db, w, p_total).min(t_db);
    let t_dp = moist_air::temperature_from_saturation_pressure(pv);
    let rho = moist_air::density(t_db, w, p_total);

    let (mass_flow, volumetric_flow) = match config.reference_flow() {
        ReferenceFlow::Mass(mass_flow) => {
            let m = mass_flow.get().get::<kilogram_per_second>();
            (m, moist_air::volumetric_flow(m, rho))
        }
        ReferenceFlow::Volumetric(volumetric_flow) => {
            let v = volumetric_flow.get().get::<cubic_meter_per_hour>();
            (moist_air::mass_flow_from_volumetric(v, rho), v)
        }
    };

    Ok(ThermodynamicState {
        dry_bulb: ThermodynamicTemperature::new::<degree_celsius>(t_db),
        humidity_ratio: Ratio::new::<ratio>(w),
        relative_humidity: Ratio::new::<percent>(rh),
        enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h),
        wet_bulb: ThermodynamicTemperature::new::<degree_celsius>(t_wb),
        dew_point: ThermodynamicTemperature::new::<degree_celsius>(t_dp),
        vapor_pressure: Pressure::new::<pascal>(pv),
        density: MassDensity::new::<kilogram_per_cubic_meter>(rho),
        mass_flow: MassRate::new::<kilogram_per_second>(mass_flow),
        volumetric_flow: VolumeRate::new::<cubic_meter_per_hour>(volumetric_flow),
        total_pressure: config.total_pressure(),
    })
}
