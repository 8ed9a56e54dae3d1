use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for subtracting absolute temperatures.
///
/// `uom` does not define `ThermodynamicTemperature - ThermodynamicTemperature`,
/// see [#380](https://github.com/iliekturtles/uom/issues/380).
/// This trait fills the gap so that orderings such as "dew point no more than
/// 0.1 K above dry bulb" can be written as interval comparisons.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn celsius_difference_is_an_interval() {
        let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(24.0);
        let dew_point = ThermodynamicTemperature::new::<degree_celsius>(12.5);

        assert_relative_eq!(
            dry_bulb.minus(dew_point).get::<delta_celsius>(),
            11.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            dew_point.minus(dry_bulb).get::<delta_kelvin>(),
            -11.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn compares_against_a_slack() {
        let slack = TemperatureInterval::new::<delta_kelvin>(0.1);
        let dry_bulb = ThermodynamicTemperature::new::<degree_celsius>(20.0);

        let just_inside = ThermodynamicTemperature::new::<degree_celsius>(20.05);
        let outside = ThermodynamicTemperature::new::<degree_celsius>(20.2);

        assert!(just_inside.minus(dry_bulb) <= slack);
        assert!(outside.minus(dry_bulb) > slack);
    }
}
