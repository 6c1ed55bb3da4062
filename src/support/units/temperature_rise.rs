use std::marker::PhantomData;

use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

/// Rise of one absolute temperature over another.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] gives
/// another absolute temperature (see
/// [uom#380](https://github.com/iliekturtles/uom/issues/380)). Oil rises and
/// wall-to-bulk gradients are intervals, so they go through
/// [`rise_above`](Self::rise_above).
pub trait TemperatureRise {
    /// Returns how far `self` lies above `base`, negative if it lies below.
    fn rise_above(self, base: Self) -> TemperatureInterval;
}

impl TemperatureRise for ThermodynamicTemperature {
    fn rise_above(self, base: Self) -> TemperatureInterval {
        // Both values are stored in kelvin, the base unit of either quantity.
        TemperatureInterval {
            dimension: PhantomData,
            units: PhantomData,
            value: self.value - base.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    use super::*;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn top_oil_over_bottom_oil() {
        assert_relative_eq!(
            celsius(62.5).rise_above(celsius(40.0)).get::<kelvin>(),
            22.5,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            celsius(40.0).rise_above(celsius(62.5)).get::<kelvin>(),
            -22.5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn equal_temperatures_on_different_scales() {
        let boiling = ThermodynamicTemperature::new::<degree_fahrenheit>(212.0);
        assert_relative_eq!(
            boiling.rise_above(celsius(100.0)).get::<kelvin>(),
            0.0,
            epsilon = 1e-9
        );
    }
}
