use super::constants::{FLUID_DENSITY_OF_OIL, SPECIFIC_HEAT_OF_OIL};

/// Dynamic viscosity of transformer oil (Pa·s) at `temp_in_c` degrees
/// Celsius (Bluebook p. 511, eq. 15.6).
///
/// ```text
/// μ = 6900 / (T + 50)³
/// ```
///
/// The correlation is singular at −50 °C and meaningless below it.
#[must_use]
pub fn oil_viscosity(temp_in_c: f64) -> f64 {
    let offset = temp_in_c + 50.0;

    6900.0 / (offset * offset * offset)
}

/// Initial oil velocity `v₀` (m/s) through an inlet of area `inlet_area`
/// (m²) that carries away `coil_loss` watts with a top-to-bottom oil
/// temperature rise of `delta_t` kelvin (Bluebook p. 513, eq. 15.17).
///
/// ```text
/// v₀ = loss / (ρ · c · A · ΔT)
/// ```
#[must_use]
pub fn initial_oil_velocity(coil_loss: f64, inlet_area: f64, delta_t: f64) -> f64 {
    let rho = FLUID_DENSITY_OF_OIL;
    let c = SPECIFIC_HEAT_OF_OIL;

    coil_loss / (rho * c * inlet_area * delta_t)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn viscosity_at_reference_points() {
        assert_relative_eq!(oil_viscosity(0.0), 6900.0 / 125_000.0);
        assert_relative_eq!(oil_viscosity(0.0), 0.0552);
        assert_relative_eq!(oil_viscosity(50.0), 0.0069);
    }

    #[test]
    fn viscosity_falls_with_temperature() {
        let mut previous = oil_viscosity(-49.0);
        for t in [-40.0, -20.0, 0.0, 20.0, 60.0, 90.0, 110.0] {
            let next = oil_viscosity(t);
            assert!(next < previous, "viscosity should fall between {t} and its predecessor");
            previous = next;
        }
    }

    #[test]
    fn viscosity_is_singular_at_minus_fifty() {
        assert!(oil_viscosity(-50.0).is_infinite());
        assert!(oil_viscosity(-60.0) < 0.0);
    }

    #[test]
    fn velocity_carries_the_loss() {
        let loss = 12_000.0;
        let area = 0.35;
        let delta_t = 5.0;
        let v0 = initial_oil_velocity(loss, area, delta_t);

        // The oil stream leaving the inlet absorbs exactly the coil loss.
        let absorbed = FLUID_DENSITY_OF_OIL * SPECIFIC_HEAT_OF_OIL * area * v0 * delta_t;
        assert_relative_eq!(absorbed, loss, max_relative = 1e-12);
        assert_relative_eq!(v0, 12_000.0 / (867.0 * 1880.0 * 0.35 * 5.0));
    }

    #[test]
    fn zero_temperature_rise_is_not_guarded() {
        assert!(initial_oil_velocity(1000.0, 0.1, 0.0).is_infinite());
        assert!(initial_oil_velocity(1000.0, 0.0, 5.0).is_infinite());
    }
}
