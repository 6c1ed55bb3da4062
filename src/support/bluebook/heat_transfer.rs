use super::{
    constants::{FLUID_DENSITY_OF_OIL, SPECIFIC_HEAT_OF_OIL, THERMAL_CONDUCTIVITY_OF_OIL},
    oil_viscosity, prandtl_number, reynolds_number,
};

/// Convective heat transfer coefficient, W/(m²·K), between oil and a duct
/// wall (Bluebook p. 514, eq. 15.23).
///
/// `bulk_oil_temp` is the oil temperature away from the wall (°C) and
/// `gradient` is how much hotter the wall surface is than the bulk oil (K).
/// Viscosities are evaluated at both temperatures with [`oil_viscosity`],
/// and the Reynolds and Prandtl numbers use the bulk viscosity:
///
/// ```text
/// h = 1.86 · (k/D) · (Re · Pr · D/L)^0.33 · (μ_bulk / μ_surface)^0.14
/// ```
///
/// Density, specific heat and thermal conductivity are those of the oil in
/// [`constants`](super::constants).
#[must_use]
pub fn convection_coefficient(
    hydraulic_diameter: f64,
    path_length: f64,
    bulk_oil_temp: f64,
    gradient: f64,
    f_velocity: f64,
) -> f64 {
    let rho = FLUID_DENSITY_OF_OIL;
    let k = THERMAL_CONDUCTIVITY_OF_OIL;
    let c = SPECIFIC_HEAT_OF_OIL;
    let mu_bulk = oil_viscosity(bulk_oil_temp);
    let mu_surface = oil_viscosity(bulk_oil_temp + gradient);

    let re = reynolds_number(rho, f_velocity, hydraulic_diameter, mu_bulk);
    let pr = prandtl_number(mu_bulk, c, k);

    1.86 * k / hydraulic_diameter
        * (re * pr * hydraulic_diameter / path_length).powf(0.33)
        * (mu_bulk / mu_surface).powf(0.14)
}

/// Surface heat transfer coefficient, W/(m²·K), through a layer of
/// insulation of thickness `t_insul` (m) and conductivity `k_insul`
/// (W/(m·K)) in series with convection `h_conv` (Bluebook p. 514, eq. 15.22).
///
/// ```text
/// h = h_conv / (1 + h_conv · t / k)
/// ```
#[must_use]
pub fn heat_transfer_coefficient(h_conv: f64, t_insul: f64, k_insul: f64) -> f64 {
    h_conv / (1.0 + h_conv * t_insul / k_insul)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::super::constants::THERMAL_CONDUCTIVITY_OF_PAPER;
    use super::*;

    #[test]
    fn convection_by_hand() {
        let (d, l, t_bulk, gradient, v) = (0.008, 0.05, 60.0, 15.0, 0.02);

        let mu_b = 6900.0 / 110.0_f64.powi(3);
        let mu_s = 6900.0 / 125.0_f64.powi(3);
        let re = 867.0 * v * d / mu_b;
        let pr = mu_b * 1880.0 / 0.11;
        let expected = 1.86 * 0.11 / d * (re * pr * d / l).powf(0.33) * (mu_b / mu_s).powf(0.14);

        assert_relative_eq!(
            convection_coefficient(d, l, t_bulk, gradient, v),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn isothermal_wall_has_no_viscosity_correction() {
        let (d, l, t, v): (f64, f64, f64, f64) = (0.01, 0.1, 40.0, 0.05);
        let re = reynolds_number(867.0, v, d, oil_viscosity(t));
        let pr = prandtl_number(oil_viscosity(t), 1880.0, 0.11);
        let expected = 1.86 * 0.11 / d * (re * pr * d / l).powf(0.33);

        assert_relative_eq!(
            convection_coefficient(d, l, t, 0.0, v),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn hotter_wall_improves_convection() {
        // A hotter wall thins the oil film, so μ_bulk / μ_surface > 1.
        let cold = convection_coefficient(0.01, 0.1, 50.0, 0.0, 0.03);
        let hot = convection_coefficient(0.01, 0.1, 50.0, 20.0, 0.03);
        assert!(hot > cold);
    }

    #[test]
    fn faster_oil_improves_convection() {
        let slow = convection_coefficient(0.01, 0.1, 50.0, 10.0, 0.01);
        let fast = convection_coefficient(0.01, 0.1, 50.0, 10.0, 0.04);
        assert_relative_eq!(fast / slow, 4.0_f64.powf(0.33), max_relative = 1e-12);
    }

    #[test]
    fn bare_surface_is_pure_convection() {
        for h_conv in [0.0, 15.0, 120.0, 1.0e4] {
            assert_eq!(heat_transfer_coefficient(h_conv, 0.0, THERMAL_CONDUCTIVITY_OF_PAPER), h_conv);
            assert_eq!(heat_transfer_coefficient(h_conv, 0.0, 1.0), h_conv);
        }
    }

    #[test]
    fn insulation_adds_series_resistance() {
        let h_conv = 100.0;
        let t = 0.0005;
        let h = heat_transfer_coefficient(h_conv, t, THERMAL_CONDUCTIVITY_OF_PAPER);

        assert_relative_eq!(1.0 / h, 1.0 / h_conv + t / 0.16, max_relative = 1e-12);
        assert!(h < h_conv);
    }
}
