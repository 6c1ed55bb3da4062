/// Reynolds number `ρ·v·D / μ` (Bluebook p. 510, eq. 15.2).
///
/// Arguments are the fluid density (kg/m³), the mean velocity (m/s), the
/// hydraulic diameter of the duct (m), and the dynamic viscosity (Pa·s).
#[must_use]
pub fn reynolds_number(
    f_density: f64,
    f_velocity: f64,
    hydraulic_diameter: f64,
    f_viscosity: f64,
) -> f64 {
    f_density * f_velocity * hydraulic_diameter / f_viscosity
}

/// Prandtl number `μ·c / k` (Bluebook p. 514).
///
/// Arguments are the dynamic viscosity (Pa·s), the specific heat
/// (J/(kg·K)), and the thermal conductivity (W/(m·K)).
#[must_use]
pub fn prandtl_number(f_viscosity: f64, f_specific_heat: f64, f_thermal_conductivity: f64) -> f64 {
    f_viscosity * f_specific_heat / f_thermal_conductivity
}
