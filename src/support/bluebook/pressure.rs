use super::{
    constants::{ACCELERATION_DUE_TO_GRAVITY, VOLUME_COEFFICIENT_OF_THERMAL_EXPANSION_OF_OIL},
    hydraulic_diameter_of_rect, k,
};

/// Pressure change along a rectangular duct of sides `w` and `h` (Bluebook
/// p. 510, eq. 15.5).
///
/// The shape coefficient [`k`] and the hydraulic diameter are derived from
/// the duct sides, then the result is the same as
/// [`pressure_change_using_k_and_d`]:
///
/// ```text
/// ΔP = ½ · μ · K · L · v / D²
/// ```
#[must_use]
pub fn pressure_change_rectangular_duct(
    w: f64,
    h: f64,
    f_viscosity: f64,
    path_length: f64,
    f_velocity: f64,
) -> f64 {
    let shape = k(w.min(h), w.max(h));
    let d = hydraulic_diameter_of_rect(w, h);

    pressure_change_using_k_and_d(shape, d, f_viscosity, path_length, f_velocity)
}

/// Pressure change along a duct with a known shape coefficient `k` and
/// hydraulic diameter `d`.
///
/// Useful when many path segments share a cross section, so `K` and `D`
/// are computed once and reused.
#[must_use]
pub fn pressure_change_using_k_and_d(
    k: f64,
    d: f64,
    f_viscosity: f64,
    path_length: f64,
    f_velocity: f64,
) -> f64 {
    0.5 * f_viscosity * k * path_length * f_velocity / (d * d)
}

/// Buoyancy pressure `β·ρ·g·H·ΔT` across a coil of height `coil_ht` (m)
/// whose top oil is `delta_t` kelvin hotter than its bottom oil (Bluebook
/// p. 513, eq. 15.16).
///
/// This is the pressure available at the bottom of the coil to drive
/// natural oil circulation.
#[must_use]
pub fn pressure_change_in_coil(f_density: f64, coil_ht: f64, delta_t: f64) -> f64 {
    let beta = VOLUME_COEFFICIENT_OF_THERMAL_EXPANSION_OF_OIL;
    let g = ACCELERATION_DUE_TO_GRAVITY;

    beta * f_density * g * coil_ht * delta_t
}
