/// Hydraulic diameter of an arbitrary duct cross section.
///
/// Computes `4·A / P` from the cross-sectional area `x_sect` (m²) and the
/// wetted perimeter `w_perimeter` (m).
///
/// A zero perimeter yields an infinite (or `NaN`) diameter.
#[must_use]
pub fn hydraulic_diameter(x_sect: f64, w_perimeter: f64) -> f64 {
    4.0 * x_sect / w_perimeter
}

/// Hydraulic diameter of a rectangular duct of width `w` and height `h` (m).
///
/// The result does not depend on which side is passed as the width.
#[must_use]
pub fn hydraulic_diameter_of_rect(w: f64, h: f64) -> f64 {
    hydraulic_diameter(w * h, 2.0 * (w + h))
}
