/// Empirical shape coefficient `K(a, b)` for laminar flow in a rectangular
/// duct (Bluebook p. 511, eq. 15.4).
///
/// `a` and `b` are the two sides of the duct. The narrower side is always
/// used as the numerator of the aspect ratio, so the arguments may be given
/// in either order:
///
/// ```text
/// K = 56.91 + 40.31 · (exp(−3.5 · a/b) − 0.0302),   a ≤ b
/// ```
///
/// `K` tends to 96 for an infinitely wide slot and is close to 57 for a
/// square duct.
#[must_use]
pub fn k(a: f64, b: f64) -> f64 {
    let (narrow, wide) = if a < b { (a, b) } else { (b, a) };

    56.91 + 40.31 * ((-3.5 * narrow / wide).exp() - 0.0302)
}

/// Laminar friction coefficient `64 / Re` for a circular duct (Bluebook p. 510).
///
/// No flow regime check is made; the caller is responsible for keeping the
/// Reynolds number in the laminar range.
#[must_use]
pub fn friction_coefficient_circular_duct(reynolds_number: f64) -> f64 {
    64.0 / reynolds_number
}

/// Laminar friction coefficient `K / Re` for a rectangular duct of sides
/// `w` and `h` (Bluebook p. 510, eq. 15.3).
#[must_use]
pub fn friction_coefficient_rectangular_duct(w: f64, h: f64, reynolds_number: f64) -> f64 {
    k(w.min(h), w.max(h)) / reynolds_number
}
