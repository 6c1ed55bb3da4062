use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, Z0},
};

/// Volumetric coefficient of thermal expansion, 1/K in SI.
pub type ThermalExpansionCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;
