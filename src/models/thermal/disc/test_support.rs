use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricalResistance, Length},
    length::inch,
};

use super::{DiscDimensions, DuctGaps, SpaceFactors};

/// A low-voltage disc from a winding with a 22.676 inch bore.
pub(crate) fn lv_disc_dimensions() -> DiscDimensions {
    DiscDimensions {
        inner_diameter: Length::new::<inch>(22.676),
        radial_build: Length::new::<inch>(1.874),
        height: Length::new::<inch>(0.3746),
        paper_cover: Length::new::<inch>(0.018),
        gaps: DuctGaps {
            above: Length::new::<inch>(0.15),
            below: Length::new::<inch>(0.15),
            inner: Length::new::<inch>(0.25),
            outer: Length::new::<inch>(0.25),
        },
        space_factors: SpaceFactors {
            above: 0.572,
            below: 0.572,
            inner: 0.537,
            outer: 0.603,
        },
        resistance_at_20c: ElectricalResistance::new::<ohm>(0.42426 / 98.0),
        eddy_pu: 0.02,
    }
}
