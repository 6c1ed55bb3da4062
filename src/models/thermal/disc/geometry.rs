use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    electric_current::ampere,
    electrical_resistance::ohm,
    f64::{Area, ElectricCurrent, ElectricalResistance, Length, Power, ThermodynamicTemperature},
    length::meter,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    bluebook::hydraulic_diameter,
    constraint::{ConstraintError, NonNegative, StrictlyPositive, UnitIntervalLowerOpen},
};

use super::DiscError;

/// Inferred zero-resistance temperature of copper, °C.
const COPPER_TEMPERATURE_CONSTANT: f64 = 234.5;

/// Temperature at which the disc resistance is given, °C.
const REFERENCE_TEMPERATURE: f64 = 20.0;

/// Widths of the oil ducts surrounding a disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctGaps {
    /// Radial spacer gap above the disc.
    pub above: Length,
    /// Radial spacer gap below the disc.
    pub below: Length,
    /// Axial duct between the disc and the inner cylinder.
    pub inner: Length,
    /// Axial duct between the disc and the outer cylinder.
    pub outer: Length,
}

/// Fraction of each disc face that is wetted by oil, in `(0, 1]`.
///
/// Spacers and sticks cover the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceFactors {
    /// Upper radial duct.
    pub above: f64,
    /// Lower radial duct.
    pub below: f64,
    /// Inner axial duct.
    pub inner: f64,
    /// Outer axial duct.
    pub outer: f64,
}

/// Construction parameters of a single winding disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscDimensions {
    /// Bore of the disc.
    pub inner_diameter: Length,
    /// Radial depth of the conductor stack, outer radius minus inner radius.
    pub radial_build: Length,
    /// Axial height of the disc.
    pub height: Length,
    /// Thickness of paper covering the conductor.
    pub paper_cover: Length,
    /// Widths of the four surrounding ducts.
    pub gaps: DuctGaps,
    /// Wetted fraction of each face.
    pub space_factors: SpaceFactors,
    /// DC resistance of the disc at 20 °C.
    pub resistance_at_20c: ElectricalResistance,
    /// Eddy loss as a fraction of the resistive loss.
    pub eddy_pu: f64,
}

/// Hydraulic diameter and cooled area of one disc face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Hydraulic diameter of the duct cooling this face.
    pub hydraulic_diameter: Length,
    /// Wetted area of the face.
    pub area: Area,
}

/// A validated winding disc with its derived duct geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    dimensions: DiscDimensions,
    above: Face,
    below: Face,
    inner: Face,
    outer: Face,
}

impl Disc {
    /// Validates `dimensions` and derives the four cooled faces.
    ///
    /// The horizontal ducts run around the mean turn, the vertical ducts
    /// around the inner and outer cylinders bounded by their gaps.
    ///
    /// # Errors
    ///
    /// Returns [`DiscError::Invalid`] naming the first field that is
    /// non-positive (lengths and resistance), negative (paper cover and eddy
    /// loss), or outside `(0, 1]` (space factors). An inner gap that is not
    /// narrower than the bore is reported against `gaps.inner`.
    pub fn new(dimensions: DiscDimensions) -> Result<Self, DiscError> {
        let DiscDimensions {
            inner_diameter,
            radial_build,
            height,
            paper_cover,
            gaps,
            space_factors: sf,
            resistance_at_20c,
            eddy_pu,
        } = dimensions;

        let id = positive("inner_diameter", inner_diameter)?;
        let rb = positive("radial_build", radial_build)?;
        let h = positive("height", height)?;
        let gap_above = positive("gaps.above", gaps.above)?;
        let gap_below = positive("gaps.below", gaps.below)?;
        let gap_inner = positive("gaps.inner", gaps.inner)?;
        let gap_outer = positive("gaps.outer", gaps.outer)?;
        let inner_cylinder = positive("gaps.inner", inner_diameter - gaps.inner)?;
        StrictlyPositive::new(resistance_at_20c).map_err(invalid("resistance_at_20c"))?;
        NonNegative::new(paper_cover).map_err(invalid("paper_cover"))?;
        NonNegative::new(eddy_pu).map_err(invalid("eddy_pu"))?;
        for (field, factor) in [
            ("space_factors.above", sf.above),
            ("space_factors.below", sf.below),
            ("space_factors.inner", sf.inner),
            ("space_factors.outer", sf.outer),
        ] {
            UnitIntervalLowerOpen::new(factor).map_err(invalid(field))?;
        }

        let mean_turn = (id + rb) * PI;
        let inner_turn = inner_cylinder * PI;
        let outer_turn = (id + 2.0 * rb + gap_outer) * PI;

        Ok(Self {
            dimensions,
            above: Face {
                hydraulic_diameter: duct_diameter(mean_turn, sf.above, gap_above),
                area: square_meters(mean_turn * rb * sf.above),
            },
            below: Face {
                hydraulic_diameter: duct_diameter(mean_turn, sf.below, gap_below),
                area: square_meters(mean_turn * rb * sf.below),
            },
            inner: Face {
                hydraulic_diameter: duct_diameter(inner_turn, sf.inner, gap_inner),
                area: square_meters(id * PI * sf.inner * h),
            },
            outer: Face {
                hydraulic_diameter: duct_diameter(outer_turn, sf.outer, gap_outer),
                area: square_meters((id + 2.0 * rb) * PI * sf.outer * h),
            },
        })
    }

    /// Dimensions the disc was built from.
    #[must_use]
    pub fn dimensions(&self) -> &DiscDimensions {
        &self.dimensions
    }

    /// Face above the disc, cooled by the upper radial duct.
    #[must_use]
    pub fn above(&self) -> Face {
        self.above
    }

    /// Face below the disc, cooled by the lower radial duct.
    #[must_use]
    pub fn below(&self) -> Face {
        self.below
    }

    /// Inner cylindrical face, cooled by the inner axial duct.
    #[must_use]
    pub fn inner(&self) -> Face {
        self.inner
    }

    /// Outer cylindrical face, cooled by the outer axial duct.
    #[must_use]
    pub fn outer(&self) -> Face {
        self.outer
    }

    /// Resistive plus eddy loss carrying `current` at `temperature`.
    ///
    /// The resistance is corrected from 20 °C with the copper temperature
    /// constant of 234.5 °C.
    #[must_use]
    pub fn loss(&self, current: ElectricCurrent, temperature: ThermodynamicTemperature) -> Power {
        let amps = current.get::<ampere>();
        let r20 = self.dimensions.resistance_at_20c.get::<ohm>();
        let t = temperature.get::<degree_celsius>();

        let resistance = r20 * (COPPER_TEMPERATURE_CONSTANT + t)
            / (COPPER_TEMPERATURE_CONSTANT + REFERENCE_TEMPERATURE)
            * (1.0 + self.dimensions.eddy_pu);

        Power::new::<watt>(amps * amps * resistance)
    }
}

fn positive(field: &'static str, length: Length) -> Result<f64, DiscError> {
    StrictlyPositive::new(length).map_err(invalid(field))?;
    Ok(length.get::<meter>())
}

fn invalid(field: &'static str) -> impl Fn(ConstraintError) -> DiscError {
    move |source| DiscError::Invalid { field, source }
}

/// Duct of `length · factor` by `gap`, wetted on all four sides.
fn duct_diameter(length: f64, factor: f64, gap: f64) -> Length {
    let area = length * factor * gap;
    let wetted_perimeter = (length * factor + gap) * 2.0;

    Length::new::<meter>(hydraulic_diameter(area, wetted_perimeter))
}

fn square_meters(value: f64) -> Area {
    Area::new::<square_meter>(value)
}
