use uom::si::{
    area::square_meter,
    f64::{ElectricCurrent, HeatTransfer, Power, ThermodynamicTemperature, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::{
    bluebook::{convection_coefficient, heat_transfer_coefficient},
    oil::InsulationPaper,
};

use super::{Disc, DiscError, Face};

/// Oil temperatures at the four corners of a disc's cooling ducts.
///
/// Node numbering follows the disc: 1 and 2 below it (inner and outer),
/// 3 and 4 above it (inner and outer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTemperatures {
    /// Node 1.
    pub bottom_inner: ThermodynamicTemperature,
    /// Node 2.
    pub bottom_outer: ThermodynamicTemperature,
    /// Node 3.
    pub top_inner: ThermodynamicTemperature,
    /// Node 4.
    pub top_outer: ThermodynamicTemperature,
}

/// Mean oil velocity along each duct bordering the disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVelocities {
    /// Radial duct below the disc, from node 1 to node 2.
    pub below: Velocity,
    /// Radial duct above the disc, from node 3 to node 4.
    pub above: Velocity,
    /// Inner axial duct, from node 1 to node 3.
    pub inner: Velocity,
    /// Outer axial duct, from node 2 to node 4.
    pub outer: Velocity,
}

/// Operating point at which a disc's heat transfer is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscConditions {
    /// Conductor current.
    pub current: ElectricCurrent,
    /// Current estimate of the conductor temperature.
    pub disc_temperature: ThermodynamicTemperature,
    /// Oil temperatures around the disc.
    pub oil: NodeTemperatures,
    /// Oil velocities in the surrounding ducts.
    pub velocities: PathVelocities,
}

/// Surface heat transfer coefficient of each disc face, including the
/// paper cover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCoefficients {
    /// Face over the lower radial duct.
    pub below: HeatTransfer,
    /// Face under the upper radial duct.
    pub above: HeatTransfer,
    /// Face along the inner axial duct.
    pub inner: HeatTransfer,
    /// Face along the outer axial duct.
    pub outer: HeatTransfer,
}

/// Result of one heat balance evaluation for a disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalance {
    /// Coefficients the balance was computed with.
    pub surface: SurfaceCoefficients,
    /// Disc loss at [`DiscConditions::disc_temperature`].
    pub loss: Power,
    /// Disc temperature at which the faces carry away exactly `loss`.
    pub temperature: ThermodynamicTemperature,
}

/// Per-face inputs to the convection correlation, all in SI with °C.
struct FaceFlow {
    face: Face,
    path_length: f64,
    bulk: f64,
    velocity: f64,
}

/// Evaluates the surface heat transfer coefficients of `disc`.
///
/// Each face sees the mean temperature of its two oil nodes as its bulk
/// temperature. Radial ducts run the radial build, axial ducts the disc
/// height.
#[must_use]
pub fn surface_coefficients(disc: &Disc, conditions: &DiscConditions) -> SurfaceCoefficients {
    coefficients_of(disc, conditions, &face_flows(disc, conditions))
}

/// Evaluates the surface coefficients and the disc temperature that
/// balances the disc loss against the heat carried off by the four faces:
///
/// ```text
/// T = (loss + Σ hᵢ·Aᵢ·Tᵢ) / Σ hᵢ·Aᵢ
/// ```
///
/// The loss is taken at the disc temperature in `conditions`, so repeated
/// calls with the returned temperature move towards a steady state.
///
/// # Errors
///
/// Returns [`DiscError::NonFinite`] if the balance temperature is infinite
/// or `NaN`, which happens when no face transfers any heat (for example,
/// stagnant oil on every face).
pub fn heat_balance(disc: &Disc, conditions: &DiscConditions) -> Result<HeatBalance, DiscError> {
    let flows = face_flows(disc, conditions);
    let surface = coefficients_of(disc, conditions, &flows);
    let loss = disc.loss(conditions.current, conditions.disc_temperature);

    let coefficients = [surface.below, surface.above, surface.inner, surface.outer];

    let (weighted, conductance) = flows.iter().zip(coefficients).fold(
        (0.0, 0.0),
        |(weighted, conductance), (flow, h)| {
            let ha =
                h.get::<watt_per_square_meter_kelvin>() * flow.face.area.get::<square_meter>();
            (weighted + ha * flow.bulk, conductance + ha)
        },
    );

    let temperature = (loss.get::<watt>() + weighted) / conductance;
    if !temperature.is_finite() {
        return Err(DiscError::NonFinite {
            context: format!(
                "loss {} W over a total surface conductance of {conductance} W/K",
                loss.get::<watt>()
            ),
        });
    }

    Ok(HeatBalance {
        surface,
        loss,
        temperature: ThermodynamicTemperature::new::<degree_celsius>(temperature),
    })
}

fn coefficients_of(
    disc: &Disc,
    conditions: &DiscConditions,
    flows: &[FaceFlow; 4],
) -> SurfaceCoefficients {
    let [below, above, inner, outer] = flows.each_ref().map(|flow| {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(face_coefficient(disc, conditions, flow))
    });

    SurfaceCoefficients {
        below,
        above,
        inner,
        outer,
    }
}

fn face_flows(disc: &Disc, conditions: &DiscConditions) -> [FaceFlow; 4] {
    let celsius = |t: ThermodynamicTemperature| t.get::<degree_celsius>();
    let mean = |a, b| (celsius(a) + celsius(b)) / 2.0;

    let oil = &conditions.oil;
    let v = &conditions.velocities;
    let radial = disc.dimensions().radial_build.get::<meter>();
    let axial = disc.dimensions().height.get::<meter>();

    [
        FaceFlow {
            face: disc.below(),
            path_length: radial,
            bulk: mean(oil.bottom_inner, oil.bottom_outer),
            velocity: v.below.get::<meter_per_second>(),
        },
        FaceFlow {
            face: disc.above(),
            path_length: radial,
            bulk: mean(oil.top_inner, oil.top_outer),
            velocity: v.above.get::<meter_per_second>(),
        },
        FaceFlow {
            face: disc.inner(),
            path_length: axial,
            bulk: mean(oil.bottom_inner, oil.top_inner),
            velocity: v.inner.get::<meter_per_second>(),
        },
        FaceFlow {
            face: disc.outer(),
            path_length: axial,
            bulk: mean(oil.bottom_outer, oil.top_outer),
            velocity: v.outer.get::<meter_per_second>(),
        },
    ]
}

fn face_coefficient(disc: &Disc, conditions: &DiscConditions, flow: &FaceFlow) -> f64 {
    let gradient = conditions.disc_temperature.get::<degree_celsius>() - flow.bulk;
    let h_conv = convection_coefficient(
        flow.face.hydraulic_diameter.get::<meter>(),
        flow.path_length,
        flow.bulk,
        gradient,
        flow.velocity,
    );

    heat_transfer_coefficient(
        h_conv,
        disc.dimensions().paper_cover.get::<meter>(),
        InsulationPaper::thermal_conductivity().get::<watt_per_meter_kelvin>(),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::electric_current::ampere;

    use super::super::test_support::lv_disc_dimensions;
    use super::*;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    fn speed(value: f64) -> Velocity {
        Velocity::new::<meter_per_second>(value)
    }

    fn conditions(amps: f64, disc: f64) -> DiscConditions {
        DiscConditions {
            current: ElectricCurrent::new::<ampere>(amps),
            disc_temperature: celsius(disc),
            oil: NodeTemperatures {
                bottom_inner: celsius(40.0),
                bottom_outer: celsius(41.0),
                top_inner: celsius(42.0),
                top_outer: celsius(43.0),
            },
            velocities: PathVelocities {
                below: speed(0.01),
                above: speed(0.012),
                inner: speed(0.03),
                outer: speed(0.025),
            },
        }
    }

    #[test]
    fn lower_face_by_hand() -> Result<(), DiscError> {
        let disc = Disc::new(lv_disc_dimensions())?;
        let surface = surface_coefficients(&disc, &conditions(113.6, 55.0));

        let bulk = 40.5;
        let h_conv = convection_coefficient(
            disc.below().hydraulic_diameter.get::<meter>(),
            1.874 * 0.0254,
            bulk,
            55.0 - bulk,
            0.01,
        );
        let expected = heat_transfer_coefficient(h_conv, 0.018 * 0.0254, 0.16);

        assert_relative_eq!(
            surface.below.get::<watt_per_square_meter_kelvin>(),
            expected,
            max_relative = 1e-9
        );
        assert!(expected > 0.0);

        Ok(())
    }

    #[test]
    fn paper_cover_reduces_heat_transfer() -> Result<(), DiscError> {
        let covered = Disc::new(lv_disc_dimensions())?;
        let mut bare_dimensions = lv_disc_dimensions();
        bare_dimensions.paper_cover = uom::si::f64::Length::new::<meter>(0.0);
        let bare = Disc::new(bare_dimensions)?;

        let at = conditions(113.6, 55.0);
        let covered = surface_coefficients(&covered, &at);
        let bare = surface_coefficients(&bare, &at);

        assert!(covered.inner < bare.inner);
        assert!(covered.outer < bare.outer);

        Ok(())
    }

    #[test]
    fn unloaded_disc_settles_at_the_oil_temperature() -> Result<(), DiscError> {
        let disc = Disc::new(lv_disc_dimensions())?;
        let mut at = conditions(0.0, 50.0);
        at.oil = NodeTemperatures {
            bottom_inner: celsius(50.0),
            bottom_outer: celsius(50.0),
            top_inner: celsius(50.0),
            top_outer: celsius(50.0),
        };

        let balance = heat_balance(&disc, &at)?;
        assert_relative_eq!(balance.loss.get::<watt>(), 0.0);
        assert_relative_eq!(
            balance.temperature.get::<degree_celsius>(),
            50.0,
            max_relative = 1e-9
        );

        Ok(())
    }

    #[test]
    fn balance_carries_away_the_loss() -> Result<(), DiscError> {
        let disc = Disc::new(lv_disc_dimensions())?;
        let at = conditions(113.6, 55.0);
        let balance = heat_balance(&disc, &at)?;

        let t = balance.temperature.get::<degree_celsius>();
        assert!(t > 43.0);

        let s = balance.surface;
        let carried: f64 = [
            (s.below, disc.below(), 40.5),
            (s.above, disc.above(), 42.5),
            (s.inner, disc.inner(), 41.0),
            (s.outer, disc.outer(), 42.0),
        ]
        .iter()
        .map(|(h, face, bulk)| {
            h.get::<watt_per_square_meter_kelvin>() * face.area.get::<square_meter>() * (t - bulk)
        })
        .sum();

        assert_relative_eq!(carried, balance.loss.get::<watt>(), max_relative = 1e-9);

        Ok(())
    }

    #[test]
    fn balance_reports_the_surface_coefficients() -> Result<(), DiscError> {
        let disc = Disc::new(lv_disc_dimensions())?;
        let at = conditions(113.6, 60.0);

        assert_eq!(
            heat_balance(&disc, &at)?.surface,
            surface_coefficients(&disc, &at)
        );

        Ok(())
    }

    #[test]
    fn stagnant_oil_has_no_balance() -> Result<(), DiscError> {
        let disc = Disc::new(lv_disc_dimensions())?;
        let mut at = conditions(113.6, 55.0);
        at.velocities = PathVelocities {
            below: speed(0.0),
            above: speed(0.0),
            inner: speed(0.0),
            outer: speed(0.0),
        };

        assert!(matches!(
            heat_balance(&disc, &at),
            Err(DiscError::NonFinite { .. })
        ));

        Ok(())
    }
}
