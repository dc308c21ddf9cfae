//! Geometry, material and boundary inputs of a ventilated-cavity wall.

use thiserror::Error;
use uom::si::{
    f64::{
        Angle, HeatFluxDensity, HeatTransfer, Length, ThermodynamicTemperature, Velocity,
    },
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{
    ConstraintError, NonNegative, StrictlyPositive, UnitInterval, UnitIntervalLowerOpen,
};

/// Inputs for one steady-state evaluation of a ventilated-cavity wall.
///
/// Subscript 1 refers to the outer (weather-side) leaf and the cavity
/// surface facing it; subscript 2 to the inner leaf.
///
/// The inclination is not checked here: an angle outside `[0°, 90°]` is
/// rejected as an unsupported geometry when the wall is resolved, whatever
/// the calculation mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Outdoor air temperature, `θe`.
    pub theta_e: ThermodynamicTemperature,

    /// Indoor air temperature, `θr`.
    pub theta_r: ThermodynamicTemperature,

    /// Solar irradiance incident on the outer surface, `J_surf`.
    pub j_surf: HeatFluxDensity,

    /// Solar absorptance of the outer surface, `a_surf`, in `[0, 1]`.
    pub a_surf: f64,

    /// Thermal conductance of the outer leaf, `C1`.
    pub c_1: HeatTransfer,

    /// Thermal conductance of the inner leaf, `C2`.
    pub c_2: HeatTransfer,

    /// Cavity length along the airflow, `l_h`.
    pub l_h: Length,

    /// Cavity width, `l_w`.
    pub l_w: Length,

    /// Cavity depth between the facing surfaces, `l_d`.
    pub l_d: Length,

    /// Cavity inclination: 0° horizontal, 90° vertical.
    pub angle: Angle,

    /// Mean air velocity in the cavity, `v_a`. Zero for a sealed cavity.
    pub v_a: Velocity,

    /// Spacing of the furring members or rafters, `l_s`.
    pub l_s: Length,

    /// Emissivity of cavity surface 1, in `(0, 1]`.
    pub emissivity_1: f64,

    /// Emissivity of cavity surface 2, in `(0, 1]`.
    pub emissivity_2: f64,
}

/// A [`Parameters`] field violates its physical bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid parameter `{field}`")]
pub struct InputError {
    /// Name of the offending field.
    pub field: &'static str,

    #[source]
    pub source: ConstraintError,
}

impl InputError {
    pub(super) fn new(field: &'static str, source: ConstraintError) -> Self {
        Self { field, source }
    }
}

impl Parameters {
    /// Checks every field against its physical bounds.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), InputError> {
        let field = |name| move |err| InputError::new(name, err);

        check_temperature(self.theta_e).map_err(field("theta_e"))?;
        check_temperature(self.theta_r).map_err(field("theta_r"))?;
        NonNegative::new(self.j_surf).map_err(field("j_surf"))?;
        UnitInterval::new(self.a_surf).map_err(field("a_surf"))?;
        StrictlyPositive::new(self.c_1).map_err(field("c_1"))?;
        StrictlyPositive::new(self.c_2).map_err(field("c_2"))?;
        StrictlyPositive::new(self.l_h).map_err(field("l_h"))?;
        StrictlyPositive::new(self.l_w).map_err(field("l_w"))?;
        StrictlyPositive::new(self.l_d).map_err(field("l_d"))?;
        NonNegative::new(self.v_a).map_err(field("v_a"))?;
        StrictlyPositive::new(self.l_s).map_err(field("l_s"))?;
        UnitIntervalLowerOpen::new(self.emissivity_1).map_err(field("emissivity_1"))?;
        UnitIntervalLowerOpen::new(self.emissivity_2).map_err(field("emissivity_2"))?;

        Ok(())
    }
}

/// Temperatures must be finite and above absolute zero.
fn check_temperature(t: ThermodynamicTemperature) -> Result<(), ConstraintError> {
    let t = t.get::<kelvin>();
    if t.is_infinite() {
        return Err(ConstraintError::AboveMaximum);
    }
    StrictlyPositive::new(t).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        heat_transfer::watt_per_square_meter_kelvin, length::meter,
        thermodynamic_temperature::degree_celsius, velocity::meter_per_second,
    };

    use crate::models::thermal::vent_wall::core::test_support::reference_parameters;

    #[test]
    fn reference_parameters_are_valid() {
        assert_eq!(reference_parameters().validate(), Ok(()));
    }

    #[test]
    fn sealed_cavity_is_valid() {
        let params = Parameters {
            v_a: Velocity::new::<meter_per_second>(0.0),
            ..reference_parameters()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn names_offending_field() {
        let cases = [
            (
                Parameters {
                    l_d: Length::new::<meter>(0.0),
                    ..reference_parameters()
                },
                "l_d",
                ConstraintError::Zero,
            ),
            (
                Parameters {
                    c_2: HeatTransfer::new::<watt_per_square_meter_kelvin>(-0.5),
                    ..reference_parameters()
                },
                "c_2",
                ConstraintError::Negative,
            ),
            (
                Parameters {
                    v_a: Velocity::new::<meter_per_second>(-0.1),
                    ..reference_parameters()
                },
                "v_a",
                ConstraintError::Negative,
            ),
            (
                Parameters {
                    a_surf: 1.2,
                    ..reference_parameters()
                },
                "a_surf",
                ConstraintError::AboveMaximum,
            ),
            (
                Parameters {
                    emissivity_2: 0.0,
                    ..reference_parameters()
                },
                "emissivity_2",
                ConstraintError::BelowMinimum,
            ),
            (
                Parameters {
                    theta_r: ThermodynamicTemperature::new::<degree_celsius>(f64::NAN),
                    ..reference_parameters()
                },
                "theta_r",
                ConstraintError::NotANumber,
            ),
        ];

        for (params, field, source) in cases {
            assert_eq!(params.validate(), Err(InputError { field, source }));
        }
    }
}
