//! Walls and roofs with a ventilated air cavity.
//!
//! This module provides [`twine_core::Model`] implementations for a wall
//! whose outer cladding is separated from the inner leaf by a ventilated air
//! cavity. The computational core, including closed-form simplified methods,
//! is reachable through [`VentWall`].
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_envelope::models::thermal::vent_wall::{Parameters, VentilatedWall};
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, HeatFluxDensity, HeatTransfer, Length, ThermodynamicTemperature, Velocity},
//!     heat_flux_density::watt_per_square_meter,
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//! };
//!
//! let params = Parameters {
//!     theta_e: ThermodynamicTemperature::new::<degree_celsius>(0.0),
//!     theta_r: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!     j_surf: HeatFluxDensity::new::<watt_per_square_meter>(500.0),
//!     a_surf: 0.8,
//!     c_1: HeatTransfer::new::<watt_per_square_meter_kelvin>(5.0),
//!     c_2: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.5),
//!     l_h: Length::new::<meter>(3.5),
//!     l_w: Length::new::<meter>(0.455),
//!     l_d: Length::new::<meter>(0.05),
//!     angle: Angle::new::<degree>(90.0),
//!     v_a: Velocity::new::<meter_per_second>(0.5),
//!     l_s: Length::new::<meter>(100.0),
//!     emissivity_1: 0.9,
//!     emissivity_2: 0.9,
//! };
//!
//! let values = VentilatedWall::default().call(&params).unwrap();
//! assert!(values.is_success());
//! ```

mod core;

pub use self::core::{
    CalcModes, CavityTemperatures, CorrectedPerformance, EmissivityModel, Event, HeatFlows,
    InputError, MeanCavityAir, Method, Network, Node, NodeTemperatures, Parameters,
    PerformanceFactors, SolveError, SolverConfig, Status, SurfaceFilms, VentWall, WallConfig,
    WallStatusValues,
};

use twine_core::Model;

/// Solves a ventilated wall for its node temperatures and cavity coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VentilatedWall {
    pub config: WallConfig,
}

impl Model for VentilatedWall {
    type Input = Parameters;
    type Output = WallStatusValues;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        VentWall::new(self.config).solve(input)
    }
}

/// Solves a ventilated wall and derives its heat flows and performance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VentilatedWallReport {
    pub config: WallConfig,
}

/// Solver state with the quantities derived from it.
///
/// If the solve failed, the derived values are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct WallReport {
    pub status: WallStatusValues,
    pub heat_flows: HeatFlows,
    pub performance: PerformanceFactors,
}

impl Model for VentilatedWallReport {
    type Input = Parameters;
    type Output = WallReport;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let wall = VentWall::new(self.config);
        let status = wall.solve(input)?;

        Ok(WallReport {
            heat_flows: wall.heat_flows(input, &status)?,
            performance: wall.performance(input, &status)?,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{HeatFluxDensity, ThermodynamicTemperature},
        heat_flux_density::watt_per_square_meter,
        thermodynamic_temperature::degree_celsius,
    };

    use super::core::test_support::reference_parameters;

    #[test]
    fn report_balances_heat_flows() {
        let report = VentilatedWallReport::default()
            .call(&reference_parameters())
            .unwrap();

        assert!(report.status.is_success());
        let q = report.heat_flows;
        let w = |q: HeatFluxDensity| q.get::<watt_per_square_meter>();
        assert_relative_eq!(
            w(q.outdoor_surface),
            w(q.indoor_surface) + w(q.exhaust),
            epsilon = 1e-6
        );
        assert!(report.performance.k_e.is_finite());
    }

    #[test]
    fn undefined_correction_factor_is_not_an_error() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(15.0);
        let params = Parameters {
            theta_e: t,
            theta_r: t,
            a_surf: 0.0,
            ..reference_parameters()
        };

        let report = VentilatedWallReport::default().call(&params).unwrap();

        assert!(report.status.is_success());
        assert!(report.performance.k_e.is_nan());
    }

    #[test]
    fn models_agree() {
        let params = reference_parameters();
        let status = VentilatedWall::default().call(&params).unwrap();
        let report = VentilatedWallReport::default().call(&params).unwrap();

        assert_eq!(status, report.status);
    }
}
