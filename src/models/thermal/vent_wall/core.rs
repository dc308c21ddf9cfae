//! Steady-state thermal network of a wall with a ventilated cavity.
//!
//! The wall has five nodes: the weather-exposed surface, the two surfaces
//! facing the cavity, the room-side surface, and the mean cavity air.
//! Heat crosses the cavity by convection through the air and by radiation
//! between the facing surfaces. Both coefficients depend on the cavity
//! surface temperatures, so the network is nonlinear and solved iteratively.

mod config;
mod heat_flow;
mod network;
mod nodes;
mod parameters;
mod performance;
mod resolved;
mod results;
mod simplified;
mod solve;

#[cfg(test)]
pub(super) mod test_support;

pub use config::{CalcModes, EmissivityModel, Method, SolverConfig, SurfaceFilms, WallConfig};
pub use heat_flow::HeatFlows;
pub use network::Network;
pub use nodes::{Node, NodeTemperatures};
pub use parameters::{InputError, Parameters};
pub use performance::PerformanceFactors;
pub use results::WallStatusValues;
pub use simplified::{CavityTemperatures, CorrectedPerformance, MeanCavityAir};
pub use solve::{Event, SolveError, Status};

use crate::support::heat_transfer::Season;

use network::NetworkModel;
use resolved::Resolved;
use twine_core::Model;

/// Entry point for evaluating a ventilated-cavity wall.
///
/// Holds the configuration shared by every evaluation. Each call validates
/// the parameters, so a single `VentWall` can serve a whole parameter sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VentWall {
    pub config: WallConfig,
}

impl VentWall {
    #[must_use]
    pub fn new(config: WallConfig) -> Self {
        Self { config }
    }

    /// Solves the node temperatures and cavity coefficients.
    ///
    /// Non-convergence is not an error: check [`WallStatusValues::status`].
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds, the
    /// inclination is outside `[0°, 90°]`, or the coefficients cannot be
    /// evaluated at the initial guess.
    pub fn solve(&self, params: &Parameters) -> Result<WallStatusValues, SolveError> {
        self.solve_observed(params, |_| {})
    }

    /// Like [`Self::solve`], calling `observer` with every iterate.
    ///
    /// # Errors
    ///
    /// See [`Self::solve`].
    pub fn solve_observed(
        &self,
        params: &Parameters,
        observer: impl FnMut(&Event<'_>),
    ) -> Result<WallStatusValues, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        solve::solve(&resolved, observer)
    }

    /// Assembles the linear network at the given node temperatures.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds or the
    /// cavity coefficients cannot be evaluated.
    pub fn network(
        &self,
        params: &Parameters,
        temperatures: &NodeTemperatures,
    ) -> Result<Network, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        Ok(NetworkModel::new(&resolved).call(temperatures)?)
    }

    /// Heat flows through a solved wall.
    ///
    /// Every flow is NaN if `values` is from a failed solve.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds or the
    /// inclination is outside `[0°, 90°]`.
    pub fn heat_flows(
        &self,
        params: &Parameters,
        values: &WallStatusValues,
    ) -> Result<HeatFlows, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        Ok(HeatFlows::new(&resolved, values))
    }

    /// Effective U-value, solar heat gain and related factors of a solved wall.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds or the
    /// inclination is outside `[0°, 90°]`.
    pub fn performance(
        &self,
        params: &Parameters,
        values: &WallStatusValues,
    ) -> Result<PerformanceFactors, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        Ok(PerformanceFactors::new(&resolved, values))
    }

    /// Cavity surface and air temperatures from a 3×3 linear system with
    /// seasonal coefficients.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds or the
    /// inclination is outside `[0°, 90°]`.
    pub fn simplified_cavity_temperatures(
        &self,
        params: &Parameters,
        season: Season,
    ) -> Result<CavityTemperatures, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        Ok(simplified::cavity_temperatures(&resolved, season))
    }

    /// Mean cavity air temperature from outdoor and indoor transmittances.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds or the
    /// inclination is outside `[0°, 90°]`.
    pub fn simplified_mean_cavity_air(
        &self,
        params: &Parameters,
        season: Season,
    ) -> Result<MeanCavityAir, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        Ok(simplified::mean_cavity_air(&resolved, season))
    }

    /// Corrected U-value, solar heat gain and room-side flow in closed form.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds or the
    /// inclination is outside `[0°, 90°]`.
    pub fn simplified_performance(
        &self,
        params: &Parameters,
        season: Season,
    ) -> Result<CorrectedPerformance, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        Ok(simplified::corrected_performance(&resolved, season))
    }

    /// Series and parallel resistance variant of
    /// [`Self::simplified_performance`].
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the parameters are out of bounds or the
    /// inclination is outside `[0°, 90°]`.
    pub fn simplified_reduced_performance(
        &self,
        params: &Parameters,
        season: Season,
    ) -> Result<CorrectedPerformance, SolveError> {
        let resolved = Resolved::new(params, &self.config)?;
        Ok(simplified::reduced_performance(&resolved, season))
    }
}
