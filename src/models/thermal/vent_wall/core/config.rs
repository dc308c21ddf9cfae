use uom::si::{
    f64::{HeatFluxDensity, HeatTransfer, TemperatureInterval},
    heat_flux_density::watt_per_square_meter,
    heat_transfer::watt_per_square_meter_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::heat_transfer::{ConvectiveMode, Correlations, RadiativeMode};

/// Configuration of a ventilated-cavity wall evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallConfig {
    pub films: SurfaceFilms,
    pub modes: CalcModes,
    pub emissivity: EmissivityModel,
    pub correlations: Correlations,
    pub solver: SolverConfig,
}

/// Combined (convective plus radiative) film coefficients of the exposed faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceFilms {
    /// Outdoor film coefficient, `h_out`.
    pub outdoor: HeatTransfer,

    /// Indoor film coefficient, `h_in`.
    pub indoor: HeatTransfer,
}

impl Default for SurfaceFilms {
    fn default() -> Self {
        Self {
            outdoor: HeatTransfer::new::<watt_per_square_meter_kelvin>(25.0),
            indoor: HeatTransfer::new::<watt_per_square_meter_kelvin>(9.0),
        }
    }
}

/// Calculation fidelity of the cavity coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalcModes {
    pub convective: ConvectiveMode,
    pub radiative: RadiativeMode,
}

/// How the effective emissivity of the cavity surfaces is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmissivityModel {
    /// Infinite parallel plates.
    #[default]
    Parallel,

    /// Plates bounded by furring members at spacing `l_s`.
    TwoDimensional,
}

/// Algorithm used to resolve the temperature/coefficient coupling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Method {
    /// Newton iteration on the node residuals with a finite-difference
    /// Jacobian and step halving.
    #[default]
    Newton,

    /// Repeated linear solves with relaxation between passes.
    Substitution,
}

/// Solver configuration for the coupled thermal network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub method: Method,

    /// Maximum number of outer iterations.
    pub max_iters: usize,

    /// Largest node residual accepted as converged, for [`Method::Newton`].
    pub residual_tol: HeatFluxDensity,

    /// Largest node temperature change accepted as converged, for
    /// [`Method::Substitution`].
    pub temp_tol: TemperatureInterval,

    /// Weight of the new linear solution in each substitution pass.
    ///
    /// `0.5` averages the old and new estimates.
    pub relaxation: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            max_iters: 100,
            residual_tol: HeatFluxDensity::new::<watt_per_square_meter>(1e-9),
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-10),
            relaxation: 0.5,
        }
    }
}
