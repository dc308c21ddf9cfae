//! Solver output for one ventilated-wall evaluation.

use uom::si::f64::HeatTransfer;

use super::{NodeTemperatures, Status};

/// Node temperatures, cavity coefficients and solver diagnostics.
///
/// When the solve fails, `temperatures`, `h_cv` and `h_rv` are NaN,
/// `residuals` holds the last iterate's imbalances, and `message` says why.
#[derive(Debug, Clone, PartialEq)]
pub struct WallStatusValues {
    pub temperatures: NodeTemperatures,

    /// Node imbalances `A·T − b`, in W/m².
    pub residuals: [f64; 5],

    /// Cavity convective coefficient, `h_cv`.
    pub h_cv: HeatTransfer,

    /// Cavity radiative coefficient, `h_rv`.
    pub h_rv: HeatTransfer,

    pub status: Status,

    /// Iterations taken after the initial guess.
    pub iters: usize,

    pub message: String,
}

impl WallStatusValues {
    /// Whether the solver converged.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_converged()
    }
}
