use thiserror::Error;

use crate::support::heat_transfer::CorrelationError;

use crate::models::thermal::vent_wall::core::InputError;

/// Errors that prevent a ventilated-wall evaluation from starting.
///
/// Failures during iteration are not errors: they are reported through
/// [`Status`](super::Status) on the returned values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A parameter or surface film violates its physical bounds.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The cavity coefficients could not be evaluated at the initial guess.
    ///
    /// An inclination outside `[0°, 90°]` is reported here.
    #[error("cavity coefficients unavailable: {0}")]
    Correlation(#[from] CorrelationError),
}
