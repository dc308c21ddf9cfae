use thiserror::Error;
use uom::si::f64::{Angle, Length};

use crate::support::thermo::PropertyError;

/// Errors that can occur while evaluating cavity heat transfer coefficients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrelationError {
    /// No Nusselt correlation covers the cavity inclination.
    ///
    /// Inclinations must lie in `[0°, 90°]`.
    #[error("unsupported cavity inclination: {angle:?}")]
    UnsupportedGeometry { angle: Angle },

    /// A surface emissivity is zero, negative, or not a number.
    #[error("invalid emissivity: {value}")]
    InvalidEmissivity { value: f64 },

    /// A length entering a correlation is zero, negative, or not a number.
    #[error("invalid {name}: {length:?}")]
    InvalidLength { name: &'static str, length: Length },

    /// Air properties could not be evaluated.
    #[error("air properties unavailable")]
    Property(#[from] PropertyError),
}
