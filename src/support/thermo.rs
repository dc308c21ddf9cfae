//! Dry-air properties for natural convection in thin cavities and on surfaces.
//!
//! Cavity correlations need the transport properties of air at the mean
//! temperature of the two facing surfaces, and the surface correlations need
//! them at the film temperature.
//! [`AirModel`] selects between temperature-dependent properties and a fixed
//! set, and [`AirProperties`] carries one evaluated set along with the
//! dimensionless groups built from it.

mod air;
mod error;

pub use air::{AirModel, AirProperties};
pub use error::PropertyError;
