//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperatures, conductances,
//! heat flux densities, cavity dimensions).
//! This module provides extensions that are useful for envelope modeling but
//! aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_envelope::support::units::TemperatureDifference;
//!
//! let surface = ThermodynamicTemperature::new::<degree_celsius>(14.7);
//! let outdoor = ThermodynamicTemperature::new::<degree_celsius>(0.0);
//! let delta_t = surface.minus(outdoor);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.
//!
//! ## Radiation
//!
//! [`StefanBoltzmannConstant`] carries the unit W/(m²·K⁴), so the constant
//! used by the linearized radiative coefficient `4·σ·e·T³` is configured as
//! a quantity like every other input.

mod quantities;
mod temperature_difference;

pub use quantities::{StefanBoltzmannConstant, stefan_boltzmann};
pub use temperature_difference::TemperatureDifference;
