//! # Twine Envelope
//!
//! Steady-state building envelope models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations,
//!   starting with walls and roofs that contain a ventilated air cavity.
//! - [`support`]: Supporting utilities used by models, such as cavity heat
//!   transfer correlations and dry-air properties.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once more than one model needs it.
//! Only utilities in [`support`] are part of the public API.

pub mod models;
pub mod support;
