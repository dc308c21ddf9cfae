//! Heat transfer coefficients across ventilated and sealed air cavities.
//!
//! A cavity exchanges heat between its two facing surfaces by convection
//! through the air and by long-wave radiation. This module provides:
//!
//! - [`Correlations`]: the convective coefficient `h_cv` and radiative
//!   coefficient `h_rv`, in detailed or simplified form ([`ConvectiveMode`],
//!   [`RadiativeMode`])
//! - [`nusselt`]: Nusselt number correlations for air layers by inclination
//! - [`effective_emissivity_parallel`] and
//!   [`effective_emissivity_two_dimension`] for the radiating pair
//! - [`surface`]: single-surface natural-convection references
//!
//! # Example
//!
//! ```
//! use twine_envelope::support::heat_transfer::{ConvectiveMode, Correlations};
//! use uom::si::{
//!     angle::degree,
//!     f64::{Angle, Length, ThermodynamicTemperature, Velocity},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//! };
//!
//! let surfaces = [
//!     ThermodynamicTemperature::new::<degree_celsius>(8.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(6.0),
//! ];
//!
//! let h_cv = Correlations::default()
//!     .convective_coefficient(
//!         ConvectiveMode::Detailed,
//!         Velocity::new::<meter_per_second>(0.5),
//!         surfaces,
//!         Angle::new::<degree>(90.0),
//!         Length::new::<meter>(3.5),
//!         Length::new::<meter>(0.05),
//!     )
//!     .unwrap();
//!
//! // Forced convection alone contributes 4·v_a.
//! assert!(h_cv.get::<watt_per_square_meter_kelvin>() > 2.0);
//! ```

mod correlations;
mod emissivity;
mod error;
mod mode;

pub mod nusselt;
pub mod surface;

pub use correlations::Correlations;
pub use emissivity::{effective_emissivity_parallel, effective_emissivity_two_dimension};
pub use error::CorrelationError;
pub use mode::{
    ConvectiveMode, RadiativeMode, Season, SeasonalCoefficients, SimplifiedCoefficients,
};
pub use nusselt::SixtyDegreeAnchor;
