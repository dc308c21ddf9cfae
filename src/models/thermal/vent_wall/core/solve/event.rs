use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::models::thermal::vent_wall::core::NodeTemperatures;

use super::Evaluation;

/// Snapshot of one solver iterate, passed to an observer.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Iteration number, starting at 0 for the initial guess.
    pub iter: usize,
    pub temperatures: &'a NodeTemperatures,
    /// Node residuals `A·T − b`, in W/m².
    pub residuals: &'a [f64; 5],
    pub h_cv: HeatTransfer,
    pub h_rv: HeatTransfer,
}

impl<'a> Event<'a> {
    pub(super) fn new(iter: usize, eval: &'a Evaluation) -> Self {
        let (h_cv, h_rv) = eval.network.coefficient_values();
        Self {
            iter,
            temperatures: &eval.temperatures,
            residuals: &eval.residuals,
            h_cv: HeatTransfer::new::<watt_per_square_meter_kelvin>(h_cv),
            h_rv: HeatTransfer::new::<watt_per_square_meter_kelvin>(h_rv),
        }
    }

    /// Largest absolute node residual, in W/m².
    #[must_use]
    pub fn max_residual(&self) -> f64 {
        max_abs(self.residuals)
    }
}

/// Largest absolute value, or NaN if any value is NaN.
pub(super) fn max_abs(values: &[f64; 5]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v.abs())
        }
    })
}
