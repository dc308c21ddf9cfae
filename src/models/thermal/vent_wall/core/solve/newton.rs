//! Damped Newton iteration on the node residuals.

use nalgebra::{SMatrix, SVector};
use uom::si::heat_flux_density::watt_per_square_meter;

use crate::models::thermal::vent_wall::core::{SolverConfig, network::NetworkModel};

use super::{Evaluation, Event, Failure, Outcome, Status, evaluate};

/// Relative forward-difference step for the Jacobian.
const FD_STEP: f64 = 1e-6;

/// Step halvings tried before accepting a non-improving step.
const MAX_HALVINGS: usize = 20;

pub(super) fn iterate<F>(
    model: &NetworkModel<'_>,
    start: Evaluation,
    config: &SolverConfig,
    observer: &mut F,
) -> Outcome
where
    F: FnMut(&Event<'_>),
{
    let tol = config.residual_tol.get::<watt_per_square_meter>();
    let mut current = start;
    let mut iter = 0;

    loop {
        observer(&Event::new(iter, &current));

        if !current.is_finite() {
            return Outcome::failed(Failure::non_finite(), iter, current);
        }

        let max_residual = current.max_residual();
        if max_residual <= tol {
            return Outcome::converged(iter, current);
        }

        if iter >= config.max_iters {
            let failure = Failure::new(
                Status::MaxIters,
                format!(
                    "no convergence within {iter} iterations (max residual {max_residual:.3e} W/m²)"
                ),
            );
            return Outcome::failed(failure, iter, current);
        }

        current = match step(model, &current) {
            Ok(next) => next,
            Err(failure) => return Outcome::failed(failure, iter, current),
        };
        iter += 1;
    }
}

/// Takes one Newton step from `current`, halving it until the residual norm
/// decreases.
///
/// If no halving improves the norm, the smallest evaluated step is taken.
fn step(model: &NetworkModel<'_>, current: &Evaluation) -> Result<Evaluation, Failure> {
    let x = current.temperatures.celsius();
    let r = current.residuals;

    let mut jacobian = SMatrix::<f64, 5, 5>::zeros();
    for (j, &xj) in x.iter().enumerate() {
        let h = FD_STEP * xj.abs().max(1.0);
        let mut shifted = x;
        shifted[j] += h;

        let shifted = evaluate(model, shifted).map_err(|err| Failure::correlation(&err))?;
        for (i, (rp, r0)) in shifted.residuals.iter().zip(r).enumerate() {
            jacobian[(i, j)] = (rp - r0) / h;
        }
    }

    let dx = jacobian
        .lu()
        .solve(&-SVector::<f64, 5>::from(r))
        .ok_or_else(|| Failure::new(Status::SingularSystem, "Newton Jacobian is singular"))?;

    let norm = current.norm();
    let mut lambda = 1.0;
    let mut accepted = None;

    for _ in 0..MAX_HALVINGS {
        let trial = std::array::from_fn(|i| x[i] + lambda * dx[i]);
        if let Ok(eval) = evaluate(model, trial) {
            let improved = eval.norm() < norm;
            accepted = Some(eval);
            if improved {
                break;
            }
        }
        lambda *= 0.5;
    }

    accepted.ok_or_else(|| {
        Failure::new(
            Status::Diverged,
            "cavity coefficients unavailable along the Newton direction",
        )
    })
}
