//! Successive substitution with relaxation.
//!
//! Each pass freezes the coefficients, solves the linear network, and
//! blends the result with the previous estimate.

use uom::si::temperature_interval::kelvin as delta_kelvin;

use crate::models::thermal::vent_wall::core::{SolverConfig, network::NetworkModel};

use super::{Evaluation, Event, Failure, Outcome, Status, evaluate, event::max_abs};

pub(super) fn iterate<F>(
    model: &NetworkModel<'_>,
    start: Evaluation,
    config: &SolverConfig,
    observer: &mut F,
) -> Outcome
where
    F: FnMut(&Event<'_>),
{
    let tol = config.temp_tol.get::<delta_kelvin>();
    let relaxation = config.relaxation;
    let mut current = start;
    let mut iter = 0;

    loop {
        observer(&Event::new(iter, &current));

        if !current.is_finite() {
            return Outcome::failed(Failure::non_finite(), iter, current);
        }

        let Some(solution) = current.network.solve_linear() else {
            let failure = Failure::new(Status::SingularSystem, "network matrix is singular");
            return Outcome::failed(failure, iter, current);
        };

        let x = current.temperatures.celsius();
        let x_new = solution.celsius();
        let change = max_abs(&std::array::from_fn(|i| x_new[i] - x[i]));

        if change.is_nan() {
            return Outcome::failed(Failure::non_finite(), iter, current);
        }

        if change <= tol {
            return match evaluate(model, x_new) {
                Ok(eval) => Outcome::converged(iter, eval),
                Err(err) => Outcome::failed(Failure::correlation(&err), iter, current),
            };
        }

        if iter >= config.max_iters {
            let failure = Failure::new(
                Status::MaxIters,
                format!(
                    "no convergence within {iter} iterations (last temperature change {change:.3e} K)"
                ),
            );
            return Outcome::failed(failure, iter, current);
        }

        let blended = std::array::from_fn(|i| relaxation * x_new[i] + (1.0 - relaxation) * x[i]);
        current = match evaluate(model, blended) {
            Ok(eval) => eval,
            Err(err) => return Outcome::failed(Failure::correlation(&err), iter, current),
        };
        iter += 1;
    }
}
