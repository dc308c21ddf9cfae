//! Nonlinear solve of the coupled temperature and coefficient network.
//!
//! The cavity coefficients depend on the cavity surface temperatures, which
//! in turn depend on the coefficients. Each iterate re-evaluates the
//! coefficients at the current temperatures, reassembles the network, and
//! moves toward `A(T)·T = b(T)`.

mod error;
mod event;
mod newton;
mod status;
mod substitution;

pub use error::SolveError;
pub use event::Event;
pub use status::Status;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::support::heat_transfer::CorrelationError;

use super::{
    Method, Node, NodeTemperatures, WallStatusValues,
    network::{BalanceProblem, Network, NetworkModel},
    resolved::Resolved,
};

/// Solves the wall network from the interpolated initial guess.
///
/// The observer sees every iterate, starting with the initial guess.
///
/// # Errors
///
/// Returns [`SolveError::Correlation`] if the coefficients cannot be
/// evaluated at the initial guess. Failures after that point are reported
/// through the returned [`Status`].
pub(super) fn solve(
    resolved: &Resolved<'_>,
    mut observer: impl FnMut(&Event<'_>),
) -> Result<WallStatusValues, SolveError> {
    let model = NetworkModel::new(resolved);
    let guess = NodeTemperatures::initial_guess(resolved.theta_e, resolved.theta_r);
    let start = evaluate(&model, guess.celsius())?;

    let solver = &resolved.config.solver;
    let outcome = match solver.method {
        Method::Newton => newton::iterate(&model, start, solver, &mut observer),
        Method::Substitution => substitution::iterate(&model, start, solver, &mut observer),
    };

    Ok(outcome.into_values(resolved))
}

/// One evaluated iterate: temperatures, the network assembled at them, and
/// the resulting node residuals.
#[derive(Debug, Clone, Copy)]
struct Evaluation {
    temperatures: NodeTemperatures,
    network: Network,
    residuals: [f64; 5],
}

impl Evaluation {
    fn is_finite(&self) -> bool {
        self.temperatures.is_finite() && self.residuals.iter().all(|r| r.is_finite())
    }

    fn max_residual(&self) -> f64 {
        event::max_abs(&self.residuals)
    }

    fn norm(&self) -> f64 {
        self.residuals.iter().map(|r| r * r).sum::<f64>().sqrt()
    }
}

fn evaluate(model: &NetworkModel<'_>, x: [f64; 5]) -> Result<Evaluation, CorrelationError> {
    let problem = BalanceProblem;

    let Ok(temperatures) = problem.input(&x);
    let network = model.call(&temperatures)?;
    let Ok(residuals) = problem.residuals(&temperatures, &network);

    Ok(Evaluation {
        temperatures,
        network,
        residuals,
    })
}

/// Why an iteration stopped early.
#[derive(Debug)]
struct Failure {
    status: Status,
    message: String,
}

impl Failure {
    fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn non_finite() -> Self {
        Self::new(
            Status::Diverged,
            "node temperatures or residuals became non-finite",
        )
    }

    fn correlation(err: &CorrelationError) -> Self {
        Self::new(
            Status::Diverged,
            format!("cavity coefficients unavailable: {err}"),
        )
    }
}

/// Final iterate and how the iteration ended.
#[derive(Debug)]
struct Outcome {
    status: Status,
    iters: usize,
    last: Evaluation,
    message: String,
}

impl Outcome {
    fn converged(iters: usize, last: Evaluation) -> Self {
        Self {
            status: Status::Converged,
            iters,
            last,
            message: format!("converged after {iters} iterations"),
        }
    }

    fn failed(failure: Failure, iters: usize, last: Evaluation) -> Self {
        Self {
            status: failure.status,
            iters,
            last,
            message: failure.message,
        }
    }

    /// Packages the final iterate.
    ///
    /// A failed solve reports NaN temperatures and coefficients with the last
    /// residuals. A converged sealed cavity gets its air node pinned to the
    /// exact mean of the facing surfaces.
    fn into_values(self, resolved: &Resolved<'_>) -> WallStatusValues {
        let Self {
            status,
            iters,
            last,
            message,
        } = self;

        if !status.is_converged() {
            let nan = HeatTransfer::new::<watt_per_square_meter_kelvin>(f64::NAN);
            return WallStatusValues {
                temperatures: NodeTemperatures::nan(),
                residuals: last.residuals,
                h_cv: nan,
                h_rv: nan,
                status,
                iters,
                message,
            };
        }

        let (temperatures, residuals) = if resolved.is_ventilated() {
            (last.temperatures, last.residuals)
        } else {
            let mut t = last.temperatures.celsius();
            t[Node::CavityAir as usize] =
                0.5 * (t[Node::CavityOuter as usize] + t[Node::CavityInner as usize]);
            let temperatures = NodeTemperatures::from_celsius(t);
            (temperatures, last.network.residuals(&temperatures))
        };

        WallStatusValues {
            temperatures,
            residuals,
            h_cv: last.network.h_cv(),
            h_rv: last.network.h_rv(),
            status,
            iters,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        f64::{Angle, HeatFluxDensity, ThermodynamicTemperature, Velocity},
        heat_flux_density::watt_per_square_meter,
        thermodynamic_temperature::degree_celsius,
        velocity::meter_per_second,
    };

    use crate::{
        models::thermal::vent_wall::core::{
            CalcModes, Parameters, SolverConfig, SurfaceFilms, WallConfig,
            test_support::reference_parameters,
        },
        support::heat_transfer::{
            ConvectiveMode, Correlations, Season, SeasonalCoefficients, SimplifiedCoefficients,
        },
    };

    fn run(params: &Parameters, config: &WallConfig) -> Result<WallStatusValues, SolveError> {
        let resolved = Resolved::new(params, config)?;
        solve(&resolved, |_| {})
    }

    fn with_method(method: Method) -> WallConfig {
        WallConfig {
            solver: SolverConfig {
                method,
                ..SolverConfig::default()
            },
            ..WallConfig::default()
        }
    }

    #[test]
    fn reference_wall_converges_with_newton() {
        let values = run(&reference_parameters(), &WallConfig::default()).unwrap();

        assert_eq!(values.status, Status::Converged);
        assert!(values.iters < 10);
        for r in values.residuals {
            assert!(r.abs() < 1e-6, "residual {r}");
        }

        let t = values.temperatures.celsius();
        let expected = [14.7066, 8.2396, 6.1338, 19.2702, 2.3949];
        for (actual, expected) in t.into_iter().zip(expected) {
            assert_relative_eq!(actual, expected, epsilon = 1e-3);
        }
        assert_relative_eq!(
            values.h_cv.get::<watt_per_square_meter_kelvin>(),
            4.0594,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            values.h_rv.get::<watt_per_square_meter_kelvin>(),
            4.0882,
            epsilon = 1e-3
        );
    }

    #[test]
    fn methods_agree() {
        let params = reference_parameters();
        let newton = run(&params, &with_method(Method::Newton)).unwrap();
        let substitution = run(&params, &with_method(Method::Substitution)).unwrap();

        assert_eq!(substitution.status, Status::Converged);
        for (a, b) in newton
            .temperatures
            .celsius()
            .into_iter()
            .zip(substitution.temperatures.celsius())
        {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }
    }

    #[test]
    fn sealed_cavity_air_is_exact_surface_mean() {
        let params = Parameters {
            v_a: Velocity::new::<meter_per_second>(0.0),
            ..reference_parameters()
        };

        for method in [Method::Newton, Method::Substitution] {
            let values = run(&params, &with_method(method)).unwrap();
            let t = values.temperatures;

            assert!(values.is_success());
            assert_eq!(
                t[Node::CavityAir],
                0.5 * (t[Node::CavityOuter] + t[Node::CavityInner])
            );
        }
    }

    #[test]
    fn isothermal_wall_converges_immediately() {
        let twenty = ThermodynamicTemperature::new::<degree_celsius>(20.0);
        let params = Parameters {
            theta_e: twenty,
            theta_r: twenty,
            j_surf: HeatFluxDensity::new::<watt_per_square_meter>(0.0),
            a_surf: 0.0,
            ..reference_parameters()
        };

        let values = run(&params, &WallConfig::default()).unwrap();

        assert_eq!(values.status, Status::Converged);
        assert_eq!(values.iters, 0);
        for t in values.temperatures.celsius() {
            assert_relative_eq!(t, 20.0, epsilon = 1e-12);
        }
        // No buoyancy, so only the forced term 4·v_a remains.
        assert_relative_eq!(
            values.h_cv.get::<watt_per_square_meter_kelvin>(),
            2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn exhausted_budget_reports_nan() {
        let config = WallConfig {
            solver: SolverConfig {
                max_iters: 1,
                ..SolverConfig::default()
            },
            ..WallConfig::default()
        };

        let values = run(&reference_parameters(), &config).unwrap();

        assert_eq!(values.status, Status::MaxIters);
        assert!(!values.is_success());
        assert!(values.temperatures.celsius().iter().all(|t| t.is_nan()));
        assert!(values.h_cv.value.is_nan());
        assert!(values.h_rv.value.is_nan());
        assert!(values.residuals.iter().all(|r| r.is_finite()));
        assert!(values.message.contains("1 iteration"));
    }

    fn assert_failed(values: &WallStatusValues, status: Status) {
        assert_eq!(values.status, status);
        assert!(!values.is_success());
        assert!(values.temperatures.celsius().iter().all(|t| t.is_nan()));
        assert!(values.h_cv.value.is_nan());
        assert!(values.h_rv.value.is_nan());
        assert!(!values.message.is_empty());
    }

    #[test]
    fn stagnant_ventilated_cavity_is_singular() {
        // Without convection the ventilated air node decouples from the
        // surfaces, leaving an all-zero row in the network.
        let no_convection = SeasonalCoefficients {
            convective_slope: 0.0,
            convective_intercept: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
            ..SimplifiedCoefficients::default().winter
        };
        let config = |method| WallConfig {
            modes: CalcModes {
                convective: ConvectiveMode::Simplified(Season::Winter),
                ..CalcModes::default()
            },
            correlations: Correlations {
                simplified: SimplifiedCoefficients {
                    winter: no_convection,
                    ..SimplifiedCoefficients::default()
                },
                ..Correlations::default()
            },
            ..with_method(method)
        };

        for method in [Method::Newton, Method::Substitution] {
            let values = run(&reference_parameters(), &config(method)).unwrap();

            assert_failed(&values, Status::SingularSystem);
            assert_eq!(values.iters, 0);
            assert!(values.message.contains("singular"), "{}", values.message);
        }
    }

    #[test]
    fn non_finite_boundary_diverges() {
        // A vanishing outdoor film overflows the sol-air temperature.
        let config = |method| WallConfig {
            films: SurfaceFilms {
                outdoor: HeatTransfer::new::<watt_per_square_meter_kelvin>(1e-310),
                ..SurfaceFilms::default()
            },
            ..with_method(method)
        };

        for method in [Method::Newton, Method::Substitution] {
            let values = run(&reference_parameters(), &config(method)).unwrap();

            assert_failed(&values, Status::Diverged);
            assert!(values.message.contains("non-finite"), "{}", values.message);
        }
    }

    #[test]
    fn correlation_failure_is_reported_as_divergence() {
        let params = reference_parameters();
        let config = WallConfig::default();
        let resolved = Resolved::new(&params, &config).unwrap();
        let model = NetworkModel::new(&resolved);
        let guess = NodeTemperatures::initial_guess(resolved.theta_e, resolved.theta_r);
        let last = evaluate(&model, guess.celsius()).unwrap();

        let err = CorrelationError::UnsupportedGeometry {
            angle: Angle::new::<degree>(120.0),
        };
        let values = Outcome::failed(Failure::correlation(&err), 3, last).into_values(&resolved);

        assert_failed(&values, Status::Diverged);
        assert_eq!(values.iters, 3);
        assert_eq!(values.residuals, last.residuals);
        assert!(values.message.starts_with("cavity coefficients unavailable"));
    }

    #[test]
    fn unsupported_inclination_is_an_error() {
        let params = Parameters {
            angle: Angle::new::<degree>(120.0),
            ..reference_parameters()
        };

        match run(&params, &WallConfig::default()) {
            Err(SolveError::Correlation(CorrelationError::UnsupportedGeometry { angle })) => {
                assert_relative_eq!(angle.get::<degree>(), 120.0, epsilon = 1e-9);
            }
            other => panic!("expected unsupported geometry, got {other:?}"),
        }
    }

    #[test]
    fn observer_sees_every_iterate() {
        let params = reference_parameters();
        let config = WallConfig::default();
        let resolved = Resolved::new(&params, &config).unwrap();

        let mut events = Vec::new();
        let values = solve(&resolved, |event| {
            events.push((event.iter, event.max_residual()));
        })
        .unwrap();

        assert_eq!(events.len(), values.iters + 1);
        assert_eq!(events[0].0, 0);
        assert!(events[0].1 > 1.0);
        assert!(events.last().unwrap().1 <= 1e-9);
    }
}
