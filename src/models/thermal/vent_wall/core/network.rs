//! Linearized energy balance of the five wall nodes.

use std::convert::Infallible;

use nalgebra::{SMatrix, SVector};
use twine_core::{EquationProblem, Model};
use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

use crate::support::heat_transfer::CorrelationError;

use super::{Node, NodeTemperatures, resolved::Resolved};

type Matrix5 = SMatrix<f64, 5, 5>;
type Vector5 = SVector<f64, 5>;

/// The network `A·T = b` assembled at one set of cavity coefficients.
///
/// Rows are node balances in W/m², ordered as [`Node`]. The residual
/// `A·T − b` vanishes exactly when every node is in balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Network {
    matrix: Matrix5,
    rhs: Vector5,
    h_cv: f64,
    h_rv: f64,
}

impl Network {
    /// Assembles the network for the given cavity coefficients.
    pub(super) fn assemble(resolved: &Resolved<'_>, h_cv: f64, h_rv: f64) -> Self {
        use Node::{CavityAir, CavityInner, CavityOuter, InnerSurface, OuterSurface};

        let r = resolved;
        let mut a = Matrix5::zeros();
        let mut b = Vector5::zeros();
        let mut set = |row: Node, col: Node, value: f64| a[(row as usize, col as usize)] = value;

        set(OuterSurface, OuterSurface, r.h_out + r.c_1);
        set(OuterSurface, CavityOuter, -r.c_1);

        set(CavityOuter, OuterSurface, r.c_1);
        set(CavityOuter, CavityOuter, -(h_cv + h_rv + r.c_1));
        set(CavityOuter, CavityInner, h_rv);
        set(CavityOuter, CavityAir, h_cv);

        set(CavityInner, CavityOuter, h_rv);
        set(CavityInner, CavityInner, -(h_cv + h_rv + r.c_2));
        set(CavityInner, InnerSurface, r.c_2);
        set(CavityInner, CavityAir, h_cv);

        set(InnerSurface, CavityInner, r.c_2);
        set(InnerSurface, InnerSurface, -(r.h_in + r.c_2));

        // Cavity air: mean of the exponential profile along the cavity when
        // ventilated, plain average of the facing surfaces when sealed.
        if r.is_ventilated() {
            let x = r.beta(h_cv) * r.l_h;
            let decay = (-x).exp();
            let weight = 0.5 * (x + decay - 1.0);
            set(CavityAir, CavityOuter, weight);
            set(CavityAir, CavityInner, weight);
            set(CavityAir, CavityAir, -x);
            b[CavityAir as usize] = (decay - 1.0) * r.theta_e;
        } else {
            set(CavityAir, CavityOuter, 0.5);
            set(CavityAir, CavityInner, 0.5);
            set(CavityAir, CavityAir, -1.0);
        }

        b[OuterSurface as usize] = r.h_out * r.theta_sat;
        b[InnerSurface as usize] = -r.h_in * r.theta_r;

        Self {
            matrix: a,
            rhs: b,
            h_cv,
            h_rv,
        }
    }

    /// Coefficient matrix `A`, row-major.
    #[must_use]
    pub fn coefficients(&self) -> [[f64; 5]; 5] {
        std::array::from_fn(|i| std::array::from_fn(|j| self.matrix[(i, j)]))
    }

    /// Constant vector `b`.
    #[must_use]
    pub fn constants(&self) -> [f64; 5] {
        std::array::from_fn(|i| self.rhs[i])
    }

    /// Convective coefficient the network was assembled with.
    #[must_use]
    pub fn h_cv(&self) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.h_cv)
    }

    /// Radiative coefficient the network was assembled with.
    #[must_use]
    pub fn h_rv(&self) -> HeatTransfer {
        HeatTransfer::new::<watt_per_square_meter_kelvin>(self.h_rv)
    }

    /// Node imbalances `A·T − b`.
    #[must_use]
    pub fn residuals(&self, temperatures: &NodeTemperatures) -> [f64; 5] {
        let t = Vector5::from(temperatures.celsius());
        let r = self.matrix * t - self.rhs;
        std::array::from_fn(|i| r[i])
    }

    /// Solves `A·T = b` with the coefficients held fixed.
    ///
    /// Returns `None` if `A` is singular.
    #[must_use]
    pub fn solve_linear(&self) -> Option<NodeTemperatures> {
        let t = self.matrix.lu().solve(&self.rhs)?;
        Some(NodeTemperatures::from_celsius(std::array::from_fn(|i| t[i])))
    }

    pub(super) fn coefficient_values(&self) -> (f64, f64) {
        (self.h_cv, self.h_rv)
    }
}

/// Assembles the network at trial node temperatures.
///
/// Each call re-evaluates `h_cv` and `h_rv` from the trial cavity surfaces.
pub(super) struct NetworkModel<'a> {
    resolved: &'a Resolved<'a>,
}

impl<'a> NetworkModel<'a> {
    pub(super) fn new(resolved: &'a Resolved<'a>) -> Self {
        Self { resolved }
    }
}

impl Model for NetworkModel<'_> {
    type Input = NodeTemperatures;
    type Output = Network;
    type Error = CorrelationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let (h_cv, h_rv) = self.resolved.coefficients(input)?;
        Ok(Network::assemble(self.resolved, h_cv, h_rv))
    }
}

/// Node balance as an equation problem over the five temperatures in °C.
pub(super) struct BalanceProblem;

impl EquationProblem<5> for BalanceProblem {
    type Input = NodeTemperatures;
    type Output = Network;
    type Error = Infallible;

    fn input(&self, x: &[f64; 5]) -> Result<Self::Input, Self::Error> {
        Ok(NodeTemperatures::from_celsius(*x))
    }

    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 5], Self::Error> {
        Ok(output.residuals(input))
    }
}
