/// Outcome of the nonlinear iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Residuals (Newton) or temperature updates (substitution) met tolerance.
    Converged,

    /// The iteration budget ran out first.
    MaxIters,

    /// A linear solve hit a singular matrix.
    SingularSystem,

    /// The iterate became non-finite or left the correlations' domain.
    Diverged,
}

impl Status {
    #[must_use]
    pub fn is_converged(self) -> bool {
        self == Self::Converged
    }
}
