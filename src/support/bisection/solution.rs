/// Indicates whether the solver met its tolerance or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed to within the configured tolerance.
    Converged,

    /// Reached the iteration limit before the tolerance was met.
    MaxIters,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub x: f64,

    /// Function value at `x` minus the target.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}
