//! Bounded bisection on a monotonic scalar function.
//!
//! [`solve`] searches a bracket `[lo, hi]` for the `x` at which a monotonic
//! function reaches a target value. The bracket is halved until its
//! half-width is within the configured absolute tolerance or the iteration
//! cap is reached, whichever comes first.
//!
//! Reaching the cap is not an error. The midpoint of the final bracket is
//! always returned, and [`Solution::status`] records whether the tolerance
//! was met. Callers that need a stricter guarantee check the status or the
//! residual themselves.
//!
//! The direction of monotonicity is detected from the bracket endpoints,
//! so both increasing and decreasing functions are supported.
//!
//! # Example
//!
//! ```
//! use twine_psychro::support::bisection::{self, Config, Status};
//!
//! let solution = bisection::solve(|x| x * x, 2.0, [0.0, 2.0], &Config::default());
//!
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-9);
//! ```

mod config;
mod solution;

pub use config::{Config, ConfigError};
pub use solution::{Solution, Status};

/// Finds `x` in `bracket` such that `f(x)` is approximately `target`.
///
/// The function must be monotonic over the bracket and the target should
/// lie between `f(lo)` and `f(hi)`.
/// If it does not, the search converges toward the endpoint whose value is
/// closest to the target.
///
/// Reversed brackets are swapped.
#[must_use]
pub fn solve(f: impl Fn(f64) -> f64, target: f64, bracket: [f64; 2], config: &Config) -> Solution {
    let [a, b] = bracket;
    let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };

    let increasing = f(hi) >= f(lo);

    let mut iters = 0;
    let status = loop {
        if 0.5 * (hi - lo) <= config.x_abs_tol() {
            break Status::Converged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }
        iters += 1;

        let mid = 0.5 * (lo + hi);
        let value = f(mid);

        #[allow(clippy::float_cmp)]
        if value == target {
            lo = mid;
            hi = mid;
            break Status::Converged;
        }

        if (value < target) == increasing {
            lo = mid;
        } else {
            hi = mid;
        }
    };

    let x = 0.5 * (lo + hi);

    tracing::trace!(
        x,
        iters,
        width = hi - lo,
        ?status,
        "bisection finished"
    );

    Solution {
        status,
        x,
        residual: f(x) - target,
        iters,
    }
}
