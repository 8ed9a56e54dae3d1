use thiserror::Error;

/// Configuration for the bounded bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,
}

impl Default for Config {
    fn default() -> Self {
        Self::humidity_ratio()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        Ok(Self {
            max_iters,
            x_abs_tol,
        })
    }

    /// Preset for searches over a temperature in °C.
    ///
    /// Capped at 50 iterations with a tolerance of 1 µK.
    #[must_use]
    pub const fn temperature() -> Self {
        Self {
            max_iters: 50,
            x_abs_tol: 1e-6,
        }
    }

    /// Preset for searches over a humidity ratio in kg/kg.
    ///
    /// Capped at 100 iterations with a tolerance of 1e-12 kg/kg.
    #[must_use]
    pub const fn humidity_ratio() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
        }
    }

    /// Returns the maximum number of bisection iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the search variable.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_tolerance() {
        assert_eq!(Config::new(10, -1.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::INFINITY), Err(ConfigError::XAbs));
        assert!(Config::new(10, 0.0).is_ok());
    }

    #[test]
    fn presets_use_domain_iteration_caps() {
        assert_eq!(Config::temperature().max_iters(), 50);
        assert_eq!(Config::humidity_ratio().max_iters(), 100);
        assert_eq!(Config::default(), Config::humidity_ratio());
    }
}
