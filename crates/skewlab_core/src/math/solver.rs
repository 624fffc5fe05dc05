//! Root-finder configuration.

/// Configuration for the Newton-Raphson implied-volatility iteration.
///
/// The stopping rule is a *relative step* criterion: the iteration stops
/// when `|Δv / v_prev| < tolerance`, not when the residual is small. This
/// matches how the solver is consumed — the caller cares about the
/// volatility stabilising, not about the price error in absolute terms.
///
/// # Examples
///
/// ```
/// use skewlab_core::math::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-3);
/// assert_eq!(config.max_iterations, 1000);
///
/// let custom = SolverConfig::new(1e-5, 200);
/// assert_eq!(custom.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Relative-step convergence tolerance.
    ///
    /// The solver stops when `|Δv / v_prev| < tolerance`.
    pub tolerance: f64,

    /// Maximum number of iterations before giving up.
    ///
    /// The sole safeguard against unbounded iteration; on exhaustion the
    /// solver reports a non-converged result rather than an error.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    /// Default tolerance 1e-3 (0.1% relative step) and 1000 iterations.
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 1000,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with the given tolerance and iteration cap.
    ///
    /// # Panics
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        assert!(tolerance > 0.0, "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.max_iterations, 1000);
    }

    #[test]
    fn test_new_config() {
        let config = SolverConfig::new(1e-6, 50);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    #[should_panic(expected = "tolerance must be positive")]
    fn test_zero_tolerance_panics() {
        SolverConfig::new(0.0, 100);
    }

    #[test]
    #[should_panic(expected = "max_iterations must be > 0")]
    fn test_zero_iterations_panics() {
        SolverConfig::new(1e-3, 0);
    }

    #[test]
    fn test_copy_semantics() {
        let a = SolverConfig::default();
        let b = a;
        assert_eq!(a, b);
    }
}
