//! Result records returned across the kernel boundary.

/// Output of the closed-form pricer.
///
/// `vega` is `None` when the caller did not ask for sensitivities.
///
/// # Examples
/// ```
/// use skewlab_core::types::PricingResult;
///
/// let result = PricingResult {
///     price: 10.45,
///     vega: Some(37.52),
/// };
/// assert!(result.vega.unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Theoretical option value.
    pub price: f64,
    /// Sensitivity of price to a unit change in volatility, when computed.
    pub vega: Option<f64>,
}

/// Outcome of an implied-volatility solve.
///
/// Non-convergence is a state, not a fault: `volatility` is `None` and
/// `converged` is `false` when the iteration failed (cap exhausted, vega
/// collapsed, or the iterate diverged), so a failed solve is always
/// distinguishable from a legitimate zero.
///
/// # Examples
/// ```
/// use skewlab_core::types::ImpliedVolResult;
///
/// let failed = ImpliedVolResult::failed(12);
/// assert!(!failed.converged);
/// assert_eq!(failed.volatility, None);
/// assert_eq!(failed.iterations, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolResult {
    /// Recovered volatility, or `None` when the solve failed.
    pub volatility: Option<f64>,
    /// Number of Newton iterations performed.
    pub iterations: usize,
    /// Whether the stopping criterion was met.
    pub converged: bool,
}

impl ImpliedVolResult {
    /// A converged solve.
    #[inline]
    pub fn converged(volatility: f64, iterations: usize) -> Self {
        Self {
            volatility: Some(volatility),
            iterations,
            converged: true,
        }
    }

    /// A failed solve after `iterations` steps.
    #[inline]
    pub fn failed(iterations: usize) -> Self {
        Self {
            volatility: None,
            iterations,
            converged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converged_constructor() {
        let r = ImpliedVolResult::converged(0.3, 5);
        assert_eq!(r.volatility, Some(0.3));
        assert_eq!(r.iterations, 5);
        assert!(r.converged);
    }

    #[test]
    fn test_failed_constructor() {
        let r = ImpliedVolResult::failed(1000);
        assert_eq!(r.volatility, None);
        assert!(!r.converged);
    }
}
