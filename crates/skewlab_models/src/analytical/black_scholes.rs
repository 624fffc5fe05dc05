//! Black-Scholes-Merton pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//! - q is the continuous dividend yield (zero for non-paying underlyings)

use num_traits::Float;

use super::error::AnalyticalError;
use skewlab_core::math::distributions::{norm_cdf, norm_pdf};
use skewlab_core::types::{OptionKind, OptionSpec, PricingResult};

/// Black-Scholes-Merton model for European option pricing.
///
/// Provides closed-form prices and vega under lognormal dynamics with a
/// constant continuous dividend yield.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use skewlab_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model with zero dividend yield.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::DegenerateInput` if spot <= 0 or volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use skewlab_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        Self::with_dividend_yield(spot, rate, volatility, T::zero())
    }

    /// Creates a new Black-Scholes model with an explicit dividend yield.
    ///
    /// # Errors
    /// - `AnalyticalError::DegenerateInput` if spot <= 0 or volatility <= 0
    pub fn with_dividend_yield(
        spot: T,
        rate: T,
        volatility: T,
        dividend_yield: T,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::DegenerateInput {
                name: "spot",
                value: spot.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::DegenerateInput {
                name: "volatility",
                value: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
            dividend_yield,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// # Returns
    /// The d1 term. Returns large positive/negative values for limiting cases.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap();
        let epsilon = T::from(1e-10).unwrap();

        // Handle expiry ≈ 0 case
        if expiry <= epsilon {
            // At expiry, if S > K, d1 → +∞, otherwise d1 → -∞
            let large = T::from(100.0).unwrap();
            if self.spot > strike {
                return large;
            } else if self.spot < strike {
                return -large;
            } else {
                return zero;
            }
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend_yield + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        let sqrt_t = expiry.sqrt();
        self.d1(strike, expiry) - self.volatility * sqrt_t
    }

    /// Computes European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use skewlab_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!(bs.price_call(100.0, 1.0) > 0.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        // Handle expiry = 0: return intrinsic value
        if expiry <= epsilon {
            let intrinsic = self.spot - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();
        let carry = (-self.dividend_yield * expiry).exp();

        self.spot * carry * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap();

        // Handle expiry = 0: return intrinsic value
        if expiry <= epsilon {
            let intrinsic = strike - self.spot;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();
        let carry = (-self.dividend_yield * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * carry * norm_cdf(-d1)
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·e^(-qT)·√T·φ(d₁)
    ///
    /// Vega is the same for both calls and puts.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap();

        if expiry <= epsilon {
            return T::zero();
        }

        let d1 = self.d1(strike, expiry);
        let sqrt_t = expiry.sqrt();
        let carry = (-self.dividend_yield * expiry).exp();

        self.spot * carry * sqrt_t * norm_pdf(d1)
    }
}

impl BlackScholes<f64> {
    /// Builds the model from a validated contract.
    ///
    /// # Errors
    /// - `AnalyticalError::DegenerateInput` for vol <= 0 or expiry <= 0
    ///   (reachable when a spec is re-parameterised downstream)
    pub fn from_spec(spec: &OptionSpec) -> Result<Self, AnalyticalError> {
        if spec.expiry() <= 0.0 {
            return Err(AnalyticalError::DegenerateInput {
                name: "expiry",
                value: spec.expiry(),
            });
        }
        Self::with_dividend_yield(
            spec.spot(),
            spec.rate(),
            spec.volatility(),
            spec.dividend_yield(),
        )
    }

    /// Prices a contract and reports its vega in one pass.
    ///
    /// # Errors
    /// - `AnalyticalError::DegenerateInput` as for [`from_spec`]
    /// - `AnalyticalError::NumericalInstability` when the formulas evaluate
    ///   non-finite
    ///
    /// # Examples
    /// ```
    /// use skewlab_core::types::{OptionKind, OptionSpec};
    /// use skewlab_models::analytical::BlackScholes;
    ///
    /// let spec = OptionSpec::builder()
    ///     .spot(100.0)
    ///     .strike(100.0)
    ///     .expiry(1.0)
    ///     .volatility(0.2)
    ///     .rate(0.05)
    ///     .kind(OptionKind::Call)
    ///     .build()
    ///     .unwrap();
    ///
    /// let result = BlackScholes::price(&spec).unwrap();
    /// assert!((result.price - 10.4506).abs() < 1e-3);
    /// ```
    ///
    /// [`from_spec`]: BlackScholes::from_spec
    pub fn price(spec: &OptionSpec) -> Result<PricingResult, AnalyticalError> {
        let bs = Self::from_spec(spec)?;
        let price = match spec.kind() {
            OptionKind::Call => bs.price_call(spec.strike(), spec.expiry()),
            OptionKind::Put => bs.price_put(spec.strike(), spec.expiry()),
        };
        let vega = bs.vega(spec.strike(), spec.expiry());

        if !price.is_finite() || !vega.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "non-finite output for strike {} expiry {}",
                    spec.strike(),
                    spec.expiry()
                ),
            });
        }

        Ok(PricingResult {
            price,
            vega: Some(vega),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn spec(
        spot: f64,
        strike: f64,
        expiry: f64,
        volatility: f64,
        rate: f64,
        kind: OptionKind,
    ) -> OptionSpec {
        OptionSpec::builder()
            .spot(spot)
            .strike(strike)
            .expiry(expiry)
            .volatility(volatility)
            .rate(rate)
            .kind(kind)
            .build()
            .unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.volatility(), 0.2);
        assert_eq!(bs.dividend_yield(), 0.0);
    }

    #[test]
    fn test_new_invalid_spot() {
        let result = BlackScholes::new(-100.0_f64, 0.05, 0.2);
        match result.unwrap_err() {
            AnalyticalError::DegenerateInput { name, value } => {
                assert_eq!(name, "spot");
                assert_eq!(value, -100.0);
            }
            _ => panic!("Expected DegenerateInput error"),
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        let result = BlackScholes::new(100.0_f64, 0.05, 0.0);
        match result.unwrap_err() {
            AnalyticalError::DegenerateInput { name, .. } => {
                assert_eq!(name, "volatility");
            }
            _ => panic!("Expected DegenerateInput error"),
        }
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        assert!(BlackScholes::new(100.0_f64, -0.02, 0.2).is_ok());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0_f64, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let d1 = bs.d1(105.0, 0.5);
        let d2 = bs.d2(105.0, 0.5);
        assert_relative_eq!(d2, d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_d1_dividend_yield_shifts_drift() {
        let flat = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let carry = BlackScholes::with_dividend_yield(100.0_f64, 0.05, 0.2, 0.02).unwrap();
        // q reduces the drift, so d1 moves down
        assert!(carry.d1(100.0, 1.0) < flat.d1(100.0, 1.0));
        assert_relative_eq!(
            flat.d1(100.0, 1.0) - carry.d1(100.0, 1.0),
            0.02 / 0.2,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_d1_expiry_zero_limits() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.d1(100.0, 0.0) > 50.0);
        assert!(bs.d1(120.0, 0.0) < -50.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(
            bs.price_call(100.0, 1.0),
            10.450583572185565,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_put_price_reference_value() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.573526022256971, epsilon = 1e-9);
    }

    #[test]
    fn test_otm_call_reference_value() {
        // S=100, K=120, r=0.03, σ=0.25, T=0.5
        let bs = BlackScholes::new(100.0_f64, 0.03, 0.25).unwrap();
        assert_relative_eq!(
            bs.price_call(120.0, 0.5),
            1.7669064602105493,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_otm_put_reference_value() {
        // S=100, K=80, r=0.03, σ=0.25, T=0.5
        let bs = BlackScholes::new(100.0_f64, 0.03, 0.25).unwrap();
        assert_relative_eq!(bs.price_put(80.0, 0.5), 0.6440319622431172, epsilon = 1e-9);
    }

    #[test]
    fn test_dividend_yield_reference_values() {
        // S=100, K=100, r=0.05, σ=0.2, T=1, q=0.02
        let bs = BlackScholes::with_dividend_yield(100.0_f64, 0.05, 0.2, 0.02).unwrap();
        assert_relative_eq!(
            bs.price_call(100.0, 1.0),
            9.227005508154036,
            epsilon = 1e-9
        );
        assert_relative_eq!(bs.price_put(100.0, 1.0), 6.330080627549918, epsilon = 1e-9);
    }

    #[test]
    fn test_price_expiry_zero_is_intrinsic() {
        let bs = BlackScholes::new(110.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 0.0), 10.0, epsilon = 1e-10);
        assert_relative_eq!(bs.price_put(100.0, 0.0), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_deep_itm_call_above_forward_intrinsic() {
        let bs = BlackScholes::new(200.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0);
        let intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let bs = BlackScholes::new(50.0_f64, 0.05, 0.2).unwrap();
        assert!(bs.price_call(100.0, 1.0) < 0.01);
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K*exp(-rT)
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let call = bs.price_call(100.0, 1.0);
        let put = bs.price_put(100.0, 1.0);
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity_with_dividend_yield() {
        // C - P = S*exp(-qT) - K*exp(-rT)
        let bs = BlackScholes::with_dividend_yield(100.0_f64, 0.05, 0.2, 0.02).unwrap();
        let call = bs.price_call(110.0, 1.0);
        let put = bs.price_put(110.0, 1.0);
        let forward = 100.0 * (-0.02_f64).exp() - 110.0 * (-0.05_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 10.0_f64..500.0,
            strike in 10.0_f64..500.0,
            expiry in 0.01_f64..3.0,
            volatility in 0.05_f64..1.5,
            rate in -0.02_f64..0.10,
        ) {
            let bs = BlackScholes::new(spot, rate, volatility).unwrap();
            let call = bs.price_call(strike, expiry);
            let put = bs.price_put(strike, expiry);
            let forward = spot - strike * (-rate * expiry).exp();
            prop_assert!((call - put - forward).abs() < 1e-6);
        }

        #[test]
        fn prop_vega_non_negative(
            spot in 10.0_f64..500.0,
            strike in 10.0_f64..500.0,
            expiry in 0.01_f64..3.0,
            volatility in 0.05_f64..1.5,
        ) {
            let bs = BlackScholes::new(spot, 0.03, volatility).unwrap();
            prop_assert!(bs.vega(strike, expiry) >= 0.0);
        }
    }

    // ==========================================================
    // Vega Tests
    // ==========================================================

    #[test]
    fn test_vega_reference_value() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.vega(100.0, 1.0), 37.52403469169379, epsilon = 1e-9);
    }

    #[test]
    fn test_vega_identical_for_call_and_put() {
        // Vega comes from d1 only, independent of the payoff side; verify
        // against central finite differences on both prices
        let h = 0.001;
        let bs_up = BlackScholes::new(100.0_f64, 0.05, 0.2 + h).unwrap();
        let bs_dn = BlackScholes::new(100.0_f64, 0.05, 0.2 - h).unwrap();
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

        let fd_call = (bs_up.price_call(100.0, 1.0) - bs_dn.price_call(100.0, 1.0)) / (2.0 * h);
        let fd_put = (bs_up.price_put(100.0, 1.0) - bs_dn.price_put(100.0, 1.0)) / (2.0 * h);
        let analytical = bs.vega(100.0, 1.0);

        assert_relative_eq!(analytical, fd_call, epsilon = 1e-3);
        assert_relative_eq!(analytical, fd_put, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_zero_at_expiry() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.vega(100.0, 0.0), 0.0);
    }

    // ==========================================================
    // Spec-driven Entry Point Tests
    // ==========================================================

    #[test]
    fn test_price_spec_call() {
        let s = spec(100.0, 100.0, 1.0, 0.2, 0.05, OptionKind::Call);
        let result = BlackScholes::price(&s).unwrap();
        assert_relative_eq!(result.price, 10.450583572185565, epsilon = 1e-9);
        assert_relative_eq!(result.vega.unwrap(), 37.52403469169379, epsilon = 1e-9);
    }

    #[test]
    fn test_price_spec_put() {
        let s = spec(100.0, 100.0, 1.0, 0.2, 0.05, OptionKind::Put);
        let result = BlackScholes::price(&s).unwrap();
        assert_relative_eq!(result.price, 5.573526022256971, epsilon = 1e-9);
    }

    #[test]
    fn test_price_spec_degenerate_volatility() {
        let s = spec(100.0, 100.0, 1.0, 0.2, 0.05, OptionKind::Call);
        let degenerate = s.with_volatility(0.5).unwrap();
        // Re-parameterising through the accessor keeps validation; build a
        // model directly to hit the degenerate path
        assert!(BlackScholes::price(&degenerate).is_ok());
        assert!(BlackScholes::new(100.0_f64, 0.05, -0.1).is_err());
    }

    // ==========================================================
    // f32 Compatibility Tests
    // ==========================================================

    #[test]
    fn test_f32_compatibility() {
        let bs = BlackScholes::new(100.0_f32, 0.05_f32, 0.2_f32).unwrap();
        assert!(bs.price_call(100.0_f32, 1.0_f32) > 0.0_f32);
    }
}
