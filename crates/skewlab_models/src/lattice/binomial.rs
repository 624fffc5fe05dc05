//! Recombining binomial tree for European options.
//!
//! ## Cox-Ross-Rubinstein Parameterisation
//!
//! - u = e^(σ√Δt), d = 1/u
//! - a = e^(rΔt) (per-step growth)
//! - p = (a - d) / (u - d) (risk-neutral up probability)
//!
//! The forward pass grows each level by applying u and d to every node of
//! the previous level and merging nodes whose prices agree to the cent.
//! Merging is keyed on the rounded price but the *exact* price is what
//! propagates, so the rounding identifies recombining nodes without ever
//! compounding into the arithmetic. The backward pass discounts the
//! risk-neutral expectation level by level down to the root.

use std::collections::BTreeMap;

use super::error::LatticeError;
use skewlab_core::types::{OptionKind, OptionSpec};

/// Decimal places used to identify coinciding nodes.
pub const PRICE_DECIMALS: u32 = 2;

/// Integer key of a price at [`PRICE_DECIMALS`] resolution.
#[inline]
fn node_key(price: f64) -> i64 {
    let scale = 10_i64.pow(PRICE_DECIMALS) as f64;
    (price * scale).round() as i64
}

/// A recombining CRR binomial tree for one European contract.
///
/// # Examples
/// ```
/// use skewlab_core::types::OptionKind;
/// use skewlab_models::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call, 500).unwrap();
/// let price = tree.price().unwrap();
///
/// // Converges on the closed form as steps grow
/// assert!((price - 10.4506).abs() / 10.4506 < 0.005);
/// ```
#[derive(Debug, Clone)]
pub struct BinomialTree {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
    steps: usize,
    /// Step length in years (Δt = T/N)
    dt: f64,
    /// Up factor u = e^(σ√Δt)
    up: f64,
    /// Down factor d = 1/u
    down: f64,
    /// Risk-neutral up probability
    prob_up: f64,
}

impl BinomialTree {
    /// Creates a tree from raw market parameters.
    ///
    /// # Errors
    /// - `LatticeError::InvalidStepCount` if `steps` is zero
    /// - `LatticeError::DegenerateInput` for spot <= 0, volatility <= 0,
    ///   or expiry <= 0
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
        steps: usize,
    ) -> Result<Self, LatticeError> {
        if steps < 1 {
            return Err(LatticeError::InvalidStepCount { steps });
        }
        if spot <= 0.0 {
            return Err(LatticeError::DegenerateInput {
                name: "spot",
                value: spot,
            });
        }
        if volatility <= 0.0 {
            return Err(LatticeError::DegenerateInput {
                name: "volatility",
                value: volatility,
            });
        }
        if expiry <= 0.0 {
            return Err(LatticeError::DegenerateInput {
                name: "expiry",
                value: expiry,
            });
        }

        let dt = expiry / steps as f64;
        let up = (volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (rate * dt).exp();
        let prob_up = (growth - down) / (up - down);

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            kind,
            steps,
            dt,
            up,
            down,
            prob_up,
        })
    }

    /// Creates a tree from a validated contract.
    ///
    /// # Errors
    /// As for [`new`].
    ///
    /// [`new`]: BinomialTree::new
    pub fn from_spec(spec: &OptionSpec, steps: usize) -> Result<Self, LatticeError> {
        Self::new(
            spec.spot(),
            spec.strike(),
            spec.expiry(),
            spec.rate(),
            spec.volatility(),
            spec.kind(),
            steps,
        )
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Step length Δt in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up factor u.
    #[inline]
    pub fn up_factor(&self) -> f64 {
        self.up
    }

    /// Down factor d = 1/u.
    #[inline]
    pub fn down_factor(&self) -> f64 {
        self.down
    }

    /// Risk-neutral up probability p.
    #[inline]
    pub fn probability_up(&self) -> f64 {
        self.prob_up
    }

    /// The contract's expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// The contract's volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Builds the forward lattice of underlying prices.
    ///
    /// Level 0 is the spot alone; level i holds the distinct reachable
    /// prices after i steps, ascending. Distinctness is judged at
    /// [`PRICE_DECIMALS`] resolution while exact prices propagate.
    pub fn forward_lattice(&self) -> Vec<Vec<f64>> {
        let mut levels = Vec::with_capacity(self.steps + 1);
        let mut current = vec![self.spot];
        levels.push(current.clone());

        for _ in 0..self.steps {
            let mut merged: BTreeMap<i64, f64> = BTreeMap::new();
            for &price in &current {
                for factor in [self.down, self.up] {
                    let child = price * factor;
                    merged.entry(node_key(child)).or_insert(child);
                }
            }
            // BTreeMap iteration is key-ascending, which is price-ascending
            current = merged.into_values().collect();
            levels.push(current.clone());
        }

        levels
    }

    /// The forward lattice rounded to [`PRICE_DECIMALS`] for display.
    pub fn display_lattice(&self) -> Vec<Vec<f64>> {
        let scale = 10_f64.powi(PRICE_DECIMALS as i32);
        self.forward_lattice()
            .into_iter()
            .map(|level| {
                level
                    .into_iter()
                    .map(|p| (p * scale).round() / scale)
                    .collect()
            })
            .collect()
    }

    /// Prices the contract by backward induction.
    ///
    /// Terminal nodes take their intrinsic value; each earlier node takes
    /// the discounted risk-neutral expectation of its two children:
    ///
    /// V_j = (p·V'_(j+1) + (1-p)·V'_j) · e^(-rΔt)
    ///
    /// where V'_(j+1) is the up child and V'_j the down child of the j-th
    /// node in ascending price order.
    ///
    /// # Errors
    /// `LatticeError::Recombination` when rounding collisions have merged
    /// genuinely distinct nodes and broken the j/j+1 pairing.
    pub fn price(&self) -> Result<f64, LatticeError> {
        let levels = self.forward_lattice();

        let terminal = &levels[self.steps];
        let mut values: Vec<f64> = terminal
            .iter()
            .map(|&price| self.kind.intrinsic(price, self.strike))
            .collect();

        let discount = (-self.rate * self.dt).exp();

        for (level_idx, level) in levels[..self.steps].iter().enumerate().rev() {
            if values.len() != level.len() + 1 {
                return Err(LatticeError::Recombination {
                    level: level_idx + 1,
                    got: values.len(),
                    expected: level.len() + 1,
                });
            }
            values = (0..level.len())
                .map(|j| (self.prob_up * values[j + 1] + (1.0 - self.prob_up) * values[j]) * discount)
                .collect();
        }

        Ok(values[0])
    }
}
