//! Summary statistics over realised payoffs.

/// Two-sided 95% confidence multiplier.
const CONFIDENCE_95: f64 = 1.96;

/// Summary statistics of a payoff sample.
///
/// The standard deviation is the population form (divide by n, not n-1)
/// over the kept payoffs alone. The standard error divides by the square
/// root of the *total* simulation count, not the kept count: paths whose
/// payoff was filtered out still ran and still inform the precision of
/// the estimate. The range is the 95% confidence interval of the mean.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffSummary {
    /// Number of payoffs in the sample.
    pub count: usize,
    /// Total number of simulated paths the sample was drawn from.
    pub sims: usize,
    /// Sample mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Standard error of the mean (std_dev / √sims).
    pub std_error: f64,
    /// 95% confidence interval of the mean.
    pub range: (f64, f64),
}

impl PayoffSummary {
    /// Summarises a payoff sample drawn from `sims` simulated paths.
    ///
    /// An empty sample yields all zeros (the sim count is still recorded).
    pub fn from_payoffs(payoffs: &[f64], sims: usize) -> Self {
        let count = payoffs.len();
        if count == 0 {
            return Self {
                count: 0,
                sims,
                mean: 0.0,
                std_dev: 0.0,
                std_error: 0.0,
                range: (0.0, 0.0),
            };
        }

        let n = count as f64;
        let mean = payoffs.iter().sum::<f64>() / n;
        let variance = payoffs.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        let std_error = std_dev / (sims.max(1) as f64).sqrt();
        let half_width = CONFIDENCE_95 * std_error;

        Self {
            count,
            sims,
            mean,
            std_dev,
            std_error,
            range: (mean - half_width, mean + half_width),
        }
    }
}
