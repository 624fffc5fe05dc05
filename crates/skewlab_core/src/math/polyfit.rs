//! Degree-3 polynomial least-squares fitting.
//!
//! Fits `y ≈ c₀ + c₁z + c₂z² + c₃z³` where `z` is the centred and scaled
//! abscissa. Centring/scaling keeps the normal equations well conditioned
//! even for raw strike abscissae in the tens of thousands; the transform is
//! stored with the coefficients so evaluation is transparent to the caller.

use thiserror::Error;

/// Polynomial degree used for smile fitting.
pub const FIT_DEGREE: usize = 3;

/// Minimum number of distinct abscissae required for a degree-3 fit.
pub const MIN_FIT_POINTS: usize = FIT_DEGREE + 1;

/// Errors raised by [`Polynomial::fit`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FitError {
    /// Fewer distinct abscissae than the degree requires.
    #[error("Insufficient points: got {got}, need {need}")]
    InsufficientPoints {
        /// Number of distinct abscissae supplied.
        got: usize,
        /// Minimum required.
        need: usize,
    },

    /// Abscissa and ordinate slices differ in length.
    #[error("Mismatched lengths: {xs} abscissae vs {ys} ordinates")]
    MismatchedLengths {
        /// Length of the abscissa slice.
        xs: usize,
        /// Length of the ordinate slice.
        ys: usize,
    },

    /// Inputs contained NaN/Inf, or the normal equations could not be
    /// solved to finite coefficients.
    #[error("Ill-conditioned fit: {0}")]
    IllConditioned(String),
}

/// A fitted degree-3 polynomial with its abscissa transform.
///
/// # Examples
///
/// ```
/// use skewlab_core::math::Polynomial;
///
/// // y = x² fitted exactly through 5 points
/// let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let ys = [1.0, 4.0, 9.0, 16.0, 25.0];
/// let poly = Polynomial::fit(&xs, &ys).unwrap();
/// assert!((poly.value(2.5) - 6.25).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    /// Coefficients in the scaled variable, ascending degree.
    coeffs: [f64; FIT_DEGREE + 1],
    /// Abscissa shift (mean of the fitted abscissae).
    shift: f64,
    /// Abscissa scale (standard deviation of the fitted abscissae).
    scale: f64,
}

impl Polynomial {
    /// Fits a degree-3 polynomial to `(xs, ys)` by least squares.
    ///
    /// With exactly four distinct abscissae the fit interpolates; with more
    /// it minimises the squared residual.
    ///
    /// # Errors
    /// - `FitError::MismatchedLengths` when slice lengths differ
    /// - `FitError::InsufficientPoints` when fewer than 4 distinct abscissae
    /// - `FitError::IllConditioned` on non-finite input or a degenerate
    ///   normal-equation system
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, FitError> {
        if xs.len() != ys.len() {
            return Err(FitError::MismatchedLengths {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(FitError::IllConditioned(
                "non-finite input point".to_string(),
            ));
        }

        let distinct = distinct_count(xs);
        if distinct < MIN_FIT_POINTS {
            return Err(FitError::InsufficientPoints {
                got: distinct,
                need: MIN_FIT_POINTS,
            });
        }

        let n = xs.len() as f64;
        let shift = xs.iter().sum::<f64>() / n;
        let variance = xs.iter().map(|x| (x - shift).powi(2)).sum::<f64>() / n;
        let scale = variance.sqrt();
        if scale <= 0.0 || !scale.is_finite() {
            return Err(FitError::IllConditioned(
                "degenerate abscissa spread".to_string(),
            ));
        }

        // Normal equations A·c = b over the scaled variable z = (x−shift)/scale.
        // A[i][j] = Σ z^(i+j), b[i] = Σ y·z^i.
        let mut moments = [0.0_f64; 2 * FIT_DEGREE + 1];
        let mut b = [0.0_f64; FIT_DEGREE + 1];
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            let z = (x - shift) / scale;
            let mut zk = 1.0;
            for (k, moment) in moments.iter_mut().enumerate() {
                *moment += zk;
                if k <= FIT_DEGREE {
                    b[k] += y * zk;
                }
                zk *= z;
            }
        }

        let mut a = [[0.0_f64; FIT_DEGREE + 1]; FIT_DEGREE + 1];
        for (i, row) in a.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = moments[i + j];
            }
        }

        let coeffs = solve_4x4(a, b)?;
        if coeffs.iter().any(|c| !c.is_finite()) {
            return Err(FitError::IllConditioned(
                "solver produced non-finite coefficients".to_string(),
            ));
        }

        Ok(Self {
            coeffs,
            shift,
            scale,
        })
    }

    /// Evaluates the fitted polynomial at `x`.
    #[inline]
    pub fn value(&self, x: f64) -> f64 {
        let z = (x - self.shift) / self.scale;
        // Horner over ascending coefficients
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * z + c)
    }

    /// Maximum absolute residual over the given points.
    pub fn max_residual(&self, xs: &[f64], ys: &[f64]) -> f64 {
        xs.iter()
            .zip(ys.iter())
            .map(|(&x, &y)| (self.value(x) - y).abs())
            .fold(0.0, f64::max)
    }
}

fn distinct_count(xs: &[f64]) -> usize {
    let mut sorted: Vec<f64> = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted.dedup();
    sorted.len()
}

/// Solves the 4x4 system via Gaussian elimination with partial pivoting.
fn solve_4x4(
    mut a: [[f64; FIT_DEGREE + 1]; FIT_DEGREE + 1],
    mut b: [f64; FIT_DEGREE + 1],
) -> Result<[f64; FIT_DEGREE + 1], FitError> {
    const N: usize = FIT_DEGREE + 1;

    for col in 0..N {
        // Pivot selection
        let mut pivot_row = col;
        for row in col + 1..N {
            if a[row][col].abs() > a[pivot_row][col].abs() {
                pivot_row = row;
            }
        }
        if a[pivot_row][col].abs() < 1e-12 {
            return Err(FitError::IllConditioned(format!(
                "singular normal equations at column {}",
                col
            )));
        }
        if pivot_row != col {
            a.swap(pivot_row, col);
            b.swap(pivot_row, col);
        }

        // Eliminate below
        for row in col + 1..N {
            let factor = a[row][col] / a[col][col];
            for k in col..N {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = [0.0_f64; N];
    for row in (0..N).rev() {
        let mut acc = b[row];
        for k in row + 1..N {
            acc -= a[row][k] * x[k];
        }
        x[row] = acc / a[row][row];
    }
    Ok(x)
}
