//! Sparse implied-volatility surface over expirations and strikes.

use super::error::SurfaceError;
use super::smile::FittedSmile;
use crate::math::Polynomial;
use chrono::NaiveDate;

/// One observed implied volatility on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolSurfacePoint {
    /// Expiration date of the observation.
    pub expiration: NaiveDate,
    /// Strike price in currency.
    pub strike: f64,
    /// Implied volatility as a decimal (0.80 = 80%).
    pub implied_vol: f64,
}

/// Implied-volatility surface built from chain observations.
///
/// Rows are distinct expirations in chronological order; columns are distinct
/// strikes in ascending order. The grid is sparse: a listed strike need not
/// trade on every expiration, so cells are `Option<f64>`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use skewlab_core::market_data::{VolSurface, VolSurfacePoint};
///
/// let june = NaiveDate::from_ymd_opt(2021, 6, 25).unwrap();
/// let points = [
///     VolSurfacePoint { expiration: june, strike: 30_000.0, implied_vol: 0.95 },
///     VolSurfacePoint { expiration: june, strike: 40_000.0, implied_vol: 0.78 },
/// ];
/// let surface = VolSurface::from_points(&points);
/// assert_eq!(surface.volatility(june, 40_000.0), Some(0.78));
/// assert_eq!(surface.volatility(june, 50_000.0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VolSurface {
    /// Distinct expirations, chronological.
    expirations: Vec<NaiveDate>,
    /// Distinct strikes, ascending.
    strikes: Vec<f64>,
    /// `cells[expiration_idx][strike_idx]`, sparse.
    cells: Vec<Vec<Option<f64>>>,
}

impl VolSurface {
    /// Builds the surface from observed points.
    ///
    /// Axes are derived from the points themselves. When the same
    /// (expiration, strike) pair appears more than once, the last
    /// observation wins.
    pub fn from_points(points: &[VolSurfacePoint]) -> Self {
        let mut expirations: Vec<NaiveDate> = points.iter().map(|p| p.expiration).collect();
        expirations.sort();
        expirations.dedup();

        let mut strikes: Vec<f64> = points.iter().map(|p| p.strike).collect();
        strikes.sort_by(f64::total_cmp);
        strikes.dedup();

        let mut cells = vec![vec![None; strikes.len()]; expirations.len()];
        for point in points {
            // Both axes were built from the points, lookups cannot miss.
            let row = expirations
                .binary_search(&point.expiration)
                .unwrap_or(usize::MAX);
            let col = strikes
                .binary_search_by(|k| k.total_cmp(&point.strike))
                .unwrap_or(usize::MAX);
            if let Some(cell) = cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = Some(point.implied_vol);
            }
        }

        Self {
            expirations,
            strikes,
            cells,
        }
    }

    /// Distinct expirations in chronological order.
    #[inline]
    pub fn expirations(&self) -> &[NaiveDate] {
        &self.expirations
    }

    /// Distinct strikes in ascending order.
    #[inline]
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Whether the surface holds no observations at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.expirations.is_empty()
    }

    /// Exact-lookup of a single cell; `None` when the cell is unquoted or
    /// either coordinate is off-grid.
    pub fn volatility(&self, expiration: NaiveDate, strike: f64) -> Option<f64> {
        let row = self.expirations.binary_search(&expiration).ok()?;
        let col = self
            .strikes
            .binary_search_by(|k| k.total_cmp(&strike))
            .ok()?;
        self.cells[row][col]
    }

    /// The sparse row for one expiration, aligned with [`strikes`].
    ///
    /// # Errors
    /// `SurfaceError::UnknownExpiration` when the expiration has no row.
    ///
    /// [`strikes`]: VolSurface::strikes
    pub fn row(&self, expiration: NaiveDate) -> Result<&[Option<f64>], SurfaceError> {
        let idx = self
            .expirations
            .binary_search(&expiration)
            .map_err(|_| SurfaceError::UnknownExpiration { expiration })?;
        Ok(&self.cells[idx])
    }

    /// The quoted (strike, vol) pairs of one expiration, ascending by strike.
    ///
    /// # Errors
    /// - `SurfaceError::UnknownExpiration` when the expiration has no row
    /// - `SurfaceError::NoPoints` when the row exists but every cell is empty
    pub fn smile_points(&self, expiration: NaiveDate) -> Result<Vec<(f64, f64)>, SurfaceError> {
        let row = self.row(expiration)?;
        let points: Vec<(f64, f64)> = self
            .strikes
            .iter()
            .zip(row.iter())
            .filter_map(|(&k, v)| v.map(|vol| (k, vol)))
            .collect();
        if points.is_empty() {
            return Err(SurfaceError::NoPoints { expiration });
        }
        Ok(points)
    }

    /// Fits the degree-3 smile polynomial for one expiration.
    ///
    /// # Errors
    /// - `SurfaceError::UnknownExpiration` / `SurfaceError::NoPoints` as for
    ///   [`smile_points`]
    /// - `SurfaceError::InsufficientPoints` with fewer than 4 distinct strikes
    /// - `SurfaceError::IllConditioned` when the fit degenerates
    ///
    /// [`smile_points`]: VolSurface::smile_points
    pub fn fit_smile(&self, expiration: NaiveDate) -> Result<FittedSmile, SurfaceError> {
        let points = self.smile_points(expiration)?;
        let xs: Vec<f64> = points.iter().map(|&(k, _)| k).collect();
        let ys: Vec<f64> = points.iter().map(|&(_, v)| v).collect();

        let poly = Polynomial::fit(&xs, &ys)?;

        // Points are sorted ascending, so the range is the first/last strike.
        let strike_min = xs[0];
        let strike_max = xs[xs.len() - 1];
        if !poly.value(strike_min).is_finite() || !poly.value(strike_max).is_finite() {
            return Err(SurfaceError::IllConditioned(
                "fitted smile evaluates non-finite inside its range".to_string(),
            ));
        }

        Ok(FittedSmile::new(expiration, poly, strike_min, strike_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(expiration: NaiveDate, strike: f64, implied_vol: f64) -> VolSurfacePoint {
        VolSurfacePoint {
            expiration,
            strike,
            implied_vol,
        }
    }

    fn sample_surface() -> VolSurface {
        let june = date(2021, 6, 25);
        let sept = date(2021, 9, 24);
        VolSurface::from_points(&[
            point(june, 30_000.0, 0.95),
            point(june, 35_000.0, 0.84),
            point(june, 40_000.0, 0.78),
            point(june, 45_000.0, 0.80),
            point(june, 50_000.0, 0.88),
            point(sept, 40_000.0, 0.82),
            point(sept, 50_000.0, 0.86),
        ])
    }

    #[test]
    fn test_axes_ordering() {
        // Points arrive shuffled; axes come out sorted
        let june = date(2021, 6, 25);
        let sept = date(2021, 9, 24);
        let surface = VolSurface::from_points(&[
            point(sept, 50_000.0, 0.86),
            point(june, 30_000.0, 0.95),
            point(june, 50_000.0, 0.88),
        ]);
        assert_eq!(surface.expirations(), &[june, sept]);
        assert_eq!(surface.strikes(), &[30_000.0, 50_000.0]);
    }

    #[test]
    fn test_sparse_cells() {
        let surface = sample_surface();
        let sept = date(2021, 9, 24);

        assert_eq!(surface.volatility(sept, 40_000.0), Some(0.82));
        // Strike listed on the June row but never quoted for September
        assert_eq!(surface.volatility(sept, 30_000.0), None);
        // Off-grid coordinates
        assert_eq!(surface.volatility(sept, 41_000.0), None);
        assert_eq!(surface.volatility(date(2022, 1, 1), 40_000.0), None);
    }

    #[test]
    fn test_duplicate_point_keeps_last() {
        let june = date(2021, 6, 25);
        let surface = VolSurface::from_points(&[
            point(june, 40_000.0, 0.70),
            point(june, 40_000.0, 0.78),
        ]);
        assert_eq!(surface.volatility(june, 40_000.0), Some(0.78));
    }

    #[test]
    fn test_empty_surface() {
        let surface = VolSurface::from_points(&[]);
        assert!(surface.is_empty());
        assert_eq!(surface.strikes().len(), 0);
        assert!(matches!(
            surface.row(date(2021, 6, 25)),
            Err(SurfaceError::UnknownExpiration { .. })
        ));
    }

    #[test]
    fn test_smile_points_sorted() {
        let surface = sample_surface();
        let points = surface.smile_points(date(2021, 6, 25)).unwrap();
        assert_eq!(points.len(), 5);
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_fit_smile_passes_through_data() {
        let surface = sample_surface();
        let smile = surface.fit_smile(date(2021, 6, 25)).unwrap();

        assert_eq!(smile.strike_range(), (30_000.0, 50_000.0));
        // Degree-3 over 5 points is a least-squares fit, not interpolation;
        // it should still sit close to this smooth smile
        assert!((smile.volatility(40_000.0) - 0.78).abs() < 0.02);
        assert!((smile.volatility(50_000.0) - 0.88).abs() < 0.02);
        // Evaluation between listed strikes is the whole point
        assert!(smile.volatility(42_500.0).is_finite());
    }

    #[test]
    fn test_fit_smile_insufficient_points() {
        let surface = sample_surface();
        // September row has only 2 quoted strikes
        let result = surface.fit_smile(date(2021, 9, 24));
        assert_eq!(
            result.unwrap_err(),
            SurfaceError::InsufficientPoints { got: 2, need: 4 }
        );
    }

    #[test]
    fn test_fit_smile_unknown_expiration() {
        let surface = sample_surface();
        let result = surface.fit_smile(date(2022, 3, 25));
        assert!(matches!(
            result,
            Err(SurfaceError::UnknownExpiration { .. })
        ));
    }
}
