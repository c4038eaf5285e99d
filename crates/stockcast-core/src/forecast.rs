//! Trend forecasting.
//!
//! Fits an ordinary least-squares line against observation position and
//! extrapolates it a fixed number of calendar days forward. This is the
//! only numerical algorithm in the repository: a single bounded pass over
//! at most one lookback window's worth of points, no state, no retries.

use crate::error::PipelineError;
use crate::{ForecastPoint, Series, TradingDay};

/// Number of future calendar days projected per forecast call.
pub const DEFAULT_HORIZON_DAYS: usize = 10;

/// Closed-form least-squares line `price ≈ slope * index + intercept`.
///
/// The independent variable is the zero-based position of each observation
/// in the series, not its calendar date; weekends and holidays therefore
/// cost nothing in the fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Fit the trend over `(i, points[i].price)` samples.
    ///
    /// A single observation degenerates to a constant line (slope zero);
    /// an empty series has no defined fit and fails explicitly rather
    /// than fabricating one.
    pub fn fit(series: &Series) -> Result<Self, PipelineError> {
        let n = series.len();
        if n == 0 {
            return Err(PipelineError::InsufficientData);
        }
        if n == 1 {
            return Ok(Self {
                slope: 0.0,
                intercept: series.points[0].price,
            });
        }

        let count = n as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for (index, point) in series.points.iter().enumerate() {
            let x = index as f64;
            sum_x += x;
            sum_y += point.price;
            sum_xy += x * point.price;
            sum_xx += x * x;
        }

        let slope = (count * sum_xy - sum_x * sum_y) / (count * sum_xx - sum_x * sum_x);
        let intercept = (sum_y - slope * sum_x) / count;

        Ok(Self { slope, intercept })
    }

    /// Evaluate the fitted line at a given observation index.
    pub fn predict_at(&self, index: usize) -> f64 {
        self.slope * index as f64 + self.intercept
    }
}

/// Project `horizon_days` future closes starting at `start_day`.
///
/// The fitted line is evaluated at positions `n..n + horizon_days` and the
/// date axis runs over consecutive calendar days from `start_day`. The
/// caller injects the start day (normally today on the wall clock), which
/// keeps this computation deterministic under test.
pub fn forecast(
    series: &Series,
    horizon_days: usize,
    start_day: TradingDay,
) -> Result<Vec<ForecastPoint>, PipelineError> {
    if horizon_days == 0 {
        return Err(PipelineError::InvalidHorizon);
    }

    let trend = LinearTrend::fit(series)?;
    let n = series.len();

    let mut points = Vec::with_capacity(horizon_days);
    for j in 0..horizon_days {
        let predicted = trend.predict_at(n + j);
        // Extreme but valid prices can overflow the fit sums to inf/NaN.
        let point = ForecastPoint::new(start_day.plus_days(j), predicted)
            .map_err(|_| PipelineError::NonFiniteProjection { position: n + j })?;
        points.push(point);
    }

    Ok(points)
}
