// src/data_analysis/tracking_error.rs

use ndarray::{Array1, ArrayView1, Zip};
use ndarray_stats::QuantileExt;

use crate::data_analysis::frame_transform::DerivedTrajectory;
use crate::data_input::time_series::TimeSeries;
use crate::error::{ensure_len, AnalysisError, Result};

/// Piecewise-linear interpolation of `(xs, ys)` at every target.
///
/// Targets before `xs[0]` take `ys[0]`, targets after the last sample take the
/// last value. A target equal to a sample time returns that sample exactly;
/// with repeated times the right-most sample wins. `xs` must be sorted
/// ascending, which is not checked.
pub fn interp(
    targets: ArrayView1<f64>,
    xs: ArrayView1<f64>,
    ys: ArrayView1<f64>,
) -> Result<Array1<f64>> {
    let n = xs.len();
    ensure_len("interpolation source", n, ys.len())?;
    if n == 0 {
        return Err(AnalysisError::EmptySeries("interpolation source"));
    }

    Ok(targets.mapv(|t| {
        if t.is_nan() {
            return f64::NAN;
        }
        // Number of samples with xs[i] <= t.
        let (mut lo, mut hi) = (0usize, n);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if xs[mid] <= t {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if lo == 0 {
            return ys[0];
        }
        if lo == n {
            return ys[n - 1];
        }
        let j = lo - 1;
        let (x0, x1) = (xs[j], xs[j + 1]);
        if t == x0 {
            return ys[j];
        }
        let slope = (ys[j + 1] - ys[j]) / (x1 - x0);
        ys[j] + slope * (t - x0)
    }))
}

/// Tracking error on the reference time base: `reference - interpolated equivalent point`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorSeries {
    pub time: Array1<f64>,
    pub ex: Array1<f64>,
    pub ey: Array1<f64>,
}

impl ErrorSeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Resamples the derived trajectory onto `reference.time` and subtracts it from the reference.
pub fn compute_tracking_error(
    derived: &DerivedTrajectory,
    reference: &TimeSeries,
) -> Result<ErrorSeries> {
    if derived.is_empty() {
        return Err(AnalysisError::EmptySeries("equivalent point trajectory"));
    }
    ensure_len("reference x column", reference.time.len(), reference.x.len())?;
    ensure_len("reference y column", reference.time.len(), reference.y.len())?;

    let x_interp = interp(reference.time.view(), derived.time.view(), derived.x_e.view())?;
    let y_interp = interp(reference.time.view(), derived.time.view(), derived.y_e.view())?;

    Ok(ErrorSeries {
        time: reference.time.clone(),
        ex: &reference.x - &x_interp,
        ey: &reference.y - &y_interp,
    })
}

/// Summary of a tracking error series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackingErrorStats {
    pub samples: usize,
    pub rms_x: f64,
    pub rms_y: f64,
    pub max_abs_x: f64,
    pub max_abs_y: f64,
    /// Mean of `sqrt(ex^2 + ey^2)`.
    pub mean_distance: f64,
}

impl TrackingErrorStats {
    /// Returns `None` for an empty series. NaN samples make the maxima NaN.
    pub fn from_errors(errors: &ErrorSeries) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        let distance = Zip::from(&errors.ex)
            .and(&errors.ey)
            .map_collect(|&ex, &ey| ex.hypot(ey));

        Some(Self {
            samples: errors.len(),
            rms_x: rms(&errors.ex)?,
            rms_y: rms(&errors.ey)?,
            max_abs_x: max_abs(&errors.ex),
            max_abs_y: max_abs(&errors.ey),
            mean_distance: distance.mean()?,
        })
    }
}

fn rms(values: &Array1<f64>) -> Option<f64> {
    values.mapv(|v| v * v).mean().map(f64::sqrt)
}

fn max_abs(values: &Array1<f64>) -> f64 {
    values
        .mapv(f64::abs)
        .max()
        .map(|v| *v)
        .unwrap_or(f64::NAN)
}


// src/data_analysis/tracking_error.rs
