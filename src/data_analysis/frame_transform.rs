// src/data_analysis/frame_transform.rs

use ndarray::{Array1, ArrayView1, Zip};

use crate::data_input::time_series::TimeSeries;
use crate::error::{ensure_len, Result};

/// Fixed offset of the control point in the vehicle body frame (m).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyOffset {
    pub x: f64,
    pub y: f64,
}

impl BodyOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// World-frame trajectory of the equivalent point, sampled on the source series' time base.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedTrajectory {
    pub time: Array1<f64>,
    pub x_e: Array1<f64>,
    pub y_e: Array1<f64>,
    pub heading_e: Array1<f64>,
}

impl DerivedTrajectory {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn xy_points(&self) -> Vec<(f64, f64)> {
        self.x_e.iter().copied().zip(self.y_e.iter().copied()).collect()
    }
}

/// Maps a body-frame offset into the world frame for one pose.
///
/// `(x, y) + R(heading) * (offset.x, offset.y)`, with `R` the planar rotation.
/// NaN or infinite inputs propagate to the output.
#[inline]
pub fn body_to_world(x: f64, y: f64, heading: f64, offset: BodyOffset) -> (f64, f64) {
    let (sin_h, cos_h) = heading.sin_cos();
    (
        x + cos_h * offset.x - sin_h * offset.y,
        y + sin_h * offset.x + cos_h * offset.y,
    )
}

/// Column-wise `body_to_world` over parallel pose columns.
pub fn equivalent_point_columns(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    heading: ArrayView1<f64>,
    offset: BodyOffset,
) -> Result<(Array1<f64>, Array1<f64>)> {
    let n = x.len();
    ensure_len("frame transform y column", n, y.len())?;
    ensure_len("frame transform heading column", n, heading.len())?;

    let mut x_e = Array1::<f64>::zeros(n);
    let mut y_e = Array1::<f64>::zeros(n);
    Zip::from(&mut x_e)
        .and(&mut y_e)
        .and(&x)
        .and(&y)
        .and(&heading)
        .for_each(|xe, ye, &xi, &yi, &hi| {
            let (wx, wy) = body_to_world(xi, yi, hi, offset);
            *xe = wx;
            *ye = wy;
        });
    Ok((x_e, y_e))
}

/// Computes the equivalent-point trajectory of a logged pose series.
/// The heading of the equivalent point is the vehicle heading.
pub fn compute_equivalent_point(series: &TimeSeries, offset: BodyOffset) -> Result<DerivedTrajectory> {
    ensure_len("pose series", series.time.len(), series.x.len())?;
    let (x_e, y_e) =
        equivalent_point_columns(series.x.view(), series.y.view(), series.heading.view(), offset)?;
    Ok(DerivedTrajectory {
        time: series.time.clone(),
        x_e,
        y_e,
        heading_e: series.heading.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn sample_series() -> TimeSeries {
        TimeSeries::from_rows(&[
            [0.0, 1.0, 2.0, 0.0],
            [0.1, -3.0, 4.5, 0.7],
            [0.2, 10.0, -1.0, -2.1],
            [0.3, 0.0, 0.0, PI],
        ])
    }

    #[test]
    fn test_single_sample_example() {
        let series = TimeSeries::from_rows(&[[0.0, 1.0, 2.0, 0.0]]);
        let derived = compute_equivalent_point(&series, BodyOffset::new(1.0, 0.0)).unwrap();
        assert_eq!(derived.x_e, array![2.0]);
        assert_eq!(derived.y_e, array![2.0]);
        assert_eq!(derived.heading_e, array![0.0]);
        assert_eq!(derived.time, array![0.0]);
    }

    #[test]
    fn test_zero_offset_is_identity() {
        let series = sample_series();
        let derived = compute_equivalent_point(&series, BodyOffset::default()).unwrap();
        assert_eq!(derived.x_e, series.x);
        assert_eq!(derived.y_e, series.y);
        assert_eq!(derived.heading_e, series.heading);
    }

    #[test]
    fn test_zero_heading_adds_offset() {
        let series = TimeSeries::from_rows(&[[0.0, 3.0, -4.0, 0.0], [1.0, 0.25, 7.5, 0.0]]);
        let derived = compute_equivalent_point(&series, BodyOffset::new(0.4, -1.5)).unwrap();
        assert_eq!(derived.x_e, array![3.0 + 0.4, 0.25 + 0.4]);
        assert_eq!(derived.y_e, array![-4.0 - 1.5, 7.5 - 1.5]);
    }

    #[test]
    fn test_quarter_turn_rotates_offset() {
        let (ox, oy) = (0.8, 0.3);
        let (xe, ye) = body_to_world(5.0, -2.0, FRAC_PI_2, BodyOffset::new(ox, oy));
        assert_abs_diff_eq!(xe, 5.0 - oy, epsilon = 1e-12);
        assert_abs_diff_eq!(ye, -2.0 + ox, epsilon = 1e-12);
    }

    #[test]
    fn test_half_turn_negates_offset() {
        let (xe, ye) = body_to_world(0.0, 0.0, PI, BodyOffset::new(1.0, 2.0));
        assert_abs_diff_eq!(xe, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ye, -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_offset_distance_is_preserved() {
        let offset = BodyOffset::new(0.6, -0.8);
        let series = sample_series();
        let derived = compute_equivalent_point(&series, offset).unwrap();
        for i in 0..series.len() {
            let dx = derived.x_e[i] - series.x[i];
            let dy = derived.y_e[i] - series.y[i];
            assert_abs_diff_eq!((dx * dx + dy * dy).sqrt(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_nan_propagates() {
        let (xe, ye) = body_to_world(1.0, 1.0, f64::NAN, BodyOffset::new(1.0, 0.0));
        assert!(xe.is_nan());
        assert!(ye.is_nan());
    }

    #[test]
    fn test_length_mismatch_fails() {
        let x = array![0.0, 1.0];
        let y = array![0.0];
        let h = array![0.0, 0.0];
        let result = equivalent_point_columns(x.view(), y.view(), h.view(), BodyOffset::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_series() {
        let derived = compute_equivalent_point(&TimeSeries::default(), BodyOffset::new(1.0, 1.0)).unwrap();
        assert!(derived.is_empty());
    }
}

// src/data_analysis/frame_transform.rs
