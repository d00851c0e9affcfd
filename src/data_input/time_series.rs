// src/data_input/time_series.rs

use ndarray::Array1;

use crate::error::{ensure_len, Result};

/// One logged trajectory stored column-wise: time (s), x, y and heading (rad).
/// Samples keep file order; `time` is assumed non-decreasing but not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    pub time: Array1<f64>,
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub heading: Array1<f64>,
}

impl TimeSeries {
    /// Builds a series from parallel columns, failing if their lengths differ.
    pub fn new(
        time: Array1<f64>,
        x: Array1<f64>,
        y: Array1<f64>,
        heading: Array1<f64>,
    ) -> Result<Self> {
        let n = time.len();
        ensure_len("time series x column", n, x.len())?;
        ensure_len("time series y column", n, y.len())?;
        ensure_len("time series heading column", n, heading.len())?;
        Ok(Self { time, x, y, heading })
    }

    /// Builds a series from `(t, x, y, heading)` rows.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[[f64; 4]]) -> Self {
        Self {
            time: rows.iter().map(|r| r[0]).collect(),
            x: rows.iter().map(|r| r[1]).collect(),
            y: rows.iter().map(|r| r[2]).collect(),
            heading: rows.iter().map(|r| r[3]).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// First and last timestamps, if any.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.time.first()?, *self.time.last()?))
    }

    /// `(t, value)` pairs for plotting one column against time.
    pub fn points(&self, column: &Array1<f64>) -> Vec<(f64, f64)> {
        self.time.iter().copied().zip(column.iter().copied()).collect()
    }

    /// `(x, y)` pairs for the spatial plot.
    pub fn xy_points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_rows_keeps_order() {
        let series = TimeSeries::from_rows(&[[0.0, 1.0, 2.0, 0.1], [0.5, 3.0, 4.0, 0.2]]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.time, array![0.0, 0.5]);
        assert_eq!(series.x, array![1.0, 3.0]);
        assert_eq!(series.y, array![2.0, 4.0]);
        assert_eq!(series.heading, array![0.1, 0.2]);
        assert_eq!(series.time_span(), Some((0.0, 0.5)));
    }

    #[test]
    fn test_new_keeps_columns() {
        let series = TimeSeries::new(array![0.0, 1.0], array![2.0, 3.0], array![4.0, 5.0], array![0.1, 0.2]).unwrap();
        assert_eq!(series, TimeSeries::from_rows(&[[0.0, 2.0, 4.0, 0.1], [1.0, 3.0, 5.0, 0.2]]));
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let result = TimeSeries::new(array![0.0, 1.0], array![0.0, 1.0], array![0.0], array![0.0, 0.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_series_has_no_span() {
        let series = TimeSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.time_span(), None);
    }
}

// src/data_input/time_series.rs
