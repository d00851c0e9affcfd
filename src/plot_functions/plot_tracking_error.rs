// src/plot_functions/plot_tracking_error.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_ERROR_X, COLOR_ERROR_Y, LINE_WIDTH_PLOT};
use crate::data_analysis::tracking_error::{ErrorSeries, TrackingErrorStats};
use crate::plot_framework::{draw_stacked_plot, PlotConfig, PlotSeries};

/// Generates the stacked ex / ey versus reference time plot.
/// RMS and peak error are added to the chart titles when available.
pub fn plot_tracking_error(
    errors: &ErrorSeries,
    stats: Option<&TrackingErrorStats>,
    output_path: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let plot_type_name = "Tracking Error";
    let ex_points: Vec<(f64, f64)> = errors.time.iter().copied().zip(errors.ex.iter().copied()).collect();
    let ey_points: Vec<(f64, f64)> = errors.time.iter().copied().zip(errors.ey.iter().copied()).collect();

    let (title_x, title_y) = match stats {
        Some(s) => (
            format!("ex vs Time - RMS: {:.3} m, max: {:.3} m", s.rms_x, s.max_abs_x),
            format!("ey vs Time - RMS: {:.3} m, max: {:.3} m", s.rms_y, s.max_abs_y),
        ),
        None => ("ex vs Time".to_string(), "ey vs Time".to_string()),
    };

    draw_stacked_plot(output_path, root_name, plot_type_name, 2, |row| {
        if row == 0 {
            PlotConfig::fitted(
                &title_x,
                vec![PlotSeries::new(ex_points.clone(), "ex", *COLOR_ERROR_X, LINE_WIDTH_PLOT)],
                "Time (s)",
                "ex (m)",
                false,
            )
        } else {
            PlotConfig::fitted(
                &title_y,
                vec![PlotSeries::new(ey_points.clone(), "ey", *COLOR_ERROR_Y, LINE_WIDTH_PLOT)],
                "Time (s)",
                "ey (m)",
                false,
            )
        }
    })
}

// src/plot_functions/plot_tracking_error.rs
