// src/plot_functions/plot_pose_vs_time.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_EQUIVALENT_POINT, COLOR_HEADING, COLOR_POSE, COLOR_REFERENCE, LINE_WIDTH_PLOT,
};
use crate::data_analysis::frame_transform::DerivedTrajectory;
use crate::data_input::time_series::TimeSeries;
use crate::plot_framework::{draw_stacked_plot, PlotConfig, PlotSeries, SeriesStyle};

/// Generates the stacked x / y / heading versus time plot.
///
/// Rows: logged x (dashed), equivalent point xE and reference x; the same for
/// y; logged heading against reference heading.
pub fn plot_pose_vs_time(
    state: &TimeSeries,
    derived: &DerivedTrajectory,
    reference: &TimeSeries,
    output_path: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let plot_type_name = "Pose vs Time";
    let derived_x: Vec<(f64, f64)> = derived.time.iter().copied().zip(derived.x_e.iter().copied()).collect();
    let derived_y: Vec<(f64, f64)> = derived.time.iter().copied().zip(derived.y_e.iter().copied()).collect();

    draw_stacked_plot(output_path, root_name, plot_type_name, 3, |row| match row {
        0 => PlotConfig::fitted(
            "x vs Time",
            vec![
                PlotSeries::new(state.points(&state.x), "x", *COLOR_POSE, LINE_WIDTH_PLOT)
                    .with_style(SeriesStyle::DashedLine),
                PlotSeries::new(derived_x.clone(), "xE", *COLOR_EQUIVALENT_POINT, LINE_WIDTH_PLOT),
                PlotSeries::new(reference.points(&reference.x), "x_ref", *COLOR_REFERENCE, LINE_WIDTH_PLOT),
            ],
            "Time (s)",
            "x (m)",
            false,
        ),
        1 => PlotConfig::fitted(
            "y vs Time",
            vec![
                PlotSeries::new(state.points(&state.y), "y", *COLOR_POSE, LINE_WIDTH_PLOT)
                    .with_style(SeriesStyle::DashedLine),
                PlotSeries::new(derived_y.clone(), "yE", *COLOR_EQUIVALENT_POINT, LINE_WIDTH_PLOT),
                PlotSeries::new(reference.points(&reference.y), "y_ref", *COLOR_REFERENCE, LINE_WIDTH_PLOT),
            ],
            "Time (s)",
            "y (m)",
            false,
        ),
        _ => PlotConfig::fitted(
            "Heading vs Time",
            vec![
                PlotSeries::new(state.points(&state.heading), "heading", *COLOR_HEADING, LINE_WIDTH_PLOT),
                PlotSeries::new(
                    reference.points(&reference.heading),
                    "heading_ref",
                    *COLOR_REFERENCE,
                    LINE_WIDTH_PLOT,
                ),
            ],
            "Time (s)",
            "Heading (rad)",
            false,
        ),
    })
}

// src/plot_functions/plot_pose_vs_time.rs
