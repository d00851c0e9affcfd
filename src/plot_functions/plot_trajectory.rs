// src/plot_functions/plot_trajectory.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_EQUIVALENT_POINT, COLOR_POSE, COLOR_REFERENCE, COLOR_WAYPOINT, LINE_WIDTH_PLOT,
};
use crate::data_analysis::frame_transform::DerivedTrajectory;
use crate::data_input::params_reader::WaypointSegment;
use crate::data_input::time_series::TimeSeries;
use crate::plot_framework::{draw_stacked_plot, PlotConfig, PlotSeries, SeriesStyle};

/// Builds the waypoint overlay: one dashed line per segment plus its endpoint markers.
/// Only the first segment carries a legend label.
pub fn waypoint_series(segments: &[WaypointSegment]) -> Vec<PlotSeries> {
    let mut series = Vec::with_capacity(segments.len() * 2);
    for (i, segment) in segments.iter().enumerate() {
        let endpoints = vec![segment.start, segment.end];
        let label = if i == 0 { "waypoints" } else { "" };
        series.push(
            PlotSeries::new(endpoints.clone(), label, *COLOR_WAYPOINT, LINE_WIDTH_PLOT)
                .with_style(SeriesStyle::DashedLine),
        );
        series.push(
            PlotSeries::new(endpoints, "", *COLOR_WAYPOINT, LINE_WIDTH_PLOT).with_style(SeriesStyle::Markers),
        );
    }
    series
}

/// Generates the y vs x plot of the logged position, the equivalent point and
/// the reference, with waypoint segments underneath when present.
pub fn plot_trajectory(
    state: &TimeSeries,
    derived: &DerivedTrajectory,
    reference: &TimeSeries,
    waypoints: &[WaypointSegment],
    output_path: &Path,
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let plot_type_name = "Trajectory";

    let mut series = waypoint_series(waypoints);
    series.push(
        PlotSeries::new(state.xy_points(), "pos", *COLOR_POSE, LINE_WIDTH_PLOT).with_style(SeriesStyle::DashedLine),
    );
    series.push(PlotSeries::new(derived.xy_points(), "E", *COLOR_EQUIVALENT_POINT, LINE_WIDTH_PLOT));
    series.push(PlotSeries::new(reference.xy_points(), "ref", *COLOR_REFERENCE, LINE_WIDTH_PLOT));

    let config = PlotConfig::fitted("y vs x", series, "x (m)", "y (m)", true);
    draw_stacked_plot(output_path, root_name, plot_type_name, 1, move |_| config.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_series_per_segment() {
        let segments = [
            WaypointSegment { start: (0.0, 0.0), end: (10.0, 0.0) },
            WaypointSegment { start: (10.0, 0.0), end: (10.0, 10.0) },
        ];
        let series = waypoint_series(&segments);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].style, SeriesStyle::DashedLine);
        assert_eq!(series[0].label, "waypoints");
        assert_eq!(series[1].style, SeriesStyle::Markers);
        assert_eq!(series[2].data, vec![(10.0, 0.0), (10.0, 10.0)]);
        assert!(series[2].label.is_empty());
    }

    #[test]
    fn test_no_waypoints() {
        assert!(waypoint_series(&[]).is_empty());
    }
}

// src/plot_functions/plot_trajectory.rs
