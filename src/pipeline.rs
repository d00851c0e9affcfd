// src/pipeline.rs

use log::{info, warn};
use std::error::Error;

use crate::config::{RunConfig, RunMode};
use crate::constants::{POSE_VS_TIME_SUFFIX, TRACKING_ERROR_SUFFIX, TRAJECTORY_SUFFIX};
use crate::data_analysis::frame_transform::{compute_equivalent_point, BodyOffset, DerivedTrajectory};
use crate::data_analysis::tracking_error::{compute_tracking_error, ErrorSeries, TrackingErrorStats};
use crate::data_input::params_reader::{read_params, RunParameters};
use crate::data_input::series_reader::read_series;
use crate::data_input::time_series::TimeSeries;
use crate::error::Result;
use crate::plot_functions::plot_pose_vs_time::plot_pose_vs_time;
use crate::plot_functions::plot_tracking_error::plot_tracking_error;
use crate::plot_functions::plot_trajectory::plot_trajectory;

/// Everything computed for one run, ready to be rendered.
#[derive(Debug, Clone)]
pub struct RunAnalysis {
    pub params: RunParameters,
    pub state: TimeSeries,
    pub reference: TimeSeries,
    pub derived: DerivedTrajectory,
    pub errors: ErrorSeries,
    pub stats: Option<TrackingErrorStats>,
}

/// Reads the three input files of a run and computes the equivalent point and tracking error.
/// Nothing is written; any failure aborts before rendering starts.
pub fn analyze_run(config: &RunConfig) -> Result<RunAnalysis> {
    info!("Analysing run {:?} ({} mode)", config.run_dir, config.mode);

    let params = read_params(&config.params_path(), config.mode)?;
    let state = read_series(&config.state_path())?;
    let reference = read_series(&config.reference_path())?;

    let offset = BodyOffset::new(params.control_offset_x, params.control_offset_y);
    let derived = compute_equivalent_point(&state, offset)?;
    let errors = compute_tracking_error(&derived, &reference)?;

    let stats = TrackingErrorStats::from_errors(&errors);
    match &stats {
        Some(s) => {
            info!("Tracking error over {} reference samples:", s.samples);
            info!("  ex: RMS {:.4} m, max |ex| {:.4} m", s.rms_x, s.max_abs_x);
            info!("  ey: RMS {:.4} m, max |ey| {:.4} m", s.rms_y, s.max_abs_y);
            info!("  mean distance {:.4} m", s.mean_distance);
        }
        None => warn!("Reference trajectory is empty, no tracking error to report."),
    }

    Ok(RunAnalysis {
        params,
        state,
        reference,
        derived,
        errors,
        stats,
    })
}

/// Writes the pose, trajectory and tracking-error figures of an analysed run.
pub fn render_run(analysis: &RunAnalysis, config: &RunConfig) -> std::result::Result<(), Box<dyn Error>> {
    let root_name = config.run_name();
    let waypoints = match config.mode {
        RunMode::Sailboat => analysis.params.waypoint_segments(),
        RunMode::Standard => Vec::new(),
    };

    info!("Rendering figures into {:?}", config.output_dir);
    plot_pose_vs_time(
        &analysis.state,
        &analysis.derived,
        &analysis.reference,
        &config.output_path(POSE_VS_TIME_SUFFIX),
        &root_name,
    )?;
    plot_trajectory(
        &analysis.state,
        &analysis.derived,
        &analysis.reference,
        &waypoints,
        &config.output_path(TRAJECTORY_SUFFIX),
        &root_name,
    )?;
    plot_tracking_error(
        &analysis.errors,
        analysis.stats.as_ref(),
        &config.output_path(TRACKING_ERROR_SUFFIX),
        &root_name,
    )?;
    Ok(())
}

// src/pipeline.rs
