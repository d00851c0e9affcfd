// src/constants.rs

use plotters::style::colors::full_palette::{BLUE, GREEN, GREY, ORANGE, PURPLE, RED};
use plotters::style::colors::BLACK;
use plotters::style::RGBColor;

// Input file names inside a run directory.
pub const PARAMS_FILE_NAME: &str = "params.txt";
pub const STATE_FILE_NAME: &str = "pose_rob.txt";
pub const CONTROL_TARGET_FILE_NAME: &str = "control_target.txt";
pub const VIRTUAL_SAILBOAT_FILE_NAME: &str = "pose_vsb.txt";

// Output figure suffixes, appended to the run name.
pub const POSE_VS_TIME_SUFFIX: &str = "_PoseVsTime_stacked.png";
pub const TRAJECTORY_SUFFIX: &str = "_Trajectory.png";
pub const TRACKING_ERROR_SUFFIX: &str = "_TrackingError_stacked.png";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Range padding: fraction of the data span, or a fixed amount for flat data.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const RANGE_PADDING_MIN: f64 = 0.5;

// Font sizes.
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// --- Plot Color Assignments ---
pub const COLOR_POSE: &RGBColor = &GREY; // logged pose (dashed)
pub const COLOR_EQUIVALENT_POINT: &RGBColor = &BLUE;
pub const COLOR_REFERENCE: &RGBColor = &ORANGE;
pub const COLOR_HEADING: &RGBColor = &GREEN;
pub const COLOR_ERROR_X: &RGBColor = &RED;
pub const COLOR_ERROR_Y: &RGBColor = &PURPLE;
pub const COLOR_WAYPOINT: &RGBColor = &BLACK;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Dashed line pattern, in pixels.
pub const DASH_LENGTH_PX: u32 = 12;
pub const DASH_GAP_PX: u32 = 8;

// Waypoint endpoint marker radius, in pixels.
pub const WAYPOINT_MARKER_RADIUS: i32 = 6;

// src/constants.rs
