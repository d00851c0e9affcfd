// src/plot_functions/mod.rs

pub mod plot_pose_vs_time;
pub mod plot_tracking_error;
pub mod plot_trajectory;

// src/plot_functions/mod.rs
