// src/data_analysis/mod.rs

pub mod frame_transform;
pub mod tracking_error;

// src/data_analysis/mod.rs
