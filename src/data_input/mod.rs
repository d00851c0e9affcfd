// src/data_input/mod.rs

pub mod params_reader;
pub mod series_reader;
pub mod time_series;

// src/data_input/mod.rs
