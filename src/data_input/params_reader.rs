// src/data_input/params_reader.rs

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::RunMode;
use crate::error::{AnalysisError, Result};

/// Position of one numeric field inside the pipe-delimited header line.
///
/// `token` is the index of the value after splitting the segment on single
/// spaces. Historical logs were read with exactly these indices, so they are
/// pinned here rather than derived from the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField {
    pub name: &'static str,
    pub segment: usize,
    pub token: usize,
}

pub const FIELD_CONTROL_OFFSET_X: HeaderField = HeaderField {
    name: "controlOffsetX",
    segment: 1,
    token: 2,
};
pub const FIELD_CONTROL_OFFSET_Y: HeaderField = HeaderField {
    name: "controlOffsetY",
    segment: 2,
    token: 2,
};
pub const FIELD_WIND_SPEED: HeaderField = HeaderField {
    name: "windSpeed",
    segment: 3,
    token: 3,
};
pub const FIELD_WIND_ANGLE: HeaderField = HeaderField {
    name: "windAngle",
    segment: 4,
    token: 3,
};

/// Errors produced by the header grammar.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HeaderError {
    #[error("header has no segment {segment} for field '{field}' (found {found} segments)")]
    MissingSegment {
        field: &'static str,
        segment: usize,
        found: usize,
    },

    #[error("segment {segment} has no numeric value at or after token {token} for field '{field}'")]
    MissingValue {
        field: &'static str,
        segment: usize,
        token: usize,
    },

    #[error("no first waypoint after the '{field}' value in segment {segment}")]
    MissingWaypoint { field: &'static str, segment: usize },
}

/// The first line of `params.txt`, split by `|` and then by single spaces.
///
/// A field value is the first token at or after its pinned index that parses
/// as a float. Empty tokens from repeated spaces are kept so token indices of
/// older files do not shift.
#[derive(Debug, Clone)]
pub struct HeaderLine<'a> {
    segments: Vec<Vec<&'a str>>,
}

impl<'a> HeaderLine<'a> {
    pub fn tokenize(line: &'a str) -> Self {
        let segments = line
            .trim_end_matches(['\r', '\n'])
            .split('|')
            .map(|segment| segment.split(' ').collect())
            .collect();
        Self { segments }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The leading command/identifier segment, trimmed.
    pub fn command(&self) -> String {
        self.segments
            .first()
            .map(|tokens| tokens.join(" ").trim().to_string())
            .unwrap_or_default()
    }

    fn segment(&self, field: &HeaderField) -> std::result::Result<&[&'a str], HeaderError> {
        self.segments
            .get(field.segment)
            .map(|tokens| tokens.as_slice())
            .ok_or(HeaderError::MissingSegment {
                field: field.name,
                segment: field.segment,
                found: self.segments.len(),
            })
    }

    /// Returns the token index and value of `field`.
    fn locate(&self, field: &HeaderField) -> std::result::Result<(usize, f64), HeaderError> {
        let tokens = self.segment(field)?;
        first_number_from(tokens, field.token).ok_or(HeaderError::MissingValue {
            field: field.name,
            segment: field.segment,
            token: field.token,
        })
    }

    pub fn value(&self, field: &HeaderField) -> std::result::Result<f64, HeaderError> {
        self.locate(field).map(|(_, value)| value)
    }

    /// The number following the value of `field` in the same segment.
    /// Sailboat runs store the first waypoint coordinate there.
    pub fn value_after(&self, field: &HeaderField) -> std::result::Result<f64, HeaderError> {
        let (index, _) = self.locate(field)?;
        let tokens = self.segment(field)?;
        first_number_from(tokens, index + 1)
            .map(|(_, value)| value)
            .ok_or(HeaderError::MissingWaypoint {
                field: field.name,
                segment: field.segment,
            })
    }
}

fn first_number_from(tokens: &[&str], start: usize) -> Option<(usize, f64)> {
    tokens
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(i, token)| {
            // `inf` and `nan` parse as f64 but are label text in a header.
            token.trim().parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| (i, v))
        })
}

/// One path-following target segment, `(x1, y1) -> (x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointSegment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Scalar parameters of one run, plus the flat waypoint list of sailboat runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunParameters {
    pub command: String,
    pub control_offset_x: f64,
    pub control_offset_y: f64,
    pub wind_speed: f64,
    pub wind_angle: f64,
    /// Flat `(x1, y1, x2, y2)` groups. Empty unless the run is a sailboat run.
    pub waypoints: Vec<f64>,
}

impl RunParameters {
    pub fn waypoint_segments(&self) -> Vec<WaypointSegment> {
        self.waypoints
            .chunks_exact(4)
            .map(|w| WaypointSegment {
                start: (w[0], w[1]),
                end: (w[2], w[3]),
            })
            .collect()
    }
}

/// Reads `params.txt`.
pub fn read_params(path: &Path, mode: RunMode) -> Result<RunParameters> {
    let text = fs::read_to_string(path).map_err(|e| AnalysisError::from_io(path, e))?;
    let params = parse_params(&text, mode, path)?;

    info!(
        "Run parameters: offset = ({}, {}), wind speed = {}, wind angle = {}",
        params.control_offset_x, params.control_offset_y, params.wind_speed, params.wind_angle
    );
    if mode == RunMode::Sailboat {
        info!("  {} waypoint segment(s)", params.waypoints.len() / 4);
    }
    Ok(params)
}

/// Parses parameter file contents. `origin` is only used in error messages.
pub fn parse_params(text: &str, mode: RunMode, origin: &Path) -> Result<RunParameters> {
    let mut lines = text.lines();
    let header_text = lines
        .next()
        .ok_or_else(|| AnalysisError::parse(origin, 1, "missing header line"))?;

    let header = HeaderLine::tokenize(header_text);
    debug!("Parameter header has {} segments", header.segment_count());

    let header_err = |e: HeaderError| AnalysisError::parse(origin, 1, e.to_string());
    let mut params = RunParameters {
        command: header.command(),
        control_offset_x: header.value(&FIELD_CONTROL_OFFSET_X).map_err(header_err)?,
        control_offset_y: header.value(&FIELD_CONTROL_OFFSET_Y).map_err(header_err)?,
        wind_speed: header.value(&FIELD_WIND_SPEED).map_err(header_err)?,
        wind_angle: header.value(&FIELD_WIND_ANGLE).map_err(header_err)?,
        waypoints: Vec::new(),
    };

    if mode != RunMode::Sailboat {
        return Ok(params);
    }

    params
        .waypoints
        .push(header.value_after(&FIELD_WIND_ANGLE).map_err(header_err)?);

    for (index, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line_number = index + 2;
        let value = trimmed.parse::<f64>().map_err(|_| {
            AnalysisError::parse(
                origin,
                line_number,
                format!("waypoint '{}' is not a number", trimmed),
            )
        })?;
        params.waypoints.push(value);
    }

    if params.waypoints.len() % 4 != 0 {
        return Err(AnalysisError::parse(
            origin,
            text.lines().count(),
            format!(
                "{} waypoint values do not form complete (x1, y1, x2, y2) segments",
                params.waypoints.len()
            ),
        ));
    }

    Ok(params)
}


// src/data_input/params_reader.rs
