// src/data_input/series_reader.rs

use csv::ReaderBuilder;
use log::{debug, info};
use ndarray::Array1;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data_input::time_series::TimeSeries;
use crate::error::{AnalysisError, Result};

/// Number of comma-separated fields on every series line: t, x, y, heading.
const SERIES_FIELD_COUNT: usize = 4;

/// Reads a `t,x,y,heading` log file into a `TimeSeries`.
///
/// Every non-blank line must hold exactly four floating-point fields.
/// No ordering or range checks are made on the values.
pub fn read_series(path: &Path) -> Result<TimeSeries> {
    let file = File::open(path).map_err(|e| AnalysisError::from_io(path, e))?;
    let series = parse_series(file, path)?;

    match series.time_span() {
        Some((start, end)) => info!(
            "Read {} samples from {:?} (t = {:.3} .. {:.3} s)",
            series.len(),
            path,
            start,
            end
        ),
        None => info!("Read 0 samples from {:?}", path),
    }
    Ok(series)
}

/// Parses series lines from any reader. `origin` is only used in error messages.
pub fn parse_series<R: Read>(source: R, origin: &Path) -> Result<TimeSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // field count is checked below so the error names the line
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut columns: [Vec<f64>; SERIES_FIELD_COUNT] = Default::default();
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| record_error(e, origin, row_index + 1))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_index + 1);

        if record.len() != SERIES_FIELD_COUNT {
            return Err(AnalysisError::parse(
                origin,
                line,
                format!(
                    "expected {} comma-separated values, found {}",
                    SERIES_FIELD_COUNT,
                    record.len()
                ),
            ));
        }

        for (column, field) in columns.iter_mut().zip(record.iter()) {
            let value = field.parse::<f64>().map_err(|_| {
                AnalysisError::parse(origin, line, format!("'{}' is not a number", field))
            })?;
            column.push(value);
        }
    }

    debug!("Parsed {} rows from {:?}", columns[0].len(), origin);
    let [time, x, y, heading] = columns;
    TimeSeries::new(
        Array1::from(time),
        Array1::from(x),
        Array1::from(y),
        Array1::from(heading),
    )
}

/// Maps a CSV reader failure to a line-level parse error.
/// Read failures of the underlying source stay `Csv` errors.
fn record_error(err: csv::Error, origin: &Path, fallback_line: usize) -> AnalysisError {
    if matches!(err.kind(), csv::ErrorKind::Io(_)) {
        return AnalysisError::Csv(err);
    }
    let line = err
        .position()
        .map(|p| p.line() as usize)
        .unwrap_or(fallback_line);
    let reason = match err.kind() {
        csv::ErrorKind::Utf8 { .. } => "line is not valid UTF-8".to_string(),
        _ => err.to_string(),
    };
    AnalysisError::parse(origin, line, reason)
}


// src/data_input/series_reader.rs
