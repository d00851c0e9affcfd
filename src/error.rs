// src/error.rs

use std::path::PathBuf;

/// Errors raised while reading, analysing or rendering a run.
/// Every variant is fatal to the run; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    /// An input log file is missing.
    #[error("Log file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line does not have the expected token count or shape.
    #[error("Parse error in '{path}' at line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Parallel sequences disagree in length.
    #[error("Length mismatch in {context}: expected {expected} samples, found {found}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },

    /// An operation needs at least one sample.
    #[error("Series '{0}' has no samples")]
    EmptySeries(&'static str),

    /// Low-level CSV reader failure.
    #[error("CSV reader error: {0}")]
    Csv(#[from] csv::Error),
}

impl AnalysisError {
    /// Maps an `io::Error` for `path`, promoting `NotFound` to `FileNotFound`.
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            AnalysisError::FileNotFound(path.to_path_buf())
        } else {
            AnalysisError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn parse(path: &std::path::Path, line: usize, reason: impl Into<String>) -> Self {
        AnalysisError::Parse {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

/// Checks that a parallel column has the expected number of samples.
pub(crate) fn ensure_len(context: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(AnalysisError::ShapeMismatch {
            context,
            expected,
            found,
        });
    }
    Ok(())
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_not_found_is_promoted() {
        let err = AnalysisError::from_io(
            Path::new("missing/pose_rob.txt"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, AnalysisError::FileNotFound(ref p) if p == Path::new("missing/pose_rob.txt")));
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = AnalysisError::from_io(
            Path::new("params.txt"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, AnalysisError::Io { .. }));
    }

    #[test]
    fn test_ensure_len() {
        assert!(ensure_len("x/y", 3, 3).is_ok());
        let err = ensure_len("x/y", 3, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Length mismatch in x/y: expected 3 samples, found 2"
        );
    }
}

// src/error.rs
