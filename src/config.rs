// src/config.rs

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{
    CONTROL_TARGET_FILE_NAME, PARAMS_FILE_NAME, STATE_FILE_NAME, VIRTUAL_SAILBOAT_FILE_NAME,
};

/// Kind of experiment recorded in a run directory.
///
/// Sailboat runs log a virtual-sailboat reference and carry waypoint segments
/// in their parameter file; every other run follows a control target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Standard,
    Sailboat,
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RunMode::Standard),
            "sailboat" => Ok(RunMode::Sailboat),
            other => Err(format!(
                "unknown run mode '{other}', expected 'standard' or 'sailboat'"
            )),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Standard => write!(f, "standard"),
            RunMode::Sailboat => write!(f, "sailboat"),
        }
    }
}

/// Where one run's logs live and where its figures go.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub run_dir: PathBuf,
    pub mode: RunMode,
    pub output_dir: PathBuf,
}

impl RunConfig {
    pub fn new(run_dir: impl Into<PathBuf>, mode: RunMode) -> Self {
        Self {
            run_dir: run_dir.into(),
            mode,
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn params_path(&self) -> PathBuf {
        self.run_dir.join(PARAMS_FILE_NAME)
    }

    pub fn state_path(&self) -> PathBuf {
        self.run_dir.join(STATE_FILE_NAME)
    }

    /// The reference trajectory: the virtual sailboat for sailboat runs,
    /// the controller target otherwise.
    pub fn reference_path(&self) -> PathBuf {
        match self.mode {
            RunMode::Sailboat => self.run_dir.join(VIRTUAL_SAILBOAT_FILE_NAME),
            RunMode::Standard => self.run_dir.join(CONTROL_TARGET_FILE_NAME),
        }
    }

    /// Name used as figure title and output file prefix: the run directory's last component.
    pub fn run_name(&self) -> String {
        run_name_of(&self.run_dir)
    }

    /// Output path for a figure with the given suffix, e.g. `_Trajectory.png`.
    pub fn output_path(&self, suffix: &str) -> PathBuf {
        self.output_dir.join(format!("{}{}", self.run_name(), suffix))
    }
}

fn run_name_of(run_dir: &Path) -> String {
    run_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "run".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_mode_from_str() {
        assert_eq!("standard".parse::<RunMode>(), Ok(RunMode::Standard));
        assert_eq!("Sailboat".parse::<RunMode>(), Ok(RunMode::Sailboat));
        assert!("voilier".parse::<RunMode>().is_err());
        assert_eq!(RunMode::default(), RunMode::Standard);
        assert_eq!(RunMode::Sailboat.to_string(), "sailboat");
    }

    #[test]
    fn test_standard_paths() {
        let config = RunConfig::new("/logs/2024-11-27_15-54-45_docking_ok", RunMode::Standard);
        assert_eq!(
            config.params_path(),
            PathBuf::from("/logs/2024-11-27_15-54-45_docking_ok/params.txt")
        );
        assert_eq!(
            config.state_path(),
            PathBuf::from("/logs/2024-11-27_15-54-45_docking_ok/pose_rob.txt")
        );
        assert_eq!(
            config.reference_path(),
            PathBuf::from("/logs/2024-11-27_15-54-45_docking_ok/control_target.txt")
        );
    }

    #[test]
    fn test_sailboat_reference_path() {
        let config = RunConfig::new("/logs/run_a", RunMode::Sailboat);
        assert_eq!(config.reference_path(), PathBuf::from("/logs/run_a/pose_vsb.txt"));
    }

    #[test]
    fn test_mode_is_not_inferred_from_name() {
        let config = RunConfig::new("/logs/2024-11-28_12-00-05_voilier_ok_1", RunMode::Standard);
        assert_eq!(
            config.reference_path(),
            PathBuf::from("/logs/2024-11-28_12-00-05_voilier_ok_1/control_target.txt")
        );
    }

    #[test]
    fn test_output_path_uses_run_name() {
        let config = RunConfig::new("/logs/run_b/", RunMode::Standard).with_output_dir("/tmp/out");
        assert_eq!(config.run_name(), "run_b");
        assert_eq!(
            config.output_path("_Trajectory.png"),
            PathBuf::from("/tmp/out/run_b_Trajectory.png")
        );
    }

    #[test]
    fn test_run_name_fallback() {
        let config = RunConfig::new("/", RunMode::Standard);
        assert_eq!(config.run_name(), "run");
    }
}

// src/config.rs
