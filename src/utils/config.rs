//! Tracking session configuration

use crate::core::SEGMENT_TOLERANCE_KM;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Tunable parameters for a tracking session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Tolerance for the segment projection test (km)
    pub segment_tolerance_km: f64,
    /// Day zero of the schedule; derived from the first fix when unset
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            segment_tolerance_km: SEGMENT_TOLERANCE_KM,
            reference_date: None,
        }
    }
}

/// Errors raised while loading or validating configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    Io(io::Error),
    /// The configuration file is not valid JSON for this schema
    Parse(serde_json::Error),
    /// A parameter value is outside its allowed range
    InvalidValue { parameter: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config file I/O error: {}", err),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
            ConfigError::InvalidValue { parameter, value } => {
                write!(f, "invalid value {} for parameter {}", value, parameter)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl TrackerConfig {
    /// Load and validate configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a JSON file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let raw = serde_json::to_string_pretty(self).map_err(ConfigError::Parse)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.segment_tolerance_km.is_finite() || self.segment_tolerance_km <= 0.0 {
            return Err(ConfigError::InvalidValue {
                parameter: "segment_tolerance_km".to_string(),
                value: self.segment_tolerance_km.to_string(),
            });
        }
        Ok(())
    }
}
