//! Tunables for the collision world, loadable from `.ron` or `.toml`.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of segments a segment collider can hold.
pub const DEFAULT_SEGMENT_CAPACITY: usize = 50;

/// Which crossing survives when one tick's motion crosses several segments
/// of the same collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrossingPolicy {
    /// Scan every segment in index order; the last one that registers wins.
    #[default]
    LastIndex,
    /// The crossing with the smallest time of impact wins; ties go to the lower index.
    Earliest,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Maximum segments per segment collider.
    pub segment_capacity: usize,
    /// `|dot(n, v)| / |v|` at or below this counts as motion parallel to a segment.
    pub parallel_epsilon: f64,
    /// Squared segment length at or below this marks a degenerate segment.
    pub degenerate_epsilon: f64,
    pub crossing_policy: CrossingPolicy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            segment_capacity: DEFAULT_SEGMENT_CAPACITY,
            parallel_epsilon: 1e-9,
            degenerate_epsilon: 1e-12,
            crossing_policy: CrossingPolicy::LastIndex,
        }
    }
}

impl WorldConfig {
    /// Load configuration from a `.ron` or `.toml` file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("ron") => Self::from_ron_str(&contents),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a `.ron` or `.toml` file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
