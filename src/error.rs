use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading demo configuration.
///
/// The hosts themselves never fail at run time; binding mistakes are
/// compile errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Field '{field}' needs exactly {expected} operands, got {actual}")]
    OperandCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
