//! Plugin configuration.
//!
//! The whole configuration is one field, the script source:
//!
//! ```toml
//! code = '''
//! (if (str_contains (get_req_path) "/admin")
//!     (halt 403 "forbidden")
//!     (run_next))
//! '''
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Script source. Empty means the middleware forwards untouched.
    pub code: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Config {
    pub fn with_code(code: impl Into<String>) -> Self {
        Config { code: code.into() }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}
