// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Access configuration.
//!
//! Settings that callers usually want to keep out of code: the default array
//! policy and the date formats tried by [`FormattedDateConverter`].
//!
//! ```toml
//! array_policy = "lenient"
//!
//! [dates]
//! formats = ["%Y-%m-%dT%H:%M:%S%#z", "%Y-%m-%d %H:%M:%S"]
//! ```
//!
//! Every field is optional. Missing fields take their defaults.
//!
//! [`FormattedDateConverter`]: crate::convert::FormattedDateConverter

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::access::ArrayPolicy;
use crate::convert::{FormatCache, FormattedDateConverter, RFC3339_FORMAT};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`AccessConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ConfigError::Io { path, source } => vec![
                ("error_kind", "io".to_string()),
                ("path", path.display().to_string()),
                ("source", source.to_string()),
            ],
            ConfigError::Parse(err) => vec![
                ("error_kind", "parse".to_string()),
                ("message", err.message().to_string()),
            ],
        }
    }
}

/// Date parsing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// strftime patterns, tried in order.
    pub formats: Vec<String>,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            formats: vec![RFC3339_FORMAT.to_string()],
        }
    }
}

/// Top-level access settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Policy used by callers that do not pick one per call.
    pub array_policy: ArrayPolicy,
    pub dates: DateConfig,
}

impl AccessConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.dates.formats.is_empty() {
            tracing::warn!("date config lists no formats; every date string will fail to parse");
        }
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading access config");
        Self::from_toml_str(&text)
    }

    /// Build a date converter from these settings.
    pub fn date_converter(&self, cache: Arc<FormatCache>) -> FormattedDateConverter {
        FormattedDateConverter::from_config(&self.dates, cache)
    }
}
