// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Error types for keyjson.
//!
//! Key access knows exactly two failures:
//! - [`ConversionError::MissingKey`] - the key is not present in the object
//! - [`ConversionError::InvalidCast`] - the key is present but its value has
//!   the wrong shape for the requested type
//!
//! Parsing the input bytes is a separate boundary with its own
//! [`DocumentError`], which never surfaces from an accessor.

use thiserror::Error;

/// Key reported when a node was reached through an array index.
pub const UNKNOWN_KEY: &str = "unknown";

/// Errors raised by the throwing accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The requested key was not present in the backing object.
    #[error("missing key '{0}'")]
    MissingKey(String),

    /// The key was present but its value could not be converted.
    #[error("invalid cast for '{0}'")]
    InvalidCast(String),
}

impl ConversionError {
    /// Create a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        ConversionError::MissingKey(key.into())
    }

    /// Create an invalid cast error.
    pub fn invalid_cast(key: impl Into<String>) -> Self {
        ConversionError::InvalidCast(key.into())
    }

    /// The key this error refers to.
    pub fn key(&self) -> &str {
        match self {
            ConversionError::MissingKey(key) | ConversionError::InvalidCast(key) => key,
        }
    }

    /// Check if this is a missing key error.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, ConversionError::MissingKey(_))
    }

    /// Check if this is an invalid cast error.
    pub fn is_invalid_cast(&self) -> bool {
        matches!(self, ConversionError::InvalidCast(_))
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ConversionError::MissingKey(key) => {
                vec![("kind", "missing_key".to_string()), ("key", key.clone())]
            }
            ConversionError::InvalidCast(key) => {
                vec![("kind", "invalid_cast".to_string()), ("key", key.clone())]
            }
        }
    }
}

/// Result type for the throwing accessors.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors produced while turning input bytes into a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The input was not valid JSON.
    #[error("JSON parse error: {message}")]
    Parse {
        /// Parser message
        message: String,
    },

    /// The input parsed, but the root is not an object.
    #[error("expected a JSON object at the root, found {found}")]
    NotAnObject {
        /// Type name of the root value
        found: &'static str,
    },
}

impl DocumentError {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        DocumentError::Parse {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        DocumentError::parse(err.to_string())
    }
}
