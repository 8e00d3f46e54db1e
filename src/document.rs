// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Owned root documents.
//!
//! A [`Document`] owns a parsed JSON object and hands out [`ObjectNode`]
//! views over it. Construction fails unless the input parses to an object.

use std::str::FromStr;

use crate::access::ObjectNode;
use crate::core::{Converter, DocumentError, KeySource, RawMap, RawValue};
use crate::encoding::json::JsonDecoder;

/// An owned JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: RawMap,
}

impl Document {
    /// Parse bytes into a document.
    ///
    /// Returns `None` if the bytes are not valid JSON or the root is not an
    /// object. Use [`Document::parse`] to find out which.
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        match Self::parse(data) {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::debug!(error = %err, len = data.len(), "rejected JSON document");
                None
            }
        }
    }

    /// Parse bytes into a document, reporting why construction failed.
    pub fn parse(data: &[u8]) -> Result<Self, DocumentError> {
        let value = JsonDecoder::new().decode_bytes(data)?;
        Self::try_from(value)
    }

    /// Wrap an already-parsed value, if it is an object.
    pub fn from_value(value: RawValue) -> Option<Self> {
        Self::try_from(value).ok()
    }

    /// The root object map.
    pub fn as_map(&self) -> &RawMap {
        &self.root
    }

    /// Consume the document, returning the root map.
    pub fn into_map(self) -> RawMap {
        self.root
    }

    /// View the root with key vocabulary `K` and the default converter tag.
    pub fn object<K: KeySource>(&self) -> ObjectNode<'_, K> {
        ObjectNode::new(&self.root)
    }

    /// View the root with key vocabulary `K` and an explicit converter tag.
    pub fn object_with<K: KeySource, C: Converter>(&self, converter: C) -> ObjectNode<'_, K, C> {
        ObjectNode::with_converter(&self.root, converter)
    }
}

impl TryFrom<RawValue> for Document {
    type Error = DocumentError;

    fn try_from(value: RawValue) -> Result<Self, Self::Error> {
        match value {
            RawValue::Object(root) => Ok(Self { root }),
            other => Err(DocumentError::NotAnObject {
                found: other.type_name(),
            }),
        }
    }
}

impl From<RawMap> for Document {
    fn from(root: RawMap) -> Self {
        Self { root }
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}
