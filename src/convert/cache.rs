// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Cache of compiled date format strings.
//!
//! Compiling a `strftime`-style format into `chrono` items is the expensive
//! part of parsing formatted dates. A [`FormatCache`] is constructed once by
//! the caller and shared (usually behind an `Arc`) by every converter that
//! needs it; the library never creates one on its own.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::format::{Item, StrftimeItems};

/// Compiled format items.
pub type CompiledFormat = Arc<[Item<'static>]>;

/// Thread-safe cache of compiled formats keyed by format string.
///
/// Uses RwLock for concurrent read access with exclusive write access.
#[derive(Debug, Default)]
pub struct FormatCache {
    inner: RwLock<HashMap<String, CompiledFormat>>,
}

impl FormatCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the compiled items for `format`, compiling and caching on first use.
    ///
    /// Returns `None` if the format string is invalid. Invalid formats are
    /// not cached.
    pub fn compiled(&self, format: &str) -> Option<CompiledFormat> {
        {
            let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(items) = inner.get(format) {
                return Some(Arc::clone(items));
            }
        }

        let items: CompiledFormat = match StrftimeItems::new(format).parse_to_owned() {
            Ok(items) => items.into(),
            Err(err) => {
                tracing::warn!(format, error = %err, "invalid date format string");
                return None;
            }
        };

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let entry = inner
            .entry(format.to_string())
            .or_insert_with(|| Arc::clone(&items));
        Some(Arc::clone(entry))
    }

    /// Check if a format has been compiled.
    pub fn contains(&self, format: &str) -> bool {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.contains_key(format)
    }

    /// Get the number of cached formats.
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all cached formats.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiles_once() {
        let cache = FormatCache::new();
        assert!(cache.is_empty());

        let first = cache.compiled("%Y-%m-%d").unwrap();
        let second = cache.compiled("%Y-%m-%d").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("%Y-%m-%d"));
    }

    #[test]
    fn test_invalid_format_not_cached() {
        let cache = FormatCache::new();
        assert!(cache.compiled("%Y-%").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = FormatCache::new();
        cache.compiled("%H:%M").unwrap();
        cache.clear();
        assert!(!cache.contains("%H:%M"));
    }
}
