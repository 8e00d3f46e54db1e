// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Converter tags and conversion context.
//!
//! A converter tag selects between decode strategies for the same target
//! type. Views carry their tag as a type parameter, so the strategy used for
//! a lookup is visible in the view's type and resolved at compile time.

use std::fmt;

/// Marker for a decode strategy.
///
/// Tags may carry state (a format cache, a list of accepted formats), so
/// they must be cheap to clone.
pub trait Converter: Clone + fmt::Debug + Send + Sync + 'static {
    /// Short name used in log output.
    fn name(&self) -> &'static str;
}

/// The default strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultConverter;

impl Converter for DefaultConverter {
    fn name(&self) -> &'static str {
        "default"
    }
}

/// Conversion context handed to [`crate::FromJson`] implementations.
///
/// Describes the node a value was read from: its key (if it was reached by
/// key) and its converter tag.
#[derive(Debug)]
pub struct Context<'c, C> {
    key: Option<&'c str>,
    converter: &'c C,
}

impl<'c, C: Converter> Context<'c, C> {
    /// Create a context.
    pub fn new(key: Option<&'c str>, converter: &'c C) -> Self {
        Self { key, converter }
    }

    /// Key of the originating node.
    pub fn key(&self) -> Option<&'c str> {
        self.key
    }

    /// Converter tag of the originating node.
    pub fn converter(&self) -> &'c C {
        self.converter
    }
}

impl<C> Clone for Context<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Context<'_, C> {}
