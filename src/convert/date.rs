// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Date conversions.
//!
//! `DateTime<Utc>` decodes two ways depending on the view's converter tag:
//! - [`DefaultConverter`]: a JSON number of seconds since the Unix epoch
//!   (fractional seconds allowed)
//! - [`FormattedDateConverter`]: a JSON string parsed with the converter's
//!   format strings, tried in order
//!
//! A string under the default tag, or a number under the formatted tag,
//! decodes to `None`.

use std::sync::Arc;

use chrono::format::{self, Parsed};
use chrono::{DateTime, Utc};

use super::cache::FormatCache;
use super::FromJson;
use crate::config::DateConfig;
use crate::core::{Context, Converter, DefaultConverter, RawValue};

/// `strftime` format for RFC 3339 timestamps.
///
/// The offset may be `Z` or numeric, e.g. `2016-09-01T09:41:46Z` or
/// `2016-09-01T09:41:46+00:00`.
pub const RFC3339_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%#z";

/// Converter tag decoding dates from formatted strings.
///
/// Holds the accepted formats and a caller-owned [`FormatCache`]. Clones
/// share both.
#[derive(Debug, Clone)]
pub struct FormattedDateConverter {
    formats: Arc<[String]>,
    cache: Arc<FormatCache>,
}

impl FormattedDateConverter {
    /// Create a converter accepting [`RFC3339_FORMAT`].
    pub fn new(cache: Arc<FormatCache>) -> Self {
        Self::with_formats(cache, [RFC3339_FORMAT])
    }

    /// Create a converter accepting the given formats, tried in order.
    pub fn with_formats<I, S>(cache: Arc<FormatCache>, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
            cache,
        }
    }

    /// Create a converter from the `[dates]` configuration section.
    pub fn from_config(config: &DateConfig, cache: Arc<FormatCache>) -> Self {
        Self::with_formats(cache, config.formats.iter().cloned())
    }

    /// Accepted formats, in the order they are tried.
    pub fn formats(&self) -> &[String] {
        &self.formats
    }

    /// The shared format cache.
    pub fn cache(&self) -> &Arc<FormatCache> {
        &self.cache
    }

    /// Parse `text` with the first format that accepts it.
    ///
    /// Formats without an offset are read as UTC.
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        self.formats.iter().find_map(|fmt| {
            let items = self.cache.compiled(fmt)?;
            let mut parsed = Parsed::new();
            format::parse(&mut parsed, text, items.iter()).ok()?;
            parsed
                .to_datetime()
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|_| parsed.to_naive_datetime_with_offset(0).map(|dt| dt.and_utc()))
                .ok()
        })
    }
}

impl Converter for FormattedDateConverter {
    fn name(&self) -> &'static str {
        "formatted-date"
    }
}

/// Convert seconds since the Unix epoch to a UTC instant.
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as u32;
    let (secs, nanos) = if nanos >= 1_000_000_000 {
        (whole as i64 + 1, 0)
    } else {
        (whole as i64, nanos)
    };
    DateTime::from_timestamp(secs, nanos)
}

impl<'a> FromJson<'a, DefaultConverter> for DateTime<Utc> {
    fn from_json(raw: &'a RawValue, _cx: &Context<'_, DefaultConverter>) -> Option<Self> {
        match raw {
            RawValue::Number(n) => from_epoch_seconds(n.as_f64()),
            _ => None,
        }
    }
}

impl<'a> FromJson<'a, FormattedDateConverter> for DateTime<Utc> {
    fn from_json(raw: &'a RawValue, cx: &Context<'_, FormattedDateConverter>) -> Option<Self> {
        cx.converter().parse(raw.as_str()?)
    }
}
