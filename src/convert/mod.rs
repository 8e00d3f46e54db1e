// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Custom conversion hook.
//!
//! [`FromJson`] is the single extension point every typed accessor funnels
//! through: primitive fallbacks, array elements and enum raw values all
//! decode via `T::from_json`. Implementations are selected per
//! (target type, converter tag) pair, so one type can decode differently
//! under different tags:
//!
//! ```
//! use keyjson::{Context, Converter, DefaultConverter, FromJson, RawValue};
//!
//! #[derive(Debug, Clone)]
//! struct Cents;
//!
//! impl Converter for Cents {
//!     fn name(&self) -> &'static str {
//!         "cents"
//!     }
//! }
//!
//! struct Price(u64);
//!
//! impl<'a> FromJson<'a, DefaultConverter> for Price {
//!     fn from_json(raw: &'a RawValue, _cx: &Context<'_, DefaultConverter>) -> Option<Self> {
//!         raw.as_number().map(|n| Price((n.as_f64() * 100.0).round() as u64))
//!     }
//! }
//!
//! impl<'a> FromJson<'a, Cents> for Price {
//!     fn from_json(raw: &'a RawValue, _cx: &Context<'_, Cents>) -> Option<Self> {
//!         raw.as_number().and_then(|n| n.as_u64()).map(Price)
//!     }
//! }
//! ```

pub mod cache;
pub mod date;

pub use cache::FormatCache;
pub use date::{FormattedDateConverter, RFC3339_FORMAT};

use crate::core::{Context, Converter, DefaultConverter, JsonNumber, RawValue};

/// Decode a target type from a raw value under converter tag `C`.
///
/// Returns `None` when the raw value has the wrong shape for this type under
/// this tag. The lifetime `'a` lets implementations borrow from the tree.
pub trait FromJson<'a, C: Converter = DefaultConverter>: Sized {
    /// Decode `raw`, using `cx` to inspect the originating node.
    fn from_json(raw: &'a RawValue, cx: &Context<'_, C>) -> Option<Self>;
}

macro_rules! impl_from_json_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a, C: Converter> FromJson<'a, C> for $ty {
                #[inline]
                fn from_json(raw: &'a RawValue, _cx: &Context<'_, C>) -> Option<Self> {
                    raw.as_number().map(<$ty as JsonNumber>::from_number)
                }
            }
        )*
    };
}

impl_from_json_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool);

impl<'a, C: Converter> FromJson<'a, C> for String {
    fn from_json(raw: &'a RawValue, _cx: &Context<'_, C>) -> Option<Self> {
        raw.as_str().map(str::to_owned)
    }
}

impl<'a, C: Converter> FromJson<'a, C> for &'a str {
    fn from_json(raw: &'a RawValue, _cx: &Context<'_, C>) -> Option<Self> {
        raw.as_str()
    }
}

impl<'a, C: Converter> FromJson<'a, C> for &'a RawValue {
    fn from_json(raw: &'a RawValue, _cx: &Context<'_, C>) -> Option<Self> {
        Some(raw)
    }
}

impl<'a, C: Converter> FromJson<'a, C> for RawValue {
    fn from_json(raw: &'a RawValue, _cx: &Context<'_, C>) -> Option<Self> {
        Some(raw.clone())
    }
}

/// Nested arrays decode atomically: one failing element fails the array.
impl<'a, C: Converter, T: FromJson<'a, C>> FromJson<'a, C> for Vec<T> {
    fn from_json(raw: &'a RawValue, cx: &Context<'_, C>) -> Option<Self> {
        raw.as_array()?
            .iter()
            .map(|item| T::from_json(item, cx))
            .collect()
    }
}
