// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Numeric conversion protocol.
//!
//! Every fixed-width integer, float and `bool` converts from the canonical
//! [`Number`] form. Conversions follow Rust `as` semantics: integers wrap when
//! narrowed, floats truncate toward zero (saturating at the bounds), and a
//! `bool` is `true` for any non-zero value.

use super::value::Number;

/// A type that can be produced from a canonical JSON number.
pub trait JsonNumber: Copy {
    /// Convert the canonical number into this type.
    fn from_number(number: Number) -> Self;

    /// The logical zero for this type (`0`, `0.0`, `false`).
    fn zero() -> Self {
        Self::from_number(Number::ZERO)
    }
}

/// Implements [`JsonNumber`] for primitive numeric types via `as` casts.
macro_rules! impl_json_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl JsonNumber for $ty {
                #[inline]
                fn from_number(number: Number) -> Self {
                    match number {
                        Number::PosInt(v) => v as $ty,
                        Number::NegInt(v) => v as $ty,
                        Number::Float(v) => v as $ty,
                    }
                }
            }
        )*
    };
}

impl_json_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl JsonNumber for bool {
    #[inline]
    fn from_number(number: Number) -> Self {
        !number.is_zero()
    }
}
