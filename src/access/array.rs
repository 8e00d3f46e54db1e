// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Array materialization.
//!
//! Raw arrays convert element by element through [`FromJson`], with the
//! owning node as conversion context. Two policies decide what happens when
//! an element fails:
//!
//! - [`ArrayPolicy::Atomic`]: the whole array fails; partial lists are never
//!   surfaced.
//! - [`ArrayPolicy::Lenient`]: failing elements are dropped, survivors keep
//!   their order. The result never fails, but may be incomplete. Drops are
//!   logged at debug level.

use serde::{Deserialize, Serialize};

use super::node::ValueNode;
use crate::convert::FromJson;
use crate::core::{Converter, UNKNOWN_KEY};

/// What to do when an array element fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayPolicy {
    /// All elements must convert.
    #[default]
    Atomic,
    /// Failing elements are dropped.
    Lenient,
}

impl ArrayPolicy {
    /// Check if this is the atomic policy.
    pub fn is_atomic(&self) -> bool {
        matches!(self, ArrayPolicy::Atomic)
    }
}

/// Convert every item with `convert`, applying `policy` to failures.
///
/// Returns `None` only under the atomic policy.
pub(crate) fn collect_with_policy<I, T, F>(
    items: I,
    policy: ArrayPolicy,
    key: Option<&str>,
    mut convert: F,
) -> Option<Vec<T>>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> Option<T>,
{
    let total = items.len();
    let mut values = Vec::with_capacity(total);

    for (index, item) in items.enumerate() {
        match convert(item) {
            Some(value) => values.push(value),
            None if policy.is_atomic() => {
                tracing::trace!(
                    key = key.unwrap_or(UNKNOWN_KEY),
                    index,
                    total,
                    "atomic array decode failed"
                );
                return None;
            }
            None => {}
        }
    }

    let dropped = total - values.len();
    if dropped > 0 {
        tracing::debug!(
            key = key.unwrap_or(UNKNOWN_KEY),
            dropped,
            total,
            "lenient array decode dropped elements"
        );
    }

    Some(values)
}

impl<'a, K, C: Converter> ValueNode<'a, K, C> {
    /// Decode an array of `T`, all-or-nothing.
    pub fn array<T: FromJson<'a, C>>(&self) -> Option<Vec<T>> {
        self.array_with(ArrayPolicy::Atomic)
    }

    /// Decode an array of `T` under `policy`.
    ///
    /// `None` if the value is not an array, or if an element fails under
    /// the atomic policy.
    pub fn array_with<T: FromJson<'a, C>>(&self, policy: ArrayPolicy) -> Option<Vec<T>> {
        let items = self.raw_array()?;
        let cx = self.context();
        collect_with_policy(items.iter(), policy, self.key(), |item| {
            T::from_json(item, &cx)
        })
    }

    /// Decode an array of `T` under `policy`, or an empty list when that
    /// fails.
    pub fn array_or_empty<T: FromJson<'a, C>>(&self, policy: ArrayPolicy) -> Vec<T> {
        self.array_with(policy).unwrap_or_default()
    }
}
