// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal consistency errors raised while relabelling a window.

use thiserror::Error;

/// Reasons a relabel was abandoned.
///
/// These signal a violated precondition rather than a transient condition.
/// The engine logs them and keeps the previous slot assignment; they never
/// cross the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RelabelError {
    /// The focused index is away from both ends but the pool is too small to
    /// build a centered window around it.
    #[error("pool of {pool_size} slots is too small for an interior window (need at least 4)")]
    PoolTooSmall {
        /// Slots in the pool.
        pool_size: usize,
    },
    /// A slot would need a relative offset no [`RelativeLabel`][crate::RelativeLabel]
    /// can express.
    #[error("relative offset {offset} is outside the label range")]
    LabelOutOfRange {
        /// Offending offset from the focused slot.
        offset: isize,
    },
    /// The focused index lies outside the strip.
    #[error("focused index {focused} is outside a strip of {total_items} items")]
    FocusOutOfRange {
        /// Focused absolute index.
        focused: usize,
        /// Items in the strip.
        total_items: usize,
    },
    /// The pool holds more slots than the strip has items.
    #[error("pool of {pool_size} slots exceeds a strip of {total_items} items")]
    PoolExceedsItems {
        /// Slots in the pool.
        pool_size: usize,
        /// Items in the strip.
        total_items: usize,
    },
    /// The window would start before the first item.
    #[error("window around index {focused} would start at offset {offset}, before the first item")]
    WindowUnderflow {
        /// Focused absolute index.
        focused: usize,
        /// Offset of the leading slot from the focused slot.
        offset: isize,
    },
}
