// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relative labels, shift hints, and scroll directions.

use core::fmt;

/// Signed distance of a slot from the focused slot.
///
/// Only the labels spanned by the pool are ever assigned: a centered five-slot
/// window uses `BeforePrevious..=AfterNext`, while a window pinned against
/// either end of the strip can reach the overflow labels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum RelativeLabel {
    /// Four items before the focused item.
    PreviousOverflow = -4,
    /// Three items before the focused item.
    BeforeBeforePrevious = -3,
    /// Two items before the focused item.
    BeforePrevious = -2,
    /// The item directly before the focused item.
    Previous = -1,
    /// The focused item.
    #[default]
    Current = 0,
    /// The item directly after the focused item.
    Next = 1,
    /// Two items after the focused item.
    AfterNext = 2,
    /// Three items after the focused item.
    AfterAfterNext = 3,
    /// Four items after the focused item.
    NextOverflow = 4,
}

impl RelativeLabel {
    /// Smallest representable offset.
    pub const MIN_OFFSET: isize = -4;
    /// Largest representable offset.
    pub const MAX_OFFSET: isize = 4;

    /// Returns the label for a signed `offset`, or `None` outside `-4..=4`.
    #[must_use]
    pub const fn from_offset(offset: isize) -> Option<Self> {
        Some(match offset {
            -4 => Self::PreviousOverflow,
            -3 => Self::BeforeBeforePrevious,
            -2 => Self::BeforePrevious,
            -1 => Self::Previous,
            0 => Self::Current,
            1 => Self::Next,
            2 => Self::AfterNext,
            3 => Self::AfterAfterNext,
            4 => Self::NextOverflow,
            _ => return None,
        })
    }

    /// Signed offset of this label from the focused slot.
    #[must_use]
    pub const fn offset(self) -> i8 {
        self as i8
    }

    /// Returns `true` for [`RelativeLabel::Current`].
    #[must_use]
    pub const fn is_current(self) -> bool {
        matches!(self, Self::Current)
    }
}

impl fmt::Display for RelativeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PreviousOverflow => "previous overflow",
            Self::BeforeBeforePrevious => "before before previous",
            Self::BeforePrevious => "before previous",
            Self::Previous => "previous",
            Self::Current => "current",
            Self::Next => "next",
            Self::AfterNext => "after next",
            Self::AfterAfterNext => "after after next",
            Self::NextOverflow => "next overflow",
        })
    }
}

/// Animation hint attached to a slot that was just recycled.
///
/// A recycled slot moves across the whole pool to reach its new edge index.
/// Hosts use the hint to animate it in from beyond the visible strip instead
/// of snapping it into place.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShiftHint {
    /// The slot keeps its place relative to its neighbours.
    #[default]
    None,
    /// The slot left the leading edge and now holds the new trailing index.
    FromLeftToRight,
    /// The slot left the trailing edge and now holds the new leading index.
    FromRightToLeft,
}

impl ShiftHint {
    /// Returns `true` unless this is [`ShiftHint::None`].
    #[must_use]
    pub const fn is_shifted(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Direction of a single scroll step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Toward lower absolute indices.
    Previous,
    /// Toward higher absolute indices.
    Next,
}

impl ScrollDirection {
    /// Signed index delta of one step in this direction.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Previous => Self::Next,
            Self::Next => Self::Previous,
        }
    }
}
