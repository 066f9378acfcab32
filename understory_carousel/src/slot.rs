// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pooled slot records and their derived positions.

use kurbo::Point;

use crate::{RelativeLabel, ShiftHint};

/// Stable identity of a slot within one [`WindowModel`][crate::WindowModel].
///
/// Identities are assigned at build time and survive every relabel and
/// recycle, so hosts can key their bound views by it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) u8);

impl SlotId {
    /// Position of this slot in the model's arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One pooled view position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slot {
    id: SlotId,
    absolute_index: usize,
    label: RelativeLabel,
    shift: ShiftHint,
    page_width: f64,
    pool_size: u8,
}

impl Slot {
    pub(crate) fn new(id: SlotId, page_width: f64, pool_size: u8) -> Self {
        Self {
            id,
            absolute_index: 0,
            label: RelativeLabel::Current,
            shift: ShiftHint::None,
            // Negative and NaN widths collapse to `0.0`.
            page_width: if page_width >= 0.0 { page_width } else { 0.0 },
            pool_size,
        }
    }

    pub(crate) fn assign(&mut self, absolute_index: usize, label: RelativeLabel) {
        self.absolute_index = absolute_index;
        self.label = label;
        self.shift = ShiftHint::None;
    }

    pub(crate) fn set_shift(&mut self, shift: ShiftHint) {
        self.shift = shift;
    }

    /// Stable identity of this slot.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// Index in the full item sequence this slot currently represents.
    #[must_use]
    pub const fn absolute_index(&self) -> usize {
        self.absolute_index
    }

    /// Distance of this slot from the focused slot.
    #[must_use]
    pub const fn label(&self) -> RelativeLabel {
        self.label
    }

    /// Recycle hint from the most recent step.
    #[must_use]
    pub const fn shift(&self) -> ShiftHint {
        self.shift
    }

    /// Returns `true` if this slot holds the focused item.
    #[must_use]
    pub const fn is_current(&self) -> bool {
        self.label.is_current()
    }

    /// Resting position of this slot in content coordinates.
    ///
    /// Pages are laid out left to right, one viewport width apart, so this is
    /// `(width * absolute_index, 0)`.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.page_width * self.absolute_index as f64, 0.0)
    }

    /// Position a recycled slot should animate in from.
    ///
    /// A slot tagged [`ShiftHint::FromLeftToRight`] is offset by the full pool
    /// width past its resting position; [`ShiftHint::FromRightToLeft`] offsets
    /// it by the same amount before it. Without a hint this equals
    /// [`Slot::position`].
    #[must_use]
    pub fn entry_position(&self) -> Point {
        let resting = self.position();
        let pool_extent = self.page_width * f64::from(self.pool_size);
        match self.shift {
            ShiftHint::None => resting,
            ShiftHint::FromLeftToRight => Point::new(resting.x + pool_extent, resting.y),
            ShiftHint::FromRightToLeft => Point::new(resting.x - pool_extent, resting.y),
        }
    }
}
