// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-capacity slot pool and the relabel algorithm.

use core::ops::Range;

use smallvec::SmallVec;

use crate::logging::trace;
use crate::{RelabelError, RelativeLabel, ScrollDirection, ShiftHint, Slot, SlotId};

/// Largest number of slots a window ever holds.
pub const MAX_POOL: usize = 5;

/// Smallest pool that can lay out a window away from both ends of the strip.
const MIN_INTERIOR_POOL: usize = 4;

/// A recycle decided while relabelling.
#[derive(Copy, Clone, Debug)]
struct Recycle {
    /// Newly introduced absolute index.
    index: usize,
    /// Window position of the recycled slot after rotation.
    window_pos: usize,
    shift: ShiftHint,
}

/// The pooled slots of one built window.
///
/// Slots live in a fixed arena and keep their [`SlotId`] for the lifetime of
/// the model. Window order (ascending absolute index) is the arena rotated by
/// `head`: window position `i` is arena slot `(head + i) % len`. Recycling a
/// slot is a rotation of `head` followed by a rewrite of every slot's index
/// and label, so no slot is ever allocated or dropped after [`WindowModel::new`].
#[derive(Clone, Debug)]
pub struct WindowModel {
    slots: SmallVec<[Slot; MAX_POOL]>,
    head: usize,
    assigned: bool,
}

impl WindowModel {
    /// Pool size used for a strip of `total_items` items: `min(MAX_POOL, total_items)`.
    #[must_use]
    pub const fn pool_size_for(total_items: usize) -> usize {
        if total_items < MAX_POOL {
            total_items
        } else {
            MAX_POOL
        }
    }

    /// Creates a model with `pool_size` unassigned slots, one page `page_width` wide.
    ///
    /// `pool_size` is capped at [`MAX_POOL`].
    #[must_use]
    pub fn new(pool_size: usize, page_width: f64) -> Self {
        let pool_size = pool_size.min(MAX_POOL);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Pool size is capped at MAX_POOL, which fits in a u8"
        )]
        let slots = (0..pool_size)
            .map(|i| Slot::new(SlotId(i as u8), page_width, pool_size as u8))
            .collect();
        Self {
            slots,
            head: 0,
            assigned: false,
        }
    }

    /// Number of slots in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the pool has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` once a relabel has assigned indices to the slots.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// Slots in arena order, which is stable across steps.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slots in window order (ascending absolute index).
    pub fn iter(&self) -> impl Iterator<Item = &Slot> + '_ {
        let len = self.slots.len();
        (0..len).map(move |i| &self.slots[(self.head + i) % len])
    }

    /// Looks up a slot by identity.
    #[must_use]
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    /// The slot holding the focused item, if the model has been assigned.
    #[must_use]
    pub fn current(&self) -> Option<&Slot> {
        if !self.assigned {
            return None;
        }
        self.slots.iter().find(|slot| slot.is_current())
    }

    /// The slot currently holding `absolute_index`, if any.
    #[must_use]
    pub fn slot_for_index(&self, absolute_index: usize) -> Option<&Slot> {
        if !self.assigned {
            return None;
        }
        self.slots
            .iter()
            .find(|slot| slot.absolute_index() == absolute_index)
    }

    /// Absolute indices covered by the window, once assigned.
    #[must_use]
    pub fn window_range(&self) -> Option<Range<usize>> {
        if !self.assigned || self.slots.is_empty() {
            return None;
        }
        let start = self.slots[self.head].absolute_index();
        Some(start..start + self.slots.len())
    }

    /// Reassigns index, label, and shift hint of every slot around `focused`.
    ///
    /// - At the left boundary (`focused == 0`) the window starts at the
    ///   focused item; at the right boundary it ends there. Boundaries never
    ///   recycle.
    /// - Away from the boundaries the window is centered (`-2..=2` for five
    ///   slots), skewed right at `focused == 1` and skewed left at
    ///   `focused == total_items - 2`. This needs at least four slots.
    /// - When the window slides by one item in `direction` and the strip is
    ///   longer than [`MAX_POOL`], the slot pushed out of one edge is rotated
    ///   to the other, tagged with a [`ShiftHint`], and its new absolute index
    ///   is returned.
    ///
    /// Pass `None` as the direction for a fresh layout (for example at build
    /// time or after a jump). It never recycles and restarts the rotation, so
    /// the window may land anywhere in the strip.
    ///
    /// With `Some(direction)` the call is one step: `focused` must differ from
    /// the previous focus by at most one item in that direction. Larger moves
    /// are a caller bug (debug assertion); in release builds they relayout
    /// without recycling.
    ///
    /// On error the previous assignment is left untouched.
    pub fn relabel(
        &mut self,
        focused: usize,
        total_items: usize,
        direction: Option<ScrollDirection>,
    ) -> Result<Option<usize>, RelabelError> {
        let pool_size = self.slots.len();
        if pool_size == 0 {
            return Ok(None);
        }
        if focused >= total_items {
            return Err(RelabelError::FocusOutOfRange {
                focused,
                total_items,
            });
        }
        if pool_size > total_items {
            return Err(RelabelError::PoolExceedsItems {
                pool_size,
                total_items,
            });
        }

        let leading = leading_offset(focused, total_items, pool_size)?;
        let start = focused
            .checked_add_signed(leading)
            .ok_or(RelabelError::WindowUnderflow {
                focused,
                offset: leading,
            })?;

        let mut labels = [RelativeLabel::Current; MAX_POOL];
        for (i, label) in labels.iter_mut().take(pool_size).enumerate() {
            #[allow(
                clippy::cast_possible_wrap,
                reason = "Window positions are below MAX_POOL"
            )]
            let offset = leading + i as isize;
            *label = RelativeLabel::from_offset(offset)
                .ok_or(RelabelError::LabelOutOfRange { offset })?;
        }

        let recycle = self.rotate(start, total_items, direction);
        for (i, label) in labels.iter().take(pool_size).enumerate() {
            let slot = &mut self.slots[(self.head + i) % pool_size];
            slot.assign(start + i, *label);
        }
        self.assigned = true;

        let Some(recycle) = recycle else {
            return Ok(None);
        };
        let slot = &mut self.slots[(self.head + recycle.window_pos) % pool_size];
        slot.set_shift(recycle.shift);
        trace!(
            slot = slot.id().index(),
            index = recycle.index,
            shift = ?recycle.shift,
            "recycled slot"
        );
        Ok(Some(recycle.index))
    }

    /// Rotates `head` if the window starting at `start` slid by one item.
    fn rotate(
        &mut self,
        start: usize,
        total_items: usize,
        direction: Option<ScrollDirection>,
    ) -> Option<Recycle> {
        let Some(direction) = direction else {
            self.head = 0;
            return None;
        };
        if !self.assigned || total_items <= MAX_POOL {
            return None;
        }
        let pool_size = self.slots.len();
        let previous = self.slots[self.head].absolute_index();
        if start == previous {
            return None;
        }

        let single_step = match direction {
            ScrollDirection::Next => start == previous + 1,
            ScrollDirection::Previous => start + 1 == previous,
        };
        debug_assert!(
            single_step,
            "window moved from {previous} to {start} in a single {direction:?} step"
        );

        match direction {
            ScrollDirection::Next if single_step => {
                self.head = (self.head + 1) % pool_size;
                Some(Recycle {
                    index: start + pool_size - 1,
                    window_pos: pool_size - 1,
                    shift: ShiftHint::FromLeftToRight,
                })
            }
            ScrollDirection::Previous if single_step => {
                self.head = (self.head + pool_size - 1) % pool_size;
                Some(Recycle {
                    index: start,
                    window_pos: 0,
                    shift: ShiftHint::FromRightToLeft,
                })
            }
            _ => None,
        }
    }
}

/// Offset of the leading slot from the focused slot.
fn leading_offset(
    focused: usize,
    total_items: usize,
    pool_size: usize,
) -> Result<isize, RelabelError> {
    if focused == 0 {
        return Ok(0);
    }
    if focused + 1 == total_items {
        #[allow(
            clippy::cast_possible_wrap,
            reason = "Pool size is capped at MAX_POOL"
        )]
        return Ok(1 - pool_size as isize);
    }
    if pool_size < MIN_INTERIOR_POOL {
        return Err(RelabelError::PoolTooSmall { pool_size });
    }
    Ok(if focused == 1 {
        -1
    } else if focused + 2 == total_items && pool_size > MIN_INTERIOR_POOL {
        -3
    } else {
        -2
    })
}
