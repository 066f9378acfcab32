// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful controller that owns the focused index and the slot window.

use kurbo::Size;

use crate::logging::{debug, error};
use crate::{RelabelError, ScrollDirection, Slot, WindowModel};

/// Read-only configuration pulled by [`WindowEngine::build`].
///
/// Values are read once per build and cached; changing them requires another
/// build.
pub trait WindowSource {
    /// Size of one page. Only the width is used for positions.
    fn viewport_size(&self) -> Size;

    /// Number of items in the strip.
    fn total_items(&self) -> usize;

    /// Absolute index focused after a build. Clamped into range.
    fn initial_index(&self) -> usize;
}

/// Event sink notified by a [`WindowEngine`].
///
/// Callbacks run synchronously inside the engine call that triggered them.
pub trait WindowObserver {
    /// Content is needed for `slot`'s current absolute index.
    ///
    /// Called once per slot during a build, and once for the recycled slot of
    /// every step that recycles.
    fn on_content_requested(&mut self, slot: &Slot);

    /// A step completed. `recycled` is the absolute index newly introduced
    /// into the window, if any.
    fn on_window_updated(
        &mut self,
        direction: ScrollDirection,
        window: &WindowModel,
        recycled: Option<usize>,
    );

    /// A build finished with a focused slot. Hosts typically snap their scroll
    /// offset to [`WindowModel::current`]'s position here.
    fn on_declaration_finished(&mut self, window: &WindowModel);
}

/// Plain configuration for hosts that do not have a live scroll surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Size of one page.
    pub viewport: Size,
    /// Number of items in the strip.
    pub total_items: usize,
    /// Absolute index focused after a build.
    pub initial_index: usize,
}

impl WindowConfig {
    /// Creates a new configuration.
    #[must_use]
    pub const fn new(viewport: Size, total_items: usize, initial_index: usize) -> Self {
        Self {
            viewport,
            total_items,
            initial_index,
        }
    }
}

impl WindowSource for WindowConfig {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn total_items(&self) -> usize {
        self.total_items
    }

    fn initial_index(&self) -> usize {
        self.initial_index
    }
}

/// Outcome of a step that notified the observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Direction of the step.
    pub direction: ScrollDirection,
    /// Focused absolute index after the step.
    pub focused_index: usize,
    /// Absolute index newly introduced into the window, if any.
    pub recycled_index: Option<usize>,
}

/// Controller that maps a focused index onto a recycling slot window.
///
/// The engine pulls its configuration from a [`WindowSource`] at
/// [`build`](Self::build) time and pushes every change to a
/// [`WindowObserver`]. It moves one item per [`advance`](Self::advance) or
/// [`retreat`](Self::retreat); longer moves are repeated single steps (see
/// [`seek`](Self::seek)).
///
/// All operations take `&mut self` and run to completion before returning.
#[derive(Debug)]
pub struct WindowEngine<S, O> {
    source: S,
    observer: O,

    built: bool,
    viewport: Size,
    total_items: usize,
    focused: usize,
    window: WindowModel,
}

impl<S: WindowSource, O: WindowObserver> WindowEngine<S, O> {
    /// Creates an unbuilt engine. Nothing is read from `source` until [`build`](Self::build).
    #[must_use]
    pub fn new(source: S, observer: O) -> Self {
        Self {
            source,
            observer,
            built: false,
            viewport: Size::ZERO,
            total_items: 0,
            focused: 0,
            window: WindowModel::new(0, 0.0),
        }
    }

    /// Reads the configuration and lays out a fresh window.
    ///
    /// Requests content for every slot in ascending index order, then
    /// notifies [`WindowObserver::on_declaration_finished`] if a slot is
    /// focused. Calling it again discards the previous pool.
    ///
    /// A strip of three items focused on index 1 has no valid layout: the
    /// relabel is abandoned and the build sends nothing, leaving the pool
    /// unassigned. The first step that lays the pool out afterwards requests
    /// content for every slot before notifying the update.
    pub fn build(&mut self) {
        self.viewport = self.source.viewport_size();
        self.total_items = self.source.total_items();
        self.focused = self
            .source
            .initial_index()
            .min(self.total_items.saturating_sub(1));
        self.window = WindowModel::new(
            WindowModel::pool_size_for(self.total_items),
            self.viewport.width,
        );
        self.built = true;

        debug!(
            total_items = self.total_items,
            focused = self.focused,
            pool_size = self.window.len(),
            "building window"
        );
        if self.window.is_empty() {
            return;
        }

        if let Err(err) = self.window.relabel(self.focused, self.total_items, None) {
            log_abandoned(err, self.focused, None);
            return;
        }
        for slot in self.window.iter() {
            self.observer.on_content_requested(slot);
        }
        if self.window.current().is_some() {
            self.observer.on_declaration_finished(&self.window);
        }
    }

    /// Moves focus one item toward higher indices.
    ///
    /// Returns `None` without notifying when the engine is unbuilt, empty, or
    /// already focused on the last item.
    pub fn advance(&mut self) -> Option<Step> {
        if !self.built || self.total_items == 0 || self.focused + 1 >= self.total_items {
            return None;
        }
        self.focused += 1;
        self.step(ScrollDirection::Next)
    }

    /// Moves focus one item toward lower indices.
    ///
    /// Returns `None` without notifying when the engine is unbuilt, empty, or
    /// already focused on the first item. The bounds are checked before focus
    /// changes, exactly like [`advance`](Self::advance).
    pub fn retreat(&mut self) -> Option<Step> {
        if !self.built || self.total_items == 0 || self.focused == 0 {
            return None;
        }
        self.focused -= 1;
        self.step(ScrollDirection::Previous)
    }

    /// Steps one item at a time until `target` (clamped into range) is focused.
    ///
    /// Returns the number of steps that notified the observer.
    pub fn seek(&mut self, target: usize) -> usize {
        if !self.built || self.total_items == 0 {
            return 0;
        }
        let target = target.min(self.total_items - 1);
        let mut notified = 0;
        while self.focused != target {
            let before = self.focused;
            let step = if self.focused < target {
                self.advance()
            } else {
                self.retreat()
            };
            if step.is_some() {
                notified += 1;
            }
            if self.focused == before {
                break;
            }
        }
        notified
    }

    /// Index of the page nearest to a horizontal content offset.
    ///
    /// Offsets round to the nearest page and clamp into range. Returns `0`
    /// when the engine is unbuilt, empty, or has no positive page width.
    #[must_use]
    pub fn page_at_offset(&self, offset_x: f64) -> usize {
        let width = self.viewport.width;
        if !self.built || self.total_items == 0 || width.is_nan() || width <= 0.0 {
            return 0;
        }
        let page = offset_x / width + 0.5;
        if page.is_nan() || page <= 0.0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Page is positive here and is clamped to bounds immediately after the cast"
        )]
        let page = page as usize;
        page.min(self.total_items - 1)
    }

    /// Seeks to the page nearest to a horizontal content offset.
    ///
    /// This is how a host turns a settled scroll offset into engine steps.
    pub fn seek_to_offset(&mut self, offset_x: f64) -> usize {
        let target = self.page_at_offset(offset_x);
        self.seek(target)
    }

    fn step(&mut self, direction: ScrollDirection) -> Option<Step> {
        let was_assigned = self.window.is_assigned();
        let recycled = match self
            .window
            .relabel(self.focused, self.total_items, Some(direction))
        {
            Ok(recycled) => recycled,
            Err(err) => {
                log_abandoned(err, self.focused, Some(direction));
                return None;
            }
        };

        if !was_assigned {
            for slot in self.window.iter() {
                self.observer.on_content_requested(slot);
            }
        } else if let Some(index) = recycled {
            let slot = self.window.slot_for_index(index);
            debug_assert!(slot.is_some(), "recycled index {index} has no slot");
            if let Some(slot) = slot {
                self.observer.on_content_requested(slot);
            }
        }
        debug!(
            focused = self.focused,
            ?direction,
            recycled = ?recycled,
            "window updated"
        );
        self.observer
            .on_window_updated(direction, &self.window, recycled);

        Some(Step {
            direction,
            focused_index: self.focused,
            recycled_index: recycled,
        })
    }
}

#[cfg_attr(
    not(feature = "tracing"),
    allow(unused_variables, reason = "Only read by tracing events")
)]
fn log_abandoned(err: RelabelError, focused: usize, direction: Option<ScrollDirection>) {
    error!(%err, focused, ?direction, "relabel abandoned, keeping previous window");
}

impl<S, O> WindowEngine<S, O> {
    /// Returns `true` once [`build`](WindowEngine::build) has run.
    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// Focused absolute index.
    #[must_use]
    pub const fn focused_index(&self) -> usize {
        self.focused
    }

    /// Number of items cached at the last build.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Page size cached at the last build.
    #[must_use]
    pub const fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// The slot window.
    #[must_use]
    pub const fn window(&self) -> &WindowModel {
        &self.window
    }

    /// Returns a shared reference to the configuration source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the configuration source.
    ///
    /// Changes take effect at the next [`build`](WindowEngine::build).
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns a shared reference to the observer.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns a mutable reference to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the engine, returning its source and observer.
    #[must_use]
    pub fn into_parts(self) -> (S, O) {
        (self.source, self.observer)
    }
}
