// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a recycling slot window for paged horizontal scrolling.
//!
//! A paged strip of `0..total_items` pages is shown through a small, fixed pool
//! of view slots (at most [`MAX_POOL`]). As the user pages forward or backward
//! one item at a time, the pool is relabelled in place: each [`Slot`] gets an
//! absolute item index and a [`RelativeLabel`] saying how far it is from the
//! focused item, and the slot pushed off one edge of the window is recycled to
//! the other edge with a [`ShiftHint`] describing how it moved.
//!
//! The core concepts are:
//!
//! - [`WindowModel`]: the slot pool and its relabel algorithm. Slots keep a
//!   stable [`SlotId`] for the lifetime of a build.
//! - [`WindowEngine`]: a controller that owns the focused index, pulls its
//!   configuration from a [`WindowSource`], and pushes changes to a
//!   [`WindowObserver`].
//! - [`Step`]: what a successful [`WindowEngine::advance`] or
//!   [`WindowEngine::retreat`] did, including the recycled index (if any).
//!
//! This crate deliberately does **not** know about views, scroll containers,
//! or content loading. Host frameworks are responsible for:
//!
//! - Creating one view per slot when [`WindowObserver::on_content_requested`]
//!   fires during a build, keyed by [`Slot::id`].
//! - Translating settled scroll offsets into engine steps (for example with
//!   [`WindowEngine::seek_to_offset`]).
//! - Re-applying each slot's [`Slot::position`] after
//!   [`WindowObserver::on_window_updated`], and loading content for the
//!   recycled index.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_carousel::{
//!     ScrollDirection, ShiftHint, Slot, WindowConfig, WindowEngine, WindowModel, WindowObserver,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     loads: Vec<usize>,
//! }
//!
//! impl WindowObserver for Host {
//!     fn on_content_requested(&mut self, slot: &Slot) {
//!         self.loads.push(slot.absolute_index());
//!     }
//!
//!     fn on_window_updated(&mut self, _: ScrollDirection, _: &WindowModel, _: Option<usize>) {}
//!
//!     fn on_declaration_finished(&mut self, _: &WindowModel) {}
//! }
//!
//! // Fifteen pages, each 100 logical pixels wide, starting on page 8.
//! let config = WindowConfig::new(Size::new(100.0, 60.0), 15, 8);
//! let mut engine = WindowEngine::new(config, Host::default());
//! engine.build();
//! assert_eq!(engine.observer().loads, [6, 7, 8, 9, 10]);
//!
//! // Paging forward recycles the slot that held page 6 into page 11.
//! let step = engine.advance().unwrap();
//! assert_eq!(step.recycled_index, Some(11));
//! let recycled = engine.window().slot_for_index(11).unwrap();
//! assert_eq!(recycled.shift(), ShiftHint::FromLeftToRight);
//! assert_eq!(engine.window().current().unwrap().position().x, 900.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `debug`/`trace` events for builds, steps, and recycles,
//!   and `error` events when a relabel is abandoned.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod error;
mod label;
mod logging;
mod slot;
mod window;

pub use engine::{Step, WindowConfig, WindowEngine, WindowObserver, WindowSource};
pub use error::RelabelError;
pub use label::{RelativeLabel, ScrollDirection, ShiftHint};
pub use slot::{Slot, SlotId};
pub use window::{MAX_POOL, WindowModel};
