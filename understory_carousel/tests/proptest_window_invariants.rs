// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the slot window.
//!
//! For arbitrary strips and arbitrary step sequences:
//!
//! 1. The pool holds `min(5, total_items)` slots.
//! 2. Exactly one slot is focused after every notifying step.
//! 3. Slot indices form a contiguous ascending run inside the strip.
//! 4. Boundaries never recycle; short strips never recycle.
//! 5. A recycle is reported exactly when the window slides, and names the
//!    one index that entered it.
//! 6. Advance followed by retreat restores the window.

use kurbo::{Point, Size};
use proptest::prelude::*;
use understory_carousel::{
    MAX_POOL, RelativeLabel, ScrollDirection, ShiftHint, Slot, SlotId, WindowConfig, WindowEngine,
    WindowModel, WindowObserver,
};

#[derive(Debug, Default)]
struct Counter {
    requests: usize,
    updates: usize,
}

impl WindowObserver for Counter {
    fn on_content_requested(&mut self, _slot: &Slot) {
        self.requests += 1;
    }

    fn on_window_updated(&mut self, _: ScrollDirection, _: &WindowModel, _: Option<usize>) {
        self.updates += 1;
    }

    fn on_declaration_finished(&mut self, _: &WindowModel) {}
}

type Engine = WindowEngine<WindowConfig, Counter>;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Strips that never need an interior window with fewer than four slots.
fn strip_strategy() -> impl Strategy<Value = (usize, usize)> {
    prop_oneof![1_usize..=2, 4_usize..=60]
        .prop_flat_map(|total| (Just(total), 0..total))
}

fn steps_strategy() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..80)
}

fn engine(total_items: usize, initial_index: usize) -> Engine {
    let config = WindowConfig::new(Size::new(64.0, 48.0), total_items, initial_index);
    let mut engine = WindowEngine::new(config, Counter::default());
    engine.build();
    engine
}

fn snapshot(engine: &Engine) -> Vec<(SlotId, usize, RelativeLabel, Point)> {
    engine
        .window()
        .slots()
        .iter()
        .map(|s| (s.id(), s.absolute_index(), s.label(), s.position()))
        .collect()
}

fn check_window(engine: &Engine) -> Result<(), TestCaseError> {
    let window = engine.window();
    let total = engine.total_items();
    prop_assert_eq!(window.len(), total.min(MAX_POOL));

    let focused: Vec<_> = window.slots().iter().filter(|s| s.is_current()).collect();
    prop_assert_eq!(focused.len(), 1, "expected exactly one current slot");
    prop_assert_eq!(focused[0].absolute_index(), engine.focused_index());

    let indices: Vec<_> = window.iter().map(Slot::absolute_index).collect();
    for pair in indices.windows(2) {
        prop_assert_eq!(pair[0] + 1, pair[1], "window not contiguous: {:?}", indices);
    }
    prop_assert!(*indices.last().unwrap() < total);

    for slot in window.iter() {
        let offset = slot.absolute_index() as isize - engine.focused_index() as isize;
        prop_assert_eq!(isize::from(slot.label().offset()), offset);
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. Structural invariants hold after build and after every step
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_stays_well_formed((total, initial) in strip_strategy(), steps in steps_strategy()) {
        let mut engine = engine(total, initial);
        check_window(&engine)?;

        for forward in steps {
            let step = if forward { engine.advance() } else { engine.retreat() };
            if step.is_some() {
                check_window(&engine)?;
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Recycle cardinality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn recycles_exactly_when_the_window_slides(
        (total, initial) in strip_strategy(),
        steps in steps_strategy(),
    ) {
        let mut engine = engine(total, initial);
        prop_assert_eq!(engine.observer().requests, engine.window().len());

        for forward in steps {
            let before = engine.window().window_range().unwrap();
            let requests = engine.observer().requests;
            let step = if forward { engine.advance() } else { engine.retreat() };
            let Some(step) = step else {
                continue;
            };
            let after = engine.window().window_range().unwrap();
            let shifted: Vec<_> = engine
                .window()
                .iter()
                .filter(|s| s.shift().is_shifted())
                .collect();

            let at_boundary = step.focused_index == 0 || step.focused_index + 1 == total;
            if total <= MAX_POOL || before == after {
                prop_assert_eq!(step.recycled_index, None);
                prop_assert!(shifted.is_empty());
                prop_assert_eq!(engine.observer().requests, requests);
                continue;
            }

            prop_assert!(!at_boundary, "boundary steps never slide the window");
            let recycled = step.recycled_index.expect("sliding window recycles");
            prop_assert!(after.contains(&recycled) && !before.contains(&recycled));
            prop_assert_eq!(shifted.len(), 1);
            prop_assert_eq!(shifted[0].absolute_index(), recycled);
            let expected = match step.direction {
                ScrollDirection::Next => ShiftHint::FromLeftToRight,
                ScrollDirection::Previous => ShiftHint::FromRightToLeft,
            };
            prop_assert_eq!(shifted[0].shift(), expected);
            prop_assert_eq!(engine.observer().requests, requests + 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Advance followed by retreat is a round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn advance_then_retreat_round_trips(total in 4_usize..=60, seed in any::<usize>()) {
        // Interior focus with room to advance.
        let initial = 1 + seed % (total - 2);
        let mut engine = engine(total, initial);
        let before = snapshot(&engine);

        prop_assert!(engine.advance().is_some());
        prop_assert!(engine.retreat().is_some());
        prop_assert_eq!(engine.focused_index(), initial);
        prop_assert_eq!(snapshot(&engine), before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Seeking lands on the clamped target
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn seek_reaches_clamped_target((total, initial) in strip_strategy(), target in 0_usize..100) {
        let mut engine = engine(total, initial);
        let steps = engine.seek(target);
        let expected = target.min(total - 1);
        prop_assert_eq!(engine.focused_index(), expected);
        prop_assert_eq!(steps, expected.abs_diff(initial));
        prop_assert_eq!(engine.observer().updates, steps);
        check_window(&engine)?;
    }
}
