// Host-side tests for the virtual scroll tracker.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::ScrollTracker;

const DT: f32 = 1.0 / 60.0;

fn settle(tracker: &mut ScrollTracker) {
    for _ in 0..600 {
        tracker.tick(DT);
    }
}

#[test]
fn pixels_map_to_fraction_of_all_pages() {
    let mut s = ScrollTracker::new(4.0, true);
    // one viewport height is a quarter of the cycle
    s.scroll_by_pixels(800.0, 800.0);
    assert!((s.target - 0.25).abs() < 1e-6);
}

#[test]
fn offset_eases_to_target_and_delta_decays() {
    let mut s = ScrollTracker::new(4.0, true);
    s.scroll_by(0.3);
    let (first, first_delta) = s.tick(DT);
    assert!(first > 0.0 && first < 0.3);
    assert!(first_delta > 0.0);
    settle(&mut s);
    assert_eq!(s.offset, 0.3);
    assert_eq!(s.delta, 0.0);
}

#[test]
fn offset_moves_monotonically_toward_target() {
    let mut s = ScrollTracker::new(4.0, true);
    s.scroll_by(0.5);
    let mut prev = s.offset;
    for _ in 0..120 {
        let (offset, delta) = s.tick(DT);
        assert!(offset >= prev && offset <= 0.5);
        assert!(delta >= 0.0);
        prev = offset;
    }
}

#[test]
fn infinite_scroll_wraps_target_and_carries_offset() {
    let mut s = ScrollTracker::new(4.0, true);
    s.scroll_by(0.9);
    settle(&mut s);
    s.scroll_by(0.2);
    assert!((s.target - 0.1).abs() < 1e-5);
    // the eased offset keeps its distance to the target across the seam
    assert!((s.target - s.offset - 0.2).abs() < 1e-5);

    s.scroll_by(-0.3);
    assert!((s.target - 0.8).abs() < 1e-5);
    assert!(s.target >= 0.0 && s.target < 1.0);
}

#[test]
fn finite_scroll_clamps_to_document() {
    let mut s = ScrollTracker::new(4.0, false);
    s.scroll_by(-0.5);
    assert_eq!(s.target, 0.0);
    s.scroll_by(3.0);
    assert_eq!(s.target, 1.0);
}

#[test]
fn degenerate_input_is_ignored() {
    let mut s = ScrollTracker::new(4.0, true);
    s.scroll_by_pixels(f32::NAN, 800.0);
    s.scroll_by_pixels(100.0, 0.0);
    assert_eq!(s.target, 0.0);
}
