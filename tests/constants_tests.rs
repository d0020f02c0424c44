// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_times_are_positive() {
    assert!(SCALE_SMOOTH_SEC > 0.0);
    assert!(MATERIAL_SMOOTH_SEC > 0.0);
    assert!(CAMERA_SMOOTH_SEC > 0.0);
    assert!(SCROLL_SMOOTH_SEC > 0.0);
    // scale reacts quicker than the material parameters
    assert!(SCALE_SMOOTH_SEC < MATERIAL_SMOOTH_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_targets_have_expected_direction() {
    // hovered cards grow, round their corners more and zoom out of the image
    assert!(SCALE_TARGETS.0 > SCALE_TARGETS.1);
    assert!(EDGE_RADIUS_TARGETS.0 > EDGE_RADIUS_TARGETS.1);
    assert!(ZOOM_TARGETS.0 < ZOOM_TARGETS.1);
    // rounded corners never exceed half the card
    assert!(EDGE_RADIUS_TARGETS.0 <= CARD_WIDTH.min(CARD_HEIGHT) * 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_fits_inside_banner_and_fog() {
    assert!(CARD_COUNT >= 1);
    assert!(IMAGE_POOL_SIZE == 10);
    assert!(RING_RADIUS > 0.0);
    assert!(BANNER_RADIUS > RING_RADIUS);
    assert!(FOG_NEAR < FOG_FAR);
    // the resting camera sits just in front of the fog band
    assert!(CAMERA_REST_Z - RING_RADIUS > FOG_NEAR - 1.0);
    assert!(CAMERA_REST_Z + BANNER_RADIUS < FOG_FAR + 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_tunables_are_sane() {
    assert!(BANNER_ANISOTROPY >= 1 && BANNER_ANISOTROPY <= 16);
    assert!(MAX_FRAME_DELTA_SEC > 0.0 && MAX_FRAME_DELTA_SEC <= 0.25);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(FOG_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(SCROLL_PAGES >= 1.0);
}
