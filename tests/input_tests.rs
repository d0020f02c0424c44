// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;

fn unit_triangle_at_z(z: f32) -> [Vec3; 3] {
    [
        Vec3::new(-1.0, -1.0, z),
        Vec3::new(1.0, -1.0, z),
        Vec3::new(0.0, 1.0, z),
    ]
}

#[test]
fn ray_triangle_hits_facing_triangle() {
    let t = ray_triangle(Vec3::ZERO, Vec3::Z, unit_triangle_at_z(5.0));
    assert!((t.unwrap() - 5.0).abs() < 1e-5);
}

#[test]
fn ray_triangle_is_double_sided() {
    let tri = unit_triangle_at_z(5.0);
    let back = [tri[0], tri[2], tri[1]];
    assert!((ray_triangle(Vec3::ZERO, Vec3::Z, back).unwrap() - 5.0).abs() < 1e-5);
}

#[test]
fn ray_triangle_misses_outside_and_behind() {
    // passes beside the triangle
    assert!(ray_triangle(Vec3::new(3.0, 0.0, 0.0), Vec3::Z, unit_triangle_at_z(5.0)).is_none());
    // triangle is behind the origin
    assert!(ray_triangle(Vec3::ZERO, Vec3::Z, unit_triangle_at_z(-5.0)).is_none());
    // parallel to the triangle plane
    assert!(ray_triangle(Vec3::ZERO, Vec3::X, unit_triangle_at_z(5.0)).is_none());
}

#[test]
fn click_on_card_opens_it_once() {
    let mut click = ClickTracker::default();
    click.press(Some(3), Vec2::new(100.0, 100.0));
    assert_eq!(click.release(Some(3), Vec2::new(101.0, 100.0)), Some(3));
    // a stray second release without a press does nothing
    assert_eq!(click.release(Some(3), Vec2::new(101.0, 100.0)), None);
}

#[test]
fn hover_alone_never_clicks() {
    let mut click = ClickTracker::default();
    click.moved(Vec2::new(10.0, 10.0));
    assert_eq!(click.release(Some(3), Vec2::new(10.0, 10.0)), None);
}

#[test]
fn drag_suppresses_click() {
    let mut click = ClickTracker::default();
    click.press(Some(2), Vec2::new(100.0, 100.0));
    click.moved(Vec2::new(100.0, 140.0));
    // back near the start, but the gesture already travelled
    assert_eq!(click.release(Some(2), Vec2::new(100.0, 101.0)), None);
}

#[test]
fn release_over_other_card_or_empty_space_does_not_click() {
    let mut click = ClickTracker::default();
    click.press(Some(2), Vec2::ZERO);
    assert_eq!(click.release(Some(5), Vec2::ZERO), None);

    click.press(Some(2), Vec2::ZERO);
    assert_eq!(click.release(None, Vec2::ZERO), None);

    click.press(None, Vec2::ZERO);
    assert_eq!(click.release(Some(2), Vec2::ZERO), None);
}

#[test]
fn cancel_drops_pending_press() {
    let mut click = ClickTracker::default();
    click.press(Some(1), Vec2::ZERO);
    click.cancel();
    assert_eq!(click.release(Some(1), Vec2::ZERO), None);
}

#[test]
fn css_px_to_ndc_maps_corners_and_center() {
    assert_eq!(css_px_to_ndc(Vec2::new(400.0, 300.0), 800.0, 600.0), Vec2::ZERO);
    assert_eq!(css_px_to_ndc(Vec2::ZERO, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(
        css_px_to_ndc(Vec2::new(800.0, 600.0), 800.0, 600.0),
        Vec2::new(1.0, -1.0)
    );
    assert_eq!(css_px_to_ndc(Vec2::new(5.0, 5.0), 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn wheel_turns_ring_unless_zooming() {
    assert!(wheel_scrolls_ring(false, 120.0));
    assert!(wheel_scrolls_ring(false, -3.0));
    // ctrl+wheel and trackpad pinch stay with the browser
    assert!(!wheel_scrolls_ring(true, 120.0));
    // horizontal-only or broken events do not swallow the page scroll
    assert!(!wheel_scrolls_ring(false, 0.0));
    assert!(!wheel_scrolls_ring(false, f64::NAN));
}
