// Host-side tests for the easing step.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod easing {
        include!("../src/core/easing.rs");
    }
}

use crate::core::easing::*;
use glam::Vec3;

#[test]
fn already_at_target_is_a_fixed_point() {
    for &v in &[-3.0_f32, 0.0, 0.1, 1.15, 42.0] {
        for &t in &[0.05_f32, 0.2, 1.0] {
            for &d in &[0.0_f32, 0.016, 0.5] {
                assert_eq!(damp(v, v, t, d), v);
            }
        }
    }
}

#[test]
fn step_moves_toward_target_without_passing_it() {
    let cases = [(0.0_f32, 1.0_f32), (1.0, 0.0), (-5.0, 3.0), (1.5, 1.0), (0.1, 0.25)];
    for (current, target) in cases {
        for &delta in &[0.001_f32, 0.016, 0.1, 1.0, 10.0] {
            let next = damp(current, target, 0.2, delta);
            let before = (target - current).abs();
            let after = (target - next).abs();
            assert!(after < before, "{current}->{target} d={delta}: {next}");
            // same side of the target, or exactly on it
            assert!((next - target) * (current - target) >= 0.0);
        }
    }
}

#[test]
fn repeated_steps_converge_monotonically_in_bounded_steps() {
    for &start in &[-100.0_f32, -1.0, 0.0, 0.5, 2.0, 100.0] {
        let target = 1.0;
        let mut v = start;
        let mut prev_dist = (target - v).abs();
        let mut steps = 0;
        while v != target {
            v = damp(v, target, 0.3, 1.0 / 60.0);
            let dist = (target - v).abs();
            assert!(dist <= prev_dist);
            prev_dist = dist;
            steps += 1;
            assert!(steps < 2_000, "did not converge from {start}");
        }
    }
}

#[test]
fn smaller_smoothing_time_converges_faster() {
    let fast = damp(0.0, 1.0, 0.1, 0.016);
    let slow = damp(0.0, 1.0, 0.3, 0.016);
    assert!(fast > slow);
}

#[test]
fn zero_delta_leaves_value_unchanged() {
    assert_eq!(damp(0.0, 1.0, 0.2, 0.0), 0.0);
    assert_eq!(decay_factor(0.2, 0.0), 1.0);
    // negative frame deltas are treated as zero
    assert_eq!(damp(0.0, 1.0, 0.2, -0.5), 0.0);
}

#[test]
fn decay_factor_stays_in_unit_interval() {
    for &d in &[0.0_f32, 0.001, 0.1, 1.0, 100.0] {
        let f = decay_factor(0.25, d);
        assert!(f > 0.0 && f <= 1.0, "factor {f} at delta {d}");
    }
}

#[test]
fn values_within_eps_snap_to_target() {
    assert_eq!(damp(1.0005, 1.0, 0.2, 0.016), 1.0);
    assert_eq!(damp_with_eps(1.05, 1.0, 0.2, 0.016, 0.1), 1.0);
}

#[test]
fn damp3_eases_each_component() {
    let current = Vec3::new(0.0, 0.0, 100.0);
    let target = Vec3::new(-1.0, 1.5, 10.0);
    let next = damp3(current, target, 0.3, 0.016);
    assert_eq!(next.x, damp(0.0, -1.0, 0.3, 0.016));
    assert_eq!(next.y, damp(0.0, 1.5, 0.3, 0.016));
    assert_eq!(next.z, damp(100.0, 10.0, 0.3, 0.016));
}
