// Host-side tests for environment-derived configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::core::config::*;
use crate::core::constants::{CARD_COUNT, RING_RADIUS};

const IPHONE: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/124.0 Mobile";
const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/124.0";

#[test]
fn mobile_platforms_are_detected() {
    assert!(is_mobile_user_agent(IPHONE));
    assert!(is_mobile_user_agent(ANDROID));
    assert!(is_mobile_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)"));
    assert!(is_mobile_user_agent("Mozilla/5.0 (iPod touch; CPU iPhone OS 12_0)"));
    assert!(is_mobile_user_agent("ANDROID"));
}

#[test]
fn desktop_and_empty_agents_are_not_mobile() {
    assert!(!is_mobile_user_agent(DESKTOP));
    assert!(!is_mobile_user_agent(""));
}

#[test]
fn viewport_depends_on_device_class() {
    let mobile = AppConfig::from_environment(IPHONE, "").viewport;
    assert!(mobile.mobile);
    assert_eq!(mobile.camera_distance, 50.0);
    assert_eq!(mobile.fov_y_deg, 30.0);

    let desktop = AppConfig::from_environment(DESKTOP, "").viewport;
    assert!(!desktop.mobile);
    assert_eq!(desktop.camera_distance, 100.0);
    assert_eq!(desktop.fov_y_deg, 15.0);
}

#[test]
fn session_defaults_are_fixed() {
    let config = AppConfig::from_environment(DESKTOP, "/gallery/");
    assert_eq!(config.card_count, CARD_COUNT);
    assert_eq!(config.radius, RING_RADIUS);
    assert_eq!(config.pages, 4.0);
    assert!(config.infinite);
    assert_eq!(config.public_url, "/gallery");
    assert_eq!(AppConfig::default().public_url, "");
}
