// Host-side tests for the carousel ring layout and asset paths.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
}

use crate::core::layout::*;
use std::f32::consts::{PI, TAU};

const TOL: f32 = 1e-5;

#[test]
fn every_card_sits_on_the_ring() {
    for count in 1..=24 {
        for &radius in &[0.5_f32, 1.4, 3.0] {
            let cards = layout(count, radius);
            assert_eq!(cards.len(), count);
            for c in &cards {
                let r = (c.position.x * c.position.x + c.position.z * c.position.z).sqrt();
                assert!((r - radius).abs() < TOL, "count={count} r={r}");
                assert_eq!(c.position.y, 0.0);
            }
        }
    }
}

#[test]
fn facing_advances_uniformly() {
    for count in [3usize, 8, 13] {
        let cards = layout(count, 1.4);
        let step = TAU / count as f32;
        for pair in cards.windows(2) {
            assert!((pair[1].facing - pair[0].facing - step).abs() < TOL);
        }
    }
}

#[test]
fn eight_card_ring_matches_reference_positions() {
    let cards = layout(8, 1.4);
    assert!((cards[0].position.x).abs() < TOL);
    assert!((cards[0].position.z - 1.4).abs() < TOL);
    assert!((cards[0].facing - PI).abs() < TOL);

    assert!((cards[2].position.x - 1.4).abs() < TOL);
    assert!((cards[2].position.z).abs() < TOL);
    assert!((cards[2].facing - (PI + PI / 2.0)).abs() < TOL);
}

#[test]
fn indices_are_one_based_and_images_cycle_through_pool() {
    let cards = layout(23, 1.4);
    for (i, c) in cards.iter().enumerate() {
        assert_eq!(c.index, i + 1);
        assert_eq!(c.image, i % 10 + 1);
    }
    assert_eq!(cards[9].image, 10);
    assert_eq!(cards[10].image, 1);
}

#[test]
fn layout_is_deterministic() {
    assert_eq!(layout(8, 1.4), layout(8, 1.4));
    assert_eq!(placement(5, 8, 1.4), layout(8, 1.4)[5]);
}

#[test]
fn asset_and_page_urls_use_public_url() {
    assert_eq!(card_image_url("", 3), "/img3.png");
    assert_eq!(card_image_url("/gallery", 10), "/gallery/img10.png");
    assert_eq!(card_image_url("/gallery/", 1), "/gallery/img1.png");
    assert_eq!(banner_texture_url("/gallery"), "/gallery/zerominu.png");
    assert_eq!(card_page_url("", 3), "/pages/img3.php");
    assert_eq!(card_page_url("https://example.org/site", 7), "https://example.org/site/pages/img7.php");
}
