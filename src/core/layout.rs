use crate::core::constants::IMAGE_POOL_SIZE;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Where one card sits on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// 1-based card index; also selects the navigation target.
    pub index: usize,
    pub position: Vec3,
    /// Rotation about +Y.
    pub facing: f32,
    /// 1-based image number in the pool (`img{n}.png`).
    pub image: usize,
}

/// Angle of slot `i` on a ring of `count` slots.
#[inline]
pub fn slot_angle(i: usize, count: usize) -> f32 {
    (i as f32 / count.max(1) as f32) * TAU
}

#[inline]
pub fn placement(i: usize, count: usize, radius: f32) -> Placement {
    let angle = slot_angle(i, count);
    Placement {
        index: i + 1,
        position: Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius),
        facing: PI + angle,
        image: i % IMAGE_POOL_SIZE + 1,
    }
}

/// Lay `count` cards out evenly on a horizontal circle of `radius`.
pub fn layout(count: usize, radius: f32) -> Vec<Placement> {
    (0..count).map(|i| placement(i, count, radius)).collect()
}

fn join(public_url: &str, path: &str) -> String {
    format!("{}/{}", public_url.trim_end_matches('/'), path)
}

pub fn card_image_url(public_url: &str, image: usize) -> String {
    join(public_url, &format!("img{}.png", image))
}

pub fn banner_texture_url(public_url: &str) -> String {
    join(public_url, "zerominu.png")
}

/// Page opened when card `index` is clicked.
pub fn card_page_url(public_url: &str, index: usize) -> String {
    join(public_url, &format!("pages/img{}.php", index))
}
