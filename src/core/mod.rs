pub mod config;
pub mod constants;
pub mod easing;
pub mod geometry;
pub mod layout;
pub mod scene;
pub mod scroll;

// Shaders bundled as string constants
pub static CARD_WGSL: &str = include_str!("../../shaders/card.wgsl");
pub static BANNER_WGSL: &str = include_str!("../../shaders/banner.wgsl");
