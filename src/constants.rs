// Rendering and DOM tuning for the web frontend.
//
// Scene behaviour (targets, smoothing, layout) lives in `core::constants`;
// this file only holds what the renderer and the event wiring need.

// Fog, linear between near and far view depth. Colour is #a79 in linear space.
pub const FOG_COLOR: [f32; 4] = [0.402, 0.184, 0.318, 1.0];
pub const FOG_NEAR: f32 = 8.5;
pub const FOG_FAR: f32 = 12.0;

// Flat stand-in for the dawn environment backdrop (linear RGB)
pub const CLEAR_COLOR: [f64; 3] = [0.62, 0.46, 0.44];

// Texture filtering for the banner ribbon
pub const BANNER_ANISOTROPY: u16 = 16;

// DOM hooks
pub const CANVAS_ID: &str = "app-canvas";
pub const PUBLIC_URL_ATTR: &str = "data-public-url";

// Wheel deltas in line mode are scaled to pixels with this factor
pub const WHEEL_LINE_PX: f32 = 16.0;

// Largest frame delta fed to the scene (s); avoids a jump after a hidden tab
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1;
