use glam::Vec3;

// Scene-level tuning shared by the layout, the per-frame updates and picking.

// Carousel ring
pub const CARD_COUNT: usize = 8;
pub const RING_RADIUS: f32 = 1.4;
pub const IMAGE_POOL_SIZE: usize = 10; // img1..img10, cycled when there are more cards

// Card geometry (bent plane)
pub const CARD_BEND: f32 = 0.1;
pub const CARD_WIDTH: f32 = 1.0;
pub const CARD_HEIGHT: f32 = 1.0;
pub const CARD_SEGMENTS: (u32, u32) = (20, 20);
pub const CARD_PICK_SEGMENTS: (u32, u32) = (4, 1); // coarse mesh for hover raycasts

// Hover targets: (hovered, idle)
pub const SCALE_TARGETS: (f32, f32) = (1.15, 1.0);
pub const EDGE_RADIUS_TARGETS: (f32, f32) = (0.25, 0.10);
pub const ZOOM_TARGETS: (f32, f32) = (1.0, 1.5);

// Smoothing time constants (seconds)
pub const SCALE_SMOOTH_SEC: f32 = 0.1;
pub const MATERIAL_SMOOTH_SEC: f32 = 0.2;
pub const CAMERA_SMOOTH_SEC: f32 = 0.3;
pub const SCROLL_SMOOTH_SEC: f32 = 0.25;

// Rig
pub const RIG_TILT_Z: f32 = 0.15;
pub const CAMERA_POINTER_GAIN_X: f32 = 2.0;
pub const CAMERA_HEIGHT: f32 = 1.5;
pub const CAMERA_REST_Z: f32 = 10.0;

// Banner ribbon
pub const BANNER_POSITION: Vec3 = Vec3::new(0.0, -0.15, 0.0);
pub const BANNER_RADIUS: f32 = 1.6;
pub const BANNER_HEIGHT: f32 = 0.14;
pub const BANNER_SEGMENTS: (u32, u32) = (128, 16);
pub const BANNER_TEXTURE_REPEAT: [f32; 2] = [30.0, 1.0];
pub const BANNER_TIME_PER_SCROLL: f32 = 4.0;
pub const BANNER_OFFSET_PER_SEC: f32 = 0.5;

// Scroll pagination
pub const SCROLL_PAGES: f32 = 4.0;
pub const SCROLL_INFINITE: bool = true;
