use crate::core::constants::{CARD_COUNT, RING_RADIUS, SCROLL_INFINITE, SCROLL_PAGES};

const MOBILE_MARKERS: [&str; 4] = ["iphone", "ipad", "ipod", "android"];

/// Camera parameters picked once from the device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub mobile: bool,
    /// Initial camera Z before the rig eases it in.
    pub camera_distance: f32,
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl ViewportConfig {
    pub fn for_device(mobile: bool) -> Self {
        let (camera_distance, fov_y_deg) = if mobile { (50.0, 30.0) } else { (100.0, 15.0) };
        Self {
            mobile,
            camera_distance,
            fov_y_deg,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub viewport: ViewportConfig,
    pub card_count: usize,
    pub radius: f32,
    pub pages: f32,
    pub infinite: bool,
    /// Prefix for every asset and navigation path; no trailing slash needed.
    pub public_url: String,
}

impl AppConfig {
    pub fn from_environment(user_agent: &str, public_url: &str) -> Self {
        Self {
            viewport: ViewportConfig::for_device(is_mobile_user_agent(user_agent)),
            card_count: CARD_COUNT,
            radius: RING_RADIUS,
            pages: SCROLL_PAGES,
            infinite: SCROLL_INFINITE,
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_environment("", "")
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}
