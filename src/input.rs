use glam::{Vec2, Vec3};
use web_sys as web;

/// Pointer travel (CSS px) beyond which a press/release is a drag, not a click.
pub const CLICK_MAX_TRAVEL_PX: f32 = 4.0;

#[derive(Default, Clone, Copy)]
pub struct PointerState {
    /// Normalized device coordinates, -1..1 with +Y up.
    pub ndc: Vec2,
    /// False until the first pointer event lands on the canvas.
    pub inside: bool,
    pub down: bool,
    /// Last position in CSS px, used for touch scrolling.
    pub last_px: Vec2,
}

/// Tracks one press/release pair and decides whether it was a click on a card.
#[derive(Default, Clone, Copy, Debug)]
pub struct ClickTracker {
    pressed_on: Option<usize>,
    press_px: Vec2,
    travel_px: f32,
}

impl ClickTracker {
    pub fn press(&mut self, hovered: Option<usize>, px: Vec2) {
        self.pressed_on = hovered;
        self.press_px = px;
        self.travel_px = 0.0;
    }

    pub fn moved(&mut self, px: Vec2) {
        if self.pressed_on.is_some() {
            self.travel_px = self.travel_px.max(px.distance(self.press_px));
        }
    }

    /// Returns the card index to open, at most once per press.
    pub fn release(&mut self, hovered: Option<usize>, px: Vec2) -> Option<usize> {
        self.moved(px);
        let pressed = self.pressed_on.take()?;
        (hovered == Some(pressed) && self.travel_px <= CLICK_MAX_TRAVEL_PX).then_some(pressed)
    }

    pub fn cancel(&mut self) {
        self.pressed_on = None;
    }
}

/// Möller–Trumbore ray/triangle test, double-sided.
#[inline]
pub fn ray_triangle(ray_origin: Vec3, ray_dir: Vec3, tri: [Vec3; 3]) -> Option<f32> {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let p = ray_dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < 1e-8 {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray_origin - tri[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray_dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

/// Whether a wheel event turns the ring (and is kept from scrolling the page).
/// Ctrl+wheel is browser zoom and pinch-zoom on trackpads; leave it alone.
#[inline]
pub fn wheel_scrolls_ring(ctrl_key: bool, delta_y: f64) -> bool {
    !ctrl_key && delta_y.is_finite() && delta_y != 0.0
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn css_px_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 {
        Vec2::new((px.x / width) * 2.0 - 1.0, 1.0 - (px.y / height) * 2.0)
    } else {
        Vec2::ZERO
    }
}

#[inline]
pub fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    css_px_to_ndc(
        pointer_css_px(ev, canvas),
        rect.width() as f32,
        rect.height() as f32,
    )
}
