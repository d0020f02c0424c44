use crate::core::constants::SCROLL_SMOOTH_SEC;
use crate::core::easing::damp_with_eps;

const SCROLL_EPS: f32 = 1e-4;

/// Virtual scroll position shared by the wheel/touch handlers and the frame loop.
///
/// `target` is where input has put the page (`0..1`, one unit spans all
/// pages); `offset` chases it every frame and `delta` tracks how fast it moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    pub pages: f32,
    pub infinite: bool,
    pub target: f32,
    pub offset: f32,
    pub delta: f32,
}

impl ScrollTracker {
    pub fn new(pages: f32, infinite: bool) -> Self {
        Self {
            pages: pages.max(1.0),
            infinite,
            target: 0.0,
            offset: 0.0,
            delta: 0.0,
        }
    }

    /// Feed a wheel or drag distance in CSS pixels; positive scrolls down.
    pub fn scroll_by_pixels(&mut self, pixels: f32, viewport_height: f32) {
        if !pixels.is_finite() || viewport_height <= 0.0 {
            return;
        }
        self.scroll_by(pixels / (viewport_height * self.pages));
    }

    /// Move the target by a normalized amount.
    pub fn scroll_by(&mut self, amount: f32) {
        let next = self.target + amount;
        if self.infinite {
            let turns = next.floor();
            self.target = next - turns;
            // Carry the eased offset across the seam with the target.
            self.offset -= turns;
        } else {
            self.target = next.clamp(0.0, 1.0);
        }
    }

    /// Advance one frame; returns the eased `(offset, delta)`.
    pub fn tick(&mut self, dt_sec: f32) -> (f32, f32) {
        let last = self.offset;
        self.offset = damp_with_eps(self.offset, self.target, SCROLL_SMOOTH_SEC, dt_sec, SCROLL_EPS);
        self.delta = damp_with_eps(
            self.delta,
            (last - self.offset).abs(),
            SCROLL_SMOOTH_SEC,
            dt_sec,
            SCROLL_EPS,
        );
        (self.offset, self.delta)
    }
}
