use super::pointer::InputWiring;
use crate::constants::WHEEL_LINE_PX;
use crate::dom;
use crate::input;
use web_sys as web;

/// Wheel deltas in pixels regardless of the event's delta mode.
#[inline]
pub fn wheel_pixels(delta_y: f64, delta_mode: u32, page_height: f32) -> f32 {
    match delta_mode {
        web::WheelEvent::DOM_DELTA_LINE => delta_y as f32 * WHEEL_LINE_PX,
        web::WheelEvent::DOM_DELTA_PAGE => delta_y as f32 * page_height,
        _ => delta_y as f32,
    }
}

pub(super) fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    // Non-passive so the page behind the canvas does not scroll along.
    dom::add_blocking_listener(&canvas, "wheel", move |ev: web::WheelEvent| {
        if !input::wheel_scrolls_ring(ev.ctrl_key(), ev.delta_y()) {
            return;
        }
        ev.prevent_default();
        let height = dom::viewport_height(&w.canvas);
        let px = wheel_pixels(ev.delta_y(), ev.delta_mode(), height);
        w.scroll.borrow_mut().scroll_by_pixels(px, height);
    });
}
