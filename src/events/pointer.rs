use crate::core::layout::card_page_url;
use crate::core::scene::Scene;
use crate::core::scroll::ScrollTracker;
use crate::dom;
use crate::input::{self, ClickTracker, PointerState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerState>>,
    pub scene: Rc<RefCell<Scene>>,
    pub click: Rc<RefCell<ClickTracker>>,
    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub public_url: Rc<str>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    super::scroll::wire_wheel(&w);
}

fn inside_canvas(px: Vec2, canvas: &web::HtmlCanvasElement) -> bool {
    let rect = canvas.get_bounding_client_rect();
    px.x >= 0.0 && px.y >= 0.0 && px.x <= rect.width() as f32 && px.y <= rect.height() as f32
}

/// Card under the event's own position. Touch sends no pointermove before
/// pointerdown, so the hover from the last frame can be stale here.
fn card_at_event(w: &InputWiring, ev: &web::PointerEvent) -> Option<usize> {
    let px = input::pointer_css_px(ev, &w.canvas);
    if !inside_canvas(px, &w.canvas) {
        return None;
    }
    let ndc = input::pointer_ndc(ev, &w.canvas);
    w.scene.borrow().pick(ndc, dom::canvas_aspect(&w.canvas))
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let px = input::pointer_css_px(&ev, &w.canvas);
        let (was_down, last_px) = {
            let mut ps = w.pointer.borrow_mut();
            let prev = (ps.down, ps.last_px);
            ps.ndc = input::pointer_ndc(&ev, &w.canvas);
            ps.inside = inside_canvas(px, &w.canvas);
            ps.last_px = px;
            prev
        };
        w.click.borrow_mut().moved(px);

        // Touch has no wheel: a vertical drag scrolls the ring instead.
        if was_down && ev.pointer_type() == "touch" {
            let dy = last_px.y - px.y;
            w.scroll
                .borrow_mut()
                .scroll_by_pixels(dy, dom::viewport_height(&w.canvas));
        }
    });
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("pointerdown", move |ev: web::PointerEvent| {
        let px = input::pointer_css_px(&ev, &w.canvas);
        {
            let mut ps = w.pointer.borrow_mut();
            ps.down = true;
            ps.last_px = px;
            ps.ndc = input::pointer_ndc(&ev, &w.canvas);
            ps.inside = inside_canvas(px, &w.canvas);
        }
        let hit = card_at_event(&w, &ev);
        w.click.borrow_mut().press(hit, px);
    });
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    dom::add_window_listener("pointerup", move |ev: web::PointerEvent| {
        let px = input::pointer_css_px(&ev, &w.canvas);
        w.pointer.borrow_mut().down = false;
        let hit = card_at_event(&w, &ev);
        let clicked = w.click.borrow_mut().release(hit, px);
        if let Some(index) = clicked {
            let url = card_page_url(&w.public_url, index);
            log::info!("[click] card {} -> {}", index, url);
            dom::navigate(&url);
        }
    });

    let click = w.click.clone();
    let pointer = w.pointer.clone();
    dom::add_window_listener("pointercancel", move |_ev: web::PointerEvent| {
        pointer.borrow_mut().down = false;
        click.borrow_mut().cancel();
    });
}
