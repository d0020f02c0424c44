use crate::constants::MAX_FRAME_DELTA_SEC;
use crate::core::scene::{FrameInput, Scene};
use crate::core::scroll::ScrollTracker;
use crate::input::PointerState;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'a>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DELTA_SEC);
        self.last_instant = now;

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let (scroll_offset, scroll_delta) = self.scroll.borrow_mut().tick(dt_sec);
        let ps = *self.pointer.borrow();
        let input = FrameInput {
            delta: dt_sec,
            scroll_offset,
            scroll_delta,
            pointer: ps.ndc,
            pointer_inside: ps.inside,
            aspect: self.gpu.aspect(),
        };

        let (camera, items) = {
            let mut scene = self.scene.borrow_mut();
            for change in scene.update(&input) {
                log::debug!(
                    "[hover] card {} {}",
                    change.index,
                    if change.hovered { "enter" } else { "leave" }
                );
            }
            (scene.camera(input.aspect), scene.draw_list())
        };
        if let Err(e) = self.gpu.render(&camera, &items) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
