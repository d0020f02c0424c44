#![cfg(target_arch = "wasm32")]
use crate::core::scene::Scene;
use crate::core::scroll::ScrollTracker;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if !STARTED.swap(true, Ordering::SeqCst) {
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
    }
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store at CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = dom::read_app_config(&window, &canvas);
    log::info!(
        "[config] mobile={} camera_z={} fov={} cards={} public_url={:?}",
        config.viewport.mobile,
        config.viewport.camera_distance,
        config.viewport.fov_y_deg,
        config.card_count,
        config.public_url
    );

    let images = assets::load_scene_images(&window, &config).await?;

    // The surface borrows the canvas for the lifetime of the page.
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(leaked_canvas, &images)
        .await
        .map_err(|e| anyhow::anyhow!("WebGPU init error: {:?}", e))?;

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let scene = Rc::new(RefCell::new(Scene::build(&config)));
    let click = Rc::new(RefCell::new(input::ClickTracker::default()));
    let scroll = Rc::new(RefCell::new(ScrollTracker::new(config.pages, config.infinite)));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        scene: scene.clone(),
        click,
        scroll: scroll.clone(),
        public_url: Rc::from(config.public_url.as_str()),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        scroll,
        pointer,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
