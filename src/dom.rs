use crate::constants::PUBLIC_URL_ATTR;
use crate::core::config::AppConfig;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// CSS height of the canvas, used to turn wheel pixels into scroll pages.
#[inline]
pub fn viewport_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}

/// Backing-store aspect ratio, matching what the surface renders with.
#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}

/// Build the session config from the browser's user agent and the canvas'
/// `data-public-url` attribute.
pub fn read_app_config(window: &web::Window, canvas: &web::HtmlCanvasElement) -> AppConfig {
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let public_url = canvas.get_attribute(PUBLIC_URL_ATTR).unwrap_or_default();
    AppConfig::from_environment(&user_agent, &public_url)
}

/// Full-page navigation; the page is left behind.
pub fn navigate(url: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("navigation to {} failed: {:?}", url, e);
        }
    }
}

/// Register `handler` for `event` on the window and keep it alive for the page.
pub fn add_window_listener<E, F>(event: &str, handler: F)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Register a non-passive `handler` on `target`, so it may call `prevent_default`.
pub fn add_blocking_listener<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("could not register {} listener: {:?}", event, e);
    }
    closure.forget();
}
