#![cfg(target_arch = "wasm32")]
//! WASM entry point: finds the canvas, wires input and DOM sinks
//! around the portal-core engine, and starts the frame driver.

mod cursor;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use portal_core::{FrameClock, FrameEngine, SceneSinks, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id("portal-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #portal-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::watch_resize(&canvas);

    let state = Rc::new(RefCell::new(SceneState::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new()));
    let scroll_target = events::register(state.clone(), clock.clone())?;

    // Particle layout varies run to run; everything else is fixed.
    let seed = js_sys::Date::now() as u64;
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let sinks = SceneSinks::new(aspect, seed);

    // Leak a canvas clone to satisfy the 'static surface lifetime
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        sinks,
        engine: FrameEngine::new(),
        clock,
        scroll_target,
        canvas,
        overlay: overlay::Overlay::new(&document),
        cursor: cursor::Cursor::new(&document),
        gpu,
    }));

    let driver = frame::Driver::new();
    driver.start(ctx);
    // The rAF closure keeps itself alive; the driver handle only adds
    // stop(), which nothing calls after init.
    std::mem::forget(driver);

    Ok(())
}
