//! Per-frame orchestration and the requestAnimationFrame driver.

use crate::cursor::Cursor;
use crate::input;
use crate::overlay::Overlay;
use crate::render;
use glam::Vec3;
use portal_core::{FrameClock, FrameEngine, SceneSinks, SceneState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<SceneState>>,
    pub sinks: SceneSinks,
    pub engine: FrameEngine,
    pub clock: Rc<RefCell<FrameClock>>,
    pub scroll_target: Rc<Cell<f64>>,

    pub canvas: web::HtmlCanvasElement,
    pub overlay: Overlay,
    pub cursor: Cursor,
    pub gpu: Option<render::GpuState<'static>>,
}

impl FrameContext {
    /// One frame: clocked dt, hover pick, engine advance, DOM sinks,
    /// draw. Returns false only on a fatal render error the embedder
    /// must recover from before calling `start` again.
    pub fn frame(&mut self) -> bool {
        let dt = self.clock.borrow_mut().tick();

        // Aspect tracks the canvas backing size even without a GPU,
        // so the hover pick ray stays correct after a resize.
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if w > 0 && h > 0 {
            self.sinks.camera.aspect = w as f32 / h as f32;
        }

        {
            let mut state = self.state.borrow_mut();

            // Hover pick: ray through the pointer against a sphere at
            // the portal's current center.
            let portal_center = Vec3::new(0.0, self.sinks.portal_frame.y + 0.2, 0.0);
            let (ro, rd) = input::pointer_ray(
                self.sinks.camera.view_proj(),
                state.pointer.nx as f32,
                state.pointer.ny as f32,
            );
            state.hover_portal =
                input::ray_sphere(ro, rd, portal_center, input::PORTAL_PICK_RADIUS).is_some();

            self.engine
                .advance(&mut state, &mut self.sinks, self.scroll_target.get(), dt);

            self.overlay.update(state.hold_progress as f32);
            self.cursor.update(&state);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            match g.render(&mut self.sinks) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    g.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory; stopping frame loop");
                    return false;
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }

        true
    }
}

/// Owns the requestAnimationFrame loop. `start` schedules the
/// recurring callback, `stop` cancels the pending one; both are
/// idempotent, and an in-flight frame always completes.
pub struct Driver {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(false)),
            pending: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    pub fn start(&self, ctx: Rc<RefCell<FrameContext>>) {
        if self.running.get() {
            return;
        }
        self.running.set(true);
        log::info!("frame loop started");

        let running = self.running.clone();
        let pending = self.pending.clone();
        let tick_clone = self.tick.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            if !running.get() {
                return;
            }
            if !ctx.borrow_mut().frame() {
                running.set(false);
                return;
            }
            if let Some(w) = web::window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    pending.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(w) = web::window() {
            if let Ok(id) = w
                .request_animation_frame(self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                self.pending.set(Some(id));
            }
        }
    }

    pub fn stop(&self) {
        if !self.running.get() {
            return;
        }
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        log::info!("frame loop stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
