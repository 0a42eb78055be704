//! Input event wiring. Handlers only write narrow fields into the
//! shared state (or the scroll-target cell) and return; all derived
//! work happens in the frame loop.

use crate::input;
use portal_core::{FrameClock, SceneState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Register pointer, hold, wheel, and visibility handlers. Returns the
/// input-owned scroll-target accumulator the frame loop reads.
pub fn register(
    state: Rc<RefCell<SceneState>>,
    clock: Rc<RefCell<FrameClock>>,
) -> anyhow::Result<Rc<Cell<f64>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let scroll_target = Rc::new(Cell::new(0.0_f64));

    // Pointer position, raw and normalized
    {
        let state = state.clone();
        let window_m = window.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let w = window_m.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let h = window_m.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let (nx, ny) = input::normalized_pointer(ev.client_x() as f64, ev.client_y() as f64, w, h);
            let mut s = state.borrow_mut();
            s.pointer.x = ev.client_x() as f64;
            s.pointer.y = ev.client_y() as f64;
            s.pointer.nx = nx;
            s.pointer.ny = ny;
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    // Hold button
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if ev.button() == 0 {
                state.borrow_mut().holding = true;
            }
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }
    for released in ["mouseup", "mouseleave"] {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move || {
            state.borrow_mut().holding = false;
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(released, closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    // Wheel accumulates into the clamped scroll target
    {
        let scroll_target = scroll_target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            scroll_target.set(input::accumulate_scroll(scroll_target.get(), ev.delta_y()));
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    // Hidden tab freezes the clock; the driver keeps scheduling but no
    // simulation time passes.
    {
        let document_m = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut clock = clock.borrow_mut();
            if document_m.hidden() {
                clock.pause();
            } else {
                clock.resume();
            }
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    Ok(scroll_target)
}
