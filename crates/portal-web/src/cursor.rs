//! Custom DOM cursor sink, following the pointer each frame.

use portal_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Cursor {
    el: Option<web::Element>,
    trail: Option<web::Element>,
}

impl Cursor {
    pub fn new(document: &web::Document) -> Self {
        let el = document.get_element_by_id("cursor");

        // Elements marked data-hover swap the cursor into its hover look.
        if let (Some(cursor_el), Ok(hoverables)) =
            (el.clone(), document.query_selector_all("[data-hover]"))
        {
            for i in 0..hoverables.length() {
                let Some(node) = hoverables.item(i) else { continue };
                let Ok(target) = node.dyn_into::<web::Element>() else { continue };
                let enter_el = cursor_el.clone();
                let enter = Closure::wrap(Box::new(move || {
                    let _ = enter_el.class_list().add_1("hover");
                }) as Box<dyn FnMut()>);
                let leave_el = cursor_el.clone();
                let leave = Closure::wrap(Box::new(move || {
                    let _ = leave_el.class_list().remove_1("hover");
                }) as Box<dyn FnMut()>);
                target
                    .add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())
                    .ok();
                target
                    .add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())
                    .ok();
                enter.forget();
                leave.forget();
            }
        }

        Self {
            el,
            trail: document.get_element_by_id("cursorTrail"),
        }
    }

    pub fn update(&self, state: &SceneState) {
        let style = format!("left:{}px;top:{}px", state.pointer.x, state.pointer.y);
        if let Some(el) = &self.el {
            let _ = el.set_attribute("style", &style);
        }
        if let Some(el) = &self.trail {
            let _ = el.set_attribute("style", &style);
        }
    }
}
