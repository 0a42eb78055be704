//! DOM overlay sink: hold progress bar and the gold/purple labels.

use web_sys as web;

pub struct Overlay {
    hold_fill: Option<web::Element>,
    label_left: Option<web::Element>,
    label_right: Option<web::Element>,
    logo: Option<web::Element>,
}

impl Overlay {
    pub fn new(document: &web::Document) -> Self {
        Self {
            hold_fill: document.get_element_by_id("holdFill"),
            label_left: document.get_element_by_id("labelLeft"),
            label_right: document.get_element_by_id("labelRight"),
            logo: document.get_element_by_id("logo"),
        }
    }

    pub fn update(&self, p: f32) {
        if let Some(el) = &self.hold_fill {
            let _ = el.set_attribute("style", &format!("width:{}%", p * 100.0));
        }
        if p > 0.5 {
            if let Some(el) = &self.label_left {
                let _ = el.class_list().add_1("hidden");
            }
            if let Some(el) = &self.label_right {
                let _ = el.class_list().add_1("visible");
            }
            if let Some(el) = &self.logo {
                let _ = el.class_list().add_1("purple");
            }
        } else {
            if let Some(el) = &self.label_left {
                let _ = el.class_list().remove_1("hidden");
            }
            if let Some(el) = &self.label_right {
                let _ = el.class_list().remove_1("visible");
            }
            if let Some(el) = &self.logo {
                let _ = el.class_list().remove_1("purple");
            }
        }
    }
}
