//! Browser-side appliers for the style surface.
//!
//! The contract with the styling layer is style mutation on elements
//! addressed by stable ids and class names. Every helper here degrades
//! silently when the element (or the window itself) is absent.

use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions};

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Current vertical scroll offset, 0 outside a browser.
pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// `offsetTop` of the element with `id`, 0 when it does not exist.
pub fn offset_top(id: &str) -> f64 {
    document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_top() as f64)
        .unwrap_or_default()
}

pub fn set_style(selector: &str, property: &str, value: &str) {
    if let Some(el) = query(selector) {
        let _ = el.style().set_property(property, value);
    }
}

/// Smooth-scroll the window to `top`.
pub fn scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn set_body_class(class: &str, on: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// Restart a CSS animation on the matched element: clear it, force a
/// reflow so the browser forgets the previous run, then set it again.
pub fn replay_animation(selector: &str, animation: &str) {
    if let Some(el) = query(selector) {
        let style = el.style();
        let _ = style.set_property("animation", "none");
        let _ = el.offset_height();
        let _ = style.set_property("animation", animation);
    }
}
