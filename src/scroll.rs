use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::HEADER_OFFSET_PX;

/// Smooth-scrolls the page so the section with the given id sits just below
/// the fixed navbar. Does nothing when the section is not in the document.
pub fn scroll_to_section(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    if let (Some(target), Some(window)) = (target, web_sys::window()) {
        let options = ScrollToOptions::new();
        options.set_top(f64::from(target.offset_top() - HEADER_OFFSET_PX));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scrolls back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
