use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAnchorElement, HtmlElement};

use crate::research::sizing::{fit_height, SizingProfile};

fn element_by_id(id: &str) -> Option<web_sys::Element> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

/// Grow or shrink a textarea to its content. Returns the height applied.
pub fn fit_textarea(element_id: &str, profile: SizingProfile) -> Option<i32> {
    let element = element_by_id(element_id)?.dyn_into::<HtmlElement>().ok()?;
    let style = element.style();

    // Collapse first so scrollHeight reflects the content, not the old box.
    style.set_property("height", "auto").ok()?;
    let height = fit_height(element.scroll_height(), profile);
    style.set_property("height", &format!("{height}px")).ok()?;

    Some(height)
}

/// `href` of every anchor rendered inside the container, in DOM order.
pub fn rendered_link_urls(container_id: &str) -> Vec<String> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(&format!("#{container_id} a")) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlAnchorElement>().ok())
        .map(|anchor| anchor.href())
        .collect()
}

/// Blocking confirmation prompt; `false` when the browser refuses to show it.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn reload_page() {
    if let Some(window) = window() {
        if let Err(e) = window.location().reload() {
            dioxus_logger::tracing::error!("Failed to reload page: {:?}", e);
        }
    }
}
