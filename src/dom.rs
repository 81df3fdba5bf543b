//! Small web-sys helpers shared by the theme and suggestion bindings.

use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::js_message;

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(doc: &web_sys::Document, selector: &str) -> Option<T> {
    doc.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

/// All elements matching `selector`.
pub fn query_all(doc: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = doc.query_selector_all(selector) else {
        warn!("Invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        warn!("Failed to listen for {}: {}", event, js_message(&e));
    }
    closure.forget();
}
