//! Thin wrappers over `window.location` and `window.history`

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Current location fragment, including the leading `#` (empty if none).
pub fn location_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn push_history(title: &str, fragment: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.history() {
        Ok(history) => {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, title, Some(fragment)) {
                log::warn!("failed to push history entry {}: {:?}", fragment, err);
            }
        }
        Err(err) => log::warn!("history API unavailable: {:?}", err),
    }
}

/// Calls `handler` with the new fragment on every `popstate` (back/forward,
/// manual fragment edits). The listener lives as long as the page.
pub fn on_popstate(handler: impl Fn(String) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handler(location_fragment());
    }) as Box<dyn FnMut(_)>);

    if let Err(err) =
        window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
    {
        log::warn!("failed to listen for popstate: {:?}", err);
    }
    listener.forget();
}
