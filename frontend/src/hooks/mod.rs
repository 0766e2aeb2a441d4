//! Browser glue: observers, timers, frame loops and listeners, each scoped to
//! the component that calls the hook.

mod in_view;
mod pointer;
mod scroll_activation;
mod scroll_progress;
mod tween;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Array;
use web_sys::IntersectionObserver;

pub use in_view::{use_in_view, InViewOptions};
pub use pointer::use_pointer_spring;
pub use scroll_activation::{use_scroll_activation, ActivationSource};
pub use scroll_progress::use_scroll_progress;
pub use tween::use_tween;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Milliseconds on the same clock as frame and observer timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

/// Older engines and some embedded webviews ship without it.
pub fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            web_sys::js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}
