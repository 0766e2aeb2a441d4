use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::{observer_supported, ObserverCallback};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that has to be on screen.
    pub amount: f64,
    /// Stop observing after the first hit.
    pub once: bool,
}

impl InViewOptions {
    pub const fn once(amount: f64) -> Self {
        Self { amount, once: true }
    }
}

/// Trigger gate for section entrances. Without observer support the gate
/// opens immediately so content is never stuck hidden.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let options = *options;
                let mut active: Option<(IntersectionObserver, ObserverCallback)> = None;

                match node.cast::<Element>() {
                    Some(element) if observer_supported() => {
                        let gate = in_view.clone();
                        let callback = ObserverCallback::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if entry.is_intersecting() {
                                        gate.set(true);
                                        if options.once {
                                            observer.disconnect();
                                        }
                                    } else if !options.once {
                                        gate.set(false);
                                    }
                                }
                            },
                        );

                        let init = IntersectionObserverInit::new();
                        init.set_threshold(&JsValue::from_f64(options.amount.clamp(0.0, 1.0)));
                        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                            Ok(observer) => {
                                observer.observe(&element);
                                active = Some((observer, callback));
                            }
                            Err(err) => {
                                warn!("IntersectionObserver rejected options: {:?}", err);
                                in_view.set(true);
                            }
                        }
                    }
                    Some(_) => {
                        warn!("IntersectionObserver unavailable, revealing immediately");
                        in_view.set(true);
                    }
                    None => in_view.set(true),
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    *in_view
}
