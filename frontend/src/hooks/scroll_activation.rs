use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::{now_ms, observer_supported, ObserverCallback};
use crate::motion::{ActivationConfig, ActivationController, RegionObservation};

/// Attribute carrying a region's position on its element.
pub const REGION_ATTR: &str = "data-region-index";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    /// Scrolling decides which region is active.
    Intersection,
    /// Auto-advance on a fixed interval.
    Timer,
}

enum ActivationAction {
    Observed(Vec<RegionObservation>),
    Select { index: usize, at: f64 },
    Tick,
    Resize(usize),
}

#[derive(Debug, Clone, PartialEq)]
struct ActivationStore {
    controller: Option<ActivationController>,
    threshold: f64,
}

impl ActivationStore {
    fn new(len: usize, threshold: f64) -> Self {
        let controller = ActivationController::new(len, threshold)
            .map_err(|err| warn!("showcase disabled: {}", err))
            .ok();
        Self {
            controller,
            threshold,
        }
    }
}

impl Reducible for ActivationStore {
    type Action = ActivationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Some(current) = self.controller.clone() else {
            return match action {
                ActivationAction::Resize(len) if len > 0 => Rc::new(Self::new(len, self.threshold)),
                _ => self,
            };
        };

        let mut next = current.clone();
        let outcome = match action {
            ActivationAction::Observed(batch) => next.observe_batch(&batch),
            ActivationAction::Select { index, at } => next.select(index, at).map(|_| true),
            ActivationAction::Tick => {
                next.tick();
                Ok(true)
            }
            ActivationAction::Resize(len) if len == current.len() => Ok(false),
            ActivationAction::Resize(len) => next.resize(len).map(|_| true),
        };

        match outcome {
            Ok(true) if next != current => {
                debug!("active region {} -> {}", current.active_index(), next.active_index());
                Rc::new(Self {
                    controller: Some(next),
                    threshold: self.threshold,
                })
            }
            Ok(_) => self,
            Err(err) => {
                warn!("ignored activation request: {}", err);
                self
            }
        }
    }
}

/// What a showcase needs to render its regions and indicators.
#[derive(Clone, PartialEq)]
pub struct ScrollActivation {
    pub active: usize,
    pub source: ActivationSource,
    /// Manual override, e.g. an indicator dot.
    pub select: Callback<usize>,
}

fn region_observations(entries: &Array) -> Vec<RegionObservation> {
    entries
        .iter()
        .filter_map(|entry| {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let index = entry
                .target()
                .get_attribute(REGION_ATTR)
                .and_then(|raw| raw.parse::<usize>().ok())?;
            Some(RegionObservation {
                index,
                ratio: entry.intersection_ratio(),
                is_intersecting: entry.is_intersecting(),
                time: entry.time(),
            })
        })
        .collect()
}

/// Tracks the active region among the `len` elements tagged with
/// [`REGION_ATTR`] under `container`.
///
/// `preferred` picks the signal; `Intersection` silently degrades to the
/// timer when the browser cannot observe visibility.
#[hook]
pub fn use_scroll_activation(
    container: NodeRef,
    len: usize,
    config: ActivationConfig,
    preferred: ActivationSource,
) -> ScrollActivation {
    let store = use_reducer(|| ActivationStore::new(len, config.threshold));
    let source = use_memo(
        |preferred| match preferred {
            ActivationSource::Intersection if observer_supported() => ActivationSource::Intersection,
            ActivationSource::Intersection => {
                warn!("IntersectionObserver unavailable, showcase falls back to timer");
                ActivationSource::Timer
            }
            ActivationSource::Timer => ActivationSource::Timer,
        },
        preferred,
    );
    let source = *source;

    {
        let dispatcher = store.dispatcher();
        use_effect_with_deps(
            move |len| {
                dispatcher.dispatch(ActivationAction::Resize(*len));
                || ()
            },
            len,
        );
    }

    // Scroll-driven activation.
    {
        let dispatcher = store.dispatcher();
        use_effect_with_deps(
            move |(container, len, config, source)| {
                let mut active: Option<(IntersectionObserver, ObserverCallback)> = None;

                if *source == ActivationSource::Intersection && *len > 0 {
                    if let Some(root) = container.cast::<Element>() {
                        let callback = ObserverCallback::new(
                            move |entries: Array, _observer: IntersectionObserver| {
                                let batch = region_observations(&entries);
                                if !batch.is_empty() {
                                    dispatcher.dispatch(ActivationAction::Observed(batch));
                                }
                            },
                        );

                        let init = IntersectionObserverInit::new();
                        init.set_threshold(&JsValue::from_f64(config.threshold));
                        init.set_root_margin(&config.root_margin());

                        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                            Ok(observer) => {
                                if let Ok(regions) = root.query_selector_all(&format!("[{}]", REGION_ATTR)) {
                                    for i in 0..regions.length() {
                                        if let Some(region) = regions
                                            .item(i)
                                            .and_then(|node| node.dyn_into::<Element>().ok())
                                        {
                                            observer.observe(&region);
                                        }
                                    }
                                }
                                active = Some((observer, callback));
                            }
                            Err(err) => warn!("showcase observer failed: {:?}", err),
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            (container, len, config, source),
        );
    }

    // Timer fallback. Restarted whenever the region count or period changes.
    {
        let dispatcher = store.dispatcher();
        use_effect_with_deps(
            move |(len, interval_ms, source)| {
                let interval = (*source == ActivationSource::Timer && *len > 0)
                    .then(|| Interval::new(*interval_ms, move || dispatcher.dispatch(ActivationAction::Tick)));
                move || drop(interval)
            },
            (len, config.interval_ms, source),
        );
    }

    let select = {
        let dispatcher = store.dispatcher();
        Callback::from(move |index: usize| {
            dispatcher.dispatch(ActivationAction::Select { index, at: now_ms() });
        })
    };

    ScrollActivation {
        active: store
            .controller
            .as_ref()
            .map(ActivationController::active_index)
            .unwrap_or(0),
        source,
        select,
    }
}
