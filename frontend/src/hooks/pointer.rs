use std::cell::Cell;
use std::rc::Rc;

use gloo_render::request_animation_frame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::motion::Spring;

/// Pointer position smoothed by a pair of springs, owned by the calling
/// component. The `mousemove` listener lives exactly as long as the caller.
#[hook]
pub fn use_pointer_spring() -> (f64, f64) {
    let springs = use_mut_ref(|| (Spring::default(), Spring::default()));
    let last_frame = use_mut_ref(|| None::<f64>);
    let position = use_state(|| (0.0, 0.0));
    let wake = use_state(|| 0u64);
    let wake_count = use_memo(|_| Cell::new(0u64), ());

    // Listener: retarget the springs and wake the frame loop.
    {
        let springs = springs.clone();
        let wake = wake.clone();
        let wake_count = wake_count.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = Closure::wrap(Box::new(move |event: MouseEvent| {
                    {
                        let mut springs = springs.borrow_mut();
                        springs.0.set_target(event.client_x() as f64);
                        springs.1.set_target(event.client_y() as f64);
                    }
                    let next = wake_count.get() + 1;
                    wake_count.set(next);
                    wake.set(next);
                }) as Box<dyn FnMut(MouseEvent)>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Frame loop: runs until both springs rest, then sleeps until the next move.
    {
        let springs = springs.clone();
        let position = position.clone();
        let wake_handle = wake.clone();
        let wake_count: Rc<Cell<u64>> = wake_count.clone();
        use_effect_with_deps(
            move |_| {
                let settled = {
                    let springs = springs.borrow();
                    springs.0.is_settled() && springs.1.is_settled()
                };
                let pending = (!settled).then(|| {
                    request_animation_frame(move |now| {
                        let previous = *last_frame.borrow();
                        let dt = previous
                            .map(|previous| (now - previous) / 1000.0)
                            .unwrap_or(1.0 / 60.0);
                        *last_frame.borrow_mut() = Some(now);

                        let (x, y, settled) = {
                            let mut springs = springs.borrow_mut();
                            let x = springs.0.step(dt);
                            let y = springs.1.step(dt);
                            (x, y, springs.0.is_settled() && springs.1.is_settled())
                        };
                        if settled {
                            *last_frame.borrow_mut() = None;
                        }
                        position.set((x, y));
                        let next = wake_count.get() + 1;
                        wake_count.set(next);
                        wake_handle.set(next);
                    })
                });
                move || drop(pending)
            },
            *wake,
        );
    }

    *position
}
