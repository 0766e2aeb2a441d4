use std::cell::RefCell;

use gloo_render::request_animation_frame;
use yew::prelude::*;

use crate::motion::{FrameOutcome, RetriggerPolicy, TweenConfig, TweenState, TweenedCounter};

/// Drives a [`TweenedCounter`] from `requestAnimationFrame` while `gate` is
/// open and returns the state to display.
///
/// Each frame bumps a render tick; the effect keyed on that tick requests the
/// next frame, so at most one request is outstanding and dropping the handle
/// on teardown cancels it.
#[hook]
pub fn use_tween(
    start: f64,
    end: f64,
    config: TweenConfig,
    policy: RetriggerPolicy,
    gate: bool,
) -> TweenState {
    let counter = use_memo(
        |&(start, end, config, policy)| {
            RefCell::new(TweenedCounter::new(start, end, config).with_policy(policy))
        },
        (start, end, config, policy),
    );
    let frame = use_state(|| 0u64);

    {
        let counter = counter.clone();
        use_effect_with_deps(
            move |_| move || counter.borrow_mut().cancel(),
            (start, end, config, policy),
        );
    }

    // Gate changes apply during render so a restart shows `start` right away.
    counter.borrow_mut().set_gate(gate);

    {
        let counter = counter.clone();
        let frame_handle = frame.clone();
        use_effect_with_deps(
            move |(_, tick, ..)| {
                let next = tick + 1;
                let wants_frame = counter.borrow().wants_frame();
                let pending = wants_frame.then(|| {
                    request_animation_frame(move |now| {
                        let outcome = counter.borrow_mut().on_frame(now);
                        if outcome != FrameOutcome::Stopped {
                            frame_handle.set(next);
                        }
                    })
                });
                move || drop(pending)
            },
            (gate, *frame, start, end, config, policy),
        );
    }

    let state = counter.borrow().state();
    state
}
