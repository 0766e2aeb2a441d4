use yew::prelude::*;

use crate::config;
use crate::hooks::use_tween;
use crate::motion::{format_count, RetriggerPolicy, TweenConfig};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub from: f64,
    pub to: f64,
    /// Seconds.
    #[prop_or(2.0)]
    pub duration: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub in_view: bool,
    #[prop_or_default]
    pub policy: RetriggerPolicy,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let config = TweenConfig {
        duration_secs: props.duration,
        ..config::counter_tween()
    };
    let state = use_tween(props.from, props.to, config, props.policy, props.in_view);

    html! {
        <span
            class="counter"
            data-from={state.start.to_string()}
            data-to={state.end.to_string()}
            data-progress={format!("{:.2}", state.elapsed_fraction)}
        >
            {format_count(&props.prefix, state.displayed(), &props.suffix)}
        </span>
    }
}
