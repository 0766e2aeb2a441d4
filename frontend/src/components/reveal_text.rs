use std::cell::RefCell;

use yew::prelude::*;

use crate::config;
use crate::hooks::now_ms;
use crate::motion::{RevealMode, RevealSequencer};

#[derive(Properties, PartialEq)]
pub struct RevealTextProps {
    pub text: AttrValue,
    pub in_view: bool,
    /// Seconds before the first word starts moving.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub mode: RevealMode,
    #[prop_or_default]
    pub class: Classes,
}

/// Word-by-word entrance. The browser runs each word's transition; the
/// sequencer decides poses and per-word delays.
#[function_component(RevealText)]
pub fn reveal_text(props: &RevealTextProps) -> Html {
    let sequencer = use_memo(
        |(text, delay, mode)| {
            RefCell::new(RevealSequencer::new(text, *delay, config::reveal_text()).with_mode(*mode))
        },
        (props.text.clone(), props.delay, props.mode),
    );
    let now = now_ms() / 1000.0;
    sequencer.borrow_mut().set_trigger(props.in_view, now);

    let words = {
        let sequencer = sequencer.borrow();
        let words: Html = sequencer
            .tokens()
            .iter()
            .enumerate()
            .map(|(index, word)| html! {
                <span key={index} class="inline-block overflow-hidden">
                    <span style={sequencer.pose_style(index, now)}>
                        {format!("{}\u{00a0}", word)}
                    </span>
                </span>
            })
            .collect();
        words
    };

    html! {
        <span class={props.class.clone()}>{words}</span>
    }
}
