use log::{info, warn};
use yew::prelude::*;

use crate::config;

/// Sends the visitor to the scheduling page in the same tab.
pub fn open_scheduling() {
    info!("Opening scheduling link");
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(config::SCHEDULING_URL) {
        warn!("navigation to scheduling link failed: {:?}", err);
    }
}

fn default_class() -> Classes {
    classes!("cta-button")
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub label: AttrValue,
    #[prop_or_else(default_class)]
    pub class: Classes,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| open_scheduling());

    html! {
        <button class={props.class.clone()} {onclick}>
            {props.label.clone()}
            <span class="cta-arrow">{"→"}</span>
        </button>
    }
}
