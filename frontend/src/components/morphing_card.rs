use yew::prelude::*;

use crate::motion::Easing;

#[derive(Properties, PartialEq)]
pub struct MorphingCardProps {
    pub in_view: bool,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

const HIDDEN_POSE: &str = "opacity: 0; transform: perspective(800px) translateY(60px) scale(0.8) rotateX(-15deg);";
const SHOWN_POSE: &str = "opacity: 1; transform: perspective(800px) translateY(0) scale(1) rotateX(0deg);";

/// Card that tilts up into place once its section enters the viewport.
/// The entrance plays once; hover lift is handled in CSS.
#[function_component(MorphingCard)]
pub fn morphing_card(props: &MorphingCardProps) -> Html {
    let entered = use_mut_ref(|| false);
    if props.in_view {
        *entered.borrow_mut() = true;
    }
    let pose = if *entered.borrow() { SHOWN_POSE } else { HIDDEN_POSE };
    let style = format!(
        "{} transition: opacity 0.8s {ease} {delay}s, transform 0.8s {ease} {delay}s;",
        pose,
        ease = Easing::REVEAL.css(),
        delay = props.delay,
    );

    html! {
        <div class={classes!("morphing-card", props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}
