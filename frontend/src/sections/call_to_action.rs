use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::hooks::{use_in_view, InViewOptions};
use crate::motion::{map_range, Easing};

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub progress: f64,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::once(0.3));
    let backdrop_y = map_range(props.progress, (0.8, 1.0), (0.0, -100.0));

    let ease = Easing::CubicOut.css();
    let rise = |offset: u32, duration: f64, delay: f64| {
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {duration}s {ease} {delay}s, transform {duration}s {ease} {delay}s;",
            if in_view { 1 } else { 0 },
            if in_view { 0 } else { offset },
        )
    };

    html! {
        <section ref={node} class="cta-section">
            <div class="cta-backdrop" style={format!("transform: translateY({:.1}px);", backdrop_y)}>
                <div class="cta-orb cta-orb-left"></div>
                <div class="cta-orb cta-orb-right"></div>
            </div>
            <div class="cta-content">
                <h2 style={rise(40, 0.8, 0.0)}>{"Ready to transform your brand management?"}</h2>
                <p style={rise(30, 0.6, 0.4)}>
                    {"Join CPG leaders who've moved from reactive to proactive with Clayface's Decision Intelligence Platform."}
                </p>
                <div style={rise(40, 0.6, 0.8)}>
                    <CtaButton label="Talk to us" class={classes!("cta-button", "cta-button-light")} />
                </div>
            </div>
        </section>
    }
}
