use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::components::reveal_text::RevealText;
use crate::config;
use crate::hooks::{use_in_view, use_pointer_spring, InViewOptions};
use crate::motion::{map_range, Easing};

const ENTRANCE: InViewOptions = InViewOptions::once(0.3);

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Page scroll progress in `[0, 1]`.
    pub progress: f64,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ENTRANCE);
    let (pointer_x, pointer_y) = use_pointer_spring();

    let parallax_y = map_range(props.progress, (0.0, 0.3), (0.0, -100.0));
    let scale = map_range(props.progress, (0.0, 0.2), (1.0, 0.95));
    let opacity = map_range(props.progress, (0.0, 0.3), (1.0, 0.8));

    let ease = Easing::CubicOut.css();
    let shown = |delay: f64| {
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity 0.6s {ease} {delay}s, transform 0.6s {ease} {delay}s;",
            if in_view { 1 } else { 0 },
            if in_view { 0 } else { 40 },
        )
    };

    html! {
        <section ref={node} class="hero">
            <div class="hero-background" style={format!("transform: translateY({:.1}px);", parallax_y)}>
                <div
                    class="hero-orb hero-orb-blue"
                    style={format!("transform: translate({:.1}px, {:.1}px);", pointer_x * 0.02, pointer_y * 0.02)}
                ></div>
                <div
                    class="hero-orb hero-orb-purple"
                    style={format!("transform: translate({:.1}px, {:.1}px);", pointer_x * -0.015, pointer_y * -0.015)}
                ></div>
            </div>

            <div class="hero-content" style={format!("transform: scale({:.3}); opacity: {:.3};", scale, opacity)}>
                <div class="hero-badge" style={shown(0.2)}>
                    {"Decision Intelligence Platform for CPG Brands"}
                </div>

                <h1 class="hero-title">
                    <RevealText text="From insight to impact" {in_view} delay={0.6} />
                    <br />
                    <RevealText
                        text="in minutes, not months"
                        {in_view}
                        delay={1.0}
                        class={classes!("hero-title-gradient")}
                    />
                </h1>

                <p class="hero-subtitle">
                    <RevealText
                        text="Your Strategic Command Center. Access a single source of truth, generate actionable insights instantly, and make confident decisions backed by triangulated data across retail, panel, and internal sales."
                        {in_view}
                        delay={1.8}
                    />
                </p>

                <div class="hero-cta-group" style={shown(1.2)}>
                    <CtaButton label="Talk to us" class={classes!("cta-button", "cta-button-dark")} />
                </div>

                <div class="hero-preview" style={shown(1.4)}>
                    <div class="browser-frame">
                        <div class="browser-bar">
                            <span class="browser-dot red"></span>
                            <span class="browser-dot yellow"></span>
                            <span class="browser-dot green"></span>
                            <span class="browser-url">{"clayface.com/dashboard"}</span>
                        </div>
                        <img
                            src={config::asset_url("5cd2d046-4001-44da-aa5e-03b344aaa2c5.png")}
                            alt="Clayface Dashboard Preview"
                        />
                    </div>
                    <div class="floating-chip chip-share">{"+2.3% Market Share"}</div>
                    <div class="floating-chip chip-alerts">{"Real-time alerts"}</div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_entrance_plays_once() {
        assert!(ENTRANCE.once);
        assert_eq!(ENTRANCE.amount, 0.3);
    }
}
