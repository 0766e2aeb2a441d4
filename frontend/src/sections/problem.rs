use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::components::morphing_card::MorphingCard;
use crate::components::reveal_text::RevealText;
use crate::hooks::{use_in_view, InViewOptions};
use crate::motion::Easing;

const PAIN_POINTS: &[(&str, &str, &str, f64)] = &[
    (
        "🗄️",
        "Data Fragmentation",
        "Multiple disconnected systems create information silos, preventing unified strategic decision-making across brand portfolios.",
        0.2,
    ),
    (
        "⏱️",
        "Insight Lag",
        "Critical market insights arrive weeks too late, forcing reactive strategies instead of proactive competitive advantage.",
        0.4,
    ),
    (
        "🎯",
        "Decision Uncertainty",
        "Lack of integrated analytics creates uncertainty in strategic decisions, limiting confidence in budget allocation and market positioning.",
        0.6,
    ),
];

#[function_component(Problem)]
pub fn problem() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::once(0.2));
    let emphasis = |delay: f64| {
        format!(
            "font-weight: {}; transition: font-weight 0.8s {} {}s;",
            if in_view { 700 } else { 400 },
            Easing::EASE_IN_OUT.css(),
            delay
        )
    };

    html! {
        <section ref={node} id="problem" class="problem-section">
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge">{"⚠ The Hidden Cost of Complexity"}</div>
                    <h2 class="problem-title">
                        {"CPG Brands Are "}
                        <span class="problem-emphasis" style={emphasis(1.2)}>{"Drowning in Data"}</span>
                        {" But "}
                        <span class="problem-emphasis" style={emphasis(1.6)}>{"Starving for Direction"}</span>
                    </h2>
                    <p class="section-lead">
                        <RevealText
                            text="Despite having access to comprehensive dashboards and detailed reports, most CPG brands struggle to extract actionable insights when critical decisions need to be made. This leads to delayed responses, missed opportunities, and reactive strategies."
                            {in_view}
                            delay={1.2}
                        />
                    </p>
                </div>

                <div class="problem-grid">
                    { for PAIN_POINTS.iter().map(|(icon, title, description, delay)| html! {
                        <MorphingCard key={*title} {in_view} delay={*delay} class={classes!("problem-card")}>
                            <div class="problem-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </MorphingCard>
                    }) }
                </div>

                <div class="section-cta">
                    <p>{"There has to be a better way to navigate the complexity."}</p>
                    <CtaButton label="Discover the Solution" class={classes!("cta-button", "cta-button-dark")} />
                </div>
            </div>
        </section>
    }
}
