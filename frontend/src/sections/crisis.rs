use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::cta_button::CtaButton;
use crate::hooks::{use_in_view, InViewOptions};

struct IndustryStat {
    to: f64,
    prefix: &'static str,
    suffix: &'static str,
    label: &'static str,
}

const INDUSTRY_STATS: &[IndustryStat] = &[
    IndustryStat { to: 85.0, prefix: "", suffix: "%", label: "Of Fortune 500 CPG companies affected" },
    IndustryStat { to: 47.0, prefix: "", suffix: " days", label: "Average insight delivery timeline" },
    IndustryStat { to: 164.0, prefix: "$", suffix: "M", label: "Average annual loss per major brand" },
];

/// Industry-wide figures on a dark band.
#[function_component(Crisis)]
pub fn crisis() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::once(0.2));

    html! {
        <section ref={node} id="crisis" class="crisis-section">
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge section-badge-dark">{"🌐 Industry-Wide Impact"}</div>
                    <h2 class="crisis-title">
                        {"The Global"}
                        <br />
                        <span class="crisis-title-muted">{"Strategic Crisis"}</span>
                    </h2>
                    <p class="section-lead section-lead-dark">
                        {"This challenge extends beyond individual companies. It's a systemic issue affecting the entire consumer goods industry worldwide."}
                    </p>
                </div>

                <div class="crisis-panel">
                    <div class="crisis-headline">
                        <Counter from={0.0} to={60.0} prefix="$" suffix="B+" {in_view} />
                    </div>
                    <div class="crisis-headline-label">{"ANNUAL INDUSTRY LOSS"}</div>
                    <div class="crisis-headline-detail">
                        {"Lost by CPG companies globally due to fragmented data, delayed insights, and reactive decision-making"}
                    </div>

                    <div class="crisis-stats">
                        { for INDUSTRY_STATS.iter().map(|stat| html! {
                            <div key={stat.label} class="crisis-stat">
                                <div class="crisis-stat-value">
                                    <Counter from={0.0} to={stat.to} prefix={stat.prefix} suffix={stat.suffix} {in_view} />
                                </div>
                                <div class="crisis-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="section-cta">
                    <h3>{"Transform Your Decision Intelligence"}</h3>
                    <p>{"Join industry leaders who've revolutionized their strategic decision-making with Clayface"}</p>
                    <CtaButton label="Discover the Solution" class={classes!("cta-button", "cta-button-light")} />
                </div>
            </div>
        </section>
    }
}
