use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::morphing_card::MorphingCard;
use crate::hooks::{use_in_view, InViewOptions};

const ENTRANCE: InViewOptions = InViewOptions::once(0.2);

#[function_component(Impact)]
pub fn impact() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), ENTRANCE);

    html! {
        <section ref={node} id="impact" class="impact-section">
            <div class="section-inner">
                <div class="section-header">
                    <div class="section-badge section-badge-green">{"🎯 Proven Results"}</div>
                    <h2 class="impact-title">
                        {"The Impact Is"}
                        <br />
                        <span class="impact-title-gradient">{"Immediate"}</span>
                    </h2>
                    <p class="section-lead">
                        {"See how Clayface transforms CPG brand management from the first week"}
                    </p>
                </div>

                <div class="impact-grid">
                    <MorphingCard {in_view} delay={0.2} class={classes!("impact-card", "impact-green")}>
                        <div class="impact-icon">{"🧠"}</div>
                        <div class="impact-value">
                            <Counter from={0.0} to={2.0} suffix="-3 weeks" {in_view} />
                        </div>
                        <div class="impact-label">{"Saved per QBR"}</div>
                        <div class="impact-detail">{"Automated report generation eliminates manual deck creation"}</div>
                        <div class="impact-footnote">
                            {"= "}
                            <Counter from={0.0} to={45.0} prefix="$" suffix="K+ annual savings per brand manager" {in_view} />
                        </div>
                    </MorphingCard>

                    <MorphingCard {in_view} delay={0.4} class={classes!("impact-card", "impact-blue")}>
                        <div class="impact-icon">{"⚡"}</div>
                        <div class="impact-value">{"Minutes"}</div>
                        <div class="impact-label">{"Not months for insights"}</div>
                        <div class="impact-detail">{"Real-time alerts and instant diagnostics"}</div>
                        <div class="impact-footnote">
                            <Counter from={0.0} to={500.0} suffix="x faster than traditional methods" {in_view} />
                        </div>
                    </MorphingCard>

                    <MorphingCard {in_view} delay={0.6} class={classes!("impact-card", "impact-purple")}>
                        <div class="impact-icon">{"🎯"}</div>
                        <div class="impact-value">{"Single"}</div>
                        <div class="impact-label">{"Source of truth"}</div>
                        <div class="impact-detail">{"Unified data across all channels and touchpoints"}</div>
                        <div class="impact-footnote">{"Eliminates data silos completely"}</div>
                    </MorphingCard>

                    <MorphingCard {in_view} delay={0.8} class={classes!("impact-card", "impact-orange")}>
                        <div class="impact-icon">{"⚠"}</div>
                        <div class="impact-value">{"Real-time"}</div>
                        <div class="impact-label">{"Competitor alerts"}</div>
                        <div class="impact-detail">{"Instant notifications for threats and opportunities"}</div>
                        <div class="impact-footnote">{"React before competitors do"}</div>
                    </MorphingCard>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figures_count_up_once() {
        assert!(ENTRANCE.once);
        assert_eq!(ENTRANCE.amount, 0.2);
    }
}
