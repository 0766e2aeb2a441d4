use std::rc::Rc;

use yew::prelude::*;

use crate::components::cta_button::CtaButton;
use crate::config;
use crate::content::ModuleDescriptor;
use crate::hooks::{use_scroll_activation, ActivationSource};

#[derive(Properties, PartialEq)]
struct ModuleCardProps {
    module: ModuleDescriptor,
}

#[function_component(ModuleCard)]
fn module_card(props: &ModuleCardProps) -> Html {
    let module = &props.module;
    let colors = module.color.classes();

    html! {
        <div class="module-card module-enter">
            <div class="module-info">
                <div class={classes!("module-badge", colors.bg, colors.border)}>
                    <span class={classes!("module-badge-number", colors.icon)}>{module.id.to_string()}</span>
                </div>
                <div class="module-kicker">{format!("Module {}", module.id)}</div>
                <h3 class="module-title">{module.title.clone()}</h3>
                <p class="module-subtitle">{module.subtitle.clone()}</p>
                <p class="module-description">{module.description.clone()}</p>
                <ul class="module-features">
                    { for module.features.iter().enumerate().map(|(idx, feature)| html! {
                        <li key={idx} class="module-feature" style={format!("animation-delay: {:.1}s;", idx as f64 * 0.1)}>
                            <span class={classes!("module-feature-dot", colors.text)}>{"●"}</span>
                            {feature.clone()}
                        </li>
                    }) }
                </ul>
                <CtaButton label="View Demo" class={classes!("cta-button", "cta-button-blue")} />
            </div>
            <div class="module-media">
                <div class="browser-frame">
                    <div class="browser-bar">
                        <span class="browser-dot red"></span>
                        <span class="browser-dot yellow"></span>
                        <span class="browser-dot green"></span>
                        <span class="browser-url">{"clayface.ai/dashboard"}</span>
                    </div>
                    <img
                        key={module.id}
                        class="module-screenshot"
                        src={config::asset_url(&module.media)}
                        alt={format!("{} Interface", module.title)}
                        loading="lazy"
                    />
                </div>
                <div class="floating-chip chip-live">{"✓ Live"}</div>
                <div class="floating-chip chip-realtime">{"Real-time Data"}</div>
            </div>
        </div>
    }
}

/// The region stack only exists to be observed. It overlaps the sticky panel,
/// so it must never take clicks meant for the dots or the demo button.
const REGION_STACK_STYLE: &str = "pointer-events: none;";
const STICKY_PANEL_STYLE: &str = "z-index: 1;";

#[derive(Properties, PartialEq)]
pub struct ModuleShowcaseProps {
    pub modules: Rc<Vec<ModuleDescriptor>>,
    #[prop_or(ActivationSource::Intersection)]
    pub source: ActivationSource,
}

/// Product modules, one active at a time. Scrolling through the tall region
/// stack moves the sticky panel along; without an intersection signal the
/// panel turns into a timed carousel. Indicator dots override either.
#[function_component(ModuleShowcase)]
pub fn module_showcase(props: &ModuleShowcaseProps) -> Html {
    let container = use_node_ref();
    let activation = use_scroll_activation(
        container.clone(),
        props.modules.len(),
        config::showcase_activation(),
        props.source,
    );

    let Some(active) = props.modules.get(activation.active) else {
        return html! {};
    };

    let dots = html! {
        <div class="module-dots">
            { for props.modules.iter().enumerate().map(|(index, module)| {
                let select = activation.select.clone();
                let current = index == activation.active;
                html! {
                    <button
                        key={module.id}
                        class={classes!("module-dot", current.then_some("active"))}
                        aria-label={format!("Show {}", module.title)}
                        aria-current={current.then_some("true")}
                        onclick={Callback::from(move |_: MouseEvent| select.emit(index))}
                    />
                }
            }) }
        </div>
    };

    let panel = html! {
        <>
            <ModuleCard key={active.id} module={active.clone()} />
            {dots}
        </>
    };

    match activation.source {
        ActivationSource::Intersection => html! {
            <div ref={container} class="showcase-scroll">
                <div class="showcase-sticky" style={STICKY_PANEL_STYLE}>{panel}</div>
                <div class="showcase-regions" style={REGION_STACK_STYLE}>
                    { for props.modules.iter().enumerate().map(|(index, module)| html! {
                        <div
                            key={module.id}
                            class="showcase-region"
                            data-region-index={index.to_string()}
                            aria-hidden="true"
                        />
                    }) }
                </div>
            </div>
        },
        ActivationSource::Timer => html! {
            <div ref={container} class="showcase-carousel">{panel}</div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_stack_lets_clicks_through_to_the_panel() {
        assert!(REGION_STACK_STYLE.contains("pointer-events: none"));
        assert!(STICKY_PANEL_STYLE.contains("z-index: 1"));
    }

    #[test]
    fn stylesheet_keeps_the_panel_above_the_regions() {
        let css = include_str!("../../styles.css");
        let regions = css
            .lines()
            .find(|line| line.starts_with(".showcase-regions"))
            .unwrap();
        assert!(regions.contains("pointer-events: none"));
        let sticky = &css[css.find(".showcase-sticky {").unwrap()..];
        let sticky = &sticky[..sticky.find('}').unwrap()];
        assert!(sticky.contains("z-index: 1"));
    }
}
