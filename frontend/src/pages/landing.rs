use std::rc::Rc;

use yew::prelude::*;

use crate::components::module_showcase::ModuleShowcase;
use crate::content::{self, ModuleDescriptor};
use crate::hooks::use_scroll_progress;
use crate::sections::{
    call_to_action::CallToAction, crisis::Crisis, footer::Footer, hero::Hero, impact::Impact,
    problem::Problem,
};

fn load_modules() -> Option<Rc<Vec<ModuleDescriptor>>> {
    match content::modules() {
        Ok(modules) => Some(Rc::new(modules)),
        Err(err) => {
            gloo_console::error!(format!("module catalogue rejected: {}", err));
            None
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let progress = use_scroll_progress();
    let modules = use_memo(|_| load_modules(), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let showcase = match &*modules {
        Some(modules) => html! {
            <section id="modules" class="modules-section">
                <div class="section-inner">
                    <div class="section-header">
                        <div class="section-badge section-badge-blue">
                            {format!("⚡ {} Powerful Modules", modules.len())}
                        </div>
                        <h2 class="modules-title">
                            {"Transform From"}
                            <br />
                            <span class="modules-title-gradient">{"Reactive To Proactive"}</span>
                        </h2>
                        <p class="section-lead">
                            {"Everything you need to make confident, data-driven decisions in real-time"}
                        </p>
                    </div>
                </div>
                <ModuleShowcase modules={modules.clone()} />
            </section>
        },
        None => html! {},
    };

    html! {
        <div class="landing-page">
            <Hero {progress} />
            <Problem />
            <Crisis />
            {showcase}
            <Impact />
            <CallToAction {progress} />
            <Footer />
        </div>
    }
}
