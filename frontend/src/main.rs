use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::use_window_scroll;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod content;
mod error;
mod hooks;
mod motion;
mod components {
    pub mod counter;
    pub mod cta_button;
    pub mod module_showcase;
    pub mod morphing_card;
    pub mod reveal_text;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod sections {
    pub mod call_to_action;
    pub mod crisis;
    pub mod footer;
    pub mod hero;
    pub mod impact;
    pub mod problem;
}

use components::cta_button::CtaButton;
use hooks::use_scroll_progress;
use motion::Easing;
use pages::{landing::Landing, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("Problem", "#problem"),
    ("Modules", "#modules"),
    ("Impact", "#impact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;
    let progress = use_scroll_progress();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"clayface"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(label, anchor)| html! {
                            <a key={*label} href={*anchor} class="nav-link" onclick={close_menu.clone()}>
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <CtaButton label="Get started" class={classes!("cta-button", "nav-cta-button")} />
                    </div>
                </div>
            </div>
            <div
                class="scroll-progress"
                style={format!("width: {:.2}%; transition: width 0.1s {};", progress * 100.0, Easing::Linear.css())}
            ></div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
