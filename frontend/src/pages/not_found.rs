use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    {
        let path = location.as_ref().map(|l| l.path().to_string());
        use_effect_with_deps(
            move |path| {
                log::warn!("no route for {}", path.as_deref().unwrap_or("<unknown>"));
                || ()
            },
            path,
        );
    }

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Return to Home"}
            </Link<Route>>
        </div>
    }
}
