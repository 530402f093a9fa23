use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found-page">
            <h1>{"404"}</h1>
            <p class="tagline">{"Page not found"}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"← Back home"}
            </Link<Route>>
        </main>
    }
}
