use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Resets the viewport to the top whenever the active route changes.
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let route = use_route::<Route>();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        route,
    );

    html! {}
}
