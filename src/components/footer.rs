use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::industries::application_entries;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let applications = application_entries();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="gradient-text">{config::BRAND_NAME}</span>
                    <p>{"Adaptive regulatory compliance for a changing world."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Applications"}</h4>
                    <ul>
                        { for applications.iter().map(|entry| html! {
                            <li><Link<Route> to={entry.route.clone()}>{entry.name}</Link<Route>></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Technologies}>{"Technologies"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Founder}>{"Our Founder"}</Link<Route>></li>
                        <li><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer-legal">{format!("© {}. All rights reserved.", config::BRAND_NAME)}</p>
        </footer>
    }
}
