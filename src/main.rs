use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod hooks;
mod interaction {
    pub mod disclosure;
    pub mod navbar;
    pub mod reveal;
}
mod content {
    pub mod model;
    pub mod catalog;
    pub mod industries;
    pub mod site;
}
mod components {
    pub mod icon;
    pub mod nav;
    pub mod footer;
    pub mod layout;
    pub mod metric_grid;
    pub mod scroll_to_top;
    pub mod section_list;
}
mod pages {
    pub mod landing;
    pub mod technologies;
    pub mod founder;
    pub mod industry;
    pub mod not_found;
}

use components::{footer::Footer, nav::Nav, scroll_to_top::ScrollToTop};
use pages::{
    founder::Founder,
    industry::IndustryPage,
    landing::Landing,
    not_found::NotFound,
    technologies::Technologies,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/technologies")]
    Technologies,
    #[at("/founder")]
    Founder,
    #[at("/healthcare")]
    Healthcare,
    #[at("/legal")]
    Legal,
    #[at("/hedge-funds")]
    HedgeFunds,
    #[at("/insurance")]
    Insurance,
    #[at("/banking")]
    Banking,
    #[at("/manufacturing")]
    Manufacturing,
    #[at("/government")]
    Government,
    #[at("/enterprise")]
    Enterprise,
    #[at("/geopolitical-analysts")]
    GeopoliticalAnalysts,
    #[at("/critical-infrastructure")]
    CriticalInfrastructure,
    #[at("/investors")]
    Investors,
    #[at("/advanced-labs")]
    AdvancedLabs,
    #[at("/legislature")]
    Legislature,
    #[at("/intelligence-agencies")]
    IntelligenceAgencies,
    #[at("/hedge-funds-vc")]
    HedgeFundsVc,
    #[at("/opioid-crisis")]
    OpioidCrisis,
    #[at("/myocarditis")]
    Myocarditis,
    #[at("/synthetic-biology")]
    SyntheticBiology,
    #[at("/disinformation")]
    Disinformation,
    #[at("/litigation")]
    Litigation,
    #[at("/fda-programs")]
    FdaPrograms,
    #[at("/carbon-capture")]
    CarbonCapture,
    #[at("/conflict-zones")]
    ConflictZones,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps a pathname to its route, falling back to `NotFound`.
pub fn resolve(pathname: &str) -> Route {
    Route::recognize(pathname).unwrap_or(Route::NotFound)
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Technologies => {
            info!("Rendering Technologies page");
            html! { <Technologies /> }
        }
        Route::Founder => {
            info!("Rendering Founder page");
            html! { <Founder /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
        industry_route => match industry_route.industry() {
            Some(industry) => {
                info!("Rendering {} page", industry.content().name);
                // Keyed so that moving between verticals remounts the page.
                html! { <IndustryPage key={industry.slug()} {industry} /> }
            }
            None => html! { <NotFound /> },
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_pages_resolve() {
        assert_eq!(resolve("/"), Route::Home);
        assert_eq!(resolve("/technologies"), Route::Technologies);
        assert_eq!(resolve("/founder"), Route::Founder);
    }

    #[test]
    fn industry_paths_resolve_to_their_pages() {
        assert_eq!(resolve("/healthcare"), Route::Healthcare);
        assert_eq!(resolve("/hedge-funds"), Route::HedgeFunds);
        assert_eq!(resolve("/hedge-funds-vc"), Route::HedgeFundsVc);
        assert_eq!(resolve("/conflict-zones"), Route::ConflictZones);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(resolve("/contact"), Route::NotFound);
        assert_eq!(resolve("/healthcare/extra"), Route::NotFound);
    }
}
