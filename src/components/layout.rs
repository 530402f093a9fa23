use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::IconGlyph;
use crate::config;
use crate::content::model::Icon;
use crate::interaction::reveal::Reveal;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ApplicationLayoutProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Short industry name shown in the "ARCS for ..." badge.
    pub industry: AttrValue,
    pub reveal: Reveal,
    #[prop_or_default]
    pub children: Children,
}

/// Hero frame shared by the industry pages.
#[function_component(ApplicationLayout)]
pub fn application_layout(props: &ApplicationLayoutProps) -> Html {
    let entrance = props.reveal.entrance_class();

    html! {
        <div class="application-page">
            <div class="application-bar">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to "}{config::BRAND_NAME}
                </Link<Route>>
                <div class="application-badge">
                    <IconGlyph icon={Icon::Brain} />
                    <span class="gradient-text">{format!("ARCS for {}", props.industry)}</span>
                </div>
            </div>

            <header class="application-hero">
                <div class="hero-glow"></div>
                <h1 class={classes!("gradient-text", "reveal", entrance)}>{props.title.clone()}</h1>
                <p class={classes!("hero-subtitle", "reveal", entrance)} style={config::stagger_style(2)}>
                    {props.subtitle.clone()}
                </p>
                <div class="scroll-indicator">{"⌄"}</div>
            </header>

            <main class="application-content">
                { for props.children.iter() }
            </main>
        </div>
    }
}
