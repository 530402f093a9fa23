use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::metric_grid::MetricGrid;
use crate::components::section_list::SectionList;
use crate::config;
use crate::content::model::{Icon, PanelMode};
use crate::content::site;
use crate::hooks::use_reveal;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let reveal = use_reveal();

    html! {
        <main class="landing-page">
            <header class="hero">
                <div class="hero-background"></div>
                <div class={classes!("hero-content", reveal.entrance_class())}>
                    <h1 class="gradient-text">{site::HERO_TITLE}</h1>
                    <p class="hero-subtitle">{site::HERO_SUBTITLE}</p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Technologies} classes="forward-link">
                            <button class="hero-cta">{"Explore Technologies"}</button>
                        </Link<Route>>
                        <a href="#contact" class="secondary-link">{"Contact Us"}</a>
                    </div>
                    <MetricGrid metrics={site::HERO_STATS} {reveal} class="hero-stats" />
                </div>
            </header>

            <section class="about" id="about">
                <h2 class="gradient-text">{site::ABOUT_TITLE}</h2>
                { for site::ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
            </section>

            <section class="leadership">
                <h2>{"Leadership"}</h2>
                { for site::LEADERSHIP.iter().map(|leader| html! {
                    <div class="leader-card">
                        <IconGlyph icon={Icon::Award} />
                        <div>
                            <h3>{leader.name}</h3>
                            <span class="leader-role">{leader.role}</span>
                            <p>{leader.summary}</p>
                            <Link<Route> to={Route::Founder} classes="forward-link">{"Read the story →"}</Link<Route>>
                        </div>
                    </div>
                }) }
            </section>

            <section class="features">
                <h2>{"Why ARCS"}</h2>
                <SectionList sections={site::FEATURES} mode={PanelMode::Static} {reveal} />
            </section>

            <section class="technologies-preview">
                <h2>{site::TECHNOLOGIES_TITLE}</h2>
                <p>{site::TECHNOLOGIES_SUBTITLE}</p>
                <SectionList sections={site::TECHNOLOGIES} mode={PanelMode::Accordion} {reveal} />
            </section>

            <section class="contact" id="contact">
                <h2>{"Get in Touch"}</h2>
                <p>{"Talk to us about adaptive compliance for your organization."}</p>
                <a class="hero-cta" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                    {config::CONTACT_EMAIL}
                </a>
            </section>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                }

                .hero-content {
                    max-width: 900px;
                    transition: transform 0.6s ease, opacity 0.6s ease;
                }

                .hero-content.pre-entrance {
                    transform: translateY(1rem);
                    opacity: 0;
                }

                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                @media (max-width: 768px) {
                    .hero-stats {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                .about, .leadership, .features, .technologies-preview, .contact {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                "#}
            </style>
        </main>
    }
}
