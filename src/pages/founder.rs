use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::config::stagger_style;
use crate::content::model::Icon;
use crate::content::site;
use crate::hooks::use_reveal;

#[function_component(Founder)]
pub fn founder() -> Html {
    let reveal = use_reveal();

    html! {
        <div class="founder-page">
            <section class="founder-hero">
                <div class="founder-badge">
                    <IconGlyph icon={Icon::Brain} />
                    <span>{site::FOUNDER_BADGE}</span>
                </div>
                <h1 class="gradient-text">{site::FOUNDER_NAME}</h1>
                <p class="hero-subtitle">{site::FOUNDER_SUMMARY}</p>
            </section>

            <div class="founder-story">
                { for site::FOUNDER_STORY.iter().enumerate().map(|(i, card)| html! {
                    <section
                        class={classes!("story-card", reveal.entrance_class())}
                        style={stagger_style(i)}
                    >
                        <div class="story-heading">
                            <IconGlyph icon={card.icon} />
                            <h2 class="gradient-text">{card.title}</h2>
                        </div>
                        { for card.paragraphs.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                    </section>
                }) }
            </div>
        </div>
    }
}
