use yew::prelude::*;

use crate::components::section_list::SectionList;
use crate::content::model::PanelMode;
use crate::content::site;
use crate::hooks::use_reveal;

#[function_component(Technologies)]
pub fn technologies() -> Html {
    let reveal = use_reveal();

    html! {
        <div class="technologies-page">
            <div class="particle-background"></div>
            <section class="technologies-hero">
                <h1 class={classes!("gradient-text", reveal.entrance_class())}>{site::TECHNOLOGIES_TITLE}</h1>
                <p>{site::TECHNOLOGIES_SUBTITLE}</p>
            </section>
            <section class="technologies-list">
                <SectionList sections={site::TECHNOLOGIES} mode={PanelMode::Accordion} {reveal} />
            </section>
        </div>
    }
}
