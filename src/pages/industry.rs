use yew::prelude::*;

use crate::components::layout::ApplicationLayout;
use crate::components::metric_grid::MetricGrid;
use crate::components::section_list::SectionList;
use crate::content::industries::Industry;
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct IndustryPageProps {
    pub industry: Industry,
}

/// Renders any industry vertical from its static content.
#[function_component(IndustryPage)]
pub fn industry_page(props: &IndustryPageProps) -> Html {
    let content = props.industry.content();
    let reveal = use_reveal();

    html! {
        <ApplicationLayout
            title={content.title}
            subtitle={content.subtitle}
            industry={content.label}
            {reveal}
        >
            <MetricGrid metrics={content.highlights} {reveal} class="highlight-grid" />
            <SectionList sections={content.sections} mode={content.mode} {reveal} />
            <style>
                {r#"
                .application-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                }

                .highlight-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1rem;
                    margin-bottom: 3rem;
                }

                .section-list.accordion {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .section-list.hover-grid,
                .section-list.static-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                }

                .section-card {
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.08);
                    transition: transform 0.5s ease, opacity 0.5s ease;
                }

                .section-card.pre-entrance {
                    transform: translateY(1rem);
                    opacity: 0;
                }

                .section-card.entered {
                    transform: translateY(0);
                    opacity: 1;
                }

                .section-header {
                    padding: 1.5rem;
                }

                .section-list.hover-grid.has-open .section-card:not(.expanded) {
                    opacity: 0.7;
                }

                .section-header.clickable {
                    cursor: pointer;
                }

                .section-details {
                    padding: 0 1.5rem 1.5rem;
                    border-top: 1px solid #f1f5f9;
                }
                "#}
            </style>
        </ApplicationLayout>
    }
}
