use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::metric_grid::MetricGrid;
use crate::config::stagger_style;
use crate::content::model::{PanelMode, Section};
use crate::interaction::disclosure::{Disclosure, DisclosureAction};
use crate::interaction::reveal::Reveal;

impl Reducible for Disclosure {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: DisclosureAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionListProps {
    pub sections: &'static [Section],
    pub mode: PanelMode,
    pub reveal: Reveal,
}

/// Cards for a fixed list of sections with at most one detail panel open.
#[function_component(SectionList)]
pub fn section_list(props: &SectionListProps) -> Html {
    let sections = props.sections;
    let disclosure = use_reducer(|| Disclosure::new(sections.len()));

    let layout = match props.mode {
        PanelMode::Accordion => "accordion",
        PanelMode::Hover => "hover-grid",
        PanelMode::Static => "static-grid",
    };
    let has_open = disclosure.expanded().is_some();

    html! {
        <div class={classes!("section-list", layout, has_open.then(|| "has-open"))}>
            { for sections.iter().enumerate().map(|(index, section)| {
                let open = match props.mode {
                    PanelMode::Static => true,
                    PanelMode::Accordion | PanelMode::Hover => disclosure.is_expanded(index),
                };
                let (onclick, onmouseenter, onmouseleave) = match props.mode {
                    PanelMode::Accordion => {
                        let disclosure = disclosure.clone();
                        (
                            Some(Callback::from(move |_: MouseEvent| {
                                disclosure.dispatch(DisclosureAction::Toggle(index))
                            })),
                            None,
                            None,
                        )
                    }
                    PanelMode::Hover => {
                        let enter = disclosure.clone();
                        let leave = disclosure.clone();
                        (
                            None,
                            Some(Callback::from(move |_: MouseEvent| {
                                enter.dispatch(DisclosureAction::Open(index))
                            })),
                            Some(Callback::from(move |_: MouseEvent| {
                                leave.dispatch(DisclosureAction::Close)
                            })),
                        )
                    }
                    PanelMode::Static => (None, None, None),
                };
                let clickable = onclick.is_some();

                html! {
                    <div
                        key={index}
                        class={classes!("section-card", props.reveal.entrance_class(), open.then(|| "expanded"))}
                        style={stagger_style(index)}
                        {onmouseenter}
                        {onmouseleave}
                    >
                        <div class={classes!("section-header", clickable.then(|| "clickable"))} {onclick}>
                            <div class="section-heading">
                                <IconGlyph icon={section.icon} />
                                <h3 class="gradient-text">{section.title}</h3>
                            </div>
                            {
                                if props.mode == PanelMode::Accordion {
                                    html! { <span class="chevron">{if open { "▲" } else { "▼" }}</span> }
                                } else {
                                    html! {}
                                }
                            }
                            <p class="section-description">{section.description}</p>
                        </div>
                        { if open { section_details(section, props.reveal) } else { html! {} } }
                    </div>
                }
            }) }
        </div>
    }
}

fn section_details(section: &Section, reveal: Reveal) -> Html {
    if section.benefits.is_empty() && section.metrics.is_empty() {
        return html! {};
    }

    html! {
        <div class="section-details">
            <MetricGrid metrics={section.metrics} {reveal} />
            {
                if section.benefits.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h4>{"Key Benefits"}</h4>
                            <ul class="benefit-list">
                                { for section.benefits.iter().map(|benefit| html! {
                                    <li><span class="bullet"></span><span>{*benefit}</span></li>
                                }) }
                            </ul>
                        </>
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_open_keeps_the_same_state() {
        let state = Rc::new(Disclosure::new(3));
        let opened = state.clone().reduce(DisclosureAction::Open(1));
        assert!(!Rc::ptr_eq(&state, &opened));
        assert!(opened.is_expanded(1));

        let again = opened.clone().reduce(DisclosureAction::Open(1));
        assert!(Rc::ptr_eq(&opened, &again));
    }

    #[test]
    fn closing_when_nothing_is_open_keeps_the_same_state() {
        let state = Rc::new(Disclosure::new(3));
        let closed = state.clone().reduce(DisclosureAction::Close);
        assert!(Rc::ptr_eq(&state, &closed));
    }
}
