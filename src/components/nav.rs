use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::IconGlyph;
use crate::config;
use crate::content::industries::application_entries;
use crate::content::model::Icon;
use crate::hooks::{use_pointer_down_inside, use_window_scroll};
use crate::interaction::navbar::{Dropdown, NavEvent, NavbarState};
use crate::Route;

const DROPDOWN_SELECTOR: &str = ".dropdown-container";

impl Reducible for NavbarState {
    type Action = NavEvent;

    fn reduce(self: Rc<Self>, action: NavEvent) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

enum CompanyTarget {
    Page(Route),
    Anchor(&'static str),
}

struct CompanyLink {
    label: &'static str,
    target: CompanyTarget,
}

const COMPANY_LINKS: &[CompanyLink] = &[
    CompanyLink { label: "Technologies", target: CompanyTarget::Page(Route::Technologies) },
    CompanyLink { label: "Our Founder", target: CompanyTarget::Page(Route::Founder) },
    CompanyLink { label: "Contact", target: CompanyTarget::Anchor("/#contact") },
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let state = use_reducer(NavbarState::default);

    {
        let state = state.clone();
        use_window_scroll(Callback::from(move |offset: f64| {
            state.dispatch(NavEvent::Scrolled(offset));
        }));
    }
    {
        let state = state.clone();
        use_pointer_down_inside(
            DROPDOWN_SELECTOR,
            Callback::from(move |inside_dropdown: bool| {
                state.dispatch(NavEvent::PointerDown { inside_dropdown });
            }),
        );
    }

    let enter = |dropdown: Dropdown| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavEvent::PointerEnter(dropdown)))
    };
    let leave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavEvent::PointerLeave))
    };
    let toggle_mobile = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavEvent::ToggleMobile);
        })
    };
    let close_mobile = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavEvent::CloseMobile))
    };

    let applications = application_entries();

    html! {
        <nav class={state.nav_class()}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <IconGlyph icon={Icon::Brain} />
                    <span class="gradient-text">{config::BRAND_NAME}</span>
                </Link<Route>>

                <div class="nav-desktop">
                    <div
                        class="dropdown-container"
                        onmouseenter={enter(Dropdown::Applications)}
                        onmouseleave={leave.clone()}
                    >
                        <button class="nav-link dropdown-trigger">
                            {Dropdown::Applications.label()}{" ▾"}
                        </button>
                        {
                            if state.is_open(Dropdown::Applications) {
                                html! {
                                    <div class="dropdown-menu applications-menu">
                                        { for applications.iter().map(|entry| html! {
                                            <Link<Route> to={entry.route.clone()} classes="dropdown-item">
                                                <IconGlyph icon={entry.icon} />
                                                <div>
                                                    <div class="dropdown-item-name">{entry.name}</div>
                                                    <p class="dropdown-item-description">{entry.description}</p>
                                                </div>
                                            </Link<Route>>
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>

                    <div
                        class="dropdown-container"
                        onmouseenter={enter(Dropdown::Company)}
                        onmouseleave={leave}
                    >
                        <button class="nav-link dropdown-trigger">
                            {Dropdown::Company.label()}{" ▾"}
                        </button>
                        {
                            if state.is_open(Dropdown::Company) {
                                html! {
                                    <div class="dropdown-menu company-menu">
                                        { for COMPANY_LINKS.iter().map(company_link) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>

                <button class="burger-menu" onclick={toggle_mobile}>
                    {if state.mobile_open { "✕" } else { "☰" }}
                </button>
            </div>

            {
                if state.mobile_open {
                    html! {
                        <div class="mobile-menu">
                            { for applications.iter().map(|entry| html! {
                                <div onclick={close_mobile.clone()}>
                                    <Link<Route> to={entry.route.clone()} classes="mobile-link">
                                        <IconGlyph icon={entry.icon} />
                                        <span>{entry.name}</span>
                                    </Link<Route>>
                                </div>
                            }) }
                            { for COMPANY_LINKS.iter().map(|link| html! {
                                <div onclick={close_mobile.clone()}>
                                    { company_link(link) }
                                </div>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

fn company_link(link: &CompanyLink) -> Html {
    match &link.target {
        CompanyTarget::Page(route) => html! {
            <Link<Route> to={route.clone()} classes="dropdown-item">{link.label}</Link<Route>>
        },
        CompanyTarget::Anchor(href) => html! {
            <a href={*href} class="dropdown-item">{link.label}</a>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_links_target_pages_or_the_contact_anchor() {
        let pages: Vec<&Route> = COMPANY_LINKS
            .iter()
            .filter_map(|link| match &link.target {
                CompanyTarget::Page(route) => Some(route),
                CompanyTarget::Anchor(_) => None,
            })
            .collect();
        assert_eq!(pages, vec![&Route::Technologies, &Route::Founder]);

        let anchors: Vec<&str> = COMPANY_LINKS
            .iter()
            .filter_map(|link| match link.target {
                CompanyTarget::Anchor(href) => Some(href),
                CompanyTarget::Page(_) => None,
            })
            .collect();
        assert_eq!(anchors, vec!["/#contact"]);
    }

    #[test]
    fn unchanged_navbar_state_is_not_replaced() {
        let state = Rc::new(NavbarState::default());
        let same = state.clone().reduce(NavEvent::PointerLeave);
        assert!(Rc::ptr_eq(&state, &same));

        let opened = state.clone().reduce(NavEvent::PointerEnter(Dropdown::Company));
        assert!(opened.is_open(Dropdown::Company));
    }
}
