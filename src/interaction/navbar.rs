use log::debug;

use crate::config::SCROLL_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dropdown {
    Applications,
    Company,
}

impl Dropdown {
    pub fn label(self) -> &'static str {
        match self {
            Dropdown::Applications => "Applications",
            Dropdown::Company => "Company",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    Scrolled(f64),
    PointerEnter(Dropdown),
    PointerLeave,
    PointerDown { inside_dropdown: bool },
    ToggleMobile,
    CloseMobile,
}

/// Navbar state: {top, scrolled} x {closed, open(dropdown)}, plus the
/// independent mobile menu flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub dropdown: Option<Dropdown>,
    pub mobile_open: bool,
}

impl NavbarState {
    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::Scrolled(offset) => {
                self.scrolled = offset >= SCROLL_THRESHOLD_PX;
            }
            NavEvent::PointerEnter(dropdown) => {
                debug!("Opening {} dropdown", dropdown.label());
                self.dropdown = Some(dropdown);
            }
            NavEvent::PointerLeave => {
                self.dropdown = None;
            }
            NavEvent::PointerDown { inside_dropdown } => {
                if !inside_dropdown && self.dropdown.take().is_some() {
                    debug!("Closed dropdown on outside pointer-down");
                }
            }
            NavEvent::ToggleMobile => {
                self.mobile_open = !self.mobile_open;
            }
            NavEvent::CloseMobile => {
                self.mobile_open = false;
            }
        }
    }

    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        self.dropdown == Some(dropdown)
    }

    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "top-nav scrolled"
        } else {
            "top-nav"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_after(events: &[NavEvent]) -> NavbarState {
        let mut state = NavbarState::default();
        for event in events {
            state.apply(*event);
        }
        state
    }

    #[test]
    fn initial_state_is_top_closed() {
        let state = NavbarState::default();
        assert!(!state.scrolled);
        assert_eq!(state.dropdown, None);
        assert!(!state.mobile_open);
        assert_eq!(state.nav_class(), "top-nav");
    }

    #[test]
    fn scroll_crosses_threshold_both_ways() {
        let mut state = NavbarState::default();
        state.apply(NavEvent::Scrolled(100.0));
        assert!(state.scrolled);
        assert_eq!(state.nav_class(), "top-nav scrolled");
        state.apply(NavEvent::Scrolled(0.0));
        assert!(!state.scrolled);
        assert_eq!(state.nav_class(), "top-nav");
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(state_after(&[NavEvent::Scrolled(SCROLL_THRESHOLD_PX)]).scrolled);
        assert!(!state_after(&[NavEvent::Scrolled(SCROLL_THRESHOLD_PX - 0.5)]).scrolled);
    }

    #[test]
    fn dropdowns_are_mutually_exclusive() {
        let state = state_after(&[
            NavEvent::PointerEnter(Dropdown::Applications),
            NavEvent::PointerEnter(Dropdown::Company),
        ]);
        assert!(state.is_open(Dropdown::Company));
        assert!(!state.is_open(Dropdown::Applications));
    }

    #[test]
    fn pointer_leave_closes() {
        let state = state_after(&[
            NavEvent::PointerEnter(Dropdown::Applications),
            NavEvent::PointerLeave,
        ]);
        assert_eq!(state.dropdown, None);
    }

    #[test]
    fn pointer_down_outside_closes_inside_does_not() {
        let mut state = state_after(&[NavEvent::PointerEnter(Dropdown::Applications)]);
        state.apply(NavEvent::PointerDown { inside_dropdown: true });
        assert!(state.is_open(Dropdown::Applications));
        state.apply(NavEvent::PointerDown { inside_dropdown: false });
        assert_eq!(state.dropdown, None);
    }

    #[test]
    fn mobile_menu_is_independent_of_dropdown() {
        let mut state = state_after(&[
            NavEvent::PointerEnter(Dropdown::Company),
            NavEvent::ToggleMobile,
        ]);
        assert!(state.mobile_open);
        assert!(state.is_open(Dropdown::Company));
        state.apply(NavEvent::PointerDown { inside_dropdown: false });
        assert!(state.mobile_open);
        state.apply(NavEvent::ToggleMobile);
        assert!(!state.mobile_open);
        state.apply(NavEvent::ToggleMobile);
        state.apply(NavEvent::CloseMobile);
        assert!(!state.mobile_open);
    }

    #[test]
    fn scrolling_does_not_touch_dropdown() {
        let state = state_after(&[
            NavEvent::PointerEnter(Dropdown::Applications),
            NavEvent::Scrolled(300.0),
        ]);
        assert!(state.scrolled);
        assert!(state.is_open(Dropdown::Applications));
    }
}
