/// Entrance state of a mounted view. Only ever moves from `Pending` to `Shown`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Pending,
    Shown,
}

pub const METRIC_PLACEHOLDER: &str = "...";

impl Reveal {
    pub fn is_shown(self) -> bool {
        self == Reveal::Shown
    }

    /// The real value once shown, the placeholder before.
    pub fn value<'a>(self, real: &'a str, placeholder: &'a str) -> &'a str {
        if self.is_shown() {
            real
        } else {
            placeholder
        }
    }

    pub fn metric(self, real: &str) -> &str {
        self.value(real, METRIC_PLACEHOLDER)
    }

    pub fn entrance_class(self) -> &'static str {
        match self {
            Reveal::Shown => "entered",
            Reveal::Pending => "pre-entrance",
        }
    }
}

/// One-shot guard for the reveal timer of a single mount.
///
/// `fire` reports whether the flip should be applied: true exactly once, and
/// never after `disarm` (the view was unmounted).
#[derive(Debug)]
pub struct RevealTimer {
    armed: bool,
    state: Reveal,
}

impl RevealTimer {
    pub fn armed() -> Self {
        Self {
            armed: true,
            state: Reveal::Pending,
        }
    }

    pub fn state(&self) -> Reveal {
        self.state
    }

    pub fn fire(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.armed = false;
        self.state = Reveal::Shown;
        true
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once_per_mount() {
        let mut timer = RevealTimer::armed();
        assert_eq!(timer.state(), Reveal::Pending);
        assert!(timer.fire());
        assert_eq!(timer.state(), Reveal::Shown);
        assert!(!timer.fire());
        assert_eq!(timer.state(), Reveal::Shown);
    }

    #[test]
    fn unmount_before_delay_suppresses_update() {
        let mut timer = RevealTimer::armed();
        timer.disarm();
        assert!(!timer.fire());
        assert_eq!(timer.state(), Reveal::Pending);
    }

    #[test]
    fn disarm_after_fire_keeps_shown() {
        let mut timer = RevealTimer::armed();
        timer.fire();
        timer.disarm();
        assert!(timer.state().is_shown());
    }

    #[test]
    fn placeholder_until_shown() {
        assert_eq!(Reveal::Pending.metric("99.9%"), METRIC_PLACEHOLDER);
        assert_eq!(Reveal::Shown.metric("99.9%"), "99.9%");
        assert_eq!(Reveal::Pending.value("12", "0"), "0");
    }

    #[test]
    fn entrance_classes() {
        assert_eq!(Reveal::default().entrance_class(), "pre-entrance");
        assert_eq!(Reveal::Shown.entrance_class(), "entered");
    }
}
