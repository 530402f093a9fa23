use log::{debug, warn};

/// Single-select expand/collapse state over a fixed list of `len` panels.
///
/// At most one panel is open at a time. Opening a panel implicitly closes
/// whichever one was open before.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disclosure {
    len: usize,
    expanded: Option<usize>,
}

impl Disclosure {
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Closes `index` if it is the open panel, otherwise opens it.
    pub fn toggle(&mut self, index: usize) {
        if !self.in_range(index) {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!("Disclosure toggled {} -> {:?}", index, self.expanded);
    }

    pub fn open(&mut self, index: usize) {
        if self.in_range(index) {
            self.expanded = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.expanded = None;
    }

    fn in_range(&self, index: usize) -> bool {
        if index < self.len {
            true
        } else {
            warn!("Ignoring panel index {} (only {} panels)", index, self.len);
            false
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureAction {
    Toggle(usize),
    Open(usize),
    Close,
}

impl Disclosure {
    pub fn apply(&mut self, action: DisclosureAction) {
        match action {
            DisclosureAction::Toggle(index) => self.toggle(index),
            DisclosureAction::Open(index) => self.open(index),
            DisclosureAction::Close => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_expanded() {
        let d = Disclosure::new(4);
        assert_eq!(d.expanded(), None);
        assert!((0..4).all(|i| !d.is_expanded(i)));
    }

    #[test]
    fn toggling_same_index_twice_collapses() {
        let mut d = Disclosure::new(4);
        d.toggle(2);
        assert!(d.is_expanded(2));
        d.toggle(2);
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn opening_another_panel_closes_the_first() {
        let mut d = Disclosure::new(4);
        d.toggle(1);
        d.toggle(3);
        assert_eq!(d.expanded(), Some(3));
        assert!(!d.is_expanded(1));
        assert_eq!((0..4).filter(|&i| d.is_expanded(i)).count(), 1);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut d = Disclosure::new(2);
        d.toggle(0);
        d.toggle(5);
        d.open(2);
        assert_eq!(d.expanded(), Some(0));
    }

    #[test]
    fn hover_actions_open_and_close() {
        let mut d = Disclosure::new(3);
        d.apply(DisclosureAction::Open(1));
        assert!(d.is_expanded(1));
        d.apply(DisclosureAction::Open(2));
        assert_eq!(d.expanded(), Some(2));
        d.apply(DisclosureAction::Close);
        assert_eq!(d.expanded(), None);
    }

    #[test]
    fn empty_list_never_expands() {
        let mut d = Disclosure::new(0);
        d.toggle(0);
        d.open(0);
        assert_eq!(d.expanded(), None);
    }
}
