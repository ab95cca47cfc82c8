//! Modal selection state for image galleries, plus the keyboard contract.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

/// Selection over a fixed ordered list of `len` items. Navigation wraps in
/// both directions; `next`/`previous` are no-ops while nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    selected: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, selected: None }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % self.len);
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + self.len - 1) % self.len);
        }
    }
}

/// Binds Escape / ArrowRight / ArrowLeft to the lightbox while it is open.
/// The listener is removed when the owning component unmounts; while nothing
/// is selected, key presses fall through untouched.
pub fn use_lightbox_keys(lightbox: RwSignal<Lightbox>) {
    let _ = use_event_listener(use_window(), leptos::ev::keydown, move |ev: KeyboardEvent| {
        if !lightbox.with_untracked(|lb| lb.is_open()) {
            return;
        }
        match ev.key().as_str() {
            "Escape" => lightbox.update(|lb| lb.close()),
            "ArrowRight" => lightbox.update(|lb| lb.next()),
            "ArrowLeft" => lightbox.update(|lb| lb.previous()),
            _ => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_close_clears_selection() {
        let mut lb = Lightbox::new(4);
        assert!(!lb.is_open());
        lb.open(2);
        assert_eq!(lb.selected(), Some(2));
        lb.close();
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut lb = Lightbox::new(3);
        lb.open(2);
        lb.next();
        assert_eq!(lb.selected(), Some(0));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut lb = Lightbox::new(3);
        lb.open(0);
        lb.previous();
        assert_eq!(lb.selected(), Some(2));
    }

    #[test]
    fn navigation_is_noop_while_closed() {
        let mut lb = Lightbox::new(3);
        lb.next();
        lb.previous();
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut lb = Lightbox::new(3);
        lb.open(3);
        assert!(!lb.is_open());
    }

    #[test]
    fn full_cycle_visits_every_index() {
        let mut lb = Lightbox::new(5);
        lb.open(0);
        let mut seen = vec![0];
        for _ in 0..4 {
            lb.next();
            seen.push(lb.selected().unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        lb.next();
        assert_eq!(lb.selected(), Some(0));
    }
}
