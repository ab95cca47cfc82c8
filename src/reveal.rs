//! Shared reveal-on-scroll capability.
//!
//! One intersection observer per registered element; the hidden→revealed
//! transition is one-way per mount. Every section uses this instead of
//! wiring its own observer.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Fraction of the element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Negative bottom margin so elements reveal slightly before they are fully
/// in view.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Per-index delay used to cascade sibling cards instead of popping them in
/// simultaneously.
pub const STAGGER_STEP_MS: u32 = 150;

/// Marks `target` revealed the first time it intersects the viewport past
/// [`REVEAL_THRESHOLD`]. The observer is stopped after the first reveal, so
/// scrolling past the element again can never reverse the transition; it is
/// also cleaned up when the owning component unmounts.
pub fn use_reveal(target: NodeRef<Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);

    let observer = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN),
    );

    let stop = observer.stop.clone();
    Effect::new(move |_| {
        if revealed() {
            stop();
        }
    });

    revealed
}

/// Style state for a reveal target: translated and transparent until it is
/// revealed.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

/// Scale-based variant used by the photo gallery.
pub fn reveal_scale_class(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 scale-100"
    } else {
        "opacity-0 scale-95"
    }
}

/// Slide-from-left variant used by the certification cards.
pub fn reveal_slide_class(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-x-0"
    } else {
        "opacity-0 -translate-x-24"
    }
}

/// Inline `transition-delay` proportional to the element's index in its
/// section, producing a sequential cascade.
pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {}ms", index as u32 * STAGGER_STEP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delay_grows_linearly() {
        assert_eq!(stagger_delay(0), "transition-delay: 0ms");
        assert_eq!(stagger_delay(3), "transition-delay: 450ms");
    }

    #[test]
    fn reveal_classes_are_disjoint() {
        assert_ne!(reveal_class(true), reveal_class(false));
        assert_ne!(reveal_scale_class(true), reveal_scale_class(false));
        assert_ne!(reveal_slide_class(true), reveal_slide_class(false));
    }
}
