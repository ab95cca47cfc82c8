//! Scroll-spy: decides which section anchor the navbar should highlight.

/// Vertical distance from the viewport top used as the reference line.
pub const REFERENCE_LINE_PX: f64 = 100.0;

/// Scroll offset past which the header switches to its opaque style.
pub const HEADER_SHADOW_PX: f64 = 10.0;

/// A section's current vertical span in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub anchor: &'static str,
    pub top: f64,
    pub bottom: f64,
}

/// Returns the first section (in list order) whose span contains the
/// reference line. Sections do not overlap in normal layout, so the
/// first-match tie-break only matters in degenerate cases.
pub fn active_section(spans: &[SectionSpan], reference_line: f64) -> Option<&'static str> {
    spans
        .iter()
        .find(|s| s.top <= reference_line && s.bottom >= reference_line)
        .map(|s| s.anchor)
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        // a stack of 600px sections scrolled so "about" straddles the line
        vec![
            SectionSpan { anchor: "home", top: -500.0, bottom: 80.0 },
            SectionSpan { anchor: "about", top: 80.0, bottom: 680.0 },
            SectionSpan { anchor: "skills", top: 680.0, bottom: 1280.0 },
        ]
    }

    #[test]
    fn section_containing_reference_line_is_active() {
        assert_eq!(active_section(&spans(), REFERENCE_LINE_PX), Some("about"));
    }

    #[test]
    fn boundary_belongs_to_the_earlier_section() {
        // line exactly on a shared edge: first match in list order wins
        let spans = vec![
            SectionSpan { anchor: "home", top: 0.0, bottom: 100.0 },
            SectionSpan { anchor: "about", top: 100.0, bottom: 700.0 },
        ];
        assert_eq!(active_section(&spans, 100.0), Some("home"));
    }

    #[test]
    fn no_section_contains_the_line() {
        let spans = vec![SectionSpan { anchor: "home", top: 200.0, bottom: 800.0 }];
        assert_eq!(active_section(&spans, REFERENCE_LINE_PX), None);
        assert_eq!(active_section(&[], REFERENCE_LINE_PX), None);
    }

    #[test]
    fn header_style_flips_past_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(10.0));
        assert!(header_scrolled(10.5));
    }
}
