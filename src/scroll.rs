//! Scroll-position bookkeeping for the single-page layout.
//!
//! Everything here is plain arithmetic over layout metrics so it can be
//! exercised without a browser. The components read the DOM, call into
//! these functions, and write the results back into signals.

/// Extra offset added to the scroll position before comparing against
/// section tops, so a section activates slightly before it reaches the
/// top of the viewport.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// Height of the fixed navigation bar. Scroll targets subtract this so
/// the section heading lands below the bar.
pub const HEADER_OFFSET: f64 = 80.0;

/// Scroll depth past which the navigation bar switches to its elevated
/// style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll depth past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Breakpoint at which the collapsible mobile menu gives way to the
/// inline desktop links. Matches the `lg:` classes in the markup.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element id of the section's anchor in the rendered document.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Link text shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

/// Resolves which section the navigation bar should highlight.
///
/// `tops` holds `(section, top offset)` pairs in document order. The
/// active section is the last one whose top is at or above the adjusted
/// scroll position. Scrolled above every section resolves to the first;
/// scrolled past every section resolves to the last.
pub fn active_section(scroll_y: f64, tops: &[(SectionId, f64)]) -> SectionId {
    let adjusted = scroll_y + SCROLL_LOOKAHEAD;
    let mut active = match tops.first() {
        Some((id, _)) => *id,
        None => SectionId::Home,
    };
    for (id, top) in tops {
        if adjusted >= *top {
            active = *id;
        }
    }
    active
}

/// Percentage of the total scrollable distance traversed, in [0, 100].
///
/// A document no taller than the viewport has no scrollable distance and
/// reports 0 rather than dividing by zero.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// Scroll offset that places a section heading just below the fixed
/// navigation bar. Never negative.
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - HEADER_OFFSET).max(0.0)
}

/// Collapsible mobile menu. Selecting a navigation entry or crossing
/// into the desktop breakpoint forces it closed from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Section tops used throughout: five sections, 800px apart.
    fn tops() -> Vec<(SectionId, f64)> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i as f64 * 800.0))
            .collect()
    }

    #[test]
    fn test_active_section_at_top_of_page() {
        assert_eq!(active_section(0.0, &tops()), SectionId::Home);
    }

    #[test]
    fn test_active_section_within_each_band() {
        let tops = tops();
        // For offsets strictly between adjusted section boundaries the
        // earlier section stays active.
        for (i, (id, top)) in tops.iter().enumerate() {
            let band_start = top - SCROLL_LOOKAHEAD;
            let probe = band_start + 1.0;
            if probe >= 0.0 {
                assert_eq!(active_section(probe, &tops), *id);
            }
            if let Some((next_id, next_top)) = tops.get(i + 1) {
                assert_eq!(active_section(next_top - SCROLL_LOOKAHEAD - 1.0, &tops), *id);
                assert_eq!(active_section(next_top - SCROLL_LOOKAHEAD, &tops), *next_id);
            }
        }
    }

    #[test]
    fn test_active_section_above_all_sections() {
        // Pushed below the fold by a tall banner; nothing qualifies yet.
        let shifted: Vec<_> = tops().iter().map(|(id, t)| (*id, t + 600.0)).collect();
        assert_eq!(active_section(0.0, &shifted), SectionId::Home);
    }

    #[test]
    fn test_active_section_beyond_all_sections() {
        assert_eq!(active_section(100_000.0, &tops()), SectionId::Contact);
    }

    #[test]
    fn test_active_section_empty_tops() {
        assert_eq!(active_section(1234.0, &[]), SectionId::Home);
    }

    #[test]
    fn test_scroll_progress_endpoints() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_scroll_progress_midpoint() {
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
    }

    #[test]
    fn test_scroll_progress_monotonic() {
        let mut last = 0.0;
        for y in (0..=2000).step_by(50) {
            let p = scroll_progress(y as f64, 3000.0, 1000.0);
            assert!(p >= last, "progress regressed at offset {y}");
            last = p;
        }
    }

    #[test]
    fn test_scroll_progress_unscrollable_document() {
        assert_eq!(scroll_progress(0.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 500.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_clamped_on_overscroll() {
        // Rubber-band overscroll can report offsets past the maximum.
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-50.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_target_offsets_header() {
        assert_eq!(scroll_target(800.0), 800.0 - HEADER_OFFSET);
    }

    #[test]
    fn test_scroll_target_never_negative() {
        assert_eq!(scroll_target(0.0), 0.0);
        assert_eq!(scroll_target(HEADER_OFFSET / 2.0), 0.0);
    }

    #[test]
    fn test_scroll_target_idempotent_inputs() {
        // Same target, same final position.
        assert_eq!(scroll_target(1600.0), scroll_target(1600.0));
    }

    #[test]
    fn test_menu_toggle_flips_state() {
        assert_eq!(MenuState::Closed.toggled(), MenuState::Open);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    #[test]
    fn test_menu_default_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_section_ids_match_document_anchors() {
        let ids: Vec<_> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            ids,
            vec!["home", "about", "experience", "projects", "contact"]
        );
    }
}
