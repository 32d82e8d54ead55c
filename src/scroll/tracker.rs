use super::header::{reduce, HeaderInput, HeaderStyle, ScrollDirection};
use super::sections::{active_section, SectionBounds, SectionId};

/// What the page renders from the scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrollSnapshot {
    pub header: HeaderStyle,
    pub active: Option<SectionId>,
}

/// Scroll-derived state of one page session.
///
/// Created once by the home page and shared with the scroll binding through an
/// `Rc<RefCell<_>>` handle.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    last_offset: f64,
    hovered: bool,
    header: HeaderStyle,
    active: Option<SectionId>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            header: self.header,
            active: self.active,
        }
    }

    /// Recompute from a fresh scroll offset and the current section layout.
    ///
    /// When no section contains the probe the previous highlight stays.
    pub fn tick<I>(&mut self, offset: f64, bounds: I) -> ScrollSnapshot
    where
        I: IntoIterator<Item = (SectionId, SectionBounds)>,
    {
        let direction = ScrollDirection::between(self.last_offset, offset);
        self.apply(offset, direction, bounds)
    }

    /// First reading after mount. The page may have been restored mid-way, so
    /// the offset is taken as the starting point rather than as movement.
    pub fn prime<I>(&mut self, offset: f64, bounds: I) -> ScrollSnapshot
    where
        I: IntoIterator<Item = (SectionId, SectionBounds)>,
    {
        self.apply(offset, ScrollDirection::Still, bounds)
    }

    fn apply<I>(&mut self, offset: f64, direction: ScrollDirection, bounds: I) -> ScrollSnapshot
    where
        I: IntoIterator<Item = (SectionId, SectionBounds)>,
    {
        self.header = reduce(
            self.header,
            HeaderInput {
                offset,
                direction,
                hovered: self.hovered,
            },
        );
        if let Some(section) = active_section(offset, bounds) {
            self.active = Some(section);
        }
        // Overscroll on touch devices reports negative offsets.
        self.last_offset = offset.max(0.0);
        self.snapshot()
    }

    pub fn set_hovered(&mut self, hovered: bool) -> ScrollSnapshot {
        self.hovered = hovered;
        self.header = reduce(
            self.header,
            HeaderInput {
                offset: self.last_offset,
                direction: ScrollDirection::Still,
                hovered,
            },
        );
        self.snapshot()
    }

    /// Highlight a section right away, ahead of the scroll that follows a nav click.
    pub fn select(&mut self, section: SectionId) -> ScrollSnapshot {
        self.active = Some(section);
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::header::{Background, Visibility};

    fn page() -> Vec<(SectionId, SectionBounds)> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                (
                    *id,
                    SectionBounds {
                        top: i as f64 * 1_000.0,
                        height: 1_000.0,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn starts_visible_and_transparent() {
        let tracker = ScrollTracker::new();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.header.visibility, Visibility::Visible);
        assert_eq!(snapshot.header.background, Background::Transparent);
        assert_eq!(snapshot.active, None);
    }

    #[test]
    fn jump_to_500_in_one_tick() {
        let mut tracker = ScrollTracker::new();
        let snapshot = tracker.tick(500.0, page());
        assert_eq!(snapshot.header.visibility, Visibility::Hidden);
        assert_eq!(snapshot.header.background, Background::Scrolled);
        assert_eq!(snapshot.active, Some(SectionId::Overview));
    }

    #[test]
    fn strictly_increasing_offsets_hide_after_100() {
        let mut tracker = ScrollTracker::new();
        let mut offset = 0.0;
        while offset < 3_000.0 {
            let snapshot = tracker.tick(offset, page());
            if offset > 100.0 {
                assert_eq!(snapshot.header.visibility, Visibility::Hidden);
            }
            offset += 7.0;
        }
    }

    #[test]
    fn any_decrease_above_50_shows_immediately() {
        let mut tracker = ScrollTracker::new();
        tracker.tick(2_000.0, page());
        let snapshot = tracker.tick(1_990.0, page());
        assert_eq!(snapshot.header.visibility, Visibility::Visible);

        tracker.tick(2_500.0, page());
        let snapshot = tracker.tick(60.0, page());
        assert_eq!(snapshot.header.visibility, Visibility::Visible);
    }

    #[test]
    fn near_top_after_hidden_is_visible() {
        let mut tracker = ScrollTracker::new();
        tracker.tick(800.0, page());
        assert_eq!(tracker.tick(30.0, page()).header.visibility, Visibility::Visible);
    }

    #[test]
    fn tracks_offset_even_in_the_pinned_zone() {
        let mut tracker = ScrollTracker::new();
        tracker.tick(900.0, page());
        tracker.tick(20.0, page());
        // Down from 20, so this hides instead of reading as "up from 900".
        let snapshot = tracker.tick(150.0, page());
        assert_eq!(snapshot.header.visibility, Visibility::Hidden);
    }

    #[test]
    fn active_section_follows_scroll_and_sticks_past_the_end() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.tick(1_000.0, page()).active, Some(SectionId::Highlights));
        assert_eq!(tracker.tick(6_500.0, page()).active, Some(SectionId::Location));
        assert_eq!(tracker.tick(9_000.0, page()).active, Some(SectionId::Location));
    }

    #[test]
    fn hover_does_not_change_visibility() {
        let mut tracker = ScrollTracker::new();
        tracker.tick(700.0, page());
        let snapshot = tracker.set_hovered(true);
        assert!(snapshot.header.hovered);
        assert_eq!(snapshot.header.visibility, Visibility::Hidden);
        assert!(!tracker.set_hovered(false).header.hovered);
    }

    #[test]
    fn restored_mid_page_keeps_the_header_until_scrolled() {
        let mut tracker = ScrollTracker::new();
        let snapshot = tracker.prime(1_700.0, page());
        assert_eq!(snapshot.header.visibility, Visibility::Visible);
        assert_eq!(snapshot.header.background, Background::Scrolled);
        assert_eq!(snapshot.active, Some(SectionId::Highlights));

        assert_eq!(tracker.tick(1_690.0, page()).header.visibility, Visibility::Visible);
        assert_eq!(tracker.tick(1_750.0, page()).header.visibility, Visibility::Hidden);
    }

    #[test]
    fn prime_measures_later_ticks_from_the_restored_offset() {
        let mut tracker = ScrollTracker::new();
        tracker.prime(2_400.0, page());
        // Up from 2400, not down from 0.
        let snapshot = tracker.tick(2_000.0, page());
        assert_eq!(snapshot.header.visibility, Visibility::Visible);
    }

    #[test]
    fn select_overrides_until_next_tick() {
        let mut tracker = ScrollTracker::new();
        tracker.tick(0.0, page());
        assert_eq!(tracker.select(SectionId::Services).active, Some(SectionId::Services));
        assert_eq!(tracker.tick(0.0, page()).active, Some(SectionId::Overview));
    }
}
