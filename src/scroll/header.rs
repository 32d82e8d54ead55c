//! Header styling as a single reducer.
//!
//! Visibility, background and hover used to be written by separate handlers
//! into the same element. Here one function turns `{offset, direction,
//! hovered}` into the complete class set of the header.

use crate::config::{HEADER_PINNED_MAX, HEADER_SCROLLED_MIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Still,
}

impl ScrollDirection {
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            ScrollDirection::Down
        } else if current < previous {
            ScrollDirection::Up
        } else {
            ScrollDirection::Still
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
    Transparent,
    Scrolled,
}

/// The one-word summary of how the header currently looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisualState {
    Transparent,
    Scrolled,
    Hidden,
    Hovered,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderInput {
    pub offset: f64,
    pub direction: ScrollDirection,
    pub hovered: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStyle {
    pub visibility: Visibility,
    pub background: Background,
    pub hovered: bool,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            visibility: Visibility::Visible,
            background: Background::Transparent,
            hovered: false,
        }
    }
}

impl HeaderVisualState {
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderVisualState::Transparent => "transparent",
            HeaderVisualState::Scrolled => "scrolled",
            HeaderVisualState::Hidden => "hidden",
            HeaderVisualState::Hovered => "hovered",
        }
    }
}

impl HeaderStyle {
    pub fn visual_state(&self) -> HeaderVisualState {
        match (self.visibility, self.hovered, self.background) {
            (Visibility::Hidden, _, _) => HeaderVisualState::Hidden,
            (Visibility::Visible, true, _) => HeaderVisualState::Hovered,
            (Visibility::Visible, false, Background::Scrolled) => HeaderVisualState::Scrolled,
            (Visibility::Visible, false, Background::Transparent) => {
                HeaderVisualState::Transparent
            }
        }
    }

    /// Full class list for the `<header>` element.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["header"];
        classes.push(match self.visibility {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        });
        classes.push(match self.background {
            Background::Transparent => "transparent",
            Background::Scrolled => "scrolled",
        });
        if self.hovered {
            classes.push("header-hovered");
        }
        classes
    }
}

fn visibility(prev: Visibility, input: &HeaderInput) -> Visibility {
    if input.offset <= HEADER_PINNED_MAX {
        return Visibility::Visible;
    }
    match input.direction {
        ScrollDirection::Down if input.offset > HEADER_SCROLLED_MIN => Visibility::Hidden,
        ScrollDirection::Up => Visibility::Visible,
        _ => prev,
    }
}

fn background(input: &HeaderInput) -> Background {
    if input.offset > HEADER_SCROLLED_MIN {
        Background::Scrolled
    } else {
        Background::Transparent
    }
}

pub fn reduce(prev: HeaderStyle, input: HeaderInput) -> HeaderStyle {
    HeaderStyle {
        visibility: visibility(prev.visibility, &input),
        background: background(&input),
        hovered: input.hovered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(prev: HeaderStyle, offset: f64, direction: ScrollDirection) -> HeaderStyle {
        reduce(
            prev,
            HeaderInput {
                offset,
                direction,
                hovered: false,
            },
        )
    }

    fn hidden() -> HeaderStyle {
        HeaderStyle {
            visibility: Visibility::Hidden,
            background: Background::Scrolled,
            hovered: false,
        }
    }

    #[test]
    fn pinned_near_the_top_whatever_came_before() {
        for offset in [-20.0, 0.0, 12.5, 50.0] {
            for direction in [ScrollDirection::Up, ScrollDirection::Down, ScrollDirection::Still] {
                let style = step(hidden(), offset, direction);
                assert_eq!(style.visibility, Visibility::Visible);
                assert_eq!(style.background, Background::Transparent);
            }
        }
    }

    #[test]
    fn scrolling_down_past_100_hides() {
        let mut style = HeaderStyle::default();
        for offset in [60.0, 80.0, 100.0] {
            style = step(style, offset, ScrollDirection::Down);
            assert_eq!(style.visibility, Visibility::Visible);
        }
        style = step(style, 101.0, ScrollDirection::Down);
        assert_eq!(style.visibility, Visibility::Hidden);
        assert_eq!(style.visual_state(), HeaderVisualState::Hidden);
    }

    #[test]
    fn scrolling_up_above_50_shows() {
        for offset in [51.0, 99.0, 400.0, 9_000.0] {
            let style = step(hidden(), offset, ScrollDirection::Up);
            assert_eq!(style.visibility, Visibility::Visible);
        }
    }

    #[test]
    fn dead_zone_keeps_previous_visibility() {
        let style = step(hidden(), 80.0, ScrollDirection::Still);
        assert_eq!(style.visibility, Visibility::Hidden);
        let style = step(hidden(), 90.0, ScrollDirection::Down);
        assert_eq!(style.visibility, Visibility::Hidden);
        let style = step(HeaderStyle::default(), 300.0, ScrollDirection::Still);
        assert_eq!(style.visibility, Visibility::Visible);
    }

    #[test]
    fn jump_from_top_to_500_hides_and_scrolls() {
        let style = step(
            HeaderStyle::default(),
            500.0,
            ScrollDirection::between(0.0, 500.0),
        );
        assert_eq!(style.visibility, Visibility::Hidden);
        assert_eq!(style.background, Background::Scrolled);
    }

    #[test]
    fn background_ignores_direction() {
        assert_eq!(
            step(HeaderStyle::default(), 100.0, ScrollDirection::Up).background,
            Background::Transparent
        );
        assert_eq!(
            step(HeaderStyle::default(), 100.5, ScrollDirection::Up).background,
            Background::Scrolled
        );
    }

    #[test]
    fn hover_is_carried_into_the_class_set() {
        let style = reduce(
            HeaderStyle::default(),
            HeaderInput {
                offset: 20.0,
                direction: ScrollDirection::Still,
                hovered: true,
            },
        );
        assert_eq!(style.visual_state(), HeaderVisualState::Hovered);
        assert_eq!(
            style.classes(),
            vec!["header", "visible", "transparent", "header-hovered"]
        );
    }

    #[test]
    fn class_set_never_mixes_exclusive_states() {
        assert_eq!(hidden().classes(), vec!["header", "hidden", "scrolled"]);
        assert_eq!(
            HeaderStyle::default().classes(),
            vec!["header", "visible", "transparent"]
        );
    }
}
