use std::fmt;

use crate::config::ACTIVE_SECTION_PROBE;

/// Content sections in page order. The navigation bar links to each of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Overview,
    Highlights,
    Layout,
    Accommodation,
    Services,
    Experiences,
    Location,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Overview,
        SectionId::Highlights,
        SectionId::Layout,
        SectionId::Accommodation,
        SectionId::Services,
        SectionId::Experiences,
        SectionId::Location,
    ];

    /// The element id (and `#fragment`) of the section.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Highlights => "highlights",
            SectionId::Layout => "layout",
            SectionId::Accommodation => "accommodation",
            SectionId::Services => "services",
            SectionId::Experiences => "experiences",
            SectionId::Location => "location",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Overview => "Overview",
            SectionId::Highlights => "Highlights",
            SectionId::Layout => "Layout",
            SectionId::Accommodation => "Accommodation",
            SectionId::Services => "Services",
            SectionId::Experiences => "Experiences",
            SectionId::Location => "Location",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Following section, wrapping from the last back to the first.
    pub fn next(self) -> SectionId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding section, wrapping from the first to the last.
    pub fn prev(self) -> SectionId {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout box of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Picks the section whose box contains `offset + ACTIVE_SECTION_PROBE`.
///
/// `bounds` is walked in the order given; the first containing section wins.
/// Sections that are not on the page are simply absent from `bounds`.
pub fn active_section<I>(offset: f64, bounds: I) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, SectionBounds)>,
{
    let probe = offset + ACTIVE_SECTION_PROBE;
    bounds
        .into_iter()
        .find(|(_, section)| section.contains(probe))
        .map(|(id, _)| id)
}
