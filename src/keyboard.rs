use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::scroll::sections::SectionId;
use crate::scroll::tracker::ScrollTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    ScrollToTop,
    NextSection,
    PrevSection,
}

impl Shortcut {
    pub fn from_key(key: &str, ctrl: bool) -> Option<Self> {
        match (key, ctrl) {
            ("Escape", _) => Some(Shortcut::ScrollToTop),
            ("ArrowDown", true) => Some(Shortcut::NextSection),
            ("ArrowUp", true) => Some(Shortcut::PrevSection),
            _ => None,
        }
    }

    /// Section navigation takes over the arrow keys; Escape keeps its default.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Shortcut::ScrollToTop)
    }

    /// Where the shortcut goes, given the highlighted section. Section
    /// navigation does nothing until some section is highlighted.
    pub fn target(self, active: Option<SectionId>) -> Option<Target> {
        match self {
            Shortcut::ScrollToTop => Some(Target::Top),
            Shortcut::NextSection => active.map(|s| Target::Section(s.next())),
            Shortcut::PrevSection => active.map(|s| Target::Section(s.prev())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Top,
    Section(SectionId),
}

pub fn go_to(target: Target) {
    match target {
        Target::Top => dom::scroll_to_top(),
        Target::Section(section) => {
            dom::scroll_to_section(section);
        }
    }
}

/// Escape and Ctrl+Arrow navigation for the whole page.
#[hook]
pub fn use_keyboard_shortcuts(tracker: Rc<RefCell<ScrollTracker>>) {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        let Some(shortcut) = Shortcut::from_key(&e.key(), e.ctrl_key()) else {
            return;
        };
        if shortcut.prevents_default() {
            e.prevent_default();
        }
        let active = tracker.borrow().snapshot().active;
        if let Some(target) = shortcut.target(active) {
            debug!("Keyboard shortcut {:?} -> {:?}", shortcut, target);
            go_to(target);
        }
    });
}
