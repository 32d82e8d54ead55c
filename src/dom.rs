//! Thin helpers over `web_sys` for the lookups and scroll calls the page needs.
//! Absent elements are reported as `None` / `false`; nothing here panics.

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::scroll::sections::{SectionBounds, SectionId};

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn section_bounds(section: SectionId) -> Option<SectionBounds> {
    let element = html_element_by_id(section.as_str())?;
    Some(SectionBounds {
        top: element.offset_top() as f64,
        height: element.offset_height() as f64,
    })
}

/// Layout of every section currently on the page, in page order.
pub fn page_sections() -> Vec<(SectionId, SectionBounds)> {
    SectionId::ALL
        .iter()
        .filter_map(|id| section_bounds(*id).map(|bounds| (*id, bounds)))
        .collect()
}

/// Smooth-scrolls the section to the top of the viewport. Returns `false` if
/// the section is not on the page.
pub fn scroll_to_section(section: SectionId) -> bool {
    let Some(element) = html_element_by_id(section.as_str()) else {
        debug!("No #{} on the page, not scrolling", section);
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Blocking browser dialog used for all user feedback on this page.
pub fn alert(message: &str) {
    match window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                warn!("alert failed: {:?}", e);
            }
        }
        None => warn!("No window to show alert: {}", message),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str, style: &str) -> HtmlElement {
        let document = window().unwrap().document().unwrap();
        let element = document
            .create_element("section")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        element.set_id(id);
        element.set_attribute("style", style).unwrap();
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn reads_section_height_from_layout() {
        let element = mount("experiences", "display: block; height: 321px; margin: 0;");
        let bounds = section_bounds(SectionId::Experiences).unwrap();
        assert_eq!(bounds.height, 321.0);
        element.remove();
    }

    #[wasm_bindgen_test]
    fn missing_section_is_none_and_not_scrolled() {
        assert!(section_bounds(SectionId::Accommodation).is_none());
        assert!(!scroll_to_section(SectionId::Accommodation));
    }
}
