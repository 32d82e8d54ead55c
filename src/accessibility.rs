use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::keyboard::{go_to, Target};

pub const FOCUSABLE: [&str; 4] = ["a", "button", "input", r#"[tabindex]:not([tabindex="-1"])"#];
pub const FOCUS_OUTLINE: &str = "2px solid #362511";
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";

/// Keys that press a focused non-button control.
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Stylesheet rule outlining every focusable element while it has focus.
///
/// Lives in a stylesheet so components that own their inline `style` (the
/// pressed header buttons) cannot wipe it.
pub fn focus_outline_css() -> String {
    let selectors = FOCUSABLE
        .iter()
        .map(|selector| format!("{}:focus", selector))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} {{ outline: {}; outline-offset: {}; }}",
        selectors, FOCUS_OUTLINE, FOCUS_OUTLINE_OFFSET
    )
}

#[function_component(FocusOutline)]
pub fn focus_outline() -> Html {
    html! {
        <style>{ focus_outline_css() }</style>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollControlProps {
    pub class: &'static str,
    pub label: &'static str,
    pub target: Target,
    #[prop_or_default]
    pub children: Children,
}

/// A non-button element that scrolls somewhere on click, Enter or Space.
#[function_component(ScrollControl)]
pub fn scroll_control(props: &ScrollControlProps) -> Html {
    let target = props.target;
    let onclick = Callback::from(move |_: MouseEvent| go_to(target));
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if is_activation_key(&e.key()) {
            e.prevent_default();
            go_to(target);
        }
    });

    html! {
        <div
            class={props.class}
            aria-label={props.label}
            role="button"
            tabindex="0"
            {onclick}
            {onkeydown}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn outline_rule_targets_each_focusable_on_focus() {
        let css = focus_outline_css();
        assert_eq!(
            css,
            r#"a:focus, button:focus, input:focus, [tabindex]:not([tabindex="-1"]):focus { outline: 2px solid #362511; outline-offset: 2px; }"#
        );
    }
}
