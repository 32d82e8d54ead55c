use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::SUBSCRIBE_DELAY_MS;
use crate::dom;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const SUBSCRIBING_LABEL: &str = "Subscribing...";
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing! We'll be in touch soon.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter your email address.")]
    Empty,
    #[error("Please enter a valid email address.")]
    Invalid,
}

/// Trims the raw input and checks it looks like an address.
pub fn validate_email(raw: &str) -> Result<String, NewsletterError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(NewsletterError::Invalid);
    }
    Ok(email.to_string())
}

#[derive(Serialize)]
struct EmailSubscriptionRequest<'a> {
    email: &'a str,
}

/// Button state of the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitButton {
    Ready { label: String },
    Subscribing { original: String },
}

impl SubmitButton {
    pub fn ready(label: &str) -> Self {
        SubmitButton::Ready {
            label: label.to_string(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SubmitButton::Ready { label } => label,
            SubmitButton::Subscribing { .. } => SUBSCRIBING_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, SubmitButton::Subscribing { .. })
    }

    /// Enter the pending state. A second submit while pending starts another
    /// pending round that remembers the same original label.
    pub fn start(&self) -> Self {
        match self {
            SubmitButton::Ready { label } => SubmitButton::Subscribing {
                original: label.clone(),
            },
            pending => pending.clone(),
        }
    }

    pub fn finish(&self) -> Self {
        match self {
            SubmitButton::Subscribing { original } => SubmitButton::Ready {
                label: original.clone(),
            },
            ready => ready.clone(),
        }
    }
}

/// Last step of a simulated subscription: confirm, clear the field and hand
/// back the restored button.
pub fn complete(input: &HtmlInputElement, pending: &SubmitButton) -> SubmitButton {
    dom::alert(SUBSCRIBED_MESSAGE);
    input.set_value("");
    info!("Newsletter subscription simulated");
    pending.finish()
}

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    #[prop_or(String::from("Subscribe"))]
    pub button_label: String,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterProps) -> Html {
    let input_ref = use_node_ref();
    let button = use_state(|| SubmitButton::ready(&props.button_label));

    let onsubmit = {
        let input_ref = input_ref.clone();
        let button = button.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };

            let email = match validate_email(&input.value()) {
                Ok(email) => email,
                Err(err) => {
                    dom::alert(&err.to_string());
                    return;
                }
            };

            match serde_json::to_string(&EmailSubscriptionRequest { email: &email }) {
                Ok(payload) => debug!("Newsletter payload (not sent): {}", payload),
                Err(e) => debug!("Could not serialize newsletter payload: {}", e),
            }

            let pending = button.start();
            button.set(pending.clone());

            let button = button.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBSCRIBE_DELAY_MS).await;
                button.set(complete(&input, &pending));
            });
        })
    };

    html! {
        <form class="newsletter-form" {onsubmit}>
            <input
                ref={input_ref}
                type="email"
                placeholder="Your email address"
                aria-label="Email address"
            />
            <button type="submit" disabled={button.disabled()}>
                { button.label() }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_asks_for_an_address() {
        assert_eq!(validate_email(""), Err(NewsletterError::Empty));
        assert_eq!(validate_email("   \t"), Err(NewsletterError::Empty));
        assert_eq!(
            NewsletterError::Empty.to_string(),
            "Please enter your email address."
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        for raw in ["not-an-email", "a@b", "a b@c.de", "a@@b.co", "@example.com", "user@.com."] {
            assert_eq!(validate_email(raw), Err(NewsletterError::Invalid), "{raw}");
        }
        assert_eq!(
            NewsletterError::Invalid.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn valid_input_is_trimmed() {
        assert_eq!(
            validate_email("  user@example.com ").as_deref(),
            Ok("user@example.com")
        );
        assert!(validate_email("a@b.c").is_ok());
    }

    #[test]
    fn pending_button_round_trip() {
        let ready = SubmitButton::ready("Subscribe");
        assert_eq!(ready.label(), "Subscribe");
        assert!(!ready.disabled());

        let pending = ready.start();
        assert_eq!(pending.label(), "Subscribing...");
        assert!(pending.disabled());

        let done = pending.finish();
        assert_eq!(done, ready);
    }

    #[test]
    fn overlapping_submit_keeps_original_label() {
        let pending = SubmitButton::ready("Join").start();
        let again = pending.start();
        assert_eq!(again.finish().label(), "Join");
    }

    #[test]
    fn payload_is_plain_json() {
        let payload = serde_json::to_string(&EmailSubscriptionRequest {
            email: "user@example.com",
        })
        .unwrap();
        assert_eq!(payload, r#"{"email":"user@example.com"}"#);
    }
}
