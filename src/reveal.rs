//! Fade-in of page elements the first time they scroll into view.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// One-way latch: hidden until the first intersection, revealed forever after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feed an intersection report. Returns `true` only for the report that
    /// flips the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

pub const HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(50px); transition: all 0.6s ease;";
pub const REVEALED_STYLE: &str = "opacity: 1; transform: translateY(0); transition: all 0.6s ease;";

pub fn reveal_style(revealed: bool) -> &'static str {
    if revealed {
        REVEALED_STYLE
    } else {
        HIDDEN_STYLE
    }
}

type EntriesClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` on a single element. Observation continues after
/// the reveal; later reports just hit the closed latch.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesClosure,
}

impl RevealObserver {
    pub fn observe(target: &Element, on_reveal: Callback<()>) -> Option<Self> {
        let mut latch = RevealLatch::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if latch.is_revealed() {
                    break;
                }
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.observe(entry.is_intersecting()) {
                    on_reveal.emit(());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the element behind `node` has been revealed yet.
///
/// Without IntersectionObserver support the element is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_reveal = {
                        let revealed = revealed.clone();
                        Callback::from(move |_| revealed.set(true))
                    };
                    let observer = RevealObserver::observe(&element, on_reveal);
                    if observer.is_none() {
                        revealed.set(true);
                    }
                    observer
                });
                move || drop(observer)
            },
            node,
        );
    }
    *revealed
}
