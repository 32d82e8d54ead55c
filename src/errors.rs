//! Page-level reporting of script errors and unhandled promise rejections.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, ErrorEvent, PromiseRejectionEvent};

/// Installs the `error` and `unhandledrejection` listeners for the lifetime of
/// the page. Rejections are marked handled so the browser does not report them
/// a second time.
pub fn install_global_handlers() {
    let Some(window) = window() else {
        return;
    };

    let on_error = Closure::<dyn Fn(ErrorEvent)>::new(|e: ErrorEvent| {
        gloo_console::error!("JavaScript error:", e.error());
    });
    if let Err(e) =
        window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
    {
        warn!("Could not install error handler: {:?}", e);
    }
    on_error.forget();

    let on_rejection = Closure::<dyn Fn(PromiseRejectionEvent)>::new(|e: PromiseRejectionEvent| {
        gloo_console::error!("Unhandled promise rejection:", e.reason());
        e.prevent_default();
    });
    if let Err(e) = window.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    ) {
        warn!("Could not install rejection handler: {:?}", e);
    }
    on_rejection.forget();
}
