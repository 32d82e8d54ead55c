use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// A flag that turns on when triggered and off again `duration_ms` later.
///
/// Triggering while already on restarts the countdown. The pending timer is
/// dropped (and so cancelled) with the component.
#[hook]
pub fn use_transient(duration_ms: u32) -> (bool, Callback<()>) {
    let active = use_state(|| false);
    let timer = use_mut_ref(|| None::<Timeout>);

    let trigger = {
        let active = active.clone();
        Callback::from(move |_| {
            active.set(true);
            let active = active.clone();
            *timer.borrow_mut() = Some(Timeout::new(duration_ms, move || active.set(false)));
        })
    };

    (*active, trigger)
}

pub fn press_style(pressed: bool) -> &'static str {
    if pressed {
        "transform: scale(0.95);"
    } else {
        "transform: scale(1);"
    }
}
