//! Wires [`ScrollScheduler`] to the browser.
//!
//! Owns the passive scroll listener, the `requestAnimationFrame` closure and
//! the debounce timer. Dropping the binding removes the listener and cancels
//! anything still pending.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, Window};
use yew::Callback;

use super::scheduler::{ScrollScheduler, Step};
use super::tracker::{ScrollSnapshot, ScrollTracker};
use crate::config::SCROLL_DEBOUNCE_MS;
use crate::dom;

type FrameClosure = Closure<dyn FnMut(f64)>;
type ScrollClosure = Closure<dyn FnMut()>;

pub struct ScrollBinding {
    inner: Rc<BindingInner>,
}

struct BindingInner {
    window: Window,
    tracker: Rc<RefCell<ScrollTracker>>,
    scheduler: RefCell<ScrollScheduler>,
    on_update: Callback<ScrollSnapshot>,
    frame: RefCell<Option<FrameClosure>>,
    frame_id: Cell<Option<i32>>,
    debounce: RefCell<Option<Timeout>>,
    listener: RefCell<Option<ScrollClosure>>,
}

impl ScrollBinding {
    /// Starts listening to scroll events. Returns `None` outside a browser.
    pub fn attach(
        tracker: Rc<RefCell<ScrollTracker>>,
        on_update: Callback<ScrollSnapshot>,
    ) -> Option<Self> {
        let window = window()?;
        let inner = Rc::new(BindingInner {
            window,
            tracker,
            scheduler: RefCell::new(ScrollScheduler::new(SCROLL_DEBOUNCE_MS)),
            on_update,
            frame: RefCell::new(None),
            frame_id: Cell::new(None),
            debounce: RefCell::new(None),
            listener: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let frame = Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.frame_id.set(None);
                let step = inner.scheduler.borrow_mut().on_frame();
                perform(&inner, step);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.frame.borrow_mut() = Some(frame);

        let weak = Rc::downgrade(&inner);
        let listener = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                let step = inner.scheduler.borrow_mut().on_scroll();
                perform(&inner, step);
            }
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = inner
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                listener.as_ref().unchecked_ref(),
                &options,
            )
        {
            warn!("Could not listen to scroll events: {:?}", e);
            return None;
        }
        *inner.listener.borrow_mut() = Some(listener);

        // Initial state for wherever the page was restored to.
        let snapshot = inner
            .tracker
            .borrow_mut()
            .prime(dom::scroll_offset(), dom::page_sections());
        inner.on_update.emit(snapshot);
        debug!("Scroll tracking attached");
        Some(Self { inner })
    }
}

fn perform(inner: &Rc<BindingInner>, step: Step) {
    match step {
        Step::Idle => {}
        Step::RequestFrame => {
            let frame = inner.frame.borrow();
            let Some(frame) = frame.as_ref() else {
                return;
            };
            match inner
                .window
                .request_animation_frame(frame.as_ref().unchecked_ref())
            {
                Ok(id) => inner.frame_id.set(Some(id)),
                Err(e) => {
                    warn!("requestAnimationFrame failed: {:?}", e);
                    inner.scheduler.borrow_mut().reset();
                }
            }
        }
        Step::ArmDebounce(ms) => {
            let weak: Weak<BindingInner> = Rc::downgrade(inner);
            let timeout = Timeout::new(ms, move || {
                if let Some(inner) = weak.upgrade() {
                    let step = inner.scheduler.borrow_mut().on_debounce_elapsed();
                    perform(&inner, step);
                }
            });
            // Replacing the handle cancels the previous timer.
            *inner.debounce.borrow_mut() = Some(timeout);
        }
        Step::Recompute => recompute(inner),
    }
}

fn recompute(inner: &BindingInner) {
    let offset = dom::scroll_offset();
    let sections = dom::page_sections();
    let snapshot = inner.tracker.borrow_mut().tick(offset, sections);
    inner.on_update.emit(snapshot);
}

impl Drop for ScrollBinding {
    fn drop(&mut self) {
        if let Some(listener) = self.inner.listener.borrow_mut().take() {
            if let Err(e) = self
                .inner
                .window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("Could not remove scroll listener: {:?}", e);
            }
        }
        if let Some(id) = self.inner.frame_id.take() {
            if let Err(e) = self.inner.window.cancel_animation_frame(id) {
                warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        self.inner.debounce.borrow_mut().take();
        self.inner.scheduler.borrow_mut().reset();
        self.inner.frame.borrow_mut().take();
        debug!("Scroll tracking detached");
    }
}
