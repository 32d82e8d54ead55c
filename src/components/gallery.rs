use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::accessibility::is_activation_key;
use crate::config::GALLERY_BOUNCE_MS;

/// Drags shorter than this leave the slider where it is.
const DRAG_DEAD_ZONE: f64 = 10.0;
/// Releases further than this get the bounce-back.
const SWIPE_MIN: f64 = 50.0;
/// The slider follows the finger at this fraction of the distance.
const DRAG_RESISTANCE: f64 = 0.3;

const GALLERY_IMAGES: [(&str, &str); 6] = [
    ("/assets/gallery/pool.jpg", "Infinity pool above the Ionian sea"),
    ("/assets/gallery/terrace.jpg", "Shaded terrace with olive trees"),
    ("/assets/gallery/living.jpg", "Open-plan living room"),
    ("/assets/gallery/master.jpg", "Master bedroom with sea view"),
    ("/assets/gallery/dining.jpg", "Outdoor dining at sunset"),
    ("/assets/gallery/beach.jpg", "Private beach path"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    start_x: f64,
    current_x: f64,
}

impl Drag {
    fn delta(&self) -> f64 {
        self.current_x - self.start_x
    }
}

/// Playback and touch state of the auto-scrolling slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryState {
    playing: bool,
    hovered: bool,
    drag: Option<Drag>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            playing: true,
            hovered: false,
            drag: None,
        }
    }
}

impl GalleryState {
    pub fn is_running(&self) -> bool {
        self.playing && !self.hovered && self.drag.is_none()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Space / Enter on the focused gallery.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn touch_start(&mut self, x: f64) {
        self.drag = Some(Drag {
            start_x: x,
            current_x: x,
        });
    }

    pub fn touch_move(&mut self, x: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current_x = x;
        }
    }

    /// Ends the drag. Returns `true` when the release was a real swipe.
    pub fn touch_end(&mut self) -> bool {
        match self.drag.take() {
            Some(drag) => drag.delta().abs() > SWIPE_MIN,
            None => false,
        }
    }

    /// Horizontal offset of the slider while a drag is under way.
    pub fn drag_offset(&self) -> Option<f64> {
        let delta = self.drag?.delta();
        (delta.abs() > DRAG_DEAD_ZONE).then(|| delta * DRAG_RESISTANCE)
    }

    pub fn slider_style(&self, bouncing: bool) -> String {
        let play_state = if self.is_running() { "running" } else { "paused" };
        let motion = match (self.drag_offset(), bouncing) {
            (Some(dx), _) => format!(" transform: translateX({}px);", dx),
            (None, true) => " transition: transform 0.3s ease; transform: translateX(0);".to_string(),
            (None, false) => String::new(),
        };
        format!("animation-play-state: {};{}", play_state, motion)
    }
}

pub enum GalleryAction {
    Hover(bool),
    Toggle,
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
    BounceDone,
}

/// Reducer wrapper so rapid touch events always build on the latest state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct GalleryModel {
    state: GalleryState,
    bouncing: bool,
}

impl Reducible for GalleryModel {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            GalleryAction::Hover(hovered) => next.state.set_hovered(hovered),
            GalleryAction::Toggle => next.state.toggle(),
            GalleryAction::TouchStart(x) => next.state.touch_start(x),
            GalleryAction::TouchMove(x) => next.state.touch_move(x),
            GalleryAction::TouchEnd => {
                if next.state.touch_end() {
                    next.bouncing = true;
                }
            }
            GalleryAction::BounceDone => next.bouncing = false,
        }
        Rc::new(next)
    }
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let model = use_reducer(GalleryModel::default);

    {
        let dispatcher = model.dispatcher();
        use_effect_with_deps(
            move |bouncing: &bool| {
                let timeout = bouncing.then(|| {
                    Timeout::new(GALLERY_BOUNCE_MS, move || {
                        dispatcher.dispatch(GalleryAction::BounceDone)
                    })
                });
                move || drop(timeout)
            },
            model.bouncing,
        );
    }

    let onmouseenter = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Hover(true)))
    };
    let onmouseleave = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Hover(false)))
    };
    let ontouchend = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: TouchEvent| dispatcher.dispatch(GalleryAction::TouchEnd))
    };
    let ontouchstart = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                dispatcher.dispatch(GalleryAction::TouchStart(x));
            }
        })
    };
    let ontouchmove = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = first_touch_x(&e) {
                dispatcher.dispatch(GalleryAction::TouchMove(x));
            }
        })
    };
    let onkeydown = {
        let dispatcher = model.dispatcher();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                dispatcher.dispatch(GalleryAction::Toggle);
                debug!("Gallery play/pause toggled");
            }
        })
    };

    let slides = GALLERY_IMAGES
        .iter()
        .chain(GALLERY_IMAGES.iter())
        .enumerate()
        .map(|(i, (src, alt))| {
            // Second copy only exists for the seamless loop.
            let hidden = i >= GALLERY_IMAGES.len();
            html! {
                <div class="gallery-item" aria-hidden={hidden.then_some("true")}>
                    <img src={*src} alt={*alt} loading="lazy" />
                </div>
            }
        });

    html! {
        <div
            class="gallery-container"
            tabindex="0"
            aria-label="Image gallery carousel. Press space to pause/resume."
            {onmouseenter}
            {onmouseleave}
            {ontouchstart}
            {ontouchmove}
            {ontouchend}
            {onkeydown}
        >
            <div class="gallery-slider" style={model.state.slider_style(model.bouncing)}>
                { for slides }
            </div>
            <style>
                {r#"
                .gallery-container {
                    overflow: hidden;
                    width: 100%;
                    outline-offset: 4px;
                }

                .gallery-slider {
                    display: flex;
                    gap: 1.5rem;
                    width: max-content;
                    animation: gallery-scroll 60s linear infinite;
                }

                .gallery-item img {
                    height: 420px;
                    width: auto;
                    display: block;
                    object-fit: cover;
                }

                @keyframes gallery-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }

                @media (max-width: 768px) {
                    .gallery-item img {
                        height: 260px;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_pauses_only_while_playing() {
        let mut state = GalleryState::default();
        assert!(state.is_running());
        state.set_hovered(true);
        assert!(!state.is_running());
        state.set_hovered(false);
        assert!(state.is_running());

        state.toggle();
        state.set_hovered(false);
        assert!(!state.is_running());
    }

    #[test]
    fn keyboard_toggle_flips_playback() {
        let mut state = GalleryState::default();
        state.toggle();
        assert!(!state.is_running());
        state.toggle();
        assert!(state.is_running());
    }

    #[test]
    fn small_drags_do_not_move_the_slider() {
        let mut state = GalleryState::default();
        state.touch_start(200.0);
        assert!(!state.is_running());
        state.touch_move(208.0);
        assert_eq!(state.drag_offset(), None);
        state.touch_move(240.0);
        assert_eq!(state.drag_offset(), Some(12.0));
        state.touch_move(100.0);
        assert_eq!(state.drag_offset(), Some(-30.0));
    }

    #[test]
    fn long_swipes_bounce() {
        let mut state = GalleryState::default();
        state.touch_start(300.0);
        state.touch_move(240.0);
        assert!(state.touch_end());
        assert!(state.is_running());
        assert_eq!(state.drag_offset(), None);

        state.touch_start(300.0);
        state.touch_move(260.0);
        assert!(!state.touch_end());
    }

    #[test]
    fn tap_without_move_is_not_a_swipe() {
        let mut state = GalleryState::default();
        state.touch_start(50.0);
        assert!(!state.touch_end());
        assert!(!state.touch_end());
    }

    #[test]
    fn swipe_release_starts_bounce_until_done() {
        let model = Rc::new(GalleryModel::default());
        let model = model.reduce(GalleryAction::TouchStart(0.0));
        let model = model.reduce(GalleryAction::TouchMove(80.0));
        assert!(!model.bouncing);
        let model = model.reduce(GalleryAction::TouchEnd);
        assert!(model.bouncing);
        assert!(model.state.is_running());
        let model = model.reduce(GalleryAction::BounceDone);
        assert!(!model.bouncing);
    }

    #[test]
    fn slider_style_reflects_state() {
        let mut state = GalleryState::default();
        assert_eq!(state.slider_style(false), "animation-play-state: running;");
        assert!(state.slider_style(true).contains("transition: transform 0.3s ease"));
        state.touch_start(0.0);
        state.touch_move(100.0);
        assert_eq!(
            state.slider_style(false),
            "animation-play-state: paused; transform: translateX(30px);"
        );
    }
}
