use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, HEADER_HOVER_LINGER_MS, LANGUAGES, PRESS_FEEDBACK_MS};
use crate::dom;
use crate::hooks::{press_style, use_transient};
use crate::scroll::sections::SectionId;
use crate::scroll::tracker::ScrollSnapshot;

pub fn next_language(index: usize) -> usize {
    (index + 1) % LANGUAGES.len()
}

pub fn enquiry_message() -> String {
    format!(
        "Enquiry form would open here. Please contact us at {}",
        CONTACT_EMAIL
    )
}

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub snapshot: ScrollSnapshot,
    pub on_nav: Callback<SectionId>,
    pub on_hover: Callback<bool>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let language = use_state(|| 0usize);
    let (menu_pressed, press_menu) = use_transient(PRESS_FEEDBACK_MS);
    let (language_pressed, press_language) = use_transient(PRESS_FEEDBACK_MS);
    let (enquire_pressed, press_enquire) = use_transient(PRESS_FEEDBACK_MS);
    let hover_timer = use_mut_ref(|| None::<Timeout>);

    let onmouseenter = {
        let hover_timer = hover_timer.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            hover_timer.borrow_mut().take();
            on_hover.emit(true);
        })
    };

    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            let on_hover = on_hover.clone();
            *hover_timer.borrow_mut() = Some(Timeout::new(HEADER_HOVER_LINGER_MS, move || {
                on_hover.emit(false);
            }));
        })
    };

    let on_menu = Callback::from(move |_: MouseEvent| {
        info!("Menu button clicked");
        press_menu.emit(());
    });

    let on_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| {
            let next = next_language(*language);
            info!("Language changed to: {}", LANGUAGES[next]);
            language.set(next);
            press_language.emit(());
        })
    };

    let on_enquire = Callback::from(move |_: MouseEvent| {
        info!("Enquire button clicked");
        dom::alert(&enquiry_message());
        press_enquire.emit(());
    });

    let nav_links = SectionId::ALL.iter().map(|section| {
        let section = *section;
        let active = props.snapshot.active == Some(section);
        let onclick = {
            let on_nav = props.on_nav.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_nav.emit(section);
            })
        };
        html! {
            <a
                class={classes!("nav-link", active.then_some("active"))}
                href={section.href()}
                {onclick}
            >
                { section.label() }
            </a>
        }
    });

    html! {
        <header
            class={classes!(props.snapshot.header.classes())}
            data-state={props.snapshot.header.visual_state().as_str()}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="header-content">
                <button
                    class="menu-btn"
                    aria-label="Open menu"
                    style={press_style(menu_pressed)}
                    onclick={on_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <a class="logo" href="#overview">{"ULTIMA CORFU"}</a>
                <nav class="nav-links">
                    { for nav_links }
                </nav>
                <div class="header-actions">
                    <button
                        class="language-selector"
                        style={press_style(language_pressed)}
                        onclick={on_language}
                    >
                        { LANGUAGES[*language] }
                    </button>
                    <button
                        class="enquire-btn"
                        style={press_style(enquire_pressed)}
                        onclick={on_enquire}
                    >
                        {"Enquire"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 1000;
                    transition: all 0.4s cubic-bezier(0.4, 0.0, 0.2, 1);
                }

                .header.transparent {
                    background: transparent;
                    box-shadow: none;
                }

                .header.scrolled,
                .header.header-hovered {
                    background: rgba(250, 247, 242, 0.96);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 2px 20px rgba(54, 37, 17, 0.08);
                }

                .header.hidden {
                    opacity: 0;
                    transform: translateY(-100%);
                    pointer-events: none;
                }

                .header.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .header-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    padding: 1.25rem 3rem;
                }

                .menu-btn {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    transition: transform 0.15s ease;
                }

                .menu-btn span {
                    width: 24px;
                    height: 2px;
                    background: #362511;
                }

                .logo {
                    font-family: 'Cormorant Garamond', serif;
                    letter-spacing: 0.3em;
                    color: #362511;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #362511;
                    text-decoration: none;
                    font-size: 0.85rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    border-bottom: 1px solid transparent;
                }

                .nav-link.active {
                    border-bottom-color: #362511;
                }

                .header-actions {
                    display: flex;
                    gap: 1rem;
                }

                .language-selector,
                .enquire-btn {
                    padding: 0.5rem 1.25rem;
                    border: 1px solid #362511;
                    background: none;
                    color: #362511;
                    cursor: pointer;
                    transition: transform 0.15s ease;
                }

                .enquire-btn {
                    background: #362511;
                    color: #faf7f2;
                }

                @media (max-width: 900px) {
                    .nav-links {
                        display: none;
                    }
                    .header-content {
                        padding: 1rem 1.5rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
