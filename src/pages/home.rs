use log::debug;
use yew::prelude::*;

use crate::accessibility::{FocusOutline, ScrollControl};
use crate::components::feature_card::FeatureCard;
use crate::components::footer::SiteFooter;
use crate::components::gallery::Gallery;
use crate::components::header::SiteHeader;
use crate::components::reveal_block::RevealBlock;
use crate::dom;
use crate::keyboard::{use_keyboard_shortcuts, Target};
use crate::scroll::binding::ScrollBinding;
use crate::scroll::sections::SectionId;
use crate::scroll::tracker::{ScrollSnapshot, ScrollTracker};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "Private Beach",
        "A path through the olive grove ends on a cove reserved for the villa.",
        "/assets/features/beach.jpg",
    ),
    (
        "Infinity Pool",
        "Twenty-five metres of water that seem to pour into the Ionian.",
        "/assets/features/pool.jpg",
    ),
    (
        "Wellness Pavilion",
        "Treatment room, sauna and a gym open onto the gardens.",
        "/assets/features/spa.jpg",
    ),
];

const LOCATIONS: [(&str, &str); 4] = [
    ("Corfu Town", "35 minutes by car"),
    ("Corfu Airport", "40 minutes by car"),
    ("Paleokastritsa", "20 minutes by car"),
    ("Nearest beach", "3 minutes on foot"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let tracker = use_mut_ref(ScrollTracker::new);
    let snapshot = use_state(ScrollSnapshot::default);

    {
        let tracker = tracker.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let on_update = Callback::from(move |next: ScrollSnapshot| snapshot.set(next));
                let binding = ScrollBinding::attach(tracker, on_update);
                move || drop(binding)
            },
            (),
        );
    }

    use_keyboard_shortcuts(tracker.clone());

    let on_nav = {
        let tracker = tracker.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |section: SectionId| {
            debug!("Navigating to #{}", section);
            snapshot.set(tracker.borrow_mut().select(section));
            dom::scroll_to_section(section);
        })
    };

    let on_hover = {
        let tracker = tracker.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |hovered: bool| {
            snapshot.set(tracker.borrow_mut().set_hovered(hovered));
        })
    };

    html! {
        <div class="page">
            <FocusOutline />
            <SiteHeader snapshot={*snapshot} {on_nav} {on_hover} />

            <section id="overview" class="hero">
                <div class="hero-content">
                    <p class="hero-eyebrow">{"Ultima Collection"}</p>
                    <h1>{"Ultima Corfu"}</h1>
                    <p class="hero-subtitle">{"A clifftop estate on the north-west coast of Corfu"}</p>
                </div>
                <ScrollControl
                    class="scroll-indicator"
                    label="Scroll to next section"
                    target={Target::Section(SectionId::Highlights)}
                >
                    <span class="scroll-line" aria-hidden="true"></span>
                </ScrollControl>
            </section>

            <section id="highlights" class="section">
                <h2>{"Highlights"}</h2>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|(title, text, image)| html! {
                        <FeatureCard title={*title} text={*text} image={*image} />
                    }) }
                </div>
            </section>

            <section id="layout" class="section luxury">
                <RevealBlock class="luxury-text">
                    <h2>{"Layout"}</h2>
                    <p>{"Main house, two guest houses and a staff wing spread over three terraces, each with its own entrance and sea view."}</p>
                </RevealBlock>
                <RevealBlock class="luxury-image">
                    <img src="/assets/layout.jpg" alt="Aerial view of the estate" />
                </RevealBlock>
            </section>

            <section id="accommodation" class="section luxury reverse">
                <RevealBlock class="luxury-text">
                    <h2>{"Accommodation"}</h2>
                    <p>{"Eleven bedrooms sleep up to twenty-two guests. Every suite opens onto a private terrace."}</p>
                </RevealBlock>
                <RevealBlock class="luxury-image">
                    <img src="/assets/accommodation.jpg" alt="Suite with terrace" />
                </RevealBlock>
            </section>

            <section id="services" class="section">
                <h2>{"Services"}</h2>
                <Gallery />
            </section>

            <section id="experiences" class="section luxury">
                <RevealBlock class="luxury-text">
                    <h2>{"Experiences"}</h2>
                    <p>{"Sailing to Paxos, cooking with island produce and evenings of live music on the lawn."}</p>
                </RevealBlock>
                <RevealBlock class="luxury-image">
                    <img src="/assets/experiences.jpg" alt="Yacht off the coast" />
                </RevealBlock>
            </section>

            <section id="location" class="section">
                <h2>{"Location"}</h2>
                <div class="location-grid">
                    { for LOCATIONS.iter().map(|(place, distance)| html! {
                        <RevealBlock class="location-item">
                            <h4>{ *place }</h4>
                            <p>{ *distance }</p>
                        </RevealBlock>
                    }) }
                </div>
            </section>

            <SiteFooter />

            <style>
                {r#"
                .page {
                    background: #faf7f2;
                    color: #362511;
                    font-family: 'Montserrat', sans-serif;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: url('/assets/hero.jpg') center / cover no-repeat;
                    color: #faf7f2;
                    text-align: center;
                }

                .hero h1 {
                    font-family: 'Cormorant Garamond', serif;
                    font-size: 5rem;
                    font-weight: 300;
                    letter-spacing: 0.2em;
                    margin: 0.5rem 0;
                }

                .hero-eyebrow,
                .hero-subtitle {
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    font-size: 0.9rem;
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    cursor: pointer;
                }

                .scroll-line {
                    display: block;
                    width: 1px;
                    height: 60px;
                    background: #faf7f2;
                }

                .section {
                    padding: 6rem 3rem;
                }

                .section h2 {
                    font-family: 'Cormorant Garamond', serif;
                    font-size: 2.75rem;
                    font-weight: 300;
                    margin-bottom: 2rem;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .feature-card {
                    cursor: pointer;
                }

                .feature-image-wrapper {
                    overflow: hidden;
                }

                .feature-image {
                    width: 100%;
                    display: block;
                    transition: transform 0.4s ease;
                }

                .luxury {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .luxury.reverse .luxury-text {
                    order: 2;
                }

                .luxury-image img {
                    width: 100%;
                    display: block;
                }

                .location-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                }

                @media (max-width: 900px) {
                    .luxury {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 3rem;
                    }
                    .section {
                        padding: 4rem 1.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
