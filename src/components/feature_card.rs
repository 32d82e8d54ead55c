use yew::prelude::*;

use crate::config::CARD_BOUNCE_MS;
use crate::hooks::use_transient;
use crate::reveal::{use_reveal, HIDDEN_STYLE, REVEALED_STYLE};

const BOUNCE_TRANSFORM: &str = "transform: translateY(-15px) scale(1.02);";

/// Inline style of a card: reveal state first, a running bounce on top.
pub fn card_style(revealed: bool, bouncing: bool) -> String {
    let base = if revealed { REVEALED_STYLE } else { HIDDEN_STYLE };
    if bouncing && revealed {
        format!("{} {}", base, BOUNCE_TRANSFORM)
    } else {
        base.to_string()
    }
}

pub fn image_style(hovered: bool) -> &'static str {
    if hovered {
        "transform: scale(1.05);"
    } else {
        "transform: scale(1);"
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub title: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let (bouncing, bounce) = use_transient(CARD_BOUNCE_MS);
    let hovered = use_state(|| false);

    let onclick = Callback::from(move |_: MouseEvent| bounce.emit(()));
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <article
            ref={node}
            class="feature-card"
            style={card_style(revealed, bouncing)}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="feature-image-wrapper">
                <img
                    class="feature-image"
                    src={props.image}
                    alt={props.title}
                    style={image_style(*hovered)}
                />
            </div>
            <h3>{ props.title }</h3>
            <p>{ props.text }</p>
        </article>
    }
}
