use yew::prelude::*;

use crate::reveal::{reveal_style, use_reveal};

#[derive(Properties, PartialEq)]
pub struct RevealBlockProps {
    pub class: &'static str,
    #[prop_or_default]
    pub children: Children,
}

/// A `div` that fades up the first time it scrolls into view.
#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealBlockProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={props.class} style={reveal_style(revealed)}>
            { for props.children.iter() }
        </div>
    }
}
