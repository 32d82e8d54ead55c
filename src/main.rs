use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod accessibility;
mod config;
mod dom;
mod errors;
mod hooks;
mod keyboard;
mod reveal;
mod scroll {
    pub mod binding;
    pub mod header;
    pub mod scheduler;
    pub mod sections;
    pub mod tracker;
}
mod components {
    pub mod feature_card;
    pub mod footer;
    pub mod gallery;
    pub mod header;
    pub mod newsletter;
    pub mod reveal_block;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Panics show up in the browser console instead of "unreachable"
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    errors::install_global_handlers();

    info!("Starting Ultima Corfu site");
    yew::Renderer::<App>::new().render();
}
