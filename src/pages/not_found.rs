use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Ultima Corfu"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #faf7f2;
                    color: #362511;
                }

                .not-found-link {
                    color: #362511;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }
                "#}
            </style>
        </div>
    }
}
