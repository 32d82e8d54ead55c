use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::accessibility::ScrollControl;
use crate::components::newsletter::NewsletterForm;
use crate::config::CONTACT_EMAIL;
use crate::keyboard::Target;

pub fn copyright_line(year: i32) -> String {
    format!("© {} Ultima Collection. All rights reserved.", year)
}

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-newsletter">
                <h3>{"Stay in touch"}</h3>
                <p>{"Seasonal availability and private offers, a few times a year."}</p>
                <NewsletterForm />
            </div>
            <div class="footer-contact">
                <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
            </div>
            <ScrollControl class="up-arrow" label="Scroll to top" target={Target::Top}>
                <span aria-hidden="true">{"↑"}</span>
            </ScrollControl>
            <p class="footer-copyright">{ copyright_line(year) }</p>
            <style>
                {r#"
                .footer {
                    background: #362511;
                    color: #faf7f2;
                    padding: 5rem 3rem 2rem;
                    display: grid;
                    gap: 2rem;
                    justify-items: center;
                    text-align: center;
                }

                .footer a {
                    color: #faf7f2;
                }

                .newsletter-form {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }

                .newsletter-form input {
                    padding: 0.75rem 1rem;
                    min-width: 260px;
                    border: 1px solid #faf7f2;
                    background: transparent;
                    color: #faf7f2;
                }

                .newsletter-form button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    background: #faf7f2;
                    color: #362511;
                    cursor: pointer;
                }

                .newsletter-form button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .up-arrow {
                    width: 48px;
                    height: 48px;
                    border: 1px solid #faf7f2;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                }

                .footer-copyright {
                    font-size: 0.8rem;
                    opacity: 0.7;
                }
                "#}
            </style>
        </footer>
    }
}
