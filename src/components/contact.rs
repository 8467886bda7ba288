//! Contact section, the last scroll region.

use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <h2 class="contact-title">{"Contact"}</h2>
            <div class="contact-content">
                <p>{"Want to work together? Say hello."}</p>
                <a class="contact-link" href="mailto:hello@example.com">{"hello@example.com"}</a>
                <a
                    class="contact-link"
                    href="https://github.com"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"GitHub"}
                </a>
            </div>
        </section>
    }
}
