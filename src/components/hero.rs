//! Top-of-page hero section with the "scroll down" control.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_down: Callback<MouseEvent>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-title">{"Hi, I'm a front-end developer."}</h1>
                <p class="hero-subtitle">
                    {"I build fast, small web apps and care about the details."}
                </p>
            </div>
            <button class="down-button" onclick={props.on_down.clone()} aria-label="Scroll to about">
                {"\u{2193}"}
            </button>
        </section>
    }
}
