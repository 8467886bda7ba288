//! About section. The title and content blocks are the elements the
//! scroll controller slides in and out; the skills block reveals on a
//! delay after the section shows.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutMeProps {
    pub on_down: Callback<MouseEvent>,
}

const SKILLS: [&str; 6] = ["Rust", "WebAssembly", "TypeScript", "HTML", "CSS", "Git"];

#[function_component(AboutMe)]
pub fn about_me(props: &AboutMeProps) -> Html {
    html! {
        <section id="about-me" class="about-me">
            <h2 class="about-me-title">{"About me"}</h2>
            <div class="about-me-content">
                <p>
                    {"I enjoy turning designs into interfaces that feel instant. \
                      Most of my recent work ships as WebAssembly."}
                </p>
            </div>
            <div class="skills">
                <ul class="skill-list">
                    { for SKILLS.iter().map(|skill| html! {
                        <li key={*skill} class="skill">{skill}</li>
                    }) }
                </ul>
            </div>
            <button class="down-button" onclick={props.on_down.clone()} aria-label="Scroll to projects">
                {"\u{2193}"}
            </button>
        </section>
    }
}
