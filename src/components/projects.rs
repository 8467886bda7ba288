//! Projects section: one card per catalog entry, linking to the detail
//! route.

use yew::prelude::*;
use yew_router::components::Link;

use crate::catalog;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub on_down: Callback<MouseEvent>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id="projects" class="projects-section">
            <h2 class="project-title">{"Projects"}</h2>
            <div class="projects">
                { for catalog::all().iter().map(|project| html! {
                    <Link<Route>
                        key={project.id}
                        to={Route::Project { id: project.id.to_string() }}
                        classes="project-card"
                    >
                        {
                            if let Some(img) = project.imgs.first() {
                                html! { <img class="card-img" src={img.clone()} alt={project.name.clone()} /> }
                            } else {
                                html! {}
                            }
                        }
                        <span class="card-name">{ &project.name }</span>
                    </Link<Route>>
                }) }
            </div>
            <button class="down-button" onclick={props.on_down.clone()} aria-label="Scroll to contact">
                {"\u{2193}"}
            </button>
        </section>
    }
}
