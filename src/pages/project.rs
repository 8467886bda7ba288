//! Per-project detail page: resolves the route id against the catalog,
//! plays the curtain reveal, and offers prev/next navigation between
//! adjacent catalog positions.

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{self, Project};
use crate::components::carousel::Carousel;
use crate::dom;
use crate::theme::ThemeContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProjectPageProps {
    pub id: String,
}

/// The prev control is suppressed on the first project, the next control
/// on the last. The comparisons are against the literal id "1" and the
/// catalog length, which assumes ids stay contiguous from 1.
fn has_prev(id: &str) -> bool {
    id != "1"
}

fn has_next(id: &str, catalog_len: usize) -> bool {
    id != catalog_len.to_string()
}

/// Route parameter to project: non-numeric or unknown ids both land on
/// the not-found page.
fn resolve(id: &str) -> Option<&'static Project> {
    id.parse::<u32>().ok().and_then(catalog::find_by_id)
}

fn detail_lists(project: &Project) -> Html {
    let Some(detail) = project.detail.as_ref() else {
        return html! {};
    };
    html! {
        <div class="project-detail">
            <div class="client-detail">
                <div class="detail-title">{"client"}</div>
                <ul>
                    { for detail.client.iter().map(|item| html! { <li key={item.clone()}>{item}</li> }) }
                </ul>
            </div>
            {
                if let Some(server) = detail.server.as_ref() {
                    html! {
                        <div class="server-detail">
                            <div class="detail-title">{"server"}</div>
                            <ul>
                                { for server.iter().map(|item| html! { <li key={item.clone()}>{item}</li> }) }
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(ProjectPage)]
pub fn project_page(props: &ProjectPageProps) -> Html {
    let navigator = use_navigator().unwrap();
    let theme = use_context::<ThemeContext>().expect("ThemeContext not provided");

    // Direction for the next curtain replay. Prev/next set it before
    // navigating; a plain mount or external route change falls back to
    // the entry reveal.
    let curtain_direction: Rc<RefCell<Option<&'static str>>> = use_mut_ref(|| None);

    {
        let curtain_direction = curtain_direction.clone();
        use_effect_with(props.id.clone(), move |_| {
            let direction = curtain_direction.borrow_mut().take().unwrap_or("slideDown");
            dom::replay_animation(".curtain", &format!("{} 1s ease-in-out forwards", direction));
        });
    }

    let toggle_mode = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    let Some(project) = resolve(&props.id) else {
        return html! {
            <div class="project-page-wrapper">
                <div class="curtain"></div>
                <div class="project-page-content">
                    <p class="not-found">{"Project not found."}</p>
                    <Link<Route> to={Route::Home} classes="site">{"Back home"}</Link<Route>>
                </div>
            </div>
        };
    };

    let prev_project = {
        let navigator = navigator.clone();
        let id = props.id.clone();
        let curtain_direction = curtain_direction.clone();
        Callback::from(move |_| {
            if let Some(target) = id.parse::<u32>().ok().and_then(|id| catalog::neighbor_id(id, -1)) {
                *curtain_direction.borrow_mut() = Some("slideLeft");
                navigator.push(&Route::Project {
                    id: target.to_string(),
                });
            }
        })
    };

    let next_project = {
        let navigator = navigator.clone();
        let id = props.id.clone();
        let curtain_direction = curtain_direction.clone();
        Callback::from(move |_| {
            if let Some(target) = id.parse::<u32>().ok().and_then(|id| catalog::neighbor_id(id, 1)) {
                *curtain_direction.borrow_mut() = Some("slideRight");
                navigator.push(&Route::Project {
                    id: target.to_string(),
                });
            }
        })
    };

    html! {
        <div class="project-page-wrapper">
            <div class="curtain"></div>
            <div class="project-page-content">
                <button onclick={toggle_mode} class="mode-toggle">
                    if theme.dark_mode {
                        <span class="moon">{"DARK"}</span>
                    } else {
                        <span class="sun">{"LIGHT"}</span>
                    }
                </button>
                <h2 class="project-name">{ &project.name }</h2>
                <p class="description">{ &project.description }</p>
                <Carousel
                    images={project.imgs.clone()}
                    href={project.url.clone()}
                    alt={project.name.clone()}
                />
                <div class="go-to-site">
                    <Link<Route> to={Route::Home} classes="site">{"Home"}</Link<Route>>
                    <a class="site" href={project.url.clone()} target="_blank" rel="noopener noreferrer">
                        {"Site"}
                    </a>
                    <a class="site" href={project.git_hub.clone()} target="_blank" rel="noopener noreferrer">
                        {"GitHub"}
                    </a>
                </div>
                { detail_lists(project) }
            </div>
            if has_prev(&props.id) {
                <button class="prev-project" onclick={prev_project}>{"prev"}</button>
            }
            if has_next(&props.id, catalog::len()) {
                <button class="next-project" onclick={next_project}>{"next"}</button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_is_suppressed_only_on_the_first_id() {
        assert!(!has_prev("1"));
        assert!(has_prev("2"));
        assert!(has_prev("999"));
    }

    #[test]
    fn next_is_suppressed_on_the_id_matching_the_catalog_length() {
        assert!(has_next("2", 3));
        assert!(!has_next("3", 3));
        // The check is literal string comparison against the length, so a
        // non-contiguous last id would not be caught.
        assert!(has_next("4", 3));
    }

    #[test]
    fn absent_and_malformed_route_ids_resolve_to_not_found() {
        assert!(resolve("999").is_none());
        assert!(resolve("abc").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("-1").is_none());
        assert!(resolve("1 ").is_none());
    }

    #[test]
    fn present_route_ids_resolve_to_their_project() {
        let first = resolve("1").unwrap();
        assert_eq!(first.id, 1);
        let last = resolve(&catalog::len().to_string()).unwrap();
        assert_eq!(last.id as usize, catalog::len());
    }
}
