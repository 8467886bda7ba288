use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod components;
mod dom;
mod pages;
mod sections;
mod storage;
mod theme;

use pages::home::Home;
use pages::project::ProjectPage;
use theme::ThemeContext;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects/:id")]
    Project { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Home /> },
        Route::Project { id } => html! { <ProjectPage {id} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let dark_mode = use_state(theme::load_dark_mode);

    // Keep the body theme class in sync with the current mode.
    use_effect_with(*dark_mode, |enabled| {
        dom::set_body_class("dark-mode", *enabled);
    });

    let toggle = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_| {
            let next = !*dark_mode;
            theme::store_dark_mode(next);
            dark_mode.set(next);
        })
    };

    let theme = ThemeContext {
        dark_mode: *dark_mode,
        toggle,
    };

    html! {
        <BrowserRouter>
            <ContextProvider<ThemeContext> context={theme}>
                <Switch<Route> render={switch} />
            </ContextProvider<ThemeContext>>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
