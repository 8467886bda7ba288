//! Fixed navigation menu: the four section labels plus the dark mode
//! toggle. The label matching the active section carries the `active`
//! class.

use yew::prelude::*;

use crate::sections::Section;
use crate::theme::ThemeContext;

#[derive(Properties, PartialEq)]
pub struct SectionMenuProps {
    pub active: Section,
    pub on_select: Callback<Section>,
}

#[function_component(SectionMenu)]
pub fn section_menu(props: &SectionMenuProps) -> Html {
    let theme = use_context::<ThemeContext>().expect("ThemeContext not provided");
    let toggle_mode = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <nav class="section-menu">
            <ul class="section-list">
                { for Section::ALL.iter().map(|&section| {
                    let on_select = props.on_select.clone();
                    html! {
                        <li
                            key={section.id()}
                            class={classes!((props.active == section).then_some("active"))}
                            onclick={Callback::from(move |_| on_select.emit(section))}
                        >
                            { section.label() }
                        </li>
                    }
                }) }
                <button onclick={toggle_mode} class="mode-toggle">
                    if theme.dark_mode {
                        <div class="moon"></div>
                    } else {
                        <div class="sun"></div>
                    }
                </button>
            </ul>
        </nav>
    }
}
