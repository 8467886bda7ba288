//! The scrolling landing page: fixed section menu plus the four content
//! sections, driven by a window scroll listener.
//!
//! Each scroll event re-reads the anchor offsets, classifies the offset
//! into a section (or a gap, which leaves the previous visual state in
//! place), marks that section active in the menu and slides the section
//! blocks in or out. The nested skills block reveals a second after the
//! about section shows; hiding the section cancels a pending reveal and
//! hides the block immediately.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::about_me::AboutMe;
use crate::components::contact::Contact;
use crate::components::hero::Hero;
use crate::components::menu::SectionMenu;
use crate::components::projects::ProjectsSection;
use crate::dom;
use crate::sections::{self, Section, SectionOffsets, SlideStyle};

const SKILLS_REVEAL_DELAY_MS: u32 = 1_000;

type SkillsTimer = Rc<RefCell<Option<Timeout>>>;

fn apply_slide(title: &str, content: &str, style: SlideStyle) {
    let opacity = style.opacity.to_string();
    dom::set_style(title, "opacity", &opacity);
    dom::set_style(title, "transform", &format!("translateX(-{}px)", style.shift));
    dom::set_style(content, "opacity", &opacity);
    dom::set_style(content, "transform", &format!("translateX({}px)", style.shift));
}

/// What one scroll event does to the deferred skills reveal. The timer
/// is armed only on the hidden-to-visible transition; further events
/// inside the band leave it running so the reveal stays a fixed delay
/// after the section first shows.
#[derive(Clone, Copy, PartialEq, Debug)]
enum SkillsReveal {
    Arm,
    Keep,
    Cancel,
}

fn skills_reveal(visible: bool, timer_armed: bool) -> SkillsReveal {
    match (visible, timer_armed) {
        (true, false) => SkillsReveal::Arm,
        (true, true) => SkillsReveal::Keep,
        (false, _) => SkillsReveal::Cancel,
    }
}

fn apply_about_me(visible: bool, skills_timer: &SkillsTimer) {
    apply_slide(
        ".about-me-title",
        ".about-me-content",
        sections::about_me_style(visible),
    );
    let mut slot = skills_timer.borrow_mut();
    match skills_reveal(visible, slot.is_some()) {
        SkillsReveal::Arm => {
            *slot = Some(Timeout::new(SKILLS_REVEAL_DELAY_MS, || {
                dom::set_style(".skills", "opacity", "1");
            }));
        }
        SkillsReveal::Keep => {}
        SkillsReveal::Cancel => {
            // Dropping a pending timer cancels it; hiding is immediate.
            slot.take();
            dom::set_style(".skills", "opacity", "0");
        }
    }
}

fn apply_projects(visible: bool) {
    let style = sections::projects_style(visible);
    let opacity = style.opacity.to_string();
    dom::set_style(".projects", "opacity", &opacity);
    dom::set_style(".projects", "transform", &format!("translateY({}px)", style.shift));
    dom::set_style(".project-title", "opacity", &opacity);
    dom::set_style(".project-title", "transform", &format!("translateX({}px)", style.shift));
}

fn apply_contact(visible: bool) {
    apply_slide(
        ".contact-title",
        ".contact-content",
        sections::contact_style(visible),
    );
}

fn on_scroll(active: &UseStateHandle<Section>, skills_timer: &SkillsTimer) {
    let offsets = SectionOffsets {
        about_me: dom::offset_top(Section::AboutMe.id()),
        projects: dom::offset_top(Section::Projects.id()),
        contact: dom::offset_top(Section::Contact.id()),
    };
    let Some(section) = sections::classify(dom::scroll_y(), &offsets) else {
        return;
    };
    active.set(section);
    match section {
        Section::Home => apply_about_me(false, skills_timer),
        Section::AboutMe => {
            apply_about_me(true, skills_timer);
            apply_projects(false);
        }
        Section::Projects => {
            apply_projects(true);
            apply_about_me(false, skills_timer);
            apply_contact(false);
        }
        Section::Contact => {
            apply_projects(false);
            apply_contact(true);
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let active = use_state_eq(|| Section::Home);
    let skills_timer: SkillsTimer = use_mut_ref(|| None);

    {
        let active = active.clone();
        let skills_timer = skills_timer.clone();
        use_effect_with((), move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let callback = Closure::<dyn Fn()>::new({
                    let active = active.clone();
                    let skills_timer = skills_timer.clone();
                    move || on_scroll(&active, &skills_timer)
                });
                if window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log!("failed to attach scroll listener");
                }
                Box::new(move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                    // Unmount also cancels a pending skills reveal.
                    skills_timer.borrow_mut().take();
                })
            } else {
                Box::new(|| ())
            };
            move || {
                destructor();
            }
        });
    }

    let scroll_to_section = Callback::from(|section: Section| {
        dom::scroll_to(dom::offset_top(section.id()));
    });

    let down_to = |target: Section| {
        Callback::from(move |_| {
            dom::scroll_to(dom::offset_top(target.id()));
        })
    };

    html! {
        <div class="app">
            <SectionMenu active={*active} on_select={scroll_to_section} />
            <Hero on_down={down_to(Section::AboutMe)} />
            <AboutMe on_down={down_to(Section::Projects)} />
            <ProjectsSection on_down={down_to(Section::Contact)} />
            <Contact />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{skills_reveal, SkillsReveal};

    // Drives the transition function the way the scroll handler does:
    // Arm starts a timer, Cancel drops it, Keep leaves it alone.
    fn run(events: &[bool]) -> usize {
        let mut armed = false;
        let mut arm_count = 0;
        for &visible in events {
            match skills_reveal(visible, armed) {
                SkillsReveal::Arm => {
                    armed = true;
                    arm_count += 1;
                }
                SkillsReveal::Keep => {}
                SkillsReveal::Cancel => {
                    armed = false;
                }
            }
        }
        arm_count
    }

    #[test]
    fn repeated_events_inside_the_band_keep_the_first_timer() {
        assert_eq!(skills_reveal(true, false), SkillsReveal::Arm);
        assert_eq!(skills_reveal(true, true), SkillsReveal::Keep);
        // Scrolling within the about band four times arms exactly once,
        // so the reveal fires a fixed delay after the section shows.
        assert_eq!(run(&[true, true, true, true]), 1);
    }

    #[test]
    fn hiding_cancels_whether_or_not_a_timer_is_pending() {
        assert_eq!(skills_reveal(false, true), SkillsReveal::Cancel);
        assert_eq!(skills_reveal(false, false), SkillsReveal::Cancel);
    }

    #[test]
    fn show_hide_show_restarts_the_delay() {
        assert_eq!(run(&[true, true, false, true]), 2);
    }
}
