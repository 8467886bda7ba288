//! Looping image carousel: one slide at a time, autoplay on an interval,
//! CSS-transition slide changes, dot navigation.
//!
//! The slide index only ever grows; the shown slide is `index % count`,
//! which gives the infinite loop without any wrap bookkeeping. The
//! autoplay interval is dropped (and thereby stopped) whenever the image
//! set changes or the component unmounts.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<String>,
    /// Every slide links out to this URL.
    pub href: String,
    pub alt: String,
    #[prop_or(3_000)]
    pub autoplay_ms: u32,
    #[prop_or(300)]
    pub speed_ms: u32,
    #[prop_or(true)]
    pub dots: bool,
}

enum SlideAction {
    Advance,
    Jump(usize),
}

#[derive(PartialEq)]
struct SlideIndex(usize);

impl Reducible for SlideIndex {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: SlideAction) -> Rc<Self> {
        match action {
            SlideAction::Advance => Rc::new(SlideIndex(self.0 + 1)),
            SlideAction::Jump(i) => Rc::new(SlideIndex(i)),
        }
    }
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let index = use_reducer(|| SlideIndex(0));
    let count = props.images.len();

    {
        let dispatcher = index.dispatcher();
        use_effect_with((count, props.autoplay_ms), move |&(count, autoplay_ms)| {
            let interval = (count > 1).then(|| {
                Interval::new(autoplay_ms, move || dispatcher.dispatch(SlideAction::Advance))
            });
            move || drop(interval)
        });
    }

    let shown = index.0 % count.max(1);
    let track_style = format!(
        "transform: translateX(-{}%); transition: transform {}ms ease;",
        shown * 100,
        props.speed_ms
    );

    html! {
        <div class="carousel">
            <div class="carousel-track" style={track_style}>
                { for props.images.iter().map(|img| html! {
                    <a
                        key={img.clone()}
                        class="project-link"
                        href={props.href.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <img class="project-img" src={img.clone()} alt={props.alt.clone()} />
                    </a>
                }) }
            </div>
            if props.dots && count > 1 {
                <div class="carousel-dots">
                    { for (0..count).map(|i| {
                        let dispatcher = index.dispatcher();
                        html! {
                            <button
                                key={i}
                                class={classes!("carousel-dot", (i == shown).then_some("active"))}
                                aria-label={format!("Slide {}", i + 1)}
                                onclick={Callback::from(move |_| dispatcher.dispatch(SlideAction::Jump(i)))}
                            />
                        }
                    }) }
                </div>
            }
        </div>
    }
}
