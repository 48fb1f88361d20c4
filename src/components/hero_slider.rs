use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::AUTOPLAY_INTERVAL_MS;
use crate::scroll;

/// One panel of the hero rotation.
#[derive(Clone, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

/// Active-index state machine behind the slider. Exactly one index is active
/// at a time; with an empty slide set every operation is a no-op.
pub struct SliderState {
    len: usize,
    active: usize,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Jumps to `index`. Out-of-range indices are ignored; the dots that call
    /// this are generated one per slide, so in practice only in-range values
    /// arrive here.
    pub fn show(&mut self, index: usize) {
        if self.len == 0 || index >= self.len {
            return;
        }
        self.active = index;
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + 1) % self.len;
    }

    /// Adding `len` before the subtraction keeps the unsigned arithmetic from
    /// underflowing at index 0.
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + self.len - 1) % self.len;
    }
}

type AutoplayCell = Rc<RefCell<Option<Interval>>>;

fn start_autoplay(cell: &AutoplayCell, state: &Rc<RefCell<SliderState>>, active: &UseStateHandle<usize>) {
    let state = state.clone();
    let active = active.clone();
    let interval = Interval::new(AUTOPLAY_INTERVAL_MS, move || {
        let mut slider = state.borrow_mut();
        slider.next();
        active.set(slider.active());
    });
    *cell.borrow_mut() = Some(interval);
}

/// Dropping the `Interval` clears the underlying timer, so taking the handle
/// out of the cell is the cancellation.
fn stop_autoplay(cell: &AutoplayCell) {
    cell.borrow_mut().take();
}

/// Manual navigation restarts the full autoplay period: cancel first, then
/// schedule, so at most one timer is ever pending.
fn reset_autoplay(cell: &AutoplayCell, state: &Rc<RefCell<SliderState>>, active: &UseStateHandle<usize>) {
    stop_autoplay(cell);
    start_autoplay(cell, state, active);
}

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<Slide>,
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let len = props.slides.len();
    let active = use_state(|| 0usize);
    let state = use_mut_ref(|| SliderState::new(len));
    let autoplay: AutoplayCell = use_mut_ref(|| None::<Interval>);

    // Autoplay and document-level arrow-key navigation live for the whole
    // component lifetime.
    {
        let state = state.clone();
        let active = active.clone();
        let autoplay = autoplay.clone();
        use_effect_with_deps(
            move |_| {
                let mut keydown: Option<Closure<dyn FnMut(KeyboardEvent)>> = None;
                if len > 0 {
                    start_autoplay(&autoplay, &state, &active);

                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::wrap(Box::new({
                            let state = state.clone();
                            let active = active.clone();
                            let autoplay = autoplay.clone();
                            move |e: KeyboardEvent| {
                                let index = match e.key().as_str() {
                                    "ArrowLeft" => {
                                        let mut slider = state.borrow_mut();
                                        slider.previous();
                                        slider.active()
                                    }
                                    "ArrowRight" => {
                                        let mut slider = state.borrow_mut();
                                        slider.next();
                                        slider.active()
                                    }
                                    _ => return,
                                };
                                active.set(index);
                                reset_autoplay(&autoplay, &state, &active);
                            }
                        })
                            as Box<dyn FnMut(KeyboardEvent)>);
                        document
                            .add_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        keydown = Some(callback);
                    }
                }

                move || {
                    stop_autoplay(&autoplay);
                    if let Some(callback) = keydown {
                        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    let on_prev = {
        let state = state.clone();
        let active = active.clone();
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            let index = {
                let mut slider = state.borrow_mut();
                slider.previous();
                slider.active()
            };
            active.set(index);
            reset_autoplay(&autoplay, &state, &active);
        })
    };

    let on_next = {
        let state = state.clone();
        let active = active.clone();
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            let index = {
                let mut slider = state.borrow_mut();
                slider.next();
                slider.active()
            };
            active.set(index);
            reset_autoplay(&autoplay, &state, &active);
        })
    };

    let on_mouse_enter = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| stop_autoplay(&autoplay))
    };

    let on_mouse_leave = {
        let state = state.clone();
        let active = active.clone();
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| {
            if len > 0 {
                start_autoplay(&autoplay, &state, &active);
            }
        })
    };

    let on_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("contact");
    });

    if len == 0 {
        return html! {};
    }

    html! {
        <section id="home" class="hero-slider" onmouseenter={on_mouse_enter} onmouseleave={on_mouse_leave}>
            <style>
                {r#"
                    .hero-slider {
                        position: relative;
                        height: 100vh;
                        min-height: 540px;
                        overflow: hidden;
                        background: #1a1a2e;
                    }
                    .hero-slider .slide {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        opacity: 0;
                        transition: opacity 0.8s ease-in-out;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .hero-slider .slide.active {
                        opacity: 1;
                        z-index: 1;
                    }
                    .hero-slider .slide::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: rgba(20, 24, 40, 0.55);
                    }
                    .slide-content {
                        position: relative;
                        text-align: center;
                        color: #fff;
                        max-width: 720px;
                        padding: 0 1.5rem;
                    }
                    .slide-content h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                        background: linear-gradient(45deg, #fff, #C9A961);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .slide-content p {
                        font-size: 1.25rem;
                        color: #eee;
                        margin-bottom: 2rem;
                    }
                    .slide-cta {
                        background: #C9A961;
                        color: #1a1a2e;
                        border: none;
                        border-radius: 8px;
                        padding: 0.9rem 2.2rem;
                        font-size: 1.1rem;
                        font-weight: bold;
                        cursor: pointer;
                    }
                    .slider-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 2;
                        background: rgba(255, 255, 255, 0.15);
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        font-size: 1.6rem;
                        cursor: pointer;
                    }
                    .slider-arrow:hover {
                        background: rgba(255, 255, 255, 0.35);
                    }
                    .slider-arrow.prev { left: 1.5rem; }
                    .slider-arrow.next { right: 1.5rem; }
                    .slider-dots {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 2;
                        display: flex;
                        gap: 0.6rem;
                    }
                    .slider-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.4);
                        cursor: pointer;
                    }
                    .slider-dot.active {
                        background: #C9A961;
                    }
                    @media (max-width: 768px) {
                        .slide-content h1 { font-size: 2rem; }
                        .slide-content p { font-size: 1rem; }
                    }
                "#}
            </style>
            {
                for props.slides.iter().enumerate().map(|(i, slide)| html! {
                    <div
                        class={classes!("slide", (i == *active).then(|| "active"))}
                        style={format!("background-image: url('{}');", slide.image)}
                    >
                        <div class="slide-content">
                            <h1>{ slide.title }</h1>
                            <p>{ slide.tagline }</p>
                            <button class="slide-cta" onclick={on_cta.clone()}>
                                {"Book a Free Session"}
                            </button>
                        </div>
                    </div>
                })
            }
            <button class="slider-arrow prev" onclick={on_prev} aria-label="Previous slide">{"‹"}</button>
            <button class="slider-arrow next" onclick={on_next} aria-label="Next slide">{"›"}</button>
            <div class="slider-dots">
                {
                    for (0..len).map(|i| {
                        let onclick = {
                            let state = state.clone();
                            let active = active.clone();
                            let autoplay = autoplay.clone();
                            Callback::from(move |_: MouseEvent| {
                                let index = {
                                    let mut slider = state.borrow_mut();
                                    slider.show(i);
                                    slider.active()
                                };
                                active.set(index);
                                reset_autoplay(&autoplay, &state, &active);
                            })
                        };
                        html! {
                            <button
                                class={classes!("slider-dot", (i == *active).then(|| "active"))}
                                {onclick}
                                aria-label={format!("Go to slide {}", i + 1)}
                            ></button>
                        }
                    })
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::SliderState;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut slider = SliderState::new(3);
        slider.next();
        assert_eq!(slider.active(), 1);
        slider.next();
        assert_eq!(slider.active(), 2);
        slider.next();
        assert_eq!(slider.active(), 0);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut slider = SliderState::new(3);
        slider.previous();
        assert_eq!(slider.active(), 2);
        slider.previous();
        assert_eq!(slider.active(), 1);
    }

    #[test]
    fn full_cycle_returns_to_start_in_both_directions() {
        for len in 1..=6 {
            for start in 0..len {
                let mut slider = SliderState::new(len);
                slider.show(start);
                for _ in 0..len {
                    slider.next();
                }
                assert_eq!(slider.active(), start);
                for _ in 0..len {
                    slider.previous();
                }
                assert_eq!(slider.active(), start);
            }
        }
    }

    #[test]
    fn index_stays_in_range_under_mixed_navigation() {
        let mut slider = SliderState::new(4);
        for step in 0..100 {
            if step % 3 == 0 {
                slider.previous();
            } else {
                slider.next();
            }
            assert!(slider.active() < 4);
        }
    }

    #[test]
    fn empty_slider_ignores_every_operation() {
        let mut slider = SliderState::new(0);
        slider.next();
        slider.previous();
        slider.show(0);
        assert_eq!(slider.active(), 0);
    }

    #[test]
    fn show_ignores_out_of_range_index() {
        let mut slider = SliderState::new(3);
        slider.show(2);
        slider.show(7);
        assert_eq!(slider.active(), 2);
    }
}
