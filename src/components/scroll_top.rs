use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::SCROLL_TOP_SHOW_AT_PX;
use crate::scroll;

/// Back-to-top button that appears past a scroll threshold.
#[function_component(ScrollTop)]
pub fn scroll_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    visible.set(scroll_y > SCROLL_TOP_SHOW_AT_PX);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll::scroll_to_top());

    html! {
        <button
            class={classes!("scroll-top", (!*visible).then(|| "hidden"))}
            {onclick}
            aria-label="Back to top"
        >
            {"↑"}
        </button>
    }
}
