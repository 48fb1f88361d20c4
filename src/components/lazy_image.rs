use web_sys::Element;
use yew::prelude::*;

use crate::components::observe::observe_once;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Real image source, withheld until the element first scrolls into view.
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_state(|| false);

    {
        let node = node.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, move || loaded.set(true)));
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <img
            ref={node}
            class={props.class.clone()}
            src={(*loaded).then(|| props.src.clone())}
            alt={props.alt.clone()}
        />
    }
}
