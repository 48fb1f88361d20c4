use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry};

/// Watches `target` and runs `on_visible` the first time it enters the
/// viewport, then unobserves and disconnects. The returned observer lets the
/// caller disconnect early if the element unmounts before ever becoming
/// visible.
pub(crate) fn observe_once<F>(target: &Element, on_visible: F) -> Option<IntersectionObserver>
where
    F: FnOnce() + 'static,
{
    let mut on_visible = Some(on_visible);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(target);
    callback.forget();
    Some(observer)
}
