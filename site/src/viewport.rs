//! `IntersectionObserver` glue for one-shot viewport entry.

use std::cell::Cell;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Call `on_enter` the first time `target` intersects the viewport.
///
/// `root_margin` grows or shrinks the viewport box, CSS margin syntax
/// (`"-50px"` fires only once the element is 50px inside). The observer
/// disconnects itself after firing; the returned handle lets the caller
/// disconnect earlier (e.g. on unmount). Returns `None` when the browser
/// refuses to build the observer; callers should reveal immediately then.
pub fn observe_once(
    target: &Element,
    root_margin: &str,
    on_enter: impl FnOnce() + 'static,
) -> Option<IntersectionObserver> {
    let pending = Cell::new(Some(on_enter));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());

            if entered {
                observer.disconnect();
                if let Some(on_enter) = pending.take() {
                    on_enter();
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                leptos::logging::warn!("[jm-site] IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };

    observer.observe(target);
    callback.forget(); // Lives as long as the observer

    Some(observer)
}
