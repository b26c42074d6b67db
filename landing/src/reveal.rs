//! Scroll reveal: adds `is-visible` to `[data-reveal]` elements the first
//! time they scroll into view.

use fixbot_page::motion::VISIBLE_CLASS;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

const REVEAL_SELECTOR: &str = "[data-reveal]";
/// Elements reveal once they are 80px inside the viewport.
const ROOT_MARGIN: &str = "-80px";

/// Start observing every reveal target on the page.
///
/// Returns how many elements were found. Without `IntersectionObserver`
/// everything is revealed immediately.
pub fn observe_reveals() -> usize {
    let targets = reveal_targets();
    if targets.is_empty() {
        return 0;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    // once seen, stay visible
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable ({err:?}), revealing all");
            reveal_all(&targets);
        }
    }
    targets.len()
}

fn reveal_targets() -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn reveal_all(targets: &[Element]) {
    for target in targets {
        let _ = target.class_list().add_1(VISIBLE_CLASS);
    }
}
