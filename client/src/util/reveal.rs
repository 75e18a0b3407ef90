//! Viewport reveal driver.
//!
//! Watches every `[data-motion="reveal"]` element with one
//! `IntersectionObserver` and toggles the revealed class according to
//! `motion::reveal_action`. Requires a browser environment; SSR paths no-op
//! and the document shell carries a `<noscript>` fallback.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use super::motion::{ONCE_ATTR, REVEAL_SELECTOR, REVEALED_CLASS, RevealAction, reveal_action};

/// Fraction of an element that must be visible before it counts as in view.
#[cfg(feature = "hydrate")]
const VISIBLE_THRESHOLD: f64 = 0.1;

/// Start observing all reveal targets currently in the document.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let once = target.get_attribute(ONCE_ATTR).as_deref() != Some("false");
                    match reveal_action(entry.is_intersecting(), once) {
                        RevealAction::Reveal { unobserve } => {
                            let _ = target.class_list().add_1(REVEALED_CLASS);
                            if unobserve {
                                observer.unobserve(&target);
                            }
                        }
                        RevealAction::Conceal => {
                            let _ = target.class_list().remove_1(REVEALED_CLASS);
                        }
                        RevealAction::Keep => {}
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
        let observer =
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("reveal observer unavailable: {err:?}");
                    return;
                }
            };
        // The observer lives for the page lifetime.
        callback.forget();

        let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&el);
            }
        }
        log::debug!("reveal observer watching {} elements", nodes.length());
    }
}
