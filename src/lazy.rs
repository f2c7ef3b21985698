use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::page;

const LAZY_SELECTOR: &str = "img[loading='lazy'], img[data-lazy]";
const PRELOAD_MARGIN: &str = "200px 0px";

pub(crate) struct LazyLoader {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl LazyLoader {
    pub(crate) fn watch(window: &Window, document: &Document) -> Option<Self> {
        if !supports_intersection_observer(window) {
            return None;
        }
        let images = page::query_all(document, LAZY_SELECTOR);
        if images.is_empty() {
            return None;
        }

        let callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
            Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(PRELOAD_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for image in &images {
            observer.observe(image);
        }
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for LazyLoader {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(crate) fn reveal(element: &Element) {
    if let Some(staged) = element.get_attribute("data-src") {
        if let Some(image) = element.dyn_ref::<HtmlImageElement>() {
            image.set_src(&staged);
        }
    }
    let _ = element.remove_attribute("data-lazy");
}

fn supports_intersection_observer(window: &Window) -> bool {
    Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}
