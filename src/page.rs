use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        let Some(node) = list.get(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            elements.push(element);
        }
    }
    elements
}
