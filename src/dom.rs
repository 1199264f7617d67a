use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement};

pub fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    let Ok(list) = document.query_selector_all(selector) else {
        return out;
    };
    for index in 0..list.length() {
        let Some(node) = list.get(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            out.push(element);
        }
    }
    out
}

pub fn descendants(root: &Element, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    let Ok(list) = root.query_selector_all(selector) else {
        return out;
    };
    for index in 0..list.length() {
        let Some(node) = list.get(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            out.push(element);
        }
    }
    out
}

pub fn style(element: &Element) -> Option<CssStyleDeclaration> {
    element.dyn_ref::<HtmlElement>().map(|html| html.style())
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(style) = style(element) {
        let _ = style.set_property(property, value);
    }
}

pub fn force_visible(element: &Element) {
    set_style(element, "opacity", "1");
    set_style(element, "visibility", "visible");
}
