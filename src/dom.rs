use glam::Vec2;
use vextra_core::pointer::ElementRect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Documents and elements both answer CSS selector queries.
pub trait Query {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue>;
    fn select(&self, selector: &str) -> Result<Option<web::Element>, JsValue>;
}

impl Query for web::Document {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
    fn select(&self, selector: &str) -> Result<Option<web::Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Query for web::Element {
    fn select_all(&self, selector: &str) -> Result<web::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
    fn select(&self, selector: &str) -> Result<Option<web::Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// All elements under `root` matching `selector`; an invalid selector yields nothing.
pub fn query_all(root: &impl Query, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.select_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(root: &impl Query, selector: &str) -> Option<web::Element> {
    root.select(selector).ok().flatten()
}

pub fn element_rect(el: &web::Element) -> ElementRect {
    let rect = el.get_bounding_client_rect();
    ElementRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[inline]
pub fn client_point(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn set_inner_html_by_id(document: &web::Document, id: &str, html: &str) -> bool {
    match document.get_element_by_id(id) {
        Some(el) => {
            el.set_inner_html(html);
            true
        }
        None => false,
    }
}

pub fn data_attr_u32(el: &web::Element, name: &str) -> Option<u32> {
    el.get_attribute(name).and_then(|v| v.trim().parse().ok())
}

pub fn data_attr_f64(el: &web::Element, name: &str) -> Option<f64> {
    el.get_attribute(name).and_then(|v| v.trim().parse().ok())
}
