use folio_core::{FxError, FxResult, Rect, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport() -> Viewport {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Viewport::new(width as f32, height as f32)
        }
        None => Viewport::default(),
    }
}

#[inline]
pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Rectangle of a still-attached element, `None` once it left the document.
#[inline]
pub fn live_rect(el: &web::Element) -> Option<Rect> {
    el.is_connected().then(|| element_rect(el))
}

#[inline]
pub fn client_pos(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    node_list_elements(root.query_selector_all(selector).ok())
}

pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    node_list_elements(document.query_selector_all(selector).ok())
}

fn node_list_elements(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn attr_lookup(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |name: &str| el.get_attribute(name)
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn create_div(document: &web::Document, class: &str) -> FxResult<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| FxError::missing(format!("create div: {:?}", e)))?;
    el.set_class_name(class);
    Ok(el)
}

/// Matches the canvas backing store to its parent's layout size. Returns
/// the new size in pixels.
pub fn sync_canvas_to_parent(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let (w, h) = match canvas.parent_element() {
        Some(parent) => (parent.client_width(), parent.client_height()),
        None => {
            let rect = canvas.get_bounding_client_rect();
            (rect.width() as i32, rect.height() as i32)
        }
    };
    let (w, h) = (w.max(1) as u32, h.max(1) as u32);
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    Vec2::new(w as f32, h as f32)
}
