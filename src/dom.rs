use crate::error::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn document() -> Result<web::Document, SiteError> {
    let window = web::window().ok_or(SiteError::NoWindow)?;
    window.document().ok_or(SiteError::NoDocument)
}

/// Attach a click handler that lives as long as the page.
pub fn on_click(el: &web::EventTarget, mut handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_class(document: &web::Document, id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(class);
    }
}

#[inline]
pub fn remove_class(document: &web::Document, id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(class);
    }
}

/// Client (CSS pixel) size of an element.
#[inline]
pub fn client_size(el: &web::Element) -> (f64, f64) {
    (el.client_width() as f64, el.client_height() as f64)
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Size a canvas's backing store and CSS box together.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, css_w: f64, css_h: f64, px: (u32, u32)) {
    canvas.set_width(px.0);
    canvas.set_height(px.1);
    _ = canvas.set_attribute(
        "style",
        &format!("display:block;width:{}px;height:{}px", css_w, css_h),
    );
}
