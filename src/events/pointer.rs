use crate::core::lifetime::ViewLifetime;
use crate::dom;
use crate::frame::SharedView;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn update_pointer(view: &SharedView, client_x: i32, client_y: i32) {
    let Some(w) = web::window() else {
        return;
    };
    let (vw, vh) = dom::viewport_size(&w);
    view.borrow_mut()
        .on_pointer_move(client_x as f32, client_y as f32, vw as f32, vh as f32);
}

pub fn wire_pointer_handlers(document: &web::Document, view: SharedView, lifetime: ViewLifetime) {
    wire_pointermove(document, view.clone(), lifetime.clone());
    wire_touchmove(document, view, lifetime);
}

fn wire_pointermove(document: &web::Document, view: SharedView, lifetime: ViewLifetime) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if lifetime.is_alive() {
            update_pointer(&view, ev.client_x(), ev.client_y());
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(document: &web::Document, view: SharedView, lifetime: ViewLifetime) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if !lifetime.is_alive() {
            return;
        }
        if let Some(touch) = ev.touches().get(0) {
            update_pointer(&view, touch.client_x(), touch.client_y());
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
