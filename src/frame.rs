use crate::core::camera::backing_size;
use crate::core::lifetime::ViewLifetime;
use crate::core::view::SpiralView;
use crate::dom;
use crate::render::GpuState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedView = Rc<RefCell<SpiralView<GpuState>>>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops a running `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct LoopHandle {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Cancel the pending frame and release the tick closure.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[spiral] frame loop stopped");
    }
}

fn frame(view: &SharedView) {
    let mut v = view.borrow_mut();
    match v.tick() {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
            if let Some(r) = v.renderer_mut() {
                r.reconfigure();
            }
        }
        Err(e) => log::warn!("[spiral] render error: {:?}", e),
    }
}

fn request(tick: &TickSlot, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[spiral] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Drive `view` once per display refresh until stopped or `lifetime` ends.
pub fn start_loop(view: SharedView, lifetime: ViewLifetime) -> LoopHandle {
    let handle = LoopHandle {
        tick: Rc::new(RefCell::new(None)),
        raf_id: Rc::new(Cell::new(None)),
        running: Rc::new(Cell::new(true)),
    };
    let h = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        h.raf_id.set(None);
        if !h.running.get() {
            return;
        }
        if !lifetime.is_alive() {
            h.running.set(false);
            // dropping the closure from inside its own call is not allowed; defer it
            let tick = h.tick.clone();
            wasm_bindgen_futures::spawn_local(async move {
                tick.borrow_mut().take();
            });
            return;
        }
        frame(&view);
        request(&h.tick, &h.raf_id);
    }) as Box<dyn FnMut()>));
    request(&handle.tick, &handle.raf_id);
    handle
}

/// Keep the camera and surface matched to the container across window resizes.
pub fn wire_resize(
    view: SharedView,
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    lifetime: ViewLifetime,
) {
    let closure = Closure::wrap(Box::new(move || {
        if !lifetime.is_alive() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        let dpr = w.device_pixel_ratio();
        let (css_w, css_h) = dom::client_size(&container);
        if css_w <= 0.0 || css_h <= 0.0 {
            return;
        }
        dom::size_canvas(&canvas, css_w, css_h, backing_size(css_w, css_h, dpr));
        view.borrow_mut().resize(css_w, css_h, dpr);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
