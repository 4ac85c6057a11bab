use crate::core::lifetime::ViewLifetime;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot timeouts tied to a view lifetime.
///
/// Callbacks check the lifetime before running; `dispose` also clears
/// whatever timeouts are still pending.
#[derive(Clone)]
pub struct TimerScope {
    lifetime: ViewLifetime,
    pending: Rc<RefCell<Vec<i32>>>,
}

impl TimerScope {
    pub fn new(lifetime: ViewLifetime) -> Self {
        Self {
            lifetime,
            pending: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Run `f` after `delay_ms`, unless the scope is disposed first.
    pub fn after(&self, delay_ms: u32, f: impl FnOnce() + 'static) {
        if !self.lifetime.is_alive() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let lifetime = self.lifetime.clone();
        let pending = self.pending.clone();
        let slot: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let slot_cb = slot.clone();
        let cb = Closure::once_into_js(move || {
            if let Some(id) = slot_cb.borrow_mut().take() {
                pending.borrow_mut().retain(|p| *p != id);
            }
            lifetime.guard(f);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(id) => {
                *slot.borrow_mut() = Some(id);
                self.pending.borrow_mut().push(id);
            }
            Err(e) => log::warn!("[timers] setTimeout failed: {:?}", e),
        }
    }

    pub fn dispose(&self) {
        self.lifetime.dispose();
        if let Some(window) = web::window() {
            for id in self.pending.borrow_mut().drain(..) {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}
