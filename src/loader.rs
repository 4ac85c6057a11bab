use crate::core::loader::{loader_steps, timeline, LoaderAction, LoaderTimings, NavigationType};
use crate::dom;
use crate::timers::TimerScope;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Classify this page view from Navigation Timing, falling back to the legacy API.
pub fn navigation_type(window: &web::Window) -> NavigationType {
    let Some(perf) = window.performance() else {
        return NavigationType::Navigate;
    };
    let entry_type = perf
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<web::PerformanceNavigationTiming>()
        .ok()
        .and_then(|entry| JsValue::from(entry.type_()).as_string());
    entry_type
        .as_deref()
        .and_then(NavigationType::from_entry_type)
        .unwrap_or_else(|| NavigationType::from_legacy_code(perf.navigation().type_()))
}

fn apply(document: &web::Document, action: LoaderAction) {
    for change in action.class_changes() {
        let id = change.target.element_id();
        if let Some(class) = change.remove {
            dom::remove_class(document, id, class);
        }
        if let Some(class) = change.add {
            dom::add_class(document, id, class);
        }
    }
}

pub fn init(window: &web::Window, document: &web::Document, scope: &TimerScope) {
    let nav = navigation_type(window);
    log::info!("[loader] navigation type {:?}", nav);
    for (at_ms, action) in timeline(&loader_steps(nav, LoaderTimings::default())) {
        if at_ms == 0 {
            apply(document, action);
            continue;
        }
        let document = document.clone();
        scope.after(at_ms, move || apply(&document, action));
    }
}
