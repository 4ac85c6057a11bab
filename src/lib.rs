#![cfg(target_arch = "wasm32")]
use crate::core::camera::{backing_size, Camera};
use crate::core::interp::CatmullRom;
use crate::core::lifetime::ViewLifetime;
use crate::core::scene::{build_spiral, SpiralConfig};
use crate::core::view::SpiralView;
use crate::error::SiteError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod loader;
mod render;
mod timers;

use constants::SPIRAL_CONTAINER_ID;

/// Live page state, kept so `teardown` can release it.
struct Site {
    timers: timers::TimerScope,
    frame_loop: Rc<RefCell<Option<frame::LoopHandle>>>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spiral-site starting");

    let document = dom::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(move || {
            if let Err(e) = init() {
                log::error!("init error: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())?;
    } else if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Stop the frame loop, cancel pending loader timers and ignore further input.
#[wasm_bindgen]
pub fn teardown() {
    if let Some(site) = SITE.with(|s| s.borrow_mut().take()) {
        site.timers.dispose();
        if let Some(handle) = site.frame_loop.borrow_mut().take() {
            handle.stop();
        }
        log::info!("spiral-site torn down");
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(SiteError::NoWindow)?;
    let document = dom::document()?;

    if SITE.with(|s| s.borrow().is_some()) {
        return Ok(());
    }
    let lifetime = ViewLifetime::new();
    let timers = timers::TimerScope::new(lifetime.clone());
    let frame_loop = Rc::new(RefCell::new(None));
    SITE.with(|s| {
        *s.borrow_mut() = Some(Site {
            timers: timers.clone(),
            frame_loop: frame_loop.clone(),
        })
    });

    loader::init(&window, &document, &timers);

    // The spiral sits behind the loader, so it can start right away.
    let doc_spiral = document.clone();
    let spiral_lifetime = lifetime.clone();
    spawn_local(async move {
        match init_spiral(doc_spiral, spiral_lifetime).await {
            Ok(handle) => *frame_loop.borrow_mut() = Some(handle),
            Err(SiteError::MissingElement(id)) => log::warn!("[spiral] #{} not found, skipping", id),
            Err(SiteError::Disposed) => log::info!("[spiral] torn down before mount"),
            Err(e) => log::error!("[spiral] unavailable: {}", e),
        }
    });

    events::toggles::wire_name_toggle(&document, lifetime.clone());
    events::toggles::wire_menu_toggle(&document, lifetime.clone());
    events::toggles::wire_theme_toggle(&window, &document, lifetime);
    Ok(())
}

async fn init_spiral(
    document: web::Document,
    lifetime: ViewLifetime,
) -> Result<frame::LoopHandle, SiteError> {
    let window = web::window().ok_or(SiteError::NoWindow)?;
    let container = document
        .get_element_by_id(SPIRAL_CONTAINER_ID)
        .ok_or(SiteError::MissingElement(SPIRAL_CONTAINER_ID))?;
    let (css_w, css_h) = dom::client_size(&container);

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| SiteError::Js("created element is not a canvas".into()))?;
    dom::size_canvas(
        &canvas,
        css_w,
        css_h,
        backing_size(css_w, css_h, window.device_pixel_ratio()),
    );
    container.append_child(&canvas)?;

    let config = SpiralConfig::default();
    let group = build_spiral(&config, &CatmullRom);
    let gpu = render::GpuState::new(&canvas, &group.strands, group.color)
        .await
        .and_then(|g| lifetime.guard(|| g).ok_or(SiteError::Disposed));
    let gpu = match gpu {
        Ok(g) => g,
        Err(e) => {
            _ = container.remove_child(&canvas);
            return Err(e);
        }
    };
    let camera = Camera::for_size(css_w as f32, css_h as f32);
    let view = Rc::new(RefCell::new(SpiralView::new(group, camera, Some(gpu))));

    events::pointer::wire_pointer_handlers(&document, view.clone(), lifetime.clone());
    frame::wire_resize(view.clone(), container, canvas, lifetime.clone());
    Ok(frame::start_loop(view, lifetime))
}
