use crate::constants::*;
use crate::core::lifetime::ViewLifetime;
use crate::core::menu::MenuLink;
use crate::core::theme::{StoreError, Theme, ThemeStore, ThemeSwitch};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `ThemeStore` over `window.localStorage`, which may be missing or blocked.
pub struct LocalThemeStore {
    storage: Option<web::Storage>,
}

impl LocalThemeStore {
    pub fn open(window: &web::Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

fn apply_theme(body: &web::HtmlElement, theme: Theme) {
    _ = body
        .class_list()
        .toggle_with_force(CLASS_DARK_THEME, theme.is_dark());
}

pub fn wire_name_toggle(document: &web::Document, lifetime: ViewLifetime) {
    let Some(name) = document.query_selector(NAME_SELECTOR).ok().flatten() else {
        return;
    };
    let target = name.clone();
    dom::on_click(&name, move |_| {
        lifetime.guard(|| target.class_list().toggle(CLASS_HINDI_ACTIVE));
    });
}

pub fn wire_menu_toggle(document: &web::Document, lifetime: ViewLifetime) {
    let Ok(items) = document.query_selector_all(MENU_ITEM_SELECTOR) else {
        return;
    };
    let mut anchors = 0;
    for i in 0..items.length() {
        let Some(item) = items.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if MenuLink::classify(item.get_attribute("href").as_deref()) != MenuLink::Anchor {
            continue;
        }
        let target = item.clone();
        let lifetime = lifetime.clone();
        dom::on_click(&item, move |ev| {
            if !lifetime.is_alive() {
                return;
            }
            ev.prevent_default();
            _ = target.class_list().toggle(CLASS_ACTIVE);
        });
        anchors += 1;
    }
    log::info!("[menu] {} items, {} in-page toggles", items.length(), anchors);
}

pub fn wire_theme_toggle(window: &web::Window, document: &web::Document, lifetime: ViewLifetime) {
    let Some(button) = document.get_element_by_id(THEME_BUTTON_ID) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let switch = ThemeSwitch::load(LocalThemeStore::open(window));
    if switch.current().is_dark() {
        apply_theme(&body, Theme::Dark);
    }
    let switch = Rc::new(RefCell::new(switch));
    dom::on_click(&button, move |_| {
        if !lifetime.is_alive() {
            return;
        }
        let mut s = switch.borrow_mut();
        if let Err(e) = s.toggle() {
            log::warn!("[theme] preference not saved: {}", e);
        }
        apply_theme(&body, s.current());
    });
}
