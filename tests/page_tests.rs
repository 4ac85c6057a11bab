// Host-side tests for menu link classification and view lifetimes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod menu {
    include!("../src/core/menu.rs");
}
mod lifetime {
    include!("../src/core/lifetime.rs");
}

use lifetime::ViewLifetime;
use menu::MenuLink;
use std::cell::Cell;

#[test]
fn in_page_links_toggle() {
    assert_eq!(MenuLink::classify(Some("#about")), MenuLink::Anchor);
    assert_eq!(MenuLink::classify(Some("#")), MenuLink::Anchor);
    assert_eq!(MenuLink::classify(Some("projects")), MenuLink::Anchor);
}

#[test]
fn page_and_external_links_navigate() {
    assert_eq!(MenuLink::classify(Some("about.html")), MenuLink::Page);
    assert_eq!(MenuLink::classify(Some("/blog/post.html#top")), MenuLink::Page);
    assert_eq!(MenuLink::classify(Some("https://example.com")), MenuLink::Page);
    assert_eq!(MenuLink::classify(Some("http://example.com/#x")), MenuLink::Page);
}

#[test]
fn missing_or_empty_href_navigates() {
    assert_eq!(MenuLink::classify(None), MenuLink::Page);
    assert_eq!(MenuLink::classify(Some("")), MenuLink::Page);
}

#[test]
fn guard_runs_only_while_alive() {
    let life = ViewLifetime::new();
    let hits = Cell::new(0);
    assert_eq!(life.guard(|| hits.set(hits.get() + 1)), Some(()));
    life.dispose();
    assert_eq!(life.guard(|| hits.set(hits.get() + 1)), None);
    assert_eq!(hits.get(), 1);
}

#[test]
fn clones_share_liveness() {
    let life = ViewLifetime::default();
    let timer_copy = life.clone();
    let loop_copy = life.clone();
    assert!(timer_copy.is_alive() && loop_copy.is_alive());
    loop_copy.dispose();
    assert!(!life.is_alive());
    assert!(!timer_copy.is_alive());
}

#[test]
fn handlers_wired_before_teardown_become_no_ops() {
    use std::rc::Rc;

    let life = ViewLifetime::new();
    let toggles = Rc::new(Cell::new(0));
    let mut on_click = {
        let life = life.clone();
        let toggles = toggles.clone();
        move || {
            if !life.is_alive() {
                return;
            }
            toggles.set(toggles.get() + 1);
        }
    };
    on_click();
    on_click();
    life.dispose();
    on_click();
    assert_eq!(toggles.get(), 2);
}

#[test]
fn resource_created_after_teardown_is_dropped() {
    use std::rc::Rc;

    let life = ViewLifetime::new();
    let gpu = Rc::new(());
    life.dispose();
    let mounted = life.guard(|| gpu.clone());
    assert!(mounted.is_none());
    assert_eq!(Rc::strong_count(&gpu), 1);
}
