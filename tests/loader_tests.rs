// Host-side tests for the page loader schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod loader {
    include!("../src/core/loader.rs");
}

use loader::*;
use std::collections::{BTreeSet, HashMap};

/// Class lists of the loader overlay and the main content.
struct FakePage {
    classes: HashMap<LoaderTarget, BTreeSet<&'static str>>,
}

impl FakePage {
    fn new() -> Self {
        let mut classes = HashMap::new();
        classes.insert(LoaderTarget::Overlay, BTreeSet::new());
        classes.insert(LoaderTarget::Content, BTreeSet::from(["hidden"]));
        Self { classes }
    }

    fn apply(&mut self, action: LoaderAction) {
        for c in action.class_changes() {
            let set = self.classes.get_mut(&c.target).unwrap();
            if let Some(r) = c.remove {
                set.remove(r);
            }
            if let Some(a) = c.add {
                set.insert(a);
            }
        }
    }

    /// Run every step due at or before `now_ms`.
    fn advance_to(nav: NavigationType, now_ms: u32) -> Self {
        let mut page = Self::new();
        for (at, action) in timeline(&loader_steps(nav, LoaderTimings::default())) {
            if at <= now_ms {
                page.apply(action);
            }
        }
        page
    }

    fn has(&self, target: LoaderTarget, class: &str) -> bool {
        self.classes[&target].contains(class)
    }
}

#[test]
fn navigate_reveals_then_breaks_then_hides() {
    let steps = loader_steps(NavigationType::Navigate, LoaderTimings::default());
    assert_eq!(
        timeline(&steps),
        vec![
            (0, LoaderAction::RevealContent),
            (5000, LoaderAction::BeginBreak),
            (6200, LoaderAction::HideOverlay),
        ]
    );
}

#[test]
fn navigate_scenario_class_states() {
    let nav = NavigationType::Navigate;

    let p = FakePage::advance_to(nav, 0);
    assert!(p.has(LoaderTarget::Content, "visible"));
    assert!(!p.has(LoaderTarget::Content, "hidden"));
    assert!(!p.has(LoaderTarget::Overlay, "breaking"));

    let p = FakePage::advance_to(nav, 4999);
    assert!(!p.has(LoaderTarget::Overlay, "breaking"));

    let p = FakePage::advance_to(nav, 5000);
    assert!(p.has(LoaderTarget::Overlay, "breaking"));
    assert!(!p.has(LoaderTarget::Overlay, "hidden"));

    let p = FakePage::advance_to(nav, 6199);
    assert!(!p.has(LoaderTarget::Overlay, "hidden"));

    let p = FakePage::advance_to(nav, 6200);
    assert!(p.has(LoaderTarget::Overlay, "breaking"));
    assert!(p.has(LoaderTarget::Overlay, "hidden"));
}

#[test]
fn reload_plays_the_same_loader() {
    assert_eq!(
        loader_steps(NavigationType::Reload, LoaderTimings::default()),
        loader_steps(NavigationType::Navigate, LoaderTimings::default())
    );
}

#[test]
fn back_forward_skips_straight_to_content() {
    let p = FakePage::advance_to(NavigationType::BackForward, 0);
    assert!(p.has(LoaderTarget::Overlay, "hidden"));
    assert!(!p.has(LoaderTarget::Overlay, "breaking"));
    assert!(p.has(LoaderTarget::Content, "visible"));
    assert!(!p.has(LoaderTarget::Content, "hidden"));

    let steps = loader_steps(NavigationType::BackForward, LoaderTimings::default());
    assert!(steps.iter().all(|s| s.delay_ms == 0));
}

#[test]
fn prerender_does_not_show_loader() {
    assert!(!NavigationType::Prerender.shows_loader());
    assert!(NavigationType::Navigate.shows_loader());
    assert!(NavigationType::Reload.shows_loader());
    assert!(!NavigationType::BackForward.shows_loader());
}

#[test]
fn custom_timings_are_relative_to_previous_step() {
    let steps = loader_steps(
        NavigationType::Navigate,
        LoaderTimings {
            break_delay_ms: 100,
            hide_delay_ms: 50,
        },
    );
    let times: Vec<u32> = timeline(&steps).into_iter().map(|(t, _)| t).collect();
    assert_eq!(times, vec![0, 100, 150]);
}

#[test]
fn navigation_type_parsing() {
    assert_eq!(
        NavigationType::from_entry_type("navigate"),
        Some(NavigationType::Navigate)
    );
    assert_eq!(
        NavigationType::from_entry_type("reload"),
        Some(NavigationType::Reload)
    );
    assert_eq!(
        NavigationType::from_entry_type("back_forward"),
        Some(NavigationType::BackForward)
    );
    assert_eq!(
        NavigationType::from_entry_type("prerender"),
        Some(NavigationType::Prerender)
    );
    assert_eq!(NavigationType::from_entry_type("teleport"), None);

    assert_eq!(NavigationType::from_legacy_code(0), NavigationType::Navigate);
    assert_eq!(NavigationType::from_legacy_code(1), NavigationType::Reload);
    assert_eq!(NavigationType::from_legacy_code(2), NavigationType::BackForward);
    assert_eq!(NavigationType::from_legacy_code(255), NavigationType::Navigate);
}

#[test]
fn targets_map_to_page_ids() {
    assert_eq!(LoaderTarget::Overlay.element_id(), "loader");
    assert_eq!(LoaderTarget::Content.element_id(), "main-content");
}

#[test]
fn immediate_steps_keep_their_order_in_the_timeline() {
    let steps = loader_steps(NavigationType::BackForward, LoaderTimings::default());
    assert_eq!(
        timeline(&steps),
        vec![(0, LoaderAction::HideOverlay), (0, LoaderAction::RevealContent)]
    );
}

#[test]
fn unknown_entry_type_falls_back_to_legacy_code() {
    let nav = NavigationType::from_entry_type("teleport")
        .unwrap_or_else(|| NavigationType::from_legacy_code(1));
    assert_eq!(nav, NavigationType::Reload);
    assert!(nav.shows_loader());
}
