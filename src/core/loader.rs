use crate::constants::*;

/// How the current page view was entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationType {
    Navigate,
    Reload,
    BackForward,
    Prerender,
}

impl NavigationType {
    /// Parse a Navigation Timing `type` string.
    pub fn from_entry_type(s: &str) -> Option<Self> {
        match s {
            "navigate" => Some(Self::Navigate),
            "reload" => Some(Self::Reload),
            "back_forward" => Some(Self::BackForward),
            "prerender" => Some(Self::Prerender),
            _ => None,
        }
    }

    /// Map the legacy `performance.navigation.type` code; unknown codes count as navigate.
    pub fn from_legacy_code(code: u16) -> Self {
        match code {
            1 => Self::Reload,
            2 => Self::BackForward,
            _ => Self::Navigate,
        }
    }

    /// Fresh navigations and reloads play the loader; history moves skip it.
    #[inline]
    pub fn shows_loader(self) -> bool {
        matches!(self, Self::Navigate | Self::Reload)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderTimings {
    pub break_delay_ms: u32,
    pub hide_delay_ms: u32,
}

impl Default for LoaderTimings {
    fn default() -> Self {
        Self {
            break_delay_ms: LOADER_BREAK_DELAY_MS,
            hide_delay_ms: LOADER_HIDE_DELAY_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoaderTarget {
    Overlay,
    Content,
}

impl LoaderTarget {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Overlay => LOADER_ID,
            Self::Content => MAIN_CONTENT_ID,
        }
    }
}

/// A single class-list edit on one of the loader's elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassChange {
    pub target: LoaderTarget,
    pub add: Option<&'static str>,
    pub remove: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderAction {
    RevealContent,
    BeginBreak,
    HideOverlay,
}

impl LoaderAction {
    pub fn class_changes(self) -> &'static [ClassChange] {
        const REVEAL: [ClassChange; 2] = [
            ClassChange {
                target: LoaderTarget::Content,
                add: None,
                remove: Some(CLASS_HIDDEN),
            },
            ClassChange {
                target: LoaderTarget::Content,
                add: Some(CLASS_VISIBLE),
                remove: None,
            },
        ];
        const BREAK: [ClassChange; 1] = [ClassChange {
            target: LoaderTarget::Overlay,
            add: Some(CLASS_BREAKING),
            remove: None,
        }];
        const HIDE: [ClassChange; 1] = [ClassChange {
            target: LoaderTarget::Overlay,
            add: Some(CLASS_HIDDEN),
            remove: None,
        }];
        match self {
            Self::RevealContent => &REVEAL,
            Self::BeginBreak => &BREAK,
            Self::HideOverlay => &HIDE,
        }
    }
}

/// An action to run `delay_ms` after the previous step ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderStep {
    pub delay_ms: u32,
    pub action: LoaderAction,
}

pub fn loader_steps(nav: NavigationType, timings: LoaderTimings) -> Vec<LoaderStep> {
    if nav.shows_loader() {
        vec![
            LoaderStep {
                delay_ms: 0,
                action: LoaderAction::RevealContent,
            },
            LoaderStep {
                delay_ms: timings.break_delay_ms,
                action: LoaderAction::BeginBreak,
            },
            LoaderStep {
                delay_ms: timings.hide_delay_ms,
                action: LoaderAction::HideOverlay,
            },
        ]
    } else {
        vec![
            LoaderStep {
                delay_ms: 0,
                action: LoaderAction::HideOverlay,
            },
            LoaderStep {
                delay_ms: 0,
                action: LoaderAction::RevealContent,
            },
        ]
    }
}

/// Absolute time (ms since load) at which each step fires.
pub fn timeline(steps: &[LoaderStep]) -> Vec<(u32, LoaderAction)> {
    steps
        .iter()
        .scan(0u32, |at, s| {
            *at = at.saturating_add(s.delay_ms);
            Some((*at, s.action))
        })
        .collect()
}
