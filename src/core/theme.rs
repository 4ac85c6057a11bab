use crate::constants::THEME_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only an explicit `"dark"` selects the dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write: {0}")]
    Write(String),
    #[error("storage read failed: {0}")]
    Read(String),
}

/// String key/value persistence for the theme preference.
pub trait ThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Current theme plus the store it is persisted to.
pub struct ThemeSwitch<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeSwitch<S> {
    /// Restore the saved preference; unreadable storage means light.
    pub fn load(store: S) -> Self {
        let current = match store.get(THEME_STORAGE_KEY) {
            Ok(v) => Theme::from_stored(v.as_deref()),
            Err(e) => {
                log::warn!("[theme] could not read preference: {}", e);
                Theme::Light
            }
        };
        Self { store, current }
    }

    #[inline]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. The new theme is kept even if saving fails.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.current = self.current.toggled();
        self.store.set(THEME_STORAGE_KEY, self.current.as_str())?;
        Ok(self.current)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
