use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::storage::PreferenceStore;

/// `localStorage` key holding the selected theme.
pub const STORAGE_KEY: &str = "webstoreTheme";

/// Root class left behind by older page versions. Removed, never applied.
const LEGACY_CLASS: &str = "default-theme";
const LEGACY_VALUE: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    /// Lenient parse for stored values and control attributes.
    /// Anything that isn't `light` (including the legacy `default`) is dark.
    pub fn parse(raw: &str) -> Theme {
        raw.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// The element whose class list carries the theme (`<html>` in the browser).
pub trait ThemeRoot {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

impl ThemeRoot for web_sys::Element {
    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }
}

/// Applies the persisted theme on load and handles theme control clicks.
pub struct ThemeManager<S, R> {
    store: S,
    root: R,
    current: Theme,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeManager<S, R> {
    /// Read the saved preference (dark when absent) and apply it.
    pub fn init(store: S, root: R) -> Self {
        let saved = store.get(STORAGE_KEY);
        let current = saved.as_deref().map(Theme::parse).unwrap_or_default();

        if saved.as_deref() == Some(LEGACY_VALUE) {
            debug!("Normalizing legacy theme preference to {}", current);
            if let Err(e) = store.set(STORAGE_KEY, current.as_str()) {
                warn!("Failed to rewrite legacy theme preference: {}", e);
            }
        }

        let manager = Self {
            store,
            root,
            current,
        };
        manager.apply(current);
        manager
    }

    /// Click handler for a theme control carrying `identifier` in `data-theme`.
    pub fn select(&mut self, identifier: &str) -> Theme {
        let theme = Theme::parse(identifier);
        self.apply(theme);
        self.current = theme;
        if let Err(e) = self.store.set(STORAGE_KEY, theme.as_str()) {
            warn!("Failed to persist theme {}: {}", theme, e);
        }
        theme
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    fn apply(&self, theme: Theme) {
        self.root.remove_class(LEGACY_CLASS);
        for t in Theme::ALL {
            self.root.remove_class(t.class_name());
        }
        self.root.add_class(theme.class_name());
    }
}
