use std::collections::HashMap;

use crate::constants::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only the exact value `"dark"` selects the dark theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }

    /// Moon invites switching to dark, sun back to light.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Key-value storage for the theme flag (local storage in the browser).
pub trait ThemeStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl ThemeStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

pub fn load_theme<S: ThemeStore + ?Sized>(store: &S) -> Theme {
    Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref())
}

/// Flips the theme and persists the new value.
pub fn toggle_theme<S: ThemeStore + ?Sized>(store: &mut S, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(THEME_STORAGE_KEY, next.as_str());
    log::debug!("theme set to {}", next.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_unknown_value_is_light() {
        let store: HashMap<String, String> = HashMap::new();
        assert_eq!(load_theme(&store), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store: HashMap<String, String> = HashMap::new();
        let loaded = load_theme(&store);
        let theme = toggle_theme(&mut store, loaded);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get(THEME_STORAGE_KEY).map(String::as_str), Some("dark"));
        assert_eq!(load_theme(&store), Theme::Dark);
        assert_eq!(theme.icon_class(), "fas fa-sun");
    }

    #[test]
    fn test_double_toggle_restores_value_and_icon() {
        for initial in ["light", "dark"] {
            let mut store: HashMap<String, String> = HashMap::new();
            ThemeStore::set(&mut store, THEME_STORAGE_KEY, initial);
            let start = load_theme(&store);

            let once = toggle_theme(&mut store, start);
            let twice = toggle_theme(&mut store, once);

            assert_eq!(twice, start);
            assert_eq!(twice.icon_class(), start.icon_class());
            assert_eq!(ThemeStore::get(&store, THEME_STORAGE_KEY).as_deref(), Some(initial));
        }
    }
}
