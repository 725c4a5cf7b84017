use greeting_shared::theme::{load_theme, toggle_theme, Theme, ThemeStore};
use web_sys::{window, Storage};
use yew::prelude::*;

/// Browser local storage. Without storage the theme still toggles, it
/// just is not remembered.
pub struct LocalThemeStore(Option<Storage>);

impl LocalThemeStore {
    pub fn open() -> Self {
        Self(window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

impl ThemeStore for LocalThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        match &self.0 {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to store theme: {:?}", e);
                }
            }
            None => log::warn!("Local storage unavailable, theme not saved"),
        }
    }
}

pub struct UseThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

#[hook]
pub fn use_theme() -> UseThemeHandle {
    let theme = use_state(|| load_theme(&LocalThemeStore::open()));

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = toggle_theme(&mut LocalThemeStore::open(), *theme);
            theme.set(next);
        })
    };

    UseThemeHandle {
        theme: *theme,
        toggle,
    }
}
