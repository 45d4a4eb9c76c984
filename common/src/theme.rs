use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use tracing::debug;

pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    // anything that is not exactly "dark" is treated as light, which matches
    // what older builds of the site wrote to storage
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// PreferenceStore
//
// the key-value store that remembers the theme across reloads.  in the
// browser this is local storage; reads that fail are treated as absent
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

// the operating environment's "prefers dark" signal
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

// whatever carries the presentation flag, i.e. the document root class
pub trait ThemeTarget {
    fn apply(&self, theme: Theme);
}

// MemoryStore
//
// in-process store for non-browser targets and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

// persisted value first, then the system signal; light when neither says dark.
// an empty stored value counts as nothing stored
pub fn resolve_theme(
    store: &impl PreferenceStore,
    key: &str,
    system: &impl ColorSchemeSignal,
) -> Theme {
    match store.get(key).filter(|stored| !stored.is_empty()) {
        Some(stored) => {
            debug!({ key = key, stored = %stored }, "using persisted theme");
            Theme::from_stored(&stored)
        }
        None if system.prefers_dark() => Theme::Dark,
        None => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct System(bool);

    impl ColorSchemeSignal for System {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn persisted_value_wins_over_system() {
        let store = MemoryStore::default();
        store.set(DEFAULT_THEME_KEY, "light");

        assert_eq!(
            resolve_theme(&store, DEFAULT_THEME_KEY, &System(true)),
            Theme::Light
        );
    }

    #[test]
    fn falls_back_to_system_then_light() {
        let store = MemoryStore::default();

        assert_eq!(
            resolve_theme(&store, DEFAULT_THEME_KEY, &System(true)),
            Theme::Dark
        );
        assert_eq!(
            resolve_theme(&store, DEFAULT_THEME_KEY, &System(false)),
            Theme::Light
        );
    }

    #[test]
    fn unknown_stored_values_are_light() {
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("Dark"), Theme::Light);
        assert_eq!(Theme::from_stored("blue"), Theme::Light);
    }

    #[test]
    fn empty_stored_value_falls_back_to_system() {
        let store = MemoryStore::default();
        store.set(DEFAULT_THEME_KEY, "");

        assert_eq!(
            resolve_theme(&store, DEFAULT_THEME_KEY, &System(true)),
            Theme::Dark
        );
        assert_eq!(
            resolve_theme(&store, DEFAULT_THEME_KEY, &System(false)),
            Theme::Light
        );
    }

    #[test]
    fn toggling_flips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
