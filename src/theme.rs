//! Dark mode preference and the context that carries it through the app.
//!
//! The preference lives in `localStorage` under one key with the string
//! values `"enabled"` / `"disabled"`. Anything else, including an empty
//! store, reads as disabled.

use yew::Callback;

use crate::storage;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Current mode plus the toggle, provided once at the app root.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub dark_mode: bool,
    pub toggle: Callback<()>,
}

pub fn preference_enabled(raw: Option<&str>) -> bool {
    matches!(raw, Some("enabled"))
}

pub fn preference_value(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

pub fn load_dark_mode() -> bool {
    preference_enabled(storage::get(DARK_MODE_KEY).as_deref())
}

pub fn store_dark_mode(enabled: bool) {
    storage::set(DARK_MODE_KEY, preference_value(enabled));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_means_disabled() {
        assert!(!preference_enabled(None));
    }

    #[test]
    fn only_the_enabled_string_enables() {
        assert!(preference_enabled(Some("enabled")));
        assert!(!preference_enabled(Some("disabled")));
        assert!(!preference_enabled(Some("true")));
        assert!(!preference_enabled(Some("")));
    }

    #[test]
    fn toggling_twice_round_trips_the_persisted_string() {
        for start in [true, false] {
            let once = preference_enabled(Some(preference_value(!start)));
            let twice = preference_value(!once);
            assert_eq!(twice, preference_value(start));
        }
    }
}
