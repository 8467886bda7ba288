//! Thin key-value boundary over `localStorage`.
//!
//! Everything the app persists goes through these two functions, so the
//! rest of the code never touches `web_sys::Storage` directly. Absent
//! storage (no window, access denied) degrades to "key not set".

use gloo_console::log;
use web_sys::window;

pub fn get(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(key).ok())
        .flatten()
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        if storage.set_item(key, value).is_err() {
            log!(format!("failed to persist {}", key));
        }
    }
}
