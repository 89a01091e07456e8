const DISPLAY_NAME_KEY: &str = "forja_display_name";

pub fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Preferred display name, set from the profile page. Overrides the name
/// the account was registered with.
pub fn load_display_name() -> Option<String> {
    get_local_storage()
        .and_then(|s| s.get_item(DISPLAY_NAME_KEY).ok())
        .flatten()
}

pub fn save_display_name(name: &str) {
    if let Some(storage) = get_local_storage() {
        if name.is_empty() {
            let _ = storage.remove_item(DISPLAY_NAME_KEY);
        } else {
            let _ = storage.set_item(DISPLAY_NAME_KEY, name);
        }
    }
}
