use shared_types::{Theme, THEME_STORAGE_KEY};

pub fn apply_theme_to_document(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

pub fn get_cached_theme_preference() -> Theme {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());

    Theme::parse(stored.as_deref())
}

pub fn set_cached_theme_preference(theme: Theme) {
    if let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Applies the stored preference at load time.
pub fn initialize_theme() -> Theme {
    let theme = get_cached_theme_preference();
    apply_theme_to_document(theme);
    theme
}

pub fn toggle_theme(current: Theme) -> Theme {
    let next = current.toggled();
    apply_theme_to_document(next);
    set_cached_theme_preference(next);
    next
}
