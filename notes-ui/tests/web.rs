//! Browser tests: `wasm-pack test --headless --firefox notes-ui`
#![cfg(target_arch = "wasm32")]

use notes_ui::research::sizing::SizingProfile;
use notes_ui::research::theme::{get_cached_theme_preference, initialize_theme, toggle_theme};
use notes_ui::{fit_textarea, rendered_link_urls};
use shared_types::{Theme, THEME_STORAGE_KEY};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn root_theme_attribute() -> Option<String> {
    document().document_element().unwrap().get_attribute("data-theme")
}

fn mount(tag: &str, id: &str) -> web_sys::Element {
    let element = document().create_element(tag).unwrap();
    element.set_id(id);
    document().body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn invalid_stored_theme_loads_light() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(THEME_STORAGE_KEY, "sepia").unwrap();

    assert_eq!(initialize_theme(), Theme::Light);
    assert_eq!(root_theme_attribute().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn toggling_twice_restores_attribute_and_storage() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(THEME_STORAGE_KEY).unwrap();
    let original = initialize_theme();

    let toggled = toggle_theme(original);
    assert_eq!(root_theme_attribute().as_deref(), Some(toggled.as_str()));
    assert_eq!(get_cached_theme_preference(), toggled);

    let restored = toggle_theme(toggled);
    assert_eq!(restored, original);
    assert_eq!(root_theme_attribute().as_deref(), Some(original.as_str()));
    assert_eq!(
        storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some(original.as_str())
    );
}

#[wasm_bindgen_test]
fn empty_textareas_keep_their_minimum() {
    mount("textarea", "test-requirement");
    mount("textarea", "test-output");

    assert!(fit_textarea("test-requirement", SizingProfile::REQUIREMENT).unwrap() >= 40);
    assert!(fit_textarea("test-output", SizingProfile::OUTPUT).unwrap() >= 200);
    assert_eq!(fit_textarea("missing-element", SizingProfile::NOTE), None);
}

#[wasm_bindgen_test]
fn long_content_grows_the_textarea() {
    let element = mount("textarea", "test-growing");
    element.set_text_content(Some(&"line\n".repeat(40)));

    let height = fit_textarea("test-growing", SizingProfile::REQUIREMENT).unwrap();
    assert!(height > 40);
}

#[wasm_bindgen_test]
fn link_urls_are_read_from_rendered_anchors() {
    let container = mount("div", "test-links");
    container.set_inner_html(
        r#"<div><a href="https://a.example/x">a</a></div><p>ignored</p><div><a href="https://b.example/">b</a></div>"#,
    );

    assert_eq!(
        rendered_link_urls("test-links"),
        vec![
            "https://a.example/x".to_string(),
            "https://b.example/".to_string()
        ]
    );
}
