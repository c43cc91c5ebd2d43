//! Init, persistence round-trip, and toggle scenarios through the public
//! provider surface.

use std::cell::RefCell;
use std::rc::Rc;

use duotone::storage::{KeyValueStorage, StorageAdapter};
use duotone::{SharedRoot, SimulatedRoot, ThemeProvider, ThemeType};

type SharedStorage = Rc<RefCell<KeyValueStorage>>;

fn shared_storage() -> SharedStorage {
    Rc::new(RefCell::new(KeyValueStorage::in_memory()))
}

#[test]
fn default_light_with_nothing_stored() {
    let storage = shared_storage();
    let root = Rc::new(RefCell::new(SimulatedRoot::new()));

    let provider = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Light)
        .storage(Rc::clone(&storage))
        .root(SharedRoot::of(Rc::clone(&root)))
        .build()
        .unwrap();

    assert_eq!(provider.handle().theme_type(), ThemeType::Light);
    assert_eq!(storage.borrow().read("test").as_deref(), Some("light"));
    assert_eq!(root.borrow().classes().first().map(String::as_str), Some("light"));
}

#[test]
fn stored_value_beats_default() {
    let storage = shared_storage();
    storage.borrow_mut().write("test", "dark").unwrap();

    let provider = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Light)
        .storage(storage)
        .build()
        .unwrap();

    assert_eq!(provider.handle().theme_type(), ThemeType::Dark);
}

#[test]
fn invalid_stored_value_falls_back_to_default() {
    let storage = shared_storage();
    storage.borrow_mut().write("test", "chartreuse").unwrap();

    let provider = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Dark)
        .storage(Rc::clone(&storage))
        .build()
        .unwrap();

    assert_eq!(provider.handle().theme_type(), ThemeType::Dark);
    // The write-back replaces the junk with the resolved literal.
    assert_eq!(storage.borrow().read("test").as_deref(), Some("dark"));
}

#[test]
fn set_theme_round_trips_through_a_fresh_scope() {
    for chosen in [ThemeType::Light, ThemeType::Dark, ThemeType::Auto] {
        let storage = shared_storage();

        let provider = ThemeProvider::builder()
            .storage_key("test")
            .storage(Rc::clone(&storage))
            .build()
            .unwrap();
        provider.handle().set_theme(chosen).unwrap();
        drop(provider);

        // Fresh scope, same key, no explicit default.
        let reopened = ThemeProvider::builder()
            .storage_key("test")
            .storage(Rc::clone(&storage))
            .build()
            .unwrap();
        assert_eq!(reopened.handle().theme_type(), chosen);
    }
}

#[test]
fn toggle_from_light_paints_and_persists_dark() {
    let storage = shared_storage();
    let root = Rc::new(RefCell::new(SimulatedRoot::new()));

    let provider = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Light)
        .storage(Rc::clone(&storage))
        .root(SharedRoot::of(Rc::clone(&root)))
        .build()
        .unwrap();

    provider.handle().toggle_theme().unwrap();

    assert!(root.borrow().has_class("dark"));
    assert!(!root.borrow().has_class("light"));
    assert_eq!(root.borrow().color_scheme(), Some("dark"));
    assert_eq!(storage.borrow().read("test").as_deref(), Some("dark"));
}

#[test]
fn double_toggle_returns_to_the_original_color() {
    for start in [ThemeType::Light, ThemeType::Dark] {
        let provider = ThemeProvider::builder()
            .default_theme(start)
            .build()
            .unwrap();
        let theme = provider.handle();

        theme.toggle_theme().unwrap();
        theme.toggle_theme().unwrap();
        assert_eq!(theme.theme_type(), start);
    }
}

#[test]
fn distinct_keys_are_independent() {
    let storage = shared_storage();

    let first = ThemeProvider::builder()
        .storage_key("pane-a")
        .default_theme(ThemeType::Light)
        .storage(Rc::clone(&storage))
        .build()
        .unwrap();
    let second = ThemeProvider::builder()
        .storage_key("pane-b")
        .default_theme(ThemeType::Dark)
        .storage(Rc::clone(&storage))
        .build()
        .unwrap();

    first.handle().set_theme(ThemeType::Dark).unwrap();
    assert_eq!(storage.borrow().read("pane-a").as_deref(), Some("dark"));
    assert_eq!(storage.borrow().read("pane-b").as_deref(), Some("dark"));

    second.handle().set_theme(ThemeType::Light).unwrap();
    assert_eq!(storage.borrow().read("pane-a").as_deref(), Some("dark"));
    assert_eq!(storage.borrow().read("pane-b").as_deref(), Some("light"));
}

#[test]
fn file_backed_choice_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let provider = ThemeProvider::builder()
        .storage_key("test")
        .storage(KeyValueStorage::open(&path))
        .build()
        .unwrap();
    provider.handle().set_theme(ThemeType::Dark).unwrap();
    drop(provider);

    let restarted = ThemeProvider::builder()
        .storage_key("test")
        .storage(KeyValueStorage::open(&path))
        .build()
        .unwrap();
    assert_eq!(restarted.handle().theme_type(), ThemeType::Dark);
}
