//! Nested scopes: outermost owns the root, storage stays last-writer-wins.

use std::cell::RefCell;
use std::rc::Rc;

use duotone::storage::{KeyValueStorage, StorageAdapter};
use duotone::{SharedRoot, SimulatedRoot, ThemeProvider, ThemeType};

#[test]
fn outer_scope_owns_the_root() {
    let root = Rc::new(RefCell::new(SimulatedRoot::new()));
    let shared = SharedRoot::of(Rc::clone(&root));

    let outer = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Light)
        .root(shared.clone())
        .build()
        .unwrap();

    // The inner scope resolves dark (its own storage), but its binding is
    // inert: painting stays with the outer scope.
    let inner = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Dark)
        .root(shared)
        .build()
        .unwrap();

    assert_eq!(inner.handle().theme_type(), ThemeType::Dark);
    assert_eq!(
        root.borrow().classes(),
        ["light"],
        "the outer scope's color is the one on the document"
    );

    // Inner mutators still never reach the root.
    inner.handle().set_theme(ThemeType::Dark).unwrap();
    assert_eq!(root.borrow().classes(), ["light"]);

    // The outer scope's mutators do.
    outer.handle().toggle_theme().unwrap();
    assert_eq!(root.borrow().classes(), ["dark"]);
}

#[test]
fn same_key_shared_medium_is_last_writer_wins() {
    let storage = Rc::new(RefCell::new(KeyValueStorage::in_memory()));

    let outer = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Light)
        .storage(Rc::clone(&storage))
        .build()
        .unwrap();

    // The inner scope sees the outer's write-back: stored beats its default.
    let inner = ThemeProvider::builder()
        .storage_key("test")
        .default_theme(ThemeType::Dark)
        .storage(Rc::clone(&storage))
        .build()
        .unwrap();
    assert_eq!(inner.handle().theme_type(), ThemeType::Light);

    // Whoever writes last owns the stored value; not an error.
    inner.handle().set_theme(ThemeType::Dark).unwrap();
    assert_eq!(storage.borrow().read("test").as_deref(), Some("dark"));

    outer.handle().set_theme(ThemeType::Auto).unwrap();
    assert_eq!(storage.borrow().read("test").as_deref(), Some("auto"));
}

#[test]
fn root_ownership_passes_on_after_teardown() {
    let root = Rc::new(RefCell::new(SimulatedRoot::new()));
    let shared = SharedRoot::of(Rc::clone(&root));

    let first = ThemeProvider::builder()
        .default_theme(ThemeType::Light)
        .root(shared.clone())
        .build()
        .unwrap();
    assert_eq!(root.borrow().classes(), ["light"]);
    drop(first);

    let second = ThemeProvider::builder()
        .default_theme(ThemeType::Dark)
        .root(shared)
        .build()
        .unwrap();
    assert_eq!(root.borrow().classes(), ["dark"]);
    drop(second);
}

#[test]
fn headless_scope_is_a_noop_on_painting() {
    // No root configured at all: everything else still works.
    let provider = ThemeProvider::builder()
        .default_theme(ThemeType::Dark)
        .build()
        .unwrap();

    provider.handle().toggle_theme().unwrap();
    assert_eq!(provider.handle().theme_type(), ThemeType::Light);
}
