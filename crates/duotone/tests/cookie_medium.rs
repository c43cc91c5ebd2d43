//! The cookie-backed medium through the provider surface.

use std::cell::RefCell;
use std::rc::Rc;

use duotone::storage::{CookieJar, CookieStorage, StorageAdapter};
use duotone::{ThemeProvider, ThemeType};

#[test]
fn choice_round_trips_through_a_shared_jar() {
    let jar = Rc::new(RefCell::new(CookieJar::new()));

    let provider = ThemeProvider::builder()
        .storage_key("theme-preference")
        .storage(CookieStorage::with_jar(Rc::clone(&jar)))
        .build()
        .unwrap();
    provider.handle().set_theme(ThemeType::Dark).unwrap();
    drop(provider);

    // A fresh scope over the same jar - a page reload - sees the choice.
    let reloaded = ThemeProvider::builder()
        .storage_key("theme-preference")
        .storage(CookieStorage::with_jar(Rc::clone(&jar)))
        .build()
        .unwrap();
    assert_eq!(reloaded.handle().theme_type(), ThemeType::Dark);

    assert!(jar
        .borrow()
        .cookie_string()
        .contains("theme-preference=dark"));
}

#[test]
fn foreign_cookies_are_untouched_by_theme_writes() {
    let jar = Rc::new(RefCell::new(CookieJar::new()));
    jar.borrow_mut().set("session", "abc123", None);

    let provider = ThemeProvider::builder()
        .storage_key("theme-preference")
        .storage(CookieStorage::with_jar(Rc::clone(&jar)))
        .default_theme(ThemeType::Light)
        .build()
        .unwrap();
    provider.handle().set_theme(ThemeType::Auto).unwrap();

    let rendered = jar.borrow().cookie_string();
    assert!(rendered.contains("session=abc123"));
    assert!(rendered.contains("theme-preference=auto"));
}

#[test]
fn erased_cookie_resolves_like_nothing_stored() {
    let jar = Rc::new(RefCell::new(CookieJar::new()));

    let mut storage = CookieStorage::with_jar(Rc::clone(&jar));
    storage.write("theme-preference", "dark").unwrap();
    storage.erase("theme-preference").unwrap();

    let provider = ThemeProvider::builder()
        .storage_key("theme-preference")
        .storage(storage)
        .default_theme(ThemeType::Light)
        .build()
        .unwrap();
    assert_eq!(provider.handle().theme_type(), ThemeType::Light);
}

#[test]
fn junk_cookie_value_is_treated_as_absent() {
    let jar = Rc::new(RefCell::new(CookieJar::new()));
    jar.borrow_mut().set("theme-preference", "banana", None);

    let provider = ThemeProvider::builder()
        .storage_key("theme-preference")
        .storage(CookieStorage::with_jar(Rc::clone(&jar)))
        .default_theme(ThemeType::Dark)
        .build()
        .unwrap();

    assert_eq!(provider.handle().theme_type(), ThemeType::Dark);
    // The write-back replaced the junk with the resolved literal.
    assert!(jar
        .borrow()
        .cookie_string()
        .contains("theme-preference=dark"));
}
