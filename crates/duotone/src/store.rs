//! The theme store: the one owner of the active theme type.
//!
//! The store resolves its initial value through the resolver, writes the
//! resolution back to storage, paints the root, and from then on reacts to
//! explicit mutators and - while the active type is `auto` - to
//! preference-change events. The preference listener is acquired on entering
//! the `auto` state and released on leaving it or on drop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use duotone_resolve::{
    color_for_theme_type, flipped_theme_type, resolve_theme_type, theme_for_type, Theme, ThemeType,
};

use crate::binding::RootBinding;
use crate::error::Result;
use crate::preference::{ListenerId, PreferenceEvents};
use crate::storage::StorageAdapter;

pub(crate) struct ThemeStore {
    storage: Box<dyn StorageAdapter>,
    storage_key: String,
    current: ThemeType,
    binding: RootBinding,
    events: Rc<PreferenceEvents>,
    listener: Option<ListenerId>,
}

impl ThemeStore {
    /// Resolves, writes back, paints, and wires the preference listener.
    ///
    /// The root is painted before the write-back, so a failing storage
    /// medium never leaves the document unstyled; the write error is still
    /// surfaced.
    pub(crate) fn init(
        storage: Box<dyn StorageAdapter>,
        storage_key: String,
        default_theme: Option<ThemeType>,
        binding: RootBinding,
        events: Rc<PreferenceEvents>,
    ) -> Result<Rc<RefCell<Self>>> {
        let stored = storage.read(&storage_key);
        let resolved = resolve_theme_type(stored.as_deref(), default_theme);

        let mut store = Self {
            storage,
            storage_key,
            current: resolved,
            binding,
            events,
            listener: None,
        };
        let persisted = store.save(resolved);

        let store = Rc::new(RefCell::new(store));
        Self::sync_preference_listener(&store);
        persisted?;
        Ok(store)
    }

    pub(crate) fn theme_type(&self) -> ThemeType {
        self.current
    }

    pub(crate) fn theme(&self) -> Theme {
        theme_for_type(self.current)
    }

    /// Manual override: any of the three types, including `auto`.
    pub(crate) fn set_theme(&mut self, new_type: ThemeType) -> Result<()> {
        self.current = new_type;
        self.save(new_type)
    }

    /// Flips the color currently on screen. Always exits to a concrete type:
    /// toggling out of `auto` lands on the opposite of the live system
    /// color, never back on `auto`.
    pub(crate) fn toggle_theme(&mut self) -> Result<()> {
        let current_color = color_for_theme_type(self.current);
        self.set_theme(flipped_theme_type(current_color))
    }

    /// Preference-change reaction: re-derives the `auto` color and
    /// re-persists the `auto` literal. A no-op when the state has already
    /// left `auto`.
    fn refresh_auto(&mut self) -> Result<()> {
        if self.current == ThemeType::Auto {
            self.save(ThemeType::Auto)
        } else {
            Ok(())
        }
    }

    /// Paints first, persists second (erase-then-write, the cookie-friendly
    /// order). Rendering never waits on storage; the first storage error is
    /// returned.
    fn save(&mut self, theme_type: ThemeType) -> Result<()> {
        self.binding.apply(color_for_theme_type(theme_type));
        let erased = self.storage.erase(&self.storage_key);
        let written = self.storage.write(&self.storage_key, theme_type.as_str());
        erased.and(written)
    }

    /// Aligns the preference subscription with the current state: subscribed
    /// while `auto`, unsubscribed otherwise. Call after every transition.
    pub(crate) fn sync_preference_listener(store: &Rc<RefCell<Self>>) {
        let (is_auto, has_listener) = {
            let state = store.borrow();
            (state.current == ThemeType::Auto, state.listener.is_some())
        };

        if is_auto && !has_listener {
            let weak: Weak<RefCell<Self>> = Rc::downgrade(store);
            let events = Rc::clone(&store.borrow().events);
            let id = events.subscribe(move || {
                if let Some(store) = weak.upgrade() {
                    // Re-persisting `auto` is best effort; the re-applied
                    // color is the part that matters here.
                    let _ = store.borrow_mut().refresh_auto();
                }
            });
            store.borrow_mut().listener = Some(id);
        } else if !is_auto && has_listener {
            let id = store.borrow_mut().listener.take();
            if let Some(id) = id {
                store.borrow().events.unsubscribe(id);
            }
        }
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        // Mandatory release: a torn-down store must never be called back.
        if let Some(id) = self.listener.take() {
            self.events.unsubscribe(id);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("storage_key", &self.storage_key)
            .field("current", &self.current)
            .field("subscribed", &self.listener.is_some())
            .finish()
    }
}
