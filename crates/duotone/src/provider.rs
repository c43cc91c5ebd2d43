//! The provider/handle surface exposed to application code.
//!
//! A [`ThemeProvider`] owns one theme scope: it builds the store, claims the
//! document root (first provider wins), and hands out [`ThemeHandle`]s - the
//! `useTheme` analogue - to any component that needs the current theme or
//! its mutators, without threading parameters through every layer.

use std::cell::RefCell;
use std::rc::Rc;

use duotone_resolve::{Color, Theme, ThemeType, Themes, THEMES};

use crate::binding::{RootBinding, SharedRoot};
use crate::error::Result;
use crate::preference::PreferenceEvents;
use crate::storage::{KeyValueStorage, StorageAdapter};
use crate::store::ThemeStore;

/// The storage key used when the caller does not choose one.
pub const DEFAULT_STORAGE_KEY: &str = "theme-preference";

/// One theme scope: builds the store on construction, exposes handles.
///
/// Construction performs the full init sequence - resolve from storage,
/// write the resolution back, paint the root, subscribe to preference
/// changes if the resolved type is `auto`.
///
/// # Example
///
/// ```rust
/// use duotone::{ThemeProvider, ThemeType};
///
/// let provider = ThemeProvider::builder()
///     .storage_key("test")
///     .default_theme(ThemeType::Light)
///     .build()
///     .unwrap();
///
/// let theme = provider.handle();
/// assert_eq!(theme.theme_type(), ThemeType::Light);
///
/// theme.toggle_theme().unwrap();
/// assert_eq!(theme.theme_type(), ThemeType::Dark);
/// ```
#[derive(Debug)]
pub struct ThemeProvider {
    store: Rc<RefCell<ThemeStore>>,
    events: Rc<PreferenceEvents>,
}

impl ThemeProvider {
    /// Starts a builder with the default key (`"theme-preference"`), the
    /// default theme (`auto`), an in-memory key-value store, and no root.
    pub fn builder() -> ThemeProviderBuilder {
        ThemeProviderBuilder::default()
    }

    /// A cheap-to-clone accessor for the current theme and its mutators.
    ///
    /// Handles keep the scope alive: the store (and its root claim) is torn
    /// down when the provider and every handle are gone.
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            store: Rc::clone(&self.store),
        }
    }

    /// The preference-change registry this scope listens on.
    ///
    /// An embedder bridges the platform signal by calling `emit()` on it.
    pub fn events(&self) -> Rc<PreferenceEvents> {
        Rc::clone(&self.events)
    }
}

/// Configuration for a [`ThemeProvider`], in builder form.
#[derive(Default)]
pub struct ThemeProviderBuilder {
    storage_key: Option<String>,
    default_theme: Option<ThemeType>,
    storage: Option<Box<dyn StorageAdapter>>,
    root: Option<SharedRoot>,
    events: Option<Rc<PreferenceEvents>>,
}

impl ThemeProviderBuilder {
    /// The key the choice is persisted under. Distinct keys are fully
    /// independent.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// The fallback when nothing valid is stored. Unset means `auto`.
    pub fn default_theme(mut self, theme_type: ThemeType) -> Self {
        self.default_theme = Some(theme_type);
        self
    }

    /// The persistence medium. Defaults to an in-memory key-value store.
    pub fn storage(mut self, storage: impl StorageAdapter + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// The document root to paint. Without one, the scope runs headless and
    /// painting is a no-op.
    pub fn root(mut self, root: SharedRoot) -> Self {
        self.root = Some(root);
        self
    }

    /// The preference-change registry to listen on. Providers that should
    /// react to the same platform signal share one registry.
    pub fn events(mut self, events: Rc<PreferenceEvents>) -> Self {
        self.events = Some(events);
        self
    }

    /// Builds the provider, running the init sequence.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the initial write-back fails. The root
    /// is painted before the write-back, so the document is styled even
    /// then.
    pub fn build(self) -> Result<ThemeProvider> {
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(KeyValueStorage::in_memory()));
        let storage_key = self
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        let binding = self
            .root
            .map(|root| root.claim())
            .unwrap_or_else(RootBinding::inert);
        let events = self.events.unwrap_or_else(PreferenceEvents::new);

        let store = ThemeStore::init(
            storage,
            storage_key,
            self.default_theme,
            binding,
            Rc::clone(&events),
        )?;

        Ok(ThemeProvider { store, events })
    }
}

impl std::fmt::Debug for ThemeProviderBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProviderBuilder")
            .field("storage_key", &self.storage_key)
            .field("default_theme", &self.default_theme)
            .finish()
    }
}

/// The consumer accessor: current theme, the catalog, and the mutators.
///
/// Clones share the same underlying store; this is the value a provider
/// makes available to descendant components.
#[derive(Debug, Clone)]
pub struct ThemeHandle {
    store: Rc<RefCell<ThemeStore>>,
}

impl ThemeHandle {
    /// The active theme: preference mode plus live color.
    pub fn theme(&self) -> Theme {
        self.store.borrow().theme()
    }

    /// The active preference mode.
    pub fn theme_type(&self) -> ThemeType {
        self.store.borrow().theme_type()
    }

    /// The color currently in effect. For `auto` this re-reads the system
    /// preference on every call.
    pub fn color(&self) -> Color {
        self.theme().color()
    }

    /// The catalog of the three themes.
    pub fn themes(&self) -> &'static Themes {
        &THEMES
    }

    /// Manual override to any of the three types, including `auto`.
    /// Persists and paints; the storage error, if any, is surfaced after
    /// painting.
    pub fn set_theme(&self, theme_type: ThemeType) -> Result<()> {
        let result = self.store.borrow_mut().set_theme(theme_type);
        ThemeStore::sync_preference_listener(&self.store);
        result
    }

    /// Flips the color currently on screen. Always lands on a concrete
    /// type - toggling out of `auto` picks the opposite of the live system
    /// color.
    pub fn toggle_theme(&self) -> Result<()> {
        let result = self.store.borrow_mut().toggle_theme();
        ThemeStore::sync_preference_listener(&self.store);
        result
    }
}
