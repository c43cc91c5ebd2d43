//! # Duotone - Client-Side Theme Preference
//!
//! `duotone` resolves a user's light/dark/auto color theme, persists the
//! choice under a single storage key, follows operating-system color-scheme
//! changes while in `auto`, and exposes the value plus mutators to
//! application components through a provider/handle pair.
//!
//! ## Core Concepts
//!
//! - [`ThemeProvider`]: One theme scope - resolves, persists, paints, listens
//! - [`ThemeHandle`]: The consumer accessor (`theme`, `themes`, `set_theme`,
//!   `toggle_theme`)
//! - [`StorageAdapter`](storage::StorageAdapter): The persistence medium -
//!   key-value or cookie-style
//! - [`DocumentRoot`]: The paint target - class tokens plus `color-scheme`
//! - [`PreferenceEvents`]: The preference-change signal bridge
//! - [`anti_flicker_script`]: First-paint protection for server-rendered HTML
//!
//! The decision logic itself lives in `duotone-resolve` and is re-exported
//! here in full.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use duotone::{SharedRoot, SimulatedRoot, ThemeProvider, ThemeType};
//!
//! let root = Rc::new(RefCell::new(SimulatedRoot::new()));
//!
//! let provider = ThemeProvider::builder()
//!     .storage_key("app-theme")
//!     .default_theme(ThemeType::Light)
//!     .root(SharedRoot::of(Rc::clone(&root)))
//!     .build()
//!     .unwrap();
//!
//! // Any component with a handle can read and mutate the theme.
//! let theme = provider.handle();
//! theme.toggle_theme().unwrap();
//!
//! assert_eq!(theme.theme_type(), ThemeType::Dark);
//! assert!(root.borrow().has_class("dark"));
//! ```
//!
//! ## The `auto` Mode
//!
//! `auto` persists as the literal `auto` while the *applied* color tracks
//! the live system preference: the scope subscribes to preference-change
//! events only while `auto` is active, re-derives the color on every event,
//! and unsubscribes the moment a concrete type takes over (or the scope is
//! torn down).
//!
//! ## Nesting
//!
//! Scopes may nest. The outermost provider owns the document root - nested
//! providers are inert with respect to painting - while storage stays
//! last-writer-wins. Exactly one theme is active per document at any
//! instant.

pub mod storage;

mod binding;
mod error;
mod flicker;
mod preference;
mod provider;
mod store;

pub use binding::{apply_color, DocumentRoot, SharedRoot, SimulatedRoot};
pub use error::{Result, StorageError};
pub use flicker::{anti_flicker_script, anti_flicker_tag};
pub use preference::{ListenerId, PreferenceEvents};
pub use provider::{ThemeHandle, ThemeProvider, ThemeProviderBuilder, DEFAULT_STORAGE_KEY};

// Resolution core (re-exported from duotone-resolve)
pub use duotone_resolve::{
    color_for_theme_type, flipped_theme_type, resolve_theme_type, set_system_color_detector,
    system_color, theme_for_type, Color, ParseThemeTypeError, Theme, ThemeType, Themes, THEMES,
};
