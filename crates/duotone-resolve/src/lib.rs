//! # Duotone Resolve - Theme-Preference Resolution
//!
//! `duotone-resolve` is the decision core of the `duotone` theme-preference
//! library. It answers one question: given what the user stored, what the
//! application suggests, and what the operating system prefers, which theme
//! is in effect right now?
//!
//! This crate is the foundation for the `duotone` provider/store layer, but
//! can be used independently anywhere a light/dark/auto decision is needed.
//!
//! ## Core Concepts
//!
//! - [`ThemeType`]: The user's preference mode - `light`, `dark`, or `auto`
//! - [`Color`]: A concrete, displayable value - `light` or `dark`, never `auto`
//! - [`Theme`]: A preference mode paired with its live color
//! - [`resolve_theme_type`]: Stored value → fallback → `auto` precedence
//! - [`system_color`]: The OS-reported preferred color scheme
//! - [`set_system_color_detector`]: Override detection for testing
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone_resolve::{resolve_theme_type, ThemeType};
//!
//! // Nothing stored, no application default: follow the system.
//! assert_eq!(resolve_theme_type(None, None), ThemeType::Auto);
//!
//! // A stored choice always wins over the application default.
//! assert_eq!(
//!     resolve_theme_type(Some("dark"), Some(ThemeType::Light)),
//!     ThemeType::Dark,
//! );
//!
//! // Garbage in storage is treated as absent, never as an error.
//! assert_eq!(
//!     resolve_theme_type(Some("blurple"), Some(ThemeType::Light)),
//!     ThemeType::Light,
//! );
//! ```
//!
//! ## The `auto` Sentinel
//!
//! `auto` means "follow the system preference". It is a valid *preference*
//! but never a *color*: [`color_for_theme_type`] re-queries the OS on every
//! call while the type is `auto`, so the resolved color tracks live system
//! changes instead of sticking to whatever was detected first.

mod resolve;
mod system;
mod types;

pub use resolve::{
    color_for_theme_type, flipped_theme_type, resolve_theme_type, theme_for_type,
};
pub use system::{set_system_color_detector, system_color};
pub use types::{Color, ParseThemeTypeError, Theme, ThemeType, Themes, THEMES};
