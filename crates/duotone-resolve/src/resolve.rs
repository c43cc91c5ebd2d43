//! The resolver: pure decision logic for theme types and colors.
//!
//! Three small functions carry the semantics the rest of the library leans
//! on:
//!
//! - [`resolve_theme_type`]: which preference mode is in effect, given the
//!   stored value and the application's fallback
//! - [`color_for_theme_type`]: which concrete color a mode displays as,
//!   right now
//! - [`flipped_theme_type`]: where a toggle lands, given the color currently
//!   on screen
//!
//! All three are total; none of them can fail.

use crate::system::system_color;
use crate::types::{Color, Theme, ThemeType, THEMES};

/// Resolves the effective theme type from storage and fallback.
///
/// Precedence, highest first:
///
/// 1. `stored`, if it parses as one of the three literals
/// 2. `fallback`, if provided
/// 3. [`ThemeType::Auto`]
///
/// A stored value that is not a recognized literal is treated as absent -
/// policy, not validation - so stale or foreign values under the storage key
/// can never break resolution.
///
/// # Example
///
/// ```rust
/// use duotone_resolve::{resolve_theme_type, ThemeType};
///
/// // Stored wins over fallback, even when stored is `auto`.
/// assert_eq!(
///     resolve_theme_type(Some("auto"), Some(ThemeType::Light)),
///     ThemeType::Auto,
/// );
/// ```
pub fn resolve_theme_type(stored: Option<&str>, fallback: Option<ThemeType>) -> ThemeType {
    stored
        .and_then(|value| value.parse().ok())
        .or(fallback)
        .unwrap_or(ThemeType::Auto)
}

/// Returns the concrete color a theme type displays as, right now.
///
/// `Light` and `Dark` map to themselves. `Auto` queries the system
/// preference on **every** call - the result is never cached, so repeated
/// calls after a system-scheme change return the new color.
pub fn color_for_theme_type(theme_type: ThemeType) -> Color {
    match theme_type {
        ThemeType::Light => Color::Light,
        ThemeType::Dark => Color::Dark,
        ThemeType::Auto => system_color(),
    }
}

/// Returns the theme type a toggle lands on, given the color on screen.
///
/// Always the *opposite concrete* type: `dark` on screen toggles to
/// [`ThemeType::Light`], `light` to [`ThemeType::Dark`]. This never returns
/// `Auto` - a toggle is a binary action, and `auto` is only reachable
/// through explicit selection.
pub fn flipped_theme_type(color: Color) -> ThemeType {
    match color {
        Color::Dark => ThemeType::Light,
        Color::Light => ThemeType::Dark,
    }
}

/// Looks up the catalog [`Theme`] for a preference mode.
pub fn theme_for_type(theme_type: ThemeType) -> Theme {
    match theme_type {
        ThemeType::Light => THEMES.light,
        ThemeType::Dark => THEMES.dark,
        ThemeType::Auto => THEMES.auto,
    }
}
