//! The theme data model: preference modes, concrete colors, and the catalog.
//!
//! Two enums carry the whole model. [`ThemeType`] is what the user *chose*
//! (including the `auto` sentinel); [`Color`] is what actually gets painted
//! (only ever `light` or `dark`). Keeping them as separate types makes it
//! impossible to apply `auto` to a document by accident.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resolve::color_for_theme_type;

/// The user's theme preference mode.
///
/// Persisted as the lowercase literals `light` / `dark` / `auto`. `Auto` is
/// a sentinel meaning "follow the system preference" and is never itself a
/// displayable color.
///
/// # Example
///
/// ```rust
/// use duotone_resolve::ThemeType;
///
/// assert_eq!(ThemeType::Dark.as_str(), "dark");
/// assert_eq!("auto".parse::<ThemeType>(), Ok(ThemeType::Auto));
/// assert!("DARK".parse::<ThemeType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    /// Always light, regardless of the system preference.
    Light,
    /// Always dark, regardless of the system preference.
    Dark,
    /// Follow the system preference, live.
    Auto,
}

impl ThemeType {
    /// The persisted literal for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeType::Light => "light",
            ThemeType::Dark => "dark",
            ThemeType::Auto => "auto",
        }
    }
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the three theme literals.
///
/// Callers that read from storage should not treat this as a failure:
/// [`resolve_theme_type`](crate::resolve_theme_type) deliberately maps
/// unparseable stored values to "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeTypeError {
    value: String,
}

impl ParseThemeTypeError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseThemeTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized theme type '{}' (expected 'light', 'dark' or 'auto')",
            self.value
        )
    }
}

impl std::error::Error for ParseThemeTypeError {}

impl FromStr for ThemeType {
    type Err = ParseThemeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeType::Light),
            "dark" => Ok(ThemeType::Dark),
            "auto" => Ok(ThemeType::Auto),
            other => Err(ParseThemeTypeError {
                value: other.to_string(),
            }),
        }
    }
}

/// A concrete, displayable color scheme.
///
/// This is the only pair of values that ever reaches a document root, as a
/// class token and as the `color-scheme` style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl Color {
    /// Both concrete colors, in catalog order.
    pub const ALL: [Color; 2] = [Color::Light, Color::Dark];

    /// The class / style literal for this color.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Light => "light",
            Color::Dark => "dark",
        }
    }

    /// The other concrete color.
    pub fn opposite(&self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A preference mode paired with its resolved color.
///
/// For `light` and `dark` the color is fixed. For `auto` the color is
/// *computed on every read* from the live system preference, so a `Theme`
/// held across a system-scheme change reports the new color without being
/// rebuilt:
///
/// ```rust
/// use duotone_resolve::{set_system_color_detector, Color, ThemeType, THEMES};
///
/// set_system_color_detector(|| Color::Dark);
/// assert_eq!(THEMES.auto.color(), Color::Dark);
///
/// set_system_color_detector(|| Color::Light);
/// assert_eq!(THEMES.auto.color(), Color::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    theme_type: ThemeType,
}

impl Theme {
    pub(crate) const fn of(theme_type: ThemeType) -> Self {
        Self { theme_type }
    }

    /// The preference mode this theme represents.
    pub fn theme_type(&self) -> ThemeType {
        self.theme_type
    }

    /// The concrete color for this theme, right now.
    ///
    /// Never cached: for `auto` this queries the system preference on every
    /// call.
    pub fn color(&self) -> Color {
        color_for_theme_type(self.theme_type)
    }
}

/// The immutable catalog of the three themes.
///
/// Exposed to consumers through the provider handle so application code can
/// write `themes.dark` instead of spelling out enum variants. The catalog is
/// a constant; there is no mutable module-level state behind it.
#[derive(Debug, Clone, Copy)]
pub struct Themes {
    /// The always-light theme.
    pub light: Theme,
    /// The always-dark theme.
    pub dark: Theme,
    /// The follow-the-system theme.
    pub auto: Theme,
}

/// The one catalog instance.
pub static THEMES: Themes = Themes {
    light: Theme::of(ThemeType::Light),
    dark: Theme::of(ThemeType::Dark),
    auto: Theme::of(ThemeType::Auto),
};
