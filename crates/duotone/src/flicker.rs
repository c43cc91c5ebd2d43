//! Anti-flicker script generation.
//!
//! A server-rendered page shows the wrong theme for a moment if the class
//! and `color-scheme` are only applied once the main scope initializes. The
//! fix is an inline, synchronously-executed snippet emitted before the root
//! is otherwise styled, replicating the resolver's decision exactly:
//!
//! 1. stored value, if it is one of the three literals
//! 2. else the configured default
//! 3. a concrete type paints its own color; `auto` asks `matchMedia`
//!
//! Any drift between this snippet and the resolver is a correctness bug, so
//! the literals are interpolated from the same enums the resolver uses.

use duotone_resolve::{Color, ThemeType};

/// Builds the inline JS snippet for a scope's storage key and default.
///
/// The storage read is wrapped in `try`/`catch` and falls back to the
/// default - storage being disabled must never block first paint. The
/// literal `auto` can never reach the class list or the style property: only
/// the two concrete literals appear in the paint branch.
///
/// # Example
///
/// ```rust
/// use duotone::{anti_flicker_script, ThemeType};
///
/// let script = anti_flicker_script("theme-preference", ThemeType::Auto);
/// assert!(script.contains("localStorage.getItem('theme-preference')"));
/// assert!(script.contains("prefers-color-scheme: dark"));
/// ```
pub fn anti_flicker_script(storage_key: &str, default_theme: ThemeType) -> String {
    let light = Color::Light.as_str();
    let dark = Color::Dark.as_str();
    let auto = ThemeType::Auto.as_str();
    let fallback = default_theme.as_str();

    format!(
        "(function(root){{\
var stored=null;\
try{{stored=localStorage.getItem('{storage_key}')}}catch(e){{}}\
var type=(stored==='{light}'||stored==='{dark}'||stored==='{auto}')?stored:'{fallback}';\
var theme=(type==='{light}'||type==='{dark}')?type:\
(window.matchMedia('(prefers-color-scheme: {dark})').matches?'{dark}':'{light}');\
root.classList.remove('{light}','{dark}');\
root.classList.add(theme);\
root.style.colorScheme=theme;\
}})(document.documentElement)"
    )
}

/// The snippet wrapped in a `<script>` element, ready to embed in HTML.
pub fn anti_flicker_tag(storage_key: &str, default_theme: ThemeType) -> String {
    format!(
        "<script>{}</script>",
        anti_flicker_script(storage_key, default_theme)
    )
}
