//! System color-scheme detection.
//!
//! The operating system's preferred color scheme is the input that makes the
//! `auto` mode work. Detection goes through a process-wide detector function
//! so that tests (and embedders with their own preference source, such as a
//! browser `matchMedia` bridge) can substitute their own answer.
//!
//! ```rust
//! use duotone_resolve::{set_system_color_detector, system_color, Color};
//!
//! // Force dark mode for testing.
//! set_system_color_detector(|| Color::Dark);
//! assert_eq!(system_color(), Color::Dark);
//! ```

use dark_light::{detect as detect_os_scheme, Mode as OsScheme};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::types::Color;

type ColorDetector = fn() -> Color;

static DETECTOR: Lazy<Mutex<ColorDetector>> = Lazy::new(|| Mutex::new(os_color_detector));

/// Overrides the detector used to answer "which color does the system prefer?".
///
/// Tests that exercise `auto` resolution should set an explicit detector and
/// serialize themselves around this global (e.g. with `serial_test`), since
/// the override is process-wide.
pub fn set_system_color_detector(detector: ColorDetector) {
    let mut guard = DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the system's currently preferred color.
///
/// Queries the detector on every call; nothing is cached, so the answer
/// tracks live preference changes.
pub fn system_color() -> Color {
    let detector = DETECTOR.lock().unwrap();
    (*detector)()
}

/// Default detector: ask the OS through `dark-light`.
///
/// Only an explicit dark signal maps to [`Color::Dark`]. An unspecified
/// preference and a failed query both map to [`Color::Light`] - the
/// documented fallback when no signal is available.
fn os_color_detector() -> Color {
    match detect_os_scheme() {
        Ok(OsScheme::Dark) => Color::Dark,
        Ok(OsScheme::Light) | Ok(OsScheme::Unspecified) | Err(_) => Color::Light,
    }
}
