//! Presentation binding: applying a resolved color to a document root.
//!
//! The root is an external collaborator - a DOM `<html>` element, a window
//! handle, anything with class tokens and a `color-scheme`-like property.
//! Only concrete colors ever reach it; the `auto` literal stops at the
//! resolver.
//!
//! A root shared by several providers is wrapped in [`SharedRoot`]: the
//! first provider to claim it owns writes, later claimants get an inert
//! binding. That keeps "exactly one active theme per document" true even
//! when scopes nest.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use duotone_resolve::Color;

/// A mutable document root: class tokens plus a `color-scheme` property.
pub trait DocumentRoot {
    /// Adds a class token. Adding a token already present is a no-op.
    fn add_class(&mut self, class: &str);

    /// Removes a class token. Removing an absent token is a no-op.
    fn remove_class(&mut self, class: &str);

    /// Sets the `color-scheme` style property.
    fn set_color_scheme(&mut self, value: &str);
}

/// Applies a concrete color to a root: drop both color tokens, add the new
/// one, and set `color-scheme`.
///
/// `auto` cannot reach this function by construction - it takes a [`Color`],
/// and no `Color` spells `auto`.
pub fn apply_color<R: DocumentRoot + ?Sized>(root: &mut R, color: Color) {
    for token in Color::ALL {
        root.remove_class(token.as_str());
    }
    root.add_class(color.as_str());
    root.set_color_scheme(color.as_str());
}

/// An in-memory root for tests and headless embedders.
///
/// # Example
///
/// ```rust
/// use duotone::{apply_color, SimulatedRoot};
/// use duotone::Color;
///
/// let mut root = SimulatedRoot::new();
/// apply_color(&mut root, Color::Dark);
///
/// assert!(root.has_class("dark"));
/// assert!(!root.has_class("light"));
/// assert_eq!(root.color_scheme(), Some("dark"));
/// ```
#[derive(Debug, Default)]
pub struct SimulatedRoot {
    classes: Vec<String>,
    color_scheme: Option<String>,
}

impl SimulatedRoot {
    /// Creates a root with no classes and no `color-scheme`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The class tokens, in application order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether a class token is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The `color-scheme` property, if set.
    pub fn color_scheme(&self) -> Option<&str> {
        self.color_scheme.as_deref()
    }
}

impl DocumentRoot for SimulatedRoot {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn set_color_scheme(&mut self, value: &str) {
        self.color_scheme = Some(value.to_string());
    }
}

/// A document root shared between providers, with first-claimant ownership.
///
/// Cloning shares both the root and the claim flag. The provider that claims
/// first gets the active binding; every later claim is inert until the
/// owning binding drops.
#[derive(Clone)]
pub struct SharedRoot {
    root: Rc<RefCell<dyn DocumentRoot>>,
    claimed: Rc<Cell<bool>>,
}

impl SharedRoot {
    /// Wraps a root for sharing.
    ///
    /// The caller usually keeps its own typed `Rc` to the root for
    /// inspection:
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use duotone::{SharedRoot, SimulatedRoot};
    ///
    /// let root = Rc::new(RefCell::new(SimulatedRoot::new()));
    /// let shared = SharedRoot::of(Rc::clone(&root));
    /// # let _ = shared;
    /// ```
    pub fn of<R: DocumentRoot + 'static>(root: Rc<RefCell<R>>) -> Self {
        let root: Rc<RefCell<dyn DocumentRoot>> = root;
        Self {
            root,
            claimed: Rc::new(Cell::new(false)),
        }
    }

    /// Claims write ownership. First claim wins; later claims are inert.
    pub(crate) fn claim(&self) -> RootBinding {
        if self.claimed.get() {
            return RootBinding::inert();
        }
        self.claimed.set(true);
        RootBinding {
            root: Some(Rc::clone(&self.root)),
            claim: Some(Rc::clone(&self.claimed)),
        }
    }
}

impl std::fmt::Debug for SharedRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRoot")
            .field("claimed", &self.claimed.get())
            .finish()
    }
}

/// A store's handle on the document root: active for the owning provider,
/// inert for nested ones and for rootless environments.
pub(crate) struct RootBinding {
    root: Option<Rc<RefCell<dyn DocumentRoot>>>,
    claim: Option<Rc<Cell<bool>>>,
}

impl RootBinding {
    pub(crate) fn inert() -> Self {
        Self {
            root: None,
            claim: None,
        }
    }

    pub(crate) fn apply(&self, color: Color) {
        if let Some(root) = &self.root {
            apply_color(&mut *root.borrow_mut(), color);
        }
    }
}

impl Drop for RootBinding {
    fn drop(&mut self) {
        // Release ownership so a later provider can bind the same root.
        if let Some(claim) = &self.claim {
            claim.set(false);
        }
    }
}

impl std::fmt::Debug for RootBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootBinding")
            .field("active", &self.root.is_some())
            .finish()
    }
}
