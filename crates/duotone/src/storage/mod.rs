//! Persistence adapters for the theme choice.
//!
//! One string under one key is all the store ever persists. Two mediums are
//! provided, mirroring the two places a client-side preference naturally
//! lives:
//!
//! - [`KeyValueStorage`]: a per-key map, optionally snapshotted to a JSON
//!   file. `clear()` wipes the **entire** store.
//! - [`CookieStorage`]: a single shared cookie-style string with expiry
//!   attributes, parsed by exact key match. `clear()` affects only the keys
//!   this adapter has written.
//!
//! The `clear()` asymmetry is deliberate: each medium keeps the semantics it
//! naturally provides, and a deployment picks exactly one medium - the rest
//! of the library is agnostic to which.

mod cookie;
mod key_value;

pub use cookie::{CookieJar, CookieStorage};
pub use key_value::KeyValueStorage;

use crate::error::Result;

/// A durable per-origin store for a single string value under a named key.
///
/// Reads swallow failures (an unreadable value resolves like an absent one);
/// writes surface theirs.
pub trait StorageAdapter {
    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. A no-op if absent.
    fn erase(&mut self, key: &str) -> Result<()>;

    /// Clears the store. Scope depends on the medium - see the adapter docs.
    fn clear(&mut self) -> Result<()>;
}

/// A shared medium: every holder of the `Rc` reads and writes the same
/// underlying store, the way every scope on a page shares one
/// `localStorage`. Nested providers targeting the same key get
/// last-writer-wins semantics through this.
impl<S: StorageAdapter> StorageAdapter for std::rc::Rc<std::cell::RefCell<S>> {
    fn read(&self, key: &str) -> Option<String> {
        self.borrow().read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.borrow_mut().write(key, value)
    }

    fn erase(&mut self, key: &str) -> Result<()> {
        self.borrow_mut().erase(key)
    }

    fn clear(&mut self) -> Result<()> {
        self.borrow_mut().clear()
    }
}
