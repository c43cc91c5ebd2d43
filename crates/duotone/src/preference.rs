//! Change notification for the system color preference.
//!
//! [`PreferenceEvents`] is the library's stand-in for the platform's
//! preference-change primitive (a `matchMedia` change event in a browser, a
//! settings daemon signal on a desktop). An embedder bridges the real signal
//! by calling [`emit`](PreferenceEvents::emit); the store subscribes while
//! the active theme is `auto` and re-resolves on every event.
//!
//! Callbacks carry no payload: each subscriber re-derives the current color
//! itself, so the registry can never hand out a stale value.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Identifies one subscription, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn()>;

/// A single-threaded callback registry for preference-change events.
///
/// Shared by handle (`Rc`); all mutation goes through interior mutability,
/// matching the library's single-threaded, event-driven model.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use duotone::PreferenceEvents;
///
/// let events = PreferenceEvents::new();
/// let fired = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&fired);
/// let id = events.subscribe(move || counter.set(counter.get() + 1));
///
/// events.emit();
/// events.emit();
/// assert_eq!(fired.get(), 2);
///
/// events.unsubscribe(id);
/// events.emit();
/// assert_eq!(fired.get(), 2);
/// ```
#[derive(Default)]
pub struct PreferenceEvents {
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

impl PreferenceEvents {
    /// Creates an empty registry, ready to share.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Registers a callback; returns the id to unsubscribe with.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Removes a subscription. Idempotent; unknown ids are ignored.
    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Delivers one event to every live callback, in subscription order.
    ///
    /// Callbacks may subscribe or unsubscribe reentrantly: the listener list
    /// is snapshotted first, a callback unsubscribed mid-emit is skipped,
    /// and one subscribed mid-emit first runs on the next emit.
    pub fn emit(&self) {
        let snapshot: Vec<(ListenerId, Listener)> = self.listeners.borrow().clone();
        for (id, listener) in snapshot {
            let still_subscribed = self
                .listeners
                .borrow()
                .iter()
                .any(|(listener_id, _)| *listener_id == id);
            if still_subscribed {
                listener();
            }
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl std::fmt::Debug for PreferenceEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
