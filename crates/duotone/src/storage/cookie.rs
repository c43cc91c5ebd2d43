//! Cookie-style storage medium: one shared string, parsed per key.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::{Duration, SystemTime};

use crate::error::Result;
use crate::storage::StorageAdapter;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Default cookie lifetime, matching the conventional one-year preference
/// cookie.
pub const DEFAULT_TTL_DAYS: i64 = 365;

#[derive(Debug, Clone)]
struct CookieEntry {
    name: String,
    value: String,
    expires: Option<SystemTime>,
}

impl CookieEntry {
    fn is_expired(&self, now: SystemTime) -> bool {
        matches!(self.expires, Some(at) if at <= now)
    }
}

/// The shared cookie string, `document.cookie` style.
///
/// All same-origin readers see one string of `name=value` pairs; expiry is
/// an attribute of each entry, enforced at render time. The jar is usually
/// shared between adapters through `Rc<RefCell<_>>`, the way every script on
/// a page shares one `document.cookie`.
#[derive(Debug, Default)]
pub struct CookieJar {
    entries: Vec<CookieEntry>,
}

impl CookieJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cookie, replacing any entry with the same name.
    ///
    /// An already-past `expires` is how a cookie is deleted: the entry is
    /// kept but never rendered again.
    pub fn set(&mut self, name: &str, value: &str, expires: Option<SystemTime>) {
        self.entries.retain(|entry| entry.name != name);
        self.entries.push(CookieEntry {
            name: name.to_string(),
            value: value.to_string(),
            expires,
        });
    }

    /// Renders the read view: `name=value; name=value` for live entries.
    pub fn cookie_string(&self) -> String {
        let now = SystemTime::now();
        self.entries
            .iter()
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| format!("{}={}", entry.name, entry.value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Cookie-backed storage, the `document.cookie` analogue.
///
/// Reads parse the shared jar string by **exact** key match (a key that is a
/// substring of another key never collides). Writes set an `expires`
/// attribute `ttl_days` ahead; `erase` writes an already-expired entry, the
/// classic cookie-deletion idiom.
///
/// `clear()` affects only the keys *this adapter* has written - the
/// conceptual theme namespace - because the jar string is shared with every
/// other same-origin writer and wiping it wholesale is not this medium's
/// semantic. This deliberately differs from
/// [`KeyValueStorage::clear`](crate::storage::KeyValueStorage).
///
/// # Example
///
/// ```rust
/// use duotone::storage::{CookieStorage, StorageAdapter};
///
/// let mut storage = CookieStorage::new();
/// storage.write("theme-preference", "auto").unwrap();
/// assert_eq!(storage.read("theme-preference").as_deref(), Some("auto"));
///
/// storage.erase("theme-preference").unwrap();
/// assert_eq!(storage.read("theme-preference"), None);
/// ```
#[derive(Debug)]
pub struct CookieStorage {
    jar: Rc<RefCell<CookieJar>>,
    ttl_days: i64,
    written: BTreeSet<String>,
}

impl CookieStorage {
    /// Creates a storage with its own private jar and the default TTL.
    pub fn new() -> Self {
        Self::with_jar(Rc::new(RefCell::new(CookieJar::new())))
    }

    /// Creates a storage over a shared jar.
    pub fn with_jar(jar: Rc<RefCell<CookieJar>>) -> Self {
        Self {
            jar,
            ttl_days: DEFAULT_TTL_DAYS,
            written: BTreeSet::new(),
        }
    }

    /// Sets the TTL, in days, applied to subsequent writes.
    pub fn ttl_days(mut self, days: i64) -> Self {
        self.ttl_days = days;
        self
    }

    /// The shared jar behind this storage.
    pub fn jar(&self) -> Rc<RefCell<CookieJar>> {
        Rc::clone(&self.jar)
    }

    fn set_with_ttl(&mut self, key: &str, value: &str, ttl_days: i64) {
        self.jar
            .borrow_mut()
            .set(key, value, Some(expiry_from_ttl(ttl_days)));
    }
}

impl Default for CookieStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn expiry_from_ttl(ttl_days: i64) -> SystemTime {
    let magnitude = Duration::from_secs(ttl_days.unsigned_abs() * SECONDS_PER_DAY);
    if ttl_days >= 0 {
        SystemTime::now() + magnitude
    } else {
        SystemTime::now() - magnitude
    }
}

impl StorageAdapter for CookieStorage {
    /// Substring-parses the jar string, filtered by exact key match.
    fn read(&self, key: &str) -> Option<String> {
        // "; k=v; k2=v2" - the leading separator makes every key, including
        // the first, match only at a pair boundary.
        let haystack = format!("; {}", self.jar.borrow().cookie_string());
        let needle = format!("; {}=", key);

        let start = haystack.find(&needle)? + needle.len();
        let rest = &haystack[start..];
        let value = match rest.find(';') {
            Some(end) => &rest[..end],
            None => rest,
        };

        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.written.insert(key.to_string());
        self.set_with_ttl(key, value, self.ttl_days);
        Ok(())
    }

    /// Deletes by writing an empty value with an already-past expiry.
    fn erase(&mut self, key: &str) -> Result<()> {
        self.set_with_ttl(key, "", -1);
        Ok(())
    }

    /// Erases only the keys this adapter has written; the rest of the shared
    /// jar is untouched.
    fn clear(&mut self) -> Result<()> {
        let keys: Vec<String> = self.written.iter().cloned().collect();
        for key in keys {
            self.erase(&key)?;
        }
        self.written.clear();
        Ok(())
    }
}
