//! Own-property storage (component B).
//!
//! Properties are kept in insertion order in a flat `Vec`, matching the
//! original's linked list of `JSProperty` records. Lookup hashes the key
//! and then walks the vector comparing hashes before falling back to a
//! byte-exact name comparison, the same two-step check
//! [`crate::property::PropertyKey::matches`] performs.

use crate::property::PropertyKey;
use crate::value::JsValue;

struct Entry {
    key: PropertyKey,
    value: JsValue,
}

#[derive(Default)]
pub struct PropertyMap {
    entries: Vec<Entry>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Looks up an own property by key, ignoring any prototype chain.
    pub fn find_own(&self, key: &PropertyKey) -> Option<&JsValue> {
        self.entries
            .iter()
            .find(|entry| entry.key.matches(key))
            .map(|entry| &entry.value)
    }

    /// Sets an existing own property in place, or adds a new one if absent.
    pub fn set(&mut self, key: PropertyKey, value: JsValue) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key.matches(&key)) {
            entry.value = value;
        } else {
            self.entries.push(Entry { key, value });
        }
    }

    /// Appends a new own property without checking for an existing one of
    /// the same key. Only for callers that already know `key` is absent —
    /// bootstrap install sites that are naming a fresh property on an
    /// object they just allocated, per `spec.md` §4.B. Using this where the
    /// key might already be present would duplicate the entry rather than
    /// overwrite it; `set` is the safe general-purpose operation.
    pub fn add(&mut self, key: PropertyKey, value: JsValue) {
        self.entries.push(Entry { key, value });
    }

    /// Removes an own property, returning whether one was present.
    pub fn delete(&mut self, key: &PropertyKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.key.matches(key));
        self.entries.len() != before
    }

    pub fn contains(&self, key: &PropertyKey) -> bool {
        self.entries.iter().any(|entry| entry.key.matches(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Own-property names, in insertion order, for `for-in` enumeration.
    pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    /// Own-property values, for GC tracing.
    pub fn values(&self) -> impl Iterator<Item = &JsValue> {
        self.entries.iter().map(|entry| &entry.value)
    }
}
