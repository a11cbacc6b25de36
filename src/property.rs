//! Property keys.
//!
//! Every property is keyed by a string plus its precomputed FNV-1a hash, so
//! lookup can reject most candidates by comparing hashes before falling
//! back to a byte-exact string comparison.

use crate::hash::StringHash;
use crate::string::JsString;

#[derive(Clone, Debug)]
pub struct PropertyKey {
    name: JsString,
    hash: StringHash,
}

impl PropertyKey {
    pub fn new(name: JsString) -> Self {
        let hash = name.hash();
        Self { name, hash }
    }

    #[inline]
    pub fn name(&self) -> &JsString {
        &self.name
    }

    #[inline]
    pub fn hash(&self) -> StringHash {
        self.hash
    }

    /// Hash-then-byte-compare, the same two-step lookup the object store
    /// uses for every property access.
    #[inline]
    pub fn matches(&self, other: &Self) -> bool {
        self.hash == other.hash && self.name == other.name
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::new(JsString::from(s))
    }
}

impl From<JsString> for PropertyKey {
    fn from(name: JsString) -> Self {
        Self::new(name)
    }
}
