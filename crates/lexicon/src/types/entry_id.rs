use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

use crate::types::EntryKey;

/// A compact, serializable identifier for a dictionary entry.
///
/// `EntryId` wraps the 64-bit FNV-1a hash of an entry key. Generated lookup
/// tables store ids instead of key strings:
/// - **Stability**: the same key always produces the same hash
/// - **Compactness**: 8 bytes, implements `Copy`, stack-allocated
/// - **Const construction**: `from_key()` is a `const fn`
///
/// # Example
///
/// ```
/// use lexicon::EntryId;
///
/// // Generated code declares ids at compile time
/// const SUBMIT: EntryId = EntryId::from_key("common.buttons.submit");
///
/// // Hashing the same key at runtime matches
/// assert_eq!(EntryId::from_key("common.buttons.submit"), SUBMIT);
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntryId(u64);

impl EntryId {
    /// Hash an entry key string into its id.
    ///
    /// A `const fn`, so generated tables can declare ids as constants.
    pub const fn from_key(key: &str) -> Self {
        Self(fnv1a_hash_str_64(key))
    }

    /// The raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<&EntryKey> for EntryId {
    fn from(key: &EntryKey) -> Self {
        EntryId::from_key(key.as_str())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntryId({:016x})", self.0)
    }
}
