use std::collections::{HashMap, HashSet};

use icu_locale_core::LanguageIdentifier;

use crate::dictionary::{DictionaryError, Entry};
use crate::types::{EntryId, EntryKey, Language, NoElement};

/// A loaded dictionary: every generated entry, indexed by key and by id.
///
/// Validation happens while the dictionary is built, never during
/// resolution. [`Dictionary::new`] checks the language set once;
/// [`Dictionary::insert`] checks each entry once. A held `Dictionary`
/// therefore guarantees that every entry renders in the required language.
///
/// # Example
///
/// ```
/// use lexicon::{Dictionary, TextDictionary, entry, text_renderer};
/// # #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// # enum Lang { En, Ko }
/// # impl lexicon::Language for Lang {
/// #     fn code(&self) -> &'static str {
/// #         match self {
/// #             Lang::En => "en",
/// #             Lang::Ko => "ko",
/// #         }
/// #     }
/// #     fn all() -> &'static [Self] {
/// #         &[Lang::En, Lang::Ko]
/// #     }
/// # }
///
/// let mut dictionary: TextDictionary<Lang> = Dictionary::new(Lang::En).unwrap();
/// dictionary
///     .insert(
///         "greeting".parse().unwrap(),
///         entry! { Lang::En => text_renderer("Hello") },
///     )
///     .unwrap();
///
/// assert_eq!(dictionary.len(), 1);
/// assert!(dictionary.entry("greeting").is_some());
///
/// // An entry without the required language is rejected at load time
/// let err = dictionary.insert(
///     "farewell".parse().unwrap(),
///     entry! { Lang::Ko => text_renderer("안녕히 가세요") },
/// );
/// assert!(err.is_err());
/// ```
pub struct Dictionary<L: Language, E> {
    entries: HashMap<EntryKey, Entry<L, E>>,
    id_to_key: HashMap<EntryId, EntryKey>,
    required: L,
    version: Option<String>,
}

/// The plain-text edition: entries can only render text.
pub type TextDictionary<L> = Dictionary<L, NoElement>;

impl<L: Language, E> Dictionary<L, E> {
    /// Create an empty dictionary whose entries must all carry `required`.
    ///
    /// Validates the language set declared by `L`: non-empty, codes unique
    /// and parseable as BCP 47 language identifiers, and `required` a
    /// member.
    pub fn new(required: L) -> Result<Self, DictionaryError> {
        let all = L::all();
        if all.is_empty() {
            return Err(DictionaryError::EmptyLanguageSet);
        }
        let mut codes = HashSet::new();
        for language in all {
            let code = language.code();
            if code.is_empty() || LanguageIdentifier::try_from_str(code).is_err() {
                return Err(DictionaryError::InvalidLanguageCode {
                    code: code.to_string(),
                });
            }
            if !codes.insert(code) {
                return Err(DictionaryError::DuplicateLanguageCode {
                    code: code.to_string(),
                });
            }
        }
        if !all.contains(&required) {
            return Err(DictionaryError::RequiredLanguageNotInSet {
                code: required.code().to_string(),
            });
        }
        Ok(Self {
            entries: HashMap::new(),
            id_to_key: HashMap::new(),
            required,
            version: None,
        })
    }

    /// Insert an entry under `key`.
    ///
    /// Rejects entries that lack the required language, keys inserted
    /// twice, and distinct keys whose ids collide.
    pub fn insert(&mut self, key: EntryKey, entry: Entry<L, E>) -> Result<(), DictionaryError> {
        if !entry.has_language(self.required) {
            return Err(DictionaryError::MissingRequiredLanguage {
                key: key.to_string(),
                language: self.required.code().to_string(),
            });
        }
        if self.entries.contains_key(&key) {
            return Err(DictionaryError::DuplicateKey {
                key: key.to_string(),
            });
        }
        let id = EntryId::from(&key);
        if let Some(existing) = self.id_to_key.get(&id) {
            if existing != &key {
                // Should be vanishingly rare with a 64-bit hash.
                return Err(DictionaryError::IdCollision {
                    key: key.to_string(),
                    existing: existing.to_string(),
                });
            }
        }
        self.id_to_key.insert(id, key.clone());
        self.entries.insert(key, entry);
        Ok(())
    }

    /// Look up an entry by dot-separated key string.
    pub fn entry(&self, key: &str) -> Option<&Entry<L, E>> {
        self.entries.get(key)
    }

    /// Look up an entry by id.
    pub fn entry_by_id(&self, id: EntryId) -> Option<&Entry<L, E>> {
        self.id_to_key.get(&id).and_then(|key| self.entries.get(key))
    }

    /// The key behind an id, if registered.
    pub fn key_for_id(&self, id: EntryId) -> Option<&EntryKey> {
        self.id_to_key.get(&id)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&EntryKey> {
        let mut keys: Vec<&EntryKey> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The language every entry is guaranteed to carry.
    pub fn required(&self) -> L {
        self.required
    }

    /// Generator version recorded in the dictionary, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Record the generator version string.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    /// Keys with no translation in `language`, sorted.
    ///
    /// Sparse coverage outside the required language is an expected state,
    /// so this is a query for tooling, not a validation failure.
    pub fn missing_entries(&self, language: L) -> Vec<&EntryKey> {
        let mut missing: Vec<&EntryKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.has_language(language))
            .map(|(key, _)| key)
            .collect();
        missing.sort();
        missing
    }
}
