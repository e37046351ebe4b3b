use std::collections::HashMap;

use crate::types::Language;

/// A map keyed by language.
///
/// Membership is an explicit query (`contains`), never a structural property
/// of the stored data, and iteration order is deterministic: `languages()`
/// yields codes in sorted order regardless of insertion order.
///
/// # Example
///
/// ```
/// use lexicon::{Language, LanguageMap};
///
/// #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// enum Lang {
///     En,
///     Ko,
/// }
///
/// impl Language for Lang {
///     fn code(&self) -> &'static str {
///         match self {
///             Lang::En => "en",
///             Lang::Ko => "ko",
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Lang::En, Lang::Ko]
///     }
/// }
///
/// let mut map = LanguageMap::new();
/// map.insert(Lang::Ko, "안녕하세요");
/// assert!(map.contains(Lang::Ko));
/// assert!(!map.contains(Lang::En));
/// assert_eq!(map.get(Lang::Ko), Some(&"안녕하세요"));
/// ```
#[derive(Debug, Clone)]
pub struct LanguageMap<L, T> {
    entries: HashMap<L, T>,
}

impl<L: Language, T> LanguageMap<L, T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a value for `language`, returning the previous value if any.
    pub fn insert(&mut self, language: L, value: T) -> Option<T> {
        self.entries.insert(language, value)
    }

    /// Get the value for `language`, if present.
    pub fn get(&self, language: L) -> Option<&T> {
        self.entries.get(&language)
    }

    /// Check whether `language` has a value.
    pub fn contains(&self, language: L) -> bool {
        self.entries.contains_key(&language)
    }

    /// Number of languages with a value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The languages that have a value, sorted by code.
    pub fn languages(&self) -> Vec<L> {
        let mut languages: Vec<L> = self.entries.keys().copied().collect();
        languages.sort_by_key(L::code);
        languages
    }
}

impl<L: Language, T> Default for LanguageMap<L, T> {
    fn default() -> Self {
        Self::new()
    }
}
