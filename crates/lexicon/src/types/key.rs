use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An entry key failed validation.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key string was empty.
    #[error("entry key is empty")]
    Empty,

    /// A dot-separated part is not lower snake_case starting with a letter.
    #[error("invalid part '{part}' in entry key '{key}'")]
    InvalidPart { key: String, part: String },
}

/// A validated, dot-separated entry key like `common.buttons.submit`.
///
/// Each dot-separated part must be lower snake_case and start with a letter
/// (`[a-z][0-9a-z_]*`). Keys are validated once at construction; a held
/// `EntryKey` is always well-formed.
///
/// # Example
///
/// ```
/// use lexicon::EntryKey;
///
/// let key = EntryKey::new("common.buttons.submit").unwrap();
/// assert_eq!(key.last_part(), "submit");
/// assert_eq!(key.parts().count(), 3);
///
/// assert!(EntryKey::new("Common.Buttons").is_err());
/// assert!(EntryKey::new("a..b").is_err());
/// assert!(EntryKey::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryKey(String);

impl EntryKey {
    /// Validate and wrap a key string.
    pub fn new(key: impl Into<String>) -> Result<Self, KeyError> {
        let key = key.into();
        validate(&key)?;
        Ok(Self(key))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the dot-separated parts in order.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The final part (`submit` for `common.buttons.submit`).
    pub fn last_part(&self) -> &str {
        match self.0.rsplit_once('.') {
            Some((_, last)) => last,
            None => &self.0,
        }
    }

    /// Append one validated part, producing a child key.
    pub fn child(&self, part: &str) -> Result<EntryKey, KeyError> {
        EntryKey::new(format!("{}.{part}", self.0))
    }
}

fn validate(key: &str) -> Result<(), KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }
    for part in key.split('.') {
        if !is_valid_part(part) {
            return Err(KeyError::InvalidPart {
                key: key.to_string(),
                part: part.to_string(),
            });
        }
    }
    Ok(())
}

fn is_valid_part(part: &str) -> bool {
    let mut chars = part.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

impl TryFrom<String> for EntryKey {
    type Error = KeyError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        EntryKey::new(key)
    }
}

impl TryFrom<&str> for EntryKey {
    type Error = KeyError;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        EntryKey::new(key)
    }
}

impl std::str::FromStr for EntryKey {
    type Err = KeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        EntryKey::new(key)
    }
}

impl From<EntryKey> for String {
    fn from(key: EntryKey) -> Self {
        key.0
    }
}

impl AsRef<str> for EntryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_snake_case_paths() {
        assert!(EntryKey::new("greeting").is_ok());
        assert!(EntryKey::new("common.buttons.submit").is_ok());
        assert!(EntryKey::new("a1.b_2.c__3").is_ok());
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!(EntryKey::new(""), Err(KeyError::Empty)));
        assert!(EntryKey::new("Common").is_err());
        assert!(EntryKey::new("1abc").is_err());
        assert!(EntryKey::new("_abc").is_err());
        assert!(EntryKey::new("a..b").is_err());
        assert!(EntryKey::new("a.").is_err());
        assert!(EntryKey::new(".a").is_err());
        assert!(EntryKey::new("with space").is_err());
        assert!(EntryKey::new("café").is_err());
    }

    #[test]
    fn reports_offending_part() {
        match EntryKey::new("good.BAD.fine") {
            Err(KeyError::InvalidPart { key, part }) => {
                assert_eq!(key, "good.BAD.fine");
                assert_eq!(part, "BAD");
            }
            other => panic!("expected InvalidPart, got {other:?}"),
        }
    }

    #[test]
    fn path_helpers() {
        let key = EntryKey::new("common.buttons.submit").unwrap();
        assert_eq!(key.last_part(), "submit");
        assert_eq!(key.parts().collect::<Vec<_>>(), ["common", "buttons", "submit"]);

        let single = EntryKey::new("greeting").unwrap();
        assert_eq!(single.last_part(), "greeting");

        let child = single.child("formal").unwrap();
        assert_eq!(child.as_str(), "greeting.formal");
        assert!(single.child("Formal").is_err());
    }
}
