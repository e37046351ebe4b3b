//! Error types for dictionary loading and rendering.

use thiserror::Error;

use crate::format::FormatError;

/// An error raised while building a dictionary.
///
/// Loading is the validation boundary: anything rejected here can never
/// surface during resolution.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The language set declared by the `Language` impl has no members.
    #[error("language set is empty")]
    EmptyLanguageSet,

    /// A language code is not a valid BCP 47 identifier.
    #[error("invalid language code '{code}'")]
    InvalidLanguageCode { code: String },

    /// Two languages in the set share a code.
    #[error("duplicate language code '{code}'")]
    DuplicateLanguageCode { code: String },

    /// The required language is not a member of the language set.
    #[error("required language '{code}' is not in the language set")]
    RequiredLanguageNotInSet { code: String },

    /// An entry carries no translation for the required language.
    #[error("entry '{key}' has no translation for required language '{language}'")]
    MissingRequiredLanguage { key: String, language: String },

    /// The same key was inserted twice.
    #[error("duplicate entry key '{key}'")]
    DuplicateKey { key: String },

    /// Two distinct keys hash to the same id.
    #[error("id collision: '{key}' and '{existing}' produce the same hash")]
    IdCollision { key: String, existing: String },
}

/// An error raised inside a rendering function.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A named argument the renderer needs was not supplied.
    #[error("missing argument '{name}'")]
    MissingArgument { name: String },

    /// A named argument has the wrong type.
    #[error("argument '{name}' is {got}, expected {expected}")]
    ArgumentType {
        name: String,
        expected: &'static str,
        got: &'static str,
    },

    /// Numeric formatting failed.
    #[error(transparent)]
    Format(#[from] FormatError),
}
