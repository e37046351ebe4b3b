//! Dictionary storage.
//!
//! A dictionary maps validated entry keys to per-language rendering
//! functions. All structural validation (language set, required-language
//! coverage, key and id uniqueness) happens while the dictionary is built,
//! so resolution never re-checks it.

mod entry;
mod error;
mod params;
mod store;

pub use entry::{Entry, RenderFn, text_renderer};
pub use error::{DictionaryError, RenderError};
pub use params::Params;
pub use store::{Dictionary, TextDictionary};
