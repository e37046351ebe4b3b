//! Error types for entry resolution.

use strsim::levenshtein;
use thiserror::Error;

use crate::dictionary::RenderError;
use crate::types::EntryId;

/// An error raised while resolving an entry.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Key not present in the dictionary.
    #[error("unknown entry key '{key}'{}", did_you_mean(.suggestions))]
    UnknownKey {
        key: String,
        suggestions: Vec<String>,
    },

    /// Id not present in the dictionary.
    #[error("unknown entry id {id}")]
    UnknownId { id: EntryId },

    /// The fallback policy's terminal language has no translation for this
    /// entry. Load-time validation guarantees the dictionary's own required
    /// language, so this means the policy and the dictionary disagree.
    #[error("entry '{key}' has no translation for required language '{language}'")]
    MissingRequiredLanguage { key: String, language: String },

    /// The selected rendering function failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

fn did_you_mean(suggestions: &[String]) -> String {
    match suggestions.first() {
        Some(first) => format!(", did you mean '{first}'?"),
        None => String::new(),
    }
}

/// Compute typo suggestions for an unknown name.
///
/// Returns up to three candidates within Levenshtein distance 1 for names
/// of three characters or fewer, distance 2 otherwise, closest first.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
