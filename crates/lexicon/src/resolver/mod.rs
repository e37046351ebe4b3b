//! Entry resolution.
//!
//! Selects which language's rendering function answers each lookup: the
//! per-call explicit language when present, otherwise the caller-supplied
//! fallback policy's preferred order, otherwise its required terminal.

mod engine;
mod error;
mod fallback;
mod options;

pub use engine::{Resolver, TextResolver};
pub use error::{ResolveError, compute_suggestions};
pub use fallback::{FallbackOrder, FallbackPolicy};
pub use options::{EntryOptions, RenderContext};
