//! Entry resolution.
//!
//! The Resolver struct provides the user-facing API for rendering entries:
//! it owns a loaded dictionary and a caller-supplied fallback policy, and
//! selects which language's rendering function answers each lookup.

use bon::Builder;

use crate::dictionary::{Dictionary, Params};
use crate::resolver::error::{ResolveError, compute_suggestions};
use crate::resolver::fallback::{FallbackOrder, FallbackPolicy};
use crate::resolver::options::{EntryOptions, RenderContext};
use crate::types::{EntryId, Language, NoElement, Rendered};

/// Resolves lookup keys against a dictionary.
///
/// Language selection runs in a fixed sequence: the per-call explicit
/// language when the entry carries it, otherwise the first present
/// candidate in the policy's preferred order, otherwise the policy's
/// required terminal. The fallback policy is application configuration;
/// the resolver never computes chains itself.
///
/// Resolution never mutates the resolver, so a `Resolver` shared between
/// threads (it is `Send + Sync` whenever its element type is) serves
/// concurrent `resolve` calls without locking.
///
/// # Example
///
/// ```
/// use lexicon::{
///     Dictionary, EntryOptions, FallbackOrder, Resolver, TextDictionary, entry, params,
///     text_renderer,
/// };
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
///         entry! {
///             Lang::En => text_renderer("Hello"),
///             Lang::Ko => text_renderer("안녕하세요"),
///         },
///     )
///     .unwrap();
///
/// let resolver = Resolver::new(dictionary, |wanted| match wanted {
///     Some(Lang::Ko) => FallbackOrder::new(vec![Lang::Ko], Lang::En),
///     _ => FallbackOrder::required_only(Lang::En),
/// });
///
/// let options = EntryOptions::builder().language(Lang::Ko).build();
/// let text = resolver.resolve_text("greeting", &params! {}, &options).unwrap();
/// assert_eq!(text, "안녕하세요");
/// ```
#[derive(Builder)]
pub struct Resolver<L: Language, E> {
    /// The dictionary lookups resolve against.
    dictionary: Dictionary<L, E>,

    /// Computes the fallback order for each lookup, receiving the per-call
    /// explicit language when one was given.
    fallback: FallbackPolicy<L>,

    /// Default line-break element for calls that do not supply their own.
    line_break: Option<E>,
}

/// The plain-text edition: resolution can only produce text.
pub type TextResolver<L> = Resolver<L, NoElement>;

impl<L: Language, E> Resolver<L, E> {
    /// Create a resolver with no default line-break element.
    pub fn new<F>(dictionary: Dictionary<L, E>, fallback: F) -> Self
    where
        F: Fn(Option<L>) -> FallbackOrder<L> + Send + Sync + 'static,
    {
        Resolver::builder()
            .dictionary(dictionary)
            .fallback(Box::new(fallback))
            .build()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The dictionary lookups resolve against.
    pub fn dictionary(&self) -> &Dictionary<L, E> {
        &self.dictionary
    }

    /// The configured default line-break element, if any.
    pub fn line_break(&self) -> Option<&E> {
        self.line_break.as_ref()
    }

    /// Set or clear the default line-break element.
    ///
    /// The default applies to every subsequent `resolve` call whose options
    /// do not carry their own element.
    pub fn set_line_break(&mut self, line_break: Option<E>) {
        self.line_break = line_break;
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `key` and render it with `params`.
    ///
    /// Selection order:
    /// 1. `options.language`, when set and translated for this entry —
    ///    the fallback policy is never consulted on this path.
    /// 2. The first language of the policy's preferred order translated
    ///    for this entry.
    /// 3. The policy's required terminal, assumed translated everywhere.
    ///    A dictionary rejects entries lacking its own required language at
    ///    load time, so a miss here means the policy named a terminal the
    ///    dictionary was not validated against; that fails with
    ///    [`ResolveError::MissingRequiredLanguage`] rather than rendering
    ///    nothing.
    pub fn resolve(
        &self,
        key: &str,
        params: &Params,
        options: &EntryOptions<L, E>,
    ) -> Result<Rendered<E>, ResolveError> {
        let Some(entry) = self.dictionary.entry(key) else {
            let known: Vec<String> = self
                .dictionary
                .keys()
                .into_iter()
                .map(ToString::to_string)
                .collect();
            return Err(ResolveError::UnknownKey {
                key: key.to_string(),
                suggestions: compute_suggestions(key, &known),
            });
        };

        // Per-call options win over the resolver's defaults; the merge
        // borrows both sides and leaves the caller's options untouched.
        let ctx = RenderContext::new(
            options.line_break().or(self.line_break.as_ref()),
            options.wrappers(),
        );

        if let Some(language) = options.language() {
            if let Some(render) = entry.renderer(language) {
                return Ok(render(params, &ctx)?);
            }
        }

        let order = (self.fallback)(options.language());
        for &language in order.preferred() {
            if let Some(render) = entry.renderer(language) {
                return Ok(render(params, &ctx)?);
            }
        }

        let required = order.required();
        match entry.renderer(required) {
            Some(render) => Ok(render(params, &ctx)?),
            None => Err(ResolveError::MissingRequiredLanguage {
                key: key.to_string(),
                language: required.code().to_string(),
            }),
        }
    }

    /// Resolve an entry by id.
    ///
    /// Looks up the key registered for `id`, then resolves it like
    /// [`resolve`](Self::resolve).
    pub fn resolve_by_id(
        &self,
        id: EntryId,
        params: &Params,
        options: &EntryOptions<L, E>,
    ) -> Result<Rendered<E>, ResolveError> {
        let key = self
            .dictionary
            .key_for_id(id)
            .ok_or(ResolveError::UnknownId { id })?;
        self.resolve(key.as_str(), params, options)
    }
}

impl<L: Language> Resolver<L, NoElement> {
    /// Resolve `key` and join the rendered fragments into a string.
    pub fn resolve_text(
        &self,
        key: &str,
        params: &Params,
        options: &EntryOptions<L, NoElement>,
    ) -> Result<String, ResolveError> {
        self.resolve(key, params, options).map(Rendered::into_string)
    }
}
