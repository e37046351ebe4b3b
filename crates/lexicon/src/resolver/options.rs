use bon::Builder;

use crate::types::{Language, WrapFn, Wrappers};

/// Per-call options for [`resolve`](crate::Resolver::resolve).
///
/// Everything here is optional: an explicit language that bypasses fallback
/// when the entry carries it, a line-break element that takes precedence
/// over the resolver's configured default, and named wrapping functions
/// applied to formatted argument values.
///
/// # Example
///
/// ```
/// use lexicon::EntryOptions;
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
/// let options: EntryOptions<Lang, &str> = EntryOptions::builder()
///     .language(Lang::Ko)
///     .line_break("<br/>")
///     .build();
/// assert_eq!(options.language(), Some(Lang::Ko));
/// assert_eq!(options.line_break(), Some(&"<br/>"));
///
/// // No options at all
/// let none: EntryOptions<Lang, &str> = EntryOptions::new();
/// assert_eq!(none.language(), None);
/// ```
#[derive(Builder)]
pub struct EntryOptions<L: Language, E> {
    /// Render this language when the entry carries it, skipping fallback.
    language: Option<L>,

    /// Element substituted for `'\n'` in rendered text. Takes precedence
    /// over the resolver's configured default.
    line_break: Option<E>,

    /// Named wrapping functions for argument values.
    wrappers: Option<Wrappers<E>>,
}

impl<L: Language, E> EntryOptions<L, E> {
    /// Options with nothing set.
    pub fn new() -> Self {
        EntryOptions::builder().build()
    }

    /// The explicit language override, if any.
    pub fn language(&self) -> Option<L> {
        self.language
    }

    /// The per-call line-break element, if any.
    pub fn line_break(&self) -> Option<&E> {
        self.line_break.as_ref()
    }

    /// The wrapping functions supplied for this call, if any.
    pub fn wrappers(&self) -> Option<&Wrappers<E>> {
        self.wrappers.as_ref()
    }
}

impl<L: Language, E> Default for EntryOptions<L, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The merged option view a rendering function receives.
///
/// Built by the resolver from the per-call [`EntryOptions`] and its own
/// configured defaults, with the per-call value winning where both exist.
/// The merge only borrows; caller-supplied options are never mutated or
/// cloned.
pub struct RenderContext<'a, E> {
    line_break: Option<&'a E>,
    wrappers: Option<&'a Wrappers<E>>,
}

impl<'a, E> RenderContext<'a, E> {
    /// Build a context from already-merged parts.
    pub fn new(line_break: Option<&'a E>, wrappers: Option<&'a Wrappers<E>>) -> Self {
        Self {
            line_break,
            wrappers,
        }
    }

    /// A context with nothing configured.
    pub fn empty() -> Self {
        Self {
            line_break: None,
            wrappers: None,
        }
    }

    /// The element to substitute for `'\n'`, if one is in effect.
    pub fn line_break(&self) -> Option<&'a E> {
        self.line_break
    }

    /// The wrapping functions in effect, if any.
    pub fn wrappers(&self) -> Option<&'a Wrappers<E>> {
        self.wrappers
    }

    /// The wrapping function registered under `name`, if any.
    pub fn wrapper(&self, name: &str) -> Option<&'a WrapFn<E>> {
        self.wrappers.and_then(|wrappers| wrappers.get(name))
    }
}
