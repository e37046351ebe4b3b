use crate::dictionary::{Params, RenderError};
use crate::resolver::RenderContext;
use crate::types::{Language, LanguageMap, Rendered};

/// A stored rendering function for one language of one entry.
///
/// Generated code supplies one per translated language. The signature is
/// fixed, so an entry's shape is checked when the dictionary is built, not
/// discovered reflectively at call time.
pub type RenderFn<E> = Box<
    dyn Fn(&Params, &RenderContext<'_, E>) -> Result<Rendered<E>, RenderError> + Send + Sync,
>;

/// One dictionary entry: a rendering function per translated language.
///
/// # Example
///
/// ```
/// use lexicon::{Entry, NoElement, entry, text_renderer};
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
/// let entry: Entry<Lang, NoElement> = entry! {
///     Lang::En => text_renderer("Hello"),
///     Lang::Ko => text_renderer("안녕하세요"),
/// };
/// assert!(entry.has_language(Lang::Ko));
/// assert_eq!(entry.languages().len(), 2);
/// ```
pub struct Entry<L: Language, E> {
    renderers: LanguageMap<L, RenderFn<E>>,
}

impl<L: Language, E> Entry<L, E> {
    /// Create an entry with no translations.
    pub fn new() -> Self {
        Self {
            renderers: LanguageMap::new(),
        }
    }

    /// Add a rendering function for `language`, replacing any existing one.
    ///
    /// Takes closures and [`text_renderer`] values alike; boxing happens
    /// here.
    pub fn insert<F>(&mut self, language: L, render: F)
    where
        F: Fn(&Params, &RenderContext<'_, E>) -> Result<Rendered<E>, RenderError>
            + Send
            + Sync
            + 'static,
    {
        self.renderers.insert(language, Box::new(render));
    }

    /// The rendering function for `language`, if translated.
    pub fn renderer(&self, language: L) -> Option<&RenderFn<E>> {
        self.renderers.get(language)
    }

    /// Whether `language` has a translation.
    pub fn has_language(&self, language: L) -> bool {
        self.renderers.contains(language)
    }

    /// The translated languages, sorted by code.
    pub fn languages(&self) -> Vec<L> {
        self.renderers.languages()
    }
}

impl<L: Language, E> Default for Entry<L, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The constant-text rendering function generated code uses for entries
/// without arguments.
///
/// The text still participates in line-break substitution, so a literal
/// containing `'\n'` renders as keyed fragments when the call configures a
/// break element.
pub fn text_renderer<E: Clone>(
    text: impl Into<String>,
) -> impl Fn(&Params, &RenderContext<'_, E>) -> Result<Rendered<E>, RenderError> + Send + Sync {
    let text = text.into();
    move |_params, ctx| {
        let mut rendered = Rendered::new();
        rendered.push_split(&text, ctx.line_break());
        Ok(rendered)
    }
}
