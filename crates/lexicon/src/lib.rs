pub mod dictionary;
pub mod format;
pub mod resolver;
pub mod types;

pub use dictionary::{
    Dictionary, DictionaryError, Entry, Params, RenderError, RenderFn, TextDictionary,
    text_renderer,
};
pub use format::{FormatError, NumberFormat};
pub use resolver::{
    EntryOptions, FallbackOrder, FallbackPolicy, RenderContext, ResolveError, Resolver,
    TextResolver, compute_suggestions,
};
pub use types::{
    EntryId, EntryKey, Fragment, FragmentKey, FragmentKind, KeyError, Language, LanguageMap,
    NoElement, Rendered, Value, WrapFn, Wrappers, split_line_breaks,
};

/// Creates a [`Params`] map from name-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or booleans directly.
///
/// # Example
///
/// ```
/// use lexicon::params;
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.int("count").unwrap(), 3);
/// assert_eq!(p.text("name").unwrap(), "Alice");
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Params::new()
    };
    { $($name:expr => $value:expr),+ $(,)? } => {
        {
            let mut params = $crate::Params::new();
            $(
                params.insert($name, $value);
            )+
            params
        }
    };
}

/// Creates an [`Entry`] from `language => rendering function` arms.
///
/// Arms accept closures with the [`RenderFn`] signature as well as
/// [`text_renderer`] values.
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
/// assert_eq!(entry.languages().len(), 2);
/// ```
#[macro_export]
macro_rules! entry {
    { $($language:expr => $render:expr),+ $(,)? } => {
        {
            let mut entry = $crate::Entry::new();
            $(
                entry.insert($language, $render);
            )+
            entry
        }
    };
}
