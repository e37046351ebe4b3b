use std::fmt::Debug;
use std::hash::Hash;

/// The closed set of languages a generated dictionary supports.
///
/// Generated code implements this on a fieldless enum with one variant per
/// supported language. The runtime never deals in open-ended language
/// strings: every language that can appear at runtime is a member of this
/// set, declared by the generator.
///
/// # Example
///
/// ```
/// use lexicon::Language;
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
/// assert_eq!(Lang::from_code("ko"), Some(Lang::Ko));
/// assert_eq!(Lang::from_code("fr"), None);
/// ```
pub trait Language: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The BCP 47 code for this language (e.g. `"en"`, `"ko-KR"`).
    fn code(&self) -> &'static str;

    /// Every language in the set, in generator declaration order.
    fn all() -> &'static [Self];

    /// Look up a language by its code.
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|language| language.code() == code)
    }
}
