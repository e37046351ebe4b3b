use crate::types::Language;

/// The resolution order for one lookup: preferred languages to try in
/// sequence, then the required language as the terminal.
///
/// The terminal is part of the type, so an order that could run out of
/// candidates cannot be constructed.
///
/// # Example
///
/// ```
/// use lexicon::FallbackOrder;
/// # #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// # enum Lang { En, Ko, Ja }
/// # impl lexicon::Language for Lang {
/// #     fn code(&self) -> &'static str {
/// #         match self {
/// #             Lang::En => "en",
/// #             Lang::Ko => "ko",
/// #             Lang::Ja => "ja",
/// #         }
/// #     }
/// #     fn all() -> &'static [Self] {
/// #         &[Lang::En, Lang::Ko, Lang::Ja]
/// #     }
/// # }
///
/// let order = FallbackOrder::new(vec![Lang::Ko, Lang::Ja], Lang::En);
/// assert_eq!(order.preferred(), [Lang::Ko, Lang::Ja]);
/// assert_eq!(order.required(), Lang::En);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackOrder<L> {
    preferred: Vec<L>,
    required: L,
}

impl<L: Language> FallbackOrder<L> {
    /// Build an order that tries `preferred` in sequence before the
    /// required terminal.
    pub fn new(preferred: Vec<L>, required: L) -> Self {
        Self {
            preferred,
            required,
        }
    }

    /// An order that goes straight to the required language.
    pub fn required_only(required: L) -> Self {
        Self {
            preferred: Vec::new(),
            required,
        }
    }

    /// Languages tried before the terminal, in order.
    pub fn preferred(&self) -> &[L] {
        &self.preferred
    }

    /// The terminal language.
    pub fn required(&self) -> L {
        self.required
    }
}

/// Computes the resolution order for one lookup.
///
/// Receives the per-call language override when one was given. Dictionaries
/// never compute fallback chains themselves; the policy comes from the
/// application.
pub type FallbackPolicy<L> = Box<dyn Fn(Option<L>) -> FallbackOrder<L> + Send + Sync>;
