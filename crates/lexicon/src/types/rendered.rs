use std::collections::HashMap;

use crate::types::{Fragment, FragmentKey, FragmentKind, NoElement};

/// A function that wraps formatted text in a presentation element.
pub type WrapFn<E> = Box<dyn Fn(String) -> E + Send + Sync>;

/// Named wrapping functions, looked up by rendering functions.
pub struct Wrappers<E> {
    wrappers: HashMap<String, WrapFn<E>>,
}

impl<E> Wrappers<E> {
    /// Create an empty wrapper set.
    pub fn new() -> Self {
        Self {
            wrappers: HashMap::new(),
        }
    }

    /// Register a wrapping function under `name`, replacing any existing one.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        wrap: impl Fn(String) -> E + Send + Sync + 'static,
    ) {
        self.wrappers.insert(name.into(), Box::new(wrap));
    }

    /// Look up a wrapping function by name.
    pub fn get(&self, name: &str) -> Option<&WrapFn<E>> {
        self.wrappers.get(name)
    }

    /// Number of registered wrappers.
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    /// Whether no wrappers are registered.
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }
}

impl<E> Default for Wrappers<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The output of a rendering function: a sequence of keyed fragments.
///
/// Fragments are either text runs or presentation elements of the caller's
/// type `E`. Each fragment gets a stable per-kind position key at push time.
///
/// # Example
///
/// ```
/// use lexicon::{NoElement, Rendered};
///
/// let mut rendered: Rendered<NoElement> = Rendered::new();
/// rendered.push_text("Hello, ");
/// rendered.push_text("world");
/// assert_eq!(rendered.to_string(), "Hello, world");
/// assert_eq!(rendered.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<E> {
    fragments: Vec<Fragment<E>>,
    text_count: usize,
    element_count: usize,
}

impl<E> Rendered<E> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
            text_count: 0,
            element_count: 0,
        }
    }

    /// Append a text fragment.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let key = FragmentKey::new(FragmentKind::Text, self.text_count);
        self.text_count += 1;
        self.fragments.push(Fragment::Text {
            key,
            text: text.into(),
        });
    }

    /// Append an element fragment.
    pub fn push_element(&mut self, element: E) {
        let key = FragmentKey::new(FragmentKind::Element, self.element_count);
        self.element_count += 1;
        self.fragments.push(Fragment::Element { key, element });
    }

    /// Append `text`, substituting each `'\n'` with a clone of `line_break`.
    ///
    /// Without a line-break element the text is appended as a single
    /// fragment, newlines intact. Empty text appends nothing.
    pub fn push_split(&mut self, text: &str, line_break: Option<&E>)
    where
        E: Clone,
    {
        if text.is_empty() {
            return;
        }
        match line_break {
            Some(element) => {
                let mut first = true;
                for segment in text.split('\n') {
                    if !first {
                        self.push_element(element.clone());
                    }
                    self.push_text(segment);
                    first = false;
                }
            }
            None => self.push_text(text),
        }
    }

    /// Append already-formatted text, wrapped in an element when a wrapping
    /// function is provided.
    pub fn push_value(&mut self, text: String, wrapper: Option<&WrapFn<E>>) {
        match wrapper {
            Some(wrap) => self.push_element(wrap(text)),
            None => self.push_text(text),
        }
    }

    /// The fragments in render order.
    pub fn fragments(&self) -> &[Fragment<E>] {
        &self.fragments
    }

    /// Consume the sequence, yielding its fragments.
    pub fn into_fragments(self) -> Vec<Fragment<E>> {
        self.fragments
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the sequence holds no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl<E> Default for Rendered<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl Rendered<NoElement> {
    /// Join the sequence into its text.
    ///
    /// Only the plain-text edition can do this losslessly, so it is only
    /// offered for `NoElement`.
    pub fn into_string(self) -> String {
        let mut out = String::new();
        for fragment in self.fragments {
            match fragment {
                Fragment::Text { text, .. } => out.push_str(&text),
                Fragment::Element { element, .. } => match element {},
            }
        }
        out
    }
}

impl std::fmt::Display for Rendered<NoElement> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text { text, .. } => f.write_str(text)?,
                Fragment::Element { element, .. } => match *element {},
            }
        }
        Ok(())
    }
}

/// Split `text` on newlines into a keyed fragment sequence.
///
/// Each `'\n'` becomes a clone of `line_break` between the surrounding text
/// segments, so `"a\nb\nc"` yields five fragments and a break never trails
/// the final segment. With no element the text passes through as a single
/// fragment, and empty text yields an empty sequence.
///
/// # Example
///
/// ```
/// use lexicon::split_line_breaks;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Br;
///
/// let rendered = split_line_breaks("a\nb\nc", Some(&Br));
/// assert_eq!(rendered.len(), 5);
/// assert_eq!(rendered.fragments()[0].as_text(), Some("a"));
/// assert_eq!(rendered.fragments()[1].as_element(), Some(&Br));
///
/// // No element configured: identity
/// let plain = split_line_breaks::<Br>("a\nb", None);
/// assert_eq!(plain.len(), 1);
/// assert_eq!(plain.fragments()[0].as_text(), Some("a\nb"));
/// ```
pub fn split_line_breaks<E: Clone>(text: &str, line_break: Option<&E>) -> Rendered<E> {
    let mut rendered = Rendered::new();
    rendered.push_split(text, line_break);
    rendered
}
