/// Element type for the plain-text edition.
///
/// `NoElement` has no values, so a `Fragment<NoElement>` can only be text
/// and rendered output joins losslessly into a `String`. Presentation
/// editions substitute their own node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoElement {}

/// The kind of a rendered fragment, used for key assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// A run of plain text.
    Text,

    /// A presentation element (line break, wrapped value).
    Element,
}

/// A stable position key for a fragment.
///
/// Keys are assigned per kind in push order (`text-0`, `text-1`, ... and
/// `element-0`, `element-1`, ...), so a renderer that diffs sequential
/// outputs can track fragments across re-renders.
///
/// # Example
///
/// ```
/// use lexicon::split_line_breaks;
///
/// let rendered = split_line_breaks::<&str>("a\nb", Some(&"<br/>"));
/// let keys: Vec<String> = rendered
///     .fragments()
///     .iter()
///     .map(|fragment| fragment.key().to_string())
///     .collect();
/// assert_eq!(keys, ["text-0", "element-0", "text-1"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentKey {
    kind: FragmentKind,
    index: usize,
}

impl FragmentKey {
    pub(crate) fn new(kind: FragmentKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Which kind of fragment this key belongs to.
    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// Position among fragments of the same kind.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for FragmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FragmentKind::Text => write!(f, "text-{}", self.index),
            FragmentKind::Element => write!(f, "element-{}", self.index),
        }
    }
}

/// One piece of rendered output: either plain text or a presentation
/// element of the caller's type `E`.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<E> {
    /// A run of plain text.
    Text {
        /// Stable position key.
        key: FragmentKey,
        /// The text content.
        text: String,
    },

    /// A presentation element.
    Element {
        /// Stable position key.
        key: FragmentKey,
        /// The element value.
        element: E,
    },
}

impl<E> Fragment<E> {
    /// This fragment's position key.
    pub fn key(&self) -> FragmentKey {
        match self {
            Fragment::Text { key, .. } => *key,
            Fragment::Element { key, .. } => *key,
        }
    }

    /// The text content, if this is a text fragment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Fragment::Text { text, .. } => Some(text),
            Fragment::Element { .. } => None,
        }
    }

    /// The element, if this is an element fragment.
    pub fn as_element(&self) -> Option<&E> {
        match self {
            Fragment::Element { element, .. } => Some(element),
            Fragment::Text { .. } => None,
        }
    }
}
