mod entry_id;
mod fragment;
mod key;
mod language;
mod language_map;
mod rendered;
mod value;

pub use entry_id::EntryId;
pub use fragment::{Fragment, FragmentKey, FragmentKind, NoElement};
pub use key::{EntryKey, KeyError};
pub use language::Language;
pub use language_map::LanguageMap;
pub use rendered::{Rendered, WrapFn, Wrappers, split_line_breaks};
pub use value::Value;
