//! Integration tests for line-break splitting and fragment keys.

use lexicon::{FragmentKind, NoElement, Rendered, split_line_breaks};

#[derive(Clone, Debug, PartialEq)]
struct Br;

#[test]
fn splits_into_alternating_sequence() {
    let rendered = split_line_breaks("a\nb\nc", Some(&Br));
    assert_eq!(rendered.len(), 5);

    let fragments = rendered.fragments();
    assert_eq!(fragments[0].as_text(), Some("a"));
    assert_eq!(fragments[1].as_element(), Some(&Br));
    assert_eq!(fragments[2].as_text(), Some("b"));
    assert_eq!(fragments[3].as_element(), Some(&Br));
    assert_eq!(fragments[4].as_text(), Some("c"));
}

#[test]
fn never_emits_a_trailing_break() {
    let rendered = split_line_breaks("a\nb", Some(&Br));
    let last = rendered.fragments().last().unwrap();
    assert_eq!(last.as_text(), Some("b"));
}

#[test]
fn empty_text_yields_empty_sequence() {
    let rendered = split_line_breaks("", Some(&Br));
    assert!(rendered.is_empty());
}

#[test]
fn no_element_is_identity() {
    let rendered = split_line_breaks::<Br>("a\nb", None);
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered.fragments()[0].as_text(), Some("a\nb"));
}

#[test]
fn edge_newlines_produce_empty_segments() {
    // "a\n".split('\n') has a trailing empty segment, mirrored here
    let rendered = split_line_breaks("a\n", Some(&Br));
    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered.fragments()[2].as_text(), Some(""));

    let rendered = split_line_breaks("\na", Some(&Br));
    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered.fragments()[0].as_text(), Some(""));
}

// =========================================================================
// Fragment keys
// =========================================================================

#[test]
fn keys_count_per_kind_in_push_order() {
    let rendered = split_line_breaks("a\nb\nc", Some(&Br));
    let keys: Vec<String> = rendered
        .fragments()
        .iter()
        .map(|fragment| fragment.key().to_string())
        .collect();
    assert_eq!(keys, ["text-0", "element-0", "text-1", "element-1", "text-2"]);
}

#[test]
fn keys_are_distinct_per_position() {
    let rendered = split_line_breaks("a\nb\nc\nd", Some(&Br));
    let mut keys: Vec<String> = rendered
        .fragments()
        .iter()
        .map(|fragment| fragment.key().to_string())
        .collect();
    let count = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), count);
}

#[test]
fn key_carries_kind_and_index() {
    let rendered = split_line_breaks("a\nb", Some(&Br));
    let key = rendered.fragments()[1].key();
    assert_eq!(key.kind(), FragmentKind::Element);
    assert_eq!(key.index(), 0);
}

// =========================================================================
// Rendered sequence building
// =========================================================================

#[test]
fn push_split_appends_to_existing_fragments() {
    let mut rendered: Rendered<Br> = Rendered::new();
    rendered.push_text("prefix: ");
    rendered.push_split("a\nb", Some(&Br));
    assert_eq!(rendered.len(), 4);
    assert_eq!(rendered.fragments()[0].key().to_string(), "text-0");
    assert_eq!(rendered.fragments()[1].as_text(), Some("a"));
}

#[test]
fn text_edition_joins_losslessly() {
    let mut rendered: Rendered<NoElement> = Rendered::new();
    rendered.push_split("a\nb", None);
    rendered.push_text("!");
    assert_eq!(rendered.to_string(), "a\nb!");
    assert_eq!(rendered.into_string(), "a\nb!");
}
