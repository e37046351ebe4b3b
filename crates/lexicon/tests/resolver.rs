//! Integration tests for entry resolution and fallback.

use std::sync::Arc;
use std::thread;

use lexicon::{
    Dictionary, EntryId, EntryOptions, FallbackOrder, Language, NoElement, Params, RenderContext,
    Rendered, ResolveError, Resolver, TextDictionary, TextResolver, entry, format, params,
    text_renderer,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Lang {
    En,
    Ko,
    Ja,
}

impl Language for Lang {
    fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ko => "ko",
            Lang::Ja => "ja",
        }
    }

    fn all() -> &'static [Self] {
        &[Lang::En, Lang::Ko, Lang::Ja]
    }
}

/// Prefer the wanted language, then Korean, then the English terminal.
fn policy(wanted: Option<Lang>) -> FallbackOrder<Lang> {
    match wanted {
        Some(language) => FallbackOrder::new(vec![language, Lang::Ko], Lang::En),
        None => FallbackOrder::new(vec![Lang::Ko], Lang::En),
    }
}

fn sample() -> TextResolver<Lang> {
    let mut dictionary: TextDictionary<Lang> = Dictionary::new(Lang::En).unwrap();
    dictionary
        .insert(
            "greeting".parse().unwrap(),
            entry! {
                Lang::En => text_renderer("Hello"),
                Lang::Ko => text_renderer("안녕하세요"),
                Lang::Ja => text_renderer("こんにちは"),
            },
        )
        .unwrap();
    dictionary
        .insert(
            "farewell".parse().unwrap(),
            entry! {
                Lang::En => text_renderer("Goodbye"),
                Lang::Ko => text_renderer("안녕히 가세요"),
            },
        )
        .unwrap();
    dictionary
        .insert(
            "cart.item_count".parse().unwrap(),
            entry! {
                Lang::En => |params: &Params, _ctx: &RenderContext<'_, NoElement>| {
                    let count = params.int("count")?;
                    let options = format::NumberFormat::builder().comma(true).build();
                    let formatted = format::integer(count, &options)?;
                    let mut rendered = Rendered::new();
                    rendered.push_text(format!("{formatted} items"));
                    Ok(rendered)
                },
            },
        )
        .unwrap();
    Resolver::new(dictionary, policy)
}

fn no_options() -> EntryOptions<Lang, NoElement> {
    EntryOptions::new()
}

fn in_language(language: Lang) -> EntryOptions<Lang, NoElement> {
    EntryOptions::builder().language(language).build()
}

// =========================================================================
// Fast path
// =========================================================================

#[test]
fn explicit_language_bypasses_fallback() {
    let resolver = sample();
    // The policy would put Ko ahead of Ja, but the explicit language wins
    let text = resolver
        .resolve_text("greeting", &params! {}, &in_language(Lang::Ja))
        .unwrap();
    assert_eq!(text, "こんにちは");
}

#[test]
fn explicit_language_without_translation_falls_back() {
    let resolver = sample();
    // "farewell" has no Japanese entry; Ja is absent, Ko is next in order
    let text = resolver
        .resolve_text("farewell", &params! {}, &in_language(Lang::Ja))
        .unwrap();
    assert_eq!(text, "안녕히 가세요");
}

// =========================================================================
// Fallback scan
// =========================================================================

#[test]
fn first_present_preferred_language_wins() {
    let resolver = sample();
    let text = resolver
        .resolve_text("greeting", &params! {}, &no_options())
        .unwrap();
    assert_eq!(text, "안녕하세요");
}

#[test]
fn required_terminal_answers_when_nothing_matches() {
    let resolver = sample();
    // Only English exists for this key; preferred candidates all miss
    let text = resolver
        .resolve_text("cart.item_count", &params! { "count" => 1234567 }, &no_options())
        .unwrap();
    assert_eq!(text, "1,234,567 items");
}

#[test]
fn policy_terminal_missing_from_entry_fails_fast() {
    let mut dictionary: TextDictionary<Lang> = Dictionary::new(Lang::En).unwrap();
    dictionary
        .insert(
            "greeting".parse().unwrap(),
            entry! { Lang::En => text_renderer("Hello") },
        )
        .unwrap();
    // The policy terminates in Ja, which the dictionary never validated
    let resolver = Resolver::new(dictionary, |_| FallbackOrder::required_only(Lang::Ja));

    let result = resolver.resolve("greeting", &params! {}, &no_options());
    match result {
        Err(ResolveError::MissingRequiredLanguage { key, language }) => {
            assert_eq!(key, "greeting");
            assert_eq!(language, "ja");
        }
        other => panic!("expected MissingRequiredLanguage, got {:?}", other.err()),
    }
}

// =========================================================================
// Unknown keys and ids
// =========================================================================

#[test]
fn unknown_key_suggests_close_matches() {
    let resolver = sample();
    match resolver.resolve("greting", &params! {}, &no_options()) {
        Err(ResolveError::UnknownKey { key, suggestions }) => {
            assert_eq!(key, "greting");
            assert_eq!(suggestions, ["greeting"]);
        }
        other => panic!("expected UnknownKey, got {:?}", other.err()),
    }
}

#[test]
fn unknown_key_with_no_close_match_has_no_suggestions() {
    let resolver = sample();
    match resolver.resolve("checkout.total", &params! {}, &no_options()) {
        Err(ResolveError::UnknownKey { suggestions, .. }) => assert!(suggestions.is_empty()),
        other => panic!("expected UnknownKey, got {:?}", other.err()),
    }
}

#[test]
fn resolve_by_id_matches_resolve_by_key() {
    let resolver = sample();
    let by_id = resolver
        .resolve_by_id(EntryId::from_key("greeting"), &params! {}, &no_options())
        .unwrap();
    let by_key = resolver.resolve("greeting", &params! {}, &no_options()).unwrap();
    assert_eq!(by_id, by_key);

    let result = resolver.resolve_by_id(EntryId::from_key("nope"), &params! {}, &no_options());
    assert!(matches!(result, Err(ResolveError::UnknownId { .. })));
}

// =========================================================================
// Render errors
// =========================================================================

#[test]
fn renderer_failures_surface_as_resolve_errors() {
    let resolver = sample();
    let result = resolver.resolve("cart.item_count", &params! {}, &no_options());
    assert!(matches!(result, Err(ResolveError::Render(_))));

    let result = resolver.resolve(
        "cart.item_count",
        &params! { "count" => "three" },
        &no_options(),
    );
    assert!(matches!(result, Err(ResolveError::Render(_))));
}

// =========================================================================
// Option merging
// =========================================================================

#[test]
fn caller_options_are_reusable_across_calls() {
    let resolver = sample();
    let options = in_language(Lang::Ko);
    let first = resolver.resolve_text("greeting", &params! {}, &options).unwrap();
    let second = resolver.resolve_text("greeting", &params! {}, &options).unwrap();
    assert_eq!(first, second);
    assert_eq!(options.language(), Some(Lang::Ko));
}

#[test]
fn default_line_break_can_be_set_and_cleared() {
    let mut resolver = sample();
    assert!(resolver.line_break().is_none());
    // NoElement has no values, so only clearing is expressible here;
    // element-typed defaults are covered in rich_render.rs
    resolver.set_line_break(None);
    assert!(resolver.line_break().is_none());
}

// =========================================================================
// Concurrency
// =========================================================================

#[test]
fn resolver_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TextResolver<Lang>>();
    assert_send_sync::<Dictionary<Lang, NoElement>>();
}

#[test]
fn concurrent_resolution_agrees() {
    let resolver = Arc::new(sample());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                resolver
                    .resolve_text("greeting", &params! {}, &EntryOptions::new())
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "안녕하세요");
    }
}
