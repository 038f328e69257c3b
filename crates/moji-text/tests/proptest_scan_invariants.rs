//! Property-based invariant tests for scanning and conversion.
//!
//! Inputs are built from ASCII filler, whole catalog glyphs, and
//! skin-toned composable bases:
//!
//! 1. Matches are ordered, non-overlapping, and slice the source.
//! 2. A limit returns a prefix of the unlimited result.
//! 3. Removing every emoji leaves no emoji and is idempotent.
//! 4. Alias encoding round-trips through `to_unicode`.
//! 5. Decimal and hex entity encoding round-trip for untoned text.
//! 6. Text without emoji is left alone by every converter.
//! 7. No panics on arbitrary input.

use moji_catalog::{Fitzpatrick, SequenceKind, bundled};
use moji_text::{
    FitzpatrickAction, contains_emoji, find_match_strings, find_matches, is_only_emojis,
    remove_all, to_aliases, to_html_decimal, to_html_hexadecimal, to_unicode,
};
use proptest::prelude::*;
use proptest::sample::select;

// ── Helpers ─────────────────────────────────────────────────────────────

const FILLER: &str = "[a-z0-9 .,!?]{1,4}";

fn glyphs() -> Vec<String> {
    bundled().all().iter().map(|e| e.unicode().to_owned()).collect()
}

fn toned_bases() -> Vec<String> {
    bundled()
        .all()
        .iter()
        .filter(|e| e.kind() == SequenceKind::BaseSkinGender)
        .map(|e| e.unicode().to_owned())
        .collect()
}

fn tone_strategy() -> impl Strategy<Value = Fitzpatrick> {
    select(Fitzpatrick::ALL.to_vec())
}

fn piece_strategy(with_tones: bool) -> BoxedStrategy<String> {
    let filler = FILLER.prop_map(String::from);
    let glyph = select(glyphs());
    if with_tones {
        let toned = (select(toned_bases()), tone_strategy())
            .prop_map(|(base, tone)| format!("{base}{}", tone.unicode()));
        prop_oneof![2 => filler, 2 => glyph, 1 => toned].boxed()
    } else {
        prop_oneof![filler, glyph].boxed()
    }
}

fn text_strategy(with_tones: bool) -> impl Strategy<Value = String> {
    prop::collection::vec(piece_strategy(with_tones), 0..12).prop_map(|pieces| pieces.concat())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Matches are ordered and non-overlapping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn matches_ordered_and_disjoint(text in text_strategy(true)) {
        let found = find_matches(bundled(), &text, 0);
        let mut prev_end = 0;
        for m in &found {
            prop_assert!(m.start() >= prev_end, "overlap at {} in {:?}", m.start(), text);
            prop_assert!(m.start() < m.end());
            prop_assert!(m.base_end() <= m.fitzpatrick_end());
            prop_assert!(m.fitzpatrick_end() <= m.end());
            prop_assert!(text.is_char_boundary(m.start()) && text.is_char_boundary(m.end()));
            prop_assert_eq!(m.as_str(), &text[m.range()]);
            prev_end = m.end();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Limit is a prefix
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn limit_is_prefix(text in text_strategy(true), limit in 1usize..6) {
        let all = find_match_strings(bundled(), &text, 0);
        let some = find_match_strings(bundled(), &text, limit);
        prop_assert_eq!(some.len(), all.len().min(limit));
        prop_assert_eq!(&some[..], &all[..some.len()]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. remove_all
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remove_all_clears_and_is_idempotent(text in text_strategy(true)) {
        let c = bundled();
        let once = remove_all(c, &text);
        prop_assert!(!contains_emoji(c, &once), "emoji left in {:?}", once);
        prop_assert_eq!(remove_all(c, &once), once.clone());
        prop_assert_eq!(is_only_emojis(c, &text), !text.is_empty() && once.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Alias round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn alias_round_trip(text in text_strategy(true)) {
        let c = bundled();
        let aliased = to_aliases(c, &text, FitzpatrickAction::Parse);
        prop_assert_eq!(to_unicode(c, &aliased), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. HTML round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn html_round_trip(text in text_strategy(false)) {
        let c = bundled();
        let dec = to_html_decimal(c, &text, FitzpatrickAction::Parse);
        let hex = to_html_hexadecimal(c, &text, FitzpatrickAction::Parse);
        prop_assert!(!contains_emoji(c, &dec));
        prop_assert_eq!(to_unicode(c, &dec), text.clone());
        prop_assert_eq!(to_unicode(c, &hex), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Emoji-free text is untouched
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn emoji_free_text_is_identity(text in "[a-zA-Z0-9 .,!?]{0,64}") {
        let c = bundled();
        for action in [
            FitzpatrickAction::Parse,
            FitzpatrickAction::ParseAndAddSpace,
            FitzpatrickAction::Remove,
            FitzpatrickAction::Ignore,
        ] {
            prop_assert_eq!(to_aliases(c, &text, action), text.clone());
            prop_assert_eq!(to_html_decimal(c, &text, action), text.clone());
        }
        prop_assert_eq!(to_unicode(c, &text), text.clone());
        prop_assert_eq!(remove_all(c, &text), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. No panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_input_never_panics(text in any::<String>()) {
        let c = bundled();
        let _ = find_matches(c, &text, 0);
        let _ = to_aliases(c, &text, FitzpatrickAction::ParseAndAddSpace);
        let _ = to_html_hexadecimal(c, &text, FitzpatrickAction::Ignore);
        let _ = to_unicode(c, &text);
    }

    #[test]
    fn entity_like_input_never_panics(text in "(&#x?[0-9a-fA-F]{0,8};?|:[a-z_|0-9]{0,10}:?|[ a-z]){0,10}") {
        let _ = to_unicode(bundled(), &text);
    }
}
