#![forbid(unsafe_code)]

//! Emoji detection and conversion over a [`Catalog`].
//!
//! This crate provides the text-side operations:
//! - [`matcher`] - composed-sequence matching (base, skin tone, gender, joiner)
//! - [`scan`] - generic scan-and-replace driven by a formatter
//! - [`codec`] - alias / HTML encodings and set-based filtering
//! - [`unicode`] - alias / HTML entity → unicode
//!
//! Every function takes the catalog explicitly; the `moji` facade binds
//! them to a process-wide one.
//!
//! # Example
//! ```
//! use moji_catalog::bundled;
//! use moji_text::{FitzpatrickAction, to_aliases, to_unicode, is_emoji};
//!
//! let c = bundled();
//! let aliased = to_aliases(c, "hi \u{1F466}\u{1F3FF}", FitzpatrickAction::Parse);
//! assert_eq!(aliased, "hi :boy|type_6:");
//! assert_eq!(to_unicode(c, &aliased), "hi \u{1F466}\u{1F3FF}");
//! assert!(is_emoji(c, "\u{1F604}"));
//! ```

pub mod codec;
pub mod matcher;
pub mod scan;
pub mod unicode;

use moji_catalog::Catalog;

pub use codec::{
    DEFAULT_SEPARATOR, FitzpatrickAction, alias_of, keep_only_set, remove_all, remove_set,
    replace_all, to_aliases, to_aliases_padded, to_html_decimal, to_html_hexadecimal,
};
pub use matcher::{
    EmojiMatch, EmojiMatches, find_match_strings, find_matches, match_at, matches, next_match,
};
pub use scan::{replace_emojis, replace_emojis_padded};
pub use unicode::{Candidate, alias_at, html_entity_at, to_unicode};

/// Whether `text` is exactly one composed emoji, nothing before or after.
#[must_use]
pub fn is_emoji(catalog: &Catalog, text: &str) -> bool {
    match_at(catalog, text, 0).is_some_and(|found| found.end() == text.len())
}

/// Whether `text` contains at least one emoji.
#[must_use]
pub fn contains_emoji(catalog: &Catalog, text: &str) -> bool {
    next_match(catalog, text, 0).is_some()
}

/// Whether `text` is non-empty and made only of emoji.
#[must_use]
pub fn is_only_emojis(catalog: &Catalog, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let mut expected = 0;
    for found in matches(catalog, text) {
        if found.start() != expected {
            return false;
        }
        expected = found.end();
    }
    expected == text.len()
}
