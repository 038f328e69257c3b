#![forbid(unsafe_code)]

//! Generic scan-and-replace.
//!
//! Every conversion in this crate is a formatter plugged into
//! [`replace_emojis`]: text between matches is copied unchanged and each
//! match is replaced by whatever the formatter returns for it.
//!
//! # Example
//! ```
//! use moji_catalog::bundled;
//! use moji_text::scan::{replace_emojis, replace_emojis_padded};
//!
//! let text = "go\u{1F680}now";
//! let named = replace_emojis(bundled(), text, |m| m.emoji().primary_alias());
//! assert_eq!(named, "gorocketnow");
//!
//! let padded = replace_emojis_padded(bundled(), text, ' ', |m| m.emoji().primary_alias());
//! assert_eq!(padded, "go rocket now");
//! ```

use moji_catalog::Catalog;

use crate::matcher::{EmojiMatch, matches};

/// Replace every match in `text` with `formatter(&match)`.
///
/// The formatter runs exactly once per match, in document order. Bytes
/// outside matches are copied verbatim.
pub fn replace_emojis<'a, F, S>(catalog: &'a Catalog, text: &'a str, formatter: F) -> String
where
    F: FnMut(&EmojiMatch<'a>) -> S,
    S: AsRef<str>,
{
    scan_replace(catalog, text, None, formatter)
}

/// Like [`replace_emojis`], framing every replacement with `separator` on
/// both sides.
pub fn replace_emojis_padded<'a, F, S>(
    catalog: &'a Catalog,
    text: &'a str,
    separator: char,
    formatter: F,
) -> String
where
    F: FnMut(&EmojiMatch<'a>) -> S,
    S: AsRef<str>,
{
    scan_replace(catalog, text, Some(separator), formatter)
}

fn scan_replace<'a, F, S>(
    catalog: &'a Catalog,
    text: &'a str,
    separator: Option<char>,
    mut formatter: F,
) -> String
where
    F: FnMut(&EmojiMatch<'a>) -> S,
    S: AsRef<str>,
{
    let mut out = String::with_capacity(text.len());
    let mut prev = 0;
    for found in matches(catalog, text) {
        out.push_str(&text[prev..found.start()]);
        out.extend(separator);
        out.push_str(formatter(&found).as_ref());
        out.extend(separator);
        prev = found.end();
    }
    out.push_str(&text[prev..]);
    out
}
