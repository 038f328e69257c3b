#![forbid(unsafe_code)]

//! Alias / HTML entity → unicode conversion.
//!
//! The reverse direction does not scan raw text with the trie. At each
//! offset it recognises one of two textual forms, in priority order:
//!
//! 1. an alias block `:name:` or `:name|type_N:`;
//! 2. a run of consecutive numeric entities `&#128516;` / `&#x1f604;`.
//!
//! Entity runs are decoded into a scratch buffer and checked against the
//! trie after every entity; the longest decoded prefix that is a complete
//! catalog glyph wins. Anything else is copied through unchanged.

use moji_catalog::{Catalog, Emoji, Fitzpatrick};

/// A recognised alias block or entity run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub emoji: &'a Emoji,
    pub fitzpatrick: Option<Fitzpatrick>,
    pub start: usize,
    /// Exclusive end, past the closing `:` or `;`.
    pub end: usize,
}

/// Replace aliases and HTML entities with their unicode glyphs.
#[must_use]
pub fn to_unicode(catalog: &Catalog, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < text.len() {
        // Both forms start with an ASCII byte; copy everything before the
        // next one in bulk.
        let Some(skip) = text[pos..].find([':', '&']) else {
            out.push_str(&text[pos..]);
            break;
        };
        out.push_str(&text[pos..pos + skip]);
        pos += skip;

        let candidate = alias_at(catalog, text, pos).or_else(|| html_entity_at(catalog, text, pos));
        match candidate {
            Some(found) => {
                out.push_str(found.emoji.unicode());
                if let Some(tone) = found.fitzpatrick {
                    out.push_str(tone.unicode());
                }
                pos = found.end;
            }
            None => {
                // ':' and '&' are one byte each.
                out.push_str(&text[pos..=pos]);
                pos += 1;
            }
        }
    }
    out
}

/// Alias block starting exactly at `start`.
///
/// The name must be at least one character and must not start with `:`.
/// A `|type` part requires an entry that supports skin tones and a known
/// type token.
#[must_use]
pub fn alias_at<'a>(catalog: &'a Catalog, text: &str, start: usize) -> Option<Candidate<'a>> {
    let body = text.get(start..)?.strip_prefix(':')?;
    let first = body.chars().next()?;
    if first == ':' {
        return None;
    }
    let close = first.len_utf8() + body[first.len_utf8()..].find(':')?;
    let block = &body[..close];
    let end = start + 1 + close + 1;

    match block.split_once('|') {
        Some((alias, token)) => {
            let emoji = catalog.get_for_alias(alias)?;
            if !emoji.supports_fitzpatrick() {
                return None;
            }
            let tone = Fitzpatrick::from_type(token)?;
            Some(Candidate {
                emoji,
                fitzpatrick: Some(tone),
                start,
                end,
            })
        }
        None => catalog.get_for_alias(block).map(|emoji| Candidate {
            emoji,
            fitzpatrick: None,
            start,
            end,
        }),
    }
}

/// Longest entity run starting exactly at `start` that decodes to a
/// catalog glyph.
#[must_use]
pub fn html_entity_at<'a>(catalog: &'a Catalog, text: &str, start: usize) -> Option<Candidate<'a>> {
    if !text.get(start..)?.starts_with("&#") {
        return None;
    }

    let max_depth = catalog.max_depth();
    let mut scratch = String::with_capacity(max_depth);
    let mut longest: Option<(&'a Emoji, usize)> = None;
    let mut entity_start = start;

    while let Some((ch, entity_end)) = decode_entity(text, entity_start) {
        if scratch.len() + ch.len_utf8() > max_depth {
            break;
        }
        scratch.push(ch);

        let verdict = catalog.matches(scratch.as_bytes());
        if verdict.exact_match() {
            if let Some(emoji) = catalog.get_by_unicode(&scratch) {
                longest = Some((emoji, entity_end));
            }
        }
        if verdict.impossible_match() {
            break;
        }
        entity_start = entity_end;
    }

    longest.map(|(emoji, end)| Candidate {
        emoji,
        fitzpatrick: None,
        start,
        end,
    })
}

/// Decode one `&#digits;` / `&#xhex;` entity at `at`; returns the scalar
/// and the offset past `;`.
fn decode_entity(text: &str, at: usize) -> Option<(char, usize)> {
    let body = text.get(at..)?.strip_prefix("&#")?;
    let (digits_and_rest, radix, prefix_len) = match body.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16, 3),
        None => (body, 10, 2),
    };
    let semi = digits_and_rest.find(';')?;
    let digits = &digits_and_rest[..semi];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let code = u32::from_str_radix(digits, radix).ok()?;
    let ch = char::from_u32(code)?;
    Some((ch, at + prefix_len + semi + 1))
}
