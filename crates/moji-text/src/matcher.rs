#![forbid(unsafe_code)]

//! Composed-sequence matching.
//!
//! A match starts with the longest catalog glyph at some offset (the base)
//! and is then extended according to the base's [`SequenceKind`]:
//!
//! - `BaseSkinGender`: `base [skin tone] [ZWJ ♂|♀]`
//! - `GenderSkinBase`: `base [skin tone] [ZWJ nested-base]`, where the
//!   gender is read from the base glyph itself and a nested base, when
//!   found, becomes the reported entry
//! - `Plain`: the base alone
//!
//! Any kind then absorbs one trailing U+FE0F presentation selector.
//!
//! All offsets are UTF-8 byte offsets on `char` boundaries.
//!
//! # Example
//! ```
//! use moji_catalog::{Fitzpatrick, bundled};
//! use moji_text::matcher::find_matches;
//!
//! let text = "hi \u{1F466}\u{1F3FF}!";
//! let found = find_matches(bundled(), text, 0);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].emoji().primary_alias(), "boy");
//! assert_eq!(found[0].fitzpatrick(), Some(Fitzpatrick::Type6));
//! assert_eq!(found[0].range(), 3..11);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;

use moji_catalog::{
    Catalog, Emoji, Fitzpatrick, Gender, PRESENTATION_SELECTOR, SequenceKind, ZWJ,
};

/// One composed emoji found in a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch<'a> {
    emoji: &'a Emoji,
    fitzpatrick: Option<Fitzpatrick>,
    gender: Option<Gender>,
    source: &'a str,
    start: usize,
    base_end: usize,
    end: usize,
}

impl<'a> EmojiMatch<'a> {
    /// Resolved entry. For gender-first sequences with a joiner
    /// continuation this is the nested base, not the glyph at `start`.
    #[inline]
    #[must_use]
    pub fn emoji(&self) -> &'a Emoji {
        self.emoji
    }

    #[inline]
    #[must_use]
    pub fn fitzpatrick(&self) -> Option<Fitzpatrick> {
        self.fitzpatrick
    }

    #[inline]
    #[must_use]
    pub fn has_fitzpatrick(&self) -> bool {
        self.fitzpatrick.is_some()
    }

    /// `type_N` name of the skin tone, or `""`.
    #[must_use]
    pub fn fitzpatrick_type(&self) -> &'static str {
        self.fitzpatrick.map_or("", Fitzpatrick::type_name)
    }

    /// Raw skin-tone modifier, or `""`.
    #[must_use]
    pub fn fitzpatrick_unicode(&self) -> &'static str {
        self.fitzpatrick.map_or("", Fitzpatrick::unicode)
    }

    #[inline]
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Buffer the match was found in.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end of the whole composed sequence.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// End of the base glyph matched at `start`, before any modifier.
    #[must_use]
    pub fn base_end(&self) -> usize {
        self.base_end
    }

    /// End of the skin-tone modifier; equals [`base_end`](Self::base_end)
    /// when there is none.
    #[must_use]
    pub fn fitzpatrick_end(&self) -> usize {
        if self.has_fitzpatrick() {
            self.base_end + Fitzpatrick::LEN_UTF8
        } else {
            self.base_end
        }
    }

    /// The matched text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.end]
    }
}

impl fmt::Display for EmojiMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compose the emoji starting exactly at byte offset `start`.
///
/// Returns `None` when no catalog glyph starts there.
#[must_use]
pub fn match_at<'a>(catalog: &'a Catalog, text: &'a str, start: usize) -> Option<EmojiMatch<'a>> {
    let base = catalog.best_match(text, start)?;
    let base_end = start + base.unicode().len();

    let mut emoji = base;
    let mut end = base_end;
    let mut fitzpatrick = None;
    let mut gender = None;

    match base.kind() {
        SequenceKind::Plain => {}
        SequenceKind::BaseSkinGender => {
            fitzpatrick = Fitzpatrick::find(text, end);
            if fitzpatrick.is_some() {
                end += Fitzpatrick::LEN_UTF8;
            }
            if let Some((suffix, after)) = gender_suffix(text, end) {
                gender = Some(suffix);
                end = after;
            }
        }
        SequenceKind::GenderSkinBase => {
            // Read from the glyph; the scan position does not move.
            gender = Gender::from_leading(base.unicode());
            fitzpatrick = Fitzpatrick::find(text, end);
            if fitzpatrick.is_some() {
                end += Fitzpatrick::LEN_UTF8;
            }
            // The nested base replaces the outer one as the reported entry.
            if let Some(nested) = joined_base(catalog, text, end) {
                end += ZWJ.len_utf8() + nested.unicode().len();
                emoji = nested;
            }
        }
    }

    if text
        .get(end..)
        .is_some_and(|rest| rest.starts_with(PRESENTATION_SELECTOR))
    {
        end += PRESENTATION_SELECTOR.len_utf8();
    }

    Some(EmojiMatch {
        emoji,
        fitzpatrick,
        gender,
        source: text,
        start,
        base_end,
        end,
    })
}

/// `ZWJ` followed by `♂`/`♀` at `pos`; returns the gender and the offset
/// past the glyph.
fn gender_suffix(text: &str, pos: usize) -> Option<(Gender, usize)> {
    let after_joiner = pos + joiner_len(text, pos)?;
    let gender = Gender::find_suffix(text, after_joiner)?;
    // Both suffix glyphs are three bytes, same as the joiner.
    Some((gender, after_joiner + ZWJ.len_utf8()))
}

/// `ZWJ` followed by any catalog glyph at `pos`.
fn joined_base<'a>(catalog: &'a Catalog, text: &str, pos: usize) -> Option<&'a Emoji> {
    let after_joiner = pos + joiner_len(text, pos)?;
    catalog.best_match(text, after_joiner)
}

#[inline]
fn joiner_len(text: &str, pos: usize) -> Option<usize> {
    text.get(pos..)?
        .starts_with(ZWJ)
        .then(|| ZWJ.len_utf8())
}

/// First match starting at or after byte offset `from`.
///
/// Advances one `char` at a time. Returns `None` when `from` is past the
/// end or not on a `char` boundary.
#[must_use]
pub fn next_match<'a>(catalog: &'a Catalog, text: &'a str, from: usize) -> Option<EmojiMatch<'a>> {
    text.get(from..)?
        .char_indices()
        .find_map(|(offset, _)| match_at(catalog, text, from + offset))
}

/// Lazy left-to-right enumeration of non-overlapping matches.
#[derive(Debug, Clone)]
pub struct EmojiMatches<'a> {
    catalog: &'a Catalog,
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for EmojiMatches<'a> {
    type Item = EmojiMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = next_match(self.catalog, self.text, self.pos);
        match found {
            Some(m) => self.pos = m.end,
            None => self.pos = self.text.len() + 1,
        }
        found
    }
}

impl FusedIterator for EmojiMatches<'_> {}

/// Iterate every match in `text`, in document order.
#[must_use]
pub fn matches<'a>(catalog: &'a Catalog, text: &'a str) -> EmojiMatches<'a> {
    EmojiMatches {
        catalog,
        text,
        pos: 0,
    }
}

/// Collect matches in document order. A `limit` of zero means no limit.
#[must_use]
pub fn find_matches<'a>(catalog: &'a Catalog, text: &'a str, limit: usize) -> Vec<EmojiMatch<'a>> {
    let iter = matches(catalog, text);
    if limit > 0 {
        iter.take(limit).collect()
    } else {
        iter.collect()
    }
}

/// Like [`find_matches`], returning the matched source slices.
#[must_use]
pub fn find_match_strings<'a>(catalog: &'a Catalog, text: &'a str, limit: usize) -> Vec<&'a str> {
    find_matches(catalog, text, limit)
        .iter()
        .map(EmojiMatch::as_str)
        .collect()
}
