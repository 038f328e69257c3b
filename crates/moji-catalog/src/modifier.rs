#![forbid(unsafe_code)]

//! Skin-tone and gender modifiers recognised around a base emoji.
//!
//! All lookups work on byte offsets into UTF-8 text. A modifier is only
//! recognised when it starts exactly at the given offset.

use std::fmt;

/// Zero width joiner gluing glyphs into one composed emoji.
pub const ZWJ: char = '\u{200D}';

/// Variation selector forcing emoji presentation of the preceding glyph.
pub const PRESENTATION_SELECTOR: char = '\u{FE0F}';

/// Fitzpatrick skin-tone modifier (U+1F3FB..=U+1F3FF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fitzpatrick {
    /// Light skin tone, covering Fitzpatrick types 1 and 2.
    Type12,
    /// Medium-light skin tone.
    Type3,
    /// Medium skin tone.
    Type4,
    /// Medium-dark skin tone.
    Type5,
    /// Dark skin tone.
    Type6,
}

impl Fitzpatrick {
    /// All variants, lightest first.
    pub const ALL: [Self; 5] = [
        Self::Type12,
        Self::Type3,
        Self::Type4,
        Self::Type5,
        Self::Type6,
    ];

    /// The modifier code point.
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Type12 => '\u{1F3FB}',
            Self::Type3 => '\u{1F3FC}',
            Self::Type4 => '\u{1F3FD}',
            Self::Type5 => '\u{1F3FE}',
            Self::Type6 => '\u{1F3FF}',
        }
    }

    /// The modifier as a string slice.
    #[must_use]
    pub const fn unicode(self) -> &'static str {
        match self {
            Self::Type12 => "\u{1F3FB}",
            Self::Type3 => "\u{1F3FC}",
            Self::Type4 => "\u{1F3FD}",
            Self::Type5 => "\u{1F3FE}",
            Self::Type6 => "\u{1F3FF}",
        }
    }

    /// Canonical name used in alias output (`type_1_2` .. `type_6`).
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Type12 => "type_1_2",
            Self::Type3 => "type_3",
            Self::Type4 => "type_4",
            Self::Type5 => "type_5",
            Self::Type6 => "type_6",
        }
    }

    /// Parse a type token such as `type_6`. Case-insensitive.
    #[must_use]
    pub fn from_type(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.type_name().eq_ignore_ascii_case(token))
    }

    /// Map a modifier code point back to its variant.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_char() == ch)
    }

    /// Find a modifier starting exactly at byte offset `pos` of `text`.
    #[must_use]
    pub fn find(text: &str, pos: usize) -> Option<Self> {
        text.get(pos..)?.chars().next().and_then(Self::from_char)
    }

    /// Encoded length of every modifier in bytes.
    pub const LEN_UTF8: usize = 4;
}

impl fmt::Display for Fitzpatrick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Gender carried by a composed emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    /// Gender-neutral marker; only produced by gender-first sequences.
    Person,
}

impl Gender {
    /// The suffix glyph (with presentation selector) used after a joiner.
    ///
    /// `Person` has no suffix form.
    #[must_use]
    pub const fn unicode(self) -> Option<&'static str> {
        match self {
            Self::Male => Some("\u{2642}\u{FE0F}"),
            Self::Female => Some("\u{2640}\u{FE0F}"),
            Self::Person => None,
        }
    }

    /// Parse `male` / `female` / `person`, case-insensitive.
    #[must_use]
    pub fn from_type(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "person" => Some(Self::Person),
            _ => None,
        }
    }

    /// Recognise a suffix gender glyph (`♂` / `♀`) at byte offset `pos`.
    #[must_use]
    pub fn find_suffix(text: &str, pos: usize) -> Option<Self> {
        match text.get(pos..)?.chars().next()? {
            '\u{2642}' => Some(Self::Male),
            '\u{2640}' => Some(Self::Female),
            _ => None,
        }
    }

    /// Decode the gender baked into the leading code point of a base glyph.
    #[must_use]
    pub fn from_leading(unicode: &str) -> Option<Self> {
        match unicode.chars().next()? {
            '\u{1F468}' => Some(Self::Male),
            '\u{1F469}' => Some(Self::Female),
            '\u{1F9D1}' => Some(Self::Person),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Person => "person",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
