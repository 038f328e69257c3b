#![forbid(unsafe_code)]

//! Catalog entry model.

use std::fmt::Write as _;
use std::hash::{Hash, Hasher};

/// Index of an entry inside its [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmojiId(pub(crate) u32);

impl EmojiId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which composition branch applies when an entry is matched as a base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SequenceKind {
    /// Matched as-is; no modifiers are consumed.
    #[default]
    Plain,
    /// Base, then optional skin tone, then optional `ZWJ + ♂/♀`.
    BaseSkinGender,
    /// Gender baked into the base, optional skin tone, optional `ZWJ + base`.
    GenderSkinBase,
}

impl SequenceKind {
    /// Decode the integer code used by catalog records (0, 1, 2).
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Plain),
            1 => Some(Self::BaseSkinGender),
            2 => Some(Self::GenderSkinBase),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Plain => 0,
            Self::BaseSkinGender => 1,
            Self::GenderSkinBase => 2,
        }
    }

    /// Whether matching can consume modifiers after this base.
    #[inline]
    #[must_use]
    pub const fn is_composable(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

/// One immutable catalog row.
///
/// Equality and hashing use the canonical unicode string only, so two rows
/// with the same glyph compare equal regardless of their aliases.
#[derive(Debug, Clone)]
pub struct Emoji {
    unicode: String,
    emoji_char: Option<String>,
    description: Option<String>,
    kind: SequenceKind,
    supports_fitzpatrick: bool,
    aliases: Vec<String>,
    tags: Vec<String>,
    html_dec: String,
    html_hex: String,
}

impl Emoji {
    /// Build an entry. `aliases` must be non-empty; the loader enforces this
    /// for catalog data.
    #[must_use]
    pub fn new(
        unicode: impl Into<String>,
        kind: SequenceKind,
        aliases: Vec<String>,
        tags: Vec<String>,
    ) -> Self {
        let unicode = unicode.into();
        let html_dec = html_entities(&unicode, false);
        let html_hex = html_entities(&unicode, true);
        Self {
            unicode,
            emoji_char: None,
            description: None,
            kind,
            supports_fitzpatrick: kind.is_composable(),
            aliases,
            tags,
            html_dec,
            html_hex,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_emoji_char(mut self, emoji_char: impl Into<String>) -> Self {
        self.emoji_char = Some(emoji_char.into());
        self
    }

    /// Force skin-tone support on for a plain entry.
    #[must_use]
    pub fn with_fitzpatrick(mut self, supported: bool) -> Self {
        self.supports_fitzpatrick = supported || self.kind.is_composable();
        self
    }

    /// Canonical glyph.
    #[inline]
    #[must_use]
    pub fn unicode(&self) -> &str {
        &self.unicode
    }

    /// Alternate glyph representation, if the catalog provides one.
    #[must_use]
    pub fn emoji_char(&self) -> Option<&str> {
        self.emoji_char.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    #[must_use]
    pub fn supports_fitzpatrick(&self) -> bool {
        self.supports_fitzpatrick
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// First alias; used for every single-alias output.
    #[must_use]
    pub fn primary_alias(&self) -> &str {
        self.aliases.first().map_or("", String::as_str)
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// `&#128516;` form, one entity per code point.
    #[must_use]
    pub fn html_decimal(&self) -> &str {
        &self.html_dec
    }

    /// `&#x1f604;` form, one entity per code point, lowercase digits.
    #[must_use]
    pub fn html_hexadecimal(&self) -> &str {
        &self.html_hex
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        self.unicode == other.unicode
    }
}

impl Eq for Emoji {}

impl Hash for Emoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unicode.hash(state);
    }
}

fn html_entities(unicode: &str, hex: bool) -> String {
    let mut out = String::with_capacity(unicode.chars().count() * 10);
    for ch in unicode.chars() {
        // Writing into a String cannot fail.
        let _ = if hex {
            write!(out, "&#x{:x};", u32::from(ch))
        } else {
            write!(out, "&#{};", u32::from(ch))
        };
    }
    out
}
