#![forbid(unsafe_code)]

//! Unicode → alias / HTML conversions and set-based filtering.
//!
//! Each function here is a formatter over [`replace_emojis`]. The
//! [`FitzpatrickAction`] decides what happens to a skin-tone modifier that
//! was matched together with its base:
//!
//! | action | alias | html |
//! |---|---|---|
//! | `Parse` | `:boy\|type_6:` | entity, modifier dropped |
//! | `ParseAndAddSpace` | ` :boy\|type_6: ` (untoned: `:boy:`) | entity, modifier dropped |
//! | `Remove` | `:boy:` | entity, modifier dropped |
//! | `Ignore` | `:boy:` + raw modifier | entity + raw modifier |

use std::borrow::Cow;
use std::fmt;

use moji_catalog::{Catalog, Emoji};
use rustc_hash::FxHashSet;

use crate::matcher::EmojiMatch;
use crate::scan::replace_emojis;

/// Separator framing skin-toned replacements under
/// [`FitzpatrickAction::ParseAndAddSpace`].
pub const DEFAULT_SEPARATOR: char = ' ';

/// What to do with a matched skin-tone modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitzpatrickAction {
    /// Encode the modifier into the output (`|type_N` for aliases).
    #[default]
    Parse,
    /// As `Parse`, with skin-toned alias replacements framed by spaces.
    ParseAndAddSpace,
    /// Drop the modifier.
    Remove,
    /// Leave the raw modifier after the replacement.
    Ignore,
}

impl FitzpatrickAction {
    /// Parse `parse` / `parse_and_add_space` / `remove` / `ignore`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "parse" => Some(Self::Parse),
            "parse_and_add_space" | "parse-and-add-space" => Some(Self::ParseAndAddSpace),
            "remove" => Some(Self::Remove),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::ParseAndAddSpace => "parse_and_add_space",
            Self::Remove => "remove",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for FitzpatrickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alias form of one match.
#[must_use]
pub fn alias_of(found: &EmojiMatch<'_>, action: FitzpatrickAction) -> String {
    let alias = found.emoji().primary_alias();
    match (action, found.fitzpatrick()) {
        (FitzpatrickAction::Parse | FitzpatrickAction::ParseAndAddSpace, Some(tone)) => {
            format!(":{alias}|{tone}:")
        }
        (FitzpatrickAction::Ignore, Some(tone)) => format!(":{alias}:{}", tone.unicode()),
        _ => format!(":{alias}:"),
    }
}

/// Replace emoji with their primary alias, `😄` → `:smile:`.
#[must_use]
pub fn to_aliases(catalog: &Catalog, text: &str, action: FitzpatrickAction) -> String {
    match action {
        FitzpatrickAction::ParseAndAddSpace => to_aliases_padded(catalog, text, DEFAULT_SEPARATOR),
        _ => replace_emojis(catalog, text, |found| alias_of(found, action)),
    }
}

/// Parse-mode aliases; those carrying a skin tone are framed by
/// `separator` on both sides, the rest are left bare.
#[must_use]
pub fn to_aliases_padded(catalog: &Catalog, text: &str, separator: char) -> String {
    replace_emojis(catalog, text, |found| {
        let alias = alias_of(found, FitzpatrickAction::Parse);
        if found.has_fitzpatrick() {
            format!("{separator}{alias}{separator}")
        } else {
            alias
        }
    })
}

/// Replace emoji with decimal HTML entities, `😄` → `&#128516;`.
#[must_use]
pub fn to_html_decimal(catalog: &Catalog, text: &str, action: FitzpatrickAction) -> String {
    replace_emojis(catalog, text, |found| {
        with_modifier(found, found.emoji().html_decimal(), action)
    })
}

/// Replace emoji with hexadecimal HTML entities, `😄` → `&#x1f604;`.
#[must_use]
pub fn to_html_hexadecimal(catalog: &Catalog, text: &str, action: FitzpatrickAction) -> String {
    replace_emojis(catalog, text, |found| {
        with_modifier(found, found.emoji().html_hexadecimal(), action)
    })
}

fn with_modifier<'a>(
    found: &EmojiMatch<'a>,
    encoded: &'a str,
    action: FitzpatrickAction,
) -> Cow<'a, str> {
    match action {
        FitzpatrickAction::Ignore if found.has_fitzpatrick() => {
            Cow::Owned(format!("{encoded}{}", found.fitzpatrick_unicode()))
        }
        _ => Cow::Borrowed(encoded),
    }
}

/// Delete every emoji.
#[must_use]
pub fn remove_all(catalog: &Catalog, text: &str) -> String {
    replace_emojis(catalog, text, |_| "")
}

/// Replace every emoji with `replacement`.
#[must_use]
pub fn replace_all(catalog: &Catalog, text: &str, replacement: &str) -> String {
    replace_emojis(catalog, text, |_| replacement)
}

/// Delete the emoji whose resolved entry is in `emojis`; keep the rest as
/// written.
#[must_use]
pub fn remove_set<'e>(
    catalog: &Catalog,
    text: &str,
    emojis: impl IntoIterator<Item = &'e Emoji>,
) -> String {
    filter_set(catalog, text, emojis, false)
}

/// Keep only the emoji whose resolved entry is in `emojis`; delete the rest.
#[must_use]
pub fn keep_only_set<'e>(
    catalog: &Catalog,
    text: &str,
    emojis: impl IntoIterator<Item = &'e Emoji>,
) -> String {
    filter_set(catalog, text, emojis, true)
}

fn filter_set<'e>(
    catalog: &Catalog,
    text: &str,
    emojis: impl IntoIterator<Item = &'e Emoji>,
    keep_members: bool,
) -> String {
    let set: FxHashSet<&str> = emojis.into_iter().map(Emoji::unicode).collect();
    replace_emojis(catalog, text, |found| {
        if set.contains(found.emoji().unicode()) == keep_members {
            found.as_str()
        } else {
            ""
        }
    })
}
