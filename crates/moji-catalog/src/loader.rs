#![forbid(unsafe_code)]

//! JSON catalog ingestion.
//!
//! The source is a JSON array with one object per row:
//!
//! ```json
//! [{ "emoji": "😄", "description": "smile", "sequence_type": 0,
//!    "aliases": ["smile"], "tags": ["happy"] }]
//! ```
//!
//! `emoji`, `aliases` and `tags` are required; any missing or ill-typed
//! required field fails the whole load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::emoji::{Emoji, SequenceKind};
use crate::error::CatalogError;

/// Row prefixes dropped by the legacy filter.
///
/// These pre-composed rows start with a gender code point and a joiner; the
/// gender-first matcher composes them from their parts instead.
pub const LEGACY_PREFIXES: [&str; 3] = [
    "\u{1F468}\u{200D}",
    "\u{1F469}\u{200D}",
    "\u{1F9D1}\u{200D}",
];

/// Options applied while turning records into entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop rows starting with one of [`LEGACY_PREFIXES`]. Default: true.
    pub legacy_filter: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            legacy_filter: true,
        }
    }
}

impl LoadOptions {
    /// Keep every row.
    #[must_use]
    pub const fn unfiltered() -> Self {
        Self {
            legacy_filter: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EmojiRecord {
    emoji: String,
    #[serde(rename = "emojiChar")]
    emoji_char: Option<String>,
    description: Option<String>,
    sequence_type: Option<i64>,
    supports_fitzpatrick: Option<bool>,
    aliases: Vec<String>,
    tags: Vec<String>,
}

/// Parse catalog rows from a JSON string.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] for malformed data and the record-level
/// variants for rows with empty aliases or an unknown sequence type.
pub fn parse_emojis(json: &str, options: &LoadOptions) -> Result<Vec<Emoji>, CatalogError> {
    let records: Vec<EmojiRecord> = serde_json::from_str(json)?;
    into_emojis(records, options)
}

/// Parse catalog rows from any reader.
///
/// # Errors
///
/// I/O failures surface as [`CatalogError::Io`], everything else as in
/// [`parse_emojis`].
pub fn read_emojis<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<Emoji>, CatalogError> {
    let records: Vec<EmojiRecord> = serde_json::from_reader(reader).map_err(|err| {
        if err.is_io() {
            CatalogError::Io(err.into())
        } else {
            CatalogError::Json(err)
        }
    })?;
    into_emojis(records, options)
}

/// Load catalog rows from a JSON file.
///
/// # Errors
///
/// See [`read_emojis`].
pub fn load_emojis(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<Emoji>, CatalogError> {
    let file = File::open(path.as_ref())?;
    read_emojis(BufReader::new(file), options)
}

fn into_emojis(records: Vec<EmojiRecord>, options: &LoadOptions) -> Result<Vec<Emoji>, CatalogError> {
    let mut emojis = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        if record.aliases.is_empty() {
            return Err(CatalogError::EmptyAliases { index });
        }
        let kind = match record.sequence_type {
            None => SequenceKind::Plain,
            Some(value) => SequenceKind::from_code(value)
                .ok_or(CatalogError::UnknownSequenceType { index, value })?,
        };
        if options.legacy_filter && is_legacy(&record.emoji) {
            tracing::debug!(index, emoji = %record.emoji, "dropping legacy gender-prefixed row");
            continue;
        }

        let mut emoji = Emoji::new(record.emoji, kind, record.aliases, record.tags)
            .with_fitzpatrick(record.supports_fitzpatrick.unwrap_or(false));
        if let Some(description) = record.description {
            emoji = emoji.with_description(description);
        }
        if let Some(emoji_char) = record.emoji_char {
            emoji = emoji.with_emoji_char(emoji_char);
        }
        emojis.push(emoji);
    }
    Ok(emojis)
}

fn is_legacy(unicode: &str) -> bool {
    LEGACY_PREFIXES
        .iter()
        .any(|prefix| unicode.starts_with(prefix))
}
