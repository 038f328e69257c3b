#![forbid(unsafe_code)]

//! Immutable emoji catalog.
//!
//! A [`Catalog`] is built once from loader output and only read afterwards.
//! It is `Send + Sync` and can be shared by reference between any number of
//! concurrent scans without locking.
//!
//! # Example
//! ```
//! use moji_catalog::{Catalog, LoadOptions};
//!
//! let json = r#"[{"emoji": "😄", "aliases": ["smile"], "tags": ["happy"]}]"#;
//! let catalog = Catalog::from_json(json, &LoadOptions::default()).unwrap();
//! assert_eq!(catalog.get_for_alias(":smile:").unwrap().unicode(), "😄");
//! assert_eq!(catalog.get_for_tag("happy").count(), 1);
//! ```

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::emoji::{Emoji, EmojiId};
use crate::error::CatalogError;
use crate::loader::{self, LoadOptions};
use crate::trie::{EmojiTrie, Matches};

/// Frozen set of emoji entries with alias, tag and prefix indexes.
#[derive(Debug, Clone)]
pub struct Catalog {
    emojis: Vec<Emoji>,
    by_alias: FxHashMap<String, EmojiId>,
    by_tag: FxHashMap<String, Vec<EmojiId>>,
    trie: EmojiTrie,
}

impl Catalog {
    /// Index `emojis`. Later rows win on duplicate aliases or glyphs.
    #[must_use]
    pub fn from_emojis(emojis: Vec<Emoji>) -> Self {
        let _span = tracing::debug_span!("catalog_build", rows = emojis.len()).entered();

        let mut by_alias = FxHashMap::default();
        let mut by_tag: FxHashMap<String, Vec<EmojiId>> = FxHashMap::default();
        let mut trie = EmojiTrie::new();

        for (index, emoji) in emojis.iter().enumerate() {
            let id = EmojiId(index as u32);
            for alias in emoji.aliases() {
                by_alias.insert(alias.clone(), id);
            }
            for tag in emoji.tags() {
                by_tag.entry(tag.clone()).or_default().push(id);
            }
            trie.insert(emoji.unicode(), id);
        }

        tracing::debug!(
            emojis = emojis.len(),
            aliases = by_alias.len(),
            tags = by_tag.len(),
            max_depth = trie.max_depth(),
            "emoji catalog built"
        );

        Self {
            emojis,
            by_alias,
            by_tag,
            trie,
        }
    }

    /// Build from a JSON string.
    ///
    /// # Errors
    ///
    /// Fails without producing a catalog if any record is invalid.
    pub fn from_json(json: &str, options: &LoadOptions) -> Result<Self, CatalogError> {
        loader::parse_emojis(json, options).map(Self::from_emojis)
    }

    /// Build from a reader yielding JSON.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or invalid records.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, CatalogError> {
        loader::read_emojis(reader, options).map(Self::from_emojis)
    }

    /// Build from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or invalid records.
    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, CatalogError> {
        loader::load_emojis(path, options).map(Self::from_emojis)
    }

    /// Entry for an id handed out by this catalog.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different catalog and is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, id: EmojiId) -> &Emoji {
        &self.emojis[id.index()]
    }

    /// Every entry, in load order.
    #[must_use]
    pub fn all(&self) -> &[Emoji] {
        &self.emojis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// Look up an alias; surrounding colons are ignored (`:smile:` == `smile`).
    #[must_use]
    pub fn get_for_alias(&self, alias: &str) -> Option<&Emoji> {
        let trimmed = alias.strip_prefix(':').unwrap_or(alias);
        let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed);
        self.by_alias.get(trimmed).map(|&id| self.get(id))
    }

    /// Entries carrying `tag`.
    pub fn get_for_tag<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Emoji> + use<'a> {
        self.by_tag
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&id| self.get(id))
    }

    /// Every distinct tag, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }

    /// Entry whose glyph is exactly `unicode`.
    #[must_use]
    pub fn get_by_unicode(&self, unicode: &str) -> Option<&Emoji> {
        self.trie.get(unicode.as_bytes()).map(|id| self.get(id))
    }

    /// Longest entry whose glyph starts at byte offset `start` of `text`.
    #[inline]
    #[must_use]
    pub fn best_match(&self, text: &str, start: usize) -> Option<&Emoji> {
        self.trie.best_match(text, start).map(|id| self.get(id))
    }

    /// Classify a byte sequence against the registered glyphs.
    #[inline]
    #[must_use]
    pub fn matches(&self, bytes: &[u8]) -> Matches {
        self.trie.matches(bytes)
    }

    /// Byte length of the longest registered glyph.
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.trie.max_depth()
    }

    #[must_use]
    pub fn trie(&self) -> &EmojiTrie {
        &self.trie
    }
}

/// Raw JSON of the bundled catalog.
#[cfg(feature = "bundled")]
pub const BUNDLED_JSON: &str = include_str!("../data/emojis.json");

/// The bundled catalog, parsed on first use with default [`LoadOptions`].
///
/// # Panics
///
/// Panics if the bundled data is invalid, which the crate's tests rule out.
#[cfg(feature = "bundled")]
#[must_use]
pub fn bundled() -> &'static Catalog {
    static BUNDLED: std::sync::OnceLock<Catalog> = std::sync::OnceLock::new();
    BUNDLED.get_or_init(|| {
        Catalog::from_json(BUNDLED_JSON, &LoadOptions::default())
            .expect("bundled emoji catalog must be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::SequenceKind;
    use tracing_test::traced_test;

    fn emoji(unicode: &str, aliases: &[&str], tags: &[&str]) -> Emoji {
        Emoji::new(
            unicode,
            SequenceKind::Plain,
            aliases.iter().map(|s| s.to_string()).collect(),
            tags.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn small() -> Catalog {
        Catalog::from_emojis(vec![
            emoji("\u{1F604}", &["smile"], &["happy", "joy"]),
            emoji("\u{1F602}", &["joy"], &["happy", "tears"]),
            emoji("\u{1F44D}", &["+1", "thumbsup"], &[]),
        ])
    }

    #[test]
    fn alias_lookup_trims_colons() {
        let c = small();
        assert_eq!(c.get_for_alias("smile").unwrap().unicode(), "\u{1F604}");
        assert_eq!(c.get_for_alias(":smile:").unwrap().unicode(), "\u{1F604}");
        assert_eq!(c.get_for_alias(":thumbsup").unwrap().unicode(), "\u{1F44D}");
        assert!(c.get_for_alias("frown").is_none());
        assert!(c.get_for_alias("").is_none());
    }

    #[test]
    fn tag_lookup() {
        let c = small();
        let mut happy: Vec<_> = c.get_for_tag("happy").map(Emoji::primary_alias).collect();
        happy.sort_unstable();
        assert_eq!(happy, ["joy", "smile"]);
        assert_eq!(c.get_for_tag("missing").count(), 0);
        let mut tags: Vec<_> = c.tags().collect();
        tags.sort_unstable();
        assert_eq!(tags, ["happy", "joy", "tears"]);
    }

    #[test]
    fn unicode_lookup_and_prefix_queries() {
        let c = small();
        assert_eq!(c.get_by_unicode("\u{1F602}").unwrap().primary_alias(), "joy");
        assert!(c.get_by_unicode("\u{1F602}x").is_none());
        assert_eq!(c.best_match("a\u{1F44D}", 1).unwrap().primary_alias(), "+1");
        assert!(c.matches(&"\u{1F44D}".as_bytes()[..3]) == Matches::Possibly);
        assert_eq!(c.max_depth(), 4);
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
        assert_eq!(c.all()[0].primary_alias(), "smile");
    }

    #[test]
    fn catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }

    #[traced_test]
    #[test]
    fn build_is_logged() {
        let _ = small();
        assert!(logs_contain("emoji catalog built"));
    }

    #[traced_test]
    #[test]
    fn legacy_drop_is_logged() {
        let json = r#"[{"emoji": "👩‍🎨", "aliases": ["woman_artist"], "tags": []}]"#;
        let catalog = Catalog::from_json(json, &LoadOptions::default()).unwrap();
        assert!(catalog.is_empty());
        assert!(logs_contain("dropping legacy gender-prefixed row"));
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn bundled_catalog_loads() {
        let catalog = bundled();
        assert!(catalog.len() > 50);
        assert!(catalog.get_for_alias("smile").is_some());
        // Legacy rows are filtered out by default.
        assert!(catalog.get_for_alias("family_man_woman_boy").is_none());
        let full = Catalog::from_json(BUNDLED_JSON, &LoadOptions::unfiltered()).unwrap();
        assert_eq!(full.len(), catalog.len() + 2);
    }
}
