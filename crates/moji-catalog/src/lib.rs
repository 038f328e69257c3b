#![forbid(unsafe_code)]

//! Emoji catalog for moji.
//!
//! This crate owns everything that is built once and then only read:
//! - [`Emoji`] - one catalog row (glyph, aliases, tags, sequence kind)
//! - [`Fitzpatrick`] / [`Gender`] - modifiers recognised around a base glyph
//! - [`EmojiTrie`] - byte-level longest-match prefix trie
//! - [`Catalog`] - the frozen, shareable collection with its indexes
//! - [`loader`] - JSON ingestion and the legacy-row filter
//!
//! # Example
//! ```
//! use moji_catalog::{Catalog, LoadOptions, SequenceKind};
//!
//! let json = r#"[
//!     {"emoji": "👦", "sequence_type": 1, "aliases": ["boy"], "tags": ["child"]}
//! ]"#;
//! let catalog = Catalog::from_json(json, &LoadOptions::default())?;
//! let boy = catalog.best_match("a 👦", 2).unwrap();
//! assert_eq!(boy.primary_alias(), "boy");
//! assert_eq!(boy.kind(), SequenceKind::BaseSkinGender);
//! # Ok::<(), moji_catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod emoji;
pub mod error;
pub mod loader;
pub mod modifier;
pub mod trie;

pub use catalog::Catalog;
#[cfg(feature = "bundled")]
pub use catalog::{BUNDLED_JSON, bundled};
pub use emoji::{Emoji, EmojiId, SequenceKind};
pub use error::CatalogError;
pub use loader::{LEGACY_PREFIXES, LoadOptions};
pub use modifier::{Fitzpatrick, Gender, PRESENTATION_SELECTOR, ZWJ};
pub use trie::{EmojiTrie, Matches};
