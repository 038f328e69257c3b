#![forbid(unsafe_code)]

//! moji public facade crate.
//!
//! Binds the `moji-text` operations to a process-wide catalog that is loaded
//! once, on first use, according to [`MojiConfig::from_env`]. Use a [`Moji`]
//! value directly for an explicit configuration or catalog.
//!
//! # Example
//! ```
//! let text = "Launch \u{1F680} with \u{1F44D}\u{1F3FD}";
//! assert_eq!(moji::to_aliases_with(text, moji::FitzpatrickAction::Parse),
//!            "Launch :rocket: with :+1|type_4:");
//! assert_eq!(moji::to_unicode(":rocket: &#x1f525;"), "\u{1F680} \u{1F525}");
//! assert!(moji::is_only_emojis("\u{1F680}\u{1F525}"));
//! ```

pub mod config;

use std::sync::OnceLock;

// --- Re-exports ------------------------------------------------------------

pub use config::{MojiConfig, MojiConfigError, MojiConfigParse};
pub use moji_catalog::{
    Catalog, CatalogError, Emoji, Fitzpatrick, Gender, LoadOptions, SequenceKind,
};
pub use moji_text::{EmojiMatch, FitzpatrickAction};

use moji_catalog::BUNDLED_JSON;

// --- Configured instance ---------------------------------------------------

/// A catalog together with the configuration that selected it.
#[derive(Debug, Clone)]
pub struct Moji {
    config: MojiConfig,
    catalog: Catalog,
}

impl Moji {
    /// Load the catalog `config` names: the file at `catalog_path` when set,
    /// the bundled catalog otherwise.
    ///
    /// # Errors
    ///
    /// Returns the [`CatalogError`] of a configured file that cannot be read
    /// or holds invalid records. No catalog is substituted.
    pub fn new(config: MojiConfig) -> Result<Self, CatalogError> {
        let options = config.load_options();
        let catalog = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::from_path(path, &options)?;
                tracing::info!(
                    source = %path.display(),
                    emojis = catalog.len(),
                    legacy_filter = options.legacy_filter,
                    "emoji catalog loaded"
                );
                catalog
            }
            None => Self::bundled_catalog(&options)?,
        };
        Ok(Self { config, catalog })
    }

    /// Use an already built catalog; `config.catalog_path` is ignored.
    #[must_use]
    pub fn with_catalog(config: MojiConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    fn bundled_catalog(options: &LoadOptions) -> Result<Catalog, CatalogError> {
        let catalog = Catalog::from_json(BUNDLED_JSON, options)?;
        tracing::info!(
            source = "bundled",
            emojis = catalog.len(),
            legacy_filter = options.legacy_filter,
            "emoji catalog loaded"
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn config(&self) -> &MojiConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Aliases using the configured skin-tone action and pad separator.
    #[must_use]
    pub fn to_aliases(&self, text: &str) -> String {
        self.to_aliases_with(text, self.config.fitzpatrick_action)
    }

    /// Aliases with an explicit skin-tone action; under `ParseAndAddSpace`
    /// skin-toned aliases are framed with the configured separator.
    #[must_use]
    pub fn to_aliases_with(&self, text: &str, action: FitzpatrickAction) -> String {
        match action {
            FitzpatrickAction::ParseAndAddSpace => {
                moji_text::to_aliases_padded(&self.catalog, text, self.config.pad_separator)
            }
            action => moji_text::to_aliases(&self.catalog, text, action),
        }
    }

    #[must_use]
    pub fn to_html_decimal(&self, text: &str) -> String {
        self.to_html_decimal_with(text, self.config.fitzpatrick_action)
    }

    #[must_use]
    pub fn to_html_decimal_with(&self, text: &str, action: FitzpatrickAction) -> String {
        moji_text::to_html_decimal(&self.catalog, text, action)
    }

    #[must_use]
    pub fn to_html_hexadecimal(&self, text: &str) -> String {
        self.to_html_hexadecimal_with(text, self.config.fitzpatrick_action)
    }

    #[must_use]
    pub fn to_html_hexadecimal_with(&self, text: &str, action: FitzpatrickAction) -> String {
        moji_text::to_html_hexadecimal(&self.catalog, text, action)
    }

    #[must_use]
    pub fn to_unicode(&self, text: &str) -> String {
        moji_text::to_unicode(&self.catalog, text)
    }

    #[must_use]
    pub fn remove_all(&self, text: &str) -> String {
        moji_text::remove_all(&self.catalog, text)
    }

    #[must_use]
    pub fn replace_all(&self, text: &str, replacement: &str) -> String {
        moji_text::replace_all(&self.catalog, text, replacement)
    }

    #[must_use]
    pub fn remove_set<'e>(&self, text: &str, emojis: impl IntoIterator<Item = &'e Emoji>) -> String {
        moji_text::remove_set(&self.catalog, text, emojis)
    }

    #[must_use]
    pub fn keep_only_set<'e>(
        &self,
        text: &str,
        emojis: impl IntoIterator<Item = &'e Emoji>,
    ) -> String {
        moji_text::keep_only_set(&self.catalog, text, emojis)
    }

    /// Replace each match with `formatter(&match)`.
    pub fn replace_with<'a, F, S>(&'a self, text: &'a str, formatter: F) -> String
    where
        F: FnMut(&EmojiMatch<'a>) -> S,
        S: AsRef<str>,
    {
        moji_text::replace_emojis(&self.catalog, text, formatter)
    }

    /// Matches in document order; a `limit` of zero means no limit.
    #[must_use]
    pub fn find_matches<'a>(&'a self, text: &'a str, limit: usize) -> Vec<EmojiMatch<'a>> {
        moji_text::find_matches(&self.catalog, text, limit)
    }

    #[must_use]
    pub fn find_match_strings<'a>(&'a self, text: &'a str, limit: usize) -> Vec<&'a str> {
        moji_text::find_match_strings(&self.catalog, text, limit)
    }

    #[must_use]
    pub fn is_emoji(&self, text: &str) -> bool {
        moji_text::is_emoji(&self.catalog, text)
    }

    #[must_use]
    pub fn contains_emoji(&self, text: &str) -> bool {
        moji_text::contains_emoji(&self.catalog, text)
    }

    #[must_use]
    pub fn is_only_emojis(&self, text: &str) -> bool {
        moji_text::is_only_emojis(&self.catalog, text)
    }

    /// Entry for `alias`, with or without surrounding colons.
    #[must_use]
    pub fn get_for_alias(&self, alias: &str) -> Option<&Emoji> {
        self.catalog.get_for_alias(alias)
    }

    /// Entries tagged `tag`, in catalog order.
    #[must_use]
    pub fn get_for_tag(&self, tag: &str) -> Vec<&Emoji> {
        self.catalog.get_for_tag(tag).collect()
    }
}

// --- Process-wide instance -------------------------------------------------

/// The process-wide instance, configured from the environment on first use.
///
/// Configuration diagnostics are logged at `warn`. The free functions have
/// no error channel, so a `MOJI_CATALOG_PATH` that fails to load is logged
/// at `warn` and the bundled catalog is used with the rest of the
/// configuration unchanged. Use [`Moji::new`] to see the error instead.
///
/// # Panics
///
/// Panics if the bundled catalog is invalid, which the crate's tests rule
/// out.
#[must_use]
pub fn instance() -> &'static Moji {
    static INSTANCE: OnceLock<Moji> = OnceLock::new();
    INSTANCE.get_or_init(|| instance_from(MojiConfig::from_env_with_diagnostics()))
}

fn instance_from(parsed: MojiConfigParse) -> Moji {
    for err in &parsed.errors {
        tracing::warn!(field = err.field, value = %err.value, "{}", err.message);
    }
    let config = parsed.config;
    let bundled = MojiConfig {
        catalog_path: None,
        ..config.clone()
    };
    let moji = match (&config.catalog_path, Moji::new(config.clone())) {
        (_, Ok(moji)) => return moji,
        (Some(path), Err(err)) => {
            tracing::warn!(
                source = %path.display(),
                error = %err,
                "emoji catalog failed to load, using bundled catalog"
            );
            Moji::new(bundled)
        }
        (None, Err(err)) => Err(err),
    };
    match moji {
        Ok(moji) => moji,
        Err(err) => panic!("bundled emoji catalog must be valid: {err}"),
    }
}

/// The process-wide catalog.
#[must_use]
pub fn catalog() -> &'static Catalog {
    instance().catalog()
}

/// Replace emoji with aliases, honouring `MOJI_FITZPATRICK_ACTION`.
#[must_use]
pub fn to_aliases(text: &str) -> String {
    instance().to_aliases(text)
}

#[must_use]
pub fn to_aliases_with(text: &str, action: FitzpatrickAction) -> String {
    instance().to_aliases_with(text, action)
}

#[must_use]
pub fn to_html_decimal(text: &str) -> String {
    instance().to_html_decimal(text)
}

#[must_use]
pub fn to_html_decimal_with(text: &str, action: FitzpatrickAction) -> String {
    instance().to_html_decimal_with(text, action)
}

#[must_use]
pub fn to_html_hexadecimal(text: &str) -> String {
    instance().to_html_hexadecimal(text)
}

#[must_use]
pub fn to_html_hexadecimal_with(text: &str, action: FitzpatrickAction) -> String {
    instance().to_html_hexadecimal_with(text, action)
}

/// Replace aliases and HTML entities with unicode.
#[must_use]
pub fn to_unicode(text: &str) -> String {
    instance().to_unicode(text)
}

#[must_use]
pub fn remove_all(text: &str) -> String {
    instance().remove_all(text)
}

#[must_use]
pub fn replace_all(text: &str, replacement: &str) -> String {
    instance().replace_all(text, replacement)
}

#[must_use]
pub fn remove_set<'e>(text: &str, emojis: impl IntoIterator<Item = &'e Emoji>) -> String {
    instance().remove_set(text, emojis)
}

#[must_use]
pub fn keep_only_set<'e>(text: &str, emojis: impl IntoIterator<Item = &'e Emoji>) -> String {
    instance().keep_only_set(text, emojis)
}

pub fn replace_with<'a, F, S>(text: &'a str, formatter: F) -> String
where
    F: FnMut(&EmojiMatch<'a>) -> S,
    S: AsRef<str>,
{
    instance().replace_with(text, formatter)
}

#[must_use]
pub fn find_matches(text: &str, limit: usize) -> Vec<EmojiMatch<'_>> {
    instance().find_matches(text, limit)
}

#[must_use]
pub fn find_match_strings(text: &str, limit: usize) -> Vec<&str> {
    instance().find_match_strings(text, limit)
}

#[must_use]
pub fn is_emoji(text: &str) -> bool {
    instance().is_emoji(text)
}

#[must_use]
pub fn contains_emoji(text: &str) -> bool {
    instance().contains_emoji(text)
}

#[must_use]
pub fn is_only_emojis(text: &str) -> bool {
    instance().is_only_emojis(text)
}

#[must_use]
pub fn get_for_alias(alias: &str) -> Option<&'static Emoji> {
    instance().get_for_alias(alias)
}

#[must_use]
pub fn get_for_tag(tag: &str) -> Vec<&'static Emoji> {
    instance().get_for_tag(tag)
}
