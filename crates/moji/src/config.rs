#![forbid(unsafe_code)]

//! Environment-driven configuration for the process-wide [`Moji`](crate::Moji).
//!
//! | variable | values | default |
//! |---|---|---|
//! | `MOJI_CATALOG_PATH` | path to a JSON catalog | bundled catalog |
//! | `MOJI_LEGACY_FILTER` | `1/0/true/false/yes/no/on/off` | `true` |
//! | `MOJI_FITZPATRICK_ACTION` | `parse/parse_and_add_space/remove/ignore` | `parse` |
//! | `MOJI_PAD_SEPARATOR` | one character | space |
//!
//! Invalid values keep the default and are reported in
//! [`MojiConfigParse::errors`] instead of failing.

use std::env;
use std::fmt;
use std::path::PathBuf;

use moji_catalog::LoadOptions;
use moji_text::{DEFAULT_SEPARATOR, FitzpatrickAction};

pub const ENV_MOJI_CATALOG_PATH: &str = "MOJI_CATALOG_PATH";
pub const ENV_MOJI_LEGACY_FILTER: &str = "MOJI_LEGACY_FILTER";
pub const ENV_MOJI_FITZPATRICK_ACTION: &str = "MOJI_FITZPATRICK_ACTION";
pub const ENV_MOJI_PAD_SEPARATOR: &str = "MOJI_PAD_SEPARATOR";

/// Separators that would be read back as alias or entity syntax.
const RESERVED_SEPARATORS: [char; 4] = [':', '|', '&', ';'];

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MojiConfig {
    /// JSON catalog to load instead of the bundled one.
    pub catalog_path: Option<PathBuf>,
    /// Drop precomposed gender-prefixed rows while loading.
    pub legacy_filter: bool,
    /// Skin-tone handling for the one-argument conversions.
    pub fitzpatrick_action: FitzpatrickAction,
    /// Frame for skin-toned replacements under
    /// [`FitzpatrickAction::ParseAndAddSpace`].
    pub pad_separator: char,
}

impl Default for MojiConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            legacy_filter: true,
            fitzpatrick_action: FitzpatrickAction::Parse,
            pad_separator: DEFAULT_SEPARATOR,
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct MojiConfigParse {
    pub config: MojiConfig,
    pub errors: Vec<MojiConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MojiConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl MojiConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for MojiConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for MojiConfigError {}

impl MojiConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> MojiConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> MojiConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<MojiConfigError>> {
        let mut errors = Vec::new();
        if RESERVED_SEPARATORS.contains(&self.pad_separator) {
            errors.push(MojiConfigError::new(
                "pad_separator",
                self.pad_separator.to_string(),
                "separator must not be one of : | & ;",
            ));
        }
        if let Some(path) = &self.catalog_path
            && path.as_os_str().is_empty()
        {
            errors.push(MojiConfigError::new(
                "catalog_path",
                "",
                "path must not be empty",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Loader options derived from this config.
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            legacy_filter: self.legacy_filter,
        }
    }
}

fn from_env_with<F>(mut get: F) -> MojiConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = MojiConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_MOJI_CATALOG_PATH) {
        config.catalog_path = Some(PathBuf::from(value));
    }

    if let Some(value) = get(ENV_MOJI_LEGACY_FILTER) {
        match parse_bool(&value) {
            Some(parsed) => config.legacy_filter = parsed,
            None => errors.push(MojiConfigError::new(
                "legacy_filter",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_MOJI_FITZPATRICK_ACTION) {
        match FitzpatrickAction::parse(&value) {
            Some(parsed) => config.fitzpatrick_action = parsed,
            None => errors.push(MojiConfigError::new(
                "fitzpatrick_action",
                value,
                "expected parse|parse_and_add_space|remove|ignore",
            )),
        }
    }

    if let Some(value) = get(ENV_MOJI_PAD_SEPARATOR) {
        match parse_char(&value) {
            Some(parsed) => config.pad_separator = parsed,
            None => errors.push(MojiConfigError::new(
                "pad_separator",
                value,
                "expected exactly one character",
            )),
        }
    }

    // Values that fail validation fall back to their defaults.
    if let Err(validation) = config.validate() {
        for err in &validation {
            match err.field {
                "pad_separator" => config.pad_separator = DEFAULT_SEPARATOR,
                "catalog_path" => config.catalog_path = None,
                _ => {}
            }
        }
        errors.extend(validation);
    }

    MojiConfigParse { config, errors }
}

#[inline]
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Exactly one `char`; surrounding whitespace is kept so a space works.
#[inline]
fn parse_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(env: &HashMap<&str, &str>) -> MojiConfigParse {
        from_env_with(|key| env.get(key).map(|value| value.to_string()))
    }

    #[test]
    fn defaults_when_unset() {
        let parsed = parse(&HashMap::new());
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config, MojiConfig::default());
        assert!(parsed.config.legacy_filter);
        assert_eq!(parsed.config.pad_separator, ' ');
        assert_eq!(parsed.config.fitzpatrick_action, FitzpatrickAction::Parse);
    }

    #[test]
    fn reads_every_variable() {
        let mut env = HashMap::new();
        env.insert(ENV_MOJI_CATALOG_PATH, "/tmp/emojis.json");
        env.insert(ENV_MOJI_LEGACY_FILTER, "off");
        env.insert(ENV_MOJI_FITZPATRICK_ACTION, "ignore");
        env.insert(ENV_MOJI_PAD_SEPARATOR, "_");

        let parsed = parse(&env);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let config = parsed.config;
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/emojis.json")));
        assert!(!config.legacy_filter);
        assert_eq!(config.fitzpatrick_action, FitzpatrickAction::Ignore);
        assert_eq!(config.pad_separator, '_');
        assert_eq!(config.load_options(), LoadOptions::unfiltered());
    }

    #[test]
    fn invalid_values_reported_and_defaulted() {
        let mut env = HashMap::new();
        env.insert(ENV_MOJI_LEGACY_FILTER, "maybe");
        env.insert(ENV_MOJI_FITZPATRICK_ACTION, "drop");
        env.insert(ENV_MOJI_PAD_SEPARATOR, "--");

        let parsed = parse(&env);
        assert!(parsed.errors.iter().any(|err| err.field == "legacy_filter"));
        assert!(parsed.errors.iter().any(|err| err.field == "fitzpatrick_action"));
        assert!(parsed.errors.iter().any(|err| err.field == "pad_separator"));
        assert_eq!(parsed.config, MojiConfig::default());
    }

    #[test]
    fn reserved_separator_fails_validation() {
        let mut env = HashMap::new();
        env.insert(ENV_MOJI_PAD_SEPARATOR, ":");
        env.insert(ENV_MOJI_CATALOG_PATH, "");

        let parsed = parse(&env);
        assert_eq!(parsed.errors.len(), 2);
        assert_eq!(parsed.config.pad_separator, ' ');
        assert_eq!(parsed.config.catalog_path, None);
        assert_eq!(
            parsed.errors[0].to_string(),
            "pad_separator=: (separator must not be one of : | & ;)"
        );
    }

    #[test]
    fn space_separator_is_accepted() {
        let mut env = HashMap::new();
        env.insert(ENV_MOJI_PAD_SEPARATOR, " ");
        assert!(parse(&env).errors.is_empty());
        assert_eq!(parse_char("\u{3000}"), Some('\u{3000}'));
        assert_eq!(parse_char(""), None);
    }
}
