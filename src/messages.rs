//! Localized message lookup so every label comes from one key/value table.
//!
//! Catalogs load from TOML (`key = "value"`) or JSON (`{"key": "value"}`)
//! files. A missing key resolves to an empty label rather than an error.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Keys the settings surface asks for.
pub const SETTINGS_MESSAGE_KEYS: &[&str] = &[
    "Office Dev Program",
    "Change theme",
    "view all permissions",
    "sign out",
    "Light",
    "Dark",
    "High Contrast",
    "Permissions",
    "Consent",
    "Cancel",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Io(String),
    Parse(String),
    UnsupportedFormat(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Parse(msg) => write!(f, "message catalog parse error: {msg}"),
            Self::UnsupportedFormat(ext) => {
                write!(f, "unsupported message catalog format: {ext}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct CatalogFile {
    messages: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in English catalog where every key maps to itself.
    pub fn english() -> Self {
        SETTINGS_MESSAGE_KEYS
            .iter()
            .map(|key| (key.to_string(), key.to_string()))
            .collect()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Label for `key`, or an empty string when the catalog lacks it.
    #[must_use]
    pub fn lookup(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(contents).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Ok(Self {
            messages: file.messages,
        })
    }

    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|err| CatalogError::Parse(err.to_string()))?;
        Ok(Self {
            messages: file.messages,
        })
    }

    /// Load a catalog file, picking the parser from the extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)
            .map_err(|err| CatalogError::Io(format!("{}: {err}", path.display())))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            Some(other) => Err(CatalogError::UnsupportedFormat(other.to_string())),
            None => Err(CatalogError::UnsupportedFormat(String::new())),
        }
    }

    /// Keys from [`SETTINGS_MESSAGE_KEYS`] this catalog does not define.
    pub fn missing_settings_keys(&self) -> Vec<&'static str> {
        SETTINGS_MESSAGE_KEYS
            .iter()
            .copied()
            .filter(|key| !self.messages.contains_key(*key))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
