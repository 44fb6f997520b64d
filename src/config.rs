//! Header rule configuration.
//!
//! [`HeaderRules`] names the headers that get protocol treatment beyond plain
//! multi-value storage: headers that may only ever hold one value, and headers
//! that must be written as one wire line per value instead of being folded
//! into a single comma-separated line.
//!
//! Rules can be built in code, parsed from TOML, or installed once as the
//! process-wide default picked up by [`Headers::new`](crate::http::headers::Headers::new).

use indexmap::IndexSet;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::http::name::normalize_name;
use crate::http::{CONTENT_TYPE, LOCATION, SET_COOKIE};

static RULES: OnceCell<Arc<HeaderRules>> = OnceCell::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse header rules: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Rule sets applied by a [`Headers`](crate::http::headers::Headers) collection.
///
/// ```toml
/// single_value_names = ["Content-Type", "Location", "Content-Length"]
/// folded_multi_names = ["Set-Cookie"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderRules {
    /// Headers that hold at most one value. Adding to them overwrites.
    single_value_names: IndexSet<String>,

    /// Headers serialized as one raw line per value and never comma-split
    /// on ingestion.
    folded_multi_names: IndexSet<String>,
}

impl Default for HeaderRules {
    fn default() -> Self {
        Self {
            // RFC 2616 14.17 and 14.30
            single_value_names: [CONTENT_TYPE, LOCATION]
                .into_iter()
                .map(String::from)
                .collect(),

            // RFC 6265: Set-Cookie uses "," inside its own syntax
            folded_multi_names: [SET_COOKIE].into_iter().map(String::from).collect(),
        }
    }
}

impl HeaderRules {
    /// Rules with both sets empty.
    pub fn empty() -> Self {
        Self {
            single_value_names: IndexSet::new(),
            folded_multi_names: IndexSet::new(),
        }
    }

    pub fn with_single_value_name(mut self, name: impl AsRef<str>) -> Self {
        self.single_value_names.insert(normalize_name(name.as_ref()));
        self
    }

    pub fn with_folded_multi_name(mut self, name: impl AsRef<str>) -> Self {
        self.folded_multi_names.insert(normalize_name(name.as_ref()));
        self
    }

    /// Canonical single-value names, in configuration order.
    pub fn single_value_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.single_value_names.iter().map(String::as_str)
    }

    /// Canonical folded-multi names, in configuration order.
    pub fn folded_multi_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.folded_multi_names.iter().map(String::as_str)
    }

    /// Expects a canonical name.
    pub fn is_single_value(&self, name: &str) -> bool {
        self.single_value_names.contains(name)
    }

    /// Expects a canonical name.
    pub fn is_folded_multi(&self, name: &str) -> bool {
        self.folded_multi_names.contains(name)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules = toml::from_str::<HeaderRules>(content)?;
        Ok(rules.normalized())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`HeaderRules::load`] but falls back to the default rules when the
    /// file is missing or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(rules) => rules,
            Err(err) => {
                tracing::warn!(path = %path.as_ref().display(), error = %err, "falling back to default header rules");
                HeaderRules::default()
            }
        }
    }

    fn normalized(self) -> Self {
        Self {
            single_value_names: self
                .single_value_names
                .iter()
                .map(|name| normalize_name(name))
                .collect(),
            folded_multi_names: self
                .folded_multi_names
                .iter()
                .map(|name| normalize_name(name))
                .collect(),
        }
    }
}

/// Installs the process-wide default rules.
///
/// Only the first call wins; later calls hand their rules back as the error.
pub fn set_rules(rules: HeaderRules) -> Result<(), HeaderRules> {
    RULES
        .set(Arc::new(rules))
        .map_err(|rejected| Arc::try_unwrap(rejected).unwrap_or_else(|shared| (*shared).clone()))
}

/// The process-wide default rules, [`HeaderRules::default`] unless
/// [`set_rules`] ran first.
pub fn rules() -> Arc<HeaderRules> {
    RULES
        .get_or_init(|| Arc::new(HeaderRules::default()))
        .clone()
}
