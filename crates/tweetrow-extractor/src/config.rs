//! Configuration for the Extractor

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Which post the entity unpacker and place normalizer read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityScope {
    /// The canonical post (the reposted or quoted payload, if any)
    #[default]
    Canonical,
    /// The outer input post
    Input,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Replacement for each NUL character in persisted strings
    pub null_replacement: String,

    /// strftime format of the source `created_at` fields
    pub source_timestamp_format: String,

    /// strftime format written to the `created_at` columns
    pub output_timestamp_format: String,

    /// Post the entity and place stages read from
    pub entity_scope: EntityScope,

    /// Also emit the canonical author when the input wraps another post
    pub include_canonical_author: bool,

    /// Read entities from the extended payloads when the post has them;
    /// off by default, so only the `entities` block is read
    pub prefer_extended_entities: bool,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.null_replacement.contains('\0') {
            return Err("null_replacement must not contain a NUL character".to_string());
        }
        validate_format("source_timestamp_format", &self.source_timestamp_format)?;
        validate_format("output_timestamp_format", &self.output_timestamp_format)?;
        Ok(())
    }
}

fn validate_format(name: &str, format: &str) -> Result<(), String> {
    if format.trim().is_empty() {
        return Err(format!("{} must not be empty", name));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(format!("{} is not a valid strftime format: {}", name, format));
    }
    Ok(())
}

impl Default for ExtractorConfig {
    /// Canonical-post entities from the `entities` block, both authors
    fn default() -> Self {
        Self {
            null_replacement: " ".to_string(),
            source_timestamp_format: "%a %b %d %H:%M:%S %z %Y".to_string(),
            output_timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            entity_scope: EntityScope::Canonical,
            include_canonical_author: true,
            prefer_extended_entities: false,
        }
    }
}

impl ExtractorConfig {
    /// Input-scoped preset: entities and place come from the outer post,
    /// only the input author is emitted
    pub fn input_scoped() -> Self {
        Self {
            entity_scope: EntityScope::Input,
            include_canonical_author: false,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
