//! Toolkit configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to parse toolkit configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolkitConfig {
    /// localStorage key holding the form snapshot
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Filename for the generated-document download
    #[serde(default = "default_document_filename")]
    pub document_filename: String,
    #[serde(default = "default_card_png_filename")]
    pub card_png_filename: String,
    #[serde(default = "default_card_pdf_filename")]
    pub card_pdf_filename: String,
    /// BCP 47 locale for the date stamp; the browser default when unset
    #[serde(default)]
    pub date_locale: Option<String>,
}

fn default_storage_key() -> String {
    "ltp-state".to_string()
}

fn default_document_filename() -> String {
    "legal-document.txt".to_string()
}

fn default_card_png_filename() -> String {
    "id-rights-card.png".to_string()
}

fn default_card_pdf_filename() -> String {
    "id-rights-card.pdf".to_string()
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            document_filename: default_document_filename(),
            card_png_filename: default_card_png_filename(),
            card_pdf_filename: default_card_pdf_filename(),
            date_locale: None,
        }
    }
}

impl ToolkitConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ToolkitConfig::from_json("{}").unwrap(), ToolkitConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            ToolkitConfig::from_json(r#"{"storageKey": "ltp-test", "dateLocale": "en-GB"}"#)
                .unwrap();
        assert_eq!(config.storage_key, "ltp-test");
        assert_eq!(config.date_locale.as_deref(), Some("en-GB"));
        assert_eq!(config.document_filename, "legal-document.txt");
    }

    #[test]
    fn test_invalid_json() {
        let err = ToolkitConfig::from_json("storageKey=x").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse toolkit configuration"));
    }
}
