//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{QexError, Result};

/// Main configuration for the qex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QexConfig {
    /// PDF decoding configuration.
    pub pdf: PdfConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,

    /// Export configuration.
    pub export: ExportConfig,
}

/// PDF decoding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum text length before a document counts as text-bearing.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            min_text_length: 50,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Upload policy cap enforced by the CLI (the pipeline itself is
    /// size-agnostic).
    pub max_documents: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { max_documents: 100 }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Worksheet name in the spreadsheet export.
    pub sheet_name: String,

    /// Append a timestamp to generated output filenames.
    pub timestamped_names: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Quotes".to_string(),
            timestamped_names: true,
        }
    }
}

impl QexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| QexError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| QexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = QexConfig::default();
        assert_eq!(config.batch.max_documents, 100);
        assert_eq!(config.export.sheet_name, "Quotes");
        assert!(config.export.timestamped_names);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: QexConfig =
            serde_json::from_str(r#"{"batch": {"max_documents": 10}}"#).unwrap();
        assert_eq!(config.batch.max_documents, 10);
        assert_eq!(config.export.sheet_name, "Quotes");
    }
}
