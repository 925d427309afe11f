//! Schema-driven mapping from document text to an output record.

use std::time::Instant;

use tracing::{debug, info};

use super::rules::{find_field, normalize_date};
use super::schema::{FieldKind, QuoteSchema};
use crate::models::record::QuoteRecord;

/// Result of mapping one document.
#[derive(Debug, Clone)]
pub struct MappedDocument {
    /// The fully-populated record.
    pub record: QuoteRecord,
    /// How many pattern fields actually matched the text.
    pub matched_fields: usize,
    /// Extraction warnings (advisory only).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Maps document text onto the quote field schema.
///
/// Mapping is total: any input, including an empty or unreadable text
/// body, produces a record with every column populated from defaults.
pub struct QuoteMapper {
    schema: &'static QuoteSchema,
}

impl QuoteMapper {
    /// Create a mapper over the process-wide schema.
    pub fn new() -> Self {
        Self {
            schema: QuoteSchema::global(),
        }
    }

    /// Map one document's text and filename to a record.
    pub fn map(&self, text: &str, filename: &str) -> MappedDocument {
        let start = Instant::now();
        let mut warnings = Vec::new();
        let mut matched_fields = 0;

        info!(
            "Mapping {} from {} characters of text",
            filename,
            text.len()
        );

        if text.trim().is_empty() {
            warnings.push("document has no extractable text".to_string());
        }

        let mut values = Vec::with_capacity(self.schema.len());
        for spec in self.schema.specs() {
            let value = match spec.kind {
                FieldKind::Pattern => match find_field(text, &spec.rules) {
                    Some(found) => {
                        matched_fields += 1;
                        found
                    }
                    None => spec.default.to_string(),
                },
                FieldKind::Date => {
                    let raw = match find_field(text, &spec.rules) {
                        Some(found) => {
                            matched_fields += 1;
                            found
                        }
                        None => spec.default.to_string(),
                    };
                    normalize_date(&raw)
                }
                FieldKind::Filename => filename.to_string(),
                FieldKind::Constant(value) => value.to_string(),
            };
            values.push(value);
        }

        let record = QuoteRecord::from_values(values);

        if record.quote_number().trim().is_empty() {
            warnings.push("could not extract quote number".to_string());
        }

        debug!(
            "Mapped {} with {} matched fields",
            filename, matched_fields
        );

        MappedDocument {
            record,
            matched_fields,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for QuoteMapper {
    fn default() -> Self {
        Self::new()
    }
}
