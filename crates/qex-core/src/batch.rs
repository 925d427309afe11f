//! Batch pipeline: a set of uploaded documents to one tabular result.

use tracing::{debug, info, warn};

use crate::models::record::QuoteRecord;
use crate::pdf::{DocumentDecoder, PdfDecoder};
use crate::quote::mapper::{MappedDocument, QuoteMapper};

/// One uploaded document: original filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct QuoteDocument {
    /// Original filename, kept verbatim for the PDF column.
    pub filename: String,
    /// Raw document bytes.
    pub data: Vec<u8>,
}

impl QuoteDocument {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }
}

/// Ordered extraction results for a batch.
///
/// Entry `i` always corresponds to input document `i`: documents are
/// never skipped, reordered or deduplicated, even when extraction
/// yields entirely empty fields.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    records: Vec<QuoteRecord>,
}

impl BatchResult {
    /// Records in input order.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: QuoteRecord) {
        self.records.push(record);
    }

    /// Archive filename for every document, in input order.
    ///
    /// A document with a non-empty (trimmed) QuoteNumber becomes
    /// `{number}.pdf`; otherwise the positional fallback
    /// `Quote_{index+1:04}.pdf`. Colliding quote numbers are NOT
    /// deduplicated; the later archive entry wins.
    pub fn renamed_filenames(&self) -> Vec<String> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let quote_number = record.quote_number().trim();
                if quote_number.is_empty() {
                    format!("Quote_{:04}.pdf", idx + 1)
                } else {
                    format!("{}.pdf", quote_number)
                }
            })
            .collect()
    }
}

/// Sequential pipeline over a batch of documents.
///
/// The pipeline is size-agnostic; the upload cap is caller policy.
/// Decode failures never abort a batch - the document is processed as
/// an empty text body and the run continues.
pub struct BatchPipeline {
    mapper: QuoteMapper,
    decoder: Box<dyn DocumentDecoder>,
}

impl BatchPipeline {
    /// Create a pipeline with the standard PDF decoder.
    pub fn new() -> Self {
        Self::with_decoder(Box::new(PdfDecoder))
    }

    /// Create a pipeline with a custom decoder.
    pub fn with_decoder(decoder: Box<dyn DocumentDecoder>) -> Self {
        Self {
            mapper: QuoteMapper::new(),
            decoder,
        }
    }

    /// Decode and map a single document.
    pub fn process_document(&self, document: &QuoteDocument) -> MappedDocument {
        let text = self.decoder.decode(&document.data);
        if text.is_empty() {
            warn!("{}: no text decoded", document.filename);
        }
        self.mapper.map(&text, &document.filename)
    }

    /// Process every document in input order.
    pub fn run(&self, documents: &[QuoteDocument]) -> BatchResult {
        info!("Processing batch of {} documents", documents.len());

        let mut result = BatchResult::default();
        for document in documents {
            let mapped = self.process_document(document);
            debug!(
                "{}: {} fields matched",
                document.filename, mapped.matched_fields
            );
            result.push(mapped.record);
        }
        result
    }
}

impl Default for BatchPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::DocumentDecoder;
    use pretty_assertions::assert_eq;

    /// Test decoder: document bytes already are the text.
    struct PlainTextDecoder;

    impl DocumentDecoder for PlainTextDecoder {
        fn decode(&self, data: &[u8]) -> String {
            String::from_utf8(data.to_vec()).unwrap_or_default()
        }
    }

    fn plain_pipeline() -> BatchPipeline {
        BatchPipeline::with_decoder(Box::new(PlainTextDecoder))
    }

    fn doc(filename: &str, text: &str) -> QuoteDocument {
        QuoteDocument::new(filename, text.as_bytes().to_vec())
    }

    #[test]
    fn test_preserves_input_order() {
        let docs = vec![
            doc("a.pdf", "Quote #: A-1\n"),
            doc("b.pdf", "Quote #: B-2\n"),
            doc("c.pdf", "Quote #: C-3\n"),
        ];

        let result = plain_pipeline().run(&docs);

        assert_eq!(result.len(), 3);
        let numbers: Vec<_> = result
            .records()
            .iter()
            .map(|r| r.quote_number().to_string())
            .collect();
        assert_eq!(numbers, vec!["A-1", "B-2", "C-3"]);
        let files: Vec<_> = result
            .records()
            .iter()
            .map(|r| r.get("PDF").unwrap().to_string())
            .collect();
        assert_eq!(files, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_undecodable_document_keeps_its_slot() {
        let docs = vec![
            doc("ok.pdf", "Quote #: OK-1\n"),
            QuoteDocument::new("broken.pdf", vec![0xff, 0xfe, 0x00]),
            doc("last.pdf", "Quote #: LAST-9\n"),
        ];

        let result = plain_pipeline().run(&docs);

        assert_eq!(result.len(), 3);
        assert_eq!(result.records()[1].quote_number(), "");
        assert_eq!(result.records()[1].get("Country"), Some("USA"));
        assert_eq!(result.records()[2].quote_number(), "LAST-9");
    }

    #[test]
    fn test_renamed_filenames() {
        let docs = vec![
            doc("one.pdf", "Quote #: Q1\n"),
            doc("two.pdf", "nothing recognizable"),
            doc("three.pdf", "Quote #: Q3\n"),
        ];

        let result = plain_pipeline().run(&docs);

        assert_eq!(
            result.renamed_filenames(),
            vec!["Q1.pdf", "Quote_0002.pdf", "Q3.pdf"]
        );
    }

    #[test]
    fn test_colliding_quote_numbers_are_not_deduplicated() {
        let docs = vec![
            doc("one.pdf", "Quote #: DUP-1\n"),
            doc("two.pdf", "Quote #: DUP-1\n"),
        ];

        let result = plain_pipeline().run(&docs);

        assert_eq!(result.renamed_filenames(), vec!["DUP-1.pdf", "DUP-1.pdf"]);
    }

    #[test]
    fn test_policy_sized_batch() {
        let docs: Vec<_> = (0..100)
            .map(|i| doc(&format!("{i}.pdf"), &format!("Quote #: N-{i}\n")))
            .collect();

        let result = plain_pipeline().run(&docs);

        assert_eq!(result.len(), 100);
        assert_eq!(result.records()[99].quote_number(), "N-99");
    }
}
