//! PDF processing module.

mod extractor;

pub use extractor::{PdfDecoder, PdfExtractor};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text extraction implementations.
pub trait TextExtractor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF, in page order.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// The text-decoding capability used by the batch pipeline.
///
/// Contract: decoding never fails - any unreadable document yields an
/// empty string, which downstream treats as "document with no
/// extractable fields". Implementations must not panic on arbitrary
/// bytes.
pub trait DocumentDecoder {
    /// Decode raw document bytes into text.
    fn decode(&self, data: &[u8]) -> String;
}
