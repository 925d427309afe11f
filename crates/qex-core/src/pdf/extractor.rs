//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{DocumentDecoder, Result, TextExtractor};
use crate::error::PdfError;

/// PDF text extractor backed by lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let page_count = self.page_count() as usize;
        if page == 0 || page as usize > page_count {
            return Err(PdfError::InvalidPage(page));
        }

        // pdf_extract yields one flat text body; approximate the page
        // portion by an even line split.
        let full_text = self.extract_text()?;
        let lines: Vec<&str> = full_text.lines().collect();

        let lines_per_page = lines.len() / page_count;
        let start = ((page - 1) as usize) * lines_per_page;
        let end = (page as usize) * lines_per_page;

        Ok(lines[start.min(lines.len())..end.min(lines.len())].join("\n"))
    }
}

/// The default [`DocumentDecoder`]: PDF bytes to text, empty on failure.
pub struct PdfDecoder;

impl DocumentDecoder for PdfDecoder {
    fn decode(&self, data: &[u8]) -> String {
        let mut extractor = PdfExtractor::new();
        if let Err(e) = extractor.load(data) {
            warn!("PDF decode failed, substituting empty text: {}", e);
            return String::new();
        }
        match extractor.extract_text() {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF text extraction failed, substituting empty text: {}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(extractor.load(b"definitely not a pdf").is_err());
    }

    #[test]
    fn test_decoder_is_lossy_on_garbage() {
        let decoder = PdfDecoder;
        assert_eq!(decoder.decode(b"definitely not a pdf"), "");
        assert_eq!(decoder.decode(&[]), "");
        assert_eq!(decoder.decode(&[0xff, 0xfe, 0x00, 0x01]), "");
    }
}
