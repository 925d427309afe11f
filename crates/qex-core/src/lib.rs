//! Core library for quote PDF extraction.
//!
//! This crate provides:
//! - PDF text decoding (lopdf + pdf-extract)
//! - Regex field extraction with ordered fallback rules
//! - A fixed 42-column quote record schema
//! - A sequential batch pipeline with order-preserving results

pub mod batch;
pub mod error;
pub mod models;
pub mod pdf;
pub mod quote;

pub use batch::{BatchPipeline, BatchResult, QuoteDocument};
pub use error::{PdfError, QexError, Result};
pub use models::config::QexConfig;
pub use models::record::{QuoteRecord, FIELD_COUNT, FIELD_NAMES};
pub use pdf::{DocumentDecoder, PdfDecoder, PdfExtractor, TextExtractor};
pub use quote::{MappedDocument, QuoteMapper, QuoteSchema};
