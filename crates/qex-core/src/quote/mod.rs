//! Quote field extraction: schema, rules and the document mapper.

pub mod mapper;
pub mod rules;
pub mod schema;

pub use mapper::{MappedDocument, QuoteMapper};
pub use schema::{FieldKind, FieldSpec, QuoteSchema};
