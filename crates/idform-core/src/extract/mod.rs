//! Identity-document field extraction.

pub mod chain;
mod orchestrator;
mod record;
pub mod rules;
pub mod text;

pub use orchestrator::FormExtractor;
pub use record::{field_confidence, ExtractionRecord, FieldValue, FilledForm};
