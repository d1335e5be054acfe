//! Core library for identity-document form filling.
//!
//! This crate provides:
//! - Field extraction from OCR text (name, date of birth, address, Aadhaar,
//!   PAN, phone, pincode) with a binary confidence per field
//! - Template registry and projection of extracted records onto form templates
//! - Optional named-entity recognition seam and script-based language detection
//! - PDF text/image extraction and a pure Rust OCR provider (`native` feature)

pub mod error;
pub mod extract;
pub mod language;
pub mod models;
pub mod ner;
pub mod ocr;
pub mod pdf;

pub use error::{IdformError, Result};
pub use extract::{ExtractionRecord, FieldValue, FilledForm, FormExtractor};
pub use language::detect_language;
pub use models::config::IdformConfig;
pub use models::field::Field;
pub use models::template::{RelatedLink, Template, TemplateRegistry};
pub use ner::{EntityLabel, EntityRecognizer, EntitySpan, LabeledNameRecognizer};
pub use ocr::OcrProvider;
#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
pub use pdf::{PdfExtractor, PdfProcessor, PdfType};
