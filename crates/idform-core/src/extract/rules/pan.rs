//! PAN (Permanent Account Number) extraction.

use super::patterns::{PAN_RULES, PAN_STRUCTURE};
use super::FieldExtractor;
use crate::extract::chain::first_match;
use crate::extract::text::NormalizedText;
use crate::models::field::Field;

/// PAN field extractor. Rules are tried in precedence order; the first
/// match wins.
#[derive(Debug, Clone, Default)]
pub struct PanExtractor;

impl PanExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Find a PAN in raw text, with inner whitespace removed.
    pub fn find(&self, text: &str) -> Option<String> {
        first_match(&PAN_RULES, text)
            .map(|m| m.value.chars().filter(|c| !c.is_whitespace()).collect())
    }
}

impl FieldExtractor for PanExtractor {
    fn field(&self) -> Field {
        Field::Pan
    }

    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String> {
        self.find(doc.raw())
    }
}

/// Extract a PAN from text.
pub fn extract_pan(text: &str) -> Option<String> {
    PanExtractor::new().find(text)
}

/// Whether `code` has the exact PAN structure (five letters, four digits,
/// one letter).
pub fn is_valid_pan(code: &str) -> bool {
    PAN_STRUCTURE.is_match(code)
}
