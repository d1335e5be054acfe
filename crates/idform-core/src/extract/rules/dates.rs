//! Date of birth extraction.
//!
//! Dates are returned exactly as printed; no reformatting is attempted.

use super::patterns::DOB_RULES;
use super::FieldExtractor;
use crate::extract::chain::{first_match, RuleMatch};
use crate::extract::text::NormalizedText;
use crate::models::field::Field;

/// Date of birth extractor.
#[derive(Debug, Clone, Default)]
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// First occurrence of the most specific date format present.
    pub fn find<'t>(&self, text: &'t str) -> Option<RuleMatch<'t>> {
        first_match(&DOB_RULES, text)
    }
}

impl FieldExtractor for DateExtractor {
    fn field(&self) -> Field {
        Field::Dob
    }

    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String> {
        self.find(doc.raw()).map(|m| m.value.to_string())
    }
}

/// Extract a date of birth from text.
pub fn extract_dob(text: &str) -> Option<String> {
    DateExtractor::new().find(text).map(|m| m.value.to_string())
}
