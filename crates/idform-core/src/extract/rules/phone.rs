//! Mobile number extraction.

use super::patterns::PHONE_RULES;
use super::FieldExtractor;
use crate::extract::chain::first_match;
use crate::extract::text::NormalizedText;
use crate::models::field::Field;

/// Phone field extractor. Returns digits only.
#[derive(Debug, Clone, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn find(&self, text: &str) -> Option<String> {
        first_match(&PHONE_RULES, text)
            .map(|m| m.value.chars().filter(|c| c.is_ascii_digit()).collect())
    }
}

impl FieldExtractor for PhoneExtractor {
    fn field(&self) -> Field {
        Field::Phone
    }

    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String> {
        self.find(doc.raw())
    }
}

/// Extract a mobile number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().find(text)
}
