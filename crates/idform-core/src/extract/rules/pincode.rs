//! Postal index number extraction.

use super::patterns::PINCODE_RULES;
use super::FieldExtractor;
use crate::extract::chain::first_match;
use crate::extract::text::NormalizedText;
use crate::models::field::Field;

/// Pincode field extractor. Values are returned as printed.
#[derive(Debug, Clone, Default)]
pub struct PincodeExtractor;

impl PincodeExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn find(&self, text: &str) -> Option<String> {
        first_match(&PINCODE_RULES, text).map(|m| m.value.to_string())
    }
}

impl FieldExtractor for PincodeExtractor {
    fn field(&self) -> Field {
        Field::Pincode
    }

    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String> {
        self.find(doc.raw())
    }
}

/// Extract a pincode from text.
pub fn extract_pincode(text: &str) -> Option<String> {
    PincodeExtractor::new().find(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct() {
        assert_eq!(
            extract_pincode("12 MG Road, Bengaluru 560001"),
            Some("560001".to_string())
        );
    }

    #[test]
    fn test_labeled_with_space() {
        assert_eq!(extract_pincode("PIN Code: 560 001"), Some("560 001".to_string()));
    }

    #[test]
    fn test_country_suffix() {
        assert_eq!(extract_pincode("Pune 411 038, India"), Some("411 038".to_string()));
    }

    #[test]
    fn test_leading_zero_rejected() {
        assert_eq!(extract_pincode("code 012345"), None);
    }

    #[test]
    fn test_longer_numbers_are_not_pincodes() {
        assert_eq!(extract_pincode("9876543210"), None);
        assert_eq!(extract_pincode("1234 5678 9012"), None);
    }
}
