//! Named-entity recognition seam.
//!
//! The name extractor accepts any [`EntityRecognizer`]. Statistical models
//! live outside this crate; [`LabeledNameRecognizer`] is a lightweight
//! recognizer that reads explicitly labeled name lines (`Name: ...`).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Entity category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Other(String),
}

/// A recognized entity. `start`/`end` are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn person(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label: EntityLabel::Person,
            text: text.into(),
            start,
            end,
        }
    }

    /// Length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Recognizes entities in text.
pub trait EntityRecognizer: Send + Sync {
    /// All entities found in `text`, in document order.
    fn recognize(&self, text: &str) -> Vec<EntitySpan>;
}

lazy_static! {
    static ref LABELED_NAME: Regex = Regex::new(
        r"(?m)^[ \t]*(?:(?i:full\s+name|name|naam)|नाम)[ \t]*[:\-][ \t]*(?P<value>[\p{L}\p{M}][\p{L}\p{M} .'\-]*?)[ \t\r]*$"
    ).unwrap();
}

/// Emits a `Person` span for each line of the form `Name: <value>`.
#[derive(Debug, Clone, Default)]
pub struct LabeledNameRecognizer;

impl LabeledNameRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for LabeledNameRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        LABELED_NAME
            .captures_iter(text)
            .filter_map(|caps| caps.name("value"))
            .map(|m| EntitySpan::person(m.as_str(), m.start(), m.end()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_name() {
        let text = "GOVERNMENT OF INDIA\nName: Rahul Kumar\nDOB: 15/08/1990";
        let spans = LabeledNameRecognizer::new().recognize(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label, EntityLabel::Person);
        assert_eq!(spans[0].text, "Rahul Kumar");
        assert_eq!(&text[spans[0].start..spans[0].end], "Rahul Kumar");
    }

    #[test]
    fn test_relative_names_are_ignored() {
        let text = "Father's Name: Suresh Kumar\nFull Name - Anita Sharma";
        let spans = LabeledNameRecognizer::new().recognize(text);
        let names: Vec<_> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(names, vec!["Anita Sharma"]);
    }

    #[test]
    fn test_devanagari_label() {
        let spans = LabeledNameRecognizer::new().recognize("नाम: राहुल कुमार");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "राहुल कुमार");
        assert_eq!(spans[0].char_len(), 11);
    }

    #[test]
    fn test_no_label() {
        assert!(LabeledNameRecognizer::new().recognize("Rahul Kumar").is_empty());
        assert!(LabeledNameRecognizer::new().recognize("Name: 12345").is_empty());
    }
}
