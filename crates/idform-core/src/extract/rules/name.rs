//! Holder name extraction.
//!
//! An [`EntityRecognizer`], when configured, is asked first; the longest
//! person span wins. Otherwise the first capitalized multi-word line near
//! the top of the document is taken.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::patterns::{NAME_HEADER_WORDS, NAME_LINE};
use super::FieldExtractor;
use crate::extract::text::{prefix_chars, truncate_chars, NormalizedText};
use crate::models::field::Field;
use crate::ner::{EntityLabel, EntityRecognizer, EntitySpan};

pub const DEFAULT_PREFIX_CHARS: usize = 2000;
pub const DEFAULT_MAX_CHARS: usize = 50;
pub const DEFAULT_SCAN_LINES: usize = 10;

/// Name field extractor.
#[derive(Clone)]
pub struct NameExtractor {
    recognizer: Option<Arc<dyn EntityRecognizer>>,
    prefix_chars: usize,
    max_chars: usize,
    scan_lines: usize,
}

impl fmt::Debug for NameExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameExtractor")
            .field("recognizer", &self.recognizer.is_some())
            .field("prefix_chars", &self.prefix_chars)
            .field("max_chars", &self.max_chars)
            .field("scan_lines", &self.scan_lines)
            .finish()
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl NameExtractor {
    /// Line heuristic only.
    pub fn new() -> Self {
        Self {
            recognizer: None,
            prefix_chars: DEFAULT_PREFIX_CHARS,
            max_chars: DEFAULT_MAX_CHARS,
            scan_lines: DEFAULT_SCAN_LINES,
        }
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_limits(mut self, prefix_chars: usize, max_chars: usize, scan_lines: usize) -> Self {
        self.prefix_chars = prefix_chars;
        self.max_chars = max_chars;
        self.scan_lines = scan_lines;
        self
    }

    pub fn has_recognizer(&self) -> bool {
        self.recognizer.is_some()
    }

    fn from_recognizer(&self, raw: &str) -> Option<String> {
        let recognizer = self.recognizer.as_ref()?;
        let spans = recognizer.recognize(prefix_chars(raw, self.prefix_chars));
        let best = longest_person(&spans)?;
        let name = truncate_chars(best.text.trim(), self.max_chars);
        debug!("Name from recognizer: {:?}", name);
        (!name.is_empty()).then_some(name)
    }

    fn from_lines(&self, lines: &[&str]) -> Option<String> {
        lines
            .iter()
            .take(self.scan_lines)
            .find(|line| is_name_line(line))
            .map(|line| truncate_chars(line, self.max_chars))
    }
}

impl FieldExtractor for NameExtractor {
    fn field(&self) -> Field {
        Field::FullName
    }

    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String> {
        self.from_recognizer(doc.raw())
            .or_else(|| self.from_lines(doc.lines()))
    }
}

/// Longest person span by character count; the first one on ties.
pub fn longest_person(spans: &[EntitySpan]) -> Option<&EntitySpan> {
    spans
        .iter()
        .filter(|s| s.label == EntityLabel::Person)
        .fold(None, |best: Option<&EntitySpan>, span| match best {
            Some(b) if b.char_len() >= span.char_len() => Some(b),
            _ => Some(span),
        })
}

fn is_name_line(line: &str) -> bool {
    NAME_LINE.is_match(line)
        && line.split_whitespace().count() >= 2
        && !NAME_HEADER_WORDS.is_match(line)
}

/// Extract a name using the line heuristic only.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(&NormalizedText::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::LabeledNameRecognizer;

    struct FixedSpans(Vec<EntitySpan>);

    impl EntityRecognizer for FixedSpans {
        fn recognize(&self, _text: &str) -> Vec<EntitySpan> {
            self.0.clone()
        }
    }

    #[test]
    fn test_line_heuristic() {
        let text = "GOVERNMENT OF INDIA\nRahul Kumar\nDOB: 15/08/1990";
        assert_eq!(extract_name(text), Some("Rahul Kumar".to_string()));
    }

    #[test]
    fn test_header_lines_are_skipped() {
        let text = "INCOME TAX DEPARTMENT\nGovt. of India\nANITA SHARMA\nABCDE1234F";
        assert_eq!(extract_name(text), Some("ANITA SHARMA".to_string()));
    }

    #[test]
    fn test_single_word_and_lowercase_rejected() {
        assert_eq!(extract_name("Rahulkumar\nrahul kumar\n"), None);
        assert_eq!(extract_name(""), None);
    }

    #[test]
    fn test_only_first_lines_scanned() {
        let mut text = String::new();
        for i in 0..10 {
            text.push_str(&format!("line {i} 1234\n"));
        }
        text.push_str("Rahul Kumar\n");
        assert_eq!(extract_name(&text), None);
    }

    #[test]
    fn test_longest_person_span_wins() {
        let spans = vec![
            EntitySpan::person("Ram Lal", 0, 7),
            EntitySpan {
                label: EntityLabel::Organization,
                text: "Unique Identification Authority".to_string(),
                start: 10,
                end: 41,
            },
            EntitySpan::person("Ramesh Chandra", 50, 64),
            EntitySpan::person("Suresh Chandra", 70, 84),
        ];
        assert_eq!(longest_person(&spans).unwrap().text, "Ramesh Chandra");
    }

    #[test]
    fn test_recognizer_takes_priority() {
        let extractor = NameExtractor::new().with_recognizer(Arc::new(FixedSpans(vec![
            EntitySpan::person("  Sita Devi  ", 0, 13),
        ])));
        let doc = NormalizedText::new("Rahul Kumar\n");
        assert_eq!(extractor.extract(&doc), Some("Sita Devi".to_string()));
    }

    #[test]
    fn test_recognizer_without_person_falls_back() {
        let extractor = NameExtractor::new().with_recognizer(Arc::new(FixedSpans(vec![])));
        let doc = NormalizedText::new("Rahul Kumar\n");
        assert_eq!(extractor.extract(&doc), Some("Rahul Kumar".to_string()));
    }

    #[test]
    fn test_recognizer_name_is_truncated() {
        let long = "A".repeat(80);
        let extractor = NameExtractor::new()
            .with_recognizer(Arc::new(FixedSpans(vec![EntitySpan::person(long, 0, 80)])));
        let name = extractor.extract(&NormalizedText::new("x")).unwrap();
        assert_eq!(name.chars().count(), DEFAULT_MAX_CHARS);
    }

    #[test]
    fn test_recognizer_sees_only_prefix() {
        let mut text = "x".repeat(DEFAULT_PREFIX_CHARS);
        text.push_str("\nName: Rahul Kumar\n");
        let extractor = NameExtractor::new().with_recognizer(Arc::new(LabeledNameRecognizer));
        assert_eq!(extractor.extract(&NormalizedText::new(&text)), None);
    }
}
