//! Line normalization shared by all field extractors.

/// Raw OCR text plus its normalized line sequence.
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    raw: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> NormalizedText<'a> {
    /// Split on line breaks, trim, drop lines with two or fewer visible characters.
    pub fn new(raw: &'a str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().filter(|c| !c.is_whitespace()).count() > 2)
            .collect();
        Self { raw, lines }
    }

    /// The unmodified input text.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Normalized lines, in document order.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Whether the text has no usable content.
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Longest prefix of `s` with at most `max_chars` characters.
pub fn prefix_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate to `max_chars` characters and drop trailing whitespace.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    prefix_chars(s, max_chars).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_short_and_blank_lines() {
        let text = "  GOVERNMENT OF INDIA  \n\n  ab \n a b c \n\tRahul Kumar\n--\n";
        let doc = NormalizedText::new(text);
        assert_eq!(doc.lines(), &["GOVERNMENT OF INDIA", "a b c", "Rahul Kumar"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(NormalizedText::new("").is_blank());
        assert!(NormalizedText::new("   \n\t\n  ").is_blank());
    }

    #[test]
    fn test_prefix_chars_respects_char_boundaries() {
        assert_eq!(prefix_chars("नाम राहुल", 3), "नाम");
        assert_eq!(prefix_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("House 12, MG Road", 10), "House 12,");
    }
}
