//! Address extraction.

use tracing::debug;

use super::patterns::{ADDRESS_KEYWORD, ADDRESS_LABEL};
use super::pincode::PincodeExtractor;
use super::FieldExtractor;
use crate::extract::text::{truncate_chars, NormalizedText};
use crate::models::field::Field;

pub const DEFAULT_MAX_CHARS: usize = 200;
pub const DEFAULT_SCAN_LINES: usize = 20;

/// Lines joined into a keyword-anchored block, counting the keyword line.
const BLOCK_LINES: usize = 4;

/// Address field extractor.
#[derive(Debug, Clone)]
pub struct AddressExtractor {
    max_chars: usize,
    scan_lines: usize,
    pincode: PincodeExtractor,
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressExtractor {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_CHARS, DEFAULT_SCAN_LINES)
    }

    pub fn with_limits(max_chars: usize, scan_lines: usize) -> Self {
        Self {
            max_chars,
            scan_lines,
            pincode: PincodeExtractor::new(),
        }
    }

    /// Lines starting at the first address keyword, label removed.
    fn keyword_block(&self, lines: &[&str]) -> Option<String> {
        let start = lines.iter().position(|line| ADDRESS_KEYWORD.is_match(line))?;
        let end = (start + BLOCK_LINES).min(lines.len());

        let parts: Vec<&str> = lines[start..end]
            .iter()
            .enumerate()
            .map(|(i, line)| if i == 0 { strip_label(line) } else { *line })
            .filter(|part| !part.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }

    /// First line near the top that reads like a street address.
    fn positional_line(&self, lines: &[&str]) -> Option<String> {
        lines
            .iter()
            .take(self.scan_lines)
            .find(|line| (3..=12).contains(&line.split_whitespace().count()))
            .map(|line| line.to_string())
    }

    fn with_pincode(&self, block: String, raw: &str) -> String {
        let suffix = self
            .pincode
            .find(raw)
            .filter(|pin| !block.contains(pin.as_str()))
            .map(|pin| format!(", {pin}"));

        match suffix {
            Some(suffix) => {
                let room = self.max_chars.saturating_sub(suffix.chars().count());
                let head = truncate_chars(&block, room);
                let head = head.trim_end_matches([',', ' ']);
                if head.is_empty() {
                    truncate_chars(suffix.trim_start_matches([',', ' ']), self.max_chars)
                } else {
                    format!("{head}{suffix}")
                }
            }
            None => truncate_chars(&block, self.max_chars),
        }
    }
}

impl FieldExtractor for AddressExtractor {
    fn field(&self) -> Field {
        Field::Address
    }

    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String> {
        let block = match self.keyword_block(doc.lines()) {
            Some(block) => {
                debug!("Address from keyword block");
                block
            }
            None => self.positional_line(doc.lines())?,
        };
        Some(self.with_pincode(block, doc.raw()))
    }
}

fn strip_label(line: &str) -> &str {
    match ADDRESS_LABEL.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line,
    }
}

/// Extract an address block from text.
pub fn extract_address(text: &str) -> Option<String> {
    AddressExtractor::new().extract(&NormalizedText::new(text))
}
