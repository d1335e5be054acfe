//! Aadhaar number extraction with candidate scoring.
//!
//! The number may appear in full (`123456789012`), grouped
//! (`1234 5678 9012`), masked (`XXXX XXXX 9012`) or after a label. Every
//! rule contributes candidates; the best-scoring one wins, ties going to the
//! one found first.

use tracing::trace;

use super::patterns::{AADHAAR_EXACT_RUN, AADHAAR_GROUPED, AADHAAR_RULES, VIRTUAL_ID};
use super::FieldExtractor;
use crate::extract::chain::{all_matches, best_by_score};
use crate::extract::text::NormalizedText;
use crate::models::field::Field;

/// Characters OCR output and printed cards use to hide digits.
pub const MASK_CHARS: [char; 4] = ['X', 'x', '*', '•'];

/// Placeholders beyond this count add nothing to a masked candidate's score.
pub const MAX_SCORED_MASK: usize = 8;

pub const SCORE_EXACT_RUN: u32 = 1000;
pub const SCORE_GROUPED: u32 = 900;
pub const SCORE_MASKED_BASE: u32 = 500;
pub const SCORE_LONG: u32 = 300;
pub const SCORE_MANY_DIGITS: u32 = 200;

/// A scored Aadhaar candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Matched text, trimmed.
    pub text: String,
    /// Rule that produced it.
    pub rule: &'static str,
    /// Score from [`score_candidate`].
    pub score: u32,
}

/// Score a raw candidate. 0 means rejected.
pub fn score_candidate(candidate: &str) -> u32 {
    let trimmed = candidate.trim();
    let compact: Vec<char> = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let length = compact.len();
    let digits = compact.iter().filter(|c| c.is_ascii_digit()).count();

    if !(8..=16).contains(&length) || digits < 2 {
        return 0;
    }

    let masked = compact.iter().filter(|c| MASK_CHARS.contains(c)).count();

    if AADHAAR_EXACT_RUN.is_match(trimmed) {
        SCORE_EXACT_RUN
    } else if AADHAAR_GROUPED.is_match(trimmed) {
        SCORE_GROUPED
    } else if masked >= 4 {
        SCORE_MASKED_BASE + 10 * masked.min(MAX_SCORED_MASK) as u32
    } else if length >= 12 {
        SCORE_LONG
    } else if digits >= 8 {
        SCORE_MANY_DIGITS
    } else {
        0
    }
}

/// Aadhaar field extractor.
#[derive(Debug, Clone, Default)]
pub struct AadhaarExtractor;

impl AadhaarExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Every candidate found in `text`, in discovery order, with scores.
    pub fn candidates(&self, text: &str) -> Vec<Candidate> {
        let virtual_ids = virtual_id_spans(text);
        all_matches(&AADHAAR_RULES, text)
            .into_iter()
            .filter(|m| {
                !virtual_ids
                    .iter()
                    .any(|&(start, end)| m.start >= start && m.end <= end)
            })
            .map(|m| {
                let value = m.value.trim();
                Candidate {
                    text: value.to_string(),
                    rule: m.rule,
                    score: score_candidate(value),
                }
            })
            .filter(|c| !c.text.is_empty())
            .collect()
    }

    /// Highest-scoring candidate; the first one on ties.
    pub fn best(&self, text: &str) -> Option<Candidate> {
        let candidates = self.candidates(text);
        trace!("Aadhaar candidates: {:?}", candidates);
        best_by_score(candidates, |c| c.score).map(|(c, _)| c)
    }
}

impl FieldExtractor for AadhaarExtractor {
    fn field(&self) -> Field {
        Field::Aadhaar
    }

    fn extract(&self, doc: &NormalizedText<'_>) -> Option<String> {
        self.best(doc.raw()).map(|c| c.text)
    }
}

/// Extract an Aadhaar number from text.
pub fn extract_aadhaar(text: &str) -> Option<String> {
    AadhaarExtractor::new().best(text).map(|c| c.text)
}

/// Byte ranges of 16-digit Virtual IDs in `text`.
fn virtual_id_spans(text: &str) -> Vec<(usize, usize)> {
    VIRTUAL_ID
        .captures_iter(text)
        .filter_map(|caps| caps.name("vid"))
        .map(|m| (m.start(), m.end()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tiers() {
        assert_eq!(score_candidate("123456789012"), SCORE_EXACT_RUN);
        assert_eq!(score_candidate("1234 5678 9012"), SCORE_GROUPED);
        assert_eq!(score_candidate("XXXX XXXX 9012"), 580);
        assert_eq!(score_candidate("XXXX 9012"), 540);
        assert_eq!(score_candidate("1234-5678-9012"), SCORE_LONG);
        assert_eq!(score_candidate("1234 56789"), SCORE_MANY_DIGITS);
    }

    #[test]
    fn test_score_rejects_out_of_range() {
        assert_eq!(score_candidate("1234567"), 0);
        assert_eq!(score_candidate("12345678901234567"), 0);
        assert_eq!(score_candidate("XXXXXXXXX1"), 0);
        assert_eq!(score_candidate("   "), 0);
    }

    #[test]
    fn test_mask_bonus_is_capped() {
        // 12 placeholders score the same as the canonical 8.
        assert_eq!(score_candidate("XXXXXXXXXXXX12"), 580);
        assert_eq!(score_candidate("XXXXXXXX1234"), 580);
    }

    #[test]
    fn test_score_is_deterministic() {
        let text = "Aadhaar: XXXX XXXX 4321\n1234 5678 9012\nUID 123456789012";
        let extractor = AadhaarExtractor::new();
        let first = extractor.best(text);
        for _ in 0..5 {
            assert_eq!(extractor.best(text), first);
        }
    }

    #[test]
    fn test_exact_run_beats_masked() {
        let text = "Your Aadhaar No.\nXXXX XXXX 4321\n123456789012\n";
        let extractor = AadhaarExtractor::new();
        let best = extractor.best(text).unwrap();
        assert_eq!(best.text, "123456789012");
        assert_eq!(best.score, SCORE_EXACT_RUN);

        let masked_max = extractor
            .candidates(text)
            .into_iter()
            .filter(|c| c.text.contains('X'))
            .map(|c| c.score)
            .max()
            .unwrap();
        assert!(best.score > masked_max);
    }

    #[test]
    fn test_grouped_number() {
        let text = "Rahul Kumar\n1234 5678 9012\nMera Aadhaar, Meri Pehchaan";
        assert_eq!(extract_aadhaar(text), Some("1234 5678 9012".to_string()));
    }

    #[test]
    fn test_masked_number() {
        let text = "Aadhaar No: XXXX XXXX 9012";
        assert_eq!(extract_aadhaar(text), Some("XXXX XXXX 9012".to_string()));
    }

    #[test]
    fn test_first_candidate_wins_tie() {
        let text = "1111 2222 3333 and 4444 5555 6666";
        assert_eq!(extract_aadhaar(text), Some("1111 2222 3333".to_string()));
    }

    #[test]
    fn test_virtual_id_is_not_an_aadhaar() {
        let text = "VID: 9134 5678 9012 3456";
        assert_eq!(extract_aadhaar(text), None);
    }

    #[test]
    fn test_date_on_same_line() {
        let text = "DOB: 15/08/1990 1234 5678 9012";
        assert_eq!(extract_aadhaar(text), Some("1234 5678 9012".to_string()));
    }

    #[test]
    fn test_phone_on_same_line() {
        let text = "1234 5678 9012 9876543210";
        assert_eq!(extract_aadhaar(text), Some("1234 5678 9012".to_string()));
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(extract_aadhaar(""), None);
        assert_eq!(extract_aadhaar("call 9876543210"), None);
    }
}
