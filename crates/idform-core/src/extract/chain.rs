//! Ordered pattern rules and the reducers that pick a winner from them.
//!
//! A field's patterns are data: a slice of [`PatternRule`]s ordered from
//! most to least specific. [`first_match`] implements "first rule that
//! matches wins", [`all_matches`] + [`best_by_score`] implement "collect
//! everything, keep the stable maximum".

use regex::Regex;

/// A named regex. When the pattern has a `value` capture group, only that
/// group is reported as the matched value.
#[derive(Debug)]
pub struct PatternRule {
    /// Rule name, for logging and tests.
    pub name: &'static str,
    /// Compiled pattern.
    pub regex: Regex,
}

/// A single match of a [`PatternRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'t> {
    /// Name of the rule that produced the match.
    pub rule: &'static str,
    /// Matched value (the `value` group, or the whole match).
    pub value: &'t str,
    /// Byte offset of the value in the searched text.
    pub start: usize,
    /// Byte offset just past the value.
    pub end: usize,
}

impl PatternRule {
    /// Compile a rule. Panics on an invalid pattern; rule tables are static.
    pub fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// First occurrence of this rule in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Option<RuleMatch<'t>> {
        self.regex
            .captures_iter(text)
            .find_map(|caps| self.to_match(&caps))
    }

    /// Every occurrence of this rule in `text`, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<RuleMatch<'t>> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| self.to_match(&caps))
            .collect()
    }

    fn to_match<'t>(&self, caps: &regex::Captures<'t>) -> Option<RuleMatch<'t>> {
        let m = caps.name("value").or_else(|| caps.get(0))?;
        Some(RuleMatch {
            rule: self.name,
            value: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
    }
}

/// First rule (in slice order) with any match; its first occurrence.
pub fn first_match<'t>(rules: &[PatternRule], text: &'t str) -> Option<RuleMatch<'t>> {
    rules.iter().find_map(|rule| rule.find(text))
}

/// All matches of all rules, in rule order then text order.
pub fn all_matches<'t>(rules: &[PatternRule], text: &'t str) -> Vec<RuleMatch<'t>> {
    rules.iter().flat_map(|rule| rule.find_all(text)).collect()
}

/// Stable maximum: the first item reaching the highest score.
///
/// Items scoring 0 never win.
pub fn best_by_score<T>(
    items: impl IntoIterator<Item = T>,
    score: impl Fn(&T) -> u32,
) -> Option<(T, u32)> {
    let mut best: Option<(T, u32)> = None;
    for item in items {
        let s = score(&item);
        let better = match &best {
            Some((_, best_score)) => s > *best_score,
            None => s > 0,
        };
        if better {
            best = Some((item, s));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<PatternRule> {
        vec![
            PatternRule::new("labeled", r"ID:\s*(?P<value>\d+)"),
            PatternRule::new("digits", r"\d{3}"),
        ]
    }

    #[test]
    fn test_value_group_is_reported() {
        let rules = rules();
        let m = first_match(&rules, "x ID: 42 and 123").unwrap();
        assert_eq!(m.rule, "labeled");
        assert_eq!(m.value, "42");
        assert_eq!(&"x ID: 42 and 123"[m.start..m.end], "42");
    }

    #[test]
    fn test_first_rule_wins_over_earlier_text_position() {
        let rules = rules();
        let m = first_match(&rules, "123 then ID: 7").unwrap();
        assert_eq!(m.rule, "labeled");
        assert_eq!(m.value, "7");
    }

    #[test]
    fn test_falls_through_to_later_rule() {
        let rules = rules();
        let m = first_match(&rules, "no label 456").unwrap();
        assert_eq!(m.rule, "digits");
        assert_eq!(m.value, "456");
        assert!(first_match(&rules, "nothing here").is_none());
    }

    #[test]
    fn test_all_matches_order() {
        let rules = rules();
        let found: Vec<_> = all_matches(&rules, "111 ID: 9 222")
            .into_iter()
            .map(|m| (m.rule, m.value))
            .collect();
        assert_eq!(
            found,
            vec![("labeled", "9"), ("digits", "111"), ("digits", "222")]
        );
    }

    #[test]
    fn test_best_by_score_keeps_first_on_tie() {
        let items = vec![("a", 5), ("b", 9), ("c", 9), ("d", 1)];
        let (winner, score) = best_by_score(items, |(_, s)| *s).unwrap();
        assert_eq!(winner.0, "b");
        assert_eq!(score, 9);
    }

    #[test]
    fn test_best_by_score_ignores_zero() {
        let items = vec![("a", 0), ("b", 0)];
        assert!(best_by_score(items, |(_, s)| *s).is_none());
    }
}
