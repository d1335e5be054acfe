//! Pattern tables for identity-document field extraction.
//!
//! Each `*_RULES` table is ordered from most to least specific. How a table
//! is reduced (first match or best score) is up to the field's extractor.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extract::chain::PatternRule;

lazy_static! {
    // Aadhaar (12-digit enrolment number). Candidates from every rule are
    // scored, so the order only decides ties. Digit rules must not start
    // inside a date such as `15/08/1990`.
    pub static ref AADHAAR_RULES: Vec<PatternRule> = vec![
        PatternRule::new(
            "grouped",
            r"(?:^|[^\d/.\-])(?P<value>\d{4} \d{4} \d{4})\b",
        ),
        PatternRule::new("run", r"(?:^|[^\d/.\-])(?P<value>\d{12})\b"),
        PatternRule::new(
            "formatted",
            r"\b\d{4}(?:[-.]| {2,})\d{4}(?:[-.]| {2,})\d{4}\b",
        ),
        PatternRule::new("masked_grouped", r"[Xx*•]{4}[ \-]?[Xx*•]{4}[ \-]?\d{4}\b"),
        PatternRule::new("masked_tail", r"[Xx*•]{4,}[ \-]?\d{4}\b"),
        PatternRule::new(
            "labeled",
            r"\b(?i:aadhaar|aadhar|adhaar|uid|आधार)(?i:\s*(?:card\s*)?(?:no\.?|number))?\s*[:\-]?\s*(?P<value>[\dXx*• ]{8,20})",
        ),
    ];

    // 16-digit Virtual ID in four spaced groups. Aadhaar candidates inside
    // one are discarded.
    pub static ref VIRTUAL_ID: Regex = Regex::new(
        r"(?:^|[^\d/.\-])(?P<vid>\d{4} \d{4} \d{4} \d{4})(?:$|[^\d])"
    ).unwrap();

    pub static ref AADHAAR_EXACT_RUN: Regex = Regex::new(r"^\d{12}$").unwrap();

    pub static ref AADHAAR_GROUPED: Regex = Regex::new(r"^\d{4}\s+\d{4}\s+\d{4}$").unwrap();

    // PAN (AAAAA9999A). First match wins, in this order.
    pub static ref PAN_RULES: Vec<PatternRule> = vec![
        PatternRule::new(
            "labeled",
            r"\b(?i:pan|permanent\s+account\s+number)(?i:\s*(?:card\s*)?(?:no\.?|number))?\s*[:\-]?\s*(?P<value>[A-Z]{5}\s?[0-9]{4}\s?[A-Z])\b",
        ),
        PatternRule::new("bare", r"\b[A-Z]{5}[0-9]{4}[A-Z]\b"),
        PatternRule::new("spaced", r"\b[A-Z]{5}\s[0-9]{4}\s?[A-Z]\b"),
        PatternRule::new("ocr_confused", r"\b[A-Z]{5}[0-9OISB]{4}[A-Z]\b"),
        PatternRule::new("masked", r"\b[A-Z]{3}[A-ZX*]{2}[0-9X*]{4}[A-Z]\b"),
    ];

    pub static ref PAN_STRUCTURE: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();

    // Dates of birth. First rule with any match wins, returned verbatim.
    pub static ref DOB_RULES: Vec<PatternRule> = vec![
        PatternRule::new("dmy_long_year", r"\b\d{1,2}[/\-.]\d{1,2}[/\-.]\d{4}\b"),
        PatternRule::new("dmy_short_year", r"\b\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2}\b"),
        PatternRule::new("ymd", r"\b\d{4}[/\-.]\d{1,2}[/\-.]\d{1,2}\b"),
        PatternRule::new(
            "day_month_name",
            r"(?i)\b\d{1,2}(?:st|nd|rd|th)?\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+\d{4}\b",
        ),
        PatternRule::new(
            "month_name_day",
            r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+\d{1,2}(?:st|nd|rd|th)?,?\s+\d{4}\b",
        ),
    ];

    // Indian mobile numbers. First match wins; non-digits are stripped.
    pub static ref PHONE_RULES: Vec<PatternRule> = vec![
        PatternRule::new("mobile", r"\b9\d{9}\b"),
        PatternRule::new("ten_digits", r"\b\d{10}\b"),
        PatternRule::new("grouped", r"\b\d{5}[ \-]\d{5}\b"),
        // Returns the 10 subscriber digits without the country code, so the
        // value has the same shape (and confidence rule) as a local number.
        PatternRule::new(
            "country_code",
            r"(?:\+91|\b0091|\b91)[ \-]?(?P<value>\d{5}[ \-]?\d{5})\b",
        ),
    ];

    // Postal index numbers. First match wins, returned verbatim.
    pub static ref PINCODE_RULES: Vec<PatternRule> = vec![
        PatternRule::new("direct", r"\b[1-9]\d{5}\b"),
        PatternRule::new(
            "labeled",
            r"\b(?i:pin\s*code|pincode|pin|postal\s*code|zip)\s*[:\-.]?\s*(?P<value>[1-9]\d{2}\s?\d{3})\b",
        ),
        PatternRule::new(
            "country_suffix",
            r"\b(?P<value>[1-9]\d{2}\s\d{3})\s*,?\s*(?i:india|bharat)\b",
        ),
    ];

    // Capitalized proper-name line: 6-50 chars of letters, spaces, '-' and '.'.
    pub static ref NAME_LINE: Regex = Regex::new(r"^[A-Z][A-Za-z .\-]{5,49}$").unwrap();

    // Header words that disqualify a line from being the holder's name.
    pub static ref NAME_HEADER_WORDS: Regex = Regex::new(
        r"(?i)\b(?:government|govt|india|department|authority|identification|republic|income\s+tax|election|commission|card|male|female|dob|birth|address)\b"
    ).unwrap();

    // Address-indicating keywords, English and transliterated.
    pub static ref ADDRESS_KEYWORD: Regex = Regex::new(
        r"(?i)\b(?:address|addr|street|ward|road|village|vill|district|dist|pata|marg|gali|gram|gaon|zila|jila|mohalla)\b|पता|ग्राम|जिला|मार्ग"
    ).unwrap();

    // Leading "Address:" label on the first line of an address block.
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"^(?:(?i:address|addr)|पता)\s*[:\-]\s*"
    ).unwrap();
}
