//! Script-based language detection for OCR text.
//!
//! Indian identity documents mix English with one regional script, so the
//! dominant non-Latin script decides the language. Latin-only or empty text
//! reports the default.

use whatlang::{detect_script, Script};

/// Reported when no regional script dominates.
pub const DEFAULT_LANGUAGE: &str = "en";

/// ISO 639-1 code of the document's dominant language, `"en"` by default.
pub fn detect_language(text: &str) -> String {
    detect_language_or(text, DEFAULT_LANGUAGE)
}

/// Like [`detect_language`] with a caller-chosen default.
pub fn detect_language_or(text: &str, default: &str) -> String {
    detect_script(text)
        .and_then(script_language)
        .unwrap_or(default)
        .to_string()
}

fn script_language(script: Script) -> Option<&'static str> {
    let code = match script {
        Script::Devanagari => "hi",
        Script::Bengali => "bn",
        Script::Gurmukhi => "pa",
        Script::Gujarati => "gu",
        Script::Oriya => "or",
        Script::Tamil => "ta",
        Script::Telugu => "te",
        Script::Kannada => "kn",
        Script::Malayalam => "ml",
        Script::Arabic => "ur",
        _ => return None,
    };
    Some(code)
}
