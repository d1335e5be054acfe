//! WASM bindings for identity-document form filling.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! OCR runs on the JavaScript side; text or recognized lines are passed in.

use std::sync::Arc;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use idform_core::extract::rules::{is_valid_pan as core_is_valid_pan, score_candidate};
use idform_core::models::template::DEFAULT_TEMPLATE_ID;
use idform_core::ocr::{join_lines, sort_reading_order, TextBox};
use idform_core::{FormExtractor, LabeledNameRecognizer, TemplateRegistry};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Maps become plain objects so the flattened form reads as `form.full_name`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fill a form from document text.
///
/// `template` falls back to `standard` when unknown; `language` is detected
/// from the text when omitted.
#[wasm_bindgen(js_name = extractForm)]
pub fn extract_form(
    text: &str,
    language: Option<String>,
    template: Option<String>,
) -> Result<JsValue, JsValue> {
    FormFiller::new().extract(text, language, template)
}

/// Dominant language of the text as an ISO 639-1 code.
#[wasm_bindgen(js_name = detectLanguage)]
pub fn detect_language(text: &str) -> String {
    idform_core::detect_language(text)
}

/// All built-in templates with their fields and related links.
#[wasm_bindgen(js_name = listTemplates)]
pub fn list_templates() -> Result<JsValue, JsValue> {
    let templates: Vec<_> = TemplateRegistry::builtin().iter().collect();
    to_js(&templates)
}

/// Check a PAN against the `AAAAA9999A` structure.
#[wasm_bindgen(js_name = isValidPan)]
pub fn is_valid_pan(pan: &str) -> bool {
    core_is_valid_pan(pan)
}

/// Plausibility score of an Aadhaar candidate string (0 = not plausible).
#[wasm_bindgen(js_name = scoreAadhaarCandidate)]
pub fn score_aadhaar_candidate(candidate: &str) -> u32 {
    score_candidate(candidate)
}

/// Form filler class for browser use.
#[wasm_bindgen]
pub struct FormFiller {
    engine: FormExtractor,
}

#[wasm_bindgen]
impl FormFiller {
    /// Create a form filler with the heuristic name finder only.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: FormExtractor::new(),
        }
    }

    /// Enable or disable the labelled-name recognizer.
    #[wasm_bindgen(js_name = setLabelRecognizer)]
    pub fn set_label_recognizer(&mut self, enabled: bool) {
        self.engine = if enabled {
            FormExtractor::new().with_recognizer(Arc::new(LabeledNameRecognizer::new()))
        } else {
            FormExtractor::new()
        };
    }

    /// Extract fields and project them onto a template.
    #[wasm_bindgen]
    pub fn extract(
        &self,
        text: &str,
        language: Option<String>,
        template: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let language = language.unwrap_or_else(|| detect_language(text));
        let template = template.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID);
        to_js(&self.engine.extract(text, &language, template))
    }

    /// Extract fields and report each one with its confidence.
    #[wasm_bindgen(js_name = extractRecord)]
    pub fn extract_record(&self, text: &str, template: Option<String>) -> Result<JsValue, JsValue> {
        #[derive(Serialize)]
        struct RecordJs<'a> {
            template: &'static str,
            language: &'a str,
            fields: Vec<&'a idform_core::FieldValue>,
        }

        let language = detect_language(text);
        let template = template.as_deref().unwrap_or(DEFAULT_TEMPLATE_ID);
        let record = self.engine.extract_record(text, &language, template);

        to_js(&RecordJs {
            template: record.template.id,
            language: &record.language,
            fields: record.fields.values().collect(),
        })
    }
}

impl Default for FormFiller {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines recognized by a browser-side OCR engine.
#[wasm_bindgen]
pub struct OcrLines {
    boxes: Vec<TextBox>,
}

#[wasm_bindgen]
impl OcrLines {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Add a recognized line with its bounding rectangle.
    #[wasm_bindgen(js_name = addLine)]
    pub fn add_line(&mut self, text: &str, x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32) {
        self.boxes.push(TextBox {
            rect: (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
            text: text.to_string(),
            confidence,
        });
    }

    /// Number of lines added.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Full text in reading order.
    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        let mut boxes = self.boxes.clone();
        sort_reading_order(&mut boxes);
        join_lines(&boxes)
    }

    /// Fill a form from these lines.
    #[wasm_bindgen(js_name = extractForm)]
    pub fn extract_form(&self, template: Option<String>) -> Result<JsValue, JsValue> {
        extract_form(&self.get_text(), None, template)
    }
}

impl Default for OcrLines {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_is_valid_pan() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("ABCD1234F"));
        assert!(!is_valid_pan("abcde1234f"));
    }

    #[wasm_bindgen_test]
    fn test_score_aadhaar_candidate() {
        assert_eq!(score_aadhaar_candidate("123456789012"), 1000);
        assert_eq!(score_aadhaar_candidate("1234 5678 9012"), 900);
        assert_eq!(score_aadhaar_candidate("XXXX XXXX 9012"), 580);
    }

    #[wasm_bindgen_test]
    fn test_detect_language() {
        assert_eq!(detect_language("नाम: राहुल कुमार"), "hi");
        assert_eq!(detect_language("Rahul Kumar"), "en");
    }

    #[wasm_bindgen_test]
    fn test_ocr_lines_reading_order() {
        let mut lines = OcrLines::new();
        lines.add_line("1234 5678 9012", 10.0, 80.0, 200.0, 95.0, 0.9);
        lines.add_line("Rahul Kumar", 10.0, 40.0, 150.0, 55.0, 0.9);
        lines.add_line("GOVERNMENT OF INDIA", 10.0, 5.0, 250.0, 20.0, 0.9);
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.get_text(),
            "GOVERNMENT OF INDIA\nRahul Kumar\n1234 5678 9012"
        );
    }

    #[wasm_bindgen_test]
    fn test_extract_form() {
        let form = extract_form("PAN: ABCDE1234F", None, Some("pan".into())).unwrap();
        assert!(form.is_object());
    }
}
