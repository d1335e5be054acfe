//! Configuration structures for the form-filling pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::IdformError;

/// Main configuration for the idform pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdformConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// OCR configuration.
    pub ocr: OcrConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Template used when none is requested.
    pub default_template: String,

    /// Language reported when detection has nothing to go on.
    pub default_language: String,

    /// Enable the rule-based labelled-name recognizer for the name field.
    pub label_recognizer: bool,

    /// How many leading characters the entity recognizer sees.
    pub ner_prefix_chars: usize,

    /// Maximum length of an extracted name.
    pub max_name_chars: usize,

    /// How many leading lines the name line heuristic scans.
    pub name_scan_lines: usize,

    /// Maximum length of an extracted address.
    pub max_address_chars: usize,

    /// How many leading lines the positional address fallback scans.
    pub address_scan_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_template: "standard".to_string(),
            default_language: "en".to_string(),
            label_recognizer: true,
            ner_prefix_chars: 2000,
            max_name_chars: 50,
            name_scan_lines: 10,
            max_address_chars: 200,
            address_scan_lines: 20,
        }
    }
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Run OCR on images and scanned PDF pages.
    pub enabled: bool,

    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "rec.onnx".to_string(),
            dictionary: "dict.txt".to_string(),
        }
    }
}

impl OcrConfig {
    /// Full paths of (detection, recognition, dictionary) under `model_dir`.
    pub fn model_paths(&self, model_dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
        (
            model_dir.join(&self.detection_model),
            model_dir.join(&self.recognition_model),
            model_dir.join(&self.dictionary),
        )
    }

    /// Whether all model files exist under `model_dir`.
    pub fn models_present(&self, model_dir: &Path) -> bool {
        let (det, rec, dict) = self.model_paths(model_dir);
        det.exists() && rec.exists() && dict.exists()
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Use embedded text before falling back to OCR.
    pub prefer_embedded_text: bool,

    /// Minimum embedded text length to skip OCR.
    pub min_text_length: usize,

    /// Maximum pages to OCR (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            prefer_embedded_text: true,
            min_text_length: 50,
            max_pages: 10,
        }
    }
}

impl IdformConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, IdformError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| IdformError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), IdformError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| IdformError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
