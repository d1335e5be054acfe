//! Runs every field extractor over a document and assembles the record.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::record::{ExtractionRecord, FieldValue, FilledForm};
use super::rules::{
    AadhaarExtractor, AddressExtractor, DateExtractor, FieldExtractor, NameExtractor,
    PanExtractor, PhoneExtractor, PincodeExtractor,
};
use super::text::NormalizedText;
use crate::models::config::ExtractionConfig;
use crate::models::template::TemplateRegistry;
use crate::ner::{EntityRecognizer, LabeledNameRecognizer};

/// Identity-document extraction engine.
///
/// Stateless between calls and safe to share across threads.
pub struct FormExtractor {
    name: NameExtractor,
    address: AddressExtractor,
    extractors: Vec<Box<dyn FieldExtractor>>,
    registry: TemplateRegistry,
}

impl FormExtractor {
    /// Engine with default limits, no entity recognizer and the built-in
    /// templates.
    pub fn new() -> Self {
        Self {
            name: NameExtractor::new(),
            address: AddressExtractor::new(),
            extractors: default_extractors(),
            registry: TemplateRegistry::builtin(),
        }
    }

    /// Engine configured from the `extraction` config section.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        let mut name = NameExtractor::new().with_limits(
            config.ner_prefix_chars,
            config.max_name_chars,
            config.name_scan_lines,
        );
        if config.label_recognizer {
            name = name.with_recognizer(Arc::new(LabeledNameRecognizer::new()));
        }

        Self {
            name,
            address: AddressExtractor::with_limits(
                config.max_address_chars,
                config.address_scan_lines,
            ),
            extractors: default_extractors(),
            registry: TemplateRegistry::builtin(),
        }
    }

    /// Use an entity recognizer for the name field.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.name = self.name.with_recognizer(recognizer);
        self
    }

    /// Use a different template registry.
    pub fn with_registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn has_recognizer(&self) -> bool {
        self.name.has_recognizer()
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Extract every field and resolve the template. Never fails; a
    /// document with nothing recognizable yields an all-empty record.
    pub fn extract_record(&self, raw_text: &str, language: &str, template_id: &str) -> ExtractionRecord {
        let doc = NormalizedText::new(raw_text);
        let template = self.registry.resolve(template_id);
        if template.id != template_id {
            debug!("Unknown template {:?}, using {:?}", template_id, template.id);
        }

        let extractors: [&dyn FieldExtractor; 2] = [&self.name, &self.address];
        let fields: BTreeMap<_, _> = extractors
            .into_iter()
            .chain(self.extractors.iter().map(|e| e.as_ref()))
            .map(|extractor| {
                let field = extractor.field();
                let value = if doc.is_blank() { None } else { extractor.extract(&doc) };
                let value = FieldValue::new(field, value);
                debug!(
                    "Field {}: {:?} (confidence {})",
                    field, value.value, value.confidence
                );
                (field, value)
            })
            .collect();

        let record = ExtractionRecord {
            fields,
            language: language.to_string(),
            template,
        };
        info!(
            "Extracted {}/{} fields for template {}",
            record.found().count(),
            record.fields.len(),
            template.id
        );
        record
    }

    /// Extract and project onto the requested template.
    pub fn extract(&self, raw_text: &str, language: &str, template_id: &str) -> FilledForm {
        self.extract_record(raw_text, language, template_id).project()
    }
}

impl Default for FormExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn default_extractors() -> Vec<Box<dyn FieldExtractor>> {
    vec![
        Box::new(DateExtractor::new()),
        Box::new(AadhaarExtractor::new()),
        Box::new(PanExtractor::new()),
        Box::new(PhoneExtractor::new()),
        Box::new(PincodeExtractor::new()),
    ]
}
