//! Extraction records and their projection onto form templates.

use std::collections::BTreeMap;

use serde::Serialize;

use super::rules::is_valid_pan;
use crate::models::field::Field;
use crate::models::template::{RelatedLink, Template};

/// One extracted field. `value` is empty when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValue {
    pub field: Field,
    pub value: String,
    /// 1 when the value looks structurally plausible, else 0.
    pub confidence: u8,
}

impl FieldValue {
    pub fn new(field: Field, value: Option<String>) -> Self {
        let value = value.unwrap_or_default();
        let confidence = field_confidence(field, &value);
        Self {
            field,
            value,
            confidence,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Structural plausibility of a field value.
pub fn field_confidence(field: Field, value: &str) -> u8 {
    let plausible = match field {
        Field::FullName | Field::Dob => !value.is_empty(),
        Field::Address => value.split_whitespace().count() > 2,
        Field::Aadhaar => value.chars().count() >= 8,
        Field::Pan => is_valid_pan(value),
        Field::Phone => value.chars().count() == 10,
        Field::Pincode => {
            let compact: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();
            compact.len() == 6 && compact.iter().all(|c| c.is_ascii_digit())
        }
    };
    u8::from(plausible)
}

/// Every field extracted from one document, plus the resolved template.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionRecord {
    pub fields: BTreeMap<Field, FieldValue>,
    pub language: String,
    pub template: &'static Template,
}

impl ExtractionRecord {
    /// Extracted value, `""` when missing.
    pub fn value(&self, field: Field) -> &str {
        self.fields.get(&field).map_or("", |v| v.value.as_str())
    }

    pub fn confidence(&self, field: Field) -> u8 {
        self.fields.get(&field).map_or(0, |v| v.confidence)
    }

    /// Fields with a non-empty value.
    pub fn found(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.values().filter(|v| !v.is_empty())
    }

    /// Restrict the record to the template's required fields.
    pub fn project(&self) -> FilledForm {
        let mut fields = BTreeMap::new();
        let mut confidence = BTreeMap::new();
        for &field in self.template.required_fields {
            fields.insert(field, self.value(field).to_string());
            confidence.insert(field, self.confidence(field));
        }

        FilledForm {
            fields,
            language: self.language.clone(),
            template: self.template.id,
            template_title: self.template.title,
            related_links: self.template.related_links,
            confidence,
        }
    }
}

/// A record projected onto a template. Serializes to a flat JSON object
/// keyed by field name, plus the metadata keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilledForm {
    #[serde(flatten)]
    pub fields: BTreeMap<Field, String>,
    pub language: String,
    pub template: &'static str,
    pub template_title: &'static str,
    pub related_links: &'static [RelatedLink],
    pub confidence: BTreeMap<Field, u8>,
}

impl FilledForm {
    /// Value of a required field; `None` when the template lacks it.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Required fields whose value is empty.
    pub fn missing(&self) -> Vec<Field> {
        self.fields
            .iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(f, _)| *f)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::TemplateRegistry;

    fn record(values: &[(Field, &str)], template: &str) -> ExtractionRecord {
        let fields = Field::ALL
            .into_iter()
            .map(|f| {
                let value = values
                    .iter()
                    .find(|(vf, _)| *vf == f)
                    .map(|(_, v)| v.to_string());
                (f, FieldValue::new(f, value))
            })
            .collect();
        ExtractionRecord {
            fields,
            language: "en".to_string(),
            template: TemplateRegistry::builtin().resolve(template),
        }
    }

    #[test]
    fn test_confidence_rules() {
        assert_eq!(field_confidence(Field::FullName, "Rahul"), 1);
        assert_eq!(field_confidence(Field::FullName, ""), 0);
        assert_eq!(field_confidence(Field::Address, "12 MG Road"), 1);
        assert_eq!(field_confidence(Field::Address, "MG Road"), 0);
        assert_eq!(field_confidence(Field::Aadhaar, "XXXX 9012"), 1);
        assert_eq!(field_confidence(Field::Aadhaar, "9012"), 0);
        assert_eq!(field_confidence(Field::Pan, "ABCDE1234F"), 1);
        assert_eq!(field_confidence(Field::Pan, "ABCDE12O4F"), 0);
        assert_eq!(field_confidence(Field::Phone, "9876543210"), 1);
        assert_eq!(field_confidence(Field::Phone, "987654321"), 0);
        assert_eq!(field_confidence(Field::Pincode, "560 001"), 1);
        assert_eq!(field_confidence(Field::Pincode, "56000"), 0);
    }

    #[test]
    fn test_projection_keeps_only_required_fields() {
        let rec = record(
            &[(Field::Pan, "ABCDE1234F"), (Field::Aadhaar, "123456789012")],
            "pan",
        );
        let form = rec.project();
        assert_eq!(form.template, "pan");
        assert_eq!(form.get(Field::Pan), Some("ABCDE1234F"));
        assert_eq!(form.get(Field::Aadhaar), None);
        assert_eq!(form.confidence.get(&Field::Pan), Some(&1));
        assert!(!form.confidence.contains_key(&Field::Aadhaar));
        assert_eq!(form.missing().len(), 4);
    }

    #[test]
    fn test_filled_form_json_is_flat() {
        let form = record(&[(Field::Phone, "9876543210")], "passport").project();
        let json = serde_json::to_value(&form).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "address",
                "confidence",
                "dob",
                "full_name",
                "language",
                "phone",
                "pincode",
                "related_links",
                "template",
                "template_title",
            ]
        );
        assert_eq!(obj["phone"], "9876543210");
        assert_eq!(obj["full_name"], "");
        assert_eq!(obj["confidence"]["phone"], 1);
        assert_eq!(obj["related_links"][0]["is_fillable"], true);
    }
}
