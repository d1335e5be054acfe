//! Per-document report and its output formats.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use idform_core::{Field, FilledForm};

use super::document::LoadedDocument;

/// Output format for a report.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Result of processing one document.
#[derive(Debug, Serialize)]
pub struct Report {
    pub status: &'static str,
    pub filename: String,
    pub source: &'static str,
    pub page_count: u32,
    pub language: String,
    pub template: &'static str,
    pub processed_at: DateTime<Utc>,
    pub filled_form: FilledForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
}

impl Report {
    pub fn new(path: &Path, document: LoadedDocument, form: FilledForm, include_text: bool) -> Self {
        Self {
            status: "success",
            filename: file_name(path),
            source: document.kind.label(),
            page_count: document.page_count,
            language: form.language.clone(),
            template: form.template,
            processed_at: Utc::now(),
            filled_form: form,
            ocr_text: include_text.then_some(document.text),
        }
    }

    /// Required fields with a value.
    pub fn found(&self) -> usize {
        self.filled_form.fields.values().filter(|v| !v.is_empty()).count()
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string()
}

pub fn format_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &Report) -> anyhow::Result<String> {
    let form = &report.filled_form;
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["filename", "template", "language"];
    header.extend(form.fields.keys().map(Field::key));
    wtr.write_record(&header)?;

    let mut row = vec![report.filename.as_str(), report.template, report.language.as_str()];
    row.extend(form.fields.values().map(String::as_str));
    wtr.write_record(&row)?;

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(report: &Report) -> String {
    let form = &report.filled_form;
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", form.template_title, form.template));
    output.push_str(&format!("Document: {}\n", report.filename));
    output.push_str(&format!("Language: {}\n", report.language));
    output.push('\n');

    for (field, value) in &form.fields {
        let value = if value.is_empty() { "-" } else { value.as_str() };
        output.push_str(&format!("{:<16} {}\n", format!("{}:", field.label()), value));
    }

    let missing = form.missing();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        output.push_str(&format!("\nNot found: {}\n", labels.join(", ")));
    }

    if !form.related_links.is_empty() {
        output.push_str("\nRelated links:\n");
        for link in form.related_links {
            let fillable = if link.is_fillable { " (fillable)" } else { "" };
            output.push_str(&format!("  {}: {}{}\n", link.name, link.url, fillable));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::document::SourceKind;
    use idform_core::FormExtractor;

    fn report(text: &str, template: &str) -> Report {
        let form = FormExtractor::new().extract(text, "en", template);
        let document = LoadedDocument {
            text: text.to_string(),
            page_count: 1,
            kind: SourceKind::Text,
        };
        Report::new(Path::new("/tmp/card.txt"), document, form, false)
    }

    #[test]
    fn test_csv_has_template_columns() {
        let csv = format_csv(&report("PAN: ABCDE1234F", "pan")).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("filename,template,language,full_name,dob,address,pan,phone")
        );
        assert_eq!(lines.next(), Some("card.txt,pan,en,,,,ABCDE1234F,"));
    }

    #[test]
    fn test_text_marks_missing_fields() {
        let text = format_text(&report("PAN: ABCDE1234F", "pan"));
        assert!(text.starts_with("PAN Application (Form 49A) (pan)"));
        assert!(text.contains("PAN Number:      ABCDE1234F"));
        assert!(text.contains("Full Name:       -"));
        assert!(text.contains("Not found: Full Name, "));
        assert!(!text.contains("Not found: PAN"));
        assert!(text.contains("(fillable)"));
    }

    #[test]
    fn test_json_omits_text_unless_requested() {
        let r = report("PAN: ABCDE1234F", "pan");
        assert_eq!(r.found(), 1);
        let json: serde_json::Value =
            serde_json::from_str(&format_report(&r, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["filled_form"]["pan"], "ABCDE1234F");
        assert!(json.get("ocr_text").is_none());
    }
}
