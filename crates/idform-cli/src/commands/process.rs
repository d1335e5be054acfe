//! Process command - fill a form from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use idform_core::language::detect_language_or;
use idform_core::{FilledForm, FormExtractor, IdformConfig};

use super::config::load_config;
use super::document::{DocumentLoader, LoadedDocument};
use super::report::{format_report, OutputFormat, Report};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (text, PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Form template id (default from config)
    #[arg(short, long)]
    template: Option<String>,

    /// Document language (detected when omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Skip OCR and use only embedded PDF text
    #[arg(long)]
    text_only: bool,

    /// Show per-field confidence
    #[arg(long)]
    show_confidence: bool,

    /// Include the recognized text in the report
    #[arg(long)]
    show_text: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Reading document...");
    let mut loader = DocumentLoader::new(&config, args.model_dir.clone(), args.text_only);
    let document = loader.load(&args.input)?;

    pb.set_message("Extracting fields...");
    let engine = FormExtractor::from_config(&config.extraction);
    let (language, form) = fill_form(
        &engine,
        &config,
        &document,
        args.template.as_deref(),
        args.language.as_deref(),
    );

    pb.finish_and_clear();

    let report = Report::new(&args.input, document, form, args.show_text);
    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} {} of {} fields found (language: {})",
            style("ℹ").blue(),
            report.found(),
            report.filled_form.fields.len(),
            language
        );
        for (field, confidence) in &report.filled_form.confidence {
            let mark = if *confidence == 1 {
                style("✓").green()
            } else {
                style("✗").red()
            };
            println!("  {} {}", mark, field.label());
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

/// Detect the language unless given, then extract and project.
pub fn fill_form(
    engine: &FormExtractor,
    config: &IdformConfig,
    document: &LoadedDocument,
    template: Option<&str>,
    language: Option<&str>,
) -> (String, FilledForm) {
    let language = match language {
        Some(language) => language.to_string(),
        None => detect_language_or(&document.text, &config.extraction.default_language),
    };
    let template = template.unwrap_or(&config.extraction.default_template);

    let form = engine.extract(&document.text, &language, template);
    (language, form)
}
