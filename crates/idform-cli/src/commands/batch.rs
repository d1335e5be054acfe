//! Batch command - fill forms from many documents.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use idform_core::{Field, FormExtractor};

use super::config::load_config;
use super::document::{is_supported, DocumentLoader};
use super::process::fill_form;
use super::report::{file_name, format_report, OutputFormat, Report};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern for input files
    #[arg(required = true)]
    input: String,

    /// Form template id (default from config)
    #[arg(short, long)]
    template: Option<String>,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// Outcome for a single file.
struct BatchResult {
    path: PathBuf,
    report: Option<Report>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && is_supported(p))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let engine = FormExtractor::from_config(&config.extraction);
    let mut loader = DocumentLoader::new(&config, args.model_dir.clone(), false);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = loader.load(&path).map(|document| {
            let (_, form) = fill_form(&engine, &config, &document, args.template.as_deref(), None);
            Report::new(&path, document, form, false)
        });
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(report) => results.push(BatchResult {
                path,
                report: Some(report),
                error: None,
                processing_time_ms,
            }),
            Err(e) if args.continue_on_error => {
                warn!("Failed to process {}: {}", path.display(), e);
                results.push(BatchResult {
                    path,
                    report: None,
                    error: Some(e.to_string()),
                    processing_time_ms,
                });
            }
            Err(e) => {
                error!("Failed to process {}: {}", path.display(), e);
                pb.abandon();
                anyhow::bail!("Processing failed for {}: {}", path.display(), e);
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if let Some(ref output_dir) = args.output_dir {
        let mut used = HashSet::new();
        for result in &results {
            if let Some(report) = &result.report {
                let name = output_name(&result.path, args.format, &mut used);
                let output_path = output_dir.join(name);
                fs::write(&output_path, format_report(report, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<&BatchResult> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Output file name for an input: its stem, or stem plus extension when
/// another input in the batch already took the stem (`card.pdf` and
/// `card.txt` become `card.json` and `card_txt.json`).
fn output_name(path: &Path, format: OutputFormat, used: &mut HashSet<String>) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let mut name = format!("{}.{}", stem, format.extension());
    if !used.insert(name.clone()) {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        name = format!("{}_{}.{}", stem, ext, format.extension());
        warn!(
            "Output name for {} is taken, writing {} instead",
            path.display(),
            name
        );
        used.insert(name.clone());
    }
    name
}

fn write_summary(path: &Path, results: &[BatchResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename", "status", "template", "language"];
    header.extend(Field::ALL.iter().map(Field::key));
    header.extend(["fields_found", "processing_time_ms", "error"]);
    wtr.write_record(&header)?;

    for result in results {
        let filename = file_name(&result.path);
        let time_ms = result.processing_time_ms.to_string();

        let mut row: Vec<String> = vec![filename];
        match &result.report {
            Some(report) => {
                row.extend(["success", report.template, report.language.as_str()].map(String::from));
                for field in Field::ALL {
                    row.push(report.filled_form.get(field).unwrap_or("").to_string());
                }
                row.extend([report.found().to_string(), time_ms, String::new()]);
            }
            None => {
                row.extend(["error", "", ""].map(String::from));
                row.extend(Field::ALL.iter().map(|_| String::new()));
                row.extend([
                    String::new(),
                    time_ms,
                    result.error.clone().unwrap_or_default(),
                ]);
            }
        }
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
