//! Turning input files into raw text: plain text, PDF text layers, or OCR.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info, warn};

use idform_core::models::config::{IdformConfig, OcrConfig, PdfConfig};
use idform_core::pdf::{PdfExtractor, PdfProcessor, PdfType};
use idform_core::{OcrProvider, PureOcrEngine};

pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text"];
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp"];

/// Where a document's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Text,
    Pdf(PdfType),
    Image,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Text => "text",
            SourceKind::Pdf(PdfType::Text) => "pdf_text",
            SourceKind::Pdf(PdfType::Image) => "pdf_image",
            SourceKind::Pdf(PdfType::Hybrid) => "pdf_hybrid",
            SourceKind::Pdf(PdfType::Empty) => "pdf_empty",
            SourceKind::Image => "image",
        }
    }
}

/// Raw text of one input file.
#[derive(Debug)]
pub struct LoadedDocument {
    pub text: String,
    pub page_count: u32,
    pub kind: SourceKind,
}

/// Whether a path has an extension the loader understands.
pub fn is_supported(path: &Path) -> bool {
    let ext = extension(path);
    TEXT_EXTENSIONS.contains(&ext.as_str())
        || IMAGE_EXTENSIONS.contains(&ext.as_str())
        || ext == "pdf"
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Loads documents, keeping the OCR engine around once it has been built.
pub struct DocumentLoader {
    ocr_config: OcrConfig,
    pdf_config: PdfConfig,
    model_dir: PathBuf,
    text_only: bool,
    engine: Option<PureOcrEngine>,
}

impl DocumentLoader {
    pub fn new(config: &IdformConfig, model_dir: Option<PathBuf>, text_only: bool) -> Self {
        Self {
            model_dir: model_dir.unwrap_or_else(|| config.ocr.model_dir.clone()),
            ocr_config: config.ocr.clone(),
            pdf_config: config.pdf.clone(),
            text_only,
            engine: None,
        }
    }

    pub fn load(&mut self, path: &Path) -> anyhow::Result<LoadedDocument> {
        let ext = extension(path);
        info!("Loading {} ({})", path.display(), ext);

        if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Ok(LoadedDocument {
                text: fs::read_to_string(path)?,
                page_count: 1,
                kind: SourceKind::Text,
            });
        }
        if ext == "pdf" {
            return self.load_pdf(path);
        }
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return self.load_image(path);
        }
        anyhow::bail!("Unsupported file format: {}", ext)
    }

    fn load_pdf(&mut self, path: &Path) -> anyhow::Result<LoadedDocument> {
        let data = fs::read(path)?;
        let mut pdf = PdfExtractor::new().with_min_text_length(self.pdf_config.min_text_length);
        pdf.load(&data)?;

        let page_count = pdf.page_count();
        let pdf_type = pdf.analyze();
        debug!("PDF has {} pages, type {:?}", page_count, pdf_type);

        let use_embedded = pdf_type.has_text()
            && (self.pdf_config.prefer_embedded_text || self.text_only || !pdf_type.has_images());

        let text = if use_embedded {
            pdf.extract_text()?
        } else if pdf_type.has_images() {
            if self.text_only {
                anyhow::bail!(
                    "PDF is image-based but --text-only was set. Remove the flag to use OCR."
                );
            }
            match self.ocr_pdf(&pdf, page_count) {
                Ok(text) => text,
                Err(e) => {
                    warn!("OCR unavailable ({}), using embedded PDF text", e);
                    pdf.extract_text().unwrap_or_default()
                }
            }
        } else {
            warn!("PDF has neither a text layer nor images");
            pdf.extract_text().unwrap_or_default()
        };

        Ok(LoadedDocument {
            text,
            page_count,
            kind: SourceKind::Pdf(pdf_type),
        })
    }

    fn ocr_pdf(&mut self, pdf: &PdfExtractor, page_count: u32) -> anyhow::Result<String> {
        let last_page = match self.pdf_config.max_pages {
            0 => page_count,
            max => page_count.min(u32::try_from(max).unwrap_or(u32::MAX)),
        };
        let mut pages = Vec::new();

        for page in 1..=last_page {
            let images = match pdf.extract_images(page) {
                Ok(images) => images,
                Err(e) => {
                    warn!("Failed to extract images from page {}: {}", page, e);
                    continue;
                }
            };
            for image in &images {
                let text = self.recognize(image)?;
                if !text.trim().is_empty() {
                    pages.push(text);
                }
            }
        }

        if pages.is_empty() {
            anyhow::bail!("No text detected in any PDF images");
        }
        Ok(pages.join("\n\n"))
    }

    fn load_image(&mut self, path: &Path) -> anyhow::Result<LoadedDocument> {
        if self.text_only {
            anyhow::bail!("Images need OCR but --text-only was set");
        }
        let image = image::open(path)?;
        Ok(LoadedDocument {
            text: self.recognize(&image)?,
            page_count: 1,
            kind: SourceKind::Image,
        })
    }

    fn recognize(&mut self, image: &DynamicImage) -> anyhow::Result<String> {
        Ok(self.engine()?.recognize(image)?)
    }

    fn engine(&mut self) -> anyhow::Result<&PureOcrEngine> {
        if !self.ocr_config.enabled {
            anyhow::bail!("OCR is disabled in the configuration");
        }
        let engine = match self.engine.take() {
            Some(engine) => engine,
            None => {
                if !self.ocr_config.models_present(&self.model_dir) {
                    anyhow::bail!(
                        "OCR models not found in {}. Expected {}, {} and {}.",
                        self.model_dir.display(),
                        self.ocr_config.detection_model,
                        self.ocr_config.recognition_model,
                        self.ocr_config.dictionary
                    );
                }
                PureOcrEngine::from_dir(&self.model_dir, &self.ocr_config)?
            }
        };
        Ok(self.engine.insert(engine))
    }
}
