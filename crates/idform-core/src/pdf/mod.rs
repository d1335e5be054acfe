//! PDF document sources.

mod extractor;

pub use extractor::PdfExtractor;

use image::DynamicImage;

use crate::error::PdfError;

/// What a PDF carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Extractable text only.
    Text,
    /// Images only (scanned document).
    Image,
    /// Both text and images.
    Hybrid,
    /// Neither.
    Empty,
}

impl PdfType {
    /// Whether the embedded text is worth using.
    pub fn has_text(&self) -> bool {
        matches!(self, PdfType::Text | PdfType::Hybrid)
    }

    /// Whether there are page images to OCR.
    pub fn has_images(&self) -> bool {
        matches!(self, PdfType::Image | PdfType::Hybrid)
    }
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A loaded PDF.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages; 0 before loading.
    fn page_count(&self) -> u32;

    /// Classify the document by text and image content.
    fn analyze(&self) -> PdfType;

    /// Text of the whole document.
    fn extract_text(&self) -> Result<String>;

    /// Images on a page (1-indexed).
    fn extract_images(&self, page: u32) -> Result<Vec<DynamicImage>>;
}
