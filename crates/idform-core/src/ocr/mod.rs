//! OCR sources: turn a document image into raw text for extraction.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Recognizes text in a document image.
pub trait OcrProvider {
    /// Full text of the image in reading order, lines separated by `\n`.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}

/// A recognized text line with its axis-aligned bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBox {
    /// (min_x, min_y, max_x, max_y) in pixels.
    pub rect: (f32, f32, f32, f32),
    pub text: String,
    pub confidence: f32,
}

/// Boxes whose tops fall in the same band of this many pixels share a row.
const ROW_BAND_PX: f32 = 20.0;

/// Sort boxes top-to-bottom, then left-to-right within a row.
pub fn sort_reading_order(boxes: &mut [TextBox]) {
    boxes.sort_by(|a, b| {
        let row_a = (a.rect.1 / ROW_BAND_PX) as i32;
        let row_b = (b.rect.1 / ROW_BAND_PX) as i32;
        row_a.cmp(&row_b).then_with(|| {
            a.rect
                .0
                .partial_cmp(&b.rect.0)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });
}

/// Join box texts in their current order, skipping blanks.
pub fn join_lines(boxes: &[TextBox]) -> String {
    boxes
        .iter()
        .map(|b| b.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
