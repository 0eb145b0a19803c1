use crate::error::{MorseError, Result};
use crate::text::{translate, Translation};

/// Source of text recognized in an image
pub trait TextExtractor {
    /// Extract text from encoded image bytes (PNG, JPEG, ...).
    /// An empty string means nothing was recognized.
    fn extract_text(&self, image: &[u8]) -> Result<String>;
}

/// Recognize text in an image and translate it
///
/// Morse-looking output is decoded to text, anything else is encoded to
/// Morse. Blank extractor output is reported as `OcrFailure`.
pub fn translate_image<E: TextExtractor + ?Sized>(extractor: &E, image: &[u8]) -> Result<Translation> {
    let extracted = extractor.extract_text(image)?;
    if extracted.trim().is_empty() {
        return Err(MorseError::OcrFailure("no text detected in the image".to_string()));
    }
    log::debug!("extracted {} chars from {} byte image", extracted.len(), image.len());
    translate(&extracted)
}
