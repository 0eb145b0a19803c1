//! Morse code translation library
//!
//! Decodes on/off keyed audio into dots, dashes and gaps with a fixed
//! amplitude threshold and a nominal transmission speed, then maps the
//! symbol string to text through a static symbol table.

pub mod error;
pub mod table;
pub mod text;
pub mod waveform;
pub mod binarize;
pub mod segment;
pub mod classify;
pub mod decoder;
pub mod encoder;
pub mod ocr;

pub use decoder::{Decoded, Decoder};
pub use encoder::ToneEncoder;
pub use error::{MorseError, Result};
pub use ocr::{translate_image, TextExtractor};
pub use segment::{Run, RunState};
pub use table::{decode_symbol, encode_char, symbol_table};
pub use text::{looks_like_morse, morse_to_text, text_to_morse, translate, Direction, Translation};
pub use waveform::Waveform;

// Timing configuration
pub const DEFAULT_WPM: f64 = 20.0;
pub const PARIS_UNIT_SECONDS: f64 = 1.2; // unit = 1.2 / WPM
pub const DOT_DASH_BOUNDARY_UNITS: f64 = 1.5;
pub const LETTER_GAP_UNITS: f64 = 2.0;
pub const WORD_GAP_UNITS: f64 = 6.0;

// Detection configuration
pub const AMPLITUDE_THRESHOLD: f32 = 0.2; // ~ -30 dB relative to peak (approximation)

// Synthesis configuration
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;
pub const DEFAULT_TONE_FREQUENCY: f32 = 700.0; // Hz
pub const DEFAULT_TONE_AMPLITUDE: f32 = 0.5;

// Token layout of a Morse symbol string
pub const LETTER_SEPARATOR: &str = " ";
pub const WORD_SEPARATOR: &str = " / ";

/// Duration of one dot in seconds at the given speed.
pub fn unit_time(wpm: f64) -> f64 {
    PARIS_UNIT_SECONDS / wpm
}
