use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MorseError {
    #[error("Signal is empty or silent")]
    EmptySignal,

    #[error("Unrecognized Morse symbol: {group}")]
    UnrecognizedSymbol { group: String },

    #[error("Character has no Morse encoding: {0:?}")]
    UnencodableCharacter(char),

    #[error("OCR failure: {0}")]
    OcrFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MorseError {
    /// Stable identifier for the error kind, suitable for wire formats.
    pub fn kind(&self) -> &'static str {
        match self {
            MorseError::EmptySignal => "empty_signal",
            MorseError::UnrecognizedSymbol { .. } => "unrecognized_symbol",
            MorseError::UnencodableCharacter(_) => "unencodable_character",
            MorseError::OcrFailure(_) => "ocr_failure",
            MorseError::InvalidConfig(_) => "invalid_config",
        }
    }
}

pub type Result<T> = std::result::Result<T, MorseError>;
