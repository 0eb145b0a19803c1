use morsewave_core::MorseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Morse(#[from] MorseError),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported WAV format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
