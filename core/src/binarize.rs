use crate::error::{MorseError, Result};
use crate::AMPLITUDE_THRESHOLD;

/// Largest absolute amplitude in the buffer
pub fn peak_amplitude(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
}

/// Turn raw samples into a tone/silence sequence
///
/// Samples are normalized by the peak absolute amplitude; a sample counts as
/// tone (1) when its normalized magnitude exceeds `AMPLITUDE_THRESHOLD`.
/// Fails with `EmptySignal` on an empty or all-zero buffer.
pub fn binarize(samples: &[f32]) -> Result<Vec<u8>> {
    let peak = peak_amplitude(samples);
    if samples.is_empty() || peak == 0.0 {
        return Err(MorseError::EmptySignal);
    }

    let scale = 1.0 / peak;
    Ok(samples
        .iter()
        .map(|s| u8::from(s.abs() * scale > AMPLITUDE_THRESHOLD))
        .collect())
}
