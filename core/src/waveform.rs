use crate::error::{MorseError, Result};

/// Mono audio samples with their sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Waveform {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if sample_rate == 0 {
            return Err(MorseError::InvalidConfig(
                "sample rate must be positive".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Build a mono waveform from interleaved multi-channel audio
    ///
    /// Only the first channel is kept; the others are discarded.
    /// A trailing partial frame is dropped.
    ///
    /// # Example
    /// ```
    /// use morsewave_core::Waveform;
    /// let stereo = vec![0.1, 0.9, 0.2, 0.8]; // [L, R, L, R]
    /// let wave = Waveform::from_interleaved(&stereo, 2, 8000).unwrap();
    /// assert_eq!(wave.samples(), &[0.1, 0.2]);
    /// ```
    pub fn from_interleaved(samples: &[f32], channels: usize, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(MorseError::InvalidConfig(
                "channel count must be positive".to_string(),
            ));
        }
        let mono = samples
            .chunks_exact(channels)
            .map(|frame| frame[0])
            .collect();
        Self::new(mono, sample_rate)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
