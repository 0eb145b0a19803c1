use crate::error::{MorseError, Result};
use crate::text::text_to_morse;
use crate::waveform::Waveform;
use crate::{
    unit_time, DEFAULT_SAMPLE_RATE, DEFAULT_TONE_AMPLITUDE, DEFAULT_TONE_FREQUENCY, DEFAULT_WPM,
};

/// Silence before and after the keyed message, in units
const DEFAULT_PADDING_UNITS: usize = 3;

const DASH_UNITS: usize = 3;
const ELEMENT_SPACE_UNITS: usize = 1;
const LETTER_SPACE_UNITS: usize = 3;
const WORD_SPACE_UNITS: usize = 7;

/// Below this a 1-unit dot and a 3-unit dash no longer straddle the
/// 1.5-unit decision boundary reliably
const MIN_SAMPLES_PER_UNIT: usize = 2;

/// Keyed tone synthesizer
///
/// Renders a Morse symbol string as an on/off keyed square-wave carrier with
/// standard timing (dot 1 unit, dash 3, element gap 1, letter gap 3,
/// word gap 7). The carrier is a square wave so every keyed sample sits at
/// full amplitude, which keeps the fixed-threshold decoder exact.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneEncoder {
    wpm: f64,
    sample_rate: u32,
    frequency: f32,
    amplitude: f32,
    padding_units: usize,
}

impl ToneEncoder {
    pub fn new(wpm: f64, sample_rate: u32, frequency: f32) -> Result<Self> {
        if !wpm.is_finite() || wpm <= 0.0 {
            return Err(MorseError::InvalidConfig(format!(
                "WPM must be a positive number, got {}",
                wpm
            )));
        }
        if sample_rate == 0 {
            return Err(MorseError::InvalidConfig(
                "sample rate must be positive".to_string(),
            ));
        }
        if !(frequency > 0.0 && frequency <= sample_rate as f32 / 2.0) {
            return Err(MorseError::InvalidConfig(format!(
                "tone frequency {} Hz must be in (0, {}] Hz",
                frequency,
                sample_rate as f32 / 2.0
            )));
        }
        let encoder = Self {
            wpm,
            sample_rate,
            frequency,
            amplitude: DEFAULT_TONE_AMPLITUDE,
            padding_units: DEFAULT_PADDING_UNITS,
        };
        if encoder.samples_per_unit() < MIN_SAMPLES_PER_UNIT {
            return Err(MorseError::InvalidConfig(format!(
                "{} WPM at {} Hz gives {} samples per unit, need at least {}",
                wpm,
                sample_rate,
                encoder.samples_per_unit(),
                MIN_SAMPLES_PER_UNIT
            )));
        }
        Ok(encoder)
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude.clamp(0.0, 1.0);
        self
    }

    pub fn with_padding_units(mut self, units: usize) -> Self {
        self.padding_units = units;
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Samples in one dot at the configured speed
    pub fn samples_per_unit(&self) -> usize {
        (unit_time(self.wpm) * self.sample_rate as f64).round() as usize
    }

    /// Encode text into keyed audio
    pub fn encode(&self, text: &str) -> Result<Waveform> {
        let morse = text_to_morse(text)?;
        self.render(&morse)
    }

    /// Render a Morse symbol string (`.`, `-`, spaces between letters,
    /// `/` between words) into keyed audio
    pub fn render(&self, morse: &str) -> Result<Waveform> {
        let keying = keying_pattern(morse)?;
        let unit = self.samples_per_unit();
        let mut samples = Vec::with_capacity(
            keying.iter().map(|&(_, units)| units * unit).sum::<usize>()
                + 2 * self.padding_units * unit,
        );

        samples.resize(self.padding_units * unit, 0.0);
        for (on, units) in keying {
            let len = units * unit;
            if on {
                let start = samples.len();
                samples.extend((start..start + len).map(|n| self.carrier(n)));
            } else {
                samples.resize(samples.len() + len, 0.0);
            }
        }
        samples.resize(samples.len() + self.padding_units * unit, 0.0);

        log::debug!(
            "rendered {} samples ({} per unit) at {} WPM",
            samples.len(),
            unit,
            self.wpm
        );
        Waveform::new(samples, self.sample_rate)
    }

    fn carrier(&self, n: usize) -> f32 {
        let phase = (n as f64 * self.frequency as f64 / self.sample_rate as f64).fract();
        if phase < 0.5 {
            self.amplitude
        } else {
            -self.amplitude
        }
    }
}

impl Default for ToneEncoder {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            sample_rate: DEFAULT_SAMPLE_RATE,
            frequency: DEFAULT_TONE_FREQUENCY,
            amplitude: DEFAULT_TONE_AMPLITUDE,
            padding_units: DEFAULT_PADDING_UNITS,
        }
    }
}

/// Expand a symbol string into (key down?, units) segments
fn keying_pattern(morse: &str) -> Result<Vec<(bool, usize)>> {
    let mut pattern = Vec::new();
    let words = morse
        .split('/')
        .map(|w| w.split_whitespace().collect::<Vec<_>>())
        .filter(|letters| !letters.is_empty());

    for (w, letters) in words.enumerate() {
        if w > 0 {
            pattern.push((false, WORD_SPACE_UNITS));
        }
        for (l, group) in letters.iter().enumerate() {
            if l > 0 {
                pattern.push((false, LETTER_SPACE_UNITS));
            }
            for (e, c) in group.chars().enumerate() {
                if e > 0 {
                    pattern.push((false, ELEMENT_SPACE_UNITS));
                }
                let units = match c {
                    '.' => 1,
                    '-' => DASH_UNITS,
                    _ => {
                        return Err(MorseError::UnrecognizedSymbol {
                            group: group.to_string(),
                        })
                    }
                };
                pattern.push((true, units));
            }
        }
    }
    Ok(pattern)
}
