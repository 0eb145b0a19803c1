use crate::error::{MorseError, Result};
use crate::segment::Run;
use crate::{
    unit_time, DEFAULT_WPM, DOT_DASH_BOUNDARY_UNITS, LETTER_GAP_UNITS, LETTER_SEPARATOR, WORD_GAP_UNITS,
    WORD_SEPARATOR,
};

/// Element decided from a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Dot,
    Dash,
}

impl Element {
    pub fn as_char(&self) -> char {
        match self {
            Element::Dot => '.',
            Element::Dash => '-',
        }
    }
}

/// Meaning of the silence between two tones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Intra-letter spacing, emits nothing
    Element,
    Letter,
    Word,
}

/// Maps run durations to Morse tokens at a fixed, assumed speed
///
/// The unit time is derived from the configured WPM only; it is never
/// measured from the signal, so audio keyed at a very different speed
/// is misclassified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolClassifier {
    wpm: f64,
    unit_secs: f64,
}

impl SymbolClassifier {
    pub fn new(wpm: f64) -> Result<Self> {
        if !wpm.is_finite() || wpm <= 0.0 {
            return Err(MorseError::InvalidConfig(format!(
                "WPM must be a positive number, got {}",
                wpm
            )));
        }
        Ok(Self {
            wpm,
            unit_secs: unit_time(wpm),
        })
    }

    pub fn wpm(&self) -> f64 {
        self.wpm
    }

    /// Dot length in seconds
    pub fn unit_secs(&self) -> f64 {
        self.unit_secs
    }

    pub fn classify_tone(&self, secs: f64) -> Element {
        if secs < self.unit_secs * DOT_DASH_BOUNDARY_UNITS {
            Element::Dot
        } else {
            Element::Dash
        }
    }

    pub fn classify_gap(&self, secs: f64) -> Gap {
        if secs > self.unit_secs * WORD_GAP_UNITS {
            Gap::Word
        } else if secs > self.unit_secs * LETTER_GAP_UNITS {
            Gap::Letter
        } else {
            Gap::Element
        }
    }

    /// Build the Morse symbol string for a run sequence
    ///
    /// Tone runs become dots or dashes. A silence run only emits a separator
    /// when it sits between two tones; leading and trailing silence is ignored.
    pub fn classify(&self, runs: &[Run], sample_rate: u32) -> String {
        let mut morse = String::new();
        let mut seen_tone = false;
        let mut pending_gap = None;

        for run in runs {
            let secs = run.seconds(sample_rate);
            if !run.is_tone() {
                pending_gap = Some(secs);
                continue;
            }

            if let (true, Some(gap_secs)) = (seen_tone, pending_gap.take()) {
                match self.classify_gap(gap_secs) {
                    Gap::Word => morse.push_str(WORD_SEPARATOR),
                    Gap::Letter => morse.push_str(LETTER_SEPARATOR),
                    Gap::Element => {}
                }
            }
            morse.push(self.classify_tone(secs).as_char());
            seen_tone = true;
        }

        morse
    }
}

impl Default for SymbolClassifier {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            unit_secs: unit_time(DEFAULT_WPM),
        }
    }
}
