use crate::binarize::binarize;
use crate::classify::SymbolClassifier;
use crate::error::Result;
use crate::segment::segment;
use crate::text::morse_to_text;
use crate::waveform::Waveform;

/// Output of a successful audio decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub morse: String,
    pub text: String,
}

/// Audio-to-text Morse decoder
///
/// Stateless between calls: decoding the same waveform twice gives the same
/// result, and one decoder can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoder {
    classifier: SymbolClassifier,
}

impl Decoder {
    pub fn new(wpm: f64) -> Result<Self> {
        Ok(Self {
            classifier: SymbolClassifier::new(wpm)?,
        })
    }

    pub fn wpm(&self) -> f64 {
        self.classifier.wpm()
    }

    /// Decode audio samples to a Morse symbol string
    /// Pipeline: binarize -> segment into runs -> classify runs
    pub fn decode_symbols(&self, waveform: &Waveform) -> Result<String> {
        let binary = binarize(waveform.samples())?;
        let runs = segment(&binary);
        log::debug!(
            "segmented {} samples into {} runs ({} tone), unit {:.1} ms",
            binary.len(),
            runs.len(),
            runs.iter().filter(|r| r.is_tone()).count(),
            self.classifier.unit_secs() * 1000.0
        );
        Ok(self.classifier.classify(&runs, waveform.sample_rate()))
    }

    /// Decode audio samples to both the Morse symbol string and its text
    pub fn decode(&self, waveform: &Waveform) -> Result<Decoded> {
        let morse = self.decode_symbols(waveform)?;
        let text = morse_to_text(&morse)?;
        Ok(Decoded { morse, text })
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self {
            classifier: SymbolClassifier::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MorseError;

    fn keyed(pattern: &[(bool, usize)]) -> Waveform {
        let mut samples = Vec::new();
        for &(on, len) in pattern {
            let value = if on { 0.5 } else { 0.0 };
            samples.extend(std::iter::repeat(value).take(len));
        }
        Waveform::new(samples, 8000).unwrap()
    }

    #[test]
    fn test_decode_letters() {
        // A = .-  N = -.
        let wave = keyed(&[
            (false, 800),
            (true, 480), (false, 480), (true, 1440),
            (false, 1440),
            (true, 1440), (false, 480), (true, 480),
            (false, 800),
        ]);
        let decoded = Decoder::default().decode(&wave).unwrap();
        assert_eq!(decoded.morse, ".- -.");
        assert_eq!(decoded.text, "AN");
    }

    #[test]
    fn test_silent_waveform() {
        let wave = Waveform::new(vec![0.0; 8000], 8000).unwrap();
        assert_eq!(Decoder::default().decode(&wave), Err(MorseError::EmptySignal));
    }

    #[test]
    fn test_constant_tone_is_single_symbol() {
        let wave = Waveform::new(vec![0.7; 8000], 8000).unwrap();
        let decoded = Decoder::default().decode(&wave).unwrap();
        assert_eq!(decoded.morse, "-");
        assert_eq!(decoded.text, "T");
    }

    #[test]
    fn test_unrecognized_group_surfaces() {
        // six dots in one letter
        let mut pattern = Vec::new();
        for i in 0..6 {
            if i > 0 {
                pattern.push((false, 480));
            }
            pattern.push((true, 480));
        }
        let err = Decoder::default().decode(&keyed(&pattern)).unwrap_err();
        assert_eq!(
            err,
            MorseError::UnrecognizedSymbol {
                group: "......".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_wpm() {
        assert!(Decoder::new(0.0).is_err());
        assert_eq!(Decoder::new(15.0).unwrap().wpm(), 15.0);
        assert_eq!(Decoder::default().wpm(), 20.0);
    }
}
