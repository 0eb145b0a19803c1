use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use morsewave_core::{MorseError, Result, TextExtractor};

/// OCR through the `tesseract` command-line engine
///
/// Image bytes go in on stdin, recognized text comes back on stdout.
/// Requires `tesseract` 4+ on PATH (or an explicit program path).
#[derive(Debug, Clone)]
pub struct TesseractExtractor {
    program: PathBuf,
}

impl TesseractExtractor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract_text(&self, image: &[u8]) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(["stdin", "stdout"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                MorseError::OcrFailure(format!("failed to run {}: {}", self.program.display(), e))
            })?;

        // tesseract reads the whole image before writing anything. If it
        // exits early the write fails; the child is still reaped below and
        // its stderr reported.
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(image),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| MorseError::OcrFailure(format!("tesseract did not finish: {}", e)))?;
        let stderr = String::from_utf8_lossy(&output.stderr);

        if let Err(e) = write_result {
            return Err(MorseError::OcrFailure(format!(
                "failed to send image ({}), tesseract {}: {}",
                e,
                output.status,
                stderr.trim()
            )));
        }

        if !output.status.success() {
            return Err(MorseError::OcrFailure(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        log::debug!("tesseract returned {} bytes", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_ocr_failure() {
        let extractor = TesseractExtractor::new("/nonexistent/morsewave-tesseract");
        assert!(matches!(
            extractor.extract_text(b"\x89PNG"),
            Err(MorseError::OcrFailure(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_reports_stderr() {
        // sh takes the "stdin" argument as a script path, fails to open it and
        // exits without reading the pipe; 4 MiB overflows the pipe buffer
        let extractor = TesseractExtractor::new("/bin/sh");
        let err = extractor.extract_text(&vec![0u8; 4 << 20]).unwrap_err();

        match err {
            MorseError::OcrFailure(msg) => {
                assert!(msg.contains("exit status"), "{}", msg);
                assert!(msg.contains("stdin"), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
