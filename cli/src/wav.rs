use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec};
use morsewave_core::Waveform;

use crate::error::{CliError, Result};

/// Read a WAV stream into a mono waveform
///
/// Integer PCM up to 32 bits and 32-bit float PCM are accepted. Multi-channel
/// files keep only the first channel.
pub fn read_wav<R: Read>(reader: R) -> Result<Waveform> {
    let mut reader = hound::WavReader::new(reader)?;
    let spec = reader.spec();
    log::info!(
        "Read WAV: {} Hz, {} channels, {} bits",
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample
    );

    let samples: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, hound::Error>>()?,
        (SampleFormat::Int, bits @ 1..=32) => {
            let scale = 1.0 / (1u64 << (bits - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 * scale))
                .collect::<std::result::Result<Vec<f32>, hound::Error>>()?
        }
        (format, bits) => {
            return Err(CliError::UnsupportedFormat(format!(
                "{:?} with {} bits per sample",
                format, bits
            )));
        }
    };

    log::info!("Extracted {} samples", samples.len());
    Ok(Waveform::from_interleaved(
        &samples,
        spec.channels as usize,
        spec.sample_rate,
    )?)
}

pub fn read_wav_file(path: &Path) -> Result<Waveform> {
    read_wav(BufReader::new(File::open(path)?))
}

/// Write a waveform as mono 16-bit PCM
pub fn write_wav<W: Write + Seek>(writer: W, waveform: &Waveform) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: waveform.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::new(writer, spec)?;
    for &sample in waveform.samples() {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * 32767.0) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

pub fn write_wav_file(path: &Path, waveform: &Waveform) -> Result<()> {
    write_wav(File::create(path)?, waveform)
}

#[cfg(test)]
pub(crate) fn wav_bytes(waveform: &Waveform) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_wav(&mut cursor, waveform)?;
    Ok(cursor.into_inner())
}
