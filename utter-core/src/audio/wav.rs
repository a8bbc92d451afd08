//! WAV encode/decode for the working artifact

use anyhow::{Context, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

use crate::tts::types::AudioData;

/// Write 16-bit PCM audio to a WAV file, replacing any existing file
pub fn write(path: &Path, audio: &AudioData) -> Result<()> {
    let spec = WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).with_context(|| format!("failed to create {path:?}"))?;

    for chunk in audio.pcm_data.chunks_exact(2) {
        let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
        writer
            .write_sample(sample)
            .context("failed to write sample")?;
    }

    writer.finalize().context("failed to finalize wav file")?;
    Ok(())
}

/// Read a 16-bit PCM WAV file back into audio data
pub fn read(path: &Path) -> Result<AudioData> {
    let mut reader =
        WavReader::open(path).with_context(|| format!("failed to open {path:?}"))?;
    let spec = reader.spec();

    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        anyhow::bail!(
            "unsupported wav format: {}-bit {:?}",
            spec.bits_per_sample,
            spec.sample_format
        );
    }

    let mut pcm_data = Vec::new();
    for sample in reader.samples::<i16>() {
        let sample = sample.context("failed to read sample")?;
        pcm_data.extend_from_slice(&sample.to_le_bytes());
    }

    Ok(AudioData {
        pcm_data,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}
