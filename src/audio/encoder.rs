use crate::types::AudioData;
use anyhow::{Context, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

/// Write mono audio as 16-bit PCM WAV.
pub fn encode_wav<P: AsRef<Path>>(audio: &AudioData, path: P) -> Result<()> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: 1,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;
    {
        let mut pcm = writer.get_i16_writer(audio.samples.len() as u32);
        for &sample in &audio.samples {
            pcm.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16);
        }
        pcm.flush().context("Failed to write WAV samples")?;
    }
    writer.finalize().context("Failed to finalize WAV file")?;
    Ok(())
}
