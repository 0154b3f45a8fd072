use anyhow::{ensure, Result};
use dasp::interpolate::linear::Linear;
use dasp::{signal, Signal};

/// Sample rate whisper.cpp expects its input at.
pub const TRANSCRIBE_SAMPLE_RATE: u32 = 16_000;

/// Resample mono `samples` from `source_rate` to `target_rate` with linear
/// interpolation. The output length is `ceil(len * target / source)`.
pub fn resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    ensure!(source_rate > 0, "source sample rate must be positive");
    ensure!(target_rate > 0, "target sample rate must be positive");
    if samples.is_empty() || source_rate == target_rate {
        return Ok(samples.to_vec());
    }

    let output_len =
        (samples.len() as f64 * target_rate as f64 / source_rate as f64).ceil() as usize;
    let mut source = signal::from_iter(samples.iter().copied());
    let left = source.next();
    let right = source.next();
    let converter = source.from_hz_to_hz(
        Linear::new(left, right),
        source_rate as f64,
        target_rate as f64,
    );
    Ok(converter.take(output_len).collect())
}
