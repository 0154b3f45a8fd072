use crate::types::{AudioData, Transcript, TranscriptFragment};
use anyhow::{ensure, Context, Result};
use std::path::Path;
use tracing::{debug, info};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::resample::TRANSCRIBE_SAMPLE_RATE;

/// Transcribe 16 kHz mono audio into timestamped fragments with whisper.cpp
///
/// # Arguments
/// * `audio` - Audio already resampled to 16 kHz
/// * `model_path` - ggml model file, e.g. `ggml-large-v3.bin`
/// * `language` - Language hint; `None` lets whisper auto-detect
pub fn transcribe_audio(
    audio: &AudioData,
    model_path: &Path,
    language: Option<&str>,
) -> Result<Transcript> {
    ensure!(
        audio.sample_rate == TRANSCRIBE_SAMPLE_RATE,
        "Whisper expects {} Hz audio, got {} Hz",
        TRANSCRIBE_SAMPLE_RATE,
        audio.sample_rate
    );
    let model = model_path
        .to_str()
        .with_context(|| format!("Model path is not valid UTF-8: {:?}", model_path))?;

    let ctx = WhisperContext::new_with_params(model, WhisperContextParameters::default())
        .with_context(|| format!("Failed to load Whisper model from {:?}", model_path))?;
    info!(model = %model_path.display(), "whisper model loaded");

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    params.set_language(Some(language.unwrap_or("auto")));
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    let mut state = ctx
        .create_state()
        .context("Failed to create Whisper state")?;
    state
        .full(params, &audio.samples)
        .context("Failed to transcribe audio")?;

    let mut fragments = Vec::new();
    for segment in state.as_iter() {
        let text = segment
            .to_str()
            .context("Failed to get segment text")?
            .to_string();
        // Timestamps are in centiseconds
        let start = segment.start_timestamp() as f64 / 100.0;
        let end = segment.end_timestamp() as f64 / 100.0;
        debug!(start, end, text = %text, "whisper segment");
        fragments.push(TranscriptFragment::timed(start, end, text));
    }

    Ok(Transcript { fragments })
}
