//! Transcription sources - produce timestamped fragments for slot assignment
//!
//! Fragments come either from a JSON file written by an external engine, or
//! (with the `whisper` feature) from running whisper.cpp on the decoded audio.

#[cfg(feature = "whisper")]
mod whisper;

#[cfg(feature = "whisper")]
pub use whisper::transcribe_audio;

use crate::types::{Transcript, TranscriptFragment};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A fragment as written by an engine: either explicit `start`/`end` keys or
/// a two-element `timestamp` array, with `null` for unknown bounds. Other
/// keys engines add (`id`, `seek`, `speaker`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct RawFragment {
    #[serde(default)]
    start: Option<f64>,
    #[serde(default)]
    end: Option<f64>,
    #[serde(default)]
    timestamp: Option<(Option<f64>, Option<f64>)>,
    #[serde(default)]
    text: String,
}

/// Either a bare fragment list or an engine result object carrying `chunks`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTranscript {
    Fragments(Vec<RawFragment>),
    Envelope { chunks: Vec<RawFragment> },
}

impl From<RawFragment> for TranscriptFragment {
    fn from(raw: RawFragment) -> Self {
        let (start, end) = match raw.timestamp {
            Some(pair) => pair,
            None => (raw.start, raw.end),
        };
        TranscriptFragment {
            start,
            end,
            text: raw.text,
        }
    }
}

/// Parse a transcript from JSON text
pub fn parse_transcript(raw: &str) -> Result<Transcript> {
    let parsed: RawTranscript =
        serde_json::from_str(raw).context("Failed to parse transcript JSON")?;
    let raw_fragments = match parsed {
        RawTranscript::Fragments(fragments) => fragments,
        RawTranscript::Envelope { chunks } => chunks,
    };
    Ok(Transcript {
        fragments: raw_fragments.into_iter().map(Into::into).collect(),
    })
}

/// Load a transcript previously written by an external engine
pub fn load_transcript<P: AsRef<Path>>(path: P) -> Result<Transcript> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read transcript file {:?}", path))?;
    parse_transcript(&raw).with_context(|| format!("Invalid transcript file {:?}", path))
}
