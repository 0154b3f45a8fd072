//! Core types for the autosrt subtitle pipeline

use crate::slots::text::clean;

/// Raw audio data representation (mono, f32 samples)
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Audio samples, normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz (e.g., 16000)
    pub sample_rate: u32,
}

impl AudioData {
    /// Playback length in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Transcription output: fragments in the order the engine emitted them
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub fragments: Vec<TranscriptFragment>,
}

/// A unit of transcribed text with an optional time range
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptFragment {
    pub start: Option<f64>, // seconds
    pub end: Option<f64>,   // seconds
    pub text: String,
}

impl TranscriptFragment {
    pub fn timed(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            text: text.into(),
        }
    }

    pub fn untimed(text: impl Into<String>) -> Self {
        Self {
            start: None,
            end: None,
            text: text.into(),
        }
    }

    /// Usable `(start, end)` pair, or `None` when a bound is missing or the
    /// range is empty or inverted.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if end > start => Some((start, end)),
            _ => None,
        }
    }
}

/// A fixed-length output window that becomes one subtitle block
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// 0-based position
    pub index: usize,
    pub start: f64, // seconds
    pub end: f64,   // seconds
    /// Token chunks in the order fragments were processed
    pub texts: Vec<String>,
}

impl Slot {
    pub fn new(index: usize, start: f64, end: f64) -> Self {
        Self {
            index,
            start,
            end,
            texts: Vec::new(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Space-joined, normalized text; empty when nothing landed here
    pub fn rendered_text(&self) -> String {
        clean(&self.texts.join(" "))
    }
}

/// A slot ready for emission: 1-based index and final display text
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleBlock {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}
