//! autosrt - fixed-length subtitle slots from a timestamped transcript
//!
//! Decodes a media file, takes a transcript (from JSON or whisper.cpp), pours
//! its words into equal-length time slots covering the whole file, and writes
//! an SRT file plus per-block keyword prompts.

pub mod audio;
pub mod config;
pub mod output;
pub mod slots;
pub mod transcription;
pub mod types;
