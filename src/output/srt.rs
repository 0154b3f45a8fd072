use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::SubtitleBlock;

/// Format seconds as an SRT timestamp (`HH:MM:SS,mmm`).
///
/// Milliseconds are rounded half-to-even; a round-up to 1000 ms carries into
/// the seconds field. Negative input clamps to zero.
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let whole = seconds.trunc();
    let mut millis = ((seconds - whole) * 1000.0).round_ties_even() as u64;
    let mut total_secs = whole as u64;
    if millis >= 1000 {
        total_secs += 1;
        millis = 0;
    }
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

pub fn write_srt<W: Write>(writer: &mut W, blocks: &[SubtitleBlock]) -> Result<()> {
    for block in blocks {
        write!(
            writer,
            "{}\n{} --> {}\n{}\n\n",
            block.index,
            format_timestamp(block.start),
            format_timestamp(block.end),
            block.text
        )
        .with_context(|| format!("Failed to write subtitle block {}", block.index))?;
    }
    Ok(())
}

pub fn write_srt_file<P: AsRef<Path>>(path: P, blocks: &[SubtitleBlock]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create SRT file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_srt(&mut writer, blocks)?;
    writer.flush().context("Failed to flush SRT file")?;
    Ok(())
}
