use tracing::{info, warn};

use crate::config::SlotConfig;
use crate::types::{Slot, SubtitleBlock, TranscriptFragment};

use super::accumulator::SlotAccumulator;
use super::error::{Result, SlotError};
use super::windows::build_slots;

/// Build slots covering `total_duration` and distribute every fragment's
/// words across the slots its (padded) time range overlaps.
///
/// Fragments without a usable time range are appended, in arrival order, to
/// the last slot once everything else is placed.
pub fn assign_fragments(
    fragments: &[TranscriptFragment],
    total_duration: f64,
    config: &SlotConfig,
) -> Result<Vec<Slot>> {
    if !config.end_pad.is_finite() || config.end_pad < 0.0 {
        return Err(SlotError::InvalidEndPad(config.end_pad));
    }
    let slots = build_slots(total_duration, config.slot_length)?;
    if slots.is_empty() {
        if !fragments.is_empty() {
            warn!(
                fragments = fragments.len(),
                "no slots for zero-length audio; transcript dropped"
            );
        }
        return Ok(slots);
    }

    let slot_count = slots.len();
    let mut accumulator =
        SlotAccumulator::new(slots, total_duration, config.slot_length, config.end_pad);
    for fragment in fragments {
        accumulator.handle_fragment(fragment);
    }
    info!(
        slots = slot_count,
        fragments = fragments.len(),
        untimed = accumulator.untimed_count(),
        "assigned transcript to slots"
    );
    Ok(accumulator.finish())
}

/// Final numbered blocks, with `empty_text` standing in for silent slots.
pub fn render_blocks(slots: &[Slot], empty_text: &str) -> Vec<SubtitleBlock> {
    slots
        .iter()
        .map(|slot| {
            let text = slot.rendered_text();
            SubtitleBlock {
                index: slot.index + 1,
                start: slot.start,
                end: slot.end,
                text: if text.is_empty() {
                    empty_text.to_string()
                } else {
                    text
                },
            }
        })
        .collect()
}
