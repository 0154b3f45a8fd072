use tracing::debug;

use crate::types::{Slot, TranscriptFragment};

use super::allocate::allocate;
use super::text::{clean, tokenize};
use super::windows::{overlap_with, overlapping_indices};

/// Mutable state while fragments are poured into slots.
pub(super) struct SlotAccumulator {
    slots: Vec<Slot>,
    untimed: Vec<String>,
    total_duration: f64,
    slot_length: f64,
    end_pad: f64,
}

impl SlotAccumulator {
    pub(super) fn new(slots: Vec<Slot>, total_duration: f64, slot_length: f64, end_pad: f64) -> Self {
        Self {
            slots,
            untimed: Vec::new(),
            total_duration,
            slot_length,
            end_pad,
        }
    }

    pub(super) fn handle_fragment(&mut self, fragment: &TranscriptFragment) {
        let text = clean(&fragment.text);
        if text.is_empty() || self.slots.is_empty() {
            return;
        }
        match fragment.time_range() {
            Some((start, end)) => self.place_timed(start, end, &text),
            None => {
                debug!(text = %text, "deferring untimed fragment to final slot");
                self.untimed.push(text);
            }
        }
    }

    pub(super) fn untimed_count(&self) -> usize {
        self.untimed.len()
    }

    pub(super) fn finish(mut self) -> Vec<Slot> {
        if !self.untimed.is_empty() {
            let tail = self.untimed.join(" ");
            if let Some(last) = self.slots.last_mut() {
                last.texts.push(tail);
            }
        }
        self.slots
    }

    fn place_timed(&mut self, start: f64, end: f64, text: &str) {
        let padded_end = (end + self.end_pad).min(self.total_duration);
        let (first, last) =
            overlapping_indices(start, padded_end, self.slot_length, self.slots.len());
        let candidates = &mut self.slots[first..=last];

        let weights: Vec<f64> = candidates
            .iter()
            .map(|slot| overlap_with(slot, start, padded_end))
            .collect();
        let tokens = tokenize(text);
        let chunks = allocate(&tokens, &weights);

        for (slot, chunk) in candidates.iter_mut().zip(chunks) {
            if !chunk.is_empty() {
                slot.texts.push(chunk.join(" "));
            }
        }
    }
}
