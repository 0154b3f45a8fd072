use crate::types::Slot;

use super::error::{Result, SlotError};

/// Slack used when comparing slot edges against the total duration.
pub(super) const EPS: f64 = 1e-6;

/// Partition `[0, total_duration)` into consecutive windows of
/// `slot_length` seconds. The last window ends exactly at `total_duration`
/// and may be shorter.
pub fn build_slots(total_duration: f64, slot_length: f64) -> Result<Vec<Slot>> {
    if !total_duration.is_finite() || total_duration < 0.0 {
        return Err(SlotError::InvalidDuration(total_duration));
    }
    if !slot_length.is_finite() || slot_length <= 0.0 {
        return Err(SlotError::InvalidSlotLength(slot_length));
    }

    let mut slots = Vec::new();
    let mut start = 0.0;
    while start < total_duration - EPS {
        let index = slots.len();
        // Edges come from the index so rounding does not pile up across slots.
        let mut end = ((index + 1) as f64 * slot_length).min(total_duration);
        if total_duration - end <= EPS {
            end = total_duration;
        }
        slots.push(Slot::new(index, start, end));
        start = end;
    }
    Ok(slots)
}

/// Inclusive range of slot indices overlapped by `[start, end)`, clamped to
/// the slots that exist. `slot_count` must be non-zero.
pub(super) fn overlapping_indices(
    start: f64,
    end: f64,
    slot_length: f64,
    slot_count: usize,
) -> (usize, usize) {
    let last = slot_count - 1;
    let first_index = ((start.max(0.0) / slot_length).floor() as usize).min(last);
    let last_index = (((end - EPS).max(0.0) / slot_length).floor() as usize).min(last);
    (first_index, last_index.max(first_index))
}

/// Seconds shared by `[start, end)` and the slot window, floored at zero.
pub(super) fn overlap_with(slot: &Slot, start: f64, end: f64) -> f64 {
    (end.min(slot.end) - start.max(slot.start)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_slot_is_the_remainder() {
        let slots = build_slots(15.0, 7.0).unwrap();
        let edges: Vec<(f64, f64)> = slots.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(edges, vec![(0.0, 7.0), (7.0, 14.0), (14.0, 15.0)]);
        assert_eq!(slots.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn exact_multiple_has_full_final_slot() {
        let slots = build_slots(21.0, 7.0).unwrap();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[2].start, 14.0);
        assert_eq!(slots[2].end, 21.0);
    }

    #[test]
    fn zero_duration_builds_nothing() {
        assert!(build_slots(0.0, 7.0).unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(build_slots(-1.0, 7.0), Err(SlotError::InvalidDuration(-1.0)));
        assert_eq!(build_slots(10.0, 0.0), Err(SlotError::InvalidSlotLength(0.0)));
        assert!(matches!(
            build_slots(f64::NAN, 7.0),
            Err(SlotError::InvalidDuration(_))
        ));
        assert!(matches!(
            build_slots(10.0, f64::INFINITY),
            Err(SlotError::InvalidSlotLength(_))
        ));
    }

    #[test]
    fn no_sliver_from_float_drift() {
        let slots = build_slots(0.7, 0.1).unwrap();
        assert_eq!(slots.len(), 7);
        assert_eq!(slots.last().unwrap().end, 0.7);
    }

    #[test]
    fn windows_are_contiguous_and_cover_duration() {
        for (total, length) in [(15.0, 7.0), (123.456, 7.0), (3.0, 7.0), (59.99, 0.33), (1.0, 1.0)] {
            let slots = build_slots(total, length).unwrap();
            assert_eq!(slots[0].start, 0.0);
            for pair in slots.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
                assert!(pair[0].duration() > 0.0);
            }
            assert_eq!(slots.last().unwrap().end, total);
        }
    }

    #[test]
    fn overlapping_indices_clamp_to_range() {
        assert_eq!(overlapping_indices(6.0, 8.85, 7.0, 3), (0, 1));
        assert_eq!(overlapping_indices(0.0, 7.0, 7.0, 3), (0, 0));
        assert_eq!(overlapping_indices(-2.0, 1.0, 7.0, 3), (0, 0));
        assert_eq!(overlapping_indices(30.0, 40.0, 7.0, 3), (2, 2));
        // Sub-epsilon fragment straddling an edge still maps to one slot.
        assert_eq!(overlapping_indices(7.0, 7.0000005, 7.0, 3), (1, 1));
    }

    #[test]
    fn overlap_is_clipped_to_window() {
        let slot = Slot::new(1, 7.0, 14.0);
        assert!((overlap_with(&slot, 6.0, 8.85) - 1.85).abs() < 1e-9);
        assert_eq!(overlap_with(&slot, 0.0, 3.0), 0.0);
        assert_eq!(overlap_with(&slot, 8.0, 9.0), 1.0);
    }
}
