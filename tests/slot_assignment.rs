use approx::assert_relative_eq;
use autosrt::config::SlotConfig;
use autosrt::slots::{allocate, assign_fragments, build_slots, clean, render_blocks, tokenize};
use autosrt::transcription::parse_transcript;
use autosrt::types::TranscriptFragment;

fn config(slot_length: f64, end_pad: f64) -> SlotConfig {
    SlotConfig {
        slot_length,
        end_pad,
        ..SlotConfig::default()
    }
}

#[test]
fn slots_tile_the_whole_duration() {
    for &(total, length) in &[
        (15.0, 7.0),
        (7.0, 7.0),
        (0.5, 7.0),
        (3600.25, 7.0),
        (10.0, 0.3),
        (100.0, 2.5),
    ] {
        let slots = build_slots(total, length).unwrap();
        assert_eq!(slots[0].start, 0.0);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_relative_eq!(pair[0].duration(), length, epsilon = 1e-9);
        }
        let last = slots.last().unwrap();
        assert_eq!(last.end, total);
        let remainder = total % length;
        if remainder > 1e-6 && length - remainder > 1e-6 {
            assert_relative_eq!(last.duration(), remainder, epsilon = 1e-9);
        } else {
            assert_relative_eq!(last.duration(), length, epsilon = 1e-6);
        }
    }
}

#[test]
fn allocation_is_lossless_for_degenerate_weights() {
    let tokens = ["a", "b", "c"];
    let chunks = allocate(&tokens, &[0.0, 0.0]);
    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].is_empty());
    assert_eq!(chunks[1], &tokens[..]);
}

#[test]
fn cleaning_is_idempotent_on_transcript_text() {
    for text in [
        " Hello , world . ",
        "so   uh ... yeah ?",
        "\tTabs\tand\nnewlines !",
        "Already clean.",
    ] {
        let once = clean(text);
        assert_eq!(clean(&once), once);
    }
}

#[test]
fn whisper_style_chunks_flow_into_srt_blocks() {
    let transcript = parse_transcript(
        r#"{"chunks": [
            {"timestamp": [0.0, 4.2], "text": " The tanker left port at dawn ."},
            {"timestamp": [6.0, 8.5], "text": " hello world foo"},
            {"timestamp": [9.0, null], "text": " and then it was gone"}
        ]}"#,
    )
    .unwrap();
    let config = config(7.0, 0.35);
    let slots = assign_fragments(&transcript.fragments, 15.0, &config).unwrap();
    let blocks = render_blocks(&slots, &config.empty_text);

    let texts: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "The tanker left port at dawn. hello",
            "world foo",
            "and then it was gone",
        ]
    );
    assert_eq!(
        blocks.iter().map(|b| b.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn untimed_fragment_only_touches_last_slot() {
    let with_tail = vec![
        TranscriptFragment::timed(1.0, 3.0, "spoken early"),
        TranscriptFragment::untimed("trailing"),
    ];
    let without_tail = vec![TranscriptFragment::timed(1.0, 3.0, "spoken early")];
    let config = config(7.0, 0.35);

    let a = assign_fragments(&with_tail, 14.0, &config).unwrap();
    let b = assign_fragments(&without_tail, 14.0, &config).unwrap();

    assert_eq!(a.len(), 2);
    assert_eq!(a[0], b[0]);
    assert_eq!(a[1].texts, vec!["trailing"]);
    assert!(b[1].texts.is_empty());
}

#[test]
fn word_count_is_preserved_end_to_end() {
    let fragments: Vec<TranscriptFragment> = (0..40)
        .map(|i| {
            let start = i as f64 * 1.7;
            TranscriptFragment::timed(start, start + 2.9, format!("w{i}a w{i}b w{i}c w{i}d"))
        })
        .collect();
    let slots = assign_fragments(&fragments, 70.0, &config(7.0, 0.35)).unwrap();

    let placed: usize = slots
        .iter()
        .map(|slot| tokenize(&slot.rendered_text()).len())
        .sum();
    assert_eq!(placed, 160);
}
