use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Slot;

const MAX_KEYWORDS: usize = 5;

/// Topic triggers and the stock-footage prompts each one contributes.
const TOPICS: &[(&[&str], &[&str])] = &[
    (
        &["oil", "tanker", "pipeline", "barrel", "refinery"],
        &[
            "oil tanker at sea",
            "cargo ship ocean",
            "energy supply chain",
            "global shipping trade",
        ],
    ),
    (
        &["military", "missile", "jet", "airstrike", "troops"],
        &[
            "fighter jets in sky",
            "military aircraft runway",
            "soldiers training",
            "defense forces visuals",
        ],
    ),
    (
        &["economy", "inflation", "prices", "recession", "market"],
        &[
            "economic uncertainty",
            "financial charts abstract",
            "cost of living visuals",
            "city business district",
        ],
    ),
    (
        &["government", "sanctions", "policy", "law", "officials"],
        &[
            "government building exterior",
            "international relations visuals",
            "press conference podium",
            "capitol city skyline",
        ],
    ),
];

const GENERIC: &[&str] = &[
    "world news visuals",
    "serious documentary b-roll",
    "global affairs imagery",
    "city skyline night",
];

/// Written for slots that received no narration.
pub const SILENCE_KEYWORDS: &[&str] = &[
    "ambient b-roll",
    "city skyline",
    "hands typing",
    "soft abstract background",
    "nature scenery",
];

/// Guess up to five b-roll prompts for a block of narration.
///
/// Triggers match as case-insensitive substrings, so "jet" also fires on
/// "jetty".
pub fn generate_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    let mut keywords: Vec<&'static str> = Vec::new();
    let mut add = |items: &[&'static str]| {
        for item in items {
            if !keywords.contains(item) {
                keywords.push(*item);
            }
        }
    };

    let mut matched = false;
    for &(triggers, prompts) in TOPICS {
        if triggers.iter().any(|t| lowered.contains(t)) {
            add(prompts);
            matched = true;
        }
    }
    if !matched {
        add(GENERIC);
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// One `[Block N]` section per slot so the numbering lines up with the SRT.
pub fn write_keywords<W: Write>(writer: &mut W, slots: &[Slot]) -> Result<()> {
    for slot in slots {
        let text = slot.rendered_text();
        let keywords = if text.is_empty() {
            SILENCE_KEYWORDS.to_vec()
        } else {
            generate_keywords(&text)
        };
        writeln!(writer, "[Block {}]", slot.index + 1)?;
        for keyword in keywords {
            writeln!(writer, "{keyword}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn write_keywords_file<P: AsRef<Path>>(path: P, slots: &[Slot]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create keyword file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_keywords(&mut writer, slots)
        .with_context(|| format!("Failed to write keyword file: {}", path.display()))?;
    writer.flush().context("Failed to flush keyword file")?;
    Ok(())
}
