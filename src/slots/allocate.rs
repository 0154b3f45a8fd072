/// Split `tokens` into `weights.len()` contiguous chunks sized roughly in
/// proportion to `weights`.
///
/// Concatenating the chunks in order always reproduces `tokens`. When the
/// weights sum to zero the last chunk takes everything, and the last chunk
/// always absorbs whatever is left after the earlier targets are sliced off.
pub fn allocate<'a, T>(tokens: &'a [T], weights: &[f64]) -> Vec<&'a [T]> {
    let count = weights.len();
    if count == 0 {
        return Vec::new();
    }
    debug_assert!(
        weights.iter().all(|w| *w >= 0.0),
        "overlap weights must be non-negative: {weights:?}"
    );

    let mut chunks: Vec<&'a [T]> = vec![&tokens[..0]; count];
    if tokens.is_empty() {
        return chunks;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        chunks[count - 1] = tokens;
        return chunks;
    }

    let targets = target_counts(tokens.len(), weights, total);
    let mut pos = 0;
    for (chunk, target) in chunks.iter_mut().zip(&targets).take(count - 1) {
        let end = (pos + target).min(tokens.len());
        *chunk = &tokens[pos..end];
        pos = end;
    }
    chunks[count - 1] = &tokens[pos..];
    chunks
}

/// Integer token counts per chunk that sum to exactly `len`.
///
/// Proportional shares are rounded half-to-even, then the shortfall or excess
/// is settled one token at a time, visiting chunks by descending weight (ties
/// keep their original order). Removal skips chunks already at zero.
pub(crate) fn target_counts(len: usize, weights: &[f64], total: f64) -> Vec<usize> {
    let mut targets: Vec<usize> = weights
        .iter()
        .map(|w| (len as f64 * (w / total)).round_ties_even() as usize)
        .collect();

    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a]));

    let mut diff = len as i64 - targets.iter().sum::<usize>() as i64;
    let mut step = 0;
    while diff != 0 {
        let i = order[step % order.len()];
        if diff > 0 {
            targets[i] += 1;
            diff -= 1;
        } else if targets[i] > 0 {
            targets[i] -= 1;
            diff += 1;
        }
        step += 1;
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::{allocate, target_counts};

    fn flatten<'a>(chunks: &[&'a [&'a str]]) -> Vec<&'a str> {
        chunks.iter().flat_map(|c| c.iter().copied()).collect()
    }

    #[test]
    fn no_weights_means_no_chunks() {
        let tokens = ["a", "b"];
        assert!(allocate(&tokens, &[]).is_empty());
    }

    #[test]
    fn no_tokens_means_empty_chunks() {
        let tokens: [&str; 0] = [];
        let chunks = allocate(&tokens, &[1.0, 2.0, 3.0]);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.is_empty()));
    }

    #[test]
    fn zero_weights_fall_back_to_last_chunk() {
        let tokens = ["a", "b", "c"];
        let chunks = allocate(&tokens, &[0.0, 0.0]);
        assert_eq!(chunks, vec![&[][..], &["a", "b", "c"][..]]);
    }

    #[test]
    fn proportional_split_matches_weights() {
        let tokens = ["hello", "world", "foo"];
        let chunks = allocate(&tokens, &[1.0, 1.85]);
        assert_eq!(chunks, vec![&["hello"][..], &["world", "foo"][..]]);
    }

    #[test]
    fn rounding_shortfall_goes_to_heaviest_first() {
        // 5 * 1/3 = 1.67 -> 2 for each of three equal weights: 6, one too many.
        assert_eq!(target_counts(5, &[1.0, 1.0, 1.0], 3.0), vec![1, 2, 2]);
        // 2 tokens over four equal weights: 0.5 rounds to 0 everywhere.
        assert_eq!(target_counts(2, &[1.0, 1.0, 1.0, 1.0], 4.0), vec![1, 1, 0, 0]);
        // Heaviest slot is topped up even though it sits last.
        assert_eq!(target_counts(2, &[1.0, 1.0, 2.0], 4.0), vec![0, 0, 2]);
    }

    #[test]
    fn removal_skips_empty_targets() {
        // 3 tokens, weights 0 / 1.5 / 1.5: shares 0, 1.5->2, 1.5->2 = 4.
        let targets = target_counts(3, &[0.0, 1.5, 1.5], 3.0);
        assert_eq!(targets.iter().sum::<usize>(), 3);
        assert_eq!(targets[0], 0);
    }

    #[test]
    fn last_chunk_absorbs_remainder() {
        let tokens = ["a", "b", "c", "d", "e", "f", "g"];
        let weights = [0.1, 0.2, 0.3, 0.4];
        let chunks = allocate(&tokens, &weights);
        assert_eq!(chunks.len(), 4);
        assert_eq!(flatten(&chunks), tokens.to_vec());
    }

    #[test]
    fn never_loses_or_reorders_tokens() {
        let tokens: Vec<String> = (0..23).map(|i| format!("w{i}")).collect();
        let weight_sets: [&[f64]; 7] = [
            &[1.0],
            &[0.0],
            &[0.0, 0.0, 0.0],
            &[0.3, 0.0, 2.5],
            &[1e-9, 1e-9, 5.0, 1e-9],
            &[7.0, 7.0, 7.0, 7.0, 7.0, 7.0],
            &[0.5, 3.25, 0.75, 0.0, 1.0, 0.2, 0.01, 9.0],
        ];
        for weights in weight_sets {
            for len in [0, 1, 2, 5, tokens.len()] {
                let slice = &tokens[..len];
                let chunks = allocate(slice, weights);
                assert_eq!(chunks.len(), weights.len());
                let rebuilt: Vec<&String> = chunks.iter().flat_map(|c| c.iter()).collect();
                let expected: Vec<&String> = slice.iter().collect();
                assert_eq!(rebuilt, expected, "weights {weights:?}, len {len}");
            }
        }
    }
}
