static PREFIX_SCALE: f64 = 0.1;
pub static BOOST_THRESHOLD: f64 = 0.7;
const PREFIX_LIMIT: usize = 4;

/// Bounded character-matching similarity in `[0, 1]` with a common prefix bonus.
///
/// Characters of `a` are matched against `b` within a window of
/// `max(len) / 2 - 1` positions, the earliest unmatched position in `b` winning.
/// Once the base score passes [`BOOST_THRESHOLD`], every one of the first
/// 4 positions flagged as matched in *both* strings adds a tenth of the remaining distance.
///
/// Not guaranteed to be symmetric, callers pass the query token first and the keyword second.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let radius = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut num_matches = 0_usize;

    for (i, a_char) in a.iter().enumerate() {
        let start = i.saturating_sub(radius);
        let end = (i + radius + 1).min(b.len());

        for j in start..end {
            if b_matched[j] || b[j] != *a_char {
                continue;
            }

            a_matched[i] = true;
            b_matched[j] = true;
            num_matches += 1;
            break;
        }
    }

    if num_matches == 0 {
        return 0.0;
    }

    let num_transpositions = count_transpositions(a, b, &a_matched, &b_matched);

    let m = num_matches as f64;
    let base = (m / a.len() as f64
        + m / b.len() as f64
        + (num_matches - num_transpositions) as f64 / m)
        / 3.0;

    if base < BOOST_THRESHOLD {
        return base;
    }

    // Structural check on the match flags only, the underlying characters are not compared
    let common_prefix = a_matched
        .iter()
        .zip(b_matched.iter())
        .take(PREFIX_LIMIT)
        .filter(|(a_flag, b_flag)| **a_flag && **b_flag)
        .count();

    base + common_prefix as f64 * PREFIX_SCALE * (1.0 - base)
}

fn count_transpositions(a: &[u8], b: &[u8], a_matched: &[bool], b_matched: &[bool]) -> usize {
    let b_matches = b
        .iter()
        .zip(b_matched.iter())
        .filter(|(_, is_matched)| **is_matched)
        .map(|(c, _)| c);

    let num_mismatched = a
        .iter()
        .zip(a_matched.iter())
        .filter(|(_, is_matched)| **is_matched)
        .map(|(c, _)| c)
        .zip(b_matches)
        .filter(|(a_char, b_char)| a_char != b_char)
        .count();

    num_mismatched / 2
}
