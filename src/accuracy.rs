//! Round-trip fidelity scoring.

/// Percentage of character positions where `recovered` matches `original`.
///
/// Positions are compared pairwise up to the shorter string; anything beyond
/// it counts as a non-match, and the denominator is always the length of
/// `original`. An empty `original` scores 0 by definition. The result is
/// rounded half-up (away from zero) to two decimal places.
pub fn score(original: &str, recovered: &str) -> f64 {
    let total = original.chars().count();
    if total == 0 {
        return 0.0;
    }

    let matches = original
        .chars()
        .zip(recovered.chars())
        .filter(|(o, r)| o == r)
        .count();

    let percentage = 100.0 * matches as f64 / total as f64;
    (percentage * 100.0).round() / 100.0
}
