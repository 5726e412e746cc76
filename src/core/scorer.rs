use crate::core::FrequencyTable;

/// Sums each left value multiplied by how often it appears on the right.
///
/// Arithmetic wraps on `i64` overflow, so every input the parser accepts
/// produces a score.
pub fn score(left: &[i64], right: &[i64]) -> i64 {
    let frequencies = FrequencyTable::from_values(right);
    tracing::debug!(
        "Built frequency table with {} distinct values",
        frequencies.distinct()
    );
    left.iter().fold(0i64, |total, &value| {
        total.wrapping_add(value.wrapping_mul(frequencies.count(value) as i64))
    })
}
