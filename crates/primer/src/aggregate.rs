//! Aggregator: folds a sequence into its total.

use std::io::Write;

use crate::Result;

/// Sums `numbers` left to right, starting from zero.
///
/// # Examples
///
/// ```
/// use primer::aggregate::sum;
/// assert_eq!(sum(&[2, 3, 4]), 9);
/// assert_eq!(sum(&[]), 0);
/// ```
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// Writes `sum: <total>` and returns the number of lines written.
pub fn write_sum(out: &mut impl Write, numbers: &[i64]) -> Result<usize> {
    let total = sum(numbers);
    tracing::trace!(count = numbers.len(), total, "summed sequence");
    writeln!(out, "sum: {total}")?;
    Ok(1)
}
