//! Sequence printer: each element with its position.

use std::io::Write;

use crate::Result;

/// Writes `index: <i>` then `value: <v>` for every element, in order.
///
/// Returns the number of lines written (two per element).
pub fn write_sequence(out: &mut impl Write, numbers: &[i64]) -> Result<usize> {
    for (index, value) in numbers.iter().enumerate() {
        writeln!(out, "index: {index}")?;
        writeln!(out, "value: {value}")?;
    }
    Ok(numbers.len() * 2)
}
