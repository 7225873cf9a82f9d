//! Positional slicing of text by byte range.
//!
//! Slicing works on the raw bytes of the text, not on decoded characters: a
//! range that splits a multi-byte character yields the bytes as they are.

use std::io::Write;
use std::ops::Range;

use crate::{PrimerError, Result};

/// Returns the bytes of `text` in the half-open range `range`.
///
/// # Examples
///
/// ```
/// use primer::substring::prefix;
/// assert_eq!(prefix("testing", 0..1).unwrap(), b"t");
/// assert!(prefix("testing", 7..8).is_err());
/// ```
pub fn prefix(text: &str, range: Range<usize>) -> Result<&[u8]> {
    let Range { start, end } = range;
    text.as_bytes()
        .get(start..end)
        .ok_or(PrimerError::SliceOutOfRange {
            start,
            end,
            len: text.len(),
        })
}

/// Writes the bytes of `text` in `range` followed by a newline.
pub fn write_prefix(out: &mut impl Write, text: &str, range: Range<usize>) -> Result<usize> {
    let bytes = prefix(text, range)?;
    out.write_all(bytes)?;
    out.write_all(b"\n")?;
    Ok(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literals::PREFIX_TEXT;
    use test_case::test_case;

    #[test_case(0..1 => b"t".to_vec(); "leading unit")]
    #[test_case(0..4 => b"test".to_vec(); "leading word")]
    #[test_case(6..7 => b"g".to_vec(); "last unit")]
    #[test_case(3..3 => Vec::<u8>::new(); "empty range")]
    fn slices_literal(range: Range<usize>) -> Vec<u8> {
        prefix(PREFIX_TEXT, range).unwrap().to_vec()
    }

    #[test]
    fn rejects_range_past_end() {
        let err = prefix(PREFIX_TEXT, 7..8).unwrap_err();
        assert!(matches!(
            err,
            PrimerError::SliceOutOfRange {
                start: 7,
                end: 8,
                len: 7
            }
        ));
    }

    #[test]
    fn splits_multibyte_characters_by_byte() {
        // 'é' is encoded as 0xC3 0xA9.
        assert_eq!(prefix("é", 0..1).unwrap(), b"\xC3");
    }

    #[test]
    fn writes_prefix_line() {
        let mut out = Vec::new();
        assert_eq!(write_prefix(&mut out, PREFIX_TEXT, 0..1).unwrap(), 1);
        assert_eq!(out, b"t\n");
    }
}
