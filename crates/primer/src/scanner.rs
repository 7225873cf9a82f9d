//! Text scanner: walks a string as decoded characters and, for each one, also
//! slices the single byte at the same position.
//!
//! The two access paths agree for ASCII text. For anything else the decoded
//! character spans several bytes while the slice yields only the first, and
//! positions advance by the encoded width of each character.

use std::io::Write;

use crate::Result;
use crate::substring::prefix;

/// One scanned position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanEntry<'a> {
    /// Byte offset at which the decoded character starts.
    pub offset: usize,
    /// The byte range `[offset, offset + 1)` of the text.
    pub raw: &'a [u8],
    /// The character produced by iterating the text.
    pub ch: char,
}

impl ScanEntry<'_> {
    /// True when the raw slice and the decoded character are the same text.
    pub fn paths_agree(&self) -> bool {
        let mut buf = [0u8; 4];
        self.raw == self.ch.encode_utf8(&mut buf).as_bytes()
    }
}

/// Scans `text`, producing one entry per decoded character.
pub fn scan(text: &str) -> Result<Vec<ScanEntry<'_>>> {
    text.char_indices()
        .map(|(offset, ch)| entry_at(text, offset, ch))
        .collect()
}

fn entry_at(text: &str, offset: usize, ch: char) -> Result<ScanEntry<'_>> {
    let raw = prefix(text, offset..offset + 1)?;
    Ok(ScanEntry { offset, raw, ch })
}

/// Writes `<offset> <raw> <char>` for every entry of `text`.
///
/// The raw slice is written byte for byte, so a partial multi-byte character
/// reaches the output undecoded.
pub fn write_scan(out: &mut impl Write, text: &str) -> Result<usize> {
    let entries = scan(text)?;
    for entry in &entries {
        tracing::trace!(
            offset = entry.offset,
            ch = %entry.ch,
            agree = entry.paths_agree(),
            "scanned position"
        );
        write!(out, "{} ", entry.offset)?;
        out.write_all(entry.raw)?;
        writeln!(out, " {}", entry.ch)?;
    }
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literals::SCAN_TEXT;
    use proptest::prelude::*;

    #[test]
    fn scans_every_character_of_literal() {
        let entries = scan(SCAN_TEXT).unwrap();

        assert_eq!(entries.len(), 14);
        for (i, (entry, ch)) in entries.iter().zip(SCAN_TEXT.chars()).enumerate() {
            assert_eq!(entry.offset, i);
            assert_eq!(entry.ch, ch);
            assert!(entry.paths_agree());
        }
        assert_eq!(entries.last().unwrap().raw, b"t");
    }

    #[test]
    fn writes_literal_lines() {
        let mut out = Vec::new();
        let lines = write_scan(&mut out, SCAN_TEXT).unwrap();
        let text = String::from_utf8(out).unwrap();
        let written: Vec<&str> = text.lines().collect();

        assert_eq!(lines, 14);
        assert_eq!(written.len(), 14);
        assert_eq!(written[0], "0 T T");
        assert_eq!(written[4], "4    ");
        assert_eq!(written[13], "13 t t");
    }

    #[test]
    fn multibyte_positions_skip_and_paths_diverge() {
        let entries = scan("aé!").unwrap();
        let offsets: Vec<usize> = entries.iter().map(|e| e.offset).collect();

        assert_eq!(offsets, vec![0, 1, 3]);
        assert_eq!(entries[1].raw, b"\xC3");
        assert_eq!(entries[1].ch, 'é');
        assert!(!entries[1].paths_agree());
        assert!(entries[2].paths_agree());
    }

    #[test]
    fn writes_raw_byte_for_multibyte_character() {
        let mut out = Vec::new();
        write_scan(&mut out, "é").unwrap();
        assert_eq!(out, b"0 \xC3 \xC3\xA9\n");
    }

    #[test]
    fn empty_text_scans_nothing() {
        assert!(scan("").unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn one_entry_per_char(text in ".{0,32}") {
            let entries = scan(&text).unwrap();
            prop_assert_eq!(entries.len(), text.chars().count());
            for entry in &entries {
                prop_assert_eq!(entry.raw.len(), 1);
                prop_assert_eq!(entry.raw[0], text.as_bytes()[entry.offset]);
            }
        }
    }
}
