//! Line helpers shared by the version and config screens.
//!
//! They write to a caller-supplied stream so a closed stdout surfaces as an
//! `io::Error` instead of a panic inside `println!`.

use std::io::{self, Write};

use super::colors::SemanticStyle;

/// `✓ <msg>`
pub fn print_success(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {msg}", "✓".success())
}

/// `→ <msg>`, dimmed.
pub fn print_hint(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "→".muted(), msg.muted())
}

/// Indented `key: value` row.
pub fn print_labeled(out: &mut impl Write, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {}: {value}", key.muted())
}

pub fn print_spacer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_row_is_indented() {
        crate::style::set_no_color(true);
        let mut out = Vec::new();
        print_labeled(&mut out, "Level", "warn").unwrap();
        assert_eq!(out, b"  Level: warn\n");
    }
}
