//! Version command implementation.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};

use crate::style::colors::SemanticStyle;
use crate::style::{print_labeled, print_spacer};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_version(&mut out)
        .and_then(|()| out.flush())
        .context("Failed to write version information")
}

fn write_version(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} {VERSION}", "primer".header())?;
    print_spacer(out)?;
    writeln!(out, "{DESCRIPTION}.")?;
    print_spacer(out)?;
    writeln!(out, "{}", "Build info:".header())?;
    print_labeled(out, "Target", std::env::consts::ARCH)?;
    print_labeled(out, "OS", std::env::consts::OS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::ClosedPipe;

    #[test]
    fn version_screen_starts_with_name() {
        crate::style::set_no_color(true);
        let mut out = Vec::new();
        write_version(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(&format!("primer {VERSION}\n")));
        assert!(text.contains("Build info:"));
    }

    #[test]
    fn closed_stdout_is_an_error_not_a_panic() {
        let err = write_version(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
