//! Configuration management commands.

use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use primer_config::{ConfigLoader, Paths, PrimerConfig};

use crate::style::colors::SemanticStyle;
use crate::style::{print_hint, print_labeled, print_spacer, print_success};

/// Show current configuration.
pub fn show(project: &Path, format: &str) -> Result<()> {
    let config = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Failed to load configuration")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_config(&mut out, &config, format)?;
    out.flush().context("Failed to write configuration")
}

fn write_config(out: &mut impl Write, config: &PrimerConfig, format: &str) -> Result<()> {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(config)?;
            writeln!(out, "{json}")?;
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(config)?;
            writeln!(out, "{toml_str}")?;
        }
        "text" => write_text(out, config).context("Failed to write configuration")?,
        other => anyhow::bail!("Unknown format '{other}' (expected text, toml, or json)"),
    }
    Ok(())
}

fn write_text(out: &mut impl Write, config: &PrimerConfig) -> io::Result<()> {
    writeln!(out, "{}", "Primer Configuration".header())?;
    writeln!(out, "====================")?;
    print_spacer(out)?;

    writeln!(out, "Logging:")?;
    print_labeled(out, "Level", &config.logging.level)?;
    print_labeled(out, "ANSI", &config.logging.ansi.to_string())?;
    print_spacer(out)?;

    writeln!(out, "Output:")?;
    print_labeled(out, "Color", &config.output.color.to_string())
}

/// Validate configuration files.
pub fn validate(project: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_validation(&mut out, project);
    // Report what was already checked even when a later file fails.
    out.flush().context("Failed to write validation report")?;
    result
}

fn write_validation(out: &mut impl Write, project: &Path) -> Result<()> {
    writeln!(
        out,
        "Validating configuration in {}...",
        project.display().code()
    )?;

    let files = [
        Paths::project_config_file(project),
        Paths::local_config_file(project),
    ];

    let mut found = 0;
    for file in files.iter().filter(|f| f.exists()) {
        PrimerConfig::from_file(file)?;
        print_success(out, &format!("{} is valid", file.display()))?;
        found += 1;
    }

    if found == 0 {
        print_hint(
            out,
            &format!(
                "No primer.toml in {}; built-in defaults apply",
                project.display()
            ),
        )?;
    }

    // The merged view also covers the user file and PRIMER_* overrides.
    ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Merged configuration is invalid")?;
    print_success(out, "Configuration is valid")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::ClosedPipe;

    #[test]
    fn text_screen_lists_sections() {
        crate::style::set_no_color(true);
        let mut out = Vec::new();
        write_config(&mut out, &PrimerConfig::default(), "text").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Logging:\n  Level: warn\n"));
        assert!(text.contains("Output:\n  Color: true\n"));
    }

    #[test]
    fn closed_stdout_fails_every_format() {
        for format in ["text", "toml", "json"] {
            let err = write_config(&mut ClosedPipe, &PrimerConfig::default(), format).unwrap_err();
            let io_err = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<io::Error>())
                .expect("io error in chain");
            assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe, "format {format}");
        }
    }
}
