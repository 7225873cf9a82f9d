//! Runs the components over the fixed literals, in order.

use std::fmt::{self, Display};
use std::io::Write;
use std::str::FromStr;

use crate::literals::{NUMBERS, PREFIX_TEXT, SCAN_TEXT, fruit_map};
use crate::{PrimerError, Result, aggregate, mapping, scanner, sequence, substring};

/// One component of the walkthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Aggregate,
    Sequence,
    Mapping,
    Scan,
    Prefix,
}

impl Section {
    /// Every section, in run order.
    pub const ALL: [Section; 5] = [
        Section::Aggregate,
        Section::Sequence,
        Section::Mapping,
        Section::Scan,
        Section::Prefix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Aggregate => "aggregate",
            Section::Sequence => "sequence",
            Section::Mapping => "mapping",
            Section::Scan => "scan",
            Section::Prefix => "prefix",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| PrimerError::UnknownSection(s.to_string()))
    }
}

/// Lines written by each section of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<(Section, usize)>,
}

impl Report {
    pub fn total_lines(&self) -> usize {
        self.sections.iter().map(|(_, lines)| lines).sum()
    }

    /// Lines written by `section`, or `None` if it did not run.
    pub fn lines_for(&self, section: Section) -> Option<usize> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, lines)| *lines)
    }
}

/// Runs every section in order and flushes `out`.
pub fn run(out: &mut impl Write) -> Result<Report> {
    let mut report = Report::default();
    for section in Section::ALL {
        let lines = write_section(out, section)?;
        report.sections.push((section, lines));
    }
    out.flush()?;

    tracing::info!(
        sections = report.sections.len(),
        lines = report.total_lines(),
        "walkthrough complete"
    );
    Ok(report)
}

/// Runs a single section and flushes `out`.
pub fn run_section(out: &mut impl Write, section: Section) -> Result<Report> {
    let lines = write_section(out, section)?;
    out.flush()?;
    Ok(Report {
        sections: vec![(section, lines)],
    })
}

fn write_section(out: &mut impl Write, section: Section) -> Result<usize> {
    let lines = match section {
        Section::Aggregate => aggregate::write_sum(out, &NUMBERS)?,
        Section::Sequence => sequence::write_sequence(out, &NUMBERS)?,
        Section::Mapping => mapping::write_mapping(out, &fruit_map())?,
        Section::Scan => scanner::write_scan(out, SCAN_TEXT)?,
        Section::Prefix => substring::write_prefix(out, PREFIX_TEXT, 0..1)?,
    };
    tracing::debug!(%section, lines, "section written");
    Ok(lines)
}
