//! # primer
//!
//! Walkthroughs of the basic container types: summing a sequence, walking it
//! by position, iterating a map, and scanning a string two ways.
//!
//! Every component writes plain lines to any [`std::io::Write`], so the binary
//! points them at standard output and tests point them at a `Vec<u8>`.
//!
//! ```text
//! ┌────────────┐   ┌──────────┐   ┌─────────┐   ┌─────────┐   ┌────────┐
//! │ aggregate  │ → │ sequence │ → │ mapping │ → │ scanner │ → │ prefix │
//! │  sum: 9    │   │ index/…  │   │ a -> …  │   │ 0 T T   │   │   t    │
//! └────────────┘   └──────────┘   └─────────┘   └─────────┘   └────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! let mut out = Vec::new();
//! let report = primer::run(&mut out).unwrap();
//!
//! assert_eq!(report.total_lines(), 24);
//! assert!(out.starts_with(b"sum: 9\n"));
//! ```

pub mod aggregate;
mod error;
pub mod literals;
pub mod mapping;
pub mod program;
pub mod scanner;
pub mod sequence;
pub mod substring;

pub use error::{PrimerError, Result};
pub use program::{Report, Section, run, run_section};
pub use scanner::ScanEntry;
