//! Mapping printer: each key/value pair of a map, in whatever order the map
//! yields them.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::BuildHasher;
use std::io::Write;

use crate::Result;

/// Writes `<key> -> <value>` for every entry and returns the line count.
///
/// The order follows the map's own iteration order, which is unspecified.
pub fn write_mapping<K, V, S>(out: &mut impl Write, map: &HashMap<K, V, S>) -> Result<usize>
where
    K: Display,
    V: Display,
    S: BuildHasher,
{
    for (key, value) in map {
        writeln!(out, "{key} -> {value}")?;
    }
    Ok(map.len())
}
