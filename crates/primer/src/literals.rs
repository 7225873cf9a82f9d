//! The fixed data every component works on.

use std::collections::HashMap;

/// Integer sequence summed by the aggregator and walked by the sequence printer.
pub const NUMBERS: [i64; 3] = [2, 3, 4];

/// Key/value pairs backing the map printed by the mapping printer.
pub const FRUITS: [(&str, &str); 2] = [("a", "apple"), ("b", "banana")];

/// Text walked character by character by the scanner.
pub const SCAN_TEXT: &str = "This is a test";

/// Text whose leading unit is printed by the prefix printer.
pub const PREFIX_TEXT: &str = "testing";

/// Builds the fruit map.
///
/// Iteration order of the returned map is unspecified; callers must not
/// depend on `a` coming before `b`.
pub fn fruit_map() -> HashMap<&'static str, &'static str> {
    FRUITS.iter().copied().collect()
}
