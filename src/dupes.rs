//! Counting characters that show up more than once in a string. This is unrelated to the tree;
//! it is the other exercise shipped with the crate.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::dupes::find_duplicates;
//!
//! let report = find_duplicates("hello world");
//!
//! assert_eq!(report.length, 11);
//! assert_eq!(report.duplicates, [('l', 3), ('o', 2)]);
//! ```

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

/// The outcome of scanning a string for repeated characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateReport {
    /// How many characters (not bytes) the scanned string has.
    pub length: usize,
    /// Every character seen more than once with its number of occurrences, in order of first
    /// appearance.
    pub duplicates: Vec<(char, usize)>,
}

impl DuplicateReport {
    /// Whether any character occurred more than once.
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Renders the report as a two column table, or a single line when nothing repeats.
impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_duplicates() {
            return writeln!(f, "No duplicate characters found.");
        }

        writeln!(f, "Duplicate characters found:")?;
        writeln!(f, "Character | Occurrences")?;
        writeln!(f, "----------|------------")?;
        for (c, count) in &self.duplicates {
            writeln!(f, "    {}     |     {}", c, count)?;
        }

        Ok(())
    }
}

/// Scans `input` once and reports every character occurring more than once.
pub fn find_duplicates(input: &str) -> DuplicateReport {
    let mut counts: HashMap<char, usize> = HashMap::new();
    // First appearances, so the report doesn't depend on hash order.
    let mut order = Vec::new();
    let mut length = 0;
    for c in input.chars() {
        length += 1;
        let count = counts.entry(c).or_insert(0);
        if *count == 0 {
            order.push(c);
        }
        *count += 1;
    }

    let duplicates: Vec<_> = order
        .into_iter()
        .filter_map(|c| match counts[&c] {
            count if count > 1 => Some((c, count)),
            _ => None,
        })
        .collect();
    debug!(
        length,
        distinct = counts.len(),
        duplicates = duplicates.len(),
        "scanned input"
    );

    DuplicateReport { length, duplicates }
}
