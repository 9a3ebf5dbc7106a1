//! Unordered pair enumeration for a primer set.
//!
//! Primers are numbered from 1 in the order they are listed. Every unordered
//! pair is visited once (i < j) and resolved against the set's statistics;
//! the orientation the pair was stored in decides the index order shown in
//! labels ("Pair P2-P1" vs "Pair P1-P2").

use crate::error::{ReportError, Result};
use crate::types::{PairStats, PrimerSet};

/// A pair resolved against the statistics table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPair<'a> {
    /// 1-based index of the lower-numbered primer (matrix row)
    pub row: usize,
    /// 1-based index of the higher-numbered primer (matrix column)
    pub column: usize,
    /// Index of the primer stored first
    pub first_index: usize,
    /// Index of the primer stored second
    pub second_index: usize,
    pub first: &'a str,
    pub second: &'a str,
    pub stats: &'a PairStats,
}

impl ResolvedPair<'_> {
    /// Row label of the detail table, in stored orientation.
    pub fn label(&self) -> String {
        format!("Pair P{}-P{}", self.first_index, self.second_index)
    }

    /// Primer sequences in stored orientation.
    pub fn sequences(&self) -> String {
        format!("{},{}", self.first, self.second)
    }
}

/// Number primers from 1 in listing order.
pub fn index_primers(primers: &[String]) -> Vec<(usize, &str)> {
    primers.iter().enumerate().map(|(pos, primer)| (pos + 1, primer.as_str())).collect()
}

/// Enumerate and resolve every unordered pair of a set.
///
/// The returned order (row ascending, then column ascending) is the order
/// used by both the matrix and the detail table. A pair without statistics
/// aborts the whole set.
pub fn resolve_pairs(set: &PrimerSet) -> Result<Vec<ResolvedPair<'_>>> {
    let indexed = index_primers(&set.primers);
    let mut resolved = Vec::with_capacity(indexed.len() * indexed.len().saturating_sub(1) / 2);

    for (pos, &(row, row_primer)) in indexed.iter().enumerate() {
        for &(column, column_primer) in &indexed[pos + 1..] {
            let stored = set.lookup(row_primer, column_primer).ok_or_else(|| ReportError::MissingPairData {
                set: set.index,
                first: row_primer.to_string(),
                second: column_primer.to_string(),
            })?;

            let (first_index, second_index) =
                if stored.first == row_primer { (row, column) } else { (column, row) };

            resolved.push(ResolvedPair {
                row,
                column,
                first_index,
                second_index,
                first: &stored.first,
                second: &stored.second,
                stats: &stored.stats,
            });
        }
    }

    Ok(resolved)
}
