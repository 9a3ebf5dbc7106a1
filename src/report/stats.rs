//! Per-set summary statistics.
//!
//! Aggregates the resolved pairs of a set into the counts printed on the
//! console and exported as JSON.

use super::pairs::resolve_pairs;
use super::sheet::{is_low_yield, sequenceable_ratio};
use super::text::{checked_ratio, needs_warning};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::types::{NUM_POSSIBLE_PRODUCTS_700, NUM_SEQUENCIABLE_PRODUCTS, PrimerSet, PrimerSets};

/// Summary of one primer set.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SetSummary {
    pub set_index: usize,
    pub primers: Vec<String>,
    pub pair_count: usize,
    /// Pairs whose matrix cell is highlighted, when the yield metrics were read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_yield_pairs: Option<Vec<String>>,
    /// Pairs that get the not-effective warning in the text report
    pub warned_pairs: Vec<String>,
}

/// Summarize one primer set.
///
/// # Arguments
/// * `set` - The primer set
/// * `config` - Supplies the highlight threshold and warning cutoff
/// * `with_yield` - Read the matrix metrics and list the low-yield pairs;
///   without it only the pair statistics fields are required
pub fn summarize_set(set: &PrimerSet, config: &ReportConfig, with_yield: bool) -> Result<SetSummary> {
    let pairs = resolve_pairs(set)?;
    let mut low_yield_pairs = with_yield.then(Vec::new);
    let mut warned_pairs = Vec::new();

    for pair in &pairs {
        let sequences = pair.sequences();
        let stats = pair.stats;

        if let Some(ref mut low_yield_pairs) = low_yield_pairs {
            let sequenceable = stats.metric(NUM_SEQUENCIABLE_PRODUCTS, &sequences)?.count();
            let possible = stats.metric(NUM_POSSIBLE_PRODUCTS_700, &sequences)?.count();
            if is_low_yield(sequenceable_ratio(sequenceable, possible, &sequences)?, config.low_yield_ratio) {
                low_yield_pairs.push(pair.label());
            }
        }

        let viable_ratio = checked_ratio(
            stats.viable_products.count,
            stats.amplificable_products,
            &sequences,
            "viable products ratio",
        )?;
        if needs_warning(viable_ratio, config.short_products_cutoff) {
            warned_pairs.push(pair.label());
        }
    }

    Ok(SetSummary {
        set_index: set.index,
        primers: set.primers.clone(),
        pair_count: pairs.len(),
        low_yield_pairs,
        warned_pairs,
    })
}

/// Summarize every set, in set order.
pub fn summarize_sets(sets: &PrimerSets, config: &ReportConfig, with_yield: bool) -> Result<Vec<SetSummary>> {
    sets.values().map(|set| summarize_set(set, config, with_yield)).collect()
}
