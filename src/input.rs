/// Input loading utilities
///
/// This module handles:
/// - Reading input files into strings
/// - Parsing the pair statistics JSON into typed primer sets
/// - Parsing the feature overlap JSON
use crate::error::Result;
use crate::types::{GffOverlap, PairStats, PrimerSet, PrimerSets};
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawPrimerSet {
    primers: Vec<String>,
    #[serde(default)]
    pairs: Vec<RawPair>,
}

#[derive(Debug, Deserialize)]
struct RawPair {
    primers: [String; 2],
    stats: PairStats,
}

/// Load a file's contents as a string
pub fn load_string(path: &Path) -> std::result::Result<String, String> {
    let mut file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let mut s = String::new();
    file.read_to_string(&mut s).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    Ok(s)
}

/// Parse pair statistics of the form
/// `{"0": {"primers": [...], "pairs": [{"primers": [a, b], "stats": {...}}]}}`
pub fn parse_primer_sets(json: &str) -> Result<PrimerSets> {
    let raw: BTreeMap<usize, RawPrimerSet> = serde_json::from_str(json)?;

    let mut sets = PrimerSets::new();
    for (index, raw_set) in raw {
        let mut set = PrimerSet::new(index, raw_set.primers)?;
        for pair in raw_set.pairs {
            let [first, second] = pair.primers;
            set.insert_pair(&first, &second, pair.stats)?;
        }
        debug!("Primer set {}: {} primers, {} pairs", index, set.primers.len(), set.pair_count());
        sets.insert(index, set);
    }

    Ok(sets)
}

/// Load and parse a pair statistics file
pub fn load_primer_sets(path: &Path) -> Result<PrimerSets> {
    debug!("Loading pair statistics from {:?}", path);
    let file = File::open(path)?;
    let mut json = String::new();
    std::io::BufReader::new(file).read_to_string(&mut json)?;
    parse_primer_sets(&json)
}

/// Load feature overlap counts keyed by primer pair label
pub fn load_gff_results(path: &Path) -> Result<BTreeMap<String, GffOverlap>> {
    debug!("Loading feature overlaps from {:?}", path);
    let file = File::open(path)?;
    let results = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(results)
}
