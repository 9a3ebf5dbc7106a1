/// Core data structures for primer pair statistics
///
/// This module defines the data model shared by every report writer:
/// primer sets, the per-pair statistics record and the canonical pair key
/// under which those records are stored.
use crate::error::{ReportError, Result};
use std::collections::{BTreeMap, HashMap};

/// Metric holding the number of sequenceable products (matrix headline value)
pub const NUM_SEQUENCIABLE_PRODUCTS: &str = "num_sequenciable_products";

/// Metric holding the number of possible products shorter than 700bp
pub const NUM_POSSIBLE_PRODUCTS_700: &str = "num_possible_products_700";

/// All primer sets of one run, keyed by set index
pub type PrimerSets = BTreeMap<usize, PrimerSet>;

/// A summary metric: either a bare number or a small counted sub-record
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Scalar(f64),
    Counted {
        count: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
}

impl MetricValue {
    /// Value shown in tables: the `count` of a sub-record, else the bare number
    pub fn count(&self) -> f64 {
        match self {
            MetricValue::Scalar(value) => *value,
            MetricValue::Counted { count, .. } => *count,
        }
    }

    /// Length window of a counted metric, if it carries one
    pub fn range(&self) -> Option<(f64, f64)> {
        match self {
            MetricValue::Counted { min: Some(min), max: Some(max), .. } => Some((*min, *max)),
            _ => None,
        }
    }
}

/// Products within the viable length range
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ViableRange {
    pub count: u64,
    pub min: u64,
    pub max: u64,
}

/// Products discarded for being shorter than `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShortProducts {
    pub count: u64,
    pub max: u64,
}

/// Precomputed PCR product statistics for one primer pair
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PairStats {
    pub total_products: u64,
    pub amplificable_products: u64,
    pub viable_products: ViableRange,
    pub filtered_by_max_length: ShortProducts,
    pub euchromatin_products: u64,
    pub euchromatin_nucleotides: u64,
    pub heterochromatin_products: u64,
    pub heterochromatin_nucleotides: u64,
    pub mixed_products: u64,
    pub mixed_nucleotides: u64,
    #[serde(default)]
    pub metrics: BTreeMap<String, MetricValue>,
}

impl PairStats {
    /// Look up a named summary metric, failing if the record lacks it
    pub fn metric(&self, key: &str, pair_label: &str) -> Result<&MetricValue> {
        self.metrics
            .get(key)
            .ok_or_else(|| ReportError::MissingMetric { pair: pair_label.to_string(), metric: key.to_string() })
    }
}

/// Order-independent key for a primer pair
///
/// The two sequences are sorted on construction, so `PairKey::new(a, b)`
/// and `PairKey::new(b, a)` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey {
    low: String,
    high: String,
}

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self { low: a.to_string(), high: b.to_string() }
        } else {
            Self { low: b.to_string(), high: a.to_string() }
        }
    }
}

/// A pair record together with the orientation it was supplied in
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPair {
    pub first: String,
    pub second: String,
    pub stats: PairStats,
}

impl StoredPair {
    /// "first,second" in stored orientation
    pub fn label(&self) -> String {
        format!("{},{}", self.first, self.second)
    }
}

/// One panel of primers and the statistics for each of its pairs
#[derive(Debug, Clone, Default)]
pub struct PrimerSet {
    pub index: usize,
    pub primers: Vec<String>,
    pairs: HashMap<PairKey, StoredPair>,
}

impl PrimerSet {
    /// Create an empty set, rejecting repeated primers
    pub fn new(index: usize, primers: Vec<String>) -> Result<Self> {
        for (pos, primer) in primers.iter().enumerate() {
            if primers[..pos].contains(primer) {
                return Err(ReportError::DuplicatePrimer { set: index, primer: primer.clone() });
            }
        }
        Ok(Self { index, primers, pairs: HashMap::new() })
    }

    /// Store the statistics of a pair under its canonical key
    ///
    /// The orientation given here is kept and used for every label that
    /// mentions the pair.
    pub fn insert_pair(&mut self, first: &str, second: &str, stats: PairStats) -> Result<()> {
        for primer in [first, second] {
            if !self.primers.iter().any(|p| p == primer) {
                return Err(ReportError::UnknownPrimer { set: self.index, primer: primer.to_string() });
            }
        }

        if first == second {
            return Err(ReportError::SelfPair { set: self.index, primer: first.to_string() });
        }

        let key = PairKey::new(first, second);
        if self.pairs.contains_key(&key) {
            return Err(ReportError::DuplicatePair {
                set: self.index,
                first: first.to_string(),
                second: second.to_string(),
            });
        }

        self.pairs.insert(key, StoredPair { first: first.to_string(), second: second.to_string(), stats });
        Ok(())
    }

    /// Find a pair regardless of the orientation it is asked for in
    pub fn lookup(&self, a: &str, b: &str) -> Option<&StoredPair> {
        self.pairs.get(&PairKey::new(a, b))
    }

    /// All stored pairs ordered by (first, second) in stored orientation
    pub fn sorted_pairs(&self) -> Vec<&StoredPair> {
        let mut pairs: Vec<&StoredPair> = self.pairs.values().collect();
        pairs.sort_by(|a, b| (&a.first, &a.second).cmp(&(&b.first, &b.second)));
        pairs
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

/// Genomic feature overlap counts for one primer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GffOverlap {
    pub exon: u64,
    pub gene: u64,
    pub num_pcr_products: u64,
}
