/// Shared builders for unit tests
use crate::types::*;
use std::collections::BTreeMap;

/// Statistics for the AAACCC/GGGTTT pair of the three-primer panel
pub fn sample_stats() -> PairStats {
    stats_with(60.0, 70.0)
}

/// Sample statistics with a chosen sequenceable count and 700bp product count
pub fn stats_with(sequenceable: f64, possible_700: f64) -> PairStats {
    let mut metrics = BTreeMap::new();
    metrics.insert("num_union_sites_p1".to_string(), MetricValue::Scalar(120.0));
    metrics.insert("num_union_sites_p2".to_string(), MetricValue::Scalar(95.0));
    metrics.insert("num_possible_products_10000".to_string(), MetricValue::Scalar(140.0));
    metrics.insert(NUM_POSSIBLE_PRODUCTS_700.to_string(), MetricValue::Scalar(possible_700));
    metrics.insert(
        "num_short_products".to_string(),
        MetricValue::Counted { count: 10.0, min: None, max: Some(100.0) },
    );
    metrics.insert(
        NUM_SEQUENCIABLE_PRODUCTS.to_string(),
        MetricValue::Counted { count: sequenceable, min: Some(100.0), max: Some(700.0) },
    );
    metrics.insert(
        "num_unique_unique_products".to_string(),
        MetricValue::Counted { count: 30.0, min: None, max: None },
    );
    metrics.insert(
        "num_repetitive_repetitive_products".to_string(),
        MetricValue::Counted { count: 12.0, min: None, max: None },
    );
    metrics.insert(
        "num_unique_repetitive_products".to_string(),
        MetricValue::Counted { count: 18.0, min: None, max: None },
    );
    metrics.insert("percentage_sequenciable_nucleotides".to_string(), MetricValue::Scalar(0.42));
    metrics.insert("adjusted_percentage_sequenciable_nucleotides".to_string(), MetricValue::Scalar(0.38));

    PairStats {
        total_products: 150,
        amplificable_products: 100,
        viable_products: ViableRange { count: 60, min: 300, max: 700 },
        filtered_by_max_length: ShortProducts { count: 10, max: 100 },
        euchromatin_products: 40,
        euchromatin_nucleotides: 20000,
        heterochromatin_products: 15,
        heterochromatin_nucleotides: 7000,
        mixed_products: 5,
        mixed_nucleotides: 2100,
        metrics,
    }
}

/// The three-primer panel: P1 AAACCC, P2 GGGTTT, P3 ACGTAC
///
/// (P1,P2) is stored forward, (P1,P3) reversed, (P2,P3) forward.
pub fn three_primer_set() -> PrimerSet {
    let primers = vec!["AAACCC".to_string(), "GGGTTT".to_string(), "ACGTAC".to_string()];
    let mut set = PrimerSet::new(0, primers).unwrap();
    set.insert_pair("AAACCC", "GGGTTT", sample_stats()).unwrap();
    set.insert_pair("ACGTAC", "AAACCC", stats_with(65.0, 70.0)).unwrap();
    set.insert_pair("GGGTTT", "ACGTAC", stats_with(90.0, 100.0)).unwrap();
    set
}

/// A panel of `n` primers with every pair present
///
/// Orientation alternates so both stored directions are exercised.
pub fn panel(index: usize, n: usize) -> PrimerSet {
    let bases = ['A', 'C', 'G', 'T'];
    let primers: Vec<String> =
        (0..n).map(|i| format!("{}{}{}PRIMER", bases[i % 4], bases[(i / 4) % 4], i)).collect();
    let mut set = PrimerSet::new(index, primers.clone()).unwrap();
    for i in 0..n {
        for j in (i + 1)..n {
            let stats = stats_with((10 * (i + j)) as f64, 100.0);
            if (i + j) % 2 == 0 {
                set.insert_pair(&primers[i], &primers[j], stats).unwrap();
            } else {
                set.insert_pair(&primers[j], &primers[i], stats).unwrap();
            }
        }
    }
    set
}
