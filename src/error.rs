/// Error types for report generation
///
/// Every variant here is a local input-data or output error. None of them is
/// retryable: the runner stops and reports which set or pair triggered it.

/// Errors raised while loading statistics or emitting reports.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Neither orientation of a pair is present in the set's statistics.
    #[error("primer set {set}: no statistics for pair {first},{second}")]
    MissingPairData { set: usize, first: String, second: String },

    /// A ratio denominator was zero, or would be negative after subtraction.
    #[error("pair {pair}: cannot compute {ratio}, denominator is not positive")]
    DegenerateDenominator { pair: String, ratio: &'static str },

    /// A metric has the wrong shape for the consumer reading it.
    #[error("pair {pair}: metric '{metric}' must be {expected}")]
    ShapeMismatch { pair: String, metric: String, expected: &'static str },

    /// A configured metric is absent from a pair's record.
    #[error("pair {pair}: metric '{metric}' is missing")]
    MissingMetric { pair: String, metric: String },

    /// The same unordered pair was supplied twice (possibly in both orientations).
    #[error("primer set {set}: pair {first},{second} is listed more than once")]
    DuplicatePair { set: usize, first: String, second: String },

    /// A pair names the same primer twice.
    #[error("primer set {set}: pair {primer},{primer} pairs a primer with itself")]
    SelfPair { set: usize, primer: String },

    /// A primer appears twice in a set's primer list.
    #[error("primer set {set}: primer {primer} is listed more than once")]
    DuplicatePrimer { set: usize, primer: String },

    /// A pair references a primer that is not part of its set.
    #[error("primer set {set}: pair references unknown primer {primer}")]
    UnknownPrimer { set: usize, primer: String },

    /// A primer set has no pair statistics at all.
    #[error("primer set {set}: needs at least two primers with pair statistics")]
    EmptySet { set: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
