//! Errors reported when the inputs break the contract of this crate.
use thiserror::Error;

/// Contract violations detected by [`crate::checkers`]
/// and the I/O failure of the DOT export.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The number of rows differs from the number of labels.
    #[error("got {n_rows} rows but {n_labels} labels")]
    LengthMismatch {
        /// Number of rows.
        n_rows: usize,
        /// Number of labels.
        n_labels: usize,
    },

    /// A row has a different width from the first row.
    #[error("row {row} has {got} features, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the offending row.
        got: usize,
        /// Width of the first row.
        expected: usize,
    },

    /// A label is neither `0` nor `1`.
    #[error("label of row {row} is {label}, labels must be 0 or 1")]
    NonBinaryLabel {
        /// Index of the offending row.
        row: usize,
        /// The offending label.
        label: u8,
    },

    /// The maximal depth is zero.
    #[error("tree must have positive depth")]
    ZeroDepth,

    /// A branch reads a feature past the end of the row.
    #[error("feature {feature} is referenced but the row has {len} features")]
    FeatureOutOfRange {
        /// Feature index read by the branch.
        feature: usize,
        /// Width of the row.
        len: usize,
    },

    /// The JSON config could not be parsed.
    #[error("invalid tree config: {0}")]
    Config(#[from] serde_json::Error),

    /// Writing the DOT file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
