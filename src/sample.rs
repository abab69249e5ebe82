//! The labeled training set.
use std::ops::Index;

use crate::checkers;
use crate::error::TreeError;

/// A labeled training set.
/// Rows share the same number of features
/// and each row is paired with a label in `{0, 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub(crate) rows: Vec<Vec<f64>>,
    pub(crate) target: Vec<u8>,
    pub(crate) n_sample: usize,
    pub(crate) n_feature: usize,
}

impl Sample {
    /// Construct a new instance of [`Sample`].
    /// This method returns `Err` if
    /// - `rows` and `target` have different lengths,
    /// - some row has a different number of features from the first one, or
    /// - some label is neither `0` nor `1`.
    pub fn new(rows: Vec<Vec<f64>>, target: Vec<u8>)
        -> Result<Self, TreeError>
    {
        let n_feature = checkers::sample(&rows, &target)?;
        let n_sample = rows.len();
        Ok(Self { rows, target, n_sample, n_feature, })
    }

    /// Returns the pair of the number of examples and
    /// the number of features.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }

    /// Returns the value of `feature` at `row`.
    /// Panics if either index is out of range.
    #[inline]
    pub fn value(&self, row: usize, feature: usize) -> f64 {
        self.rows[row][feature]
    }

    /// Returns the labels.
    #[inline]
    pub fn target(&self) -> &[u8] {
        &self.target[..]
    }

    /// Returns the feature rows.
    #[inline]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows[..]
    }

    /// Returns `true` if the sample has no row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_sample == 0
    }
}

impl Index<usize> for Sample {
    type Output = [f64];
    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row][..]
    }
}
