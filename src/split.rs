//! Splitting rules and the search for the best one.
use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Sample;
use crate::checkers;
use crate::error::TreeError;
use crate::impurity::{gini_index, Score};

/// The output of the function `split` of [`Splitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// `value < threshold`.
    Left,
    /// `value >= threshold`.
    Right,
}

impl LeftRight {
    /// `value < threshold` goes to the left, everything else to the right.
    #[inline(always)]
    pub fn of(value: f64, threshold: f64) -> Self {
        if value < threshold { Self::Left } else { Self::Right }
    }
}

/// A splitting rule `x[feature] < threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    /// Index of the feature compared.
    pub feature: usize,
    /// Rows with a smaller value go to the left.
    pub threshold: f64,
}

impl Splitter {
    /// Construct the rule `x[feature] < threshold`.
    #[inline]
    pub fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, }
    }

    /// Defines the splitting.
    /// Panics if `row` has no value at `self.feature`.
    #[inline]
    pub fn split(&self, row: &[f64]) -> LeftRight {
        LeftRight::of(row[self.feature], self.threshold)
    }

    /// Same as [`Splitter::split`], but returns `Err`
    /// if `row` is too short.
    #[inline]
    pub fn try_split(&self, row: &[f64]) -> Result<LeftRight, TreeError> {
        let value = checkers::feature_value(row, self.feature)?;
        Ok(LeftRight::of(value, self.threshold))
    }
}

impl fmt::Display for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x[{}] < {}", self.feature, self.threshold)
    }
}

/// Returns the splitting rule that minimizes the Gini index
/// over the rows in `indices`.
/// 
/// Every value `x[i][feature]` with `i` in `indices` is a candidate threshold,
/// visited feature by feature, then in the order of `indices`.
/// The first candidate achieving the strictly lowest score wins.
/// 
/// Returns `None` if there is no candidate,
/// i.e., `indices` is empty or the sample has no feature.
pub fn best_split(sample: &Sample, indices: &[usize]) -> Option<Splitter> {
    if indices.is_empty() { return None; }
    let n_feature = sample.shape().1;

    // `collect` keeps the feature order,
    // so the reduction below sees the candidates feature-major.
    let per_feature = (0..n_feature).into_par_iter()
        .map(|feature| best_threshold(sample, indices, feature))
        .collect::<Vec<_>>();

    let mut best_score = Score::WORST;
    let mut best = None;
    for (feature, (threshold, score)) in per_feature.into_iter().enumerate() {
        if score < best_score {
            best_score = score;
            best = Some(Splitter::new(feature, threshold));
        }
    }
    best
}

/// Returns the first threshold on `feature` with the lowest score.
/// `indices` must not be empty.
fn best_threshold(sample: &Sample, indices: &[usize], feature: usize)
    -> (f64, Score)
{
    let mut best_score = Score::WORST;
    let mut best_threshold = sample.value(indices[0], feature);
    for &i in indices {
        let threshold = sample.value(i, feature);
        let score = gini_index(sample, indices, feature, threshold);

        if score < best_score {
            best_score = score;
            best_threshold = threshold;
        }
    }
    (best_threshold, best_score)
}
