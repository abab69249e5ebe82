//! Gini impurity of a partition.
use serde::{Serialize, Deserialize};

use std::cmp::Ordering;
use std::ops::AddAssign;

use crate::Sample;
use crate::split::LeftRight;

/// Score for a splitting.
/// This is just a wrapper for `f64`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Score(
    /// The weighted impurity.
    pub f64,
);

impl Score {
    /// The score that every evaluated candidate beats.
    pub const WORST: Self = Self(f64::MAX);
}

impl From<f64> for Score {
    #[inline(always)]
    fn from(score: f64) -> Self {
        Self(score)
    }
}

impl PartialEq for Score {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl PartialOrd for Score {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Number of examples per label on one side of a split.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelCount {
    /// Number of label `0`.
    pub zeros: usize,
    /// Number of label `1`.
    pub ones: usize,
}

impl LabelCount {
    /// Count the labels of the rows in `indices`.
    pub fn of(target: &[u8], indices: &[usize]) -> Self {
        let mut count = Self::default();
        indices.iter().for_each(|&i| { count += target[i]; });
        count
    }

    /// Returns the number of counted labels.
    #[inline]
    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }

    /// `true` if every counted label is the same.
    /// An empty counter is pure.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.zeros == 0 || self.ones == 0
    }

    /// Returns the majority label.
    /// Ties resolve to `TIE_LABEL`.
    #[inline]
    pub fn majority(&self) -> u8 {
        if self.zeros > self.ones { 0 } else { crate::constants::TIE_LABEL }
    }
}

impl AddAssign<u8> for LabelCount {
    #[inline]
    fn add_assign(&mut self, label: u8) {
        if label == 0 { self.zeros += 1; } else { self.ones += 1; }
    }
}

/// Returns the gini-impurity of the given counter.
/// An empty counter has zero impurity.
#[inline(always)]
pub fn gini_impurity(count: &LabelCount) -> f64 {
    let total = count.total();
    if total == 0 { return 0f64; }

    let total = total as f64;
    let p0 = count.zeros as f64 / total;
    let p1 = count.ones as f64 / total;

    1f64 - p0.powi(2) - p1.powi(2)
}

/// Returns the weighted Gini impurity obtained by sending
/// `x[i][feature] < threshold` to the left and the rest to the right,
/// over the rows named by `indices`.
/// 
/// # Panics
/// 
/// Panics if `indices` is empty,
/// or if `indices` or `feature` is out of range for `sample`.
pub fn gini_index(
    sample:    &Sample,
    indices:   &[usize],
    feature:   usize,
    threshold: f64,
) -> Score
{
    assert!(!indices.is_empty(), "Gini index of an empty partition");

    let target = sample.target();
    let mut left = LabelCount::default();
    let mut right = LabelCount::default();
    for &i in indices {
        match LeftRight::of(sample.value(i, feature), threshold) {
            LeftRight::Left  => { left  += target[i]; },
            LeftRight::Right => { right += target[i]; },
        }
    }

    let total = indices.len() as f64;
    let lp = left.total() as f64 / total;
    let rp = right.total() as f64 / total;

    Score::from(lp * gini_impurity(&left) + rp * gini_impurity(&right))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn test_sample() -> Sample {
        let rows = vec![
            vec![25f64,  50_000f64, 650f64],
            vec![40f64, 100_000f64, 720f64],
            vec![35f64,  85_000f64, 680f64],
            vec![22f64,  45_000f64, 600f64],
            vec![50f64, 120_000f64, 800f64],
        ];
        Sample::new(rows, vec![0, 1, 1, 0, 1]).unwrap()
    }

    #[test]
    fn test_gini_impurity() {
        let pure = LabelCount { zeros: 3, ones: 0 };
        assert_eq!(gini_impurity(&pure), 0f64);

        let balanced = LabelCount { zeros: 2, ones: 2 };
        assert!((gini_impurity(&balanced) - 0.5).abs() < TEST_TOLERANCE);

        assert_eq!(gini_impurity(&LabelCount::default()), 0f64);
    }

    #[test]
    fn test_majority() {
        assert_eq!(LabelCount { zeros: 2, ones: 1 }.majority(), 0);
        assert_eq!(LabelCount { zeros: 1, ones: 2 }.majority(), 1);
        assert_eq!(LabelCount { zeros: 2, ones: 2 }.majority(), 1);
        assert_eq!(LabelCount::default().majority(), 1);
    }

    #[test]
    fn test_label_count() {
        let sample = test_sample();
        let count = LabelCount::of(sample.target(), &[0, 1, 2, 3, 4]);
        assert_eq!(count, LabelCount { zeros: 2, ones: 3 });
        assert!(!count.is_pure());
        assert!(LabelCount::of(sample.target(), &[1, 4]).is_pure());
        assert!(LabelCount::default().is_pure());
    }

    #[test]
    fn test_gini_index_perfect_split() {
        let sample = test_sample();
        let ix = (0..5).collect::<Vec<_>>();
        let score = gini_index(&sample, &ix, 0, 35f64);
        assert!(score.0.abs() < TEST_TOLERANCE, "got {score:?}");
    }

    #[test]
    fn test_gini_index_one_sided() {
        let sample = test_sample();
        let ix = (0..5).collect::<Vec<_>>();

        // Every row goes to the right.
        let score = gini_index(&sample, &ix, 0, 22f64);
        let expected = 1f64 - (2f64 / 5f64).powi(2) - (3f64 / 5f64).powi(2);
        assert!(
            (score.0 - expected).abs() < TEST_TOLERANCE,
            "expected {expected}, got {score:?}",
        );
    }

    #[test]
    fn test_gini_index_mixed() {
        let sample = test_sample();
        let ix = (0..5).collect::<Vec<_>>();

        // left: {25, 35, 22} -> {0, 1, 0}, right: {40, 50} -> {1, 1}
        let score = gini_index(&sample, &ix, 0, 40f64);
        let expected = 3f64 / 5f64 * (4f64 / 9f64);
        assert!(
            (score.0 - expected).abs() < TEST_TOLERANCE,
            "expected {expected}, got {score:?}",
        );
    }

    #[test]
    fn test_gini_index_subset() {
        let sample = test_sample();
        // rows 0, 1, 3 -> labels 0, 1, 0; split on income < 100000
        let score = gini_index(&sample, &[0, 1, 3], 1, 100_000f64);
        assert!(score.0.abs() < TEST_TOLERANCE, "got {score:?}");
    }
}
