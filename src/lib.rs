#![warn(missing_docs)]

//! 
//! A crate that grows a binary decision tree classifier
//! from a small labeled table of numeric features.
//! 
//! The tree is grown greedily.
//! At each node, every observed value of every feature is tried
//! as a threshold `x[feature] < threshold`,
//! and the candidate with the lowest weighted Gini impurity is kept.
//! Growing stops at pure nodes and at the maximal depth.
//! 
//! ```
//! let rows = vec![
//!     vec![25.0,  50_000.0, 650.0],
//!     vec![40.0, 100_000.0, 720.0],
//!     vec![35.0,  85_000.0, 680.0],
//!     vec![22.0,  45_000.0, 600.0],
//!     vec![50.0, 120_000.0, 800.0],
//! ];
//! let labels = vec![0, 1, 1, 0, 1];
//! 
//! let tree = minitree::build_tree(rows, labels, 3);
//! assert_eq!(minitree::predict(&tree, &[30.0, 60_000.0, 700.0]), 0);
//! ```

pub mod constants;
pub mod error;
pub mod checkers;
pub mod sample;
pub mod impurity;
pub mod split;
pub mod node;
pub mod classifier;
pub mod builder;
pub(crate) mod dtree;
pub mod report;

pub use error::TreeError;
pub use sample::Sample;
pub use node::Node;
pub use split::{Splitter, LeftRight};
pub use classifier::{Classifier, DecisionTreeClassifier};
pub use builder::{DecisionTreeBuilder, TreeConfig};
pub use dtree::DecisionTree;

/// Grow a decision tree of depth at most `max_depth`
/// from `rows` and their `labels`.
/// 
/// Returns `Err` if the lengths differ, if the rows have different widths,
/// if a label is not in `{0, 1}`, or if `max_depth` is zero.
pub fn try_build_tree(
    rows:      Vec<Vec<f64>>,
    labels:    Vec<u8>,
    max_depth: usize,
) -> Result<DecisionTreeClassifier, TreeError>
{
    checkers::max_depth(max_depth)?;
    let sample = Sample::new(rows, labels)?;
    let tree = DecisionTreeBuilder::new()
        .max_depth(max_depth)
        .build();
    Ok(tree.fit(&sample))
}

/// Same as [`try_build_tree`], but panics on invalid inputs.
pub fn build_tree(
    rows:      Vec<Vec<f64>>,
    labels:    Vec<u8>,
    max_depth: usize,
) -> DecisionTreeClassifier
{
    try_build_tree(rows, labels, max_depth)
        .unwrap_or_else(|e| panic!("cannot build a decision tree: {e}"))
}

/// Predict the label of `row`.
/// Panics if `row` is shorter than a feature read along the path.
#[inline]
pub fn predict(tree: &DecisionTreeClassifier, row: &[f64]) -> u8 {
    tree.predict(row)
}

/// Same as [`predict`], but returns `Err` if `row` is too short.
#[inline]
pub fn try_predict(tree: &DecisionTreeClassifier, row: &[f64])
    -> Result<u8, TreeError>
{
    tree.try_predict(row)
}
