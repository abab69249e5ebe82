//! Defines the decision tree classifier.
use crate::{Sample, node::Node};
use crate::error::TreeError;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

/// A trait that defines the behavior of a binary classifier.
pub trait Classifier {
    /// Predicts the label in `{0, 1}` of `row`.
    /// Panics if `row` is shorter than a feature the classifier reads.
    fn predict(&self, row: &[f64]) -> u8;

    /// Predicts the labels of all rows of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<u8> {
        sample.rows()
            .iter()
            .map(|row| self.predict(row))
            .collect()
    }

    /// Returns the fraction of rows of `sample` whose label is mispredicted.
    /// An empty sample has zero error.
    fn error_rate(&self, sample: &Sample) -> f64 {
        let n_sample = sample.shape().0;
        if n_sample == 0 { return 0f64; }

        let n_miss = self.predict_all(sample)
            .into_iter()
            .zip(sample.target())
            .filter(|(p, y)| p != *y)
            .count();
        n_miss as f64 / n_sample as f64
    }
}

/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTreeClassifier {
    root: Node
}

impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}

impl From<Box<Node>> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}

impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn predict(&self, row: &[f64]) -> u8 {
        self.root.predict(row)
    }
}

impl DecisionTreeClassifier {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the number of branches on the longest root-to-leaf path.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }

    /// See [`Node::try_predict`].
    #[inline]
    pub fn try_predict(&self, row: &[f64]) -> Result<u8, TreeError> {
        self.root.try_predict(row)
    }

    /// Write the current decision tree to dot file.
    pub fn to_dot_file<P>(&self, path: P) -> Result<(), TreeError>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}

impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn walk(node: &Node, indent: usize, f: &mut fmt::Formatter<'_>)
            -> fmt::Result
        {
            let pad = "  ".repeat(indent);
            match node {
                Node::Branch { splitter, left, right } => {
                    writeln!(f, "{pad}if {splitter}")?;
                    walk(left, indent + 1, f)?;
                    writeln!(f, "{pad}else")?;
                    walk(right, indent + 1, f)
                },
                Node::Leaf { label } => writeln!(f, "{pad}predict {label}"),
            }
        }
        walk(&self.root, 0, f)
    }
}
