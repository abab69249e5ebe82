use tracing::{debug, info, trace};

use crate::{
    Sample,
    node::Node,
    impurity::LabelCount,
    split::{best_split, LeftRight},
    classifier::DecisionTreeClassifier,
};

use std::fmt;

/// The Decision Tree algorithm.  
/// Given a set of labeled training examples,
/// [`DecisionTree`] grows a binary tree greedily,
/// choosing at each node the split that minimizes the Gini index,
/// and outputs a [`DecisionTreeClassifier`].
///
/// A node becomes a leaf if its labels are pure,
/// if it sits at depth `max_depth`,
/// or if no candidate split separates its rows.
/// A leaf predicts the majority label of its rows.
/// Ties, including an empty node, predict `1`.
///
/// [`DecisionTree`] is constructed 
/// by [`DecisionTreeBuilder`](crate::builder::DecisionTreeBuilder).
/// 
/// # Example
/// ```
/// use minitree::{
///     Classifier,
///     DecisionTreeBuilder,
///     Sample,
/// };
/// 
/// let rows = vec![
///     vec![25.0,  50_000.0, 650.0],
///     vec![40.0, 100_000.0, 720.0],
///     vec![35.0,  85_000.0, 680.0],
///     vec![22.0,  45_000.0, 600.0],
///     vec![50.0, 120_000.0, 800.0],
/// ];
/// let sample = Sample::new(rows, vec![0, 1, 1, 0, 1]).unwrap();
/// 
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(3)
///     .build();
/// let f = tree.fit(&sample);
/// 
/// assert_eq!(f.predict(&[30.0, 60_000.0, 700.0]), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionTree {
    max_depth: usize,
}

impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(crate) fn new(max_depth: usize) -> Self {
        Self { max_depth, }
    }

    /// Returns the maximal depth of the trees this learner grows.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Grow a tree over all rows of `sample`.
    pub fn fit(&self, sample: &Sample) -> DecisionTreeClassifier {
        let n_sample = sample.shape().0;
        let indices = (0..n_sample).collect::<Vec<usize>>();

        let root = self.grow(sample, indices, 0);
        let f = DecisionTreeClassifier::from(root);

        info!(
            n_sample,
            max_depth = self.max_depth,
            depth = f.depth(),
            leaves = f.n_leaves(),
            "grew decision tree"
        );
        f
    }

    /// Grow the sub-tree for the rows in `indices`,
    /// whose root sits at `depth`.
    pub fn grow(
        &self,
        sample:  &Sample,
        indices: Vec<usize>,
        depth:   usize,
    ) -> Box<Node>
    {
        let count = LabelCount::of(sample.target(), &indices[..]);
        let label = count.majority();

        // Pure (or empty) node, or no depth left.
        if count.is_pure() || depth >= self.max_depth {
            trace!(depth, n_rows = indices.len(), label, "leaf");
            return Box::new(Node::leaf(label));
        }

        // Find the best pair of feature and threshold.
        // There is no candidate only if the sample has no feature.
        let Some(rule) = best_split(sample, &indices[..]) else {
            trace!(depth, n_rows = indices.len(), label, "leaf (no candidate)");
            return Box::new(Node::leaf(label));
        };

        // Split the train data for left/right childrens
        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices {
            match rule.split(&sample[i]) {
                LeftRight::Left  => { lindices.push(i); },
                LeftRight::Right => { rindices.push(i); },
            }
        }

        // If the split has no meaning, construct a leaf node.
        // Recursing would hand the same rows to the same split again.
        if lindices.is_empty() || rindices.is_empty() {
            trace!(depth, label, "leaf (no separating split)");
            return Box::new(Node::leaf(label));
        }

        debug!(
            depth,
            feature = rule.feature,
            threshold = rule.threshold,
            n_left = lindices.len(),
            n_right = rindices.len(),
            "split"
        );

        let left  = self.grow(sample, lindices, depth + 1);
        let right = self.grow(sample, rindices, depth + 1);

        Box::new(Node::branch(rule, left, right))
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Max depth: {}\n\
            - Split by: Gini index\n\
            ----------\
            ",
            self.max_depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::Splitter;

    fn purchase_sample() -> Sample {
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
    fn test_grow_purchase() {
        let sample = purchase_sample();
        let tree = DecisionTree::new(3);
        let root = tree.grow(&sample, (0..5).collect(), 0);

        let expected = Node::branch(
            Splitter::new(0, 35f64),
            Box::new(Node::leaf(0)),
            Box::new(Node::leaf(1)),
        );
        assert_eq!(*root, expected, "got {root:?}");
    }

    #[test]
    fn test_grow_pure() {
        let sample = purchase_sample();
        let tree = DecisionTree::new(3);
        let root = tree.grow(&sample, vec![1, 2, 4], 0);
        assert_eq!(*root, Node::leaf(1));

        let root = tree.grow(&sample, vec![0, 3], 0);
        assert_eq!(*root, Node::leaf(0));
    }

    #[test]
    fn test_grow_empty() {
        let sample = purchase_sample();
        let tree = DecisionTree::new(3);
        let root = tree.grow(&sample, Vec::new(), 0);
        assert_eq!(*root, Node::leaf(1));
    }

    #[test]
    fn test_grow_depth_limit_tie() {
        let sample = purchase_sample();
        let tree = DecisionTree::new(2);
        // Two rows of each label at the depth limit.
        let root = tree.grow(&sample, vec![0, 1, 2, 3], 2);
        assert_eq!(*root, Node::leaf(1));

        // Majority is `0`.
        let root = tree.grow(&sample, vec![0, 1, 3], 2);
        assert_eq!(*root, Node::leaf(0));
    }

    #[test]
    fn test_grow_identical_rows() {
        // No split separates the rows, so the root is a majority leaf.
        let rows = vec![vec![7f64], vec![7f64], vec![7f64]];
        let sample = Sample::new(rows, vec![0, 0, 1]).unwrap();
        let f = DecisionTree::new(2).fit(&sample);
        assert_eq!(*f.root(), Node::leaf(0), "got {:?}", f.root());
        assert_eq!(f.depth(), 0);
    }

    #[test]
    fn test_grow_identical_rows_deep() {
        let rows = vec![vec![1f64], vec![1f64]];
        let sample = Sample::new(rows, vec![0, 1]).unwrap();
        let f = DecisionTree::new(200_000).fit(&sample);
        assert_eq!(*f.root(), Node::leaf(1));
    }

    #[test]
    fn test_grow_stops_below_separated_split() {
        // The root separates {1} from {5, 5},
        // the right side cannot be split further.
        let rows = vec![vec![1f64], vec![5f64], vec![5f64]];
        let sample = Sample::new(rows, vec![0, 0, 1]).unwrap();
        let f = DecisionTree::new(100_000).fit(&sample);

        let expected = Node::branch(
            Splitter::new(0, 5f64),
            Box::new(Node::leaf(0)),
            Box::new(Node::leaf(1)),
        );
        assert_eq!(*f.root(), expected, "got {:?}", f.root());
    }

    #[test]
    fn test_grow_no_feature() {
        let rows = vec![Vec::new(), Vec::new(), Vec::new()];
        let sample = Sample::new(rows, vec![0, 1, 0]).unwrap();
        let f = DecisionTree::new(3).fit(&sample);
        assert_eq!(*f.root(), Node::leaf(0));
    }
}
