//! A node struct used in the decision tree algorithm.
use crate::{
    split::*,
    error::TreeError,
    classifier::Classifier,
};

use std::fmt;

/// A node of a decision tree.
/// Each `Branch` owns its two children.
#[derive(Clone, PartialEq)]
pub enum Node {
    /// A node that have two childrens.
    Branch {
        /// The rule sending a row to `left` or `right`.
        splitter: Splitter,
        /// Sub-tree for `x[feature] < threshold`.
        left:     Box<Node>,
        /// Sub-tree for `x[feature] >= threshold`.
        right:    Box<Node>,
    },
    /// A node that have no child.
    Leaf {
        /// The predicted label.
        label: u8,
    },
}

impl Node {
    /// Construct a branch node from the arguments.
    pub fn branch(
        splitter: Splitter,
        left:     Box<Node>,
        right:    Box<Node>,
    ) -> Self
    {
        Self::Branch { splitter, left, right, }
    }

    /// Construct a leaf node predicting `label`.
    pub fn leaf(label: u8) -> Self {
        Self::Leaf { label, }
    }

    /// Returns the number of branches on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                1 + left.depth().max(right.depth())
            },
            Self::Leaf { .. } => 0,
        }
    }

    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { left, right, .. } => {
                left.n_leaves() + right.n_leaves()
            },
            Self::Leaf { .. } => 1,
        }
    }

    /// Same as [`Classifier::predict`], but returns `Err`
    /// if some branch on the path reads past the end of `row`.
    pub fn try_predict(&self, row: &[f64]) -> Result<u8, TreeError> {
        let mut node = self;
        loop {
            match node {
                Self::Branch { splitter, left, right } => {
                    node = match splitter.try_split(row)? {
                        LeftRight::Left  => left.as_ref(),
                        LeftRight::Right => right.as_ref(),
                    };
                },
                Self::Leaf { label } => return Ok(*label),
            }
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { splitter, left, right } => {
                let splitter = format!(
                    "\tnode_{id} [ label = \"x[{feat}] < {thr} ?\" ];\n",
                    feat = splitter.feature,
                    thr  = splitter.threshold,
                );

                let left_id = id + 1;
                let (     left,  right_id) = left.to_dot_info(left_id);
                let (mut right, return_id) = right.to_dot_info(right_id);

                let mut info = left;
                info.push(splitter);
                info.append(&mut right);

                let left_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                info.push(left_edge);
                let right_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );
                info.push(right_edge);

                (info, return_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}

impl Classifier for Node {
    fn predict(&self, row: &[f64]) -> u8 {
        match self {
            Self::Branch { splitter, left, right } => {
                match splitter.split(row) {
                    LeftRight::Left  => left.predict(row),
                    LeftRight::Right => right.predict(row),
                }
            },
            Self::Leaf { label } => *label,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { splitter, left, right } => {
                f.debug_struct("Branch")
                    .field("splitter", &splitter)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf { label } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .finish()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // x[0] < 10 ? (x[1] < 5 ? 0 : 1) : 1
    fn test_tree() -> Node {
        let inner = Node::branch(
            Splitter::new(1, 5f64),
            Box::new(Node::leaf(0)),
            Box::new(Node::leaf(1)),
        );
        Node::branch(
            Splitter::new(0, 10f64),
            Box::new(inner),
            Box::new(Node::leaf(1)),
        )
    }

    #[test]
    fn test_predict() {
        let tree = test_tree();
        assert_eq!(tree.predict(&[3f64, 2f64]), 0);
        assert_eq!(tree.predict(&[3f64, 5f64]), 1);
        assert_eq!(tree.predict(&[10f64, 0f64]), 1);
    }

    #[test]
    fn test_try_predict() {
        let tree = test_tree();
        assert_eq!(tree.try_predict(&[3f64, 2f64]).unwrap(), 0);
        // The right branch of the root never reads `x[1]`.
        assert_eq!(tree.try_predict(&[12f64]).unwrap(), 1);
        assert!(matches!(
            tree.try_predict(&[3f64]),
            Err(TreeError::FeatureOutOfRange { feature: 1, len: 1 })
        ));
    }

    #[test]
    #[should_panic]
    fn test_predict_short_row() {
        let tree = test_tree();
        tree.predict(&[3f64]);
    }

    #[test]
    fn test_shape() {
        let tree = test_tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
        assert_eq!(Node::leaf(0).depth(), 0);
    }

    #[test]
    fn test_dot_info() {
        let tree = test_tree();
        let (info, next_id) = tree.to_dot_info(0);
        assert_eq!(next_id, 5);
        // 3 leaves + 2 branches + 2 edges per branch.
        assert_eq!(info.len(), 9);
        assert!(info.iter().any(|row| row.contains("x[1] < 5 ?")));
    }
}
