//! Parameters of the decision tree and the builder holding them.
use serde::{Serialize, Deserialize};

use crate::DecisionTree;
use crate::checkers;
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::error::TreeError;

/// Parameters of [`DecisionTree`] as a plain record.
/// Missing fields take the default values.
/// 
/// ```
/// use minitree::TreeConfig;
/// let config = TreeConfig::from_json(r#"{ "max_depth": 5 }"#).unwrap();
/// assert_eq!(config.max_depth, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// The maximal number of branches on a root-to-leaf path.
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl TreeConfig {
    /// Read the config from a JSON string.
    /// Returns `Err` if the string is not a valid config
    /// or if `max_depth` is zero.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let config: Self = serde_json::from_str(json)?;
        checkers::max_depth(config.max_depth)?;
        Ok(config)
    }

    /// Write the config as a JSON string.
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
/// 
/// # Example
/// 
/// ```
/// use minitree::DecisionTreeBuilder;
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .build();
/// assert_eq!(tree.max_depth(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecisionTreeBuilder {
    config: TreeConfig,
}

impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a builder from a [`TreeConfig`].
    /// Returns `Err` if `config.max_depth` is zero.
    pub fn from_config(config: TreeConfig) -> Result<Self, TreeError> {
        checkers::max_depth(config.max_depth)?;
        Ok(Self { config })
    }

    /// Specify the maximal depth of the tree.
    /// Default maximal depth is `3`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Tree must have positive depth");
        self.config.max_depth = depth;

        self
    }

    /// Returns the current parameters.
    #[inline]
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::new(self.config.max_depth)
    }
}
