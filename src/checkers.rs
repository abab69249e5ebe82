//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data, range of labels.

use crate::error::TreeError;

/// Check whether the training sample is valid or not.
/// Returns the number of features shared by all rows.
#[inline]
pub fn sample(rows: &[Vec<f64>], target: &[u8])
    -> Result<usize, TreeError>
{
    if rows.len() != target.len() {
        return Err(TreeError::LengthMismatch {
            n_rows: rows.len(),
            n_labels: target.len(),
        });
    }

    let n_feature = rows.first().map(|row| row.len()).unwrap_or(0);
    if let Some((i, row)) = rows.iter()
        .enumerate()
        .find(|(_, row)| row.len() != n_feature)
    {
        return Err(TreeError::RaggedRow {
            row: i,
            got: row.len(),
            expected: n_feature,
        });
    }

    labels(target)?;
    Ok(n_feature)
}

/// Check that every label is either `0` or `1`.
#[inline]
pub fn labels(target: &[u8]) -> Result<(), TreeError> {
    match target.iter().position(|&y| y > 1) {
        Some(row) => Err(TreeError::NonBinaryLabel { row, label: target[row] }),
        None => Ok(()),
    }
}

/// Check the maximal depth of a tree.
#[inline]
pub fn max_depth(depth: usize) -> Result<(), TreeError> {
    if depth == 0 { Err(TreeError::ZeroDepth) } else { Ok(()) }
}

/// Returns `row[feature]` or an error if the row is too short.
#[inline]
pub fn feature_value(row: &[f64], feature: usize) -> Result<f64, TreeError> {
    row.get(feature)
        .copied()
        .ok_or(TreeError::FeatureOutOfRange { feature, len: row.len() })
}
