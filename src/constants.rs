//! Default values and fixed widths.
/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// The label assigned to a leaf when both label counts are equal,
/// including the empty subset.
pub const TIE_LABEL: u8 = 1;

/// Width of the stats block printed by [`crate::report`].
pub const FULL_WIDTH: usize = 60;
/// Width of each column of the stats block.
pub const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
