//! Constants used throughout the dotbag library.
//!
//! This module provides central definitions for the path separator and the
//! limits applied by the recursive algorithms.

/// Separator between the segments of a dot-notation path.
pub const PATH_SEPARATOR: char = '.';

/// Maximum nesting depth a structural merge will recurse into.
///
/// Merging a source nested deeper than this fails with
/// [`ContainerError::MergeTooDeep`](crate::container::ContainerError::MergeTooDeep)
/// instead of exhausting the stack.
pub const MAX_MERGE_DEPTH: usize = 512;
