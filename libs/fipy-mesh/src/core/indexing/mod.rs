//! Index-generation tools for structured layouts.
//!
//! Structured grids number their entities with arithmetic progressions. Two
//! operations turn a 1D progression into a full 3D layout:
//!
//! - [`prune`] drops every `gap`-th element starting at `shift`, which removes
//!   the positions that would wrap across an axis boundary.
//! - [`repeat_with_offset`] replicates a base pattern across an axis, adding
//!   `offset * repetition` to every element of each repetition.

/// Removes the elements at positions `shift`, `shift + gap`, `shift + 2 * gap`, ...
///
/// # Examples
/// ```
/// use fipy_mesh::core::indexing::prune;
/// let ids: Vec<usize> = (0..8).collect();
/// assert_eq!(prune(&ids, 4, 3), vec![0, 1, 2, 4, 5, 6]);
/// ```
pub fn prune(ids: &[usize], gap: usize, shift: usize) -> Vec<usize> {
    debug_assert!(gap > 0, "prune gap must be positive");
    ids.iter()
        .enumerate()
        .filter(|(i, _)| *i < shift || (*i - shift) % gap != 0)
        .map(|(_, &id)| id)
        .collect()
}

/// Replicates `base` `reps` times, adding `offset * r` to repetition `r`,
/// and flattens the result.
///
/// # Examples
/// ```
/// use fipy_mesh::core::indexing::repeat_with_offset;
/// assert_eq!(repeat_with_offset(&[0, 1, 2], 12, 2), vec![0, 1, 2, 12, 13, 14]);
/// ```
pub fn repeat_with_offset(base: &[usize], offset: usize, reps: usize) -> Vec<usize> {
    (0..reps)
        .flat_map(|r| base.iter().map(move |&id| id + offset * r))
        .collect()
}
