//! # Shape-Redefining Operations
//!
//! [`batch`] and [`transpose_2d`] regroup the top-level sequence; a leaf
//! input is treated as a one-element sequence.

use core::num::NonZeroUsize;

use crate::{
    errors::{KResult, KotobaError},
    nested::{Container, LazyNested, NodeIter},
};

/// Validate a batch size.
pub fn try_batch_size(size: usize) -> KResult<NonZeroUsize> {
    NonZeroUsize::new(size).ok_or(KotobaError::InvalidBatchSize { size })
}

/// Partition the top-level sequence into consecutive chunks of `size`.
///
/// The final chunk may be shorter. Elements inside each chunk keep
/// their own nesting.
///
/// ## Errors
/// [`KotobaError::InvalidBatchSize`] when `size == 0`.
pub fn batch<'a, T: 'a>(
    data: impl Into<LazyNested<'a, T>>,
    size: usize,
    lazy: bool,
) -> KResult<Container<'a, T>> {
    Ok(batch_nonzero(data, try_batch_size(size)?, lazy))
}

/// [`batch`] with a pre-validated size.
pub fn batch_nonzero<'a, T: 'a>(
    data: impl Into<LazyNested<'a, T>>,
    size: NonZeroUsize,
    lazy: bool,
) -> Container<'a, T> {
    let mut children = data.into().into_children();
    let size = size.get();

    LazyNested::node(core::iter::from_fn(move || {
        let chunk: Vec<LazyNested<'a, T>> = children.by_ref().take(size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(LazyNested::node(chunk))
        }
    }))
    .into_container(lazy)
}

/// Swap rows and columns of the top two levels.
///
/// Ragged rows truncate every column to the shortest row, as `zip` does.
/// Each column is gathered before it is yielded.
pub fn transpose_2d<'a, T: 'a>(
    data: impl Into<LazyNested<'a, T>>,
    lazy: bool,
) -> Container<'a, T> {
    let mut rows: Vec<NodeIter<'a, T>> = data
        .into()
        .into_children()
        .map(LazyNested::into_children)
        .collect();

    LazyNested::node(core::iter::from_fn(move || {
        if rows.is_empty() {
            return None;
        }
        let column: Option<Vec<LazyNested<'a, T>>> =
            rows.iter_mut().map(|row| row.next()).collect();
        column.map(LazyNested::node)
    }))
    .into_container(lazy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{nested, nested::Nested};

    #[test]
    fn test_batch() {
        let data: Nested<i32> = nested!([1, 2, 3, 4, 5]);

        let out = batch(data.clone(), 2, false).unwrap();
        assert_eq!(out.materialize(), nested!([[1, 2], [3, 4], [5]]));

        let out = batch(data.clone(), 5, true).unwrap();
        assert!(out.is_lazy());
        assert_eq!(out.materialize(), nested!([[1, 2, 3, 4, 5]]));

        let out = batch(data, 8, false).unwrap();
        assert_eq!(out.materialize(), nested!([[1, 2, 3, 4, 5]]));
    }

    #[test]
    fn test_batch_keeps_element_shape() {
        let data: Nested<i32> = nested!([[1, 2], 3, [4]]);
        let out = batch(data, 2, false).unwrap();
        assert_eq!(out.materialize(), nested!([[[1, 2], 3], [[4]]]));
    }

    #[test]
    fn test_batch_edge_cases() {
        assert!(matches!(
            batch(nested!([1, 2]), 0, false),
            Err(KotobaError::InvalidBatchSize { size: 0 })
        ));

        let empty: Nested<i32> = Nested::Node(vec![]);
        let out = batch(empty, 3, false).unwrap();
        assert_eq!(out.materialize(), Nested::Node(vec![]));

        let out = batch(Nested::leaf(9), 3, false).unwrap();
        assert_eq!(out.materialize(), nested!([[9]]));
    }

    #[test]
    fn test_batch_infinite() {
        let data: LazyNested<u32> = LazyNested::node((0..).map(LazyNested::leaf));
        let out = batch(data, 3, true).unwrap();
        let first: Vec<Nested<u32>> = out
            .into_lazy()
            .into_children()
            .take(2)
            .map(LazyNested::materialize)
            .collect();
        assert_eq!(first, vec![nested!([0, 1, 2]), nested!([3, 4, 5])]);
    }

    #[test]
    fn test_transpose_2d() {
        let data: Nested<i32> = nested!([[1, 2, 3], [4, 5, 6]]);
        let out = transpose_2d(data, false);
        assert_eq!(out.materialize(), nested!([[1, 4], [2, 5], [3, 6]]));
    }

    #[test]
    fn test_transpose_2d_ragged_truncates() {
        let data: Nested<i32> = nested!([[1, 2, 3], [4], [5, 6]]);
        let out = transpose_2d(data, true);
        assert!(out.is_lazy());
        assert_eq!(out.materialize(), nested!([[1, 4, 5]]));
    }

    #[test]
    fn test_transpose_2d_degenerate() {
        let empty: Nested<i32> = Nested::Node(vec![]);
        assert_eq!(transpose_2d(empty, false).materialize(), Nested::Node(vec![]));

        let empty_row: Nested<i32> = nested!([[1, 2], []]);
        assert_eq!(
            transpose_2d(empty_row, false).materialize(),
            Nested::Node(vec![])
        );
    }
}
