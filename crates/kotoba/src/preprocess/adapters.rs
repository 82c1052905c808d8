//! # Mapper Adapters
//!
//! Thin [`Preprocessor`] wrappers over the functions in [`crate::nested`].

use core::num::NonZeroUsize;

use crate::{
    errors::KResult,
    nested::{
        Container,
        Nested,
        batch_nonzero,
        expand_elements,
        map_elements,
        map_last_dimension,
        transpose_2d,
        try_batch_size,
    },
    preprocess::Preprocessor,
};

/// Apply a function to every leaf; see [`map_elements`].
#[derive(Debug, Clone, Copy)]
pub struct MapItems<F> {
    func: F,
}

impl<F> MapItems<F> {
    /// Wrap a leaf function.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<I, O, F> Preprocessor<I, O> for MapItems<F>
where
    F: Fn(I) -> O,
{
    fn transform<'a>(
        &'a self,
        data: Container<'a, I>,
        lazy: bool,
    ) -> Container<'a, O>
    where
        I: 'a,
        O: 'a,
    {
        map_elements(data, &self.func, lazy)
    }
}

/// Replace every leaf with a sub-container; see [`expand_elements`].
///
/// This is the injection point for external tokenizers.
#[derive(Debug, Clone, Copy)]
pub struct ExpandItems<F> {
    func: F,
}

impl<F> ExpandItems<F> {
    /// Wrap a leaf expansion function.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<I, O, F> Preprocessor<I, O> for ExpandItems<F>
where
    F: Fn(I) -> Nested<O>,
{
    fn transform<'a>(
        &'a self,
        data: Container<'a, I>,
        lazy: bool,
    ) -> Container<'a, O>
    where
        I: 'a,
        O: 'a,
    {
        expand_elements(data, &self.func, lazy)
    }
}

/// Apply a function to each innermost sequence; see [`map_last_dimension`].
#[derive(Debug, Clone, Copy)]
pub struct MapLastDimension<F> {
    func: F,
}

impl<F> MapLastDimension<F> {
    /// Wrap a last-dimension function.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<T, F> Preprocessor<T> for MapLastDimension<F>
where
    F: Fn(Vec<T>) -> Nested<T>,
{
    fn transform<'a>(
        &'a self,
        data: Container<'a, T>,
        lazy: bool,
    ) -> Container<'a, T>
    where
        T: 'a,
    {
        map_last_dimension(data, &self.func, lazy)
    }
}

/// Chunk the top-level sequence; see [`batch`](crate::nested::batch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    size: NonZeroUsize,
}

impl Batch {
    /// Create a batching step.
    ///
    /// ## Errors
    /// [`KotobaError::InvalidBatchSize`](crate::errors::KotobaError::InvalidBatchSize)
    /// when `size == 0`.
    pub fn new(size: usize) -> KResult<Self> {
        Ok(Self {
            size: try_batch_size(size)?,
        })
    }

    /// Get the batch size.
    pub fn size(&self) -> usize {
        self.size.get()
    }
}

impl<T> Preprocessor<T> for Batch {
    fn transform<'a>(
        &'a self,
        data: Container<'a, T>,
        lazy: bool,
    ) -> Container<'a, T>
    where
        T: 'a,
    {
        batch_nonzero(data, self.size, lazy)
    }
}

/// Swap the top two levels; see [`transpose_2d`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transpose2D;

impl<T> Preprocessor<T> for Transpose2D {
    fn transform<'a>(
        &'a self,
        data: Container<'a, T>,
        lazy: bool,
    ) -> Container<'a, T>
    where
        T: 'a,
    {
        transpose_2d(data, lazy)
    }
}
