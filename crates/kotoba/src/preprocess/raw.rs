//! # Raw Function Steps
//!
//! Escape hatches wrapping whole-container functions:
//!
//! * [`Raw`] - the function does not see the requested mode; its result is
//!   converted to that mode afterwards.
//! * [`RawWithMode`] - the function receives the requested mode.

use crate::{nested::Container, preprocess::Preprocessor};

/// A whole-container function that ignores the result mode.
#[derive(Debug, Clone, Copy)]
pub struct Raw<F> {
    func: F,
}

impl<F> Raw<F> {
    /// Wrap a unary container function.
    pub fn new<I, O>(func: F) -> Self
    where
        F: for<'b> Fn(Container<'b, I>) -> Container<'b, O>,
    {
        Self { func }
    }
}

impl<I, O, F> Preprocessor<I, O> for Raw<F>
where
    F: for<'b> Fn(Container<'b, I>) -> Container<'b, O>,
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
        (self.func)(data).into_mode(lazy)
    }
}

/// A whole-container function that is told the result mode.
#[derive(Debug, Clone, Copy)]
pub struct RawWithMode<F> {
    func: F,
}

impl<F> RawWithMode<F> {
    /// Wrap a binary `(container, lazy)` function.
    pub fn new<I, O>(func: F) -> Self
    where
        F: for<'b> Fn(Container<'b, I>, bool) -> Container<'b, O>,
    {
        Self { func }
    }
}

impl<I, O, F> Preprocessor<I, O> for RawWithMode<F>
where
    F: for<'b> Fn(Container<'b, I>, bool) -> Container<'b, O>,
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
        (self.func)(data, lazy).into_mode(lazy)
    }
}
