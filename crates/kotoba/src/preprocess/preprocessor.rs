//! # Preprocessor Trait

use core::marker::PhantomData;

use crate::nested::Container;

/// A transform over nested containers.
///
/// `transform` must honor the result-mode contract: it returns
/// [`Container::Lazy`] when `lazy` is true, and
/// [`Container::Materialized`] otherwise. The input may be in either mode.
///
/// The output borrows the step for `'a`: a lazy result may still call back
/// into it. Bind a step to a variable before storing its output.
pub trait Preprocessor<I, O = I> {
    /// Transform `data`.
    ///
    /// ## Arguments
    /// * `data` - the input container, lazy or materialized.
    /// * `lazy` - the requested result mode.
    fn transform<'a>(
        &'a self,
        data: Container<'a, I>,
        lazy: bool,
    ) -> Container<'a, O>
    where
        I: 'a,
        O: 'a;
}

impl<I, O, P> Preprocessor<I, O> for Box<P>
where
    P: Preprocessor<I, O> + ?Sized,
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
        (**self).transform(data, lazy)
    }
}

/// Typed two-step composition; see [`PreprocessorExt::then`].
///
/// The first step always runs lazily; the second honors the caller.
#[derive(Debug, Clone)]
pub struct Chain<A, B, M> {
    first: A,
    second: B,
    _middle: PhantomData<fn() -> M>,
}

impl<A, B, M> Chain<A, B, M> {
    /// Compose `first` then `second`.
    pub fn new(
        first: A,
        second: B,
    ) -> Self {
        Self {
            first,
            second,
            _middle: PhantomData,
        }
    }
}

impl<I, M, O, A, B> Preprocessor<I, O> for Chain<A, B, M>
where
    A: Preprocessor<I, M>,
    B: Preprocessor<M, O>,
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
        let middle = self.first.transform(data, true);
        self.second.transform(middle, lazy)
    }
}

/// Combinators for any [`Preprocessor`].
pub trait PreprocessorExt<I, O>: Preprocessor<I, O> + Sized {
    /// Follow this step with `next`, which may change the leaf type again.
    fn then<P, U>(
        self,
        next: P,
    ) -> Chain<Self, P, O>
    where
        P: Preprocessor<O, U>,
    {
        Chain::new(self, next)
    }
}

impl<I, O, P> PreprocessorExt<I, O> for P where P: Preprocessor<I, O> {}
