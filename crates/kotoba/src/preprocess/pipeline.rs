//! # Pipelines
//!
//! * [`Pipeline`] - steps applied one after another.
//! * [`HorizontalPipeline`] - one step per top-level element.

use crate::{
    nested::{Container, LazyNested, Nested},
    preprocess::Preprocessor,
};

/// A boxed pipeline step.
pub type BoxedPreprocessor<I, O = I> = Box<dyn Preprocessor<I, O>>;

/// Sequential pipeline.
///
/// Every step but the last runs with `lazy = true`, so no intermediate
/// nesting is materialized; the last step honors the caller's mode.
///
/// An empty pipeline is the identity (still honoring the mode), and a
/// single-step pipeline is equivalent to that step.
///
/// Steps share one leaf type; use
/// [`PreprocessorExt::then`](crate::preprocess::PreprocessorExt::then)
/// to compose steps that change it.
pub struct Pipeline<T> {
    steps: Vec<BoxedPreprocessor<T>>,
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> From<Vec<BoxedPreprocessor<T>>> for Pipeline<T> {
    fn from(steps: Vec<BoxedPreprocessor<T>>) -> Self {
        Self { steps }
    }
}

impl<T> Pipeline<T> {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step and return the pipeline.
    pub fn with_step<P>(
        mut self,
        step: P,
    ) -> Self
    where
        P: Preprocessor<T> + 'static,
    {
        self.push_step(step);
        self
    }

    /// Append a step.
    pub fn push_step<P>(
        &mut self,
        step: P,
    ) where
        P: Preprocessor<T> + 'static,
    {
        self.steps.push(Box::new(step));
    }

    /// The number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Is the pipeline empty?
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<T> Preprocessor<T> for Pipeline<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(steps = self.steps.len())))]
    fn transform<'a>(
        &'a self,
        data: Container<'a, T>,
        lazy: bool,
    ) -> Container<'a, T>
    where
        T: 'a,
    {
        let Some((last, init)) = self.steps.split_last() else {
            return data.into_mode(lazy);
        };

        let data = init
            .iter()
            .fold(data, |data, step| step.transform(data, true));
        last.transform(data, lazy)
    }
}

/// Per-branch pipeline.
///
/// Step `i` is applied only to top-level element `i`. When the counts
/// differ, the result is truncated to the shorter of the two, as `zip`
/// does. A leaf input is treated as a one-element sequence.
pub struct HorizontalPipeline<I, O = I> {
    steps: Vec<BoxedPreprocessor<I, O>>,
}

impl<I, O> Default for HorizontalPipeline<I, O> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<I, O> From<Vec<BoxedPreprocessor<I, O>>> for HorizontalPipeline<I, O> {
    fn from(steps: Vec<BoxedPreprocessor<I, O>>) -> Self {
        Self { steps }
    }
}

impl<I, O> HorizontalPipeline<I, O> {
    /// Create an empty horizontal pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a branch step and return the pipeline.
    pub fn with_step<P>(
        mut self,
        step: P,
    ) -> Self
    where
        P: Preprocessor<I, O> + 'static,
    {
        self.push_step(step);
        self
    }

    /// Append a branch step.
    pub fn push_step<P>(
        &mut self,
        step: P,
    ) where
        P: Preprocessor<I, O> + 'static,
    {
        self.steps.push(Box::new(step));
    }

    /// The number of branch steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Is the pipeline empty?
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<I, O> Preprocessor<I, O> for HorizontalPipeline<I, O> {
    fn transform<'a>(
        &'a self,
        data: Container<'a, I>,
        lazy: bool,
    ) -> Container<'a, O>
    where
        I: 'a,
        O: 'a,
    {
        let branches = data.into_lazy().into_children().zip(self.steps.iter());

        if lazy {
            LazyNested::node(branches.map(|(branch, step)| {
                step.transform(branch.into(), true).into_lazy()
            }))
            .into()
        } else {
            Nested::node(
                branches.map(|(branch, step)| step.transform(branch.into(), false).materialize()),
            )
            .into()
        }
    }
}
