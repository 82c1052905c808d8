//! # Preprocessors
//!
//! Every step implements [`Preprocessor`]: `transform(data, lazy) -> data`.
//!
//! * [`Pipeline`] / [`HorizontalPipeline`] - composition.
//! * [`MapItems`], [`ExpandItems`], [`MapLastDimension`], [`Batch`],
//!   [`Transpose2D`] - adapters over [`crate::nested`].
//! * [`Raw`] / [`RawWithMode`] - arbitrary container functions.
//! * [`LowerCase`], [`Strip`], [`RegexTokenizer`] - text steps.
//!
//! ## Example
//!
//! ```rust
//! use kotoba::{
//!     nested::Nested,
//!     preprocess::{LowerCase, Pipeline, Preprocessor, RegexTokenizer, Strip},
//! };
//!
//! let pipeline = Pipeline::new()
//!     .with_step(Strip)
//!     .with_step(LowerCase)
//!     .with_step(RegexTokenizer::word_punct().unwrap());
//!
//! let data = Nested::from_leaves(["  Hello World ".to_string()]);
//! let tokens = pipeline.transform(data.into(), false).materialize();
//!
//! assert_eq!(
//!     tokens,
//!     Nested::node([Nested::from_leaves(["hello".to_string(), "world".to_string()])])
//! );
//! ```

pub mod adapters;
pub mod pipeline;
pub mod preprocessor;
pub mod raw;
pub mod text;

#[doc(inline)]
pub use adapters::{Batch, ExpandItems, MapItems, MapLastDimension, Transpose2D};
#[doc(inline)]
pub use pipeline::{BoxedPreprocessor, HorizontalPipeline, Pipeline};
#[doc(inline)]
pub use preprocessor::{Chain, Preprocessor, PreprocessorExt};
#[doc(inline)]
pub use raw::{Raw, RawWithMode};
#[doc(inline)]
pub use text::{DEFAULT_TOKEN_PATTERN, LowerCase, RegexTokenizer, Strip};
