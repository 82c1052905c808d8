//! # `kotoba` Preprocessing Suite
//!
//! Composable preprocessing pipelines over arbitrarily nested sequences,
//! and the token vocabularies they feed.
//!
//! See:
//! * [`nested`] for the nested container model and shape-preserving maps.
//! * [`preprocess`] to compose [`preprocess::Preprocessor`] steps into pipelines.
//! * [`vocab`] to build, query, export and load token vocabularies.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::KHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, but with ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use kotoba::{
//!     nested::{Container, Nested},
//!     preprocess::{LowerCase, Pipeline, Preprocessor, PreprocessorExt, RegexTokenizer},
//!     vocab::{TokenToId, Vocabulary},
//! };
//!
//! let corpus = Nested::from_leaves(["The cat sat.", "A cat ran!"].map(String::from));
//!
//! let tokenize = Pipeline::new()
//!     .with_step(LowerCase)
//!     .with_step(RegexTokenizer::word_punct()?);
//!
//! let tokens = tokenize.transform(Container::from(corpus.clone()), false);
//! let vocab: Arc<Vocabulary> = Arc::new(Vocabulary::build(
//!     tokens,
//!     ["<PAD>".to_string(), "<UNK>".to_string()],
//!     Some(1),
//! )?);
//!
//! let to_ids: TokenToId<String, Vocabulary> = TokenToId::new(vocab);
//! let encode = tokenize.then(to_ids);
//! let ids = encode.transform(Container::from(corpus), false);
//! assert_eq!(
//!     ids.materialize(),
//!     kotoba::nested!([[2, 3, 4, 5], [6, 3, 7, 8]])
//! );
//! # Ok::<(), kotoba::errors::KotobaError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod nested;
pub mod preprocess;
pub mod types;
pub mod utility;
pub mod vocab;

#[doc(inline)]
pub use errors::{KResult, KotobaError};
#[doc(inline)]
pub use types::TokenId;
