//! # Vocabulary
//!
//! This module provides the token <-> id vocabulary and related io
//! mechanisms.
//!
//! * [`Vocabulary`] - an immutable token <-> id mapping with reserved
//!   special tokens and a configurable unknown token.
//! * [`TokenEmbedding`] - the lookup and coverage contract.
//! * [`TokenToId`] / [`IdToToken`] - pipeline steps over an embedding.
//! * [`io`] - the newline-delimited token-list format.
//!
//! ## Example
//!
//! ```rust
//! use kotoba::{
//!     nested::Nested,
//!     vocab::{TokenEmbedding, Vocabulary},
//! };
//!
//! let tokens = Nested::from_leaves(["a", "b", "a"].map(String::from));
//! let vocab = Vocabulary::build(tokens, ["<PAD>".to_string()], None).unwrap();
//!
//! assert_eq!(vocab.index_to_token(), &["<PAD>", "a", "b"]);
//! assert_eq!(vocab.token_to_id(&"a".to_string()), 1);
//! assert_eq!(vocab.token_to_id(&"z".to_string()), 4);
//! assert_eq!(vocab.id_to_token(99), None);
//! ```
pub mod embed;
pub mod io;
pub mod token_embedding;
pub mod vocabulary;
pub mod vocabulary_options;

#[doc(inline)]
pub use embed::{IdToToken, TokenToId};
#[doc(inline)]
pub use token_embedding::TokenEmbedding;
#[doc(inline)]
pub use vocabulary::Vocabulary;
#[doc(inline)]
pub use vocabulary_options::VocabularyOptions;
