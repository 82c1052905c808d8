//! # Vocabulary IO
//!
//! The token-list format is plain text: one token per line, in id order,
//! no header and no escaping. Tokens containing line breaks cannot be
//! represented.
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use kotoba::vocab::{TokenEmbedding, Vocabulary, VocabularyOptions};
//!
//! fn example() -> kotoba::errors::KResult<Vocabulary> {
//!     let options = VocabularyOptions::default()
//!         .with_special_tokens(["<PAD>".to_string(), "<UNK>".to_string()])
//!         .with_unk_index(1);
//!
//!     let vocab = Vocabulary::load_with_options("vocab.txt", &options)?;
//!     assert_eq!(vocab.unk_id(), 1);
//!     Ok(vocab)
//! }
//! ```

mod glove_io;
mod token_list_io;

#[doc(inline)]
pub use glove_io::*;
#[doc(inline)]
pub use token_list_io::*;
