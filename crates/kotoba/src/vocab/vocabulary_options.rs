//! # Vocabulary Options
//!
//! Options for building a [`Vocabulary`](crate::vocab::Vocabulary).

/// Options for configuring a [`Vocabulary`](crate::vocab::Vocabulary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyOptions<K> {
    /// Reserved tokens, given the lowest ids in this order.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub special_tokens: Vec<K>,

    /// Index into `special_tokens` of the unknown token.
    ///
    /// When `None`, unknown tokens map to `token_size + 1` and unknown
    /// ids map to no token.
    pub unk_index: Option<usize>,
}

impl<K> Default for VocabularyOptions<K> {
    fn default() -> Self {
        Self {
            special_tokens: Vec::new(),
            unk_index: None,
        }
    }
}

impl<K> VocabularyOptions<K> {
    /// Get the special tokens.
    pub fn special_tokens(&self) -> &[K] {
        &self.special_tokens
    }

    /// Set the special tokens.
    pub fn set_special_tokens<I>(
        &mut self,
        special_tokens: I,
    ) where
        I: IntoIterator<Item = K>,
    {
        self.special_tokens = special_tokens.into_iter().collect();
    }

    /// Set the special tokens and return the options.
    pub fn with_special_tokens<I>(
        mut self,
        special_tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        self.set_special_tokens(special_tokens);
        self
    }

    /// Get the unknown-token index.
    pub fn unk_index(&self) -> Option<usize> {
        self.unk_index
    }

    /// Set the unknown-token index.
    pub fn set_unk_index<U>(
        &mut self,
        unk_index: U,
    ) where
        U: Into<Option<usize>>,
    {
        self.unk_index = unk_index.into();
    }

    /// Set the unknown-token index and return the options.
    pub fn with_unk_index<U>(
        mut self,
        unk_index: U,
    ) -> Self
    where
        U: Into<Option<usize>>,
    {
        self.set_unk_index(unk_index);
        self
    }
}
