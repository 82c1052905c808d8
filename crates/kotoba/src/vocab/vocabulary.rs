//! # Vocabulary

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    errors::{KResult, KotobaError},
    nested::{LazyNested, Nested, flatten, uniquify},
    types::{KHashMap, TokenId, TokenKey, hash_map_with_capacity},
    vocab::{
        TokenEmbedding,
        VocabularyOptions,
        io::{read_glove_tokens, read_token_list, save_token_list_path, write_token_list},
    },
};

fn index_to_id(index: usize) -> TokenId {
    index as TokenId
}

/// An immutable, bidirectional token <-> id mapping.
///
/// Ids are dense in `0..token_size()`, assigned in first-occurrence order
/// after the special tokens. Built once by [`Vocabulary::build`].
#[derive(Debug, Clone)]
pub struct Vocabulary<K = String> {
    index_to_token: Vec<K>,
    token_to_index: KHashMap<K, usize>,
    unk_id: TokenId,
    unk_token: Option<K>,
}

impl<K: TokenKey> PartialEq for Vocabulary<K> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.index_to_token == other.index_to_token
            && self.unk_id == other.unk_id
            && self.unk_token == other.unk_token
    }
}

impl<K: TokenKey> Vocabulary<K> {
    /// Build a vocabulary.
    ///
    /// `token_sources` is flattened and deduplicated in first-occurrence
    /// order. `special_tokens` (deduplicated the same way) take ids
    /// `0..k`; a later occurrence of a special token in the sources is
    /// dropped as a duplicate.
    ///
    /// ## Arguments
    /// * `token_sources` - a (possibly nested) container of tokens.
    /// * `special_tokens` - reserved tokens, in id order.
    /// * `unk_index` - index into `special_tokens` of the unknown token.
    ///
    /// ## Errors
    /// [`KotobaError::UnknownIndexOutOfRange`] when `unk_index` does not
    /// name a supplied special token.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn build<'a, S, P>(
        token_sources: S,
        special_tokens: P,
        unk_index: Option<usize>,
    ) -> KResult<Self>
    where
        K: 'a,
        S: Into<LazyNested<'a, K>>,
        P: IntoIterator<Item = K>,
    {
        let special_tokens: Vec<K> = special_tokens.into_iter().collect();
        let special_count = special_tokens.len();

        let unk_token = match unk_index {
            Some(index) => Some(special_tokens.get(index).cloned().ok_or(
                KotobaError::UnknownIndexOutOfRange {
                    index,
                    len: special_count,
                },
            )?),
            None => None,
        };

        let index_to_token: Vec<K> =
            uniquify(special_tokens.into_iter().chain(flatten(token_sources))).collect();

        let mut token_to_index = hash_map_with_capacity(index_to_token.len());
        for (index, token) in index_to_token.iter().enumerate() {
            token_to_index.insert(token.clone(), index);
        }

        let unk_id = unk_token
            .as_ref()
            .and_then(|token| token_to_index.get(token))
            .map(|&index| index_to_id(index))
            .unwrap_or_else(|| index_to_id(index_to_token.len() + 1));

        log::debug!(
            "built vocabulary: {} tokens ({} special), unk id {}",
            index_to_token.len(),
            special_count,
            unk_id
        );

        Ok(Self {
            index_to_token,
            token_to_index,
            unk_id,
            unk_token,
        })
    }

    /// Build a vocabulary from [`VocabularyOptions`].
    ///
    /// See [`Vocabulary::build`].
    pub fn build_with_options<'a, S>(
        token_sources: S,
        options: &VocabularyOptions<K>,
    ) -> KResult<Self>
    where
        K: 'a,
        S: Into<LazyNested<'a, K>>,
    {
        Self::build(
            token_sources,
            options.special_tokens().iter().cloned(),
            options.unk_index(),
        )
    }

    /// The tokens, in id order.
    pub fn index_to_token(&self) -> &[K] {
        &self.index_to_token
    }

    /// The unknown token, if one was configured.
    pub fn unk_token(&self) -> Option<&K> {
        self.unk_token.as_ref()
    }

    /// Iterate over `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &K)> {
        self.index_to_token
            .iter()
            .enumerate()
            .map(|(index, token)| (index_to_id(index), token))
    }
}

impl<K: TokenKey> TokenEmbedding<K> for Vocabulary<K> {
    fn token_size(&self) -> usize {
        self.index_to_token.len()
    }

    fn unk_id(&self) -> TokenId {
        self.unk_id
    }

    fn contains(
        &self,
        token: &K,
    ) -> bool {
        self.token_to_index.contains_key(token)
    }

    fn token_to_id(
        &self,
        token: &K,
    ) -> TokenId {
        self.token_to_index
            .get(token)
            .map_or(self.unk_id, |&index| index_to_id(index))
    }

    fn id_to_token(
        &self,
        id: TokenId,
    ) -> Option<&K> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.index_to_token.get(index))
            .or(self.unk_token.as_ref())
    }
}

impl<K: TokenKey + AsRef<str>> Vocabulary<K> {
    /// Export the tokens, one per line in id order, to a file.
    ///
    /// Missing parent directories are created first.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, path)))]
    pub fn export_token_list<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> KResult<()> {
        let path = path.as_ref();
        save_token_list_path(&self.index_to_token, path)?;
        log::info!(
            "exported {} tokens to {}",
            self.index_to_token.len(),
            path.display()
        );
        Ok(())
    }

    /// Write the tokens, one per line in id order, to a writer.
    pub fn write_token_list<W: Write>(
        &self,
        writer: &mut W,
    ) -> KResult<()> {
        write_token_list(&self.index_to_token, writer)
    }
}

impl Vocabulary<String> {
    /// Load a vocabulary exported by [`Vocabulary::export_token_list`].
    ///
    /// No special tokens are added, so the id assignment is reproduced
    /// exactly.
    pub fn load<P: AsRef<Path>>(path: P) -> KResult<Self> {
        Self::load_with_options(path, &VocabularyOptions::default())
    }

    /// Load a token list file, prepending the configured special tokens.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(path, options)))]
    pub fn load_with_options<P: AsRef<Path>>(
        path: P,
        options: &VocabularyOptions<String>,
    ) -> KResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let vocab = Self::read_with_options(reader, options)?;
        log::info!(
            "loaded {} tokens from {}",
            vocab.token_size(),
            path.display()
        );
        Ok(vocab)
    }

    /// Read a token list, prepending the configured special tokens.
    pub fn read_with_options<R: BufRead>(
        reader: R,
        options: &VocabularyOptions<String>,
    ) -> KResult<Self> {
        Self::build_with_options(Nested::from_leaves(read_token_list(reader)?), options)
    }

    /// Load the tokens of a GloVe-style embedding file.
    ///
    /// Each line is `{TOKEN} {VALUE} {VALUE} ...`; only the token is kept.
    pub fn load_glove<P: AsRef<Path>>(
        path: P,
        options: &VocabularyOptions<String>,
    ) -> KResult<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let vocab = Self::build_with_options(
            Nested::from_leaves(read_glove_tokens(reader)?),
            options,
        )?;
        log::info!(
            "loaded {} glove tokens from {}",
            vocab.token_size(),
            path.display()
        );
        Ok(vocab)
    }
}
