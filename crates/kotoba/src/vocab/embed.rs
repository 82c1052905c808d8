//! # Embedding Steps
//!
//! [`Preprocessor`] steps that map every leaf through a [`TokenEmbedding`].

use std::{marker::PhantomData, sync::Arc};

use crate::{
    nested::{Container, map_elements},
    preprocess::Preprocessor,
    types::{TokenId, TokenKey},
    vocab::TokenEmbedding,
};

/// Map token leaves to ids; unknown tokens become the unknown id.
pub struct TokenToId<K, E> {
    embedding: Arc<E>,
    _token: PhantomData<fn(K)>,
}

impl<K, E> TokenToId<K, E>
where
    K: TokenKey,
    E: TokenEmbedding<K>,
{
    /// Wrap a shared embedding.
    pub fn new(embedding: Arc<E>) -> Self {
        Self {
            embedding,
            _token: PhantomData,
        }
    }

    /// Get the embedding.
    pub fn embedding(&self) -> &Arc<E> {
        &self.embedding
    }
}

impl<K, E> Preprocessor<K, TokenId> for TokenToId<K, E>
where
    K: TokenKey,
    E: TokenEmbedding<K>,
{
    fn transform<'a>(
        &'a self,
        data: Container<'a, K>,
        lazy: bool,
    ) -> Container<'a, TokenId>
    where
        K: 'a,
        TokenId: 'a,
    {
        let embedding: &'a E = &self.embedding;
        map_elements(data, move |token: K| embedding.token_to_id(&token), lazy)
    }
}

/// Map id leaves to tokens.
///
/// Out-of-range ids become the unknown token, or `None` when the
/// embedding has none.
pub struct IdToToken<K, E> {
    embedding: Arc<E>,
    _token: PhantomData<fn() -> K>,
}

impl<K, E> IdToToken<K, E>
where
    K: TokenKey,
    E: TokenEmbedding<K>,
{
    /// Wrap a shared embedding.
    pub fn new(embedding: Arc<E>) -> Self {
        Self {
            embedding,
            _token: PhantomData,
        }
    }

    /// Get the embedding.
    pub fn embedding(&self) -> &Arc<E> {
        &self.embedding
    }
}

impl<K, E> Preprocessor<TokenId, Option<K>> for IdToToken<K, E>
where
    K: TokenKey,
    E: TokenEmbedding<K>,
{
    fn transform<'a>(
        &'a self,
        data: Container<'a, TokenId>,
        lazy: bool,
    ) -> Container<'a, Option<K>>
    where
        TokenId: 'a,
        Option<K>: 'a,
    {
        let embedding: &'a E = &self.embedding;
        map_elements(data, move |id: TokenId| embedding.id_to_token(id).cloned(), lazy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        nested,
        nested::Nested,
        preprocess::{LowerCase, Pipeline, PreprocessorExt, RegexTokenizer},
        vocab::Vocabulary,
    };

    fn sample_vocab() -> Arc<Vocabulary> {
        let tokens: Nested<String> = Nested::from_leaves(
            ["the", "cat", "sat"].iter().map(|s| s.to_string()),
        );
        Arc::new(
            Vocabulary::build(tokens, ["<PAD>".to_string(), "<UNK>".to_string()], Some(1))
                .unwrap(),
        )
    }

    #[test]
    fn test_token_to_id() {
        let step: TokenToId<String, Vocabulary> = TokenToId::new(sample_vocab());
        let data: Nested<String> = Nested::node([
            Nested::from_leaves(["the".to_string(), "dog".to_string()]),
            Nested::from_leaves(["sat".to_string()]),
        ]);

        let out = step.transform(Container::from(data), false);
        assert_eq!(out.materialize(), nested!([[2, 1], [4]]));
    }

    #[test]
    fn test_id_to_token() {
        let step: IdToToken<String, Vocabulary> = IdToToken::new(sample_vocab());
        let ids: Nested<TokenId> = nested!([3, (-1), 99]);
        let out = step.transform(Container::from(ids), true);
        assert!(out.is_lazy());
        assert_eq!(
            out.materialize(),
            Nested::from_leaves([
                Some("cat".to_string()),
                Some("<UNK>".to_string()),
                Some("<UNK>".to_string()),
            ])
        );
    }

    #[test]
    fn test_id_to_token_without_unk() {
        let vocab: Arc<Vocabulary<&str>> =
            Arc::new(Vocabulary::build(nested!(["a"]), [], None).unwrap());
        let step: IdToToken<&str, Vocabulary<&str>> = IdToToken::new(vocab);
        let ids: Nested<TokenId> = nested!([0, 1, (-1)]);
        let out = step.transform(Container::from(ids), false);
        assert_eq!(out.materialize(), nested!([(Some("a")), None, None]));
    }

    #[test]
    fn test_text_to_ids() {
        let vocab = sample_vocab();
        let text_pipeline = Pipeline::new()
            .with_step(LowerCase)
            .with_step(RegexTokenizer::word_punct().unwrap());
        let to_ids: TokenToId<String, Vocabulary> = TokenToId::new(vocab.clone());
        let step = text_pipeline.then(to_ids);

        let data = Nested::from_leaves(["The cat".to_string(), "the bird sat".to_string()]);
        let ids: Nested<TokenId> = step.transform(Container::from(data), false).materialize();
        assert_eq!(ids, nested!([[2, 3], [2, 1, 4]]));

        let to_tokens: IdToToken<String, Vocabulary> = IdToToken::new(vocab);
        let tokens = to_tokens.transform(Container::from(ids), false).materialize();
        assert_eq!(
            tokens,
            Nested::node([
                Nested::from_leaves([Some("the".to_string()), Some("cat".to_string())]),
                Nested::from_leaves([
                    Some("the".to_string()),
                    Some("<UNK>".to_string()),
                    Some("sat".to_string()),
                ]),
            ])
        );
    }
}
