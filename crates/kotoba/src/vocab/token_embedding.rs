//! # Token Embedding Trait

use core::hash::Hash;

use crate::{
    errors::{KResult, KotobaError},
    nested::{LazyNested, flatten},
    types::{KHashSet, TokenId, TokenKey},
};

/// A total token <-> id mapping.
///
/// Lookups never fail: out-of-vocabulary tokens map to [`Self::unk_id`],
/// and out-of-range ids map to the unknown token, if any.
pub trait TokenEmbedding<K: TokenKey> {
    /// The number of known tokens; ids `0..token_size()` are dense.
    fn token_size(&self) -> usize;

    /// The id returned for unknown tokens.
    fn unk_id(&self) -> TokenId;

    /// Is `token` in the vocabulary?
    fn contains(
        &self,
        token: &K,
    ) -> bool;

    /// Look up the id of a token; [`Self::unk_id`] when absent.
    fn token_to_id(
        &self,
        token: &K,
    ) -> TokenId;

    /// Look up the token for an id.
    ///
    /// Negative and out-of-range ids resolve to the unknown token,
    /// or `None` when no unknown token is configured.
    fn id_to_token(
        &self,
        id: TokenId,
    ) -> Option<&K>;

    /// The fraction of distinct tokens in `tokens` that are known.
    ///
    /// ## Errors
    /// [`KotobaError::EmptyCoverageSet`] when `tokens` has no leaves.
    fn token_coverage<'a>(
        &self,
        tokens: impl Into<LazyNested<'a, K>>,
    ) -> KResult<f64>
    where
        K: 'a,
    {
        coverage_ratio(flatten(tokens), |token| self.contains(token))
    }

    /// The fraction of distinct ids in `ids` that are in `0..token_size()`.
    ///
    /// ## Errors
    /// [`KotobaError::EmptyCoverageSet`] when `ids` has no leaves.
    fn id_coverage<'a>(
        &self,
        ids: impl Into<LazyNested<'a, TokenId>>,
    ) -> KResult<f64> {
        let size = self.token_size();
        coverage_ratio(flatten(ids), |&id| {
            usize::try_from(id).is_ok_and(|index| index < size)
        })
    }
}

/// `|distinct(target) ∩ base| / |distinct(target)|`, with `base` given as
/// a membership test.
pub fn coverage_ratio<V, I, C>(
    target: I,
    is_member: C,
) -> KResult<f64>
where
    V: Hash + Eq,
    I: IntoIterator<Item = V>,
    C: Fn(&V) -> bool,
{
    let target: KHashSet<V> = target.into_iter().collect();
    if target.is_empty() {
        return Err(KotobaError::EmptyCoverageSet);
    }
    let common = target.iter().filter(|value| is_member(value)).count();
    Ok(common as f64 / target.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_ratio() {
        let ratio = coverage_ratio(["a", "b", "a", "z"], |v| *v != "z").unwrap();
        assert!((ratio - 2.0 / 3.0).abs() < 1e-12);

        assert!(matches!(
            coverage_ratio(Vec::<&str>::new(), |_| true),
            Err(KotobaError::EmptyCoverageSet)
        ));
    }
}
