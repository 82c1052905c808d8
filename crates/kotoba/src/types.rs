//! # Common Types and Traits
use core::{fmt::Debug, hash::Hash};

/// Integer id assigned to a token.
///
/// Signed, so that negative ids can be handed to
/// [`TokenEmbedding::id_to_token`](crate::vocab::TokenEmbedding::id_to_token)
/// and resolved to the unknown token rather than rejected.
pub type TokenId = i64;

/// A type that can be used as a vocabulary token.
pub trait TokenKey: Hash + Eq + Clone + Debug {}

impl<K> TokenKey for K where K: Hash + Eq + Clone + Debug {}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type KHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type KHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> KHashMap<K, V> {
            KHashMap::with_capacity(capacity)
        }

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> KHashSet<V> {
            KHashSet::new()
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type KHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type KHashSet<V> = foldhash::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> KHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> KHashSet<V> {
            foldhash::HashSetExt::new()
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type KHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type KHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> KHashMap<K, V> {
            KHashMap::with_capacity(capacity)
        }

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> KHashSet<V> {
            KHashSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_token_keys() {
        fn is_key<K: TokenKey>() {}

        is_key::<String>();
        is_key::<&'static str>();
        is_key::<TokenId>();
        is_key::<Vec<u8>>();
    }

    #[test]
    fn test_hash_constructors() {
        let mut map: KHashMap<&str, usize> = hash_map_with_capacity(4);
        map.insert("a", 1);
        assert_eq!(map.get("a"), Some(&1));

        let mut set: KHashSet<&str> = hash_set_new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
    }
}
