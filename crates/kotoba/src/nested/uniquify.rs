//! # Order-Preserving Deduplication

use core::hash::Hash;

use crate::types::{KHashSet, hash_set_new};

/// Iterator adapter that yields each distinct element once,
/// in first-occurrence order.
///
/// Built by [`uniquify`].
pub struct Uniquify<I: Iterator> {
    iter: I,
    seen: KHashSet<I::Item>,
}

impl<I> Iterator for Uniquify<I>
where
    I: Iterator,
    I::Item: Hash + Eq + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Some(item);
            }
        }
    }
}

/// Deduplicate a sequence, keeping the first occurrence of each element.
pub fn uniquify<I>(iter: I) -> Uniquify<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    Uniquify {
        iter: iter.into_iter(),
        seen: hash_set_new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniquify() {
        let items = ["a", "b", "a", "c", "b"];
        assert_eq!(uniquify(items).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_uniquify_is_lazy() {
        let items = (0..).map(|i| i % 3);
        assert_eq!(uniquify(items).take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_uniquify_empty() {
        assert_eq!(uniquify(Vec::<String>::new()).count(), 0);
    }
}
