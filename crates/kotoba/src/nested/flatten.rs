//! # Flatten

use crate::nested::{LazyNested, NodeIter};

/// Depth-first, left-to-right iterator over the leaves of a container.
///
/// Built by [`flatten`]. Works over infinite nodes, since children are
/// only pulled when the next leaf is requested.
pub struct Flatten<'a, T> {
    head: Option<T>,
    stack: Vec<NodeIter<'a, T>>,
}

impl<T> Iterator for Flatten<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if let Some(value) = self.head.take() {
            return Some(value);
        }

        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(LazyNested::Leaf(value)) => return Some(value),
                Some(LazyNested::Node(children)) => self.stack.push(children),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Collapse all nesting into one flat, lazy sequence of leaves.
///
/// A leaf input yields a single-element sequence.
pub fn flatten<'a, T: 'a>(data: impl Into<LazyNested<'a, T>>) -> Flatten<'a, T> {
    match data.into() {
        LazyNested::Leaf(value) => Flatten {
            head: Some(value),
            stack: Vec::new(),
        },
        LazyNested::Node(children) => Flatten {
            head: None,
            stack: vec![children],
        },
    }
}
