//! # Shape-Preserving Maps
//!
//! Every function here accepts anything convertible into a [`LazyNested`]
//! (a [`Nested`], a [`LazyNested`] or a [`Container`]), builds the result
//! lazily, and materializes it only when `lazy == false`.
//!
//! Mapping functions are taken by value and cloned once per visited node;
//! pass a reference (`&f`) when the closure is expensive to clone.

use crate::nested::{Container, LazyNested, Nested, NodeIter};

/// Apply `f` to every leaf, preserving shape.
///
/// A leaf input maps to the leaf `f(x)`, not wrapped in a node.
pub fn map_elements<'a, T, U, F>(
    data: impl Into<LazyNested<'a, T>>,
    f: F,
    lazy: bool,
) -> Container<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(T) -> U + Clone + 'a,
{
    lazy_map_elements(data.into(), f).into_container(lazy)
}

fn lazy_map_elements<'a, T, U, F>(
    data: LazyNested<'a, T>,
    f: F,
) -> LazyNested<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(T) -> U + Clone + 'a,
{
    match data {
        LazyNested::Leaf(value) => LazyNested::Leaf(f(value)),
        LazyNested::Node(children) => {
            LazyNested::node(children.map(move |child| lazy_map_elements(child, f.clone())))
        }
    }
}

/// Replace every leaf with the container `f` produces for it.
///
/// Unlike [`map_elements`] this may deepen the shape: a `text -> [token]`
/// tokenizer turns a sequence of texts into a sequence of token sequences.
pub fn expand_elements<'a, T, U, F>(
    data: impl Into<LazyNested<'a, T>>,
    f: F,
    lazy: bool,
) -> Container<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(T) -> Nested<U> + Clone + 'a,
{
    lazy_expand_elements(data.into(), f).into_container(lazy)
}

fn lazy_expand_elements<'a, T, U, F>(
    data: LazyNested<'a, T>,
    f: F,
) -> LazyNested<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(T) -> Nested<U> + Clone + 'a,
{
    match data {
        LazyNested::Leaf(value) => f(value).into(),
        LazyNested::Node(children) => {
            LazyNested::node(children.map(move |child| lazy_expand_elements(child, f.clone())))
        }
    }
}

/// Bottom-up node map.
///
/// `g` receives each node's already-mapped children and returns the
/// children of the replacement node. Leaves pass through untouched.
pub fn map_container<'a, T, G>(
    data: impl Into<LazyNested<'a, T>>,
    g: G,
    lazy: bool,
) -> Container<'a, T>
where
    T: 'a,
    G: Fn(NodeIter<'a, T>) -> NodeIter<'a, T> + Clone + 'a,
{
    lazy_map_container(data.into(), g).into_container(lazy)
}

fn lazy_map_container<'a, T, G>(
    data: LazyNested<'a, T>,
    g: G,
) -> LazyNested<'a, T>
where
    T: 'a,
    G: Fn(NodeIter<'a, T>) -> NodeIter<'a, T> + Clone + 'a,
{
    match data {
        LazyNested::Leaf(value) => LazyNested::Leaf(value),
        LazyNested::Node(children) => {
            let inner = g.clone();
            let mapped: NodeIter<'a, T> =
                Box::new(children.map(move |child| lazy_map_container(child, inner.clone())));
            LazyNested::Node(g(mapped))
        }
    }
}

/// Apply `f` to each last dimension as a whole.
///
/// A node whose children are all leaves (including an empty node) is
/// replaced by `f(leaves)`. A node with any non-leaf child recurses into
/// those children; its leaf children pass through unchanged, as does a
/// bare leaf input.
///
/// Each node is buffered to decide which case applies.
pub fn map_last_dimension<'a, T, F>(
    data: impl Into<LazyNested<'a, T>>,
    f: F,
    lazy: bool,
) -> Container<'a, T>
where
    T: 'a,
    F: Fn(Vec<T>) -> Nested<T> + Clone + 'a,
{
    lazy_map_last_dimension(data.into(), f).into_container(lazy)
}

fn lazy_map_last_dimension<'a, T, F>(
    data: LazyNested<'a, T>,
    f: F,
) -> LazyNested<'a, T>
where
    T: 'a,
    F: Fn(Vec<T>) -> Nested<T> + Clone + 'a,
{
    let children: Vec<LazyNested<'a, T>> = match data {
        LazyNested::Leaf(value) => return LazyNested::Leaf(value),
        LazyNested::Node(children) => children.collect(),
    };

    if children.iter().all(LazyNested::is_leaf) {
        let leaves = children
            .into_iter()
            .filter_map(LazyNested::into_leaf)
            .collect();
        f(leaves).into()
    } else {
        LazyNested::node(
            children
                .into_iter()
                .map(move |child| lazy_map_last_dimension(child, f.clone())),
        )
    }
}
