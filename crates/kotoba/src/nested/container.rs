//! # Nested Containers
//!
//! A nested container is either a leaf value or an ordered sequence of
//! nested containers. It comes in two modes:
//!
//! * [`Nested`] - fully materialized; repeatably iterable and [`Clone`].
//! * [`LazyNested`] - a tree of boxed iterators; single-pass.
//!
//! [`Container`] carries either, and is what a
//! [`Preprocessor`](crate::preprocess::Preprocessor) consumes and produces.
//!
//! Consuming a [`LazyNested`] moves it, so a lazy result cannot be
//! read twice; materialize it first if it must be.

use core::fmt::{self, Debug};

/// A boxed, single-pass iterator over the children of a lazy node.
pub type NodeIter<'a, T> = Box<dyn Iterator<Item = LazyNested<'a, T>> + 'a>;

/// A fully materialized nested container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// An atomic value; never traversed further.
    Leaf(T),

    /// An ordered sequence of containers.
    Node(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Build a leaf.
    pub fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Build a node from child containers.
    pub fn node<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Nested<T>>,
    {
        Self::Node(children.into_iter().collect())
    }

    /// Build a flat node whose children are all leaves.
    pub fn from_leaves<I>(leaves: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::Node(leaves.into_iter().map(Self::Leaf).collect())
    }

    /// Is this a leaf?
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Get the leaf value, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    /// Get the children, if this is a node.
    pub fn children(&self) -> Option<&[Nested<T>]> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(children) => Some(children),
        }
    }

    /// Convert into a single-pass [`LazyNested`].
    pub fn into_lazy<'a>(self) -> LazyNested<'a, T>
    where
        T: 'a,
    {
        self.into()
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        Self::Node(children)
    }
}

/// A single-pass nested container.
///
/// Node children are produced on demand, on first consumption.
pub enum LazyNested<'a, T> {
    /// An atomic value; never traversed further.
    Leaf(T),

    /// A lazily produced sequence of containers.
    Node(NodeIter<'a, T>),
}

impl<T: Debug> Debug for LazyNested<'_, T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Leaf(value) => f.debug_tuple("Leaf").field(value).finish(),
            Self::Node(_) => f.write_str("Node(..)"),
        }
    }
}

impl<'a, T: 'a> LazyNested<'a, T> {
    /// Build a leaf.
    pub fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Build a lazy node over the given children.
    pub fn node<I>(children: I) -> Self
    where
        I: IntoIterator<Item = LazyNested<'a, T>>,
        I::IntoIter: 'a,
    {
        Self::Node(Box::new(children.into_iter()))
    }

    /// Is this a leaf?
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Take the leaf value, if this is a leaf.
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    /// Take the top-level children.
    ///
    /// A leaf is treated as a one-element sequence.
    pub fn into_children(self) -> NodeIter<'a, T> {
        match self {
            Self::Leaf(value) => Box::new(core::iter::once(Self::Leaf(value))),
            Self::Node(children) => children,
        }
    }

    /// Bottom-up fold.
    ///
    /// `leaf` is applied to every leaf; `node` is applied to every node,
    /// receiving the already-folded children as a lazy iterator.
    pub fn fold<R, L, N>(
        self,
        leaf: &L,
        node: &N,
    ) -> R
    where
        L: Fn(T) -> R,
        N: Fn(&mut dyn Iterator<Item = R>) -> R,
    {
        match self {
            Self::Leaf(value) => leaf(value),
            Self::Node(children) => {
                let mut folded = children.map(|child| child.fold(leaf, node));
                node(&mut folded)
            }
        }
    }

    /// Consume and fully materialize.
    pub fn materialize(self) -> Nested<T> {
        self.fold(&Nested::Leaf, &|children: &mut dyn Iterator<Item = Nested<T>>| {
            Nested::Node(children.collect())
        })
    }

    /// Wrap in a [`Container`] of the requested mode.
    pub fn into_container(
        self,
        lazy: bool,
    ) -> Container<'a, T> {
        if lazy {
            Container::Lazy(self)
        } else {
            Container::Materialized(self.materialize())
        }
    }
}

impl<'a, T: 'a> From<Nested<T>> for LazyNested<'a, T> {
    fn from(data: Nested<T>) -> Self {
        match data {
            Nested::Leaf(value) => Self::Leaf(value),
            Nested::Node(children) => Self::node(children.into_iter().map(Self::from)),
        }
    }
}

/// A nested container in either result mode.
#[derive(Debug)]
pub enum Container<'a, T> {
    /// Single-pass, deferred.
    Lazy(LazyNested<'a, T>),

    /// Fully realized.
    Materialized(Nested<T>),
}

impl<'a, T: 'a> Container<'a, T> {
    /// Is this the lazy mode?
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Is the top-level value a leaf?
    pub fn is_leaf(&self) -> bool {
        match self {
            Self::Lazy(data) => data.is_leaf(),
            Self::Materialized(data) => data.is_leaf(),
        }
    }

    /// View as a [`LazyNested`].
    pub fn into_lazy(self) -> LazyNested<'a, T> {
        match self {
            Self::Lazy(data) => data,
            Self::Materialized(data) => data.into(),
        }
    }

    /// Fully materialize.
    pub fn materialize(self) -> Nested<T> {
        match self {
            Self::Lazy(data) => data.materialize(),
            Self::Materialized(data) => data,
        }
    }

    /// Convert to the requested mode; a no-op when already there.
    pub fn into_mode(
        self,
        lazy: bool,
    ) -> Self {
        match (self, lazy) {
            (Self::Materialized(data), true) => Self::Lazy(data.into()),
            (Self::Lazy(data), false) => Self::Materialized(data.materialize()),
            (data, _) => data,
        }
    }
}

impl<'a, T: 'a> From<Nested<T>> for Container<'a, T> {
    fn from(data: Nested<T>) -> Self {
        Self::Materialized(data)
    }
}

impl<'a, T: 'a> From<LazyNested<'a, T>> for Container<'a, T> {
    fn from(data: LazyNested<'a, T>) -> Self {
        Self::Lazy(data)
    }
}

impl<'a, T: 'a> From<Container<'a, T>> for LazyNested<'a, T> {
    fn from(data: Container<'a, T>) -> Self {
        data.into_lazy()
    }
}

/// Build a [`Nested`] literal.
///
/// Bracketed groups become nodes; anything else becomes a leaf.
/// Leaves must be a single token tree, so wrap compound expressions
/// in parentheses.
///
/// ```rust
/// use kotoba::{nested, nested::Nested};
///
/// let data: Nested<i32> = nested!([1, [2, 3], [], (-4)]);
/// assert_eq!(
///     data,
///     Nested::Node(vec![
///         Nested::Leaf(1),
///         Nested::from_leaves([2, 3]),
///         Nested::Node(vec![]),
///         Nested::Leaf(-4),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! nested {
    ([$($child:tt),* $(,)?]) => {
        $crate::nested::Nested::Node(vec![$($crate::nested!($child)),*])
    };
    ($leaf:expr) => {{
        #[allow(unused_parens)]
        let leaf = $leaf;
        $crate::nested::Nested::Leaf(leaf)
    }};
}
