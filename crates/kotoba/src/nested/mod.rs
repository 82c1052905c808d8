//! # Nested Containers and Shape-Polymorphic Maps
//!
//! Every traversal here works the same on a leaf, a flat sequence, or an
//! arbitrarily deep nesting of sequences.
//!
//! * [`Nested`], [`LazyNested`], [`Container`] - the container types.
//! * [`flatten`] - all leaves, depth-first.
//! * [`uniquify`] - order-preserving deduplication.
//! * [`map_elements`], [`expand_elements`] - leaf-wise maps.
//! * [`map_container`] - node-wise maps.
//! * [`map_last_dimension`] - innermost-sequence maps.
//! * [`batch`], [`transpose_2d`] - top-level regrouping.
//!
//! ## Example
//!
//! ```rust
//! use kotoba::{nested, nested::{Nested, map_elements, flatten}};
//!
//! let data: Nested<&str> = nested!([["The", "Cat"], ["Sat"]]);
//! let lower = map_elements(data, str::to_lowercase, false).materialize();
//!
//! assert_eq!(
//!     flatten(lower).collect::<Vec<_>>(),
//!     vec!["the", "cat", "sat"]
//! );
//! ```

pub mod batching;
pub mod container;
pub mod flatten;
pub mod mapping;
pub mod uniquify;

#[doc(inline)]
pub use batching::{batch, batch_nonzero, transpose_2d, try_batch_size};
#[doc(inline)]
pub use container::{Container, LazyNested, Nested, NodeIter};
#[doc(inline)]
pub use flatten::{Flatten, flatten};
#[doc(inline)]
pub use mapping::{expand_elements, map_container, map_elements, map_last_dimension};
#[doc(inline)]
pub use uniquify::{Uniquify, uniquify};
