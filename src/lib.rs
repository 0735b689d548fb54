//! Positioned views over ordered collections.
//!
//! # Overview
//!
//! [`PositionedView`] wraps a collection and yields `(position, element)` pairs
//! instead of bare elements. Positions are the wrapped collection's own
//! positions, untouched, so a view never drifts from its base: every traversal
//! operation is a direct delegation.
//!
//! The view supports exactly the traversal capability of what it wraps:
//!
//! | Base implements | View implements |
//! |-----------------|-----------------|
//! | [`Collection`] | [`Collection`] |
//! | [`BidirectionalCollection`] | [`BidirectionalCollection`] |
//! | [`RandomAccessCollection`] | [`RandomAccessCollection`] |
//!
//! # Quick Start
//!
//! ```
//! use positioned::Collection;
//!
//! let view = ["a", "b", "c"].positioned();
//! let pairs: Vec<_> = view.elements().collect();
//! assert_eq!(pairs, [(0, &"a"), (1, &"b"), (2, &"c")]);
//! ```
//!
//! Positions are not always integers. Strings use byte offsets, so the view
//! pairs each `char` with where it starts:
//!
//! ```
//! use positioned::Collection;
//!
//! let view = "héllo".positioned();
//! let starts: Vec<usize> = view.elements().map(|(at, _)| at).collect();
//! assert_eq!(starts, [0, 1, 3, 4, 5]);
//! ```
//!
//! # Misuse
//!
//! Invalid positions and out-of-range offsets panic, the same way slice
//! indexing does. The `try_` variants ([`Collection::try_element_at`],
//! [`Collection::try_offset`]) report a [`PositionError`] instead.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

mod collection;
mod error;
mod impls;
mod iter;
mod macros;
mod view;
pub mod walk;

pub use collection::{BidirectionalCollection, Collection, RandomAccessCollection};
pub use error::PositionError;
pub use impls::{IterPosition, KeyPosition};
pub use iter::Iter;
pub use view::PositionedView;
