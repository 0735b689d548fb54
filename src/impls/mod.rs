//! [`Collection`](crate::Collection) implementations for the standard
//! containers.

mod contiguous;
mod hash;
mod range;
mod text;
mod tree;

pub use hash::IterPosition;
pub use tree::KeyPosition;
