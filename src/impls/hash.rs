//! Hash sets as forward-only collections.
//!
//! Hash sets have no stable positional API, so a position is the element's
//! ordinal in iteration order together with the iterator state that reaches
//! it. Advancing and reading are constant time; there is no way back.
//! Positions borrow the set, so the implementations are on `&HashSet`.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::PositionError;

/// Position in a collection that can only be traversed by iteration.
///
/// Two positions are equal when they have the same ordinal. The end position
/// has ordinal `len` and no iteration state.
pub struct IterPosition<I> {
    ordinal: usize,
    rest: Option<I>,
}

impl<I> IterPosition<I> {
    /// How many steps from the start this position is.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    fn end(len: usize) -> Self {
        IterPosition {
            ordinal: len,
            rest: None,
        }
    }
}

impl<I: Iterator + Clone> IterPosition<I> {
    fn start(iter: I) -> Self {
        IterPosition {
            ordinal: 0,
            rest: Some(iter),
        }
    }

    fn element(&self, len: usize) -> Result<I::Item, PositionError> {
        match self.rest.clone().and_then(|mut rest| rest.next()) {
            Some(element) => Ok(element),
            None if self.ordinal >= len => Err(PositionError::PastEnd),
            None => Err(PositionError::Invalid),
        }
    }

    fn advanced(&self) -> Self {
        let mut rest = self.rest.clone();
        match rest.as_mut().and_then(Iterator::next) {
            Some(_) => IterPosition {
                ordinal: self.ordinal + 1,
                rest,
            },
            None => panic!("{}", PositionError::PastEnd),
        }
    }
}

// --- Manual impls: compare by ordinal, no bounds on I beyond Clone ---

impl<I: Clone> Clone for IterPosition<I> {
    fn clone(&self) -> Self {
        IterPosition {
            ordinal: self.ordinal,
            rest: self.rest.clone(),
        }
    }
}

impl<I> PartialEq for IterPosition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl<I> Eq for IterPosition<I> {}

impl<I> PartialOrd for IterPosition<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> Ord for IterPosition<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl<I> Hash for IterPosition<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal.hash(state);
    }
}

impl<I> fmt::Debug for IterPosition<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterPosition")
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

#[cfg_attr(not(any(feature = "std", feature = "hashbrown")), allow(unused_macros))]
macro_rules! hash_set_collection {
    ($set:ident, $iter:ident) => {
        impl<'s, T, S> $crate::Collection for &'s $set<T, S> {
            type Position = IterPosition<$iter<'s, T>>;
            type Element<'a>
                = &'s T
            where
                Self: 'a;

            #[inline]
            fn start_position(&self) -> Self::Position {
                let set: &'s $set<T, S> = *self;
                IterPosition::start(set.iter())
            }

            #[inline]
            fn end_position(&self) -> Self::Position {
                IterPosition::end(self.len())
            }

            #[inline]
            fn try_element_at(&self, position: &Self::Position) -> Result<&'s T, PositionError> {
                position.element(self.len())
            }

            #[inline]
            fn position_after(&self, position: &Self::Position) -> Self::Position {
                position.advanced()
            }

            fn distance(&self, start: &Self::Position, end: &Self::Position) -> isize {
                if end < start {
                    panic!("{}", PositionError::BackwardDistance);
                }
                (end.ordinal - start.ordinal) as isize
            }

            #[inline]
            fn element_count(&self) -> usize {
                self.len()
            }
        }
    };
}

#[cfg(feature = "std")]
mod std_set {
    use std::collections::{HashSet, hash_set::Iter};

    use super::IterPosition;
    use crate::PositionError;

    hash_set_collection!(HashSet, Iter);
}

#[cfg(feature = "hashbrown")]
mod hashbrown_set {
    use hashbrown::{HashSet, hash_set::Iter};

    use super::IterPosition;
    use crate::PositionError;

    hash_set_collection!(HashSet, Iter);
}
