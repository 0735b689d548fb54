//! The positioned view adapter.
//!
//! `PositionedView<C>` stores nothing but `C`, and every traversal operation
//! forwards to `C`. The one difference is the element type: where `C` yields
//! `e` at position `p`, the view yields `(p, e)`.

use crate::{
    BidirectionalCollection, Collection, PositionError, RandomAccessCollection, iter::Iter,
};

/// A collection of `(position, element)` pairs over a base collection.
///
/// Created by [`Collection::positioned`]. The view has the traversal
/// capability of its base, and is `Clone`, `Copy`, `Eq`, `Hash`, ... exactly
/// when its base is.
///
/// ```
/// use positioned::{BidirectionalCollection, Collection};
///
/// let view = vec!['x', 'y', 'z'].positioned();
/// let last = view.position_before(&view.end_position());
/// assert_eq!(view.element_at(&last), (2, &'z'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PositionedView<C> {
    base: C,
}

static_assertions::assert_eq_size!(PositionedView<alloc::vec::Vec<u8>>, alloc::vec::Vec<u8>);
static_assertions::assert_eq_size!(PositionedView<&[u8]>, &[u8]);

impl<C> PositionedView<C> {
    pub(crate) fn new(base: C) -> Self {
        PositionedView { base }
    }

    /// The wrapped collection.
    pub fn base(&self) -> &C {
        &self.base
    }

    /// Unwraps the view, returning the wrapped collection.
    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: Collection> Collection for PositionedView<C> {
    type Position = C::Position;
    type Element<'a>
        = (C::Position, C::Element<'a>)
    where
        Self: 'a;

    #[inline]
    fn start_position(&self) -> Self::Position {
        self.base.start_position()
    }

    #[inline]
    fn end_position(&self) -> Self::Position {
        self.base.end_position()
    }

    #[inline]
    fn try_element_at(
        &self,
        position: &Self::Position,
    ) -> Result<Self::Element<'_>, PositionError> {
        let element = self.base.try_element_at(position)?;
        Ok((position.clone(), element))
    }

    #[inline]
    fn position_after(&self, position: &Self::Position) -> Self::Position {
        self.base.position_after(position)
    }

    #[inline]
    fn element_at(&self, position: &Self::Position) -> Self::Element<'_> {
        (position.clone(), self.base.element_at(position))
    }

    #[inline]
    fn try_offset(
        &self,
        position: &Self::Position,
        distance: isize,
    ) -> Result<Self::Position, PositionError> {
        self.base.try_offset(position, distance)
    }

    #[inline]
    fn offset(&self, position: &Self::Position, distance: isize) -> Self::Position {
        self.base.offset(position, distance)
    }

    #[inline]
    fn offset_limited(
        &self,
        position: &Self::Position,
        distance: isize,
        limit: &Self::Position,
    ) -> Option<Self::Position> {
        self.base.offset_limited(position, distance, limit)
    }

    #[inline]
    fn distance(&self, start: &Self::Position, end: &Self::Position) -> isize {
        self.base.distance(start, end)
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.base.element_count()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    #[inline]
    fn count_between(&self, start: &Self::Position, end: &Self::Position) -> Option<usize> {
        self.base.count_between(start, end)
    }
}

impl<C: BidirectionalCollection> BidirectionalCollection for PositionedView<C> {
    #[inline]
    fn position_before(&self, position: &Self::Position) -> Self::Position {
        self.base.position_before(position)
    }
}

impl<C: RandomAccessCollection> RandomAccessCollection for PositionedView<C> {}

impl<'a, C: Collection> IntoIterator for &'a PositionedView<C> {
    type Item = (C::Position, C::Element<'a>);
    type IntoIter = Iter<'a, PositionedView<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}
