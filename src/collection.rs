//! Traversal capability traits.
//!
//! A collection is a finite sequence of elements addressed by positions. The
//! three traits form a refinement chain:
//!
//! - [`Collection`]: move forward one position at a time.
//! - [`BidirectionalCollection`]: also move backward.
//! - [`RandomAccessCollection`]: offsets and distances take constant time.
//!
//! Only the primitives are required. Offsets, bounded offsets and distances
//! have step-by-step defaults in [`walk`](crate::walk) which containers with
//! cheaper arithmetic override.

use crate::{PositionError, iter::Iter, view::PositionedView, walk};

/// A finite, ordered sequence whose elements are addressed by positions.
///
/// Valid positions are every position reachable from
/// [`start_position`](Self::start_position) by repeated
/// [`position_after`](Self::position_after), up to and including
/// [`end_position`](Self::end_position). The end position is a sentinel and
/// never refers to an element.
pub trait Collection {
    /// Opaque location within the collection.
    ///
    /// `Ord` must agree with traversal order: a position reached by stepping
    /// forward compares greater than the one it was reached from. The default
    /// walks compare positions to pick a direction, so an order that disagrees
    /// walks off the end and panics.
    type Position: Clone + Ord;

    /// What the collection yields at a position, usually a reference into it.
    type Element<'a>
    where
        Self: 'a;

    /// The position of the first element, or the end position when empty.
    fn start_position(&self) -> Self::Position;

    /// The past-the-end position.
    fn end_position(&self) -> Self::Position;

    /// The element at `position`, or why there is none.
    fn try_element_at(&self, position: &Self::Position)
    -> Result<Self::Element<'_>, PositionError>;

    /// The position immediately after `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is the end position or is not valid.
    fn position_after(&self, position: &Self::Position) -> Self::Position;

    /// The element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is the end position or is not valid.
    fn element_at(&self, position: &Self::Position) -> Self::Element<'_> {
        match self.try_element_at(position) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }

    /// The position `distance` steps away from `position`, or why it does not
    /// exist.
    fn try_offset(
        &self,
        position: &Self::Position,
        distance: isize,
    ) -> Result<Self::Position, PositionError> {
        walk::try_offset_forward(self, position, distance)
    }

    /// The position `distance` steps away from `position`.
    ///
    /// # Panics
    ///
    /// Panics if the walk leaves the collection, or if `distance` is negative
    /// and the collection is forward-only.
    fn offset(&self, position: &Self::Position, distance: isize) -> Self::Position {
        match self.try_offset(position, distance) {
            Ok(position) => position,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`offset`](Self::offset), but returns `None` instead of moving
    /// past `limit`.
    ///
    /// `limit` only matters when it lies in the direction of travel. Landing
    /// exactly on `limit` is allowed.
    fn offset_limited(
        &self,
        position: &Self::Position,
        distance: isize,
        limit: &Self::Position,
    ) -> Option<Self::Position> {
        walk::offset_limited_forward(self, position, distance, limit)
    }

    /// The number of steps from `start` to `end`.
    ///
    /// # Panics
    ///
    /// Forward-only collections panic when `end` comes before `start`.
    fn distance(&self, start: &Self::Position, end: &Self::Position) -> isize {
        walk::distance_forward(self, start, end)
    }

    /// The number of elements.
    fn element_count(&self) -> usize {
        self.distance(&self.start_position(), &self.end_position())
            .unsigned_abs()
    }

    /// Whether the start position is the end position.
    fn is_empty(&self) -> bool {
        self.start_position() == self.end_position()
    }

    /// The number of elements in `start..end` when it is known without
    /// walking, `None` otherwise.
    ///
    /// Indexed containers and ranges return `Some` for any valid pair with
    /// `start <= end`. The size hint of [`Iter`] is exact when this is.
    fn count_between(&self, start: &Self::Position, end: &Self::Position) -> Option<usize> {
        let _ = (start, end);
        None
    }

    /// Iterates over the elements from the start to the end position.
    fn elements(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Wraps the collection in a view that yields `(position, element)`
    /// pairs.
    ///
    /// ```
    /// use positioned::Collection;
    ///
    /// let mut short = Vec::new();
    /// for (at, name) in &["Sofia", "Camilla", "Mateo"].positioned() {
    ///     if name.len() <= 5 {
    ///         short.push(at);
    ///     }
    /// }
    /// assert_eq!(short, [0, 2]);
    /// ```
    fn positioned(self) -> PositionedView<Self>
    where
        Self: Sized,
    {
        PositionedView::new(self)
    }
}

/// A collection that can also move backward.
pub trait BidirectionalCollection: Collection {
    /// The position immediately before `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is the start position or is not valid.
    fn position_before(&self, position: &Self::Position) -> Self::Position;
}

/// A bidirectional collection whose [`try_offset`](Collection::try_offset),
/// [`offset_limited`](Collection::offset_limited) and
/// [`distance`](Collection::distance) run in constant time.
pub trait RandomAccessCollection: BidirectionalCollection {}

// References are collections too, so views can borrow instead of own.
impl<C: Collection + ?Sized> Collection for &C {
    type Position = C::Position;
    type Element<'a>
        = C::Element<'a>
    where
        Self: 'a;

    #[inline]
    fn start_position(&self) -> Self::Position {
        (**self).start_position()
    }

    #[inline]
    fn end_position(&self) -> Self::Position {
        (**self).end_position()
    }

    #[inline]
    fn try_element_at(
        &self,
        position: &Self::Position,
    ) -> Result<Self::Element<'_>, PositionError> {
        (**self).try_element_at(position)
    }

    #[inline]
    fn position_after(&self, position: &Self::Position) -> Self::Position {
        (**self).position_after(position)
    }

    #[inline]
    fn element_at(&self, position: &Self::Position) -> Self::Element<'_> {
        (**self).element_at(position)
    }

    #[inline]
    fn try_offset(
        &self,
        position: &Self::Position,
        distance: isize,
    ) -> Result<Self::Position, PositionError> {
        (**self).try_offset(position, distance)
    }

    #[inline]
    fn offset(&self, position: &Self::Position, distance: isize) -> Self::Position {
        (**self).offset(position, distance)
    }

    #[inline]
    fn offset_limited(
        &self,
        position: &Self::Position,
        distance: isize,
        limit: &Self::Position,
    ) -> Option<Self::Position> {
        (**self).offset_limited(position, distance, limit)
    }

    #[inline]
    fn distance(&self, start: &Self::Position, end: &Self::Position) -> isize {
        (**self).distance(start, end)
    }

    #[inline]
    fn element_count(&self) -> usize {
        (**self).element_count()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    #[inline]
    fn count_between(&self, start: &Self::Position, end: &Self::Position) -> Option<usize> {
        (**self).count_between(start, end)
    }
}

impl<C: BidirectionalCollection + ?Sized> BidirectionalCollection for &C {
    #[inline]
    fn position_before(&self, position: &Self::Position) -> Self::Position {
        (**self).position_before(position)
    }
}

impl<C: RandomAccessCollection + ?Sized> RandomAccessCollection for &C {}
