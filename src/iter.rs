use core::{fmt, iter::FusedIterator};

use crate::{BidirectionalCollection, Collection};

/// Iterator over the elements of a [`Collection`], from its start position to
/// its end position.
///
/// Created by [`Collection::elements`]. Double-ended when the collection is a
/// [`BidirectionalCollection`].
pub struct Iter<'a, C>
where
    C: Collection + ?Sized,
{
    collection: &'a C,
    front: C::Position,
    back: C::Position,
}

impl<'a, C> Iter<'a, C>
where
    C: Collection + ?Sized,
{
    pub(crate) fn new(collection: &'a C) -> Self {
        Iter {
            front: collection.start_position(),
            back: collection.end_position(),
            collection,
        }
    }
}

impl<'a, C> Iterator for Iter<'a, C>
where
    C: Collection + ?Sized,
{
    type Item = C::Element<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.collection.element_at(&self.front);
        self.front = self.collection.position_after(&self.front);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.collection.count_between(&self.front, &self.back) {
            Some(remaining) => (remaining, Some(remaining)),
            None if self.front == self.back => (0, Some(0)),
            None => (1, None),
        }
    }
}

impl<'a, C> DoubleEndedIterator for Iter<'a, C>
where
    C: BidirectionalCollection + ?Sized,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back = self.collection.position_before(&self.back);
        Some(self.collection.element_at(&self.back))
    }
}

impl<C> FusedIterator for Iter<'_, C> where C: Collection + ?Sized {}

// --- Manual Clone/Debug to avoid C: Clone/Debug bounds ---

impl<C> Clone for Iter<'_, C>
where
    C: Collection + ?Sized,
{
    fn clone(&self) -> Self {
        Iter {
            collection: self.collection,
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<C> fmt::Debug for Iter<'_, C>
where
    C: Collection + ?Sized,
    C::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}
