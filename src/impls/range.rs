use core::ops::Range;

use crate::{BidirectionalCollection, Collection, PositionError, RandomAccessCollection, walk};

// A range is the collection of its own values; each position is the value.
impl Collection for Range<usize> {
    type Position = usize;
    type Element<'a> = usize;

    #[inline]
    fn start_position(&self) -> usize {
        self.start
    }

    #[inline]
    fn end_position(&self) -> usize {
        // Inverted ranges are empty.
        self.end.max(self.start)
    }

    #[inline]
    fn try_element_at(&self, position: &usize) -> Result<usize, PositionError> {
        if self.contains(position) {
            Ok(*position)
        } else {
            Err(walk::element_error(*position, self.start, self.end_position()))
        }
    }

    #[inline]
    fn position_after(&self, position: &usize) -> usize {
        walk::index_after(*position, self.start, self.end_position())
    }

    #[inline]
    fn try_offset(&self, position: &usize, distance: isize) -> Result<usize, PositionError> {
        walk::try_offset_index(*position, distance, self.start, self.end_position())
    }

    #[inline]
    fn offset_limited(&self, position: &usize, distance: isize, limit: &usize) -> Option<usize> {
        walk::offset_limited_index(*position, distance, *limit, self.start, self.end_position())
    }

    #[inline]
    fn distance(&self, start: &usize, end: &usize) -> isize {
        walk::distance_index(*start, *end)
    }

    // Spans longer than `isize::MAX` have no signed distance but still a count.
    #[inline]
    fn element_count(&self) -> usize {
        self.end_position() - self.start
    }

    #[inline]
    fn count_between(&self, start: &usize, end: &usize) -> Option<usize> {
        walk::count_index(*start, *end)
    }
}

impl BidirectionalCollection for Range<usize> {
    #[inline]
    fn position_before(&self, position: &usize) -> usize {
        walk::index_before(*position, self.start, self.end_position())
    }
}

impl RandomAccessCollection for Range<usize> {}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};

    use crate::{Collection, PositionError};

    #[test]
    fn positions_are_values() {
        let pairs: Vec<_> = (3usize..6).positioned().elements().collect();
        assert_eq!(pairs, vec![(3, 3), (4, 4), (5, 5)]);
    }

    #[test]
    fn offsets_stay_in_range() {
        let range = 10usize..15;
        assert_eq!(range.try_offset(&12, -2), Ok(10));
        assert_eq!(
            range.try_offset(&12, -3),
            Err(PositionError::OffsetBeforeStart { distance: -3 })
        );
        assert_eq!(range.try_element_at(&9), Err(PositionError::Invalid));
        assert_eq!(range.try_element_at(&15), Err(PositionError::PastEnd));
    }

    #[test]
    fn counts_ranges_wider_than_isize() {
        let range = 0usize..usize::MAX;
        let view = range.clone().positioned();
        assert_eq!(view.element_count(), range.len());
        assert_eq!(view.elements().size_hint(), (usize::MAX, Some(usize::MAX)));
        assert!(!view.is_empty());

        let half = 1usize << (usize::BITS - 1);
        assert_eq!(view.distance(&half, &0), isize::MIN);
        assert_eq!(view.distance(&0, &(half - 1)), isize::MAX);
    }

    #[test]
    #[should_panic(expected = "does not fit in an isize")]
    fn unmeasurable_distance_panics() {
        let view = (0usize..usize::MAX).positioned();
        view.distance(&0, &usize::MAX);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn inverted_range_is_empty() {
        let range = 5usize..2;
        assert!(Collection::is_empty(&range));
        assert_eq!(range.elements().count(), 0);
    }
}
