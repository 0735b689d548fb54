//! Strings as bidirectional collections of `char`s addressed by byte offset.
//!
//! A byte offset is only a valid position on a char boundary. Moving between
//! positions decodes one UTF-8 sequence, so there is no constant-time offset.

use alloc::string::String;

use crate::{BidirectionalCollection, Collection, PositionError, walk};

impl Collection for str {
    type Position = usize;
    type Element<'a> = char;

    #[inline]
    fn start_position(&self) -> usize {
        0
    }

    #[inline]
    fn end_position(&self) -> usize {
        self.len()
    }

    fn try_element_at(&self, position: &usize) -> Result<char, PositionError> {
        if *position == self.len() {
            return Err(PositionError::PastEnd);
        }
        self.get(*position..)
            .and_then(|rest| rest.chars().next())
            .ok_or(PositionError::Invalid)
    }

    #[inline]
    fn position_after(&self, position: &usize) -> usize {
        position + self.element_at(position).len_utf8()
    }

    fn try_offset(&self, position: &usize, distance: isize) -> Result<usize, PositionError> {
        walk::try_offset_bidirectional(self, position, distance)
    }

    fn offset_limited(&self, position: &usize, distance: isize, limit: &usize) -> Option<usize> {
        walk::offset_limited_bidirectional(self, position, distance, limit)
    }

    fn distance(&self, start: &usize, end: &usize) -> isize {
        let (low, high) = if start <= end { (*start, *end) } else { (*end, *start) };
        let Some(between) = self.get(low..high) else {
            panic!("{}", PositionError::Invalid);
        };
        let steps = between.chars().count() as isize;
        if start <= end { steps } else { -steps }
    }

    fn element_count(&self) -> usize {
        self.chars().count()
    }
}

impl BidirectionalCollection for str {
    fn position_before(&self, position: &usize) -> usize {
        if *position == 0 {
            panic!("{}", PositionError::OffsetBeforeStart { distance: -1 });
        }
        match self.get(..*position).and_then(|head| head.chars().next_back()) {
            Some(ch) => position - ch.len_utf8(),
            None => panic!("{}", PositionError::Invalid),
        }
    }
}

impl Collection for String {
    type Position = usize;
    type Element<'a> = char;

    #[inline]
    fn start_position(&self) -> usize {
        0
    }

    #[inline]
    fn end_position(&self) -> usize {
        self.len()
    }

    #[inline]
    fn try_element_at(&self, position: &usize) -> Result<char, PositionError> {
        self.as_str().try_element_at(position)
    }

    #[inline]
    fn position_after(&self, position: &usize) -> usize {
        self.as_str().position_after(position)
    }

    #[inline]
    fn try_offset(&self, position: &usize, distance: isize) -> Result<usize, PositionError> {
        self.as_str().try_offset(position, distance)
    }

    #[inline]
    fn offset_limited(&self, position: &usize, distance: isize, limit: &usize) -> Option<usize> {
        self.as_str().offset_limited(position, distance, limit)
    }

    #[inline]
    fn distance(&self, start: &usize, end: &usize) -> isize {
        self.as_str().distance(start, end)
    }

    #[inline]
    fn element_count(&self) -> usize {
        self.as_str().element_count()
    }
}

impl BidirectionalCollection for String {
    #[inline]
    fn position_before(&self, position: &usize) -> usize {
        self.as_str().position_before(position)
    }
}
