//! Offset and distance algorithms shared by collection implementations.
//!
//! The `*_forward` and `*_bidirectional` functions move one position at a
//! time and work for any collection of the matching capability. The
//! `*_index` functions are constant-time arithmetic over `usize` positions
//! that form a contiguous range `start..=end`.

use crate::{BidirectionalCollection, Collection, PositionError};

/// Steps forward `distance` times, failing at the end of the collection.
pub fn try_offset_forward<C>(
    collection: &C,
    position: &C::Position,
    distance: isize,
) -> Result<C::Position, PositionError>
where
    C: Collection + ?Sized,
{
    if distance < 0 {
        tracing::trace!(distance, "negative offset on a forward-only walk");
        return Err(PositionError::NegativeOffset { distance });
    }
    let end = collection.end_position();
    let mut current = position.clone();
    for _ in 0..distance {
        if current == end {
            tracing::trace!(distance, "offset walked off the end");
            return Err(PositionError::OffsetPastEnd { distance });
        }
        current = collection.position_after(&current);
    }
    Ok(current)
}

/// Steps forward `distance` times, stopping with `None` at `limit`.
///
/// # Panics
///
/// Panics if `distance` is negative, or if the walk leaves the collection
/// without meeting `limit`.
pub fn offset_limited_forward<C>(
    collection: &C,
    position: &C::Position,
    distance: isize,
    limit: &C::Position,
) -> Option<C::Position>
where
    C: Collection + ?Sized,
{
    if distance < 0 {
        panic!("{}", PositionError::NegativeOffset { distance });
    }
    let mut current = position.clone();
    for _ in 0..distance {
        if current == *limit {
            tracing::trace!(distance, "bounded offset stopped at its limit");
            return None;
        }
        current = collection.position_after(&current);
    }
    Some(current)
}

/// Counts the steps from `start` to `end`.
///
/// # Panics
///
/// Panics if `end` comes before `start`.
pub fn distance_forward<C>(collection: &C, start: &C::Position, end: &C::Position) -> isize
where
    C: Collection + ?Sized,
{
    if end < start {
        panic!("{}", PositionError::BackwardDistance);
    }
    let mut current = start.clone();
    let mut steps = 0isize;
    while current != *end {
        current = collection.position_after(&current);
        steps += 1;
    }
    steps
}

/// Like [`try_offset_forward`], but negative distances step backward.
pub fn try_offset_bidirectional<C>(
    collection: &C,
    position: &C::Position,
    distance: isize,
) -> Result<C::Position, PositionError>
where
    C: BidirectionalCollection + ?Sized,
{
    if distance >= 0 {
        return try_offset_forward(collection, position, distance);
    }
    let start = collection.start_position();
    let mut current = position.clone();
    for _ in 0..distance.unsigned_abs() {
        if current == start {
            tracing::trace!(distance, "offset walked off the start");
            return Err(PositionError::OffsetBeforeStart { distance });
        }
        current = collection.position_before(&current);
    }
    Ok(current)
}

/// Like [`offset_limited_forward`], but negative distances step backward.
pub fn offset_limited_bidirectional<C>(
    collection: &C,
    position: &C::Position,
    distance: isize,
    limit: &C::Position,
) -> Option<C::Position>
where
    C: BidirectionalCollection + ?Sized,
{
    if distance >= 0 {
        return offset_limited_forward(collection, position, distance, limit);
    }
    let mut current = position.clone();
    for _ in 0..distance.unsigned_abs() {
        if current == *limit {
            tracing::trace!(distance, "bounded offset stopped at its limit");
            return None;
        }
        current = collection.position_before(&current);
    }
    Some(current)
}

/// Like [`distance_forward`], but a backward distance is negative.
pub fn distance_bidirectional<C>(collection: &C, start: &C::Position, end: &C::Position) -> isize
where
    C: BidirectionalCollection + ?Sized,
{
    if start <= end {
        return distance_forward(collection, start, end);
    }
    let mut current = start.clone();
    let mut steps = 0isize;
    while current != *end {
        current = collection.position_before(&current);
        steps -= 1;
    }
    steps
}

/// Why `position` has no element in `start..end`.
pub fn element_error(position: usize, start: usize, end: usize) -> PositionError {
    if position == end {
        PositionError::PastEnd
    } else {
        debug_assert!(position < start || position > end);
        PositionError::Invalid
    }
}

/// `position + 1`.
///
/// # Panics
///
/// Panics if `position` is not in `start..end`.
#[inline]
pub fn index_after(position: usize, start: usize, end: usize) -> usize {
    if position < start || position >= end {
        panic!("{}", element_error(position, start, end));
    }
    position + 1
}

/// `position - 1`.
///
/// # Panics
///
/// Panics if `position` is not in `start + 1..=end`.
#[inline]
pub fn index_before(position: usize, start: usize, end: usize) -> usize {
    if position > end {
        panic!("{}", PositionError::Invalid);
    }
    if position <= start {
        panic!("{}", PositionError::OffsetBeforeStart { distance: -1 });
    }
    position - 1
}

/// `position + distance`, kept within `start..=end`.
#[inline]
pub fn try_offset_index(
    position: usize,
    distance: isize,
    start: usize,
    end: usize,
) -> Result<usize, PositionError> {
    if position < start || position > end {
        return Err(PositionError::Invalid);
    }
    match position.checked_add_signed(distance) {
        Some(target) if target > end => Err(PositionError::OffsetPastEnd { distance }),
        Some(target) if target >= start => Ok(target),
        Some(_) => Err(PositionError::OffsetBeforeStart { distance }),
        None if distance < 0 => Err(PositionError::OffsetBeforeStart { distance }),
        None => Err(PositionError::OffsetPastEnd { distance }),
    }
}

/// Constant-time [`offset_limited_forward`] for index positions.
///
/// # Panics
///
/// Panics if the target is outside `start..=end` and `limit` did not stop it.
#[inline]
pub fn offset_limited_index(
    position: usize,
    distance: isize,
    limit: usize,
    start: usize,
    end: usize,
) -> Option<usize> {
    // A limit too far away to measure is out of reach of any `isize` offset.
    let blocked = match try_distance_index(position, limit) {
        Ok(to_limit) if distance > 0 => to_limit >= 0 && to_limit < distance,
        Ok(to_limit) => to_limit <= 0 && distance < to_limit,
        Err(_) => false,
    };
    if blocked {
        tracing::trace!(distance, "bounded offset stopped at its limit");
        return None;
    }
    match try_offset_index(position, distance, start, end) {
        Ok(target) => Some(target),
        Err(err) => panic!("{err}"),
    }
}

/// `end - start`, signed, or [`PositionError::DistanceOverflow`] when it does
/// not fit in an `isize`.
#[inline]
pub fn try_distance_index(start: usize, end: usize) -> Result<isize, PositionError> {
    let distance = if end >= start {
        isize::try_from(end - start).ok()
    } else {
        0isize.checked_sub_unsigned(start - end)
    };
    distance.ok_or(PositionError::DistanceOverflow)
}

/// `end - start`, signed.
///
/// # Panics
///
/// Panics if the distance does not fit in an `isize`.
#[inline]
pub fn distance_index(start: usize, end: usize) -> isize {
    match try_distance_index(start, end) {
        Ok(distance) => distance,
        Err(err) => panic!("{err}"),
    }
}

/// Number of elements in `start..end`, `None` when `end` comes first.
#[inline]
pub fn count_index(start: usize, end: usize) -> Option<usize> {
    end.checked_sub(start)
}
