//! Ordered trees as bidirectional collections addressed by key.

use alloc::collections::{BTreeMap, BTreeSet};
use core::ops::Bound::{self, Excluded, Included, Unbounded};

use crate::{BidirectionalCollection, Collection, PositionError, walk};

/// Position in a collection ordered by key: an element's key, or the end.
///
/// `End` orders after every key, so positions compare the way the keys do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyPosition<K> {
    Key(K),
    End,
}

impl<K> KeyPosition<K> {
    /// The key at this position, `None` at the end.
    pub fn key(&self) -> Option<&K> {
        match self {
            KeyPosition::Key(key) => Some(key),
            KeyPosition::End => None,
        }
    }
}

impl<K: Clone> KeyPosition<K> {
    fn at(key: Option<&K>) -> Self {
        key.cloned().map_or(KeyPosition::End, KeyPosition::Key)
    }
}

/// The key range between two positions, lowest first.
fn key_range<'k, K>(
    low: &'k KeyPosition<K>,
    high: &'k KeyPosition<K>,
) -> Option<(Bound<&'k K>, Bound<&'k K>)> {
    let lower = Included(low.key()?);
    let upper = high.key().map_or(Unbounded, Excluded);
    Some((lower, upper))
}

/// Signed step count from a count of keys between the lower and higher
/// position.
fn signed(count: usize, forward: bool) -> isize {
    let count = count as isize;
    if forward { count } else { -count }
}

fn before_start() -> ! {
    panic!("{}", PositionError::OffsetBeforeStart { distance: -1 })
}

impl<T: Ord + Clone> Collection for BTreeSet<T> {
    type Position = KeyPosition<T>;
    type Element<'a>
        = &'a T
    where
        Self: 'a;

    fn start_position(&self) -> KeyPosition<T> {
        KeyPosition::at(self.first())
    }

    fn end_position(&self) -> KeyPosition<T> {
        KeyPosition::End
    }

    fn try_element_at(&self, position: &KeyPosition<T>) -> Result<&T, PositionError> {
        match position {
            KeyPosition::Key(key) => self.get(key).ok_or(PositionError::Invalid),
            KeyPosition::End => Err(PositionError::PastEnd),
        }
    }

    fn position_after(&self, position: &KeyPosition<T>) -> KeyPosition<T> {
        let Some(key) = position.key() else {
            panic!("{}", PositionError::PastEnd);
        };
        debug_assert!(self.contains(key), "{}", PositionError::Invalid);
        KeyPosition::at(self.range::<T, _>((Excluded(key), Unbounded)).next())
    }

    fn try_offset(
        &self,
        position: &KeyPosition<T>,
        distance: isize,
    ) -> Result<KeyPosition<T>, PositionError> {
        walk::try_offset_bidirectional(self, position, distance)
    }

    fn offset_limited(
        &self,
        position: &KeyPosition<T>,
        distance: isize,
        limit: &KeyPosition<T>,
    ) -> Option<KeyPosition<T>> {
        walk::offset_limited_bidirectional(self, position, distance, limit)
    }

    fn distance(&self, start: &KeyPosition<T>, end: &KeyPosition<T>) -> isize {
        let forward = start <= end;
        let (low, high) = if forward { (start, end) } else { (end, start) };
        let count = key_range(low, high).map_or(0, |range| self.range::<T, _>(range).count());
        signed(count, forward)
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Ord + Clone> BidirectionalCollection for BTreeSet<T> {
    fn position_before(&self, position: &KeyPosition<T>) -> KeyPosition<T> {
        let previous = match position.key() {
            Some(key) => self.range::<T, _>(..key).next_back(),
            None => self.last(),
        };
        match previous {
            Some(key) => KeyPosition::Key(key.clone()),
            None => before_start(),
        }
    }
}

impl<K: Ord + Clone, V> Collection for BTreeMap<K, V> {
    type Position = KeyPosition<K>;
    type Element<'a>
        = (&'a K, &'a V)
    where
        Self: 'a;

    fn start_position(&self) -> KeyPosition<K> {
        KeyPosition::at(self.first_key_value().map(|(key, _)| key))
    }

    fn end_position(&self) -> KeyPosition<K> {
        KeyPosition::End
    }

    fn try_element_at(&self, position: &KeyPosition<K>) -> Result<(&K, &V), PositionError> {
        match position {
            KeyPosition::Key(key) => self.get_key_value(key).ok_or(PositionError::Invalid),
            KeyPosition::End => Err(PositionError::PastEnd),
        }
    }

    fn position_after(&self, position: &KeyPosition<K>) -> KeyPosition<K> {
        let Some(key) = position.key() else {
            panic!("{}", PositionError::PastEnd);
        };
        debug_assert!(self.contains_key(key), "{}", PositionError::Invalid);
        let next = self.range::<K, _>((Excluded(key), Unbounded)).next();
        KeyPosition::at(next.map(|(key, _)| key))
    }

    fn try_offset(
        &self,
        position: &KeyPosition<K>,
        distance: isize,
    ) -> Result<KeyPosition<K>, PositionError> {
        walk::try_offset_bidirectional(self, position, distance)
    }

    fn offset_limited(
        &self,
        position: &KeyPosition<K>,
        distance: isize,
        limit: &KeyPosition<K>,
    ) -> Option<KeyPosition<K>> {
        walk::offset_limited_bidirectional(self, position, distance, limit)
    }

    fn distance(&self, start: &KeyPosition<K>, end: &KeyPosition<K>) -> isize {
        let forward = start <= end;
        let (low, high) = if forward { (start, end) } else { (end, start) };
        let count = key_range(low, high).map_or(0, |range| self.range::<K, _>(range).count());
        signed(count, forward)
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<K: Ord + Clone, V> BidirectionalCollection for BTreeMap<K, V> {
    fn position_before(&self, position: &KeyPosition<K>) -> KeyPosition<K> {
        let previous = match position.key() {
            Some(key) => self.range::<K, _>(..key).next_back(),
            None => self.last_key_value(),
        };
        match previous {
            Some((key, _)) => KeyPosition::Key(key.clone()),
            None => before_start(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        collections::{BTreeMap, BTreeSet},
        vec,
        vec::Vec,
    };

    use pretty_assertions::assert_eq;

    use super::KeyPosition::{self, End, Key};
    use crate::{BidirectionalCollection, Collection, PositionError};

    fn set() -> BTreeSet<i32> {
        [30, 10, 20].into_iter().collect()
    }

    #[test]
    fn end_orders_after_keys() {
        assert!(Key(i32::MAX) < End);
        assert_eq!(End::<u8>.key(), None);
    }

    #[test]
    fn set_positions_are_sorted_keys() {
        let pairs: Vec<_> = set().positioned().elements().map(|(at, v)| (at, *v)).collect();
        assert_eq!(pairs, vec![(Key(10), 10), (Key(20), 20), (Key(30), 30)]);
    }

    #[test]
    fn set_steps_both_ways() {
        let set = set();
        assert_eq!(set.start_position(), Key(10));
        assert_eq!(set.position_after(&Key(30)), End);
        assert_eq!(set.position_before(&End), Key(30));
        assert_eq!(set.position_before(&Key(20)), Key(10));
        assert_eq!(set.offset(&End, -3), Key(10));
        assert_eq!(set.offset_limited(&Key(10), 2, &Key(20)), None);
        assert_eq!(set.offset_limited(&Key(10), 1, &Key(20)), Some(Key(20)));
    }

    #[test]
    fn set_distance_counts_keys() {
        let set = set();
        assert_eq!(set.distance(&Key(10), &End), 3);
        assert_eq!(set.distance(&End, &Key(20)), -2);
        assert_eq!(set.distance(&Key(20), &Key(20)), 0);
        assert_eq!(set.distance(&End, &End), 0);
    }

    #[test]
    fn empty_set_starts_at_end() {
        let empty = BTreeSet::<u8>::new();
        assert_eq!(empty.start_position(), End);
        assert!(Collection::is_empty(&empty));
    }

    #[test]
    fn missing_key_is_invalid() {
        assert_eq!(set().try_element_at(&Key(15)), Err(PositionError::Invalid));
        assert_eq!(set().try_element_at(&End), Err(PositionError::PastEnd));
    }

    #[test]
    #[should_panic(expected = "before the start")]
    fn set_before_start_panics() {
        set().position_before(&Key(10));
    }

    #[test]
    fn map_yields_entries() {
        let map: BTreeMap<&str, u32> = [("b", 2), ("a", 1)].into_iter().collect();
        let view = map.positioned();
        let pairs: Vec<_> = view.elements().rev().collect();
        assert_eq!(
            pairs,
            vec![(Key("b"), (&"b", &2)), (Key("a"), (&"a", &1))]
        );
        assert_eq!(view.element_count(), 2);
        assert_eq!(view.distance(&End, &Key("a")), -2);
    }

    #[test]
    fn key_accessor() {
        let at: KeyPosition<char> = Key('k');
        assert_eq!(at.key(), Some(&'k'));
    }
}
