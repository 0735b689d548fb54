//! Random-access containers addressed by `usize` indices.

use alloc::{collections::VecDeque, vec::Vec};

use crate::macros::index_collection;

index_collection!([T] [T] => T);
index_collection!([T, const N: usize] [T; N] => T);
index_collection!([T] Vec<T> => T);
index_collection!([T] VecDeque<T> => T);

#[cfg(feature = "smallvec")]
index_collection!([A: smallvec::Array] smallvec::SmallVec<A> => A::Item);

#[cfg(test)]
mod tests {
    use alloc::{collections::VecDeque, vec, vec::Vec};

    use crate::{BidirectionalCollection, Collection, PositionError};

    #[test]
    fn vec_deque_wraps_around() {
        let mut deque = VecDeque::with_capacity(4);
        deque.extend([2, 3]);
        deque.push_front(1);
        deque.push_front(0);
        let view = (&deque).positioned();
        let pairs: Vec<_> = view.elements().collect();
        assert_eq!(pairs, vec![(0, &0), (1, &1), (2, &2), (3, &3)]);
    }

    #[test]
    fn slice_bounds() {
        let data: &[u8] = b"xyz";
        assert_eq!(data.end_position(), 3);
        assert_eq!(data.position_before(&3), 2);
        assert_eq!(data.try_element_at(&3), Err(PositionError::PastEnd));
        assert_eq!(data.try_element_at(&4), Err(PositionError::Invalid));
    }

    #[test]
    #[should_panic(expected = "past-the-end")]
    fn position_after_end_panics() {
        let data = [1, 2, 3];
        data.position_after(&3);
    }

    #[test]
    #[should_panic(expected = "before the start")]
    fn position_before_start_panics() {
        let data = vec!['a'];
        data.position_before(&0);
    }

    #[cfg(feature = "smallvec")]
    #[test]
    fn small_vec_is_random_access() {
        let small: smallvec::SmallVec<[u16; 4]> = smallvec::smallvec![5, 6, 7];
        assert_eq!(small.offset(&0, 2), 2);
        assert_eq!(small.element_at(&2), &7);
        assert_eq!(small.distance(&2, &0), -2);
    }
}
