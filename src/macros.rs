//! Implementation macros for the standard containers.

/// Implements all three capability traits for a container addressed by
/// `usize` indices in `0..len`.
///
/// The container must have inherent `len()` and `get(usize) -> Option<&T>`
/// methods (directly or through slice deref).
///
/// ```ignore
/// index_collection!([T] Vec<T> => T);
/// index_collection!([T, const N: usize] [T; N] => T);
/// ```
macro_rules! index_collection {
    ([$($params:tt)*] $ty:ty => $elem:ty) => {
        impl<$($params)*> $crate::Collection for $ty {
            type Position = usize;
            type Element<'a>
                = &'a $elem
            where
                Self: 'a;

            #[inline]
            fn start_position(&self) -> usize {
                0
            }

            #[inline]
            fn end_position(&self) -> usize {
                self.len()
            }

            #[inline]
            fn try_element_at(
                &self,
                position: &usize,
            ) -> Result<&$elem, $crate::PositionError> {
                self.get(*position)
                    .ok_or_else(|| $crate::walk::element_error(*position, 0, self.len()))
            }

            #[inline]
            fn position_after(&self, position: &usize) -> usize {
                $crate::walk::index_after(*position, 0, self.len())
            }

            #[inline]
            fn try_offset(
                &self,
                position: &usize,
                distance: isize,
            ) -> Result<usize, $crate::PositionError> {
                $crate::walk::try_offset_index(*position, distance, 0, self.len())
            }

            #[inline]
            fn offset_limited(
                &self,
                position: &usize,
                distance: isize,
                limit: &usize,
            ) -> Option<usize> {
                $crate::walk::offset_limited_index(*position, distance, *limit, 0, self.len())
            }

            #[inline]
            fn distance(&self, start: &usize, end: &usize) -> isize {
                $crate::walk::distance_index(*start, *end)
            }

            #[inline]
            fn element_count(&self) -> usize {
                self.len()
            }

            #[inline]
            fn count_between(&self, start: &usize, end: &usize) -> Option<usize> {
                $crate::walk::count_index(*start, *end)
            }
        }

        impl<$($params)*> $crate::BidirectionalCollection for $ty {
            #[inline]
            fn position_before(&self, position: &usize) -> usize {
                $crate::walk::index_before(*position, 0, self.len())
            }
        }

        impl<$($params)*> $crate::RandomAccessCollection for $ty {}
    };
}

pub(crate) use index_collection;
