//! Compile-time checks that a view has exactly its base's traversal tier.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
use std::ops::Range;

use positioned::{BidirectionalCollection, Collection, PositionedView, RandomAccessCollection};
use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

// Random access in, random access out.
assert_impl_all!(PositionedView<Vec<u8>>: RandomAccessCollection);
assert_impl_all!(PositionedView<&'static [u8]>: RandomAccessCollection, Copy);
assert_impl_all!(PositionedView<[u8; 4]>: RandomAccessCollection);
assert_impl_all!(PositionedView<VecDeque<u8>>: RandomAccessCollection);
assert_impl_all!(PositionedView<Range<usize>>: RandomAccessCollection);

// Bidirectional in, bidirectional out, no random access.
assert_impl_all!(PositionedView<&'static str>: BidirectionalCollection);
assert_impl_all!(PositionedView<String>: BidirectionalCollection);
assert_impl_all!(PositionedView<BTreeSet<u8>>: BidirectionalCollection);
assert_impl_all!(PositionedView<BTreeMap<u8, u8>>: BidirectionalCollection);
assert_not_impl_any!(PositionedView<&'static str>: RandomAccessCollection);
assert_not_impl_any!(PositionedView<BTreeSet<u8>>: RandomAccessCollection);

// Forward-only in, forward-only out.
assert_impl_all!(PositionedView<&'static HashSet<u8>>: Collection);
assert_not_impl_any!(PositionedView<&'static HashSet<u8>>: BidirectionalCollection);
assert_not_impl_any!(HashSet<u8>: Collection);

// Nesting keeps the tier.
assert_impl_all!(PositionedView<PositionedView<Vec<u8>>>: RandomAccessCollection);
assert_not_impl_any!(PositionedView<PositionedView<&'static HashSet<u8>>>: BidirectionalCollection);

// Structural traits follow the base.
assert_impl_all!(PositionedView<Vec<u8>>: Clone, PartialEq, Eq, std::hash::Hash);
assert_not_impl_any!(PositionedView<Vec<u8>>: Copy);
assert_not_impl_any!(PositionedView<Vec<f64>>: Eq, std::hash::Hash);

// No storage beyond the base.
assert_eq_size!(PositionedView<Vec<u8>>, Vec<u8>);
assert_eq_size!(PositionedView<&'static str>, &'static str);
assert_eq_size!(PositionedView<BTreeSet<u8>>, BTreeSet<u8>);

#[test]
fn tiers_select_statically() {
    fn last<C: BidirectionalCollection>(collection: &C) -> C::Element<'_> {
        collection.element_at(&collection.position_before(&collection.end_position()))
    }

    fn middle<C: RandomAccessCollection>(collection: &C) -> C::Element<'_> {
        let half = (collection.element_count() / 2) as isize;
        collection.element_at(&collection.offset(&collection.start_position(), half))
    }

    let view = vec![10, 20, 30].positioned();
    assert_eq!(last(&view), (2, &30));
    assert_eq!(middle(&view), (1, &20));
    assert_eq!(last(&"xyz".positioned()), (2, 'z'));
}
