//! Shared property checks for positioned view integration tests.
//!
//! These are macros rather than generic functions so each check runs against
//! the concrete element type of the collection under test.

#![allow(unused_macros)]

/// Walks a view and its base side by side and checks that both visit the
/// same positions, and that the view pairs each position with the base's
/// element there. Evaluates to the number of steps taken.
macro_rules! assert_mirrors_base {
    ($base:expr) => {{
        let base = $base;
        let view = (&base).positioned();
        let mut at = view.start_position();
        let mut base_at = base.start_position();
        let mut steps = 0usize;
        while base_at != base.end_position() {
            assert_eq!(at, base_at);
            assert_eq!(
                view.element_at(&at),
                (base_at.clone(), base.element_at(&base_at))
            );
            at = view.position_after(&at);
            base_at = base.position_after(&base_at);
            steps += 1;
        }
        assert_eq!(at, view.end_position());
        assert_eq!(steps, view.element_count());
        steps
    }};
}

/// Checks that stepping back undoes stepping forward at every position
/// before the end.
macro_rules! assert_steps_reverse {
    ($view:expr) => {{
        let view = &$view;
        let mut at = view.start_position();
        while at != view.end_position() {
            let next = view.position_after(&at);
            assert_eq!(view.position_before(&next), at);
            at = next;
        }
    }};
}

/// Checks `distance(p, offset(p, n)) == n` for every position and every
/// in-bounds `n`.
macro_rules! assert_offsets_measure {
    ($view:expr) => {{
        let view = &$view;
        let count = view.element_count() as isize;
        let mut at = view.start_position();
        let mut index = 0isize;
        loop {
            for n in -index..=(count - index) {
                let target = view.offset(&at, n);
                assert_eq!(view.distance(&at, &target), n);
            }
            if at == view.end_position() {
                break;
            }
            at = view.position_after(&at);
            index += 1;
        }
    }};
}
