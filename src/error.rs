use thiserror::Error;

/// Why a position or an offset is not valid for a collection.
///
/// The panicking operations of [`Collection`](crate::Collection) use this
/// error's message, so a caught panic and a `try_` result always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PositionError {
    /// The past-end position was used to access an element.
    #[error("cannot access an element at the past-the-end position")]
    PastEnd,

    /// The position does not refer to an element of this collection.
    #[error("position does not refer to an element of this collection")]
    Invalid,

    #[error("offset by {distance} moves past the end of the collection")]
    OffsetPastEnd { distance: isize },

    #[error("offset by {distance} moves before the start of the collection")]
    OffsetBeforeStart { distance: isize },

    /// Forward-only collections can only move forward.
    #[error("forward-only collections cannot be offset by a negative distance ({distance})")]
    NegativeOffset { distance: isize },

    #[error("forward-only collections cannot measure a distance that ends before it starts")]
    BackwardDistance,

    /// The number of steps between two positions does not fit in an `isize`.
    #[error("distance between positions does not fit in an isize")]
    DistanceOverflow,
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::PositionError;

    #[test]
    fn messages_include_distance() {
        assert_eq!(
            PositionError::OffsetPastEnd { distance: 4 }.to_string(),
            "offset by 4 moves past the end of the collection"
        );
        assert_eq!(
            PositionError::NegativeOffset { distance: -2 }.to_string(),
            "forward-only collections cannot be offset by a negative distance (-2)"
        );
    }
}
