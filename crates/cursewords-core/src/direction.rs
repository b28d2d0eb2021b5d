//! Word direction.

/// The orientation of a word: along a row or down a column.
///
/// # Examples
///
/// ```
/// use cursewords_core::Direction;
///
/// assert_eq!(Direction::Across.toggled(), Direction::Down);
/// assert_eq!(Direction::Down.to_string(), "down");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display, derive_more::IsVariant,
)]
pub enum Direction {
    /// Left to right along a row.
    #[default]
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}
