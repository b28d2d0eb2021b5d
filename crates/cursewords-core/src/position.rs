//! Grid position representation.

/// A cell position on the crossword grid.
///
/// `x` is the column (0 is the leftmost column) and `y` is the row (0 is the top
/// row). Grids are at most 255 cells wide and 255 cells tall, matching the size
/// limits of the puzzle formats the solver reads.
///
/// # Examples
///
/// ```
/// use cursewords_core::Position;
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.x(), 3);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.index(5), 8);
/// assert_eq!(Position::from_index(8, 5), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from a column and a row.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this position in a grid `width` cells wide.
    #[must_use]
    pub fn index(self, width: u8) -> usize {
        usize::from(self.y) * usize::from(width) + usize::from(self.x)
    }

    /// Converts a row-major index back into a position.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or the resulting row does not fit in a `u8`.
    #[must_use]
    pub fn from_index(index: usize, width: u8) -> Self {
        let width = usize::from(width);
        let x = u8::try_from(index % width).expect("column is below the grid width");
        let y = u8::try_from(index / width).expect("row index out of range");
        Self { x, y }
    }

    /// Returns the position one column to the left, if any.
    #[must_use]
    pub fn left(self) -> Option<Self> {
        self.x.checked_sub(1).map(|x| Self::new(x, self.y))
    }

    /// Returns the position one row above, if any.
    #[must_use]
    pub fn up(self) -> Option<Self> {
        self.y.checked_sub(1).map(|y| Self::new(self.x, y))
    }
}
