//! Decoded puzzle data and load errors.

use crate::{Direction, Position, cell::BLANK_CHAR, cell::BLOCK_CHAR};

/// A clue as provided by the puzzle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    /// Number of the cell the clued word starts at.
    pub number: u16,
    /// Clue text.
    pub text: String,
}

impl Clue {
    /// Creates a clue.
    #[must_use]
    pub fn new(number: u16, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Across and down clue lists, each in numbering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clues {
    /// Across clues.
    pub across: Vec<Clue>,
    /// Down clues.
    pub down: Vec<Clue>,
}

impl Clues {
    /// Returns the clue list for `direction`.
    #[must_use]
    pub fn list(&self, direction: Direction) -> &[Clue] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Looks up the clue numbered `number` in `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction, number: u16) -> Option<&Clue> {
        self.list(direction).iter().find(|clue| clue.number == number)
    }
}

/// The decoded fields of a puzzle file.
///
/// `solution` and `fill` are flat row-major strings with one character per cell.
/// In `solution`, `.` marks a block and any alphanumeric character is the answer
/// letter. In `fill`, `.` marks a block, `-` an empty cell and any alphanumeric
/// character an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleData {
    /// Puzzle title.
    pub title: String,
    /// Puzzle author.
    pub author: String,
    /// Number of columns.
    pub width: u8,
    /// Number of rows.
    pub height: u8,
    /// Row-major solution string.
    pub solution: String,
    /// Row-major fill string.
    pub fill: String,
    /// Clues keyed by number.
    pub clues: Clues,
}

impl PuzzleData {
    /// Builds unclued puzzle data from solution rows, with every letter cell blank.
    ///
    /// # Panics
    ///
    /// Panics if there are more than 255 rows or a row is longer than 255 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursewords_core::PuzzleData;
    ///
    /// let data = PuzzleData::from_rows("Tiny", "Me", &["AB", ".C"]);
    /// assert_eq!(data.width, 2);
    /// assert_eq!(data.height, 2);
    /// assert_eq!(data.solution, "AB.C");
    /// assert_eq!(data.fill, "--.-");
    /// ```
    #[must_use]
    pub fn from_rows(title: &str, author: &str, rows: &[&str]) -> Self {
        let height = u8::try_from(rows.len()).expect("too many rows");
        let width = rows
            .first()
            .map_or(0, |row| u8::try_from(row.chars().count()).expect("row too long"));
        let solution: String = rows.concat();
        let fill = blank_fill(&solution);
        Self {
            title: title.to_owned(),
            author: author.to_owned(),
            width,
            height,
            solution,
            fill,
            clues: Clues::default(),
        }
    }

    /// Returns a copy of this data with the fill replaced.
    #[must_use]
    pub fn with_fill(&self, fill: String) -> Self {
        Self {
            fill,
            ..self.clone()
        }
    }
}

/// Returns the fill string of an untouched grid for `solution`.
#[must_use]
pub fn blank_fill(solution: &str) -> String {
    solution
        .chars()
        .map(|ch| if ch == BLOCK_CHAR { BLOCK_CHAR } else { BLANK_CHAR })
        .collect()
}

/// Identifies which puzzle string an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleField {
    /// The solution string.
    #[display("solution")]
    Solution,
    /// The fill string.
    #[display("fill")]
    Fill,
}

/// Puzzle data that cannot be turned into a grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// Width or height is zero.
    #[display("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions {
        /// Declared width.
        width: u8,
        /// Declared height.
        height: u8,
    },
    /// A grid string does not have one character per cell.
    #[display("{field} has {actual} characters, expected {expected}")]
    LengthMismatch {
        /// The offending string.
        field: PuzzleField,
        /// `width * height`.
        expected: usize,
        /// Actual character count.
        actual: usize,
    },
    /// A solution character is neither a block nor alphanumeric.
    #[display("invalid solution character {ch:?} at {pos}")]
    InvalidSolution {
        /// Cell position.
        pos: Position,
        /// Offending character.
        ch: char,
    },
    /// A fill character is invalid, or marks a letter cell as a block.
    #[display("invalid fill character {ch:?} at {pos}")]
    InvalidFill {
        /// Cell position.
        pos: Position,
        /// Offending character.
        ch: char,
    },
    /// Every cell is a block.
    #[display("puzzle has no letter cells")]
    NoLetterCells,
}
