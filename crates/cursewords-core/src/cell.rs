//! Crossword cell state.

/// Character written for a block cell in flat grid strings.
pub const BLOCK_CHAR: char = '.';

/// Character written for an empty letter cell in flat fill strings.
pub const BLANK_CHAR: char = '-';

/// A single square of the crossword grid.
///
/// A cell is either a block (never part of a word, never receives an entry) or a
/// letter cell holding its solution character, the player's current entry, the clue
/// number if the cell starts a word, and a wrong-flag set by [`Grid::check`].
///
/// [`Grid::check`]: crate::Grid::check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    solution: Option<char>,
    entry: Option<char>,
    number: Option<u16>,
    wrong: bool,
}

impl Cell {
    pub(crate) const fn block() -> Self {
        Self {
            solution: None,
            entry: None,
            number: None,
            wrong: false,
        }
    }

    pub(crate) const fn letter(solution: char) -> Self {
        Self {
            solution: Some(solution),
            entry: None,
            number: None,
            wrong: false,
        }
    }

    /// Returns `true` if the cell is a block.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        self.solution.is_none()
    }

    /// Returns `true` if the cell is playable.
    #[must_use]
    pub const fn is_letter(&self) -> bool {
        self.solution.is_some()
    }

    /// Returns the solution character, or `None` for a block.
    #[must_use]
    pub const fn solution(&self) -> Option<char> {
        self.solution
    }

    /// Returns the current entry, or `None` if nothing has been entered.
    #[must_use]
    pub const fn entry(&self) -> Option<char> {
        self.entry
    }

    /// Returns `true` if this is a letter cell without an entry.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.is_letter() && self.entry.is_none()
    }

    /// Returns `true` if this is a letter cell with an entry.
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.entry.is_some()
    }

    /// Returns the clue number of the cell, if it starts a numbered word.
    #[must_use]
    pub const fn number(&self) -> Option<u16> {
        self.number
    }

    /// Returns `true` if a check found the entry to be wrong and it has not been edited since.
    #[must_use]
    pub const fn is_marked_wrong(&self) -> bool {
        self.wrong
    }

    /// Returns `true` if the entry matches the solution. Blocks are always correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_block() || self.entry == self.solution
    }

    /// Returns the character used for this cell in a flat fill string.
    ///
    /// Blocks are `.`, empty letter cells are `-`, filled cells are their entry.
    #[must_use]
    pub fn fill_char(&self) -> char {
        match (self.solution, self.entry) {
            (None, _) => BLOCK_CHAR,
            (Some(_), None) => BLANK_CHAR,
            (Some(_), Some(entry)) => entry,
        }
    }

    pub(crate) fn set_entry(&mut self, entry: Option<char>) {
        debug_assert!(self.is_letter());
        self.entry = entry;
        self.wrong = false;
    }

    pub(crate) fn set_number(&mut self, number: Option<u16>) {
        self.number = number;
    }

    /// Flags the entry as wrong if it is filled and incorrect. Returns whether the flag is set.
    pub(crate) fn mark_if_wrong(&mut self) -> bool {
        if self.is_filled() && !self.is_correct() {
            self.wrong = true;
        }
        self.wrong
    }
}
