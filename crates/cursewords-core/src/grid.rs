//! The crossword grid: cells, words, numbering, correctness and fill strings.

use crate::{
    Cell, Direction, Position, PuzzleData, PuzzleError, PuzzleField, Slot, Word, WordList,
    cell::{BLANK_CHAR, BLOCK_CHAR},
};

/// An entry that cannot be written to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EntryError {
    /// The position is outside the grid.
    #[display("{pos} is outside the grid")]
    OutOfBounds {
        /// Requested position.
        pos: Position,
    },
    /// Blocks never take entries.
    #[display("{pos} is a block")]
    BlockCell {
        /// Requested position.
        pos: Position,
    },
    /// Entries must be a single ASCII letter or digit.
    #[display("{ch:?} is not a valid entry")]
    InvalidCharacter {
        /// Rejected character.
        ch: char,
    },
}

/// A crossword grid built from a solution layout.
///
/// The grid owns every cell in row-major order and two [`WordList`]s, one per
/// direction. Word segmentation and numbering are derived once from the solution;
/// afterwards only entries and wrong-flags change.
///
/// # Examples
///
/// ```
/// use cursewords_core::{Direction, Grid, Position, PuzzleData};
///
/// let data = PuzzleData::from_rows("", "", &["CAT", "ARE", "TEN"]);
/// let mut grid = Grid::load(&data).unwrap();
///
/// let first_down = grid.word_at(Position::new(0, 0), Direction::Down).unwrap();
/// assert_eq!(first_down.len(), 3);
///
/// grid.set_entry(Position::new(0, 0), 'c').unwrap();
/// assert!(grid.is_correct(Position::new(0, 0)));
/// assert!(!grid.is_complete());
/// assert_eq!(grid.serialize(), "C--------");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
    across: WordList,
    down: WordList,
    numbered: Vec<Position>,
}

impl Grid {
    /// Builds a grid from decoded puzzle data, applying its fill.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if the dimensions, solution or fill are inconsistent,
    /// or if the puzzle has no letter cells.
    pub fn load(data: &PuzzleData) -> Result<Self, PuzzleError> {
        let mut grid = Self::from_solution(data.width, data.height, &data.solution)?;
        grid.deserialize(&data.fill)?;
        Ok(grid)
    }

    /// Builds an empty grid from a row-major solution string.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if the dimensions are zero, the solution length does not
    /// match them, a solution character is invalid, or no cell is a letter cell.
    pub fn from_solution(width: u8, height: u8, solution: &str) -> Result<Self, PuzzleError> {
        if width == 0 || height == 0 {
            return Err(PuzzleError::EmptyDimensions { width, height });
        }
        let expected = usize::from(width) * usize::from(height);
        let actual = solution.chars().count();
        if actual != expected {
            return Err(PuzzleError::LengthMismatch {
                field: PuzzleField::Solution,
                expected,
                actual,
            });
        }

        let cells = solution
            .chars()
            .enumerate()
            .map(|(index, ch)| match ch {
                BLOCK_CHAR => Ok(Cell::block()),
                ch if ch.is_ascii_alphanumeric() => Ok(Cell::letter(ch.to_ascii_uppercase())),
                ch => Err(PuzzleError::InvalidSolution {
                    pos: Position::from_index(index, width),
                    ch,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if !cells.iter().any(Cell::is_letter) {
            return Err(PuzzleError::NoLetterCells);
        }

        let is_letter = |pos: Position| cells[pos.index(width)].is_letter();
        let across = WordList::build(Direction::Across, width, height, is_letter);
        let down = WordList::build(Direction::Down, width, height, is_letter);

        let mut grid = Self {
            width,
            height,
            cells,
            across,
            down,
            numbered: Vec::new(),
        };
        grid.number();
        Ok(grid)
    }

    /// Assigns clue numbers in one row-major pass.
    ///
    /// A letter cell receives the next number (starting at 1) when it starts an across
    /// or a down word of at least two cells. Single-cell runs are still words for
    /// navigation, but they are never clued, so they do not consume a number.
    pub fn number(&mut self) {
        self.numbered.clear();
        for index in 0..self.cells.len() {
            let starts_word = Direction::ALL.into_iter().any(|direction| {
                let words = self.words(direction);
                words.slot_at(index).is_some_and(|slot| {
                    slot.offset() == 0 && words.as_slice()[slot.word_index()].len() >= 2
                })
            });
            let number = if starts_word {
                self.numbered.push(Position::from_index(index, self.width));
                Some(u16::try_from(self.numbered.len()).expect("cell count fits in u16"))
            } else {
                None
            };
            self.cells[index].set_number(number);
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the cell at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.cells[pos.index(self.width)])
        } else {
            None
        }
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        self.get(pos)
            .unwrap_or_else(|| panic!("{pos} is outside the {}x{} grid", self.width, self.height))
    }

    /// Returns every position with its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (Position::from_index(index, self.width), cell))
    }

    /// Returns the words of `direction`.
    #[must_use]
    pub fn words(&self, direction: Direction) -> &WordList {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Returns the across words in row-major scan order.
    #[must_use]
    pub fn across_words(&self) -> &[Word] {
        self.across.as_slice()
    }

    /// Returns the down words in column-major scan order.
    #[must_use]
    pub fn down_words(&self) -> &[Word] {
        self.down.as_slice()
    }

    /// Returns the down words ordered by start row, then start column.
    pub fn down_words_grouped(&self) -> impl DoubleEndedIterator<Item = &Word> + ExactSizeIterator {
        self.down.in_numbering_order()
    }

    /// Returns where `pos` sits among the words of `direction`.
    ///
    /// Returns `None` for blocks and positions outside the grid.
    #[must_use]
    pub fn slot(&self, pos: Position, direction: Direction) -> Option<Slot> {
        if !self.contains(pos) {
            return None;
        }
        self.words(direction).slot_at(pos.index(self.width))
    }

    /// Returns the word of `direction` containing `pos`.
    #[must_use]
    pub fn word_at(&self, pos: Position, direction: Direction) -> Option<&Word> {
        let slot = self.slot(pos, direction)?;
        self.words(direction).get(slot.word_index())
    }

    /// Returns the position of the cell numbered `number`.
    #[must_use]
    pub fn position_of_number(&self, number: u16) -> Option<Position> {
        let index = usize::from(number).checked_sub(1)?;
        self.numbered.get(index).copied()
    }

    /// Returns `true` if the entry at `pos` equals its solution, or the cell is a block.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn is_correct(&self, pos: Position) -> bool {
        self.cell(pos).is_correct()
    }

    /// Returns `true` if every letter cell holds its solution.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Cell::is_correct)
    }

    /// Returns `true` if any letter cell is still empty.
    #[must_use]
    pub fn has_blank(&self) -> bool {
        self.cells.iter().any(Cell::is_blank)
    }

    /// Flags every filled, incorrect letter cell as wrong.
    ///
    /// Entries are left untouched and existing flags are never cleared; flags go
    /// away only when the cell is edited. Returns the number of flagged cells.
    pub fn check(&mut self) -> usize {
        self.cells
            .iter_mut()
            .map(Cell::mark_if_wrong)
            .filter(|&wrong| wrong)
            .count()
    }

    /// Applies [`check`](Self::check) to the given positions only.
    ///
    /// Positions outside the grid and blocks are ignored.
    pub fn check_cells<I>(&mut self, positions: I) -> usize
    where
        I: IntoIterator<Item = Position>,
    {
        let mut wrong = 0;
        for pos in positions {
            if !self.contains(pos) {
                continue;
            }
            if self.cells[pos.index(self.width)].mark_if_wrong() {
                wrong += 1;
            }
        }
        wrong
    }

    /// Writes `ch` (upper-cased) into the letter cell at `pos` and clears its wrong-flag.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] if `pos` is outside the grid or a block, or `ch` is not
    /// an ASCII letter or digit.
    pub fn set_entry(&mut self, pos: Position, ch: char) -> Result<(), EntryError> {
        if !ch.is_ascii_alphanumeric() {
            return Err(EntryError::InvalidCharacter { ch });
        }
        self.letter_cell_mut(pos)?
            .set_entry(Some(ch.to_ascii_uppercase()));
        Ok(())
    }

    /// Empties the letter cell at `pos` and clears its wrong-flag.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError`] if `pos` is outside the grid or a block.
    pub fn clear_entry(&mut self, pos: Position) -> Result<(), EntryError> {
        self.letter_cell_mut(pos)?.set_entry(None);
        Ok(())
    }

    fn letter_cell_mut(&mut self, pos: Position) -> Result<&mut Cell, EntryError> {
        if !self.contains(pos) {
            return Err(EntryError::OutOfBounds { pos });
        }
        let cell = &mut self.cells[pos.index(self.width)];
        if cell.is_block() {
            return Err(EntryError::BlockCell { pos });
        }
        Ok(cell)
    }

    /// Returns the fill state as a row-major string.
    ///
    /// Blocks are `.`, empty cells `-`, and filled cells their entry.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.cells.iter().map(Cell::fill_char).collect()
    }

    /// Replaces every entry from a row-major fill string.
    ///
    /// The string is validated as a whole before any cell changes. Wrong-flags are
    /// reset, as for a freshly loaded grid. Characters at block positions are ignored
    /// as long as they are valid fill characters.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::LengthMismatch`] if the string does not have one character
    /// per cell, and [`PuzzleError::InvalidFill`] for an invalid character or a `.`
    /// over a letter cell.
    pub fn deserialize(&mut self, fill: &str) -> Result<(), PuzzleError> {
        let expected = self.cells.len();
        let actual = fill.chars().count();
        if actual != expected {
            return Err(PuzzleError::LengthMismatch {
                field: PuzzleField::Fill,
                expected,
                actual,
            });
        }

        let entries = fill
            .chars()
            .zip(&self.cells)
            .enumerate()
            .map(|(index, (ch, cell))| match ch {
                BLANK_CHAR => Ok(None),
                BLOCK_CHAR if cell.is_block() => Ok(None),
                ch if ch.is_ascii_alphanumeric() => Ok(Some(ch.to_ascii_uppercase())),
                ch => Err(PuzzleError::InvalidFill {
                    pos: Position::from_index(index, self.width),
                    ch,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (cell, entry) in self.cells.iter_mut().zip(entries) {
            if cell.is_letter() {
                cell.set_entry(entry);
            }
        }
        Ok(())
    }
}
