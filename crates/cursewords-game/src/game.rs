use std::fmt;

use cursewords_core::{Direction, EntryError, Grid, Position, PuzzleData, PuzzleError};

use crate::{BlankPolicy, Cursor, EntryMode, WordLanding, WrapPolicy};

/// A cursor movement requested by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Motion {
    /// One cell forward in the active direction.
    Advance,
    /// One cell backward in the active direction.
    Retreat,
    /// The next word that still has a blank.
    NextWord,
    /// The previous word that still has a blank.
    PreviousWord,
    /// Toggle across/down.
    SwitchDirection,
    /// Switch to a specific direction.
    SetDirection(Direction),
}

/// Which cells a check covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum CheckScope {
    /// The cell under the cursor.
    #[display("square")]
    Square,
    /// The word under the cursor.
    #[display("word")]
    Word,
    /// Every cell.
    #[display("puzzle")]
    Puzzle,
}

/// The clue for the word under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentClue<'a> {
    /// Clue number.
    pub number: u16,
    /// Direction of the clued word.
    pub direction: Direction,
    /// Clue text.
    pub text: &'a str,
}

impl fmt::Display for CurrentClue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Across => "ACROSS",
            Direction::Down => "DOWN",
        };
        write!(f, "{} {direction}: {}", self.number, self.text)
    }
}

/// A crossword solving session.
///
/// Owns the grid, the cursor and the puzzle metadata, and implements the player's
/// commands on top of [`Cursor`] navigation: typing advances through the current
/// word, backspace retreats through it, and checks flag wrong entries.
///
/// # Example
///
/// ```
/// use cursewords_core::PuzzleData;
/// use cursewords_game::Game;
///
/// let data = PuzzleData::from_rows("Tiny", "Me", &["AB", "CD"]);
/// let mut game = Game::new(data).unwrap();
///
/// for ch in ['a', 'b', 'c', 'd'] {
///     game.type_letter(ch).unwrap();
/// }
/// assert!(game.is_complete());
/// assert_eq!(game.to_puzzle_data().fill, "ABCD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: PuzzleData,
    grid: Grid,
    cursor: Cursor,
}

impl Game {
    /// Creates a game from decoded puzzle data, with the cursor on the first across word.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] if the data does not describe a valid grid.
    pub fn new(puzzle: PuzzleData) -> Result<Self, PuzzleError> {
        let grid = Grid::load(&puzzle)?;
        let cursor = Cursor::new(&grid);
        Ok(Self {
            puzzle,
            grid,
            cursor,
        })
    }

    /// Returns the puzzle title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.puzzle.title
    }

    /// Returns the puzzle author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.puzzle.author
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cursor.
    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Returns the positions of the word under the cursor.
    #[must_use]
    pub fn current_word(&self) -> &[Position] {
        self.cursor.current_word(&self.grid).positions()
    }

    /// Returns the clue of the word under the cursor, if the puzzle has one.
    #[must_use]
    pub fn current_clue(&self) -> Option<CurrentClue<'_>> {
        let direction = self.cursor.direction();
        let start = self.cursor.current_word(&self.grid).start();
        let number = self.grid.cell(start).number()?;
        let clue = self.puzzle.clues.get(direction, number)?;
        Some(CurrentClue {
            number,
            direction,
            text: &clue.text,
        })
    }

    /// Returns `true` if every letter cell holds its solution.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Writes `ch` into the cell under the cursor and moves on.
    ///
    /// Typing over a filled cell moves to the next cell of the word whatever its state;
    /// typing into a blank cell moves to the next blank, wrapping within the word and
    /// then continuing with the next word that has a blank.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::InvalidCharacter`] if `ch` is not an ASCII letter or digit.
    /// The grid and the cursor are unchanged in that case.
    pub fn type_letter(&mut self, ch: char) -> Result<(), EntryError> {
        let pos = self.cursor.position();
        let mode = if self.grid.cell(pos).is_filled() {
            EntryMode::Overwrite
        } else {
            EntryMode::Insert
        };
        self.grid.set_entry(pos, ch)?;
        self.cursor
            .advance_within_word(&self.grid, mode, WrapPolicy::Wrap);
        Ok(())
    }

    /// Clears the cell under the cursor without moving.
    pub fn delete(&mut self) {
        self.clear_current();
    }

    /// Clears the cell under the cursor, first stepping back if it is already blank.
    pub fn backspace(&mut self) {
        if self.grid.cell(self.cursor.position()).is_blank() {
            self.cursor
                .retreat_within_word(&self.grid, WordLanding::End, BlankPolicy::Ignore);
        }
        self.clear_current();
    }

    fn clear_current(&mut self) {
        self.grid
            .clear_entry(self.cursor.position())
            .expect("cursor always rests on a letter cell");
    }

    /// Moves the cursor.
    pub fn apply_motion(&mut self, motion: Motion) {
        let grid = &self.grid;
        match motion {
            Motion::Advance => self.cursor.advance(grid),
            Motion::Retreat => self.cursor.retreat(grid),
            Motion::NextWord => self
                .cursor
                .advance_to_next_word(grid, BlankPolicy::PreferBlank),
            Motion::PreviousWord => self.cursor.retreat_to_previous_word(
                grid,
                WordLanding::Start,
                BlankPolicy::PreferBlank,
            ),
            Motion::SwitchDirection => self.cursor.switch_direction(None),
            Motion::SetDirection(direction) => self.cursor.switch_direction(Some(direction)),
        }
    }

    /// Jumps to the cell numbered `number`. Returns `false` if there is none.
    pub fn go_to_numbered_square(&mut self, number: u16) -> bool {
        let moved = self.cursor.go_to_numbered_square(&self.grid, number);
        if !moved {
            log::debug!("no square numbered {number}");
        }
        moved
    }

    /// Flags wrong entries within `scope`. Returns the number of flagged cells.
    pub fn check(&mut self, scope: CheckScope) -> usize {
        let wrong = match scope {
            CheckScope::Square => self.grid.check_cells([self.cursor.position()]),
            CheckScope::Word => {
                let word = self.current_word().to_vec();
                self.grid.check_cells(word)
            }
            CheckScope::Puzzle => self.grid.check(),
        };
        log::debug!("checked {scope}: {wrong} wrong");
        wrong
    }

    /// Returns the puzzle data with its fill replaced by the current entries.
    #[must_use]
    pub fn to_puzzle_data(&self) -> PuzzleData {
        self.puzzle.with_fill(self.grid.serialize())
    }
}
