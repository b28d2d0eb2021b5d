//! Core data structures for crossword solving.
//!
//! This crate models a crossword grid and derives everything a solver needs from
//! the solution layout alone: which cells are blocks, how letter cells group into
//! across and down words, and how word-start cells are numbered.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`Position`] (column/row pair) and [`Direction`] (across or down).
//! 2. **Cells** - [`Cell`] holds the solution, the current entry, the clue number and the
//!    wrong-flag set by a check.
//! 3. **Words** - [`Word`] is a maximal run of letter cells; [`WordList`] keeps all words of
//!    one direction together with the lookup tables used for O(1) navigation.
//! 4. **Grid** - [`Grid`] owns the cells and both word lists, evaluates correctness and
//!    converts fill state to and from its flat string form.
//! 5. **Puzzle data** - [`PuzzleData`] carries the decoded puzzle fields consumed by
//!    [`Grid::load`].
//!
//! # Examples
//!
//! ```
//! use cursewords_core::{Direction, Grid, Position, PuzzleData};
//!
//! let data = PuzzleData::from_rows("Sample", "Anonymous", &["CAT", "A.E", "TEN"]);
//! let grid = Grid::load(&data).unwrap();
//!
//! assert_eq!(grid.words(Direction::Across).len(), 4);
//! assert_eq!(grid.cell(Position::new(0, 0)).number(), Some(1));
//! assert!(grid.cell(Position::new(1, 1)).is_block());
//! assert_eq!(grid.serialize(), "----.----");
//! ```

pub mod cell;
pub mod direction;
pub mod grid;
pub mod position;
pub mod puzzle;
pub mod word;

pub use self::{
    cell::Cell,
    direction::Direction,
    grid::{EntryError, Grid},
    position::Position,
    puzzle::{Clue, Clues, PuzzleData, PuzzleError, PuzzleField},
    word::{Slot, Word, WordList},
};
