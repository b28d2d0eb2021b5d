//! Cursor navigation and solving sessions for crossword grids.
//!
//! This crate sits between the data model of [`cursewords_core`] and a user
//! interface. It is independent of any terminal or input library.
//!
//! # Overview
//!
//! - [`Cursor`]: the `(position, direction)` state machine. It steps through
//!   letter cells, moves inside the current word and hops between words in
//!   numbering order. The policy enums [`EntryMode`], [`WrapPolicy`], [`WordLanding`]
//!   and [`BlankPolicy`] select between the variants of each movement.
//! - [`Game`]: a solving session that owns the grid and the cursor and maps player
//!   commands (typing, deleting, [`Motion`]s, [`CheckScope`]d checks) onto them.
//!
//! # Examples
//!
//! ```
//! use cursewords_core::{Direction, Position, PuzzleData};
//! use cursewords_game::{Game, Motion};
//!
//! let data = PuzzleData::from_rows("Sample", "Anonymous", &["CAT", "ARE", "TEN"]);
//! let mut game = Game::new(data).unwrap();
//!
//! game.type_letter('c').unwrap();
//! assert_eq!(game.cursor().position(), Position::new(1, 0));
//!
//! game.apply_motion(Motion::SwitchDirection);
//! assert_eq!(game.cursor().direction(), Direction::Down);
//! assert_eq!(game.current_word().len(), 3);
//! ```

mod cursor;
mod game;

pub use self::{
    cursor::{BlankPolicy, Cursor, EntryMode, WordLanding, WrapPolicy},
    game::{CheckScope, CurrentClue, Game, Motion},
};
