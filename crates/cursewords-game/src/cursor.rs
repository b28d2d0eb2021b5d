//! The cursor navigation state machine.
//!
//! A [`Cursor`] is a `(position, direction)` pair. Every operation reads the word
//! lists of a [`Grid`] and moves the cursor along one of three orders:
//!
//! - the *flattened order* of a direction (all words of that direction concatenated in
//!   scan order), used for single steps;
//! - the *word order* of the current word, used when typing inside a word;
//! - the *numbering order* of words (across words, then down words grouped by start row),
//!   used for word-to-word hops. Hopping past the last word of one direction continues
//!   with the first word of the other direction.

use cursewords_core::{Direction, Grid, Position, Slot, Word};

/// Whether moving inside a word may land on cells that are already filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum EntryMode {
    /// Only blank cells are candidates.
    #[default]
    Insert,
    /// Any later cell is a candidate.
    Overwrite,
}

/// Whether moving inside a word may wrap around to the cells before the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum WrapPolicy {
    /// Continue with the word's first cells after its last one.
    #[default]
    Wrap,
    /// Stop at the end of the word.
    NoWrap,
}

/// Which end of a word a backward hop lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum WordLanding {
    /// The word's first cell.
    #[default]
    Start,
    /// The word's last cell.
    End,
}

/// Whether word hops prefer the nearest blank cell over the word's plain landing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum BlankPolicy {
    /// Land on the word's start or end.
    #[default]
    Ignore,
    /// Skip forward (or backward) to the first word with a blank and land on that blank.
    PreferBlank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hop {
    Next,
    Previous,
}

/// The position and direction of the solver's cursor.
///
/// The cursor never stores a reference to the grid; each operation borrows it. The
/// cursor must always rest on a letter cell of that grid. A position that is missing
/// from the word list of the cursor's direction means word segmentation is broken,
/// and every operation panics rather than continuing from an unknown state.
///
/// # Examples
///
/// ```
/// use cursewords_core::{Direction, Grid, Position, PuzzleData};
/// use cursewords_game::{BlankPolicy, Cursor};
///
/// let grid = Grid::load(&PuzzleData::from_rows("", "", &["CAT", "ARE", "TEN"])).unwrap();
/// let mut cursor = Cursor::new(&grid);
/// assert_eq!(cursor.position(), Position::new(0, 0));
///
/// cursor.advance(&grid);
/// assert_eq!(cursor.position(), Position::new(1, 0));
///
/// cursor.advance_to_next_word(&grid, BlankPolicy::Ignore);
/// assert_eq!(cursor.position(), Position::new(0, 1));
/// assert_eq!(cursor.direction(), Direction::Across);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
    direction: Direction,
}

impl Cursor {
    /// Places a cursor on the first cell of the first across word.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no across word, which [`Grid`] construction rules out.
    #[must_use]
    pub fn new(grid: &Grid) -> Self {
        let first = grid
            .across_words()
            .first()
            .expect("a loaded grid has at least one word");
        Self {
            position: first.start(),
            direction: Direction::Across,
        }
    }

    /// Creates a cursor at an explicit position and direction.
    #[must_use]
    pub fn at(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Returns the cell the cursor rests on.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the active direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Toggles between across and down, or switches to `to` if given.
    pub fn switch_direction(&mut self, to: Option<Direction>) {
        self.direction = to.unwrap_or(self.direction.toggled());
    }

    fn slot(&self, grid: &Grid) -> Slot {
        grid.slot(self.position, self.direction).unwrap_or_else(|| {
            panic!(
                "cursor position {} is not part of any {} word",
                self.position, self.direction
            )
        })
    }

    /// Returns the word containing the cursor in the active direction.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    #[must_use]
    pub fn current_word<'g>(&self, grid: &'g Grid) -> &'g Word {
        let slot = self.slot(grid);
        &grid.words(self.direction).as_slice()[slot.word_index()]
    }

    /// Moves one cell forward in the flattened order, wrapping from the last cell to the first.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    pub fn advance(&mut self, grid: &Grid) {
        let order = grid.words(self.direction).flattened();
        let index = self.slot(grid).order_index();
        self.position = order[(index + 1) % order.len()];
    }

    /// Moves one cell backward in the flattened order, wrapping from the first cell to the last.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    pub fn retreat(&mut self, grid: &Grid) {
        let order = grid.words(self.direction).flattened();
        let index = self.slot(grid).order_index();
        self.position = order[(index + order.len() - 1) % order.len()];
    }

    /// Finds the next cell to type into within the current word.
    ///
    /// Candidates are the cells after the cursor, followed by the cells before it
    /// unless `wrap` is [`WrapPolicy::NoWrap`]. In [`EntryMode::Insert`] only blank
    /// cells qualify. The cursor does not move.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    #[must_use]
    pub fn move_within_word(
        &self,
        grid: &Grid,
        mode: EntryMode,
        wrap: WrapPolicy,
    ) -> Option<Position> {
        let slot = self.slot(grid);
        let word = grid.words(self.direction).as_slice()[slot.word_index()].positions();
        let (before, rest) = word.split_at(slot.offset());
        let after = &rest[1..];
        let wrapped: &[Position] = if wrap.is_no_wrap() { &[] } else { before };

        after
            .iter()
            .chain(wrapped)
            .copied()
            .find(|&pos| mode.is_overwrite() || grid.cell(pos).is_blank())
    }

    /// Moves to [`move_within_word`](Self::move_within_word)'s candidate, or hops to the
    /// next word that still has a blank.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    pub fn advance_within_word(&mut self, grid: &Grid, mode: EntryMode, wrap: WrapPolicy) {
        match self.move_within_word(grid, mode, wrap) {
            Some(pos) => self.position = pos,
            None => self.advance_to_next_word(grid, BlankPolicy::PreferBlank),
        }
    }

    /// Moves backward inside the current word, falling back to the previous word.
    ///
    /// With [`BlankPolicy::PreferBlank`] the cursor jumps to the word's earliest blank
    /// when that is another cell. With [`BlankPolicy::Ignore`] it steps back one cell
    /// unless it is on the word's first cell. Otherwise it retreats to the previous
    /// word, landing as `landing` and `blank` direct.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    pub fn retreat_within_word(&mut self, grid: &Grid, landing: WordLanding, blank: BlankPolicy) {
        let slot = self.slot(grid);
        match blank {
            BlankPolicy::PreferBlank => {
                let earlier = self
                    .earliest_blank_in_word(grid)
                    .filter(|&pos| pos != self.position);
                if let Some(pos) = earlier {
                    self.position = pos;
                    return;
                }
            }
            BlankPolicy::Ignore => {
                if slot.offset() > 0 {
                    let word = grid.words(self.direction).as_slice()[slot.word_index()].positions();
                    self.position = word[slot.offset() - 1];
                    return;
                }
            }
        }
        self.retreat_to_previous_word(grid, landing, blank);
    }

    /// Returns the first blank cell of the current word in word order.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    #[must_use]
    pub fn earliest_blank_in_word(&self, grid: &Grid) -> Option<Position> {
        self.current_word(grid)
            .iter()
            .copied()
            .find(|&pos| grid.cell(pos).is_blank())
    }

    /// Hops to the first cell of the next word in numbering order.
    ///
    /// After the last word of the active direction the cursor switches direction and
    /// enters the other direction's first word. With [`BlankPolicy::PreferBlank`] the
    /// hop continues until it enters a word holding a blank and lands on that word's
    /// earliest blank; if the puzzle has no blank left the policy is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    pub fn advance_to_next_word(&mut self, grid: &Grid, blank: BlankPolicy) {
        self.hop_words(grid, Hop::Next, WordLanding::Start, blank);
    }

    /// Hops to the previous word in numbering order.
    ///
    /// Before the first word of the active direction the cursor switches direction and
    /// enters the other direction's last word. The cursor lands on the word's first or
    /// last cell according to `landing`; blank seeking works as in
    /// [`advance_to_next_word`](Self::advance_to_next_word), only backward.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not on a letter cell of `grid`.
    pub fn retreat_to_previous_word(
        &mut self,
        grid: &Grid,
        landing: WordLanding,
        blank: BlankPolicy,
    ) {
        self.hop_words(grid, Hop::Previous, landing, blank);
    }

    fn hop_words(&mut self, grid: &Grid, hop: Hop, landing: WordLanding, blank: BlankPolicy) {
        self.hop_word(grid, hop, landing);
        if blank.is_ignore() || !grid.has_blank() {
            return;
        }

        // One full cycle enters every word once.
        let word_count = grid.across_words().len() + grid.down_words().len();
        for _ in 0..word_count {
            if let Some(pos) = self.earliest_blank_in_word(grid) {
                self.position = pos;
                return;
            }
            self.hop_word(grid, hop, landing);
        }
    }

    fn hop_word(&mut self, grid: &Grid, hop: Hop, landing: WordLanding) {
        let words = grid.words(self.direction);
        let rank = words.numbering_rank(self.slot(grid).word_index());

        let (direction, rank) = match hop {
            Hop::Next if rank + 1 == words.len() => (self.direction.toggled(), 0),
            Hop::Next => (self.direction, rank + 1),
            Hop::Previous if rank == 0 => {
                let other = self.direction.toggled();
                (other, grid.words(other).len() - 1)
            }
            Hop::Previous => (self.direction, rank - 1),
        };

        let target = grid.words(direction);
        let word = &target.as_slice()[target.word_index_at_rank(rank)];
        self.direction = direction;
        self.position = match landing {
            WordLanding::Start => word.start(),
            WordLanding::End => word.end(),
        };
    }

    /// Jumps to the cell numbered `number`, keeping the direction.
    ///
    /// Returns `false` and leaves the cursor unchanged if no cell has that number.
    pub fn go_to_numbered_square(&mut self, grid: &Grid, number: u16) -> bool {
        match grid.position_of_number(number) {
            Some(pos) => {
                self.position = pos;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use cursewords_core::PuzzleData;
    use proptest::prelude::*;

    use super::*;

    // A B C .
    // D . E F
    // G H I J
    //
    // across (scan = numbering): [(0,0) (1,0) (2,0)] [(0,1)] [(2,1) (3,1)] [(0,2) .. (3,2)]
    // down (scan): [(0,0) (0,1) (0,2)] [(1,0)] [(1,2)] [(2,0) (2,1) (2,2)] [(3,1) (3,2)]
    // down (numbering): starts (0,0) (1,0) (2,0) (3,1) (1,2)
    fn fixture() -> Grid {
        Grid::load(&PuzzleData::from_rows("", "", &["ABC.", "D.EF", "GHIJ"])).unwrap()
    }

    fn p(x: u8, y: u8) -> Position {
        Position::new(x, y)
    }

    fn fill(grid: &mut Grid, positions: &[(u8, u8)]) {
        for &(x, y) in positions {
            grid.set_entry(p(x, y), 'Z').unwrap();
        }
    }

    fn fill_all(grid: &mut Grid) {
        let letters: Vec<_> = grid
            .cells()
            .filter(|(_, cell)| cell.is_letter())
            .map(|(pos, _)| pos)
            .collect();
        for pos in letters {
            grid.set_entry(pos, 'Z').unwrap();
        }
    }

    #[test]
    fn test_new_starts_on_first_across_cell() {
        let grid = fixture();
        let cursor = Cursor::new(&grid);
        assert_eq!(cursor.position(), p(0, 0));
        assert_eq!(cursor.direction(), Direction::Across);
    }

    #[test]
    fn test_switch_direction() {
        let mut cursor = Cursor::at(p(0, 0), Direction::Across);
        cursor.switch_direction(None);
        assert_eq!(cursor.direction(), Direction::Down);
        cursor.switch_direction(None);
        assert_eq!(cursor.direction(), Direction::Across);
        cursor.switch_direction(Some(Direction::Across));
        assert_eq!(cursor.direction(), Direction::Across);
        cursor.switch_direction(Some(Direction::Down));
        assert_eq!(cursor.direction(), Direction::Down);
        assert_eq!(cursor.position(), p(0, 0));
    }

    #[test]
    fn test_current_word_follows_direction() {
        let grid = fixture();
        let cursor = Cursor::at(p(2, 1), Direction::Across);
        assert_eq!(cursor.current_word(&grid).positions(), &[p(2, 1), p(3, 1)]);
        let cursor = Cursor::at(p(2, 1), Direction::Down);
        assert_eq!(
            cursor.current_word(&grid).positions(),
            &[p(2, 0), p(2, 1), p(2, 2)]
        );
        let cursor = Cursor::at(p(1, 2), Direction::Down);
        assert_eq!(cursor.current_word(&grid).positions(), &[p(1, 2)]);
    }

    #[test]
    #[should_panic(expected = "is not part of any across word")]
    fn test_block_position_is_an_invariant_violation() {
        let grid = fixture();
        let cursor = Cursor::at(p(1, 1), Direction::Across);
        let _ = cursor.current_word(&grid);
    }

    #[test]
    fn test_advance_and_retreat_wrap() {
        let grid = fixture();
        let mut cursor = Cursor::at(p(2, 0), Direction::Across);
        cursor.advance(&grid);
        assert_eq!(cursor.position(), p(0, 1));
        cursor.retreat(&grid);
        assert_eq!(cursor.position(), p(2, 0));

        let mut cursor = Cursor::at(p(3, 2), Direction::Across);
        cursor.advance(&grid);
        assert_eq!(cursor.position(), p(0, 0));
        cursor.retreat(&grid);
        assert_eq!(cursor.position(), p(3, 2));

        let mut cursor = Cursor::at(p(0, 2), Direction::Down);
        cursor.advance(&grid);
        assert_eq!(cursor.position(), p(1, 0));
        assert_eq!(cursor.direction(), Direction::Down);

        let mut cursor = Cursor::at(p(0, 0), Direction::Down);
        cursor.retreat(&grid);
        assert_eq!(cursor.position(), p(3, 2));
    }

    #[test]
    fn test_move_within_word_modes() {
        let mut grid = fixture();
        let cursor = Cursor::at(p(1, 2), Direction::Across);

        assert_eq!(
            cursor.move_within_word(&grid, EntryMode::Insert, WrapPolicy::Wrap),
            Some(p(2, 2))
        );

        fill(&mut grid, &[(2, 2), (3, 2)]);
        assert_eq!(
            cursor.move_within_word(&grid, EntryMode::Insert, WrapPolicy::Wrap),
            Some(p(0, 2))
        );
        assert_eq!(
            cursor.move_within_word(&grid, EntryMode::Insert, WrapPolicy::NoWrap),
            None
        );
        assert_eq!(
            cursor.move_within_word(&grid, EntryMode::Overwrite, WrapPolicy::NoWrap),
            Some(p(2, 2))
        );

        let last = Cursor::at(p(3, 2), Direction::Across);
        assert_eq!(
            last.move_within_word(&grid, EntryMode::Overwrite, WrapPolicy::NoWrap),
            None
        );
        assert_eq!(
            last.move_within_word(&grid, EntryMode::Overwrite, WrapPolicy::Wrap),
            Some(p(0, 2))
        );
    }

    #[test]
    fn test_advance_within_word_falls_through_to_next_blank_word() {
        let mut grid = fixture();
        fill(&mut grid, &[(0, 0), (1, 0), (2, 0), (0, 1)]);
        let mut cursor = Cursor::at(p(2, 0), Direction::Across);
        cursor.advance_within_word(&grid, EntryMode::Insert, WrapPolicy::Wrap);
        // [(0,1)] is full, so the hop continues to [(2,1) (3,1)].
        assert_eq!(cursor.position(), p(2, 1));
        assert_eq!(cursor.direction(), Direction::Across);
    }

    #[test]
    fn test_advance_to_next_word_switches_direction_after_last_word() {
        let grid = fixture();
        let mut cursor = Cursor::at(p(1, 2), Direction::Across);
        cursor.advance_to_next_word(&grid, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(0, 0));
        assert_eq!(cursor.direction(), Direction::Down);

        // Down words are visited in numbering order: (0,0) (1,0) (2,0) (3,1) (1,2).
        let mut starts = Vec::new();
        for _ in 0..5 {
            cursor.advance_to_next_word(&grid, BlankPolicy::Ignore);
            starts.push((cursor.position(), cursor.direction()));
        }
        assert_eq!(
            starts,
            vec![
                (p(1, 0), Direction::Down),
                (p(2, 0), Direction::Down),
                (p(3, 1), Direction::Down),
                (p(1, 2), Direction::Down),
                (p(0, 0), Direction::Across),
            ]
        );
    }

    #[test]
    fn test_retreat_to_previous_word_landing() {
        let grid = fixture();
        let mut cursor = Cursor::at(p(1, 0), Direction::Across);
        cursor.retreat_to_previous_word(&grid, WordLanding::Start, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(1, 2));
        assert_eq!(cursor.direction(), Direction::Down);

        cursor.retreat_to_previous_word(&grid, WordLanding::End, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(3, 2));
        assert_eq!(cursor.direction(), Direction::Down);

        let mut cursor = Cursor::at(p(0, 1), Direction::Down);
        cursor.retreat_to_previous_word(&grid, WordLanding::End, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(3, 2));
        assert_eq!(cursor.direction(), Direction::Across);

        let mut cursor = Cursor::at(p(0, 1), Direction::Down);
        cursor.retreat_to_previous_word(&grid, WordLanding::Start, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(0, 2));
    }

    #[test]
    fn test_blank_placement_skips_full_words() {
        let mut grid = fixture();
        fill(&mut grid, &[(0, 1), (2, 1)]);
        let mut cursor = Cursor::at(p(0, 0), Direction::Across);
        cursor.advance_to_next_word(&grid, BlankPolicy::PreferBlank);
        assert_eq!(cursor.position(), p(3, 1));

        fill(&mut grid, &[(3, 1), (0, 2), (1, 2), (2, 2), (3, 2)]);
        let mut cursor = Cursor::at(p(2, 1), Direction::Across);
        cursor.advance_to_next_word(&grid, BlankPolicy::PreferBlank);
        // Only the top row is still blank; the first down word starts there.
        assert_eq!(cursor.direction(), Direction::Down);
        assert_eq!(cursor.position(), p(0, 0));
    }

    #[test]
    fn test_blank_placement_degrades_when_grid_is_full() {
        let mut grid = fixture();
        fill_all(&mut grid);
        let mut cursor = Cursor::at(p(0, 0), Direction::Across);
        cursor.advance_to_next_word(&grid, BlankPolicy::PreferBlank);
        assert_eq!(cursor.position(), p(0, 1));

        let mut cursor = Cursor::at(p(0, 1), Direction::Across);
        cursor.retreat_to_previous_word(&grid, WordLanding::End, BlankPolicy::PreferBlank);
        assert_eq!(cursor.position(), p(2, 0));
    }

    #[test]
    fn test_blank_placement_backward() {
        let mut grid = fixture();
        fill_all(&mut grid);
        grid.clear_entry(p(1, 0)).unwrap();
        let mut cursor = Cursor::at(p(0, 2), Direction::Across);
        cursor.retreat_to_previous_word(&grid, WordLanding::End, BlankPolicy::PreferBlank);
        assert_eq!(cursor.position(), p(1, 0));
        assert_eq!(cursor.direction(), Direction::Across);
    }

    #[test]
    fn test_retreat_within_word() {
        let mut grid = fixture();
        let mut cursor = Cursor::at(p(2, 0), Direction::Across);
        cursor.retreat_within_word(&grid, WordLanding::End, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(1, 0));
        cursor.retreat_within_word(&grid, WordLanding::End, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(0, 0));
        cursor.retreat_within_word(&grid, WordLanding::End, BlankPolicy::Ignore);
        assert_eq!(cursor.position(), p(1, 2));
        assert_eq!(cursor.direction(), Direction::Down);

        fill(&mut grid, &[(0, 2), (2, 2)]);
        let mut cursor = Cursor::at(p(3, 2), Direction::Across);
        cursor.retreat_within_word(&grid, WordLanding::End, BlankPolicy::PreferBlank);
        assert_eq!(cursor.position(), p(1, 2));

        // Already on the earliest blank: fall back to the previous word's earliest blank.
        cursor.retreat_within_word(&grid, WordLanding::End, BlankPolicy::PreferBlank);
        assert_eq!(cursor.position(), p(2, 1));
    }

    #[test]
    fn test_earliest_blank_in_word() {
        let mut grid = fixture();
        let cursor = Cursor::at(p(3, 2), Direction::Across);
        assert_eq!(cursor.earliest_blank_in_word(&grid), Some(p(0, 2)));
        fill(&mut grid, &[(0, 2), (1, 2)]);
        assert_eq!(cursor.earliest_blank_in_word(&grid), Some(p(2, 2)));
        fill(&mut grid, &[(2, 2), (3, 2)]);
        assert_eq!(cursor.earliest_blank_in_word(&grid), None);
    }

    #[test]
    fn test_go_to_numbered_square() {
        let grid = fixture();
        let mut cursor = Cursor::at(p(0, 0), Direction::Down);
        assert!(cursor.go_to_numbered_square(&grid, 3));
        assert_eq!(cursor.position(), p(2, 1));
        assert_eq!(cursor.direction(), Direction::Down);

        assert!(!cursor.go_to_numbered_square(&grid, 42));
        assert_eq!(cursor.position(), p(2, 1));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1u8..=7, 1u8..=7)
            .prop_flat_map(|(width, height)| {
                let len = usize::from(width) * usize::from(height);
                (
                    Just(width),
                    Just(height),
                    prop::collection::vec(prop::bool::weighted(0.8), len),
                    prop::collection::vec(prop::bool::weighted(0.5), len),
                )
            })
            .prop_filter("needs a letter cell", |(_, _, letters, _)| {
                letters.iter().any(|&letter| letter)
            })
            .prop_map(|(width, height, letters, filled)| {
                let solution: String = letters
                    .iter()
                    .map(|&letter| if letter { 'A' } else { '.' })
                    .collect();
                let fill: String = letters
                    .iter()
                    .zip(&filled)
                    .map(|(&letter, &filled)| match (letter, filled) {
                        (false, _) => '.',
                        (true, true) => 'A',
                        (true, false) => '-',
                    })
                    .collect();
                let data = PuzzleData {
                    width,
                    height,
                    solution,
                    fill,
                    ..PuzzleData::default()
                };
                Grid::load(&data).unwrap()
            })
    }

    fn arb_grid_and_cursor() -> impl Strategy<Value = (Grid, Cursor)> {
        arb_grid().prop_flat_map(|grid| {
            let cells = grid.words(Direction::Across).flattened().to_vec();
            (
                Just(grid),
                prop::sample::select(cells),
                prop::sample::select(Direction::ALL.to_vec()),
            )
                .prop_map(|(grid, pos, direction)| (grid, Cursor::at(pos, direction)))
        })
    }

    proptest! {
        #[test]
        fn advance_then_retreat_is_identity((grid, cursor) in arb_grid_and_cursor()) {
            let mut moved = cursor;
            moved.advance(&grid);
            moved.retreat(&grid);
            prop_assert_eq!(moved, cursor);

            moved.retreat(&grid);
            moved.advance(&grid);
            prop_assert_eq!(moved, cursor);
        }

        #[test]
        fn advance_wraps_from_last_to_first((grid, cursor) in arb_grid_and_cursor()) {
            let order = grid.words(cursor.direction()).flattened();
            let mut last = Cursor::at(order[order.len() - 1], cursor.direction());
            last.advance(&grid);
            prop_assert_eq!(last.position(), order[0]);

            let mut first = Cursor::at(order[0], cursor.direction());
            first.retreat(&grid);
            prop_assert_eq!(first.position(), order[order.len() - 1]);
        }

        #[test]
        fn word_hops_cycle_through_every_word((grid, cursor) in arb_grid_and_cursor()) {
            let total = grid.across_words().len() + grid.down_words().len();
            let start_word = cursor.current_word(&grid).clone();
            let mut moved = cursor;
            for _ in 0..total {
                moved.advance_to_next_word(&grid, BlankPolicy::Ignore);
            }
            prop_assert_eq!(moved.direction(), cursor.direction());
            prop_assert_eq!(moved.current_word(&grid), &start_word);
            prop_assert_eq!(moved.position(), start_word.start());
        }

        #[test]
        fn word_hops_backward_cycle_too((grid, cursor) in arb_grid_and_cursor()) {
            let total = grid.across_words().len() + grid.down_words().len();
            let start_word = cursor.current_word(&grid).clone();
            let mut moved = cursor;
            for _ in 0..total {
                moved.retreat_to_previous_word(&grid, WordLanding::Start, BlankPolicy::Ignore);
            }
            prop_assert_eq!(moved.direction(), cursor.direction());
            prop_assert_eq!(moved.current_word(&grid), &start_word);
        }

        #[test]
        fn insert_mode_only_returns_blanks((grid, cursor) in arb_grid_and_cursor()) {
            for wrap in [WrapPolicy::Wrap, WrapPolicy::NoWrap] {
                if let Some(pos) = cursor.move_within_word(&grid, EntryMode::Insert, wrap) {
                    prop_assert!(grid.cell(pos).is_blank());
                    prop_assert_ne!(pos, cursor.position());
                }
            }
            let word = cursor.current_word(&grid);
            let offset = grid.slot(cursor.position(), cursor.direction()).unwrap().offset();
            let expected = word.positions().get(offset + 1).copied();
            prop_assert_eq!(
                cursor.move_within_word(&grid, EntryMode::Overwrite, WrapPolicy::NoWrap),
                expected
            );
        }

        #[test]
        fn blank_placement_lands_on_a_blank((grid, cursor) in arb_grid_and_cursor()) {
            let mut moved = cursor;
            moved.advance_to_next_word(&grid, BlankPolicy::PreferBlank);
            if grid.has_blank() {
                prop_assert!(grid.cell(moved.position()).is_blank());
            } else {
                prop_assert_eq!(moved.position(), moved.current_word(&grid).start());
            }
        }
    }
}
