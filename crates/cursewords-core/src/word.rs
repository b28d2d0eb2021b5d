//! Word segmentation and per-direction lookup tables.

use std::{mem, slice};

use crate::{Direction, Position};

/// A maximal run of contiguous letter cells within one row or one column.
///
/// Positions are stored in reading order: left to right for across words, top to
/// bottom for down words. A word always contains at least one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    direction: Direction,
    positions: Vec<Position>,
}

impl Word {
    fn new(direction: Direction, positions: Vec<Position>) -> Self {
        debug_assert!(!positions.is_empty());
        Self {
            direction,
            positions,
        }
    }

    /// Returns the direction the word runs in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the positions of the word in reading order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Returns the first cell of the word.
    #[must_use]
    pub fn start(&self) -> Position {
        self.positions[0]
    }

    /// Returns the last cell of the word.
    #[must_use]
    pub fn end(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Returns the number of cells in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; words are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns an iterator over the positions of the word.
    pub fn iter(&self) -> slice::Iter<'_, Position> {
        self.positions.iter()
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Position;
    type IntoIter = slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Where a letter cell sits within the words of one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    word: usize,
    offset: usize,
    order: usize,
}

impl Slot {
    /// Index of the containing word in its [`WordList`] (scan order).
    #[must_use]
    pub fn word_index(self) -> usize {
        self.word
    }

    /// Index of the cell within its word.
    #[must_use]
    pub fn offset(self) -> usize {
        self.offset
    }

    /// Index of the cell in the flattened order of the direction.
    #[must_use]
    pub fn order_index(self) -> usize {
        self.order
    }
}

/// All words of one direction, with the tables used for constant-time navigation.
///
/// Words are kept in scan order: row-major for across words, column-major for down
/// words. The numbering order ranks words by their start cell in row-major order,
/// which is the order clues are numbered in. For across words both orders coincide.
///
/// The flattened order concatenates the words in scan order and visits every letter
/// cell exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    direction: Direction,
    words: Vec<Word>,
    numbering_order: Vec<usize>,
    numbering_rank: Vec<usize>,
    flattened: Vec<Position>,
    slots: Vec<Option<Slot>>,
}

impl WordList {
    /// Segments the grid into words of `direction`, splitting runs on non-letter cells.
    pub(crate) fn build(
        direction: Direction,
        width: u8,
        height: u8,
        is_letter: impl Fn(Position) -> bool,
    ) -> Self {
        let (outer, inner) = match direction {
            Direction::Across => (height, width),
            Direction::Down => (width, height),
        };

        let mut words = Vec::new();
        for o in 0..outer {
            let mut run = Vec::new();
            for i in 0..inner {
                let pos = match direction {
                    Direction::Across => Position::new(i, o),
                    Direction::Down => Position::new(o, i),
                };
                if is_letter(pos) {
                    run.push(pos);
                } else if !run.is_empty() {
                    words.push(Word::new(direction, mem::take(&mut run)));
                }
            }
            if !run.is_empty() {
                words.push(Word::new(direction, run));
            }
        }

        let mut numbering_order: Vec<usize> = (0..words.len()).collect();
        numbering_order.sort_by_key(|&i| {
            let start = words[i].start();
            (start.y(), start.x())
        });
        let mut numbering_rank = vec![0; words.len()];
        for (rank, &word) in numbering_order.iter().enumerate() {
            numbering_rank[word] = rank;
        }

        let mut flattened = Vec::new();
        let mut slots = vec![None; usize::from(width) * usize::from(height)];
        for (word_index, word) in words.iter().enumerate() {
            for (offset, &pos) in word.positions().iter().enumerate() {
                slots[pos.index(width)] = Some(Slot {
                    word: word_index,
                    offset,
                    order: flattened.len(),
                });
                flattened.push(pos);
            }
        }

        Self {
            direction,
            words,
            numbering_order,
            numbering_rank,
            flattened,
            slots,
        }
    }

    /// Returns the direction of every word in the list.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the grid has no words in this direction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words in scan order.
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Returns the word at `index` in scan order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Returns an iterator over the words in scan order.
    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Returns an iterator over the words in numbering order.
    pub fn in_numbering_order(&self) -> impl DoubleEndedIterator<Item = &Word> + ExactSizeIterator {
        self.numbering_order.iter().map(|&i| &self.words[i])
    }

    /// Returns the numbering-order rank of the word at scan index `word_index`.
    ///
    /// # Panics
    ///
    /// Panics if `word_index` is out of range.
    #[must_use]
    pub fn numbering_rank(&self, word_index: usize) -> usize {
        self.numbering_rank[word_index]
    }

    /// Returns the scan index of the word ranked `rank` in numbering order.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of range.
    #[must_use]
    pub fn word_index_at_rank(&self, rank: usize) -> usize {
        self.numbering_order[rank]
    }

    /// Returns every letter cell in flattened order.
    #[must_use]
    pub fn flattened(&self) -> &[Position] {
        &self.flattened
    }

    pub(crate) fn slot_at(&self, cell_index: usize) -> Option<Slot> {
        self.slots.get(cell_index).copied().flatten()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
