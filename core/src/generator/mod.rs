use alloc::{string::String, vec::Vec};
use ndarray::Array2;

use crate::*;

pub use crossword::*;
pub use word_search::*;

mod crossword;
mod word_search;

pub trait PuzzleGenerator {
    type Config;
    type Puzzle;

    fn generate(
        self,
        config: &Self::Config,
        entries: &[VocabEntry],
    ) -> (Self::Puzzle, GenerationReport);
}

/// Random placement attempts spent on a word before it is dropped.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Non-fatal diagnostic returned alongside a generated puzzle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub requested: usize,
    pub placed: usize,
    /// Normalized text of every word that could not be placed.
    pub dropped: Vec<String>,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    fn drop_word(&mut self, text: String, reason: &str) {
        log::warn!("Dropped word {text:?}: {reason}");
        self.dropped.push(text);
    }
}

/// Working letter grid shared by the word search and crossword generators.
///
/// A cell is either still empty or holds the letter of every word crossing it.
#[derive(Clone, Debug)]
pub(crate) struct Placer {
    letters: Array2<Option<char>>,
}

impl Placer {
    pub(crate) fn new(size: Coord2) -> Self {
        Self {
            letters: Array2::from_elem(size.to_nd_index(), None),
        }
    }

    pub(crate) fn size(&self) -> Coord2 {
        let (rows, cols) = self.letters.dim();
        (rows as Coord, cols as Coord)
    }

    pub(crate) fn into_letters(self) -> Array2<Option<char>> {
        self.letters
    }

    fn fits(&self, word: &[char], direction: Direction) -> bool {
        let (rows, cols) = self.size();
        let (dr, dc) = direction.delta();
        let len = word.len();
        (dr == 0 || len <= usize::from(rows)) && (dc == 0 || len <= usize::from(cols))
    }

    fn accepts(&self, word: &[char], start: Coord2, direction: Direction) -> bool {
        word.iter().enumerate().all(|(offset, &letter)| {
            match self.letters[direction.step(start, offset).to_nd_index()] {
                None => true,
                Some(existing) => existing == letter,
            }
        })
    }

    /// Tries random anchors until the word fits without clashing, writing it on
    /// success. Returns `None` once [`PLACEMENT_ATTEMPTS`] are spent.
    pub(crate) fn place(
        &mut self,
        word: &[char],
        directions: &[Direction],
        rng: &mut impl RandomSource,
    ) -> Option<(Coord2, Direction)> {
        if word.is_empty() || !directions.iter().any(|&d| self.fits(word, d)) {
            return None;
        }

        let (rows, cols) = self.size();
        let span = word.len() - 1;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let direction = directions[rng.below(directions.len())];
            if !self.fits(word, direction) {
                continue;
            }
            let (dr, dc) = direction.delta();
            let row_choices = usize::from(rows) - usize::from(dr) * span;
            let col_choices = usize::from(cols) - usize::from(dc) * span;
            let start = (
                rng.below(row_choices) as Coord,
                rng.below(col_choices) as Coord,
            );

            if self.accepts(word, start, direction) {
                for (offset, &letter) in word.iter().enumerate() {
                    self.letters[direction.step(start, offset).to_nd_index()] = Some(letter);
                }
                return Some((start, direction));
            }
        }
        None
    }
}
