use alloc::vec::Vec;
use ndarray::Array2;

use super::*;

/// Places words horizontally, vertically or diagonally, then fills the rest of
/// the grid with random letters.
#[derive(Clone, Debug)]
pub struct WordSearchGenerator<S = SeededSource> {
    source: S,
}

impl WordSearchGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_source(SeededSource::new(seed))
    }
}

impl<S: RandomSource> WordSearchGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: RandomSource> PuzzleGenerator for WordSearchGenerator<S> {
    type Config = WordSearchConfig;
    type Puzzle = WordSearch;

    fn generate(
        mut self,
        config: &WordSearchConfig,
        entries: &[VocabEntry],
    ) -> (WordSearch, GenerationReport) {
        let mut placer = Placer::new(config.size);
        let mut words = Vec::new();
        let mut report = GenerationReport::default();

        for entry in entries.iter().take(config.word_count) {
            report.requested += 1;
            let text = normalize_word(&entry.text);
            let letters: Vec<char> = text.chars().collect();

            match placer.place(&letters, &Direction::ALL, &mut self.source) {
                Some((start, direction)) => {
                    log::debug!("Placed {text:?} at {start:?} going {direction:?}");
                    words.push(PlacedWord {
                        id: words.len() as WordId,
                        text,
                        clue: entry.translation.clone(),
                        start,
                        direction,
                        clue_number: None,
                        resolved: false,
                    });
                    report.placed += 1;
                }
                None => report.drop_word(text, "no free placement"),
            }
        }

        let letters = placer.into_letters();
        let grid = Array2::from_shape_fn(letters.dim(), |index| WordSearchCell {
            letter: letters[index].unwrap_or_else(|| self.source.letter()),
            found: false,
        });

        (WordSearch::new(grid, words), report)
    }
}
