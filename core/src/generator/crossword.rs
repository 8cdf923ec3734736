use alloc::vec::Vec;
use smallvec::SmallVec;

use super::*;

/// Places words across and down, letting them cross on shared letters.
///
/// Clue numbers follow placement order, not grid position.
#[derive(Clone, Debug)]
pub struct CrosswordGenerator<S = SeededSource> {
    source: S,
}

impl CrosswordGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_source(SeededSource::new(seed))
    }
}

impl<S: RandomSource> CrosswordGenerator<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: RandomSource> PuzzleGenerator for CrosswordGenerator<S> {
    type Config = CrosswordConfig;
    type Puzzle = Crossword;

    fn generate(
        mut self,
        config: &CrosswordConfig,
        entries: &[VocabEntry],
    ) -> (Crossword, GenerationReport) {
        let mut placer = Placer::new(config.size);
        let mut words: Vec<PlacedWord> = Vec::new();
        let mut report = GenerationReport::default();
        let max_len = config.max_word_len();

        for entry in entries {
            if words.len() >= config.max_words {
                break;
            }
            report.requested += 1;
            let text = normalize_word(&entry.text);
            let letters: Vec<char> = text.chars().collect();
            if letters.is_empty() || letters.len() > max_len {
                report.drop_word(text, "does not fit the grid");
                continue;
            }

            match placer.place(&letters, &Direction::STRAIGHT, &mut self.source) {
                Some((start, direction)) => {
                    let number = words.len() as u16 + 1;
                    log::debug!("Placed {number}. {text:?} at {start:?} going {direction:?}");
                    words.push(PlacedWord {
                        id: words.len() as WordId,
                        text,
                        clue: entry.translation.clone(),
                        start,
                        direction,
                        clue_number: Some(number),
                        resolved: false,
                    });
                    report.placed += 1;
                }
                None => report.drop_word(text, "no free placement"),
            }
        }

        let letters = placer.into_letters();
        let mut grid = letters.map(|&letter| CrosswordCell {
            letter,
            clue_number: None,
            members: SmallVec::new(),
            user_input: None,
        });
        for word in &words {
            for (offset, pos) in word.cells().enumerate() {
                let cell = &mut grid[pos.to_nd_index()];
                cell.members.push(word.id);
                if offset == 0 && cell.clue_number.is_none() {
                    cell.clue_number = word.clue_number;
                }
            }
        }

        (Crossword::new(grid, words), report)
    }
}
