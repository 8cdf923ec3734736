use alloc::{string::String, vec::Vec};
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosswordCell {
    /// Solution letter, `None` for a blocked cell.
    pub letter: Option<char>,
    pub clue_number: Option<u16>,
    /// Words running through this cell.
    pub members: SmallVec<[WordId; 2]>,
    pub user_input: Option<char>,
}

impl CrosswordCell {
    pub fn is_blocked(&self) -> bool {
        self.letter.is_none()
    }

    pub fn is_correct(&self) -> bool {
        self.letter.is_some() && self.user_input == self.letter
    }
}

/// Entry in the across or down clue column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u16,
    pub word: WordId,
    pub text: String,
    pub length: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crossword {
    grid: Array2<CrosswordCell>,
    words: Vec<PlacedWord>,
}

impl Crossword {
    pub(crate) fn new(grid: Array2<CrosswordCell>, words: Vec<PlacedWord>) -> Self {
        Self { grid, words }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.grid.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(PuzzleError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&CrosswordCell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.grid[coords.to_nd_index()])
    }

    pub fn cells(&self) -> impl Iterator<Item = &CrosswordCell> {
        self.grid.iter()
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub fn word(&self, id: WordId) -> Result<&PlacedWord> {
        self.words
            .get(usize::from(id))
            .ok_or(PuzzleError::UnknownWord(id))
    }

    pub fn clues_across(&self) -> Vec<Clue> {
        self.clues(Direction::Horizontal)
    }

    pub fn clues_down(&self) -> Vec<Clue> {
        self.clues(Direction::Vertical)
    }

    fn clues(&self, direction: Direction) -> Vec<Clue> {
        self.words
            .iter()
            .filter(|word| word.direction == direction)
            .map(|word| Clue {
                number: word.clue_number.unwrap_or_default(),
                word: word.id,
                text: word.clue.clone(),
                length: word.len(),
            })
            .collect()
    }

    /// Whether every cell of the word holds its solution letter.
    pub fn check_word(&self, id: WordId) -> Result<bool> {
        let word = self.word(id)?;
        Ok(word
            .cells()
            .all(|pos| self.grid[pos.to_nd_index()].is_correct()))
    }

    fn is_locked(&self, coords: Coord2) -> bool {
        self.grid[coords.to_nd_index()]
            .members
            .iter()
            .any(|&id| self.words[usize::from(id)].resolved)
    }

    /// Writes the player's letters, `_` for empty cells and `#` for blocked ones.
    pub fn render_input(&self) -> String {
        self.render(|cell| cell.user_input.unwrap_or('_'))
    }

    fn render(&self, letter: impl Fn(&CrosswordCell) -> char) -> String {
        let mut out = String::new();
        for row in self.grid.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    out.push(' ');
                }
                out.push(if cell.is_blocked() { '#' } else { letter(cell) });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|cell| cell.letter.unwrap_or('#')))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellInputOutcome {
    NoChange,
    Entered,
    /// The input completed these words.
    Solved(SmallVec<[WordId; 2]>),
    Completed { score: u32 },
}

impl CellInputOutcome {
    pub fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One crossword game in progress.
#[derive(Clone, Debug)]
pub struct CrosswordSession {
    puzzle: Crossword,
    state: PuzzleState,
}

impl CrosswordSession {
    pub fn new(puzzle: Crossword, config: &CrosswordConfig, rule: ScoreRule) -> Self {
        let state = PuzzleState::new(puzzle.words().len(), config.time_limit_secs, rule);
        Self { puzzle, state }
    }

    pub fn puzzle(&self) -> &Crossword {
        &self.puzzle
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Sets or clears the player's letter in a cell. Letters are uppercased.
    /// Other characters are only taken when they are the cell's solution, so
    /// answers like `T-SHIRT` can be typed in full.
    pub fn apply_cell_input(
        &mut self,
        coords: Coord2,
        input: Option<char>,
    ) -> Result<CellInputOutcome> {
        let coords = self.puzzle.validate_coords(coords)?;
        if self.puzzle.grid[coords.to_nd_index()].is_blocked() {
            return Err(PuzzleError::BlockedCell);
        }
        if self.is_finished() || self.puzzle.is_locked(coords) {
            return Ok(CellInputOutcome::NoChange);
        }

        let solution = self.puzzle.grid[coords.to_nd_index()].letter;
        let input = match input {
            Some(c) if c.is_alphabetic() => c.to_uppercase().next(),
            Some(c) if Some(c) == solution => Some(c),
            Some(_) => return Ok(CellInputOutcome::NoChange),
            None => None,
        };
        Ok(self.write(coords, input))
    }

    /// Fills in the first wrong or empty cell of a word. Counts as a hint.
    pub fn reveal_letter(&mut self, id: WordId) -> Result<CellInputOutcome> {
        let word = self.puzzle.word(id)?;
        if self.is_finished() {
            return Ok(CellInputOutcome::NoChange);
        }
        let Some(pos) = word
            .cells()
            .find(|&pos| !self.puzzle.grid[pos.to_nd_index()].is_correct())
        else {
            return Ok(CellInputOutcome::NoChange);
        };

        self.state.use_hint();
        let letter = self.puzzle.grid[pos.to_nd_index()].letter;
        Ok(self.write(pos, letter))
    }

    pub fn check_word(&self, id: WordId) -> Result<bool> {
        self.puzzle.check_word(id)
    }

    pub fn tick(&mut self) -> PuzzleEvent {
        self.state.tick()
    }

    pub fn cancel_timer(&mut self) {
        self.state.cancel_timer();
    }

    fn write(&mut self, coords: Coord2, input: Option<char>) -> CellInputOutcome {
        let cell = &mut self.puzzle.grid[coords.to_nd_index()];
        if cell.user_input == input {
            return CellInputOutcome::NoChange;
        }
        cell.user_input = input;
        let members = cell.members.clone();

        let mut solved = SmallVec::new();
        for id in members {
            let solved_now = self.puzzle.check_word(id) == Ok(true)
                && self.puzzle.words[usize::from(id)].resolve();
            if solved_now {
                log::debug!("Solved word {id} ({:?})", self.puzzle.words[usize::from(id)].text);
                solved.push(id);
                if let PuzzleEvent::Completed { score } = self.state.resolve() {
                    return CellInputOutcome::Completed { score };
                }
            }
        }

        if solved.is_empty() {
            CellInputOutcome::Entered
        } else {
            CellInputOutcome::Solved(solved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    /// APPLE down from (0, 4) crossing PEAR across at (1, 4).
    ///
    /// ```text
    /// # # # # A
    /// # P E A P
    /// # # # # P
    /// # # # # L
    /// # # # # E
    /// ```
    fn fixture() -> Crossword {
        let mut grid = Array2::from_elem(
            (5, 5),
            CrosswordCell {
                letter: None,
                clue_number: None,
                members: SmallVec::new(),
                user_input: None,
            },
        );
        let words = vec![
            PlacedWord {
                id: 0,
                text: "APPLE".to_string(),
                clue: "manzana".to_string(),
                start: (0, 4),
                direction: Direction::Vertical,
                clue_number: Some(1),
                resolved: false,
            },
            PlacedWord {
                id: 1,
                text: "PEAP".to_string(),
                clue: "not a word".to_string(),
                start: (1, 1),
                direction: Direction::Horizontal,
                clue_number: Some(2),
                resolved: false,
            },
        ];
        for word in &words {
            for (offset, (pos, letter)) in word.cells().zip(word.text.chars()).enumerate() {
                let cell = &mut grid[pos.to_nd_index()];
                cell.letter = Some(letter);
                cell.members.push(word.id);
                if offset == 0 {
                    cell.clue_number = word.clue_number;
                }
            }
        }
        Crossword::new(grid, words)
    }

    fn session(time_limit_secs: u32) -> CrosswordSession {
        let config = CrosswordConfig::new((5, 5), 2, time_limit_secs);
        CrosswordSession::new(fixture(), &config, ScoreRule::WORD_LIST)
    }

    fn type_word(game: &mut CrosswordSession, cells: &[Coord2], text: &str) -> CellInputOutcome {
        let mut last = CellInputOutcome::NoChange;
        for (&pos, letter) in cells.iter().zip(text.chars()) {
            last = game.apply_cell_input(pos, Some(letter)).unwrap();
        }
        last
    }

    #[test]
    fn display_shows_solution_and_blocks() {
        let puzzle = fixture();
        assert_eq!(
            puzzle.to_string(),
            "# # # # A\n# P E A P\n# # # # P\n# # # # L\n# # # # E\n"
        );
        assert!(puzzle.render_input().starts_with("# # # # _\n"));
    }

    #[test]
    fn clue_columns_split_by_direction() {
        let puzzle = fixture();
        assert_eq!(puzzle.clues_down().len(), 1);
        assert_eq!(puzzle.clues_across()[0].number, 2);
        assert_eq!(puzzle.clues_across()[0].length, 4);
    }

    #[test]
    fn solving_words_completes_puzzle() {
        let mut game = session(100);
        let down = [(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)];
        let across = [(1, 1), (1, 2), (1, 3)];

        let outcome = type_word(&mut game, &down, "apple");
        assert_eq!(outcome, CellInputOutcome::Solved([0].into_iter().collect()));
        assert!(game.check_word(0).unwrap());
        assert!(!game.check_word(1).unwrap());

        let outcome = type_word(&mut game, &across, "PEA");
        assert_eq!(outcome, CellInputOutcome::Completed { score: 400 });
        assert_eq!(game.state().status(), PuzzleStatus::Complete);
        assert_eq!(game.apply_cell_input((1, 1), Some('X')).unwrap(), CellInputOutcome::NoChange);
    }

    #[test]
    fn shared_cell_can_solve_two_words() {
        let mut game = session(0);
        type_word(&mut game, &[(0, 4), (2, 4), (3, 4), (4, 4)], "APLE");
        type_word(&mut game, &[(1, 1), (1, 2), (1, 3)], "PEA");

        let outcome = game.apply_cell_input((1, 4), Some('p')).unwrap();
        assert_eq!(outcome, CellInputOutcome::Completed { score: 200 });
    }

    #[test]
    fn solved_words_lock_their_cells() {
        let mut game = session(0);
        type_word(&mut game, &[(0, 4), (1, 4), (2, 4), (3, 4), (4, 4)], "APPLE");
        assert_eq!(game.apply_cell_input((2, 4), None).unwrap(), CellInputOutcome::NoChange);
        assert_eq!(game.puzzle().cell_at((2, 4)).unwrap().user_input, Some('P'));
    }

    #[test]
    fn rejects_blocked_and_out_of_range_cells() {
        let mut game = session(0);
        assert_eq!(game.apply_cell_input((0, 0), Some('A')), Err(PuzzleError::BlockedCell));
        assert_eq!(game.apply_cell_input((9, 0), Some('A')), Err(PuzzleError::InvalidCoords));
        assert_eq!(game.apply_cell_input((0, 4), Some('1')), Ok(CellInputOutcome::NoChange));
    }

    #[test]
    fn punctuation_in_answers_can_be_typed() {
        let config = CrosswordConfig::new((9, 9), 1, 0);
        let entries = [VocabEntry::new("t-shirt", "camiseta")];
        let (puzzle, _) = CrosswordGenerator::new(4).generate(&config, &entries);
        let cells: Vec<_> = puzzle.words()[0].cells().collect();
        let mut game = CrosswordSession::new(puzzle, &config, ScoreRule::WORD_LIST);

        assert_eq!(game.apply_cell_input(cells[1], Some('x')).unwrap(), CellInputOutcome::Entered);
        game.apply_cell_input(cells[1], None).unwrap();
        assert_eq!(game.apply_cell_input(cells[0], Some('-')).unwrap(), CellInputOutcome::NoChange);

        let outcome = type_word(&mut game, &cells, "t-shirt");
        assert_eq!(outcome, CellInputOutcome::Completed { score: 100 });
    }

    #[test]
    fn reveal_letter_fills_next_gap_and_costs_a_hint() {
        let mut game = session(0);
        game.apply_cell_input((1, 1), Some('P')).unwrap();

        assert_eq!(game.reveal_letter(1).unwrap(), CellInputOutcome::Entered);
        assert_eq!(game.puzzle().cell_at((1, 2)).unwrap().user_input, Some('E'));
        assert_eq!(game.state().hints_used(), 1);
        assert_eq!(game.reveal_letter(7), Err(PuzzleError::UnknownWord(7)));
    }

    #[test]
    fn timeout_blocks_input() {
        let mut game = session(1);
        assert_eq!(game.tick(), PuzzleEvent::TimedOut { score: 0 });
        assert_eq!(game.apply_cell_input((0, 4), Some('A')).unwrap(), CellInputOutcome::NoChange);
    }
}
