use alloc::{string::String, vec::Vec};
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSearchCell {
    pub letter: char,
    /// Set once a word covering this cell has been found.
    pub found: bool,
}

/// A filled word search grid together with the words hidden in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordSearch {
    grid: Array2<WordSearchCell>,
    words: Vec<PlacedWord>,
}

impl WordSearch {
    pub(crate) fn new(grid: Array2<WordSearchCell>, words: Vec<PlacedWord>) -> Self {
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

    pub fn cell_at(&self, coords: Coord2) -> Result<WordSearchCell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub fn cells(&self) -> impl Iterator<Item = &WordSearchCell> {
        self.grid.iter()
    }

    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|word| word.resolved).count()
    }

    /// Letters under `path`, skipping positions outside the grid.
    pub fn letters_along(&self, path: &[Coord2]) -> String {
        path.iter()
            .filter_map(|&pos| self.cell_at(pos).ok())
            .map(|cell| cell.letter)
            .collect()
    }

    /// First unfound word spelled by `path`, read forwards or backwards.
    pub fn match_path(&self, path: &[Coord2]) -> Option<WordId> {
        if path.is_empty() || path.iter().any(|&pos| self.validate_coords(pos).is_err()) {
            return None;
        }
        let forward = self.letters_along(path);
        let backward: String = forward.chars().rev().collect();

        self.words
            .iter()
            .find(|word| !word.resolved && (word.text == forward || word.text == backward))
            .map(|word| word.id)
    }

    /// Marks a word found and highlights the selected cells. Returns false if
    /// it already was found.
    pub(crate) fn mark_found(&mut self, id: WordId, path: &[Coord2]) -> bool {
        let Some(word) = self.words.get_mut(usize::from(id)) else {
            return false;
        };
        if !word.resolve() {
            return false;
        }
        for &pos in path {
            self.grid[pos.to_nd_index()].found = true;
        }
        true
    }
}

impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectionOutcome {
    /// Not a straight line, no word matched, or the puzzle is over.
    NoMatch,
    Found(WordId),
    /// The found word was the last one.
    Completed { word: WordId, score: u32 },
}

impl SelectionOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

/// One word search game in progress: grid, hidden words, drag gesture and
/// completion tracking.
#[derive(Clone, Debug)]
pub struct WordSearchSession {
    puzzle: WordSearch,
    state: PuzzleState,
    gesture: SelectionGesture,
}

impl WordSearchSession {
    pub fn new(puzzle: WordSearch, config: &WordSearchConfig, rule: ScoreRule) -> Self {
        let state = PuzzleState::new(puzzle.words().len(), config.time_limit_secs, rule);
        Self {
            puzzle,
            state,
            gesture: SelectionGesture::default(),
        }
    }

    pub fn puzzle(&self) -> &WordSearch {
        &self.puzzle
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Cells of the gesture in progress, for highlighting.
    pub fn preview(&self) -> Vec<Coord2> {
        self.gesture.path()
    }

    pub fn pointer_down(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.puzzle.validate_coords(coords)?;
        if self.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }
        Ok(self.gesture.begin(coords))
    }

    pub fn pointer_enter(&mut self, coords: Coord2) -> Result<Vec<Coord2>> {
        let coords = self.puzzle.validate_coords(coords)?;
        self.gesture.extend(coords);
        Ok(self.gesture.path())
    }

    /// Ends the gesture and checks the selected line against the word list.
    pub fn pointer_up(&mut self) -> SelectionOutcome {
        match self.gesture.finish() {
            Some((start, end)) => self.apply_selection(start, end),
            None => SelectionOutcome::NoMatch,
        }
    }

    pub fn apply_selection(&mut self, start: Coord2, end: Coord2) -> SelectionOutcome {
        if self.is_finished() {
            return SelectionOutcome::NoMatch;
        }
        let path = cells_in_line(start, end);
        let Some(id) = self.puzzle.match_path(&path) else {
            return SelectionOutcome::NoMatch;
        };
        if !self.puzzle.mark_found(id, &path) {
            return SelectionOutcome::NoMatch;
        }
        log::debug!("Found word {id} ({:?})", self.puzzle.words()[usize::from(id)].text);

        match self.state.resolve() {
            PuzzleEvent::Completed { score } => SelectionOutcome::Completed { word: id, score },
            _ => SelectionOutcome::Found(id),
        }
    }

    /// Start cell of the first word still hidden. Counts against the score.
    pub fn hint(&mut self) -> Option<Coord2> {
        if self.is_finished() {
            return None;
        }
        let start = self.puzzle.words().iter().find(|w| !w.resolved)?.start;
        self.state.use_hint();
        Some(start)
    }

    pub fn tick(&mut self) -> PuzzleEvent {
        let event = self.state.tick();
        if event.is_terminal() {
            self.gesture.cancel();
        }
        event
    }

    pub fn cancel_timer(&mut self) {
        self.state.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{string::ToString, vec};

    /// 4x4 grid with "CAT" across row 2 from column 1 and "DOG" down column 0.
    fn fixture() -> WordSearch {
        fixture_with_rows(["DXYZ", "OQRS", "GCAT", "UVWE"])
    }

    fn fixture_with_rows(rows: [&str; 4]) -> WordSearch {
        let grid = Array2::from_shape_fn((4, 4), |(r, c)| WordSearchCell {
            letter: rows[r].as_bytes()[c] as char,
            found: false,
        });
        let word = |id, text: &str, start, direction| PlacedWord {
            id,
            text: text.to_string(),
            clue: String::new(),
            start,
            direction,
            clue_number: None,
            resolved: false,
        };
        WordSearch::new(
            grid,
            vec![
                word(0, "CAT", (2, 1), Direction::Horizontal),
                word(1, "DOG", (0, 0), Direction::Vertical),
            ],
        )
    }

    fn session(time_limit_secs: u32) -> WordSearchSession {
        let config = WordSearchConfig::new((4, 4), 2, time_limit_secs);
        WordSearchSession::new(fixture(), &config, ScoreRule::WORD_LIST)
    }

    #[test]
    fn selection_finds_word_once() {
        let mut game = session(60);

        assert_eq!(game.apply_selection((2, 1), (2, 3)), SelectionOutcome::Found(0));
        assert_eq!(game.apply_selection((2, 1), (2, 3)), SelectionOutcome::NoMatch);
        assert_eq!(game.puzzle().found_count(), 1);
        assert_eq!(game.state().resolved(), 1);
        assert!(game.puzzle().cell_at((2, 2)).unwrap().found);
        assert!(!game.puzzle().cell_at((2, 0)).unwrap().found);
    }

    #[test]
    fn accidental_copy_highlights_selected_cells() {
        // the fill spells "TAC" on row 3, which reads CAT backwards
        let config = WordSearchConfig::new((4, 4), 2, 0);
        let puzzle = fixture_with_rows(["DXYZ", "OQRS", "GCAT", "TACE"]);
        let mut game = WordSearchSession::new(puzzle, &config, ScoreRule::WORD_LIST);

        assert_eq!(game.apply_selection((3, 0), (3, 2)), SelectionOutcome::Found(0));
        assert!(game.puzzle().cell_at((3, 1)).unwrap().found);
        assert!(!game.puzzle().cell_at((2, 2)).unwrap().found);
    }

    #[test]
    fn reversed_selection_matches() {
        let mut game = session(60);
        assert_eq!(game.apply_selection((2, 0), (0, 0)), SelectionOutcome::Found(1));
    }

    #[test]
    fn crooked_or_wrong_selection_is_ignored() {
        let mut game = session(60);
        assert_eq!(game.apply_selection((0, 0), (2, 3)), SelectionOutcome::NoMatch);
        assert_eq!(game.apply_selection((2, 0), (2, 3)), SelectionOutcome::NoMatch);
        assert_eq!(game.puzzle().found_count(), 0);
    }

    #[test]
    fn finding_all_words_completes_with_score() {
        let mut game = session(60);
        game.tick();
        game.apply_selection((2, 1), (2, 3));
        let outcome = game.apply_selection((0, 0), (2, 0));

        // 2 words * 100 + 59 s * 2
        assert_eq!(outcome, SelectionOutcome::Completed { word: 1, score: 318 });
        assert_eq!(game.state().status(), PuzzleStatus::Complete);
        assert_eq!(game.tick(), PuzzleEvent::NoChange);
        assert_eq!(game.state().score(), Some(318));
    }

    #[test]
    fn drag_gesture_commits_on_release() {
        let mut game = session(60);

        assert_eq!(game.pointer_down((2, 3)).unwrap(), MarkOutcome::Changed);
        assert_eq!(game.pointer_down((0, 0)).unwrap(), MarkOutcome::NoChange);
        assert_eq!(game.pointer_enter((2, 2)).unwrap(), vec![(2, 3), (2, 2)]);
        assert!(game.pointer_enter((0, 2)).unwrap().is_empty());
        game.pointer_enter((2, 1)).unwrap();
        assert_eq!(game.pointer_up(), SelectionOutcome::Found(0));
        assert!(game.preview().is_empty());
        assert_eq!(game.pointer_up(), SelectionOutcome::NoMatch);
    }

    #[test]
    fn pointer_outside_grid_is_an_error() {
        let mut game = session(60);
        assert_eq!(game.pointer_down((4, 0)), Err(PuzzleError::InvalidCoords));
    }

    #[test]
    fn timeout_scores_found_words_only() {
        let mut game = session(2);
        game.apply_selection((2, 1), (2, 3));
        assert_eq!(game.tick(), PuzzleEvent::Progressed);
        assert_eq!(game.tick(), PuzzleEvent::TimedOut { score: 100 });
        assert_eq!(game.state().status(), PuzzleStatus::TimedOut);
        assert_eq!(game.apply_selection((0, 0), (2, 0)), SelectionOutcome::NoMatch);
        assert_eq!(game.state().resolved(), 1);
    }

    #[test]
    fn hints_point_at_hidden_words_and_cost_points() {
        let mut game = session(0);
        assert_eq!(game.hint(), Some((2, 1)));
        game.apply_selection((2, 1), (2, 3));
        assert_eq!(game.hint(), Some((0, 0)));

        // 200 - 2 * 25, untimed so no bonus
        let outcome = game.apply_selection((0, 0), (2, 0));
        assert_eq!(outcome, SelectionOutcome::Completed { word: 1, score: 150 });
        assert_eq!(game.hint(), None);
    }

    #[test]
    fn cancelled_timer_stops_ticking() {
        let mut game = session(5);
        game.cancel_timer();
        assert_eq!(game.tick(), PuzzleEvent::NoChange);
        assert_eq!(game.state().time_remaining_secs(), 5);
    }
}
