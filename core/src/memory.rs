use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Word,
    Translation,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    Hidden,
    FaceUp,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    /// Cards with the same pair index match each other.
    pub pair: usize,
    pub face: CardFace,
    pub text: String,
    pub icon: Option<String>,
    pub state: CardState,
}

/// Shuffled cards, two per vocabulary entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryDeck {
    cards: Vec<MemoryCard>,
}

impl MemoryDeck {
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }
}

/// Deals a [`MemoryDeck`]: each entry gives a word card and a translation card.
#[derive(Clone, Debug)]
pub struct MemoryDealer<S = SeededSource> {
    source: S,
}

impl MemoryDealer {
    pub fn new(seed: u64) -> Self {
        Self::with_source(SeededSource::new(seed))
    }
}

impl<S: RandomSource> MemoryDealer<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: RandomSource> PuzzleGenerator for MemoryDealer<S> {
    type Config = MemoryConfig;
    type Puzzle = MemoryDeck;

    fn generate(
        mut self,
        config: &MemoryConfig,
        entries: &[VocabEntry],
    ) -> (MemoryDeck, GenerationReport) {
        let mut cards = Vec::new();
        let mut report = GenerationReport::default();

        for (pair, entry) in entries.iter().take(config.pairs).enumerate() {
            report.requested += 1;
            report.placed += 1;
            for (face, text) in [
                (CardFace::Word, &entry.text),
                (CardFace::Translation, &entry.translation),
            ] {
                cards.push(MemoryCard {
                    pair,
                    face,
                    text: text.clone(),
                    icon: entry.icon.clone(),
                    state: CardState::Hidden,
                });
            }
        }
        if report.placed < config.pairs {
            log::warn!("Only {} of {} memory pairs available", report.placed, config.pairs);
        }

        self.source.shuffle(&mut cards);
        (MemoryDeck { cards }, report)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    NoChange,
    /// First card of a move turned up.
    Revealed,
    Matched,
    /// The two cards stay up until the next flip or [`MemoryGame::conceal_mismatch`].
    Mismatched,
    Completed { score: u32 },
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One memory match game in progress.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    cards: Vec<MemoryCard>,
    first: Option<usize>,
    mismatch: Option<(usize, usize)>,
    state: PuzzleState,
}

impl MemoryGame {
    pub fn new(deck: MemoryDeck, config: &MemoryConfig, rule: ScoreRule) -> Self {
        let state = PuzzleState::new(deck.pairs(), config.time_limit_secs, rule);
        Self {
            cards: deck.cards,
            first: None,
            mismatch: None,
            state,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn state(&self) -> PuzzleState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome> {
        if index >= self.cards.len() {
            return Err(PuzzleError::UnknownCard(index));
        }
        if self.is_finished() {
            return Ok(FlipOutcome::NoChange);
        }
        self.conceal_mismatch();
        if self.cards[index].state != CardState::Hidden {
            return Ok(FlipOutcome::NoChange);
        }
        self.cards[index].state = CardState::FaceUp;

        let Some(first) = self.first.take() else {
            self.first = Some(index);
            return Ok(FlipOutcome::Revealed);
        };

        self.state.record_move();
        if self.cards[first].pair != self.cards[index].pair {
            self.mismatch = Some((first, index));
            return Ok(FlipOutcome::Mismatched);
        }

        self.cards[first].state = CardState::Matched;
        self.cards[index].state = CardState::Matched;
        log::debug!("Matched pair {}", self.cards[index].pair);
        Ok(match self.state.resolve() {
            PuzzleEvent::Completed { score } => FlipOutcome::Completed { score },
            _ => FlipOutcome::Matched,
        })
    }

    /// Turns a mismatched pair face down again.
    pub fn conceal_mismatch(&mut self) -> MarkOutcome {
        match self.mismatch.take() {
            Some((a, b)) => {
                self.cards[a].state = CardState::Hidden;
                self.cards[b].state = CardState::Hidden;
                MarkOutcome::Changed
            }
            None => MarkOutcome::NoChange,
        }
    }

    pub fn tick(&mut self) -> PuzzleEvent {
        self.state.tick()
    }

    pub fn cancel_timer(&mut self) {
        self.state.cancel_timer();
    }
}
