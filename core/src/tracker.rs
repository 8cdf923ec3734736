use serde::{Deserialize, Serialize};

/// How a finished puzzle is scored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRule {
    /// `resolved * word_points + time_left * time_multiplier - hints * hint_penalty`
    WordList {
        word_points: u32,
        time_multiplier: u32,
        hint_penalty: u32,
    },
    /// `base + time_left * time_multiplier - extra_moves * move_penalty`, where
    /// extra moves are those beyond one per pair.
    MemoryMatch {
        base: u32,
        time_multiplier: u32,
        move_penalty: u32,
    },
}

impl ScoreRule {
    pub const WORD_LIST: Self = Self::WordList {
        word_points: 100,
        time_multiplier: 2,
        hint_penalty: 25,
    };

    pub const MEMORY_MATCH: Self = Self::MemoryMatch {
        base: 1000,
        time_multiplier: 10,
        move_penalty: 5,
    };

    /// Never negative.
    pub fn score(&self, state: &PuzzleState) -> u32 {
        let time = u64::from(state.time_remaining_secs);
        let score = match *self {
            Self::WordList {
                word_points,
                time_multiplier,
                hint_penalty,
            } => {
                let earned = state.resolved as u64 * u64::from(word_points)
                    + time * u64::from(time_multiplier);
                earned.saturating_sub(u64::from(state.hints_used) * u64::from(hint_penalty))
            }
            Self::MemoryMatch {
                base,
                time_multiplier,
                move_penalty,
            } => {
                let extra_moves = u64::from(state.moves).saturating_sub(state.total as u64);
                (u64::from(base) + time * u64::from(time_multiplier))
                    .saturating_sub(extra_moves * u64::from(move_penalty))
            }
        };
        score.min(u64::from(u32::MAX)) as u32
    }
}

impl Default for ScoreRule {
    fn default() -> Self {
        Self::WORD_LIST
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleStatus {
    #[default]
    InProgress,
    /// Everything was resolved.
    Complete,
    /// The countdown reached zero first.
    TimedOut,
}

impl PuzzleStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete | Self::TimedOut)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PuzzleEvent {
    NoChange,
    Progressed,
    Completed { score: u32 },
    TimedOut { score: u32 },
}

impl PuzzleEvent {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed { .. } | Self::TimedOut { .. })
    }
}

/// Progress, countdown and final score of one puzzle.
///
/// Transitions are pure: each `after_*` method returns the next state and the
/// event it produced, and the `&mut` helpers apply them in place. Once a
/// terminal status is reached every transition is a no-op and the score is
/// frozen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    total: usize,
    resolved: usize,
    time_remaining_secs: u32,
    timer_running: bool,
    hints_used: u32,
    moves: u32,
    status: PuzzleStatus,
    score: Option<u32>,
    rule: ScoreRule,
}

impl PuzzleState {
    /// A `time_limit_secs` of zero starts without a countdown.
    pub fn new(total: usize, time_limit_secs: u32, rule: ScoreRule) -> Self {
        Self {
            total,
            resolved: 0,
            time_remaining_secs: time_limit_secs,
            timer_running: time_limit_secs > 0,
            hints_used: 0,
            moves: 0,
            status: PuzzleStatus::InProgress,
            score: None,
            rule,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn resolved(&self) -> usize {
        self.resolved
    }

    pub fn time_remaining_secs(&self) -> u32 {
        self.time_remaining_secs
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running && !self.is_finished()
    }

    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Final score, fixed at the terminal transition.
    pub fn score(&self) -> Option<u32> {
        self.score
    }

    pub fn after_resolve(mut self) -> (Self, PuzzleEvent) {
        if self.is_finished() || self.resolved >= self.total {
            return (self, PuzzleEvent::NoChange);
        }
        self.resolved += 1;
        if self.resolved == self.total {
            let score = self.finish(PuzzleStatus::Complete);
            (self, PuzzleEvent::Completed { score })
        } else {
            (self, PuzzleEvent::Progressed)
        }
    }

    pub fn after_tick(mut self) -> (Self, PuzzleEvent) {
        if !self.timer_running() || self.time_remaining_secs == 0 {
            return (self, PuzzleEvent::NoChange);
        }
        self.time_remaining_secs -= 1;
        if self.time_remaining_secs == 0 {
            let score = self.finish(PuzzleStatus::TimedOut);
            (self, PuzzleEvent::TimedOut { score })
        } else {
            (self, PuzzleEvent::Progressed)
        }
    }

    pub fn after_hint(mut self) -> (Self, PuzzleEvent) {
        if self.is_finished() {
            return (self, PuzzleEvent::NoChange);
        }
        self.hints_used = self.hints_used.saturating_add(1);
        (self, PuzzleEvent::Progressed)
    }

    pub fn after_move(mut self) -> (Self, PuzzleEvent) {
        if self.is_finished() {
            return (self, PuzzleEvent::NoChange);
        }
        self.moves = self.moves.saturating_add(1);
        (self, PuzzleEvent::Progressed)
    }

    pub fn resolve(&mut self) -> PuzzleEvent {
        self.apply(Self::after_resolve)
    }

    pub fn tick(&mut self) -> PuzzleEvent {
        self.apply(Self::after_tick)
    }

    pub fn use_hint(&mut self) -> PuzzleEvent {
        self.apply(Self::after_hint)
    }

    pub fn record_move(&mut self) -> PuzzleEvent {
        self.apply(Self::after_move)
    }

    /// Stops the countdown; later ticks do nothing.
    pub fn cancel_timer(&mut self) {
        self.timer_running = false;
    }

    fn apply(&mut self, transition: fn(Self) -> (Self, PuzzleEvent)) -> PuzzleEvent {
        let (next, event) = transition(*self);
        *self = next;
        event
    }

    fn finish(&mut self, status: PuzzleStatus) -> u32 {
        self.status = status;
        self.timer_running = false;
        let rule = self.rule;
        let score = rule.score(self);
        self.score = Some(score);
        log::info!("Puzzle ended {status:?} with score {score}");
        score
    }
}
