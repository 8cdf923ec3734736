use alloc::string::ToString;
use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest grid any generator accepts on either axis.
pub const MIN_GRID_SIZE: Coord = 3;
/// Largest grid any generator accepts on either axis.
pub const MAX_GRID_SIZE: Coord = 32;

fn clamp_size((rows, cols): Coord2) -> Coord2 {
    (
        rows.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
        cols.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
    )
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordSearchConfig {
    pub size: Coord2,
    pub word_count: usize,
    pub time_limit_secs: u32,
}

impl WordSearchConfig {
    pub fn new(size: Coord2, word_count: usize, time_limit_secs: u32) -> Self {
        Self {
            size: clamp_size(size),
            word_count: word_count.max(1),
            time_limit_secs,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CrosswordConfig {
    pub size: Coord2,
    pub max_words: usize,
    pub time_limit_secs: u32,
}

impl CrosswordConfig {
    pub fn new(size: Coord2, max_words: usize, time_limit_secs: u32) -> Self {
        Self {
            size: clamp_size(size),
            max_words: max_words.max(1),
            time_limit_secs,
        }
    }

    /// Longest word the generator will try to place.
    pub fn max_word_len(&self) -> usize {
        usize::from(self.size.0.min(self.size.1)).saturating_sub(2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub pairs: usize,
    pub time_limit_secs: u32,
}

impl MemoryConfig {
    pub fn new(pairs: usize, time_limit_secs: u32) -> Self {
        Self {
            pairs: pairs.max(1),
            time_limit_secs,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn word_search(self) -> WordSearchConfig {
        match self {
            Self::Easy => WordSearchConfig::new((12, 12), 8, 300),
            Self::Medium => WordSearchConfig::new((15, 15), 10, 240),
            Self::Hard => WordSearchConfig::new((18, 18), 12, 180),
        }
    }

    pub fn crossword(self) -> CrosswordConfig {
        match self {
            Self::Easy => CrosswordConfig::new((9, 9), 6, 420),
            Self::Medium => CrosswordConfig::new((11, 11), 8, 360),
            Self::Hard => CrosswordConfig::new((13, 13), 10, 300),
        }
    }

    pub fn memory(self) -> MemoryConfig {
        match self {
            Self::Easy => MemoryConfig::new(6, 120),
            Self::Medium => MemoryConfig::new(8, 150),
            Self::Hard => MemoryConfig::new(10, 180),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(PuzzleError::UnknownDifficulty(s.to_string())),
        }
    }
}
