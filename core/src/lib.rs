#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use config::*;
pub use crossword::*;
pub use error::*;
pub use generator::*;
pub use memory::*;
pub use rng::*;
pub use selection::*;
pub use tracker::*;
pub use types::*;
pub use word_search::*;

mod catalog;
mod config;
mod crossword;
mod error;
mod generator;
mod memory;
mod rng;
mod selection;
mod tracker;
mod types;
mod word_search;

/// A vocabulary item as supplied by the content catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub text: String,
    /// Translation or clue shown next to the puzzle.
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl VocabEntry {
    pub fn new(text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            translation: translation.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Uppercases `text` and strips every whitespace character.
pub fn normalize_word(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Outcome of a player action that cannot end the puzzle by itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_strips_spaces() {
        assert_eq!(normalize_word(" ice cream\t"), "ICECREAM");
        assert_eq!(normalize_word("Dog"), "DOG");
        assert_eq!(normalize_word("   "), "");
    }
}
