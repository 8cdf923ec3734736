use std::fmt::Write;
use vocabgrid_core::*;

fn time_limit(secs: u32) -> String {
    if secs == 0 {
        "untimed".to_owned()
    } else {
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

pub(crate) fn word_search(puzzle: &WordSearch, config: &WordSearchConfig) -> String {
    let mut out = format!("{puzzle}\nTime: {}\n", time_limit(config.time_limit_secs));
    for word in puzzle.words() {
        let _ = writeln!(out, "  {:<12} {}", word.text, word.clue);
    }
    out
}

fn clue_column(out: &mut String, title: &str, clues: &[Clue]) {
    let _ = writeln!(out, "{title}");
    for clue in clues {
        let _ = writeln!(out, "  {:>2}. {} ({})", clue.number, clue.text, clue.length);
    }
}

pub(crate) fn crossword(puzzle: &Crossword, config: &CrosswordConfig, solution: bool) -> String {
    let grid = if solution {
        puzzle.to_string()
    } else {
        puzzle.render_input()
    };
    let mut out = format!("{grid}\nTime: {}\n", time_limit(config.time_limit_secs));
    clue_column(&mut out, "Across", &puzzle.clues_across());
    clue_column(&mut out, "Down", &puzzle.clues_down());
    out
}

pub(crate) fn memory(deck: &MemoryDeck, config: &MemoryConfig) -> String {
    let mut out = format!(
        "{} pairs, time: {}\n",
        deck.pairs(),
        time_limit(config.time_limit_secs)
    );
    for (index, card) in deck.cards().iter().enumerate() {
        let icon = card.icon.as_deref().unwrap_or(" ");
        let _ = writeln!(out, "  {index:>2}. {icon} {}", card.text);
    }
    out
}
