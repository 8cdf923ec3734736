use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vocabgrid_core::*;

mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Generate vocabulary puzzles", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// easy, medium or hard
    #[arg(short, long, global = true, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Vocabulary category to draw words from
    #[arg(short, long, global = true, default_value = "animals")]
    category: String,

    /// JSON catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print the generated puzzle as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    puzzle: PuzzleKind,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum PuzzleKind {
    /// Letter grid with hidden words
    WordSearch,
    /// Crossword with across and down clues
    Crossword {
        /// Print the filled-in solution instead of the empty grid
        #[arg(long)]
        solution: bool,
    },
    /// Shuffled word/translation cards
    Memory,
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read catalog {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("Could not parse catalog {}", path.display()))
}

/// Seed drawn from the thread-local RNG, itself seeded by the OS.
fn random_seed() -> u64 {
    rand::random()
}

fn report_dropped(report: &GenerationReport) {
    if !report.is_complete() {
        eprintln!(
            "placed {} of {} words, dropped: {}",
            report.placed,
            report.requested,
            report.dropped.join(", ")
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let seed = args.seed.unwrap_or_else(random_seed);
    log::debug!("seed: {seed}");

    let catalog = load_catalog(args.catalog.as_ref())?;
    let mut source = SeededSource::new(seed);
    // every generator draws from the whole category, shuffled
    let pool = catalog.category(&args.category)?.entries.len();
    let entries = catalog.pick(&args.category, pool, &mut source)?;

    match args.puzzle {
        PuzzleKind::WordSearch => {
            let config = args.difficulty.word_search();
            let (puzzle, report) =
                WordSearchGenerator::with_source(source).generate(&config, &entries);
            report_dropped(&report);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                print!("{}", render::word_search(&puzzle, &config));
            }
        }
        PuzzleKind::Crossword { solution } => {
            let config = args.difficulty.crossword();
            let (puzzle, report) =
                CrosswordGenerator::with_source(source).generate(&config, &entries);
            report_dropped(&report);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&puzzle)?);
            } else {
                print!("{}", render::crossword(&puzzle, &config, solution));
            }
        }
        PuzzleKind::Memory => {
            let config = args.difficulty.memory();
            let (deck, report) = MemoryDealer::with_source(source).generate(&config, &entries);
            report_dropped(&report);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&deck)?);
            } else {
                print!("{}", render::memory(&deck, &config));
            }
        }
    }

    Ok(())
}
