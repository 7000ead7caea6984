//! Command-line tool for level authors and testers.
//!
//! # Examples
//!
//! Print the third level of a pack:
//!
//! ```text
//! $ bubble-levels pack levels.txt --level 2
//! ```
//!
//! Print the first three grids of a random run, then the first rows of its endless feed:
//!
//! ```text
//! $ bubble-levels random --seed 42 --difficulty 6 --count 3
//! $ bubble-levels rows --seed 42 --difficulty 6 --layout arcade --count 10
//! ```
//!
//! Play through a pack one level at a time, keeping progress between runs:
//!
//! ```text
//! $ bubble-levels session new-pack levels.txt
//! $ bubble-levels session next
//! $ bubble-levels session show
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use crate::core::{generate_grid, parse_level_pack, FeedState, Grid, LevelStore};
use crate::session::{read_pack, Session, SessionFile, SessionSource, DEFAULT_SESSION_FILE};
use crate::types::{Difficulty, Layout, NORMAL};

/// Inspect level packs and seeded random levels.
#[derive(Parser, Debug)]
#[command(name = "bubble-levels", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug messages
    #[arg(short, long, default_value_t = false, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a level pack and print its levels
    Pack {
        /// Level pack file
        file: PathBuf,

        /// Level to print (falls back to 0 when out of range)
        #[arg(short, long, default_value_t = 0)]
        level: usize,

        /// Print every level of the pack
        #[arg(short, long, default_value_t = false)]
        all: bool,
    },

    /// Print consecutive random grids of a seed chain
    Random {
        #[command(flatten)]
        generator: GeneratorArgs,

        /// Number of grids to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Print incoming rows of the endless feed
    Rows {
        #[command(flatten)]
        generator: GeneratorArgs,

        /// Number of rows to print
        #[arg(short, long, default_value_t = 8)]
        count: usize,
    },

    /// Play through levels, keeping progress in a session file
    Session {
        /// Session file
        #[arg(long, default_value = DEFAULT_SESSION_FILE)]
        state: PathBuf,

        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Start a session over a level pack
    NewPack {
        file: PathBuf,

        #[arg(short, long, default_value_t = 0)]
        level: usize,
    },
    /// Start a session over random levels
    NewRandom {
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Print the current level
    Show,
    /// Move to the next level
    Next,
    /// Go back to the first level
    First,
    /// Delete the session file
    Clear,
}

/// Seed chain parameters
#[derive(Args, Debug, Clone, Copy)]
pub struct GeneratorArgs {
    /// Random seed
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub seed: i64,

    /// Number of bubble colors (clamped to 4..=8)
    #[arg(short = 'f', long, default_value_t = NORMAL as i32, allow_negative_numbers = true)]
    pub difficulty: i32,

    /// Row layout
    #[arg(value_enum, short, long, default_value_t = LayoutArg::Classic)]
    pub layout: LayoutArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutArg {
    Classic,
    Arcade,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Classic => Layout::Classic,
            LayoutArg::Arcade => Layout::Arcade,
        }
    }
}

/// Run one command, writing its report to `out`.
pub fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Pack { file, level, all } => print_pack(&file, level, all, out),
        Command::Random { generator, count } => print_random(generator, count, out),
        Command::Rows { generator, count } => print_rows(generator, count, out),
        Command::Session { state, action } => run_session(SessionFile::new(state), action, out),
    }
}

fn print_pack(file: &Path, level: usize, all: bool, out: &mut impl Write) -> Result<()> {
    let text = read_pack(file)?;

    if all {
        let levels = parse_level_pack(&text);
        for (index, grid) in levels.iter().enumerate() {
            write_level(out, index, levels.len(), grid)?;
        }
        return Ok(());
    }

    let mut store = LevelStore::scripted(&text, level);
    let (index, count) = (store.index(), store.len());
    match store.current_grid() {
        Some(grid) => write_level(out, index, count, grid)?,
        None => writeln!(out, "No levels in {}", file.display())?,
    }
    Ok(())
}

fn write_level(out: &mut impl Write, index: usize, count: usize, grid: &Grid) -> Result<()> {
    writeln!(out, "Level {}/{}", index + 1, count)?;
    write!(out, "{}", grid)?;
    writeln!(out)?;
    Ok(())
}

fn print_random(generator: GeneratorArgs, count: usize, out: &mut impl Write) -> Result<()> {
    let difficulty = Difficulty::new(generator.difficulty);
    let layout = Layout::from(generator.layout);
    let mut state = FeedState::new(generator.seed, 0);

    writeln!(out, "Difficulty: {}", difficulty.name())?;
    for n in 0..count {
        let (grid, next) = generate_grid(state, difficulty, layout);
        writeln!(out, "Grid {} (seed {})", n + 1, state.seed)?;
        write!(out, "{}", grid)?;
        writeln!(out)?;
        state = next;
    }
    Ok(())
}

fn print_rows(generator: GeneratorArgs, count: usize, out: &mut impl Write) -> Result<()> {
    // Rows follow the first grid of the seed chain, as in a game.
    let mut store = LevelStore::random(
        generator.seed,
        generator.difficulty,
        Layout::from(generator.layout),
    );

    for _ in 0..count {
        let Some(row) = store.new_row() else { break };
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writeln!(out, "offset {}: {}", store.offset(), cells.join(" "))?;
    }
    Ok(())
}

fn run_session(file: SessionFile, action: SessionAction, out: &mut impl Write) -> Result<()> {
    let (mut session, mut store) = match &action {
        SessionAction::NewPack { file: pack, level } => Session::pack(pack.clone(), *level)?,
        SessionAction::NewRandom { generator } => Session::random(
            generator.seed,
            generator.difficulty,
            Layout::from(generator.layout),
        ),
        SessionAction::Clear => {
            file.delete()?;
            writeln!(out, "Removed {}", file.path().display())?;
            return Ok(());
        }
        SessionAction::Show | SessionAction::Next | SessionAction::First => {
            let Some(session) = file.load()? else {
                bail!(
                    "No session in {}; start one with `session new-pack` or `session new-random`",
                    file.path().display()
                );
            };
            let store = session.open_store()?;
            (session, store)
        }
    };

    match action {
        SessionAction::Next => session.advance(&mut store),
        SessionAction::First => session.reset(&mut store),
        _ => {}
    }

    let (index, count) = (store.index(), store.len());
    let description = match &session.source {
        SessionSource::Pack { path, .. } => format!("pack {}", path.display()),
        SessionSource::Random {
            seed, generation, ..
        } => format!("random seed {} grid {}", seed, generation + 1),
    };
    writeln!(out, "Session: {}", description)?;
    match store.current_grid() {
        Some(grid) => write_level(out, index, count, grid)?,
        None => writeln!(out, "No level at index {}", index)?,
    }
    writeln!(out, "Row offset: {}", store.offset())?;

    session.record(&store);
    file.save(&session)?;
    info!("Saved session to {}", file.path().display());
    Ok(())
}
