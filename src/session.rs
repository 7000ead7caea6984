//! Persistent play session for the command-line tool.
//!
//! The core only persists the progress pair (index and row offset). A session
//! also keeps what is needed to rebuild the store: the pack path, or the seed,
//! difficulty and layout of a random run plus how many grids it has advanced.
//! Replaying those advances walks the same seed chain, so the live grid comes
//! back identical.
//!
//! The session is saved as JSON with [`serde_json`].

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{LevelStore, ProgressSnapshot};
use crate::types::Layout;

/// Default session file name
pub const DEFAULT_SESSION_FILE: &str = "bubble-levels-session.json";

/// How to rebuild the level store of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SessionSource {
    Pack {
        path: PathBuf,
        starting_level: usize,
    },
    Random {
        seed: i64,
        difficulty: i32,
        arcade: bool,
        /// Grids advanced past the first one
        generation: u64,
    },
}

/// A saved session: store arguments plus progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub source: SessionSource,
    pub progress: ProgressSnapshot,
}

impl Session {
    /// Start a session over a level pack file
    pub fn pack(path: impl Into<PathBuf>, starting_level: usize) -> Result<(Self, LevelStore)> {
        let source = SessionSource::Pack {
            path: path.into(),
            starting_level,
        };
        let store = build_store(&source)?;
        let session = Self {
            source,
            progress: store.save_state(),
        };
        Ok((session, store))
    }

    /// Start a session over random levels
    pub fn random(seed: i64, difficulty: i32, layout: Layout) -> (Self, LevelStore) {
        let source = SessionSource::Random {
            seed,
            difficulty,
            arcade: layout.is_staggered(),
            generation: 0,
        };
        let store = LevelStore::random(seed, difficulty, layout);
        let session = Self {
            source,
            progress: store.save_state(),
        };
        (session, store)
    }

    /// Rebuild the level store and put the saved progress back
    pub fn open_store(&self) -> Result<LevelStore> {
        let mut store = build_store(&self.source)?;
        store.restore_state(&self.progress);
        Ok(store)
    }

    /// Advance the store and record the new progress
    pub fn advance(&mut self, store: &mut LevelStore) {
        store.advance();
        if let SessionSource::Random { generation, .. } = &mut self.source {
            *generation += 1;
        }
        self.progress = store.save_state();
    }

    /// Go back to the first level and record the new progress
    pub fn reset(&mut self, store: &mut LevelStore) {
        store.reset();
        self.progress = store.save_state();
    }

    /// Record progress after the store changed outside this session
    pub fn record(&mut self, store: &LevelStore) {
        self.progress = store.save_state();
    }
}

fn build_store(source: &SessionSource) -> Result<LevelStore> {
    match source {
        SessionSource::Pack {
            path,
            starting_level,
        } => {
            let text = read_pack(path)?;
            Ok(LevelStore::scripted(&text, *starting_level))
        }
        SessionSource::Random {
            seed,
            difficulty,
            arcade,
            generation,
        } => {
            let layout = if *arcade {
                Layout::Arcade
            } else {
                Layout::Classic
            };
            let mut store = LevelStore::random(*seed, *difficulty, layout);
            for _ in 0..*generation {
                store.advance();
            }
            Ok(store)
        }
    }
}

/// Read a level pack file
pub fn read_pack(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Cannot read level pack {}", path.display()))
}

/// Location of a saved session.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("Session file: {path:?}");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved session, or None if there is none.
    pub fn load(&self) -> Result<Option<Session>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Cannot open session {}", self.path.display()));
            }
        };
        let session: Session = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Malformed session {}", self.path.display()))?;
        Ok(Some(session))
    }

    /// Save the session, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Cannot create session {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, session)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved session. A missing file is not an error.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error)
                .with_context(|| format!("Cannot delete session {}", self.path.display())),
        }
    }
}
