//! Leaderboard persistence.
//!
//! Each difficulty keeps its own ranked list of final scores. Recording a score
//! appends it, sorts descending and keeps the best [`LEADERBOARD_LEN`].
//!
//! The storage itself sits behind [`ScoreStore`]:
//!
//! - [`FileScoreStore`]: one JSON file per difficulty (`scores_<difficulty>.json`)
//! - [`MemoryScoreStore`]: in-process map, for tests and headless runs
//!
//! # Example
//!
//! ```
//! use tui_tiles_store::{record_score, MemoryScoreStore, ScoreStore};
//! use tui_tiles_types::Difficulty;
//!
//! let mut store = MemoryScoreStore::default();
//! record_score(&mut store, Difficulty::Hard, 120).unwrap();
//! let board = record_score(&mut store, Difficulty::Hard, 300).unwrap();
//! assert_eq!(board, vec![300, 120]);
//! assert!(store.load(Difficulty::Easy).unwrap().is_empty());
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tui_tiles_types::{Difficulty, LEADERBOARD_LEN};

pub use tui_tiles_types as types;

/// Leaderboard storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("score file {path} is malformed: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("score file {path} belongs to difficulty {found:?}")]
    WrongDifficulty { path: PathBuf, found: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Per-difficulty score lists
pub trait ScoreStore {
    /// Stored scores for `difficulty`; empty when nothing was saved yet.
    fn load(&self, difficulty: Difficulty) -> StoreResult<Vec<u32>>;

    /// Replace the stored scores for `difficulty`.
    fn save(&mut self, difficulty: Difficulty, scores: &[u32]) -> StoreResult<()>;
}

/// Insert `score`, sort descending and keep the top [`LEADERBOARD_LEN`].
///
/// ```
/// use tui_tiles_store::rank;
///
/// assert_eq!(rank(vec![50, 40, 30, 20, 10], 35), vec![50, 40, 35, 30, 20]);
/// assert_eq!(rank(vec![50, 40, 30, 20, 10], 5), vec![50, 40, 30, 20, 10]);
/// ```
pub fn rank(mut scores: Vec<u32>, score: u32) -> Vec<u32> {
    scores.push(score);
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.truncate(LEADERBOARD_LEN);
    scores
}

/// Load, rank in `score`, save, and return the updated list.
pub fn record_score<S: ScoreStore + ?Sized>(
    store: &mut S,
    difficulty: Difficulty,
    score: u32,
) -> StoreResult<Vec<u32>> {
    let scores = rank(store.load(difficulty)?, score);
    store.save(difficulty, &scores)?;
    log::info!(
        "recorded score {} for {}; best {:?}",
        score,
        difficulty.as_str(),
        scores.first()
    );
    Ok(scores)
}

#[derive(Debug, Serialize, Deserialize)]
struct ScoreFile {
    difficulty: String,
    scores: Vec<u32>,
}

/// JSON files in a directory, one per difficulty.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(format!("scores_{}.json", difficulty.as_str()))
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self, difficulty: Difficulty) -> StoreResult<Vec<u32>> {
        let path = self.path_for(difficulty);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let file: ScoreFile = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Json { path: path.clone(), source })?;
        if file.difficulty != difficulty.as_str() {
            return Err(StoreError::WrongDifficulty {
                path,
                found: file.difficulty,
            });
        }
        Ok(file.scores)
    }

    fn save(&mut self, difficulty: Difficulty, scores: &[u32]) -> StoreResult<()> {
        let path = self.path_for(difficulty);
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let file = ScoreFile {
            difficulty: difficulty.as_str().to_string(),
            scores: scores.to_vec(),
        };
        let json = serde_json::to_vec_pretty(&file)
            .map_err(|source| StoreError::Json { path: path.clone(), source })?;
        fs::write(&path, json).map_err(|source| StoreError::Io { path, source })
    }
}

/// Scores kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: HashMap<Difficulty, Vec<u32>>,
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self, difficulty: Difficulty) -> StoreResult<Vec<u32>> {
        Ok(self.scores.get(&difficulty).cloned().unwrap_or_default())
    }

    fn save(&mut self, difficulty: Difficulty, scores: &[u32]) -> StoreResult<()> {
        self.scores.insert(difficulty, scores.to_vec());
        Ok(())
    }
}
