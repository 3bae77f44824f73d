#![warn(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

// Fallback path when no user data directory is available
const SCORES_FILE_PATH: &str = "data/quintris_scores.toml";

/// Persistence seam for the best recorded score. The engine only ever asks
/// two things of it and tolerates an empty store.
pub trait ScoreStore {
    /// The best previously recorded score, or `None` when nothing has been
    /// recorded (or the backing store is unreadable).
    fn best_score(&self) -> Option<u32>;

    /// Record a finished game's score.
    fn record(&mut self, score: u32) -> Result<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreFile {
    best: u32,
}

/// TOML-file-backed score store.
pub struct TomlScoreStore {
    path: PathBuf,
}

impl TomlScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform data directory, with an env-var override.
    #[must_use]
    pub fn at_default_path() -> Self {
        Self::new(scores_file_path())
    }

    fn read(&self) -> Option<ScoreFile> {
        let contents = fs::read_to_string(&self.path).ok()?;
        toml::from_str(&contents).ok()
    }
}

impl ScoreStore for TomlScoreStore {
    fn best_score(&self) -> Option<u32> {
        let file = self.read()?;
        debug!("best recorded score is {}", file.best);
        Some(file.best)
    }

    fn record(&mut self, score: u32) -> Result<()> {
        // Never lower the recorded best
        let best = self.read().map_or(score, |file| file.best.max(score));
        let file = ScoreFile { best };

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let contents = toml::to_string_pretty(&file)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        debug!("recorded score {score}, best is now {best}");
        Ok(())
    }
}

fn scores_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("QUINTRIS_SCORES") {
        return PathBuf::from(path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("quintris").join("scores.toml")
    } else {
        PathBuf::from(SCORES_FILE_PATH)
    }
}

/// In-memory store for embedding applications that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    best: Option<u32>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn best_score(&self) -> Option<u32> {
        self.best
    }

    fn record(&mut self, score: u32) -> Result<()> {
        self.best = Some(self.best.map_or(score, |best| best.max(score)));
        Ok(())
    }
}
