//! High-Score Storage
//!
//! One integer in a text file, the scheme the game has always used.
//! Missing or corrupt files read as zero; write failures are logged and
//! otherwise ignored so scoring can never take the game down.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Default storage location, relative to the working directory.
pub const HIGH_SCORE_FILE: &str = "high_score.txt";

/// Read the stored high score, defaulting to 0.
pub fn load(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => match text.trim().parse() {
            Ok(score) => score,
            Err(_) => {
                warn!(path = %path.display(), "high score file is corrupt, starting from 0");
                0
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => 0,
        Err(error) => {
            warn!(%error, path = %path.display(), "could not read high score, starting from 0");
            0
        }
    }
}

/// Persist `high_score`, best effort.
pub fn save(path: &Path, high_score: u32) {
    if let Err(error) = fs::write(path, high_score.to_string()) {
        warn!(%error, path = %path.display(), "could not save high score");
    }
}
