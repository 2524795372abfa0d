//! Persisted index for cycling through a fixed list of states.
//!
//! The file holds a single base-10 integer, optionally followed by a newline.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot cycle through zero states")]
    Empty,
}

/// Advance `current` by one, wrapping at `len`.
pub fn next_index(current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((current % len + 1) % len)
}

pub struct CycleState {
    path: PathBuf,
}

impl CycleState {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current index. Absent, unreadable or garbled files read as 0.
    pub async fn load(&self) -> usize {
        match fs::read_to_string(&self.path).await {
            Ok(content) => match content.trim().parse::<usize>() {
                Ok(index) => index,
                Err(e) => {
                    tracing::warn!("Invalid cycle state in {:?}: {}", self.path, e);
                    0
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => {
                tracing::warn!("Cannot read cycle state {:?}: {}", self.path, e);
                0
            }
        }
    }

    pub async fn store(&self, index: usize) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, format!("{index}\n")).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::debug!("Stored cycle index {} in {:?}", index, self.path);
        Ok(())
    }

    /// Index following the stored one. Nothing is written; callers
    /// `store` it once the new state has been applied.
    pub async fn peek_next(&self, len: usize) -> Result<usize, StateError> {
        next_index(self.load().await, len).ok_or(StateError::Empty)
    }
}
