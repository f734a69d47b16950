//! Periodic JSON frames of the world state.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::world::{World, WorldSnapshot};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to write snapshot frame to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize snapshot frame")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct Frame {
    written_at: String,
    world: WorldSnapshot,
}

pub struct SnapshotWriter {
    dir: PathBuf,
    interval_ticks: u64,
}

impl SnapshotWriter {
    /// An interval of 0 disables writing entirely.
    pub fn new(dir: &Path, interval_ticks: u64) -> Self {
        Self {
            dir: dir.to_path_buf(),
            interval_ticks,
        }
    }

    pub fn should_write(&self, tick: u64) -> bool {
        self.interval_ticks > 0 && tick > 0 && tick % self.interval_ticks == 0
    }

    pub fn maybe_write(&self, world: &World, scenario: &str) -> Result<Option<PathBuf>, SnapshotError> {
        if !self.should_write(world.tick()) {
            return Ok(None);
        }
        let frame = Frame {
            written_at: Utc::now().to_rfc3339(),
            world: world.snapshot(scenario),
        };
        let payload = serde_json::to_string_pretty(&frame)?;
        fs::create_dir_all(&self.dir).map_err(|source| SnapshotError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(format!("frame_{:08}.json", world.tick()));
        fs::write(&path, payload).map_err(|source| SnapshotError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Some(path))
    }
}
