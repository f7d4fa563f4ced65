//! Reader progress: completed chapters, bookmarks and ratings.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::util::percent;

/// Highest star rating a chapter can receive.
pub const MAX_RATING: u8 = 5;

/// Per reader state keyed by chapter number.
///
/// Persisted as JSON between builds so the generated sidebar can mark
/// completed and bookmarked chapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    completed: BTreeSet<u32>,
    bookmarked: BTreeSet<u32>,
    ratings: BTreeMap<u32, u8>,
}

impl Progress {
    /// Loads progress from a JSON file.
    ///
    /// A missing file is a fresh reader and yields empty progress.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No progress file at {}, starting fresh", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read progress: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid progress format: {}", path.display()))
    }

    /// Writes progress as pretty printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or the write fails
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize progress")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write progress: {}", path.display()))
    }

    /// Flips completion state, returning the new state.
    pub fn toggle_completed(&mut self, id: u32) -> bool {
        toggle(&mut self.completed, id)
    }

    /// Flips bookmark state, returning the new state.
    pub fn toggle_bookmark(&mut self, id: u32) -> bool {
        toggle(&mut self.bookmarked, id)
    }

    /// Records a star rating.
    ///
    /// # Errors
    ///
    /// Returns error if `stars` is outside `1..=MAX_RATING`
    pub fn rate(&mut self, id: u32, stars: u8) -> Result<()> {
        if !(1..=MAX_RATING).contains(&stars) {
            bail!("Rating must be between 1 and {}, got {}", MAX_RATING, stars);
        }
        self.ratings.insert(id, stars);
        Ok(())
    }

    pub fn is_completed(&self, id: u32) -> bool {
        self.completed.contains(&id)
    }

    pub fn is_bookmarked(&self, id: u32) -> bool {
        self.bookmarked.contains(&id)
    }

    pub fn rating(&self, id: u32) -> Option<u8> {
        self.ratings.get(&id).copied()
    }

    /// Number of completed chapters within `1..=total`.
    pub fn completed_count(&self, total: u32) -> usize {
        if total == 0 {
            return 0;
        }
        self.completed.range(1..=total).count()
    }

    /// Share of completed chapters as a percentage.
    pub fn completion_percent(&self, total: u32) -> f64 {
        percent(self.completed_count(total), total as usize)
    }

    pub fn completed(&self) -> impl Iterator<Item = u32> + '_ {
        self.completed.iter().copied()
    }

    pub fn bookmarks(&self) -> impl Iterator<Item = u32> + '_ {
        self.bookmarked.iter().copied()
    }

    /// Ratings as `(chapter, stars)` in chapter order.
    pub fn ratings(&self) -> impl Iterator<Item = (u32, u8)> + '_ {
        self.ratings.iter().map(|(&id, &stars)| (id, stars))
    }
}

fn toggle(set: &mut BTreeSet<u32>, id: u32) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}
