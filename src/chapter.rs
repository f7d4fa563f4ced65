//! Chapter records and the course catalog.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Catalog metadata for one chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMeta {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub duration: String,
}

impl ChapterMeta {
    /// Metadata used for chapters missing from the catalog.
    pub fn fallback(id: u32) -> Self {
        Self {
            id,
            title: format!("Chapter {}", id),
            category: "General".to_string(),
            difficulty: "Beginner".to_string(),
            duration: "5 min".to_string(),
        }
    }

    fn matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.category.to_lowercase().contains(term)
    }
}

/// A chapter ready for rendering: catalog metadata plus markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub meta: ChapterMeta,
    pub body: String,
}

impl Chapter {
    pub fn new(meta: ChapterMeta, body: impl Into<String>) -> Self {
        Self {
            meta,
            body: body.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.meta.id
    }
}

/// Ordered chapter metadata loaded from a JSON catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ChapterMeta>,
}

impl Catalog {
    /// Creates catalog from entries, ordered by chapter id.
    pub fn new(mut entries: Vec<ChapterMeta>) -> Self {
        entries.sort_by_key(|meta| meta.id);
        entries.dedup_by_key(|meta| meta.id);
        Self { entries }
    }

    /// Loads catalog from a JSON array of chapter records.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid catalog
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let entries: Vec<ChapterMeta> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid catalog format: {}", path.display()))?;
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[ChapterMeta] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest chapter id in the catalog, zero when empty.
    pub fn max_id(&self) -> u32 {
        self.entries.last().map_or(0, |meta| meta.id)
    }

    /// Returns catalog metadata, or fallback metadata for unknown ids.
    pub fn get(&self, id: u32) -> ChapterMeta {
        self.entries
            .iter()
            .find(|meta| meta.id == id)
            .cloned()
            .unwrap_or_else(|| ChapterMeta::fallback(id))
    }

    /// Metadata for every chapter from 1 to `total`.
    pub fn listing(&self, total: u32) -> Vec<ChapterMeta> {
        (1..=total).map(|id| self.get(id)).collect()
    }

    /// Case insensitive search on title and category.
    ///
    /// An empty term matches every entry.
    pub fn search(&self, term: &str) -> Vec<&ChapterMeta> {
        let term = term.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|meta| term.is_empty() || meta.matches(&term))
            .collect()
    }

    /// Entries with exactly the given category.
    ///
    /// `None` or an empty category returns every entry.
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<&ChapterMeta> {
        match category {
            Some(category) if !category.is_empty() => self
                .entries
                .iter()
                .filter(|meta| meta.category == category)
                .collect(),
            _ => self.entries.iter().collect(),
        }
    }

    /// Distinct categories in first seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for meta in &self.entries {
            if !categories.contains(&meta.category.as_str()) {
                categories.push(&meta.category);
            }
        }
        categories
    }
}
