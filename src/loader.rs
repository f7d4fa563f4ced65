//! Chapter content loading from the chapters directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolves chapter numbers to markdown files named `chap{N}.md`.
///
/// Loading fails soft: a missing or unreadable chapter yields placeholder
/// markdown which renders like any other chapter body.
#[derive(Debug, Clone)]
pub struct ChapterLoader {
    dir: PathBuf,
}

impl ChapterLoader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the markdown file for a chapter.
    pub fn chapter_path(&self, id: u32) -> PathBuf {
        self.dir.join(format!("chap{}.md", id))
    }

    /// Reads chapter markdown.
    ///
    /// # Errors
    ///
    /// Returns error if the chapter file cannot be read
    pub fn try_load(&self, id: u32) -> Result<String> {
        let path = self.chapter_path(id);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to load chapter {}: {}", id, path.display()))
    }

    /// Reads chapter markdown, substituting placeholder text on failure.
    pub fn load(&self, id: u32) -> String {
        match self.try_load(id) {
            Ok(content) => content,
            Err(e) => {
                warn!("{:#}", e);
                placeholder(id)
            }
        }
    }

    /// Highest chapter number present in the directory.
    ///
    /// Files not matching `chap{N}.md` are ignored. Returns zero when no
    /// chapter file exists.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be listed
    pub fn discover_total(&self) -> Result<u32> {
        let entries = fs::read_dir(&self.dir).with_context(|| {
            format!("Failed to read chapters directory: {}", self.dir.display())
        })?;

        let mut total = 0;
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let name = entry.file_name();
            if let Some(id) = name.to_str().and_then(parse_chapter_number) {
                total = total.max(id);
            }
        }

        Ok(total)
    }
}

/// Markdown shown for chapters whose content is not available yet.
pub fn placeholder(id: u32) -> String {
    format!(
        "# Chapter {}\n\nContent for this chapter is being prepared. Please check back later.\n\nThis is a placeholder content for demonstration purposes.",
        id
    )
}

fn parse_chapter_number(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix("chap")?
        .strip_suffix(".md")?
        .parse()
        .ok()
}
