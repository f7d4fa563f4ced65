//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary course directories with chapter
//! markdown files and a catalog.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CATALOG: &str = r#"[
  {"id": 1, "title": "Introduction to Angular", "category": "basics", "difficulty": "Beginner", "duration": "10 min"},
  {"id": 2, "title": "Angular Components", "category": "basics", "difficulty": "Beginner", "duration": "15 min"},
  {"id": 3, "title": "Dependency Injection", "category": "advanced", "difficulty": "Advanced", "duration": "20 min"}
]"#;

pub const CHAPTER_ONE: &str = "# Introduction\n\nAngular is a **platform** for building apps.\n\n## Setup\n\n- Install Node\n- Install the CLI\n\n```bash\nnpm install -g @angular/cli\n```\n\n### Next steps\n\nRead [the docs](https://angular.dev).";

/// Temporary course layout: `course/chapters/chap{N}.md` plus `chapters.json`.
pub struct Course {
    pub dir: TempDir,
}

impl Course {
    pub fn chapters(&self) -> PathBuf {
        self.dir.path().join("course").join("chapters")
    }

    pub fn catalog(&self) -> PathBuf {
        self.dir.path().join("chapters.json")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("dist")
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Creates a three chapter course with chapter 2 missing on disk.
///
/// # Errors
///
/// Returns error if directory creation or writes fail
pub fn create_course() -> Result<Course> {
    let course = Course {
        dir: TempDir::new()?,
    };

    fs::create_dir_all(course.chapters())?;
    fs::write(course.catalog(), CATALOG)?;
    fs::write(course.chapters().join("chap1.md"), CHAPTER_ONE)?;
    fs::write(
        course.chapters().join("chap3.md"),
        "# Dependency Injection\n\n| Token | Scope |\n|---|---|\n| HttpClient | root |",
    )?;

    Ok(course)
}
