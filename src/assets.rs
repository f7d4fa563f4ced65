//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const SIDEBAR: &str = include_str!("../assets/components/sidebar.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const CHAPTER_PAGE: &str = include_str!("../assets/page-chapter.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Stylesheets written by [`write_css_assets`].
pub const CSS_ASSETS: [&str; 3] = ["index.css", "chapter.css", "markdown.css"];

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!("Failed to create assets directory: {}", assets_dir.display())
    })?;

    write_bundled(assets_dir, "index.css", &[BASE, LAYOUT, SIDEBAR, INDEX_PAGE])?;
    write_bundled(
        assets_dir,
        "chapter.css",
        &[BASE, LAYOUT, SIDEBAR, CHAPTER_PAGE],
    )?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
