//! Static course site generation.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::write_css_assets;
use crate::chapter::{Catalog, Chapter};
use crate::components::sidebar::chapter_href;
use crate::config::Config;
use crate::loader::ChapterLoader;
use crate::markdown::TableOfContents;
use crate::navigation::Position;
use crate::pages::chapter::ChapterPageData;
use crate::pages::index::IndexPageData;
use crate::pages::{chapter as chapter_page, index as index_page};
use crate::progress::Progress;

/// Outcome of a site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Path of the generated `index.html`.
    pub index: PathBuf,
    /// Number of chapter pages written.
    pub chapters: u32,
}

/// Generates the course reader site.
///
/// Renders every chapter from 1 to the course length into
/// `chapter-{N}.html`, then the index page and stylesheets. Chapters
/// without a markdown file get placeholder content.
///
/// The course length is `config.total` when given, otherwise the highest
/// chapter number found in the chapters directory or the catalog.
///
/// # Arguments
///
/// * `config`: Validated site configuration
///
/// # Returns
///
/// Summary with the index path and number of chapters written
///
/// # Errors
///
/// Returns error if:
/// - Configuration is invalid
/// - Catalog or progress file cannot be parsed
/// - No chapters can be found
/// - Any output file cannot be written
///
/// # Examples
///
/// ```no_run
/// use courseread::{Config, generate_site};
///
/// let config = Config::new("course/chapters", "dist");
/// let summary = generate_site(&config)?;
/// println!("{}", summary.index.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(config: &Config) -> Result<SiteSummary> {
    config.validate().context("Invalid configuration")?;

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    let progress = match &config.progress {
        Some(path) => Progress::load(path)?,
        None => Progress::default(),
    };

    let loader = ChapterLoader::new(&config.chapters);
    let total = match config.total {
        Some(total) => total,
        None => loader.discover_total()?.max(catalog.max_id()),
    };
    if total == 0 {
        bail!(
            "No chapters found in {}; add chap1.md or pass --total",
            config.chapters.display()
        );
    }

    let site_title = config.site_title();
    let renderer = config.renderer();
    let listing = catalog.listing(total);

    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;
    write_css_assets(&config.output.join("assets"))?;

    info!("Rendering {} chapters with {:?}", total, renderer.engine());
    for meta in &listing {
        let chapter = Chapter::new(meta.clone(), loader.load(meta.id));
        let toc = TableOfContents::generate(&renderer.render(chapter.body.as_str()));
        debug!("Chapter {}: {} headings", chapter.id(), toc.entries.len());

        let page = chapter_page::generate(ChapterPageData {
            site_title: &site_title,
            theme: config.theme,
            chapters: &listing,
            meta: &chapter.meta,
            toc: &toc,
            position: Position::new(chapter.id(), total),
            progress: &progress,
        });

        write_page(&config.output.join(chapter_href(chapter.id())), &page.into_string())?;
    }
    println!("Generated {} chapter pages", total);

    let index_path = config.output.join("index.html");
    let page = index_page::generate(IndexPageData {
        site_title: &site_title,
        theme: config.theme,
        chapters: &listing,
        progress: &progress,
    });
    write_page(&index_path, &page.into_string())?;
    println!("Generated: {}", index_path.display());

    Ok(SiteSummary {
        index: index_path,
        chapters: total,
    })
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
