//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::markdown::{Engine, Flavor, MarkdownRenderer};

/// Command line interface for Courseread.
#[derive(Debug, Parser)]
#[command(name = "courseread", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parses command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the static course reader site
    Build(Config),
    /// Render one markdown file to an HTML fragment on stdout
    Render(RenderArgs),
    /// Search the chapter catalog by title or category
    Search(SearchArgs),
    /// Mark chapters complete, bookmark or rate them
    Progress(ProgressArgs),
}

/// Markdown engine selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EngineKind {
    /// Regex pipeline with tables and styled classes
    #[default]
    Pipeline,
    /// Regex pipeline with bare tags and blockquotes
    Basic,
    /// comrak with GitHub Flavored Markdown
    Standard,
}

impl From<EngineKind> for Engine {
    fn from(kind: EngineKind) -> Self {
        match kind {
            EngineKind::Pipeline => Engine::Pipeline(Flavor::Rich),
            EngineKind::Basic => Engine::Pipeline(Flavor::Basic),
            EngineKind::Standard => Engine::Standard,
        }
    }
}

/// Color theme of the generated pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value of the `data-theme` attribute, none for the light theme.
    pub fn data_attr(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

/// Site generation configuration.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Directory containing chap{N}.md files
    #[arg(default_value = "chapters")]
    pub chapters: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Chapter catalog (JSON array of chapter records)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Reader progress file (completed, bookmarks, ratings)
    #[arg(long)]
    pub progress: Option<PathBuf>,

    /// Number of chapters; defaults to the highest chapter found
    #[arg(long)]
    pub total: Option<u32>,

    /// Course title
    #[arg(long)]
    pub title: Option<String>,

    /// Markdown engine
    #[arg(long, value_enum, default_value = "pipeline")]
    pub engine: EngineKind,

    /// Highlight annotated code blocks with syntect
    #[arg(long)]
    pub highlight: bool,

    /// Page theme
    #[arg(long, value_enum, default_value = "light")]
    pub theme: Theme,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Creates configuration with defaults for the given directories.
    pub fn new(chapters: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            chapters: chapters.into(),
            output: output.into(),
            catalog: None,
            progress: None,
            total: None,
            title: None,
            engine: EngineKind::default(),
            highlight: false,
            theme: Theme::default(),
            no_open: true,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the chapters directory or catalog does not exist,
    /// or if an explicit total is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.chapters.is_dir() {
            bail!(
                "Chapters directory does not exist: {}",
                self.chapters.display()
            );
        }

        if let Some(catalog) = &self.catalog {
            if !catalog.is_file() {
                bail!("Catalog file does not exist: {}", catalog.display());
            }
        }

        if self.total == Some(0) {
            bail!("Total chapter count must be at least 1");
        }

        Ok(())
    }

    /// Returns course title from configuration or chapters directory name.
    pub fn site_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }

        let path = self
            .chapters
            .canonicalize()
            .unwrap_or_else(|_| self.chapters.clone());

        let dir_name = path
            .parent()
            .and_then(|parent| parent.file_name())
            .and_then(|name| name.to_str());

        match dir_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => "Course".to_string(),
        }
    }

    /// Builds the markdown renderer selected by this configuration.
    pub fn renderer<'a>(&self) -> MarkdownRenderer<'a> {
        build_renderer(self.engine, self.highlight)
    }
}

/// Arguments for rendering a single file.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Markdown file to render
    pub file: PathBuf,

    /// Markdown engine
    #[arg(long, value_enum, default_value = "pipeline")]
    pub engine: EngineKind,

    /// Highlight annotated code blocks with syntect
    #[arg(long)]
    pub highlight: bool,

    /// Add heading anchors and print the table of contents to stderr
    #[arg(long)]
    pub toc: bool,
}

impl RenderArgs {
    pub fn renderer<'a>(&self) -> MarkdownRenderer<'a> {
        build_renderer(self.engine, self.highlight)
    }
}

/// Arguments for catalog search.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Search term matched against titles and categories
    #[arg(default_value = "")]
    pub term: String,

    /// Restrict results to one category
    #[arg(long)]
    pub category: Option<String>,

    /// Chapter catalog
    #[arg(long, default_value = "chapters.json")]
    pub catalog: PathBuf,
}

/// Arguments for editing reader progress.
#[derive(Debug, Clone, Args)]
pub struct ProgressArgs {
    /// Reader progress file, created on first change
    #[arg(long, global = true, default_value = "progress.json")]
    pub progress: PathBuf,

    #[command(subcommand)]
    pub action: ProgressAction,
}

/// Change applied to the progress file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ProgressAction {
    /// Toggle the completed mark of a chapter
    Complete { id: u32 },
    /// Toggle the bookmark of a chapter
    Bookmark { id: u32 },
    /// Rate a chapter from 1 to 5 stars
    Rate { id: u32, stars: u8 },
    /// Print completed chapters, bookmarks and ratings
    Show,
}

fn build_renderer<'a>(engine: EngineKind, highlight: bool) -> MarkdownRenderer<'a> {
    let renderer = MarkdownRenderer::with_engine(engine.into());
    if highlight {
        renderer.highlighted()
    } else {
        renderer
    }
}
