//! Static course reader generator for markdown chapters.

mod assets;
mod chapter;
pub mod components;
mod config;
mod generators;
mod loader;
mod markdown;
mod navigation;
pub mod pages;
mod progress;
mod util;

pub use assets::{CSS_ASSETS, write_css_assets};
pub use chapter::{Catalog, Chapter, ChapterMeta};
pub use config::{
    Cli, Command, Config, EngineKind, ProgressAction, ProgressArgs, RenderArgs, SearchArgs, Theme,
};
pub use generators::{SiteSummary, generate_site};
pub use loader::{ChapterLoader, placeholder};
pub use markdown::{Engine, Flavor, MarkdownRenderer, PipelineRenderer, TableOfContents, TocEntry};
pub use navigation::Position;
pub use progress::{MAX_RATING, Progress};
pub use util::percent;
