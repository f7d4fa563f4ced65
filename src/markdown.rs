//! Chapter markdown rendering.
//!
//! The default engine is a flat pipeline of regular expression
//! substitutions producing styled HTML fragments. A comrak based engine is
//! available for chapters that need standard markdown, and both can have
//! code blocks highlighted with syntect. Table of contents extraction runs
//! on the rendered fragment.

mod pipeline;
mod renderer;
mod toc;

pub use pipeline::{Flavor, PipelineRenderer};
pub use renderer::{Engine, MarkdownRenderer};
pub use toc::{TableOfContents, TocEntry};
