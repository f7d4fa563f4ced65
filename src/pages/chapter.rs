//! Chapter reader page generation

use maud::{Markup, PreEscaped, html};

use crate::chapter::ChapterMeta;
use crate::components::chapter_header::chapter_header;
use crate::components::layout::page_wrapper;
use crate::components::nav::chapter_nav;
use crate::components::sidebar::sidebar;
use crate::components::toc::floating_toc;
use crate::config::Theme;
use crate::markdown::TableOfContents;
use crate::navigation::Position;
use crate::progress::Progress;

/// Data container for chapter page generation
pub struct ChapterPageData<'a> {
    pub site_title: &'a str,
    pub theme: Theme,
    pub chapters: &'a [ChapterMeta],
    pub meta: &'a ChapterMeta,
    pub toc: &'a TableOfContents,
    pub position: Position,
    pub progress: &'a Progress,
}

/// Generates the reader page for one chapter
///
/// Lays out the sidebar chapter list beside the chapter header, rendered
/// content with heading anchors, floating table of contents and
/// previous/next navigation.
///
/// # Arguments
///
/// * `data`: Chapter page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for the chapter page
pub fn generate(data: ChapterPageData<'_>) -> Markup {
    let id = data.meta.id;

    page_wrapper(
        &data.meta.title,
        data.site_title,
        &["assets/chapter.css", "assets/markdown.css"],
        data.theme,
        html! {
            (sidebar(data.site_title, data.chapters, Some(id), data.progress))
            main class="reader" {
                (chapter_header(data.meta, data.progress.rating(id), data.progress.is_completed(id)))
                (floating_toc(&data.toc.entries))
                article class="chapter-content markdown-body" {
                    (PreEscaped(&data.toc.html))
                }
                (chapter_nav(data.position))
            }
        },
    )
}
