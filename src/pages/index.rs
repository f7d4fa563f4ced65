//! Course index page generation

use maud::{Markup, html};

use crate::chapter::{Catalog, ChapterMeta};
use crate::components::layout::page_wrapper;
use crate::components::sidebar::{chapter_href, progress_summary, sidebar};
use crate::config::Theme;
use crate::progress::Progress;

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub site_title: &'a str,
    pub theme: Theme,
    pub chapters: &'a [ChapterMeta],
    pub progress: &'a Progress,
}

/// Generates the course landing page
///
/// Shows a welcome section with overall progress, a link to the first
/// chapter and every chapter grouped by category. Groups appear in the
/// order their category is first seen.
///
/// # Arguments
///
/// * `data`: Index page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for index page
pub fn generate(data: IndexPageData<'_>) -> Markup {
    let total = data.chapters.len() as u32;
    let catalog = Catalog::new(data.chapters.to_vec());
    let groups = group_by_category(&catalog);
    let first = data.chapters.first().map(|meta| meta.id);

    page_wrapper(
        "Home",
        data.site_title,
        &["assets/index.css"],
        data.theme,
        html! {
            (sidebar(data.site_title, data.chapters, None, data.progress))
            main class="reader" {
                section class="welcome" {
                    h1 { "Welcome to " (data.site_title) }
                    p class="welcome-lead" {
                        (total) " chapters. Pick up where you left off or start from the beginning."
                    }
                    (progress_summary(data.progress, total))
                    @if let Some(first) = first {
                        a class="start-btn" href=(chapter_href(first)) {
                            "Start reading " i class="ph ph-arrow-right" {}
                        }
                    }
                }
                @for (category, chapters) in &groups {
                    section class="category-group" {
                        h2 class="category-title" { (category) }
                        ul class="category-chapters" {
                            @for chapter in chapters {
                                li.completed[data.progress.is_completed(chapter.id)] {
                                    a href=(chapter_href(chapter.id)) {
                                        span class="chapter-number" { (chapter.id) "." }
                                        " " (chapter.title)
                                    }
                                    span class="chapter-duration" { (chapter.duration) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn group_by_category(catalog: &Catalog) -> Vec<(&str, Vec<&ChapterMeta>)> {
    catalog
        .categories()
        .into_iter()
        .map(|category| {
            let members = catalog
                .entries()
                .iter()
                .filter(|meta| meta.category == category)
                .collect();
            (category, members)
        })
        .collect()
}
