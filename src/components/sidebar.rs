//! Chapter list sidebar component

use maud::{Markup, html};

use crate::chapter::ChapterMeta;
use crate::progress::Progress;

/// Returns the page file name for a chapter.
pub fn chapter_href(id: u32) -> String {
    format!("chapter-{}.html", id)
}

/// Renders overall course progress
///
/// Shows the completed count against the course length with a filled bar.
///
/// # Arguments
///
/// * `progress`: Reader progress
/// * `total`: Number of chapters in the course
pub fn progress_summary(progress: &Progress, total: u32) -> Markup {
    let completed = progress.completed_count(total);
    let width = format!("width: {:.1}%", progress.completion_percent(total));

    html! {
        div class="overall-progress" {
            div class="progress-text" { (completed) " of " (total) " chapters" }
            div class="progress-bar" {
                div class="progress-fill" style=(width) {}
            }
            span class="completed-count" { (completed) " completed" }
        }
    }
}

/// Renders the sidebar chapter list
///
/// Each chapter links to its page. The current chapter is marked active,
/// completed and bookmarked chapters carry their own classes so the
/// stylesheet can show check and bookmark markers.
///
/// # Arguments
///
/// * `site_title`: Course title shown above the list
/// * `chapters`: Chapters to list in order
/// * `current`: Chapter being viewed, `None` on the index page
/// * `progress`: Reader progress for completion and bookmark markers
///
/// # Returns
///
/// Sidebar markup
pub fn sidebar(
    site_title: &str,
    chapters: &[ChapterMeta],
    current: Option<u32>,
    progress: &Progress,
) -> Markup {
    let total = chapters.len() as u32;

    html! {
        aside class="sidebar" {
            div class="sidebar-header" {
                a href="index.html" class="course-title" { (site_title) }
                (progress_summary(progress, total))
            }
            nav class="chapter-list" {
                @for chapter in chapters {
                    a.chapter-item.active[current == Some(chapter.id)]
                        .completed[progress.is_completed(chapter.id)]
                        .bookmarked[progress.is_bookmarked(chapter.id)]
                        href=(chapter_href(chapter.id)) {
                        div class="chapter-number" { "Chapter " (chapter.id) }
                        div class="chapter-title" { (chapter.title) }
                        div class="chapter-meta-info" {
                            span { i class="ph ph-clock" {} " " (chapter.duration) }
                            span { i class="ph ph-cell-signal-full" {} " " (chapter.difficulty) }
                        }
                    }
                }
            }
        }
    }
}
