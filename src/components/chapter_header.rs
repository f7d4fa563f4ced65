//! Chapter header component

use maud::{Markup, html};

use crate::chapter::ChapterMeta;
use crate::progress::MAX_RATING;

/// Renders the chapter header with metadata and rating
///
/// # Arguments
///
/// * `meta`: Chapter catalog metadata
/// * `rating`: Stored star rating, if any
/// * `completed`: Whether the chapter is marked complete
pub fn chapter_header(meta: &ChapterMeta, rating: Option<u8>, completed: bool) -> Markup {
    let stars = rating.unwrap_or(0);

    html! {
        header class="chapter-header" {
            span class="chapter-badge" { "Chapter " (meta.id) }
            h1 class="chapter-title" { (meta.title) }
            div class="chapter-meta" {
                span class="chapter-difficulty" { i class="ph ph-cell-signal-full" {} " " (meta.difficulty) }
                span class="chapter-duration" { i class="ph ph-clock" {} " " (meta.duration) }
                span class="chapter-category" { i class="ph ph-tag" {} " " (meta.category) }
            }
            div class="chapter-status" {
                @if completed {
                    span class="complete-badge completed" { i class="ph-fill ph-check-circle" {} " Completed" }
                }
                div class="chapter-rating" title=(format!("{} of {} stars", stars, MAX_RATING)) {
                    @for star in 1..=MAX_RATING {
                        @if star <= stars {
                            i class="ph-fill ph-star active" {}
                        } @else {
                            i class="ph ph-star" {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_metadata() {
        // Act
        let html = chapter_header(&ChapterMeta::fallback(4), None, false).into_string();

        // Assert
        assert!(html.contains(r#"<span class="chapter-badge">Chapter 4</span>"#));
        assert!(html.contains(r#"<h1 class="chapter-title">Chapter 4</h1>"#));
        assert!(html.contains("General"));
        assert!(!html.contains("Completed"));
        assert_eq!(html.matches("ph-star active").count(), 0);
    }

    #[test]
    fn test_header_rating_and_completion() {
        let html = chapter_header(&ChapterMeta::fallback(1), Some(3), true).into_string();
        assert_eq!(html.matches("ph-fill ph-star active").count(), 3);
        assert_eq!(html.matches(r#"<i class="ph ph-star">"#).count(), 2);
        assert!(html.contains("Completed"));
        assert!(html.contains("3 of 5 stars"));
    }
}
