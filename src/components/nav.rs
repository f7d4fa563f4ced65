//! Chapter navigation component

use maud::{Markup, html};

use super::sidebar::chapter_href;
use crate::navigation::Position;

/// Renders previous and next links with the chapter counter
///
/// Links at the course bounds render as disabled buttons. The progress
/// bar shows how far through the course the current chapter is.
///
/// # Arguments
///
/// * `position`: Current chapter position
///
/// # Returns
///
/// Navigation markup
pub fn chapter_nav(position: Position) -> Markup {
    let width = format!("width: {:.1}%", position.percent());

    html! {
        nav class="chapter-nav" {
            @if let Some(prev) = position.prev() {
                a class="nav-btn prev" href=(chapter_href(prev)) rel="prev" {
                    i class="ph ph-arrow-left" {} " Previous"
                }
            } @else {
                span class="nav-btn prev disabled" aria-disabled="true" {
                    i class="ph ph-arrow-left" {} " Previous"
                }
            }
            div class="chapter-counter" {
                span { (position.label()) }
                div class="chapter-progress" {
                    div class="chapter-progress-fill" style=(width) {}
                }
            }
            @if let Some(next) = position.next() {
                a class="nav-btn next" href=(chapter_href(next)) rel="next" {
                    "Next " i class="ph ph-arrow-right" {}
                }
            } @else {
                span class="nav-btn next disabled" aria-disabled="true" {
                    "Next " i class="ph ph-arrow-right" {}
                }
            }
        }
    }
}
