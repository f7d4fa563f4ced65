//! Floating table of contents component

use maud::{Markup, html};

use crate::markdown::TocEntry;

/// Renders the floating table of contents
///
/// Uses a `details` element so the panel opens and closes without script.
/// Entries are indented by heading level. Renders nothing when the chapter
/// has no headings.
pub fn floating_toc(entries: &[TocEntry]) -> Markup {
    html! {
        @if !entries.is_empty() {
            details class="floating-toc" {
                summary class="toc-toggle" { i class="ph ph-list-bullets" {} " Contents" }
                nav class="toc-content" {
                    @for entry in entries {
                        a href=(entry.href())
                            class=(format!("toc-level-{}", entry.level))
                            style=(format!("padding-left: {}rem", entry.indent())) {
                            (entry.text)
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
    fn test_toc_entries() {
        // Arrange
        let entries = vec![
            TocEntry {
                level: 1,
                text: "Intro".to_string(),
                id: "heading-0".to_string(),
            },
            TocEntry {
                level: 3,
                text: "Deep".to_string(),
                id: "heading-1".to_string(),
            },
        ];

        // Act
        let html = floating_toc(&entries).into_string();

        // Assert
        assert!(html.contains(
            r##"<a href="#heading-0" class="toc-level-1" style="padding-left: 0rem">Intro</a>"##
        ));
        assert!(html.contains(r#"style="padding-left: 2rem">Deep</a>"#));
    }

    #[test]
    fn test_empty_toc() {
        assert_eq!(floating_toc(&[]).into_string(), "");
    }
}
