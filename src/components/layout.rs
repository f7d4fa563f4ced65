//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use crate::config::Theme;

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and body structure across
/// the index and chapter pages. The theme is applied as a `data-theme`
/// attribute on the body so stylesheets can switch palettes.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `site_title`: Course title appended to the page title
/// * `stylesheets`: CSS file paths to include
/// * `theme`: Page color theme
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    title: &str,
    site_title: &str,
    stylesheets: &[&str],
    theme: Theme,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_title) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body data-theme=[theme.data_attr()] {
                div class="app" {
                    (body)
                }
                (footer())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_light() {
        // Act
        let page = page_wrapper(
            "Chapter 1",
            "Angular",
            &["assets/chapter.css"],
            Theme::Light,
            html! { p { "body" } },
        )
        .into_string();

        // Assert
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Chapter 1 - Angular</title>"));
        assert!(page.contains(r#"href="assets/chapter.css""#));
        assert!(page.contains("<p>body</p>"));
        assert!(!page.contains("data-theme"));
    }

    #[test]
    fn test_page_wrapper_dark() {
        let page = page_wrapper("T", "S", &[], Theme::Dark, html! {}).into_string();
        assert!(page.contains(r#"<body data-theme="dark">"#));
    }
}
