//! Integration tests for full site generation.

mod common;

use anyhow::Result;
use courseread::{Config, Progress, Theme, generate_site};
use std::fs;

#[test]
fn test_build_writes_every_page() -> Result<()> {
    // Arrange
    let course = common::create_course()?;
    let mut config = Config::new(course.chapters(), course.output());
    config.catalog = Some(course.catalog());

    // Act
    let summary = generate_site(&config)?;

    // Assert
    assert_eq!(summary.chapters, 3);
    assert_eq!(summary.index, course.output().join("index.html"));
    for page in ["index.html", "chapter-1.html", "chapter-2.html", "chapter-3.html"] {
        assert!(course.output().join(page).is_file(), "{} should exist", page);
    }
    for css in courseread::CSS_ASSETS {
        assert!(course.output().join("assets").join(css).is_file());
    }
    Ok(())
}

#[test]
fn test_chapter_page_content() -> Result<()> {
    // Arrange
    let course = common::create_course()?;
    let mut config = Config::new(course.chapters(), course.output());
    config.catalog = Some(course.catalog());

    // Act
    generate_site(&config)?;
    let html = fs::read_to_string(course.output().join("chapter-1.html"))?;

    // Assert
    assert!(html.contains("<title>Introduction to Angular - course</title>"));
    assert!(html.contains(r#"<h1 class="content-heading-1" id="heading-0">Introduction</h1>"#));
    assert!(html.contains(r#"<h2 class="content-heading-2" id="heading-1">Setup</h2>"#));
    assert!(html.contains(r#"<ul class="content-list"><li>Install Node</li><li>Install the CLI</li></ul>"#));
    assert!(html.contains(r#"<code class="language-bash">"#));
    assert!(html.contains(r#"target="_blank" rel="noopener""#));
    assert!(html.contains(r##"href="#heading-2""##));
    assert!(html.contains(r#"<span class="nav-btn prev disabled""#));
    assert!(html.contains(r#"href="chapter-2.html" rel="next""#));
    Ok(())
}

#[test]
fn test_missing_chapter_uses_placeholder() -> Result<()> {
    // Arrange
    let course = common::create_course()?;
    let mut config = Config::new(course.chapters(), course.output());
    config.catalog = Some(course.catalog());

    // Act
    generate_site(&config)?;
    let html = fs::read_to_string(course.output().join("chapter-2.html"))?;

    // Assert
    assert!(html.contains("Angular Components"));
    assert!(html.contains(r#"id="heading-0">Chapter 2</h1>"#));
    assert!(html.contains("This is a placeholder content for demonstration purposes."));
    Ok(())
}

#[test]
fn test_table_chapter_renders() -> Result<()> {
    let course = common::create_course()?;
    let config = Config::new(course.chapters(), course.output());

    generate_site(&config)?;
    let html = fs::read_to_string(course.output().join("chapter-3.html"))?;

    assert!(html.contains(
        r#"<table class="content-table"><thead><tr><th>Token</th><th>Scope</th></tr></thead><tbody><tr><td>HttpClient</td><td>root</td></tr></tbody></table>"#
    ));
    assert!(html.contains(r#"<span class="nav-btn next disabled""#));
    Ok(())
}

#[test]
fn test_progress_and_theme_reflected() -> Result<()> {
    // Arrange
    let course = common::create_course()?;
    let progress_path = course.root().join("progress.json");
    let mut progress = Progress::default();
    progress.toggle_completed(1);
    progress.toggle_bookmark(3);
    progress.rate(1, 4)?;
    progress.save(&progress_path)?;

    let mut config = Config::new(course.chapters(), course.output());
    config.catalog = Some(course.catalog());
    config.progress = Some(progress_path);
    config.theme = Theme::Dark;
    config.title = Some("Angular Course".to_string());

    // Act
    generate_site(&config)?;
    let index = fs::read_to_string(course.output().join("index.html"))?;
    let chapter = fs::read_to_string(course.output().join("chapter-1.html"))?;

    // Assert
    assert!(index.contains(r#"<body data-theme="dark">"#));
    assert!(index.contains("Welcome to Angular Course"));
    assert!(index.contains("1 of 3 chapters"));
    assert!(index.contains(r#"<h2 class="category-title">advanced</h2>"#));
    assert!(chapter.contains(r#"<a class="chapter-item active completed" href="chapter-1.html">"#));
    assert!(chapter.contains(r#"<a class="chapter-item bookmarked" href="chapter-3.html">"#));
    assert_eq!(chapter.matches("ph-fill ph-star active").count(), 4);
    Ok(())
}

#[test]
fn test_standard_engine_build() -> Result<()> {
    // Arrange
    let course = common::create_course()?;
    let mut config = Config::new(course.chapters(), course.output());
    config.engine = courseread::EngineKind::Standard;

    // Act
    generate_site(&config)?;
    let html = fs::read_to_string(course.output().join("chapter-1.html"))?;

    // Assert
    assert!(html.contains(r#"<h1 id="heading-0">Introduction</h1>"#));
    assert!(html.contains("<strong>platform</strong>"));
    Ok(())
}

#[test]
fn test_invalid_catalog_fails() -> Result<()> {
    let course = common::create_course()?;
    fs::write(course.catalog(), "{ not a list }")?;
    let mut config = Config::new(course.chapters(), course.output());
    config.catalog = Some(course.catalog());

    let err = generate_site(&config).expect_err("Malformed catalog should fail");

    assert!(format!("{:#}", err).contains("Invalid catalog format"));
    Ok(())
}
