//! Chapter markdown rendering with selectable engine.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use tracing::{debug, warn};

use super::pipeline::{Flavor, PipelineRenderer};
use crate::util::{html_decode, html_escape};

/// Rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Regex substitution pipeline in the given flavor.
    Pipeline(Flavor),
    /// comrak with GitHub Flavored Markdown extensions.
    Standard,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Pipeline(Flavor::Rich)
    }
}

/// Renders chapter markdown to an HTML fragment.
///
/// Defaults to the regex pipeline. The standard engine hands the text to
/// comrak instead. Either engine can have its annotated code blocks
/// (`<code class="language-X">`) highlighted by syntect using CSS classes.
///
/// Rendering never fails: empty or absent text gives an empty fragment,
/// and a highlighting failure leaves the block as rendered.
pub struct MarkdownRenderer<'a> {
    engine: Engine,
    pipeline: PipelineRenderer,
    options: Options<'a>,
    syntax_set: Option<SyntaxSet>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer using the rich regex pipeline without highlighting.
    pub fn new() -> Self {
        Self::with_engine(Engine::default())
    }

    /// Creates renderer for the given engine.
    ///
    /// For the standard engine comrak is configured with tables,
    /// strikethrough, autolinks and task lists. Raw HTML passes through,
    /// matching the pipeline which never escapes.
    pub fn with_engine(engine: Engine) -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.render.unsafe_ = true;

        let flavor = match engine {
            Engine::Pipeline(flavor) => flavor,
            Engine::Standard => Flavor::default(),
        };

        Self {
            engine,
            pipeline: PipelineRenderer::new(flavor),
            options,
            syntax_set: None,
        }
    }

    /// Enables syntect highlighting of annotated code blocks.
    pub fn highlighted(mut self) -> Self {
        self.syntax_set = Some(SyntaxSet::load_defaults_newlines());
        self
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `text`: Markdown content, or `None` when nothing was resolved
    ///
    /// # Returns
    ///
    /// HTML fragment, empty for empty or absent input
    pub fn render<'t>(&self, text: impl Into<Option<&'t str>>) -> String {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => return String::new(),
        };

        let html = match self.engine {
            Engine::Pipeline(_) => self.pipeline.render(text),
            Engine::Standard => comrak::markdown_to_html(text, &self.options),
        };

        let Some(syntax_set) = &self.syntax_set else {
            return html;
        };

        match highlight_code_blocks(&html, syntax_set) {
            Ok(highlighted) => highlighted,
            Err(e) => {
                warn!("Code highlighting skipped: {:#}", e);
                html
            }
        }
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(content.as_str()))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Replaces plain code block content with syntect highlighted HTML.
///
/// Finds `<code class="language-LANG">` blocks and rewrites their content
/// using CSS class names with the `hljs-` prefix. Blocks without a language
/// annotation are left untouched.
fn highlight_code_blocks(html: &str, syntax_set: &SyntaxSet) -> Result<String> {
    const OPEN: &str = "<code class=\"language-";

    let mut result = String::with_capacity(html.len());
    let mut last_end = 0;
    let mut search_pos = 0;

    while let Some(found) = html[search_pos..].find(OPEN) {
        let code_start = search_pos + found;
        let lang_start = code_start + OPEN.len();

        let Some(lang_len) = html[lang_start..].find('"') else {
            search_pos = lang_start;
            continue;
        };
        let lang_end = lang_start + lang_len;
        let language = &html[lang_start..lang_end];

        let Some(tag_len) = html[lang_end..].find('>') else {
            search_pos = lang_end;
            continue;
        };
        let content_start = lang_end + tag_len + 1;

        let Some(content_len) = html[content_start..].find("</code>") else {
            search_pos = content_start;
            continue;
        };
        let content_end = content_start + content_len;

        let code = html_decode(&html[content_start..content_end]);
        let highlighted = highlight_code(&code, language, syntax_set)
            .with_context(|| format!("Failed to highlight {} code block", language))?;

        result.push_str(&html[last_end..code_start]);
        result.push_str(OPEN);
        result.push_str(language);
        result.push_str("\">");
        result.push_str(&highlighted);
        result.push_str("</code>");

        last_end = content_end + "</code>".len();
        search_pos = last_end;
    }

    result.push_str(&html[last_end..]);
    Ok(result)
}

/// Highlights code with syntect using CSS classes.
///
/// Unknown languages fall back to escaped plain text.
fn highlight_code(code: &str, language: &str, syntax_set: &SyntaxSet) -> Result<String> {
    if code.is_empty() {
        return Ok(String::new());
    }

    let syntax = syntax_set
        .find_syntax_by_token(language)
        .or_else(|| syntax_set.find_syntax_by_extension(language));

    let Some(syntax) = syntax else {
        debug!("No syntax definition for language: {}", language);
        return Ok(html_escape(code));
    };

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        syntax,
        syntax_set,
        ClassStyle::SpacedPrefixed { prefix: "hljs-" },
    );

    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .context("Failed to parse line for syntax highlighting")?;
    }

    Ok(generator.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_and_absent() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act & Assert
        assert_eq!(renderer.render(""), "");
        assert_eq!(renderer.render(None::<&str>), "");
    }

    #[test]
    fn test_default_engine_is_rich_pipeline() {
        // Arrange & Act
        let renderer = MarkdownRenderer::default();

        // Assert
        assert_eq!(renderer.engine(), Engine::Pipeline(Flavor::Rich));
        assert_eq!(
            renderer.render("# Title"),
            r#"<h1 class="content-heading-1">Title</h1>"#
        );
    }

    #[test]
    fn test_render_basic_flavor() {
        // Arrange
        let renderer = MarkdownRenderer::with_engine(Engine::Pipeline(Flavor::Basic));

        // Act
        let html = renderer.render("> note");

        // Assert
        assert_eq!(html, "<blockquote>note</blockquote>");
    }

    #[test]
    fn test_render_standard_engine() {
        // Arrange
        let renderer = MarkdownRenderer::with_engine(Engine::Standard);
        let markdown = "# Hello\n\nThis is **bold** and ~~gone~~.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(html.contains("<h1>Hello</h1>"), "got: {}", html);
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_highlight_pipeline_code_block() {
        // Arrange
        let renderer = MarkdownRenderer::new().highlighted();
        let markdown = "```rust\nfn main() {\n    println!(\"hello\");\n}\n```";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(
            html.contains("<code class=\"language-rust\">"),
            "Should keep language class: {}",
            html
        );
        assert!(
            html.contains("<span class=\"hljs-"),
            "Should contain highlighting spans: {}",
            html
        );
        assert!(html.contains("println!"));
    }

    #[test]
    fn test_highlight_unknown_language_escapes() {
        // Arrange
        let renderer = MarkdownRenderer::new().highlighted();
        let markdown = "```unknownlang\na < b\n```";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(
            html.contains("<code class=\"language-unknownlang\">a &lt; b\n</code>"),
            "got: {}",
            html
        );
    }

    #[test]
    fn test_highlight_multibyte_code_and_text() {
        // Arrange
        let renderer = MarkdownRenderer::new().highlighted();
        let markdown = "Café `ß`\n\n```rust\nlet s = \"héllo 🦀\";\n```\n\nÜber **é";

        // Act
        let html = renderer.render(markdown);

        // Assert
        assert!(html.contains("<code class=\"language-rust\">"), "got: {}", html);
        assert!(html.contains("héllo 🦀"), "got: {}", html);
        assert!(html.contains(r#"<code class="inline-code">ß</code>"#), "got: {}", html);
        assert!(html.ends_with("<p>Über <em></em>é</p>"), "got: {}", html);
    }

    #[test]
    fn test_highlight_leaves_untagged_blocks() {
        // Arrange
        let renderer = MarkdownRenderer::new().highlighted();

        // Act
        let html = renderer.render("```\nplain\n```");

        // Assert
        assert_eq!(html, "<pre class=\"code-block\"><code>plain\n</code></pre>");
    }

    #[test]
    fn test_render_file() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");
        let path = dir.path().join("chap1.md");
        std::fs::write(&path, "## Section").expect("Should write markdown");

        // Act
        let html = MarkdownRenderer::new()
            .render_file(&path)
            .expect("Should render file");

        // Assert
        assert_eq!(html, r#"<h2 class="content-heading-2">Section</h2>"#);
    }

    #[test]
    fn test_render_file_missing() {
        let result = MarkdownRenderer::new().render_file("/nonexistent/chap1.md");
        assert!(result.is_err());
    }
}
