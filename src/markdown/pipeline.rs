//! Substitution pipeline converting chapter markdown to HTML.
//!
//! The pipeline is a fixed, ordered list of regular expression rewrites.
//! There is no tokenizer and no syntax tree: each stage sees the raw text
//! produced by the previous stage. Constructs that span stages (a link
//! inside bold text, inline code inside a list item) only work when the
//! patterns happen to compose.
//!
//! Known limitations kept on purpose:
//! - bold and italic markers pair greedily within a line, so a line with
//!   two bold spans renders as a single span with stray markers inside
//! - headings, list items and emphasis are rewritten before code fences,
//!   so markdown inside a fenced block is still transformed
//! - nothing is HTML escaped

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Pipeline variant.
///
/// `Basic` mirrors the first reader iteration: bare tags, blockquotes, no
/// tables. `Rich` is the later iteration: styled classes, tables and links
/// opening in a new browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flavor {
    Basic,
    #[default]
    Rich,
}

static HEADING_3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").expect("heading pattern is valid"));
static HEADING_2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("heading pattern is valid"));
static HEADING_1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").expect("heading pattern is valid"));

// Header row, separator row with at least one dash, then every following
// line up to a blank line or the end of the text.
static TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^[ \t]*\|(.+)\|[ \t]*\n[ \t]*\|[-:| \t]*-[-:| \t]*\|[ \t]*$((?:\n[^\n]*\S[^\n]*)*)",
    )
    .expect("table pattern is valid")
});

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- (.+)$").expect("list item pattern is valid"));
static LIST_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^<li>.*</li>(?:\n<li>.*</li>)*$").expect("list run pattern is valid")
});

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*)\*").expect("italic pattern is valid"));

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("fence pattern is valid"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));
static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^---$").expect("rule pattern is valid"));
static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").expect("blockquote pattern is valid"));

static BLOCK_CLOSE_THEN_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</h[1-6]>|</table>|</ul>|</pre>|</blockquote>|<hr[^>]*>)<br>")
        .expect("block close pattern is valid")
});
static BREAK_THEN_BLOCK_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<br>(<h[1-6]|<table|<ul|<pre|<blockquote|<hr)")
        .expect("block open pattern is valid")
});
static NESTED_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<p>){2,}").expect("nested open pattern is valid"));
static NESTED_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:</p>){2,}").expect("nested close pattern is valid"));
static PARAGRAPH_BEFORE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<p>(<h[1-6]|<table|<ul|<pre|<blockquote|<hr)")
        .expect("paragraph open pattern is valid")
});
static PARAGRAPH_AFTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(</h[1-6]>|</table>|</ul>|</pre>|</blockquote>|<hr[^>]*>)</p>")
        .expect("paragraph close pattern is valid")
});

/// Regex substitution renderer.
///
/// Stateless: the same input always produces the same output, and a
/// renderer can be shared freely between chapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineRenderer {
    flavor: Flavor,
}

impl PipelineRenderer {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Renders markdown text to an HTML fragment.
    ///
    /// Never fails. Malformed markdown produces different, possibly ugly,
    /// HTML. Empty input renders to an empty string.
    pub fn render(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let rich = self.flavor == Flavor::Rich;
        let html = text.replace("\r\n", "\n");

        let html = self.headings(&html);
        let html = if rich { render_tables(&html) } else { html };
        let html = self.lists(&html);
        let html = BOLD.replace_all(&html, "<strong>${1}</strong>").into_owned();
        let html = ITALIC.replace_all(&html, "<em>${1}</em>").into_owned();
        let html = self.code_blocks(&html);
        let html = self.inline_code(&html);
        let html = self.links(&html);
        let html = RULE.replace_all(&html, self.rule_tag()).into_owned();
        let html = if rich {
            html
        } else {
            BLOCKQUOTE
                .replace_all(&html, "<blockquote>${1}</blockquote>")
                .into_owned()
        };

        fold_paragraphs(&html)
    }

    fn headings(&self, text: &str) -> String {
        let (h3, h2, h1) = match self.flavor {
            Flavor::Rich => (
                r#"<h3 class="content-heading-3">${1}</h3>"#,
                r#"<h2 class="content-heading-2">${1}</h2>"#,
                r#"<h1 class="content-heading-1">${1}</h1>"#,
            ),
            Flavor::Basic => ("<h3>${1}</h3>", "<h2>${1}</h2>", "<h1>${1}</h1>"),
        };

        let html = HEADING_3.replace_all(text, h3);
        let html = HEADING_2.replace_all(&html, h2);
        HEADING_1.replace_all(&html, h1).into_owned()
    }

    fn lists(&self, text: &str) -> String {
        let open = match self.flavor {
            Flavor::Rich => r#"<ul class="content-list">"#,
            Flavor::Basic => "<ul>",
        };

        let items = LIST_ITEM.replace_all(text, "<li>${1}</li>");
        LIST_RUN
            .replace_all(&items, |caps: &Captures| {
                format!("{}{}</ul>", open, caps[0].replace('\n', ""))
            })
            .into_owned()
    }

    fn code_blocks(&self, text: &str) -> String {
        let pre = match self.flavor {
            Flavor::Rich => r#"<pre class="code-block">"#,
            Flavor::Basic => "<pre>",
        };

        CODE_FENCE
            .replace_all(text, |caps: &Captures| match caps.get(1) {
                Some(lang) => format!(
                    r#"{}<code class="language-{}">{}</code></pre>"#,
                    pre,
                    lang.as_str(),
                    &caps[2]
                ),
                None => format!("{}<code>{}</code></pre>", pre, &caps[2]),
            })
            .into_owned()
    }

    fn inline_code(&self, text: &str) -> String {
        let replacement = match self.flavor {
            Flavor::Rich => r#"<code class="inline-code">${1}</code>"#,
            Flavor::Basic => "<code>${1}</code>",
        };

        outside_code_blocks(text, |segment| {
            INLINE_CODE.replace_all(segment, replacement).into_owned()
        })
    }

    fn links(&self, text: &str) -> String {
        let replacement = match self.flavor {
            Flavor::Rich => r#"<a href="${2}" target="_blank" rel="noopener">${1}</a>"#,
            Flavor::Basic => r#"<a href="${2}">${1}</a>"#,
        };

        LINK.replace_all(text, replacement).into_owned()
    }

    fn rule_tag(&self) -> &'static str {
        match self.flavor {
            Flavor::Rich => r#"<hr class="content-divider">"#,
            Flavor::Basic => "<hr>",
        }
    }
}

/// Restructures pipe tables into `<table>` markup.
///
/// The body runs until a blank line or the end of the text, so a line
/// without pipes directly under the table becomes a one cell row. Cells are
/// trimmed. The outer pipes of a row are dropped, interior empty cells are
/// kept, so ragged rows produce rows of differing width.
fn render_tables(text: &str) -> String {
    TABLE
        .replace_all(text, |caps: &Captures| {
            let header: String = split_cells(&caps[1])
                .iter()
                .map(|cell| format!("<th>{}</th>", cell))
                .collect();

            let body: String = caps[2]
                .split('\n')
                .filter(|row| !row.trim().is_empty())
                .map(|row| {
                    let cells: String = split_cells(row)
                        .iter()
                        .map(|cell| format!("<td>{}</td>", cell))
                        .collect();
                    format!("<tr>{}</tr>", cells)
                })
                .collect();

            format!(
                r#"<table class="content-table"><thead><tr>{}</tr></thead><tbody>{}</tbody></table>"#,
                header, body
            )
        })
        .into_owned()
}

fn split_cells(row: &str) -> Vec<&str> {
    let row = row.trim();
    let row = row.strip_prefix('|').unwrap_or(row);
    let row = row.strip_suffix('|').unwrap_or(row);
    row.split('|').map(str::trim).collect()
}

/// Applies `transform` to every segment outside `<pre>...</pre>` blocks.
fn outside_code_blocks(text: &str, transform: impl Fn(&str) -> String) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("<pre") {
        let Some(len) = rest[start..].find("</pre>") else {
            break;
        };
        let end = start + len + "</pre>".len();

        result.push_str(&transform(&rest[..start]));
        result.push_str(&rest[start..end]);
        rest = &rest[end..];
    }

    result.push_str(&transform(rest));
    result
}

/// Folds line breaks into paragraphs and unwraps block elements.
fn fold_paragraphs(text: &str) -> String {
    let folded = outside_code_blocks(text, |segment| {
        segment.replace("\n\n", "</p><p>").replace('\n', "<br>")
    });

    let html = format!("<p>{}</p>", folded);
    let html = BLOCK_CLOSE_THEN_BREAK.replace_all(&html, "${1}</p><p>");
    let html = BREAK_THEN_BLOCK_OPEN.replace_all(&html, "</p><p>${1}");
    let html = NESTED_OPEN.replace_all(&html, "<p>");
    let html = NESTED_CLOSE.replace_all(&html, "</p>");
    let html = html.replace("<p></p>", "");
    let html = PARAGRAPH_BEFORE_BLOCK.replace_all(&html, "${1}");
    PARAGRAPH_AFTER_BLOCK.replace_all(&html, "${1}").into_owned()
}
