//! Table of contents extraction from rendered chapter HTML.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::util::{html_decode, strip_tags};

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([1-3])((?:\s[^>]*)?)>(.*?)</h[1-3]>").expect("heading pattern is valid")
});
static ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+id="[^"]*""#).expect("id pattern is valid"));

/// Navigation entry for one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub id: String,
}

impl TocEntry {
    /// Link target for this heading.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }

    /// Left indentation in rem for nested headings.
    pub fn indent(&self) -> u8 {
        self.level.saturating_sub(1)
    }
}

/// Rendered fragment with heading anchors and its navigation entries.
#[derive(Debug, Clone, Default)]
pub struct TableOfContents {
    pub html: String,
    pub entries: Vec<TocEntry>,
}

impl TableOfContents {
    /// Assigns sequential anchors to `h1`..`h3` headings.
    ///
    /// Headings receive `heading-0`, `heading-1`, ... in document order.
    /// The counter lives in this call only, so every chapter starts again
    /// at `heading-0`. An existing `id` attribute is replaced.
    ///
    /// # Arguments
    ///
    /// * `html`: Rendered chapter fragment
    ///
    /// # Returns
    ///
    /// Fragment with `id` attributes added plus one entry per heading
    pub fn generate(html: &str) -> Self {
        let mut entries = Vec::new();

        let html = HEADING
            .replace_all(html, |caps: &Captures| {
                let level: u8 = caps[1].parse().unwrap_or(1);
                let attrs = ID_ATTR.replace_all(&caps[2], "");
                let inner = &caps[3];
                let id = format!("heading-{}", entries.len());

                entries.push(TocEntry {
                    level,
                    text: html_decode(strip_tags(inner).trim()),
                    id: id.clone(),
                });

                format!(r#"<h{level}{attrs} id="{id}">{inner}</h{level}>"#)
            })
            .into_owned();

        Self { html, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
