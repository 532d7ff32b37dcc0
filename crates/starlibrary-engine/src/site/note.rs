use std::path::Path;

use crate::parsing::{document_title, parse_str};
use crate::render::render_html;

/// One rendered note, ready to be wrapped in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub slug: String,
    pub title: String,
    pub html: String,
}

impl Note {
    /// Parses and renders a note's source text.
    ///
    /// The title is the first node's text when that node is a heading,
    /// otherwise the file stem.
    pub fn from_source(path: &Path, source: &str) -> Self {
        let blocks = parse_str(source);
        let stem = file_stem(path);
        let title = document_title(&blocks)
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| stem.clone());

        Self {
            slug: slug_from_path(path),
            title,
            html: render_html(&blocks),
        }
    }

    /// Output file name for this note's page.
    pub fn file_name(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// `My Note.md` -> `my-note`.
pub fn slug_from_path(path: &Path) -> String {
    file_stem(path).to_lowercase().replace(' ', "-")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
