//! # Site Assembly
//!
//! Reads every note in a notes directory, renders it through the core
//! pipeline, and writes one page per note plus `index.html`.

pub mod note;
pub mod page;

pub use note::{Note, slug_from_path};
pub use page::{index_body, note_body, page};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::io::{self, IoError};

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to read note {path}: {source}")]
    ReadNote { path: PathBuf, source: IoError },
    #[error("Failed to write page {path}: {source}")]
    WritePage { path: PathBuf, source: IoError },
    #[error(transparent)]
    Scan(#[from] IoError),
}

/// Everything a build needs. The stamp is passed in so output is reproducible.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub notes_dir: PathBuf,
    pub out_dir: PathBuf,
    pub title: String,
    pub built_at: DateTime<Utc>,
}

impl SiteOptions {
    pub fn new(notes_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>, title: &str) -> Self {
        Self {
            notes_dir: notes_dir.into(),
            out_dir: out_dir.into(),
            title: title.to_string(),
            built_at: Utc::now(),
        }
    }
}

/// Builds the whole site and returns the notes that were written, in index order.
///
/// Any I/O failure aborts the build.
pub fn build_site(opts: &SiteOptions) -> Result<Vec<Note>, SiteError> {
    log::info!(
        "Building site from {} into {}",
        opts.notes_dir.display(),
        opts.out_dir.display()
    );

    let sources = io::scan_markdown_files(&opts.notes_dir)?;
    let mut notes = Vec::with_capacity(sources.len());

    for path in &sources {
        let source = io::read_file(path).map_err(|source| SiteError::ReadNote {
            path: path.clone(),
            source,
        })?;
        let note = Note::from_source(path, &source);
        log::debug!("Rendered {} as {}", path.display(), note.file_name());

        let html = page(
            &format!("{} — {}", note.title, opts.title),
            &note_body(&note),
            opts.built_at,
            "./",
        );
        write_page(&opts.out_dir.join(note.file_name()), &html)?;
        notes.push(note);
    }

    let index = page(
        &opts.title,
        &index_body(&opts.title, &notes),
        opts.built_at,
        "./",
    );
    write_page(&opts.out_dir.join("index.html"), &index)?;

    log::info!("Wrote {} note page(s) and index.html", notes.len());
    Ok(notes)
}

fn write_page(path: &Path, html: &str) -> Result<(), SiteError> {
    io::write_file(path, html).map_err(|source| SiteError::WritePage {
        path: path.to_path_buf(),
        source,
    })
}
