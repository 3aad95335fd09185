//! Daily news reports exported as Word documents.
//!
//! A report is first laid out as a list of [`Block`]s so the wording can be
//! checked without unpacking a `.docx`, then rendered by [`render_docx`].

use thiserror::Error;

pub mod docx;
pub mod report;

pub use docx::{render_docx, DOCX_MIME};
pub use report::{build_report, filename, Block, Report, Span};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to render document: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;
