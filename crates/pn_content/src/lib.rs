//! Full article bodies fetched from the publisher's site.
//!
//! The dataset only carries titles and excerpts. The body is downloaded on
//! demand, reduced to plain text and cached for the lifetime of the process.

use thiserror::Error;

pub mod extract;
pub mod fetcher;

pub use extract::extract_main_text;
pub use fetcher::{ContentSource, HttpContentFetcher};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No article content found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, FetchError>;
