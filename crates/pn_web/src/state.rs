use pn_content::ContentSource;
use pn_core::{Config, Dataset, Overview};
use std::sync::Arc;

/// Shared by every handler. The dataset and its aggregates are immutable,
/// so no lock is needed.
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub overview: Overview,
    pub config: Config,
    pub content: Arc<dyn ContentSource>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: Config, content: Arc<dyn ContentSource>) -> Self {
        let overview = Overview::compute(dataset.articles());
        Self {
            dataset,
            overview,
            config,
            content,
        }
    }
}
