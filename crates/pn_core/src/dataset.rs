use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::dates;
use crate::types::Article;
use crate::{Error, Result};

/// The article collection, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    path: PathBuf,
    articles: Vec<Article>,
    malformed_dates: usize,
    duplicate_ids: usize,
}

impl Dataset {
    /// Reads and decodes a JSON array of articles.
    ///
    /// A missing or undecodable file is an error: the caller must not serve
    /// searches over a silently empty dataset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Dataset(format!("failed to read {}: {}", path.display(), e))
        })?;
        let articles: Vec<Article> = serde_json::from_str(&raw).map_err(|e| {
            Error::Dataset(format!("failed to parse {}: {}", path.display(), e))
        })?;

        let dataset = Self::from_articles(articles).with_path(path);
        info!(
            "📚 Loaded {} articles from {}",
            dataset.len(),
            dataset.path.display()
        );
        if dataset.malformed_dates > 0 {
            warn!(
                "{} articles have dates that are not zero-padded ISO prefixes; range filters compare them as plain strings",
                dataset.malformed_dates
            );
        }
        if dataset.duplicate_ids > 0 {
            warn!("{} articles share an id with an earlier article", dataset.duplicate_ids);
        }
        Ok(dataset)
    }

    pub fn from_articles(articles: Vec<Article>) -> Self {
        let malformed_dates = articles
            .iter()
            .filter(|a| !a.date.is_empty() && !dates::is_iso_prefix(&a.date))
            .count();

        let mut seen = HashSet::with_capacity(articles.len());
        let duplicate_ids = articles.iter().filter(|a| !seen.insert(a.id)).count();

        Self {
            path: PathBuf::new(),
            articles,
            malformed_dates,
            duplicate_ids,
        }
    }

    fn with_path(mut self, path: &Path) -> Self {
        self.path = path.to_path_buf();
        self
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn malformed_dates(&self) -> usize {
        self.malformed_dates
    }

    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }

    /// First article with the given id.
    pub fn find(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_dataset() {
        let file = write_dataset(
            r#"[
                {"id": 1, "title": "غزة تحت القصف", "excerpt": "", "link": "https://a", "date": "2024-01-15", "type": "post", "image_url": null, "source": "الجزيرة نت"},
                {"id": 2, "title": "تطورات الضفة", "date": "15/01/2024", "type": "video"},
                {"id": 2, "title": "مكرر"}
            ]"#,
        );

        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.path(), file.path());
        assert_eq!(dataset.malformed_dates(), 1);
        assert_eq!(dataset.duplicate_ids(), 1);
        assert_eq!(dataset.articles()[1].kind, ContentType::Video);
        assert_eq!(dataset.find(2).map(|a| a.title.as_str()), Some("تطورات الضفة"));
        assert!(dataset.find(99).is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Dataset::load("/nonexistent/articles_combined.json").unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = write_dataset(r#"{"articles": []}"#);
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_empty_array_loads() {
        let file = write_dataset("[]");
        let dataset = Dataset::load(file.path()).unwrap();
        assert!(dataset.is_empty());
    }
}
