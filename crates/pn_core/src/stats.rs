use serde::Serialize;
use std::collections::BTreeMap;

use crate::dates;
use crate::types::Article;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_articles: usize,
    pub date_range: DateRange,
    pub article_types: BTreeMap<String, usize>,
    pub articles_with_images: usize,
}

/// Aggregates shown on the home page, computed in a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub stats: Statistics,
    /// `(YYYY-MM, count)` pairs in ascending month order.
    pub timeline: Vec<(String, usize)>,
}

impl Overview {
    pub fn compute(articles: &[Article]) -> Self {
        let mut stats = Statistics {
            total_articles: articles.len(),
            ..Statistics::default()
        };
        let mut months: BTreeMap<String, usize> = BTreeMap::new();

        for article in articles {
            *stats
                .article_types
                .entry(article.kind.stats_key().to_string())
                .or_default() += 1;

            if article.has_image() {
                stats.articles_with_images += 1;
            }

            let Some(month) = dates::month_bucket(&article.date) else {
                continue;
            };
            *months.entry(month.to_string()).or_default() += 1;

            let range = &mut stats.date_range;
            if range.start.as_deref().map_or(true, |start| article.date.as_str() < start) {
                range.start = Some(article.date.clone());
            }
            if range.end.as_deref().map_or(true, |end| article.date.as_str() > end) {
                range.end = Some(article.date.clone());
            }
        }

        Self {
            stats,
            timeline: months.into_iter().collect(),
        }
    }
}
