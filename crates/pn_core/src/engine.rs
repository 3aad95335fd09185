//! The filter engine behind the search page.
//!
//! `search` is a pure linear scan: every active criterion of the [`Query`]
//! must hold (logical AND) and matches keep their dataset order.

use serde::Serialize;

use crate::query::{DateBound, Query, Scope};
use crate::types::Article;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<'a> {
    pub matches: Vec<&'a Article>,
    pub total_count: usize,
}

pub fn search<'a>(articles: &'a [Article], query: &Query) -> SearchOutcome<'a> {
    let matches: Vec<&Article> = articles
        .iter()
        .filter(|article| matches(article, query))
        .collect();

    SearchOutcome {
        total_count: matches.len(),
        matches,
    }
}

pub fn matches(article: &Article, query: &Query) -> bool {
    matches_keyword(article, query)
        && query.content_type.matches(&article.kind)
        && within_lower(&article.date, &query.date_from)
        && within_upper(&article.date, &query.date_to)
}

fn matches_keyword(article: &Article, query: &Query) -> bool {
    let Some(keyword) = query.keyword() else {
        return true;
    };
    let contains = |field: &str| !field.is_empty() && field.to_lowercase().contains(keyword);

    match query.scope {
        Scope::Title => contains(&article.title),
        Scope::Content => contains(&article.excerpt),
        Scope::Both => contains(&article.title) || contains(&article.excerpt),
    }
}

// Lexicographic comparison on zero-padded ISO dates is chronological.
// An article without a date sorts before every bound.
fn within_lower(date: &str, bound: &DateBound) -> bool {
    match bound {
        DateBound::Open => true,
        DateBound::At(from) => date >= from.as_str(),
        DateBound::Invalid(_) => false,
    }
}

fn within_upper(date: &str, bound: &DateBound) -> bool {
    match bound {
        DateBound::Open => true,
        DateBound::At(to) => date <= to.as_str(),
        DateBound::Invalid(_) => false,
    }
}
