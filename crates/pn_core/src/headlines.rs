use crate::types::{Article, Headline};

/// Headlines published on exactly `date`, in dataset order.
pub fn headlines(articles: &[Article], date: &str) -> Vec<Headline> {
    if date.is_empty() {
        return Vec::new();
    }
    articles
        .iter()
        .filter(|article| article.date == date)
        .map(Headline::from)
        .collect()
}

/// Articles that count towards a day's headlines, in full.
pub fn articles_on<'a>(articles: &'a [Article], date: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|article| !date.is_empty() && article.date == date)
        .collect()
}
