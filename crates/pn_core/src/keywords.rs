use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::types::Article;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Serializes as `{keyword: count}` with keys in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCounts(pub Vec<KeywordCount>);

impl Serialize for KeywordCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.keyword, &entry.count)?;
        }
        map.end()
    }
}

/// Splits a comma separated keyword list, dropping blanks and repeats.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for keyword in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
        if !keywords.iter().any(|seen| seen == keyword) {
            keywords.push(keyword.to_string());
        }
    }
    keywords
}

/// Number of articles whose title or excerpt contains each keyword verbatim.
pub fn keyword_counts(articles: &[Article], keywords: &[String]) -> KeywordCounts {
    let counts = keywords
        .iter()
        .map(|keyword| KeywordCount {
            keyword: keyword.clone(),
            count: articles
                .iter()
                .filter(|a| a.title.contains(keyword.as_str()) || a.excerpt.contains(keyword.as_str()))
                .count(),
        })
        .collect();
    KeywordCounts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentType;

    fn article(title: &str, excerpt: &str) -> Article {
        Article {
            id: 0,
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            link: String::new(),
            date: String::new(),
            kind: ContentType::Post,
            image_url: None,
            source: String::new(),
        }
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            parse_keywords(" غزة, رفح ,,غزة, "),
            vec!["غزة".to_string(), "رفح".to_string()]
        );
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ").is_empty());
    }

    #[test]
    fn test_counts_each_article_once() {
        let articles = vec![
            article("غزة", "غزة"),
            article("رفح", "قصف على غزة"),
            article("الضفة", ""),
        ];
        let keywords = parse_keywords("غزة,رفح,القدس");

        let counts = keyword_counts(&articles, &keywords);
        assert_eq!(
            counts.0,
            vec![
                KeywordCount { keyword: "غزة".into(), count: 2 },
                KeywordCount { keyword: "رفح".into(), count: 1 },
                KeywordCount { keyword: "القدس".into(), count: 0 },
            ]
        );
    }

    #[test]
    fn test_counts_are_case_sensitive() {
        let articles = vec![article("Gaza", "")];
        let counts = keyword_counts(&articles, &["gaza".to_string()]);
        assert_eq!(counts.0[0].count, 0);
    }

    #[test]
    fn test_serializes_in_request_order() {
        let articles = vec![article("رفح", "غزة")];
        let keywords = parse_keywords("غزة,القدس,رفح,Gaza");

        let json = serde_json::to_string(&keyword_counts(&articles, &keywords)).unwrap();
        assert_eq!(json, r#"{"غزة":1,"القدس":0,"رفح":1,"Gaza":0}"#);
    }
}
