use serde::Serialize;

use crate::dates;
use crate::params::Params;
use crate::types::ContentType;

/// Search parameters exactly as received from a caller. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct RawQuery {
    pub q: Option<String>,
    /// `type` parameter
    pub kind: Option<String>,
    pub content_type: Option<String>,
    pub scope: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl RawQuery {
    pub fn from_params(params: &Params) -> Self {
        Self {
            q: params.owned("q"),
            kind: params.owned("type"),
            content_type: params.owned("content_type"),
            scope: params.owned("scope"),
            date_from: params.owned("date_from"),
            date_to: params.owned("date_to"),
        }
    }

    /// Resolves `(scope, content type)`.
    ///
    /// Requests that carry `content_type` but no `scope` use the legacy
    /// layout where `type` names the searched fields (`all`, `title`,
    /// `excerpt`). Otherwise `type` is the content type, with
    /// `content_type` as a fallback.
    fn scope_and_kind(&self) -> (Option<&str>, Option<&str>) {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.trim().is_empty())
        }

        if self.scope.is_none() && non_empty(&self.content_type).is_some() {
            (non_empty(&self.kind), non_empty(&self.content_type))
        } else {
            (
                non_empty(&self.scope),
                non_empty(&self.kind).or_else(|| non_empty(&self.content_type)),
            )
        }
    }
}

/// Which text fields a keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Title,
    Content,
    #[default]
    Both,
}

impl Scope {
    /// Unrecognised values fall back to `Both`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "title" => Self::Title,
            "content" | "excerpt" => Self::Content,
            "both" | "all" | "" => Self::Both,
            other => {
                tracing::debug!("Unknown search scope {:?}, searching both fields", other);
                Self::Both
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentFilter {
    #[default]
    Any,
    Only(ContentType),
    /// A type name outside the known set; matches no article.
    Unrecognized(String),
}

impl ContentFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            return Self::Any;
        }
        match ContentType::parse(raw) {
            ContentType::Unknown(other) => Self::Unrecognized(other),
            known => Self::Only(known),
        }
    }

    pub fn matches(&self, kind: &ContentType) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == kind,
            Self::Unrecognized(_) => false,
        }
    }
}

/// One end of an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateBound {
    #[default]
    Open,
    At(String),
    /// Not a zero-padded ISO date prefix; matches no article.
    Invalid(String),
}

impl DateBound {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Self::Open
        } else if dates::is_iso_prefix(raw) {
            Self::At(raw.to_string())
        } else {
            Self::Invalid(raw.to_string())
        }
    }
}

/// A parsed search request.
///
/// The keyword is stored lowercased so the engine lowercases it only once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    keyword: Option<String>,
    pub scope: Scope,
    pub content_type: ContentFilter,
    pub date_from: DateBound,
    pub date_to: DateBound,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawQuery) -> Self {
        let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();
        let (scope, kind) = raw.scope_and_kind();

        Self::new()
            .with_keyword(&field(&raw.q))
            .with_scope(Scope::parse(scope.unwrap_or_default()))
            .with_content_type(kind.unwrap_or_default())
            .with_date_from(&field(&raw.date_from))
            .with_date_to(&field(&raw.date_to))
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        let keyword = keyword.trim();
        self.keyword = (!keyword.is_empty()).then(|| keyword.to_lowercase());
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.content_type = ContentFilter::parse(content_type);
        self
    }

    pub fn with_date_from(mut self, date: &str) -> Self {
        self.date_from = DateBound::parse(date);
        self
    }

    pub fn with_date_to(mut self, date: &str) -> Self {
        self.date_to = DateBound::parse(date);
        self
    }

    /// Lowercased keyword, if any.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_raw_query_has_no_filters() {
        let query = Query::from_raw(&RawQuery::default());
        assert_eq!(query, Query::new());
        assert_eq!(query.scope, Scope::Both);
        assert_eq!(query.content_type, ContentFilter::Any);
    }

    #[test]
    fn test_keyword_is_trimmed_and_lowercased() {
        let query = Query::new().with_keyword("  Gaza Strip ");
        assert_eq!(query.keyword(), Some("gaza strip"));
        assert!(Query::new().with_keyword("   ").keyword().is_none());
    }

    #[test]
    fn test_scope_aliases() {
        assert_eq!(Scope::parse("title"), Scope::Title);
        assert_eq!(Scope::parse("excerpt"), Scope::Content);
        assert_eq!(Scope::parse("CONTENT"), Scope::Content);
        assert_eq!(Scope::parse("all"), Scope::Both);
        assert_eq!(Scope::parse("everything"), Scope::Both);
    }

    #[test]
    fn test_content_filter_parsing() {
        assert_eq!(ContentFilter::parse(""), ContentFilter::Any);
        assert_eq!(ContentFilter::parse("all"), ContentFilter::Any);
        assert_eq!(
            ContentFilter::parse("video"),
            ContentFilter::Only(ContentType::Video)
        );
        assert_eq!(
            ContentFilter::parse("podcast"),
            ContentFilter::Unrecognized("podcast".to_string())
        );
        assert!(!ContentFilter::parse("podcast").matches(&ContentType::Unknown("podcast".into())));
    }

    #[test]
    fn test_date_bounds() {
        assert_eq!(DateBound::parse(""), DateBound::Open);
        assert_eq!(
            DateBound::parse("2024-01-01"),
            DateBound::At("2024-01-01".to_string())
        );
        assert_eq!(
            DateBound::parse("01/01/2024"),
            DateBound::Invalid("01/01/2024".to_string())
        );
    }

    fn raw(pairs: &[(&str, &str)]) -> RawQuery {
        RawQuery::from_params(&Params::from_pairs(
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        ))
    }

    #[test]
    fn test_content_type_parameter_as_fallback() {
        let query = Query::from_raw(&raw(&[("q", "غزة"), ("content_type", "episode"), ("scope", "title")]));
        assert_eq!(query.content_type, ContentFilter::Only(ContentType::Episode));
        assert_eq!(query.scope, Scope::Title);
        assert_eq!(query.keyword(), Some("غزة"));

        let query = Query::from_raw(&raw(&[("type", "video"), ("content_type", "post"), ("scope", "both")]));
        assert_eq!(query.content_type, ContentFilter::Only(ContentType::Video));
    }

    #[test]
    fn test_legacy_layout_reads_scope_from_type() {
        let query = Query::from_raw(&raw(&[("type", "title"), ("content_type", "video")]));
        assert_eq!(query.scope, Scope::Title);
        assert_eq!(query.content_type, ContentFilter::Only(ContentType::Video));

        let query = Query::from_raw(&raw(&[("type", "all"), ("content_type", "all")]));
        assert_eq!(query, Query::new());
    }

    #[test]
    fn test_both_type_names_and_repeats_are_accepted() {
        let query = Query::from_raw(&raw(&[
            ("type", "video"),
            ("content_type", "video"),
            ("type", "post"),
        ]));
        assert_eq!(query.content_type, ContentFilter::Only(ContentType::Video));
        assert_eq!(query.scope, Scope::Both);
    }

    #[test]
    fn test_blank_content_type_keeps_type_as_filter() {
        let query = Query::from_raw(&raw(&[("type", "video"), ("content_type", "")]));
        assert_eq!(query.content_type, ContentFilter::Only(ContentType::Video));
        assert_eq!(query.scope, Scope::Both);
    }
}
