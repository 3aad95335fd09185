use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One record of the research dataset.
///
/// Every field is always present: values that are missing or `null` in the
/// source JSON are replaced with an empty string (or `None` for the image).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "string_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub link: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: ContentType,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_default")]
    pub source: String,
}

impl Article {
    pub fn has_image(&self) -> bool {
        self.image_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

fn string_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Category tag of an article.
///
/// Values outside the known set are preserved verbatim in `Unknown` so that
/// statistics can still report them; they never satisfy a type filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ContentType {
    Post,
    Video,
    Liveblog,
    Episode,
    Gallery,
    Unknown(String),
}

impl ContentType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "post" => Self::Post,
            "video" => Self::Video,
            "liveblog" => Self::Liveblog,
            "episode" => Self::Episode,
            "gallery" => Self::Gallery,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => "post",
            Self::Video => "video",
            Self::Liveblog => "liveblog",
            Self::Episode => "episode",
            Self::Gallery => "gallery",
            Self::Unknown(raw) => raw,
        }
    }

    /// Arabic display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Post => "مقال",
            Self::Video => "فيديو",
            Self::Liveblog => "بث مباشر",
            Self::Episode => "حلقة",
            Self::Gallery => "معرض صور",
            Self::Unknown(raw) => raw,
        }
    }

    /// Key used when counting articles per type.
    pub fn stats_key(&self) -> &str {
        match self {
            Self::Unknown(raw) if raw.is_empty() => "unknown",
            other => other.as_str(),
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<Option<String>> for ContentType {
    fn from(raw: Option<String>) -> Self {
        raw.map(|raw| Self::parse(&raw)).unwrap_or_default()
    }
}

impl From<ContentType> for String {
    fn from(kind: ContentType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection of an article used by the headlines view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub id: u64,
    pub title: String,
    pub link: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub date: String,
}

impl From<&Article> for Headline {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            link: article.link.clone(),
            kind: article.kind.clone(),
            date: article.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_default() {
        let article: Article =
            serde_json::from_str(r#"{"id": 7, "title": "غزة", "date": null}"#).unwrap();

        assert_eq!(article.id, 7);
        assert_eq!(article.title, "غزة");
        assert_eq!(article.excerpt, "");
        assert_eq!(article.date, "");
        assert_eq!(article.kind, ContentType::Unknown(String::new()));
        assert!(!article.has_image());
    }

    #[test]
    fn test_content_type_wire_format() {
        let article: Article = serde_json::from_str(
            r#"{"id": 1, "type": "liveblog", "image_url": "https://example.com/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(article.kind, ContentType::Liveblog);
        assert!(article.has_image());

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["type"], "liveblog");
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let article: Article = serde_json::from_str(r#"{"type": "podcast"}"#).unwrap();
        assert_eq!(article.kind, ContentType::Unknown("podcast".to_string()));
        assert_eq!(article.kind.label(), "podcast");
        assert_eq!(serde_json::to_value(&article).unwrap()["type"], "podcast");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ContentType::Video.label(), "فيديو");
        assert_eq!(ContentType::Liveblog.label(), "بث مباشر");
        assert_eq!(ContentType::default().stats_key(), "unknown");
    }

    #[test]
    fn test_empty_image_url_is_not_an_image() {
        let article: Article = serde_json::from_str(r#"{"image_url": ""}"#).unwrap();
        assert!(!article.has_image());
    }
}
