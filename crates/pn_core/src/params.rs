use std::collections::HashMap;

/// Decoded query-string pairs. A repeated key keeps its first value, so
/// duplicated parameters never reject a request.
#[derive(Debug, Clone, Default)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values = HashMap::new();
        for (key, value) in pairs {
            values.entry(key).or_insert(value);
        }
        Self(values)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let params = Params::from_pairs([
            ("type".to_string(), "video".to_string()),
            ("type".to_string(), "post".to_string()),
            ("q".to_string(), String::new()),
        ]);

        assert_eq!(params.get("type"), Some("video"));
        assert_eq!(params.get("q"), Some(""));
        assert_eq!(params.get("scope"), None);
    }
}
