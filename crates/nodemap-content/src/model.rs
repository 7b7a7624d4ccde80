//! Content records as delivered by the hosted backend.

use serde::{Deserialize, Serialize};

/// The content collections the navigator knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Projects,
    Posts,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Projects, CollectionKind::Posts];

    /// Display label used for category-root node titles.
    pub fn label(self) -> &'static str {
        match self {
            CollectionKind::Projects => "Projects",
            CollectionKind::Posts => "Blog",
        }
    }
}

/// One entry of a content collection.
///
/// Fields beyond `id` and `title` are optional in the backend payload and
/// default to empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_deserializes_with_missing_optional_fields() {
        let item: ContentItem =
            serde_json::from_str(r#"{"id": "p1", "title": "Portfolio"}"#).unwrap();
        assert_eq!(item.id, "p1");
        assert_eq!(item.title, "Portfolio");
        assert!(item.excerpt.is_empty());
        assert!(item.media.is_empty());
        assert_eq!(item.link, None);
        assert_eq!(item.date, None);
    }

    #[test]
    fn collection_kind_uses_lowercase_wire_names() {
        let kind: CollectionKind = serde_json::from_str(r#""projects""#).unwrap();
        assert_eq!(kind, CollectionKind::Projects);
    }
}
