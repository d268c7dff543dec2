//! Course content as served by the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend identifier of a module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub i64);

/// Backend identifier of a topic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(pub i64);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named grouping of topics within a curriculum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

/// A single learning unit with an optional external resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub resource_link: Option<String>,
    #[serde(default)]
    pub order_index: i32,
}

impl Topic {
    /// The resource link, if present and not blank.
    pub fn link(&self) -> Option<&str> {
        self.resource_link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Body text, empty when absent.
    pub fn body(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// A topic addressed within its module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TopicRef {
    pub module: ModuleId,
    pub topic: TopicId,
}

/// Sort course items by their backend ordering, ties broken by id.
pub fn sort_modules(modules: &mut [Module]) {
    modules.sort_by_key(|m| (m.order_index, m.id));
}

/// Sort topics by their backend ordering, ties broken by id.
pub fn sort_topics(topics: &mut [Topic]) {
    topics.sort_by_key(|t| (t.order_index, t.id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_decoding_tolerates_nulls() {
        let topic: Topic = serde_json::from_str(
            r#"{"id": 7, "title": "Intro", "content": null, "resource_link": null, "order_index": 2, "created_by": 1}"#,
        )
        .unwrap();
        assert_eq!(topic.id, TopicId(7));
        assert_eq!(topic.link(), None);
        assert_eq!(topic.body(), "");
    }

    #[test]
    fn test_topic_requires_title() {
        assert!(serde_json::from_str::<Topic>(r#"{"id": 7}"#).is_err());
    }

    #[test]
    fn test_blank_link_is_no_link() {
        let topic = Topic {
            id: TopicId(1),
            title: "t".into(),
            content: None,
            resource_link: Some("   ".into()),
            order_index: 0,
        };
        assert_eq!(topic.link(), None);
    }

    #[test]
    fn test_sort_topics() {
        let mk = |id, order_index| Topic {
            id: TopicId(id),
            title: String::new(),
            content: None,
            resource_link: None,
            order_index,
        };
        let mut topics = vec![mk(3, 1), mk(1, 2), mk(2, 1)];
        sort_topics(&mut topics);
        let ids: Vec<i64> = topics.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
