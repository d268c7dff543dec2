//! Hash-based routing for the course viewer.

use super::{ModuleId, TopicId, TopicRef};
use crate::utils::dom;

/// Application routes for hash-based navigation.
/// URL format: `#/` or `#/modules/{module_id}/topics/{topic_id}`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Course overview: #/ or empty hash
    Course,
    /// Selected topic: #/modules/3/topics/12
    Topic(TopicRef),
}

impl AppRoute {
    /// Parse URL hash into a route. Unknown hashes map to the overview.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["modules", module, "topics", topic] => {
                match (module.parse::<i64>(), topic.parse::<i64>()) {
                    (Ok(module), Ok(topic)) => Self::Topic(TopicRef {
                        module: ModuleId(module),
                        topic: TopicId(topic),
                    }),
                    _ => Self::Course,
                }
            }
            _ => Self::Course,
        }
    }

    /// Convert route to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Course => "#/".to_string(),
            Self::Topic(r) => format!("#/modules/{}/topics/{}", r.module, r.topic),
        }
    }

    /// Selected topic, if any.
    pub fn topic(&self) -> Option<TopicRef> {
        match self {
            Self::Course => None,
            Self::Topic(r) => Some(*r),
        }
    }

    /// Navigate to this route.
    ///
    /// Sets `location.hash` so a `hashchange` event fires and the router
    /// picks the route up like a back/forward navigation.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(module: i64, topic: i64) -> AppRoute {
        AppRoute::Topic(TopicRef {
            module: ModuleId(module),
            topic: TopicId(topic),
        })
    }

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), AppRoute::Course);
        assert_eq!(AppRoute::from_hash("#"), AppRoute::Course);
        assert_eq!(AppRoute::from_hash("#/"), AppRoute::Course);
        assert_eq!(AppRoute::from_hash("#/modules/3/topics/12"), topic(3, 12));
        assert_eq!(AppRoute::from_hash("#/modules/3/topics/12/"), topic(3, 12));
        assert_eq!(AppRoute::from_hash("#/modules/x/topics/12"), AppRoute::Course);
        assert_eq!(AppRoute::from_hash("#/modules/3"), AppRoute::Course);
    }

    #[test]
    fn test_route_to_hash() {
        assert_eq!(AppRoute::Course.to_hash(), "#/");
        assert_eq!(topic(3, 12).to_hash(), "#/modules/3/topics/12");
        assert_eq!(AppRoute::from_hash(&topic(5, 9).to_hash()), topic(5, 9));
    }
}
