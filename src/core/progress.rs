//! In-memory topic completion tracking.

use std::collections::HashSet;

use crate::models::{ModuleId, Topic, TopicRef};

/// Completed topics for the session.
///
/// Stored behind a signal and updated by replacing the whole map, so an
/// observer never sees a half-applied change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressMap {
    completed: HashSet<TopicRef>,
}

impl ProgressMap {
    /// Flag a topic as complete. Returns `false` if it already was.
    pub fn mark_complete(&mut self, topic: TopicRef) -> bool {
        self.completed.insert(topic)
    }

    pub fn is_complete(&self, topic: TopicRef) -> bool {
        self.completed.contains(&topic)
    }

    /// Percentage of `topics` completed in `module`, rounded to the nearest
    /// integer; `0` when the module has no known topics.
    pub fn completion_ratio(&self, module: ModuleId, topics: &[Topic]) -> u32 {
        if topics.is_empty() {
            return 0;
        }
        let done = topics
            .iter()
            .filter(|t| {
                self.is_complete(TopicRef {
                    module,
                    topic: t.id,
                })
            })
            .count();
        ((done as f64 / topics.len() as f64) * 100.0).round() as u32
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TopicId;

    const MODULE: ModuleId = ModuleId(1);

    fn topics(n: i64) -> Vec<Topic> {
        (1..=n)
            .map(|id| Topic {
                id: TopicId(id),
                title: format!("Topic {}", id),
                content: None,
                resource_link: None,
                order_index: id as i32,
            })
            .collect()
    }

    fn at(topic: i64) -> TopicRef {
        TopicRef {
            module: MODULE,
            topic: TopicId(topic),
        }
    }

    #[test]
    fn test_quarter_complete() {
        let mut progress = ProgressMap::default();
        progress.mark_complete(at(2));
        assert_eq!(progress.completion_ratio(MODULE, &topics(4)), 25);
    }

    #[test]
    fn test_empty_module_is_zero() {
        let mut progress = ProgressMap::default();
        progress.mark_complete(at(1));
        assert_eq!(progress.completion_ratio(MODULE, &[]), 0);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut progress = ProgressMap::default();
        assert!(progress.mark_complete(at(1)));
        let before = progress.completion_ratio(MODULE, &topics(4));
        assert!(!progress.mark_complete(at(1)));
        assert_eq!(progress.completion_ratio(MODULE, &topics(4)), before);
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn test_rounding() {
        let mut progress = ProgressMap::default();
        progress.mark_complete(at(1));
        assert_eq!(progress.completion_ratio(MODULE, &topics(3)), 33);
        progress.mark_complete(at(2));
        assert_eq!(progress.completion_ratio(MODULE, &topics(3)), 67);
    }

    #[test]
    fn test_other_module_not_counted() {
        let mut progress = ProgressMap::default();
        progress.mark_complete(TopicRef {
            module: ModuleId(9),
            topic: TopicId(1),
        });
        assert_eq!(progress.completion_ratio(MODULE, &topics(2)), 0);
    }
}
