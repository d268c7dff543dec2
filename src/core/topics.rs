//! Per-module topic list cache.
//!
//! Topic lists are fetched lazily, the first time a module is expanded or
//! browsed, and kept for the rest of the session. A list that is loading
//! is not fetched a second time; a failed load can be retried.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{ModuleId, Topic};

/// Load state of a list fetched from the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(Arc<[T]>),
    Failed(String),
}

impl<T> ListState<T> {
    /// Items when loaded, empty otherwise.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }

    /// Error message of a failed load.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl<T> From<Result<Vec<T>, String>> for ListState<T> {
    fn from(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) => Self::Ready(items.into()),
            Err(message) => Self::Failed(message),
        }
    }
}

/// Load state of one module's topic list.
pub type TopicListState = ListState<Topic>;

/// Topic lists keyed by module.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopicCache {
    entries: HashMap<ModuleId, TopicListState>,
}

impl TopicCache {
    pub fn get(&self, module: ModuleId) -> Option<&TopicListState> {
        self.entries.get(&module)
    }

    /// Loaded topics of a module, empty when not (yet) available.
    pub fn topics(&self, module: ModuleId) -> &[Topic] {
        self.get(module).map(ListState::items).unwrap_or(&[])
    }

    /// Whether a fetch for `module` should be started.
    pub fn needs_fetch(&self, module: ModuleId) -> bool {
        matches!(
            self.entries.get(&module),
            None | Some(TopicListState::Failed(_))
        )
    }

    /// Mark `module` as loading. Returns `false` (and changes nothing) when
    /// a fetch is already running or the list is cached.
    pub fn begin_load(&mut self, module: ModuleId) -> bool {
        if !self.needs_fetch(module) {
            return false;
        }
        self.entries.insert(module, TopicListState::Loading);
        true
    }

    /// Store the outcome of a fetch.
    pub fn finish(&mut self, module: ModuleId, result: Result<Vec<Topic>, String>) {
        self.entries.insert(module, result.into());
    }
}
