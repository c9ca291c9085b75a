pub mod create_topic;
pub mod topic_detail;
pub mod topic_list;

pub use create_topic::{CreateTopicView, FormField, TopicForm};
pub use topic_detail::TopicDetailView;
pub use topic_list::TopicListView;

/// Lifecycle of a single fetch: `Idle -> Loading -> Loaded | Errored`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch<T> {
    Idle,
    Loading,
    Loaded(T),
    Errored(String),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Fetch::Idle
    }
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Errored(message) => Some(message),
            _ => None,
        }
    }
}
