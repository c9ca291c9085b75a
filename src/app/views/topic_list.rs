use super::Fetch;
use crate::api::Topic;
use crate::utils::error::Result;

pub const LOAD_TOPICS_FALLBACK: &str = "Failed to load topics.";

#[derive(Debug, Clone, Default)]
pub struct TopicListView {
    pub state: Fetch<Vec<Topic>>,
    pub selected_index: usize,
}

impl TopicListView {
    /// Fresh activation: drops whatever the last visit fetched.
    pub fn begin(&mut self) {
        self.state = Fetch::Loading;
        self.selected_index = 0;
    }

    pub fn finish(&mut self, result: Result<Vec<Topic>>) {
        self.state = match result {
            Ok(topics) => Fetch::Loaded(topics),
            Err(e) => Fetch::Errored(e.user_message(LOAD_TOPICS_FALLBACK)),
        };
        self.selected_index = 0;
    }

    pub fn loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn topics(&self) -> &[Topic] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn selected(&self) -> Option<&Topic> {
        self.topics().get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.topics().len() {
            self.selected_index += 1;
        }
    }

    pub fn go_to_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.selected_index = self.topics().len().saturating_sub(1);
    }
}
