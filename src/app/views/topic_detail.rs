use super::Fetch;
use crate::api::Topic;
use crate::utils::error::Result;

pub const LOAD_TOPIC_FALLBACK: &str = "Failed to load topic.";

#[derive(Debug, Clone, Default)]
pub struct TopicDetailView {
    /// Route parameter captured when the view was activated.
    pub topic_id: String,
    pub state: Fetch<Topic>,
    pub scroll: u16,
}

impl TopicDetailView {
    pub fn begin(&mut self, topic_id: &str) {
        self.topic_id = topic_id.to_string();
        self.state = Fetch::Loading;
        self.scroll = 0;
    }

    pub fn finish(&mut self, result: Result<Topic>) {
        self.state = match result {
            Ok(topic) => Fetch::Loaded(topic),
            Err(e) => Fetch::Errored(e.user_message(LOAD_TOPIC_FALLBACK)),
        };
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.state.data()
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HelpCenterError;
    use reqwest::StatusCode;

    #[test]
    fn not_found_is_a_plain_failure() {
        let mut view = TopicDetailView::default();
        view.begin("999");
        assert_eq!(view.topic_id, "999");
        assert!(view.state.is_loading());

        view.finish(Err(HelpCenterError::Api {
            status: StatusCode::NOT_FOUND,
            detail: Some("Topic not found".to_string()),
        }));
        assert_eq!(view.state.error(), Some("Topic not found"));
        assert!(view.topic().is_none());
    }

    #[test]
    fn reactivation_resets_scroll() {
        let mut view = TopicDetailView::default();
        view.begin("1");
        view.scroll_down();
        view.scroll_down();
        view.scroll_up();
        assert_eq!(view.scroll, 1);

        view.begin("2");
        assert_eq!(view.scroll, 0);
        assert_eq!(view.topic_id, "2");
    }
}
