use super::router::Route;
use super::views::{CreateTopicView, TopicDetailView, TopicListView};

/// Oldest history entries are dropped past this many.
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Command,
    Form,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub route: Route,
    pub last_key: Option<char>,

    /// Routes entered, oldest first, capped at `MAX_HISTORY`; `back` pops from here.
    pub history: Vec<Route>,
    /// Bumped on each view activation so late responses can be told apart.
    pub activation: u64,

    pub command_input: String,
    pub status_message: String,
    pub tick: u64,

    pub topic_list: TopicListView,
    pub topic_detail: TopicDetailView,
    pub create_topic: CreateTopicView,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            route: Route::Home,
            last_key: None,

            history: Vec::new(),
            activation: 0,

            command_input: String::new(),
            status_message: "Ready".to_string(),
            tick: 0,

            topic_list: TopicListView::default(),
            topic_detail: TopicDetailView::default(),
            create_topic: CreateTopicView::default(),
        }
    }

    /// Enters `route` as a fresh activation and returns its id.
    pub fn enter(&mut self, route: Route) -> u64 {
        self.activation += 1;
        self.mode = if route == Route::CreateTopic {
            AppMode::Form
        } else {
            AppMode::Normal
        };
        self.route = route;
        self.last_key = None;
        self.activation
    }

    pub fn push_history(&mut self, route: Route) {
        self.history.push(route);
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
    }

    pub fn is_current(&self, activation: u64) -> bool {
        self.activation == activation
    }

    /// How many times `route` was navigated to.
    pub fn visits(&self, route: &Route) -> usize {
        self.history.iter().filter(|r| *r == route).count()
    }

    pub fn set_status_message(&mut self, msg: &str) {
        self.status_message = msg.to_string();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
