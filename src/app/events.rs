use crossterm::event::{KeyEvent, MouseEvent};

use crate::api::Topic;
use crate::utils::error::Result;

#[derive(Debug)]
pub enum AppEvent {
    Input(InputEvent),
    Tick,
    Api(ApiEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Completions of background work, tagged with the activation that started them.
#[derive(Debug)]
pub enum ApiEvent {
    TopicsLoaded {
        activation: u64,
        result: Result<Vec<Topic>>,
    },
    TopicLoaded {
        activation: u64,
        result: Result<Topic>,
    },
    TopicCreated {
        activation: u64,
        result: Result<()>,
    },
    RedirectDue {
        activation: u64,
    },
}

impl ApiEvent {
    pub fn activation(&self) -> u64 {
        match self {
            ApiEvent::TopicsLoaded { activation, .. }
            | ApiEvent::TopicLoaded { activation, .. }
            | ApiEvent::TopicCreated { activation, .. }
            | ApiEvent::RedirectDue { activation } => *activation,
        }
    }
}
