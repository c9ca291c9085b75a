use std::fmt;

/// A resolved location in the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    TopicList,
    CreateTopic,
    TopicDetail { id: String },
}

impl Route {
    /// Maps a path onto a route; unknown paths land on the topic list.
    pub fn resolve(path: &str) -> Route {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] => Route::Home,
            ["topics"] => Route::TopicList,
            ["topics", "new"] => Route::CreateTopic,
            ["topics", id] if !id.is_empty() => Route::TopicDetail { id: id.to_string() },
            _ => Route::TopicList,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::TopicList => "/topics".to_string(),
            Route::CreateTopic => "/topics/new".to_string(),
            Route::TopicDetail { id } => format!("/topics/{}", id),
        }
    }

    /// Index of the tab highlighted for this route.
    pub fn tab_index(&self) -> usize {
        match self {
            Route::Home => 0,
            Route::TopicList | Route::TopicDetail { .. } => 1,
            Route::CreateTopic => 2,
        }
    }

    pub fn next_tab(&self) -> Route {
        match self {
            Route::Home => Route::TopicList,
            Route::TopicList | Route::TopicDetail { .. } => Route::CreateTopic,
            Route::CreateTopic => Route::Home,
        }
    }

    pub fn previous_tab(&self) -> Route {
        match self {
            Route::Home => Route::CreateTopic,
            Route::TopicList | Route::TopicDetail { .. } => Route::Home,
            Route::CreateTopic => Route::TopicList,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
