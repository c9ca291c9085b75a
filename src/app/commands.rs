use super::router::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Route),
    Reload,
    Back,
    Quit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown("Empty command".to_string());
        }

        match parts[0] {
            "go" | "open" => {
                if parts.len() < 2 {
                    return Command::Unknown("Usage: go <path>".to_string());
                }
                Command::Go(Route::resolve(parts[1]))
            }
            "home" => Command::Go(Route::Home),
            "topics" | "list" => Command::Go(Route::TopicList),
            "new" | "create" => Command::Go(Route::CreateTopic),
            "topic" => {
                if parts.len() < 2 {
                    return Command::Unknown("Usage: topic <id>".to_string());
                }
                Command::Go(Route::TopicDetail {
                    id: parts[1].to_string(),
                })
            }
            "reload" | "r" => Command::Reload,
            "back" => Command::Back,
            "q" | "quit" => Command::Quit,
            _ => Command::Unknown(format!("Unknown command: {}", parts[0])),
        }
    }
}
