pub mod screens;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::router::Route;
use crate::app::state::{AppMode, AppState};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct UI {}

impl UI {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Top tabs
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Status bar
            ])
            .split(f.size());

        // Render top tabs
        self.render_tabs(f, chunks[0], state);

        // Render main content based on current route
        match &state.route {
            Route::Home => screens::home::render(f, chunks[1]),
            Route::TopicList => screens::topics::render_topic_list(f, chunks[1], state),
            Route::TopicDetail { .. } => screens::topics::render_topic_detail(f, chunks[1], state),
            Route::CreateTopic => screens::create_topic::render(f, chunks[1], state),
        }

        // Render status bar
        self.render_status_bar(f, chunks[2], state);

        // Render command input if in command mode
        if state.mode == AppMode::Command {
            self.render_command_input(f, f.size(), state);
        }
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let titles = vec!["Home", "Topics", "New Topic"];

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("Help Center"))
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .select(state.route.tab_index());

        f.render_widget(tabs, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),     // Left side
                Constraint::Length(36), // Right side
            ])
            .split(area);

        // Left side - route, mode and status
        let left_content = format!(
            " {} | Mode: {} | {}",
            state.route,
            match state.mode {
                AppMode::Normal => "NORMAL",
                AppMode::Command => "COMMAND",
                AppMode::Form => "FORM",
            },
            state.status_message
        );

        let left_paragraph = Paragraph::new(left_content)
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(left_paragraph, chunks[0]);

        // Right side - help text
        let help_text = match (state.mode, &state.route) {
            (AppMode::Command, _) => "ESC:cancel Enter:exec",
            (AppMode::Form, _) => "ESC:normal Tab:field ^S:submit",
            (AppMode::Normal, Route::TopicList) => "j/k:move Enter:open n:new r:reload",
            (AppMode::Normal, Route::TopicDetail { .. }) => "j/k:scroll Esc:back r:reload",
            (AppMode::Normal, Route::CreateTopic) => "i:edit Esc:back q:quit",
            (AppMode::Normal, Route::Home) => "q:quit :cmd Tab:nav",
        };

        let right_paragraph = Paragraph::new(help_text)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(right_paragraph, chunks[1]);
    }

    fn render_command_input(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let popup_area = centered_rect(60, 3, area);

        // Clear the area
        f.render_widget(Clear, popup_area);

        let input_text = format!(":{}", state.command_input);
        let input_paragraph = Paragraph::new(input_text)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Command"));

        f.render_widget(input_paragraph, popup_area);
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn spinner(tick: u64) -> &'static str {
    SPINNER[(tick % SPINNER.len() as u64) as usize]
}

/// A rect of `percent_x` width and `height` rows, centered in `r`.
pub(crate) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical_margin = r.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_sits_in_the_middle() {
        let area = Rect::new(0, 0, 100, 41);
        let popup = centered_rect(60, 3, area);
        assert_eq!(popup.height, 3);
        assert_eq!(popup.y, 19);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.x, 20);
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner(0), "|");
        assert_eq!(spinner(5), "/");
    }
}
