use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{AppMode, AppState};
use crate::app::views::FormField;
use crate::ui::spinner;

pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Form
            Constraint::Length(3), // Feedback
        ])
        .split(area);

    let title = Paragraph::new("Create New Topic")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(title, chunks[0]);

    render_form_fields(f, chunks[1], state);
    render_feedback(f, chunks[2], state);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &AppState) {
    let field_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); FormField::ALL.len()])
        .split(area);

    let form = &state.create_topic.form;
    let editing = state.mode == AppMode::Form;

    for (field, chunk) in FormField::ALL.iter().zip(field_chunks.iter()) {
        let is_current = editing && *field == form.current_field;
        let style = if is_current {
            Style::default().bg(Color::Blue).fg(Color::White)
        } else {
            Style::default()
        };

        let border_style = if is_current {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let mut value = form.value(*field).to_string();
        if is_current {
            value.push('_');
        }

        let widget = Paragraph::new(value)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label())
                    .border_style(border_style),
            )
            .style(style);

        f.render_widget(widget, *chunk);
    }
}

fn render_feedback(f: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.create_topic;

    let (text, color) = if view.submitting {
        (format!("{} Creating topic...", spinner(state.tick)), Color::Cyan)
    } else if view.success {
        ("Topic created successfully! Returning to the topic list...".to_string(), Color::Green)
    } else if let Some(error) = &view.error {
        (error.clone(), Color::Red)
    } else {
        (
            "Tab/Shift+Tab: Navigate fields, Enter on last field or Ctrl+S: Submit, Esc: Stop editing".to_string(),
            Color::Gray,
        )
    };

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
